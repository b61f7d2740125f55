//! Non-visual engine for an RSVP speed reader.
//!
//! Raw text flows through [`content`] (normalization and segmentation) into
//! [`app::PlaybackEngine`], which advances through the words on ticks from an
//! injected [`schedule::TickScheduler`] and exposes [`render::ReaderView`]
//! snapshots with the [`orp`] split of the current word.

pub mod app;
pub mod content;
pub mod error;
pub mod input;
pub mod orp;
pub mod render;
pub mod schedule;
pub mod settings;
pub mod text_policy;

pub use app::PlaybackEngine;
pub use content::{Document, Paragraph, SourceFormat};
pub use error::{LoadError, ParseError};
pub use orp::{OrpMode, WordSplit};
pub use settings::ReaderConfig;
