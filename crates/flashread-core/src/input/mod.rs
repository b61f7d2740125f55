//! Input abstraction layer.
//!
//! Every way of driving the engine (keys, navigation panes, timer ticks) is a
//! [`ReaderCommand`]. Hosts push commands into one [`CommandSource`] and the
//! engine drains it, which keeps all mutations on a single consumer.

mod mock;

pub use mock::QueuedInput;

use crate::{content::SourceFormat, orp::OrpMode, schedule::TickToken};

/// Logical actions consumed by the playback engine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReaderCommand {
    Load { text: String, format: SourceFormat },
    Play,
    Pause,
    Toggle,
    Restart,
    Close,
    /// Timer tick from the scheduler that issued `token`.
    Tick(TickToken),
    /// Skip by the configured step.
    SkipForward,
    SkipBackward,
    SkipForwardBy(usize),
    SkipBackwardBy(usize),
    GoToWord(usize),
    GoToParagraph(usize),
    NextParagraph,
    PreviousParagraph,
    SetWordsPerMinute(u16),
    IncreaseSpeed,
    DecreaseSpeed,
    SetOrpMode(OrpMode),
    /// Step to the next [`OrpMode`].
    CycleOrpMode,
}

/// Polled command provider.
pub trait CommandSource {
    type Error;

    fn poll_command(&mut self) -> Result<Option<ReaderCommand>, Self::Error>;
}
