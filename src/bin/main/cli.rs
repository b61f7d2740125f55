use std::path::PathBuf;

use clap::Parser;
use flashread_core::{
    OrpMode, ReaderConfig, SourceFormat,
    settings::{DEFAULT_SKIP_WORDS, DEFAULT_WPM, DEFAULT_WPM_STEP},
};

#[derive(Parser, Debug)]
#[command(name = "flashread")]
#[command(version, about = "Read a text file one word at a time in the terminal")]
#[command(long_about = "
Flashread shows a document one word at a time at a fixed speed, with the
fixation letter of every word pinned to the same column.

Markdown and text extracted from PDFs are cleaned up before reading. PDF
files themselves are not parsed: extract the text first (for example with
pdftotext) and pass the result with --format pdf-extracted.

Diagnostics are off below warnings. Raise them with -v or RUST_LOG and
either send them to a file with --log-file or redirect stderr (2>file): the
reader owns the terminal, so log lines on the same tty draw over the word.
")]
pub struct Cli {
    /// File to read, or `-` for stdin
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Cleanup rules (plain, markdown, pdf-extracted). Defaults to the file
    /// extension, then plain.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<SourceFormat>,

    /// Initial speed in words per minute
    #[arg(short, long, default_value_t = DEFAULT_WPM)]
    pub wpm: u16,

    /// Fixation letter rule (spritz, center, first-vowel)
    #[arg(long, value_name = "MODE", default_value_t = OrpMode::Spritz)]
    pub orp: OrpMode,

    /// Words moved by a skip key
    #[arg(long, value_name = "WORDS", default_value_t = DEFAULT_SKIP_WORDS)]
    pub skip: usize,

    /// WPM change per speed key
    #[arg(long, value_name = "WPM", default_value_t = DEFAULT_WPM_STEP)]
    pub step: u16,

    /// Start playing right away
    #[arg(long)]
    pub autoplay: bool,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append log output to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            orp_mode: self.orp,
            wpm: self.wpm,
            skip_words: self.skip,
            wpm_step: self.step,
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}
