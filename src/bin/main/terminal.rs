use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, PrintStyledContent, Stylize},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use flashread_core::{
    OrpMode,
    render::ReaderView,
    text_policy::{ELLIPSIS, preview_limited, section_secondary_label},
};

use crate::keys::HELP;

/// Horizontal position of the fixation letter, as a share of the width.
const ORP_ANCHOR_PERCENT: usize = 42;
const GUIDE: char = '│';

/// Alternate-screen session in raw mode. Dropping it restores the terminal.
pub struct TerminalView {
    out: Stdout,
    title: String,
}

impl TerminalView {
    pub fn enter(title: String) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        Ok(Self { out, title })
    }

    pub fn draw(&mut self, view: &ReaderView<'_>, orp_mode: OrpMode) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let width = usize::from(width.max(1));
        let word_row = height / 2;

        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            self.out,
            PrintStyledContent(fit(&self.title, width).attribute(Attribute::Bold))
        )?;

        if view.is_empty() {
            queue!(self.out, MoveTo(0, word_row), Print("(no document)"))?;
            return self.out.flush();
        }

        let (prefix, fixation, suffix) = view.word.as_tuple();
        let anchor = anchor_column(width);
        let start = anchor.saturating_sub(prefix.chars().count());

        queue!(
            self.out,
            MoveTo(to_col(anchor), word_row.saturating_sub(1)),
            Print(GUIDE),
            MoveTo(to_col(start), word_row),
            Print(prefix),
            PrintStyledContent(fixation.with(Color::Red).attribute(Attribute::Bold)),
            Print(suffix),
            MoveTo(to_col(anchor), word_row.saturating_add(1)),
            Print(GUIDE),
        )?;

        let status = status_line(view, orp_mode);
        queue!(
            self.out,
            MoveTo(0, height.saturating_sub(3)),
            Print(fit(&status, width)),
            MoveTo(0, height.saturating_sub(2)),
            Print(progress_bar(view.progress, width)),
            MoveTo(0, height.saturating_sub(1)),
            PrintStyledContent(fit(HELP, width).with(Color::DarkGrey)),
        )?;

        self.out.flush()
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn anchor_column(width: usize) -> usize {
    (width * ORP_ANCHOR_PERCENT / 100).max(1)
}

// Leaves room for the ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    preview_limited(text, width.saturating_sub(ELLIPSIS.len()))
}

fn to_col(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn status_line(view: &ReaderView<'_>, orp_mode: OrpMode) -> String {
    let paragraph = section_secondary_label(
        view.current_paragraph_index + 1,
        view.paragraphs.len(),
        "paragraphs",
    );
    let remaining = view.remaining.as_secs();

    format!(
        "{}  {} wpm  word {}/{}  {}  {}/{} in paragraph  {}%  {}:{:02} left  orp {}",
        view.status.label(),
        view.words_per_minute,
        view.current_index + 1,
        view.word_count,
        paragraph,
        view.paragraph_word_index,
        view.paragraph_word_total,
        view.progress_pct(),
        remaining / 60,
        remaining % 60,
        orp_mode,
    )
}

fn progress_bar(progress: f64, width: usize) -> String {
    let inner = width.saturating_sub(2);
    let filled = ((progress.clamp(0.0, 1.0) * inner as f64).round() as usize).min(inner);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(inner - filled))
}
