use std::{
    fs::{self, OpenOptions},
    io::{self, Read},
    path::Path,
    process::ExitCode,
    sync::mpsc,
};

use anyhow::{Context, bail};
use clap::Parser;
use flashread_core::{PlaybackEngine, SourceFormat};
use log::{LevelFilter, info, trace};

use cli::Cli;
use events::ChannelInput;
use scheduler::ThreadScheduler;
use terminal::TerminalView;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/events.rs"]
mod events;
#[path = "main/keys.rs"]
mod keys;
#[path = "main/scheduler.rs"]
mod scheduler;
#[path = "main/terminal.rs"]
mod terminal;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli) {
        eprintln!("flashread: {err:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("flashread: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr unless `--log-file` is given. Stderr shares the tty
/// with the word display, so verbose runs should redirect it.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match cli.verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    let target = match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            env_logger::Target::Pipe(Box::new(file))
        }
        None => env_logger::Target::Stderr,
    };
    builder.target(target).init();
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (text, format, title) = read_source(cli)?;

    let (events_tx, events_rx) = mpsc::channel();
    let scheduler = ThreadScheduler::new(events_tx.clone());
    let mut engine = PlaybackEngine::new(scheduler, cli.reader_config());
    engine
        .load(&text, format)
        .with_context(|| format!("{title} has nothing to read as {format}"))?;
    info!(
        "flashread: loaded title={} format={} words={} paragraphs={}",
        title,
        format,
        engine.word_count(),
        engine.paragraphs().len()
    );

    let mut screen = TerminalView::enter(title).context("failed to set up the terminal")?;
    keys::spawn_key_reader(events_tx).context("failed to start the key reader")?;

    if cli.autoplay {
        engine.play();
    }
    screen.draw(&engine.view(), engine.orp_mode())?;

    let mut input = ChannelInput::new(events_rx);
    while input.wait() {
        let Ok(handled) = engine.drain(&mut input);
        if input.should_quit() {
            break;
        }
        trace!("flashread: drained commands={}", handled);
        screen.draw(&engine.view(), engine.orp_mode())?;
    }

    engine.close();
    Ok(())
}

/// Read the input and settle its format: `--format` wins, then the file
/// extension, then plain text.
fn read_source(cli: &Cli) -> anyhow::Result<(String, SourceFormat, String)> {
    if cli.reads_stdin() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok((text, cli.format.unwrap_or_default(), "stdin".to_owned()));
    }

    let path = cli.path.as_path();
    if is_pdf(path) {
        bail!(
            "{} is a PDF file; extract its text first and pass it with --format pdf-extracted",
            path.display()
        );
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let format = cli
        .format
        .or_else(|| SourceFormat::from_path(path))
        .unwrap_or_default();
    let title = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok((text, format, title))
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
