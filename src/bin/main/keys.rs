use std::{io, sync::mpsc::Sender, thread};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flashread_core::input::ReaderCommand;
use log::warn;

use crate::events::AppEvent;

/// Footer hint listing the key bindings.
pub const HELP: &str =
    "space play/pause  ←/h →/l skip  ↓/j ↑/k speed  [ ] paragraph  o orp  r restart  q quit";

pub fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppEvent::Quit);
    }

    let command = match key.code {
        KeyCode::Char(' ') => ReaderCommand::Toggle,
        KeyCode::Right | KeyCode::Char('l') => ReaderCommand::SkipForward,
        KeyCode::Left | KeyCode::Char('h') => ReaderCommand::SkipBackward,
        KeyCode::Up | KeyCode::Char('k') => ReaderCommand::IncreaseSpeed,
        KeyCode::Down | KeyCode::Char('j') => ReaderCommand::DecreaseSpeed,
        KeyCode::Char(']') => ReaderCommand::NextParagraph,
        KeyCode::Char('[') => ReaderCommand::PreviousParagraph,
        KeyCode::Char('o') => ReaderCommand::CycleOrpMode,
        KeyCode::Char('r') => ReaderCommand::Restart,
        KeyCode::Char('q') | KeyCode::Esc => return Some(AppEvent::Quit),
        _ => return None,
    };

    Some(AppEvent::Command(command))
}

/// Forward terminal events into the channel from a dedicated thread.
pub fn spawn_key_reader(events: Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("keys".to_owned())
        .spawn(move || {
            loop {
                let outgoing = match event::read() {
                    Ok(Event::Key(key)) => map_key(key),
                    Ok(Event::Resize(..)) => Some(AppEvent::Redraw),
                    Ok(_) => None,
                    Err(err) => {
                        warn!("keys: terminal read failed err={}", err);
                        Some(AppEvent::Quit)
                    }
                };

                if let Some(outgoing) = outgoing {
                    let quit = outgoing == AppEvent::Quit;
                    if events.send(outgoing).is_err() || quit {
                        break;
                    }
                }
            }
        })
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn bindings_map_to_engine_commands() {
        assert_eq!(
            map_key(press(KeyCode::Char(' '))),
            Some(AppEvent::Command(ReaderCommand::Toggle))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('l'))),
            Some(AppEvent::Command(ReaderCommand::SkipForward))
        );
        assert_eq!(
            map_key(press(KeyCode::Down)),
            Some(AppEvent::Command(ReaderCommand::DecreaseSpeed))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('o'))),
            Some(AppEvent::Command(ReaderCommand::CycleOrpMode))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('['))),
            Some(AppEvent::Command(ReaderCommand::PreviousParagraph))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(AppEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppEvent::Quit)
        );
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        let mut release = press(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
        assert_eq!(map_key(press(KeyCode::Char('z'))), None);
    }
}
