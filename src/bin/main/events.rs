use std::{
    convert::Infallible,
    sync::mpsc::{Receiver, RecvError, TryRecvError},
};

use flashread_core::input::{CommandSource, ReaderCommand};

/// Everything the main loop reacts to: engine commands from the key and
/// tick threads plus the front-end-only signals.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppEvent {
    Command(ReaderCommand),
    Redraw,
    Quit,
}

/// Single consumer over the event channel.
///
/// [`ChannelInput::wait`] blocks for the next event, then the engine drains
/// whatever else is already queued through [`CommandSource`].
pub struct ChannelInput {
    events: Receiver<AppEvent>,
    pending: Option<ReaderCommand>,
    quit: bool,
}

impl ChannelInput {
    pub fn new(events: Receiver<AppEvent>) -> Self {
        Self {
            events,
            pending: None,
            quit: false,
        }
    }

    /// Block until something arrives. Returns `false` once the reader should
    /// shut down.
    pub fn wait(&mut self) -> bool {
        if self.quit {
            return false;
        }
        match self.events.recv() {
            Ok(event) => self.stash(event),
            Err(RecvError) => self.quit = true,
        }
        !self.quit
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn stash(&mut self, event: AppEvent) {
        match event {
            AppEvent::Command(command) => self.pending = Some(command),
            AppEvent::Redraw => {}
            AppEvent::Quit => self.quit = true,
        }
    }
}

impl CommandSource for ChannelInput {
    type Error = Infallible;

    fn poll_command(&mut self) -> Result<Option<ReaderCommand>, Self::Error> {
        if let Some(command) = self.pending.take() {
            return Ok(Some(command));
        }

        while !self.quit {
            match self.events.try_recv() {
                Ok(AppEvent::Command(command)) => return Ok(Some(command)),
                Ok(event) => self.stash(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.quit = true,
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    #[test]
    fn wait_then_drain_yields_commands_in_order() {
        let (tx, rx) = mpsc::channel();
        let mut input = ChannelInput::new(rx);
        tx.send(AppEvent::Command(ReaderCommand::Play)).unwrap();
        tx.send(AppEvent::Redraw).unwrap();
        tx.send(AppEvent::Command(ReaderCommand::SkipForward)).unwrap();

        assert!(input.wait());
        assert_eq!(input.poll_command().unwrap(), Some(ReaderCommand::Play));
        assert_eq!(input.poll_command().unwrap(), Some(ReaderCommand::SkipForward));
        assert_eq!(input.poll_command().unwrap(), None);
        assert!(!input.should_quit());
    }

    #[test]
    fn quit_stops_draining() {
        let (tx, rx) = mpsc::channel();
        let mut input = ChannelInput::new(rx);
        tx.send(AppEvent::Quit).unwrap();
        tx.send(AppEvent::Command(ReaderCommand::Play)).unwrap();

        assert!(!input.wait());
        assert_eq!(input.poll_command().unwrap(), None);
    }

    #[test]
    fn closed_channel_means_quit() {
        let (tx, rx) = mpsc::channel::<AppEvent>();
        drop(tx);
        let mut input = ChannelInput::new(rx);
        assert!(!input.wait());
    }
}
