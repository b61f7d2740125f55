use std::collections::VecDeque;

use super::{CommandSource, ReaderCommand};

/// In-memory FIFO of commands, for tests and step-driven hosts.
#[derive(Default, Debug, Clone)]
pub struct QueuedInput {
    queue: VecDeque<ReaderCommand>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: ReaderCommand) {
        self.queue.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FromIterator<ReaderCommand> for QueuedInput {
    fn from_iter<I: IntoIterator<Item = ReaderCommand>>(commands: I) -> Self {
        Self {
            queue: commands.into_iter().collect(),
        }
    }
}

impl CommandSource for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_command(&mut self) -> Result<Option<ReaderCommand>, Self::Error> {
        Ok(self.queue.pop_front())
    }
}
