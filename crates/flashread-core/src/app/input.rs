impl<S> PlaybackEngine<S>
where
    S: TickScheduler,
{
    /// Apply one command. Only `Load` can fail.
    pub fn apply(&mut self, command: ReaderCommand) -> Result<(), LoadError> {
        match command {
            ReaderCommand::Load { text, format } => return self.load(&text, format),
            ReaderCommand::Play => self.play(),
            ReaderCommand::Pause => self.pause(),
            ReaderCommand::Toggle => self.toggle(),
            ReaderCommand::Restart => self.restart(),
            ReaderCommand::Close => self.close(),
            ReaderCommand::Tick(token) => self.on_tick(token),
            ReaderCommand::SkipForward => self.skip_forward(),
            ReaderCommand::SkipBackward => self.skip_backward(),
            ReaderCommand::SkipForwardBy(words) => self.skip_forward_by(words),
            ReaderCommand::SkipBackwardBy(words) => self.skip_backward_by(words),
            ReaderCommand::GoToWord(index) => self.go_to_word(index),
            ReaderCommand::GoToParagraph(index) => self.go_to_paragraph(index),
            ReaderCommand::NextParagraph => self.next_paragraph(),
            ReaderCommand::PreviousParagraph => self.previous_paragraph(),
            ReaderCommand::SetWordsPerMinute(wpm) => self.set_words_per_minute(wpm),
            ReaderCommand::IncreaseSpeed => self.increase_speed(),
            ReaderCommand::DecreaseSpeed => self.decrease_speed(),
            ReaderCommand::SetOrpMode(mode) => self.set_orp_mode(mode),
            ReaderCommand::CycleOrpMode => self.set_orp_mode(self.orp_mode().cycle()),
        }

        Ok(())
    }

    /// Apply every pending command in arrival order and return how many were
    /// handled. Failed loads are logged and leave the engine untouched.
    pub fn drain<C>(&mut self, source: &mut C) -> Result<usize, C::Error>
    where
        C: CommandSource,
    {
        let mut handled = 0usize;
        while let Some(command) = source.poll_command()? {
            if let Err(err) = self.apply(command) {
                debug!("playback: command rejected err={}", err);
            }
            handled += 1;
        }

        Ok(handled)
    }
}
