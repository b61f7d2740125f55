impl<S> PlaybackEngine<S>
where
    S: TickScheduler,
{
    pub fn current_word(&self) -> Option<&str> {
        self.document.word(self.current_index)
    }

    /// ORP split of the current word under the configured mode.
    pub fn current_split(&self) -> WordSplit<'_> {
        self.current_word()
            .map(|word| split_word(word, self.config.orp_mode))
            .unwrap_or(WordSplit::EMPTY)
    }

    pub fn view(&self) -> ReaderView<'_> {
        let (paragraph_word_index, paragraph_word_total) = self.paragraph_progress();
        ReaderView {
            status: self.status,
            word: self.current_split(),
            current_index: self.current_index,
            word_count: self.word_count(),
            progress: self.progress,
            words_per_minute: self.wpm,
            paragraphs: self.document.paragraphs(),
            current_paragraph_index: self.current_paragraph_index,
            paragraph_word_index,
            paragraph_word_total,
            remaining: self.remaining_time(),
        }
    }
}
