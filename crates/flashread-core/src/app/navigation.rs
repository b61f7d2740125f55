impl<S> PlaybackEngine<S>
where
    S: TickScheduler,
{
    pub fn skip_forward(&mut self) {
        self.skip_forward_by(self.config.skip_words);
    }

    pub fn skip_backward(&mut self) {
        self.skip_backward_by(self.config.skip_words);
    }

    pub fn skip_forward_by(&mut self, words: usize) {
        self.go_to_word(self.current_index.saturating_add(words));
    }

    pub fn skip_backward_by(&mut self, words: usize) {
        self.go_to_word(self.current_index.saturating_sub(words));
    }

    /// Jump to a word, clamped to the document. Keeps the play state.
    pub fn go_to_word(&mut self, index: usize) {
        if self.document.is_empty() {
            return;
        }

        self.current_index = index.min(self.last_index());
        self.refresh_position();
    }

    /// Pause and jump to the first word of a paragraph (clamped).
    pub fn go_to_paragraph(&mut self, paragraph_index: usize) {
        let Some(last_paragraph) = self.document.paragraph_count().checked_sub(1) else {
            return;
        };

        self.pause();
        let target = paragraph_index.min(last_paragraph);
        if let Some(paragraph) = self.document.paragraph(target) {
            debug!(
                "playback: go to paragraph target={} word={} preview={:?}",
                target, paragraph.word_range.start, paragraph.preview
            );
            self.current_index = paragraph.word_range.start;
        }
        self.refresh_position();
    }

    pub fn next_paragraph(&mut self) {
        let next = self.current_paragraph_index + 1;
        if next < self.document.paragraph_count() {
            self.go_to_paragraph(next);
        }
    }

    pub fn previous_paragraph(&mut self) {
        if self.document.is_empty() || self.current_paragraph_index == 0 {
            return;
        }

        self.go_to_paragraph(self.current_paragraph_index - 1);
    }

    /// `(position, total)` of the current word inside its paragraph,
    /// 1-based; `(0, 0)` with no document.
    pub fn paragraph_progress(&self) -> (usize, usize) {
        match self.document.paragraph(self.current_paragraph_index) {
            Some(paragraph) if paragraph.contains_word(self.current_index) => (
                self.current_index - paragraph.word_range.start + 1,
                paragraph.word_count(),
            ),
            _ => (0, 0),
        }
    }
}
