use crate::types::Turn;

/// Merges a time-ordered `(speaker, fragments)` stream into maximal
/// same-speaker turns.
///
/// A turn flushes exactly when the speaker label changes, and once more at
/// end of stream. Input order is trusted — the upstream segment order is the
/// time order, and nothing is re-sorted here.
///
/// An entry with no fragments (a segment whose interval match came up empty)
/// still moves `current_speaker`, but a flush with no accumulated words
/// emits nothing. So empty runs disappear silently, and two non-empty runs
/// of one speaker separated only by another speaker's empty run stay
/// separate turns.
#[derive(Debug, Default)]
pub struct TurnAggregator {
    turns: Vec<Turn>,
    current_speaker: Option<String>,
    current_words: Vec<String>,
}

impl TurnAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one entry. `fragments` may be empty.
    pub fn push<I>(&mut self, speaker: &str, fragments: I)
    where
        I: IntoIterator<Item = String>,
    {
        if self
            .current_speaker
            .as_deref()
            .is_some_and(|current| current != speaker)
        {
            self.flush();
        }

        self.current_words.extend(fragments);
        self.current_speaker = Some(speaker.to_string());
    }

    /// Flush the trailing run and return all turns.
    pub fn finish(mut self) -> Vec<Turn> {
        self.flush();
        self.turns
    }

    fn flush(&mut self) {
        if self.current_words.is_empty() {
            return;
        }
        if let Some(speaker) = self.current_speaker.clone() {
            self.turns.push(Turn {
                speaker,
                words: std::mem::take(&mut self.current_words),
            });
        }
    }
}
