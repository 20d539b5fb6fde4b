use crate::vocabulary::Vocabulary;
use rand::Rng;

/// Words per test. Not configurable.
pub const NUM_OF_WORDS: usize = 50;

/// Draws the target words for a session
#[derive(Debug)]
pub struct WordGenerator {
    vocabulary: Vocabulary,
    number_of_words: usize,
}

impl WordGenerator {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            number_of_words: NUM_OF_WORDS,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn generate(&self) -> Vec<String> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Each word is an independent uniform draw, so repeats are expected.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<String> {
        (0..self.number_of_words)
            .map(|_| self.vocabulary.pick(rng).to_owned())
            .collect()
    }
}
