use crate::tokenizer::tokenize;
use std::collections::HashSet;

/// Words excluded from indexing and from query parsing.
#[derive(Debug, Default, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every space-separated word of `text`. Calling it again only adds.
    pub fn configure(&mut self, text: &str) {
        for word in tokenize(text) {
            if !self.words.contains(word) {
                self.words.insert(word.to_string());
            }
        }
    }

    pub fn is_stop(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Tokenize `text` and drop stop words, keeping order and repeats.
    pub fn split_no_stop<'a>(&self, text: &'a str) -> Vec<&'a str> {
        tokenize(text).into_iter().filter(|w| !self.is_stop(w)).collect()
    }
}
