//! A word dictionary with typed lookup errors.

use std::collections::HashMap;

use thiserror::Error;

/// Errors returned by [`Dictionary`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryError {
    /// The word is not in the dictionary.
    #[error("could not find the word you were looking for")]
    NotFound,

    /// `add` was called with a word that already has a definition.
    #[error("cannot add word because it already exists")]
    WordExists,

    /// `update` was called with a word that has no definition.
    #[error("cannot update word because it does not exist")]
    WordDoesNotExist,
}

/// Maps words to their definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the definition of `word`.
    pub fn search(&self, word: &str) -> Result<&str, DictionaryError> {
        self.entries
            .get(word)
            .map(String::as_str)
            .ok_or(DictionaryError::NotFound)
    }

    /// Adds a new word. Existing definitions are never overwritten.
    pub fn add(
        &mut self,
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        use std::collections::hash_map::Entry;

        match self.entries.entry(word.into()) {
            Entry::Occupied(_) => Err(DictionaryError::WordExists),
            Entry::Vacant(slot) => {
                slot.insert(definition.into());
                Ok(())
            }
        }
    }

    /// Replaces the definition of an existing word.
    pub fn update(&mut self, word: &str, definition: impl Into<String>) -> Result<(), DictionaryError> {
        match self.entries.get_mut(word) {
            Some(existing) => {
                *existing = definition.into();
                Ok(())
            }
            None => Err(DictionaryError::WordDoesNotExist),
        }
    }

    /// Removes a word. Removing a missing word is a no-op.
    pub fn delete(&mut self, word: &str) {
        self.entries.remove(word);
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(word, definition)| (word.into(), definition.into()))
                .collect(),
        }
    }
}
