//! # Favorites
//!
//! The user's favorite characters for this run. Nothing is persisted.
//!
//! Entries keep insertion order and are keyed by [`Character::key`], so a
//! character appears at most once no matter how many times it is toggled.

use crate::swapi::Character;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Favorites {
    entries: Vec<Character>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, character: &Character) -> bool {
        self.entries.iter().any(|fav| fav.key() == character.key())
    }

    /// Removes the character if it is already a favorite, otherwise appends it.
    /// Returns `true` when the character is a favorite afterwards.
    pub fn toggle(&mut self, character: Character) -> bool {
        if self.contains(&character) {
            self.entries.retain(|fav| fav.key() != character.key());
            false
        } else {
            self.entries.push(character);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
