use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Outcome of toggling a dog in the favorites set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Set of favorited dog ids
///
/// Transitions return a new set; the receiver is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the dog if absent, remove it otherwise
    pub fn toggle(&self, dog_id: &str) -> (Self, FavoriteChange) {
        let mut ids = self.ids.clone();
        let change = if ids.remove(dog_id) {
            FavoriteChange::Removed
        } else {
            ids.insert(dog_id.to_string());
            FavoriteChange::Added
        };
        (Self { ids }, change)
    }

    #[inline]
    pub fn contains(&self, dog_id: &str) -> bool {
        self.ids.contains(dog_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited ids in stable order
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let empty = Favorites::new();
        let (one, change) = empty.toggle("dog-1");
        assert_eq!(change, FavoriteChange::Added);
        assert!(one.contains("dog-1"));
        assert!(empty.is_empty());

        let (back, change) = one.toggle("dog-1");
        assert_eq!(change, FavoriteChange::Removed);
        assert!(back.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_ids_are_sorted() {
        let favorites: Favorites = ["b", "a", "c"].into_iter().collect();
        assert_eq!(favorites.ids(), vec!["a", "b", "c"]);
    }
}
