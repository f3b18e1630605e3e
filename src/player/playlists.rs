//! Playlist storage keyed by case-insensitive name

use crate::model::Playlist;

/// Name-keyed playlist store
///
/// Lookups fold the name to lowercase; listing preserves creation
/// order. Display case is whatever the playlist was created with.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty playlist under the given display name; returns
    /// false on a case-insensitive name collision
    pub fn create(&mut self, name: &str) -> bool {
        if self.get(name).is_some() {
            return false;
        }

        self.playlists.push(Playlist::new(name.to_string()));
        true
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        let key = name.to_lowercase();
        self.playlists.iter().find(|p| p.name.to_lowercase() == key)
    }

    /// Case-insensitive lookup, mutable
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        let key = name.to_lowercase();
        self.playlists.iter_mut().find(|p| p.name.to_lowercase() == key)
    }

    /// Delete a playlist by name; returns whether one existed
    pub fn remove(&mut self, name: &str) -> bool {
        let key = name.to_lowercase();
        let before = self.playlists.len();
        self.playlists.retain(|p| p.name.to_lowercase() != key);
        before != self.playlists.len()
    }

    /// Playlists in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.iter()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_case_insensitive_collision() {
        let mut store = PlaylistStore::new();

        assert!(store.create("My List"));
        assert!(!store.create("MY LIST"));
        assert!(!store.create("my list"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_display_case_preserved() {
        let mut store = PlaylistStore::new();
        store.create("My List");

        let playlist = store.get("my LIST").unwrap();
        assert_eq!(playlist.name, "My List");
    }

    #[test]
    fn test_iteration_in_creation_order() {
        let mut store = PlaylistStore::new();
        store.create("zebra");
        store.create("Apple");
        store.create("mango");

        let names: Vec<&str> = store.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["zebra", "Apple", "mango"]);
    }

    #[test]
    fn test_remove_by_any_case() {
        let mut store = PlaylistStore::new();
        store.create("My List");

        assert!(store.remove("MY list"));
        assert!(!store.remove("My List"));
        assert!(store.is_empty());
    }
}
