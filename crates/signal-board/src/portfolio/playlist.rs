use super::domain::{Artifact, ClientChannel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistItem {
    pub artifact: Artifact,
    pub client_id: String,
    pub client_name: String,
}

impl PlaylistItem {
    pub fn new(client: &ClientChannel, artifact: &Artifact) -> Self {
        Self {
            artifact: artifact.clone(),
            client_id: client.id.clone(),
            client_name: client.name.clone(),
        }
    }

    fn is(&self, artifact_id: &str, client_id: &str) -> bool {
        self.artifact.id == artifact_id && self.client_id == client_id
    }
}

/// Artifacts pinned from client drawers, in pin order.
///
/// An artifact is identified by its id together with its client id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Playlist {
    items: Vec<PlaylistItem>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[PlaylistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `false` when the artifact was already pinned.
    pub fn add(&mut self, item: PlaylistItem) -> bool {
        if self.is_pinned(&item.artifact.id, &item.client_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns `true` when an item was removed.
    pub fn remove(&mut self, artifact_id: &str, client_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.is(artifact_id, client_id));
        self.items.len() != before
    }

    /// Pins or unpins; returns whether the artifact is pinned afterwards.
    pub fn toggle(&mut self, client: &ClientChannel, artifact: &Artifact) -> bool {
        if self.remove(&artifact.id, &client.id) {
            false
        } else {
            self.add(PlaylistItem::new(client, artifact))
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_pinned(&self, artifact_id: &str, client_id: &str) -> bool {
        self.items.iter().any(|item| item.is(artifact_id, client_id))
    }
}
