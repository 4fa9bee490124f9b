use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{MediaType, TrackInfo};

/// Media stream (`msid` stream id) and its tracks keyed by track id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfo {
    id: String,
    tracks: IndexMap<String, TrackInfo>,
}

impl StreamInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tracks: IndexMap::new(),
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Adds the track, replacing a previous one with the same id.
    pub fn add_track(&mut self, track: TrackInfo) {
        self.tracks.insert(track.get_id().to_string(), track);
    }

    pub fn get_track(&self, id: &str) -> Option<&TrackInfo> {
        self.tracks.get(id)
    }

    pub fn get_track_mut(&mut self, id: &str) -> Option<&mut TrackInfo> {
        self.tracks.get_mut(id)
    }

    pub fn get_tracks(&self) -> &IndexMap<String, TrackInfo> {
        &self.tracks
    }

    pub fn get_first_track(&self, media_type: MediaType) -> Option<&TrackInfo> {
        self.tracks
            .values()
            .find(|track| track.get_media() == media_type)
    }

    pub fn remove_track(&mut self, id: &str) -> Option<TrackInfo> {
        self.tracks.shift_remove(id)
    }

    pub(crate) fn track_entry(
        &mut self,
        id: &str,
        create: impl FnOnce() -> TrackInfo,
    ) -> &mut TrackInfo {
        self.tracks.entry(id.to_string()).or_insert_with(create)
    }
}
