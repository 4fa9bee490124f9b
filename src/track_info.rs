use serde::{Deserialize, Serialize};

use crate::{MediaType, SourceGroupInfo, TrackEncodingInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    media_type: MediaType,
    id: String,
    media_id: Option<String>,
    ssrcs: Vec<u32>,
    groups: Vec<SourceGroupInfo>,
    encodings: Vec<Vec<TrackEncodingInfo>>,
}

impl TrackInfo {
    pub fn new(media_type: MediaType, id: impl Into<String>) -> Self {
        Self {
            media_type,
            id: id.into(),
            media_id: None,
            ssrcs: vec![],
            groups: vec![],
            encodings: vec![],
        }
    }

    pub fn get_media(&self) -> MediaType {
        self.media_type
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Mid of the media line carrying this track in unified plan, `None`
    /// for plan B tracks.
    pub fn get_media_id(&self) -> Option<&str> {
        self.media_id.as_deref()
    }

    pub fn set_media_id(&mut self, media_id: impl Into<String>) {
        self.media_id = Some(media_id.into());
    }

    pub fn get_ssrcs(&self) -> &[u32] {
        &self.ssrcs
    }

    pub fn has_ssrc(&self, ssrc: u32) -> bool {
        self.ssrcs.contains(&ssrc)
    }

    pub fn add_ssrc(&mut self, ssrc: u32) {
        if !self.has_ssrc(ssrc) {
            self.ssrcs.push(ssrc);
        }
    }

    pub fn get_source_groups(&self) -> &[SourceGroupInfo] {
        &self.groups
    }

    pub fn get_source_group(&self, semantics: &str) -> Option<&SourceGroupInfo> {
        self.groups
            .iter()
            .find(|group| group.get_semantics().eq_ignore_ascii_case(semantics))
    }

    /// Adds the group and any member ssrc the track does not carry yet. A
    /// group equal to one already present is not added twice.
    pub fn add_source_group(&mut self, group: SourceGroupInfo) {
        for ssrc in group.get_ssrcs() {
            self.add_ssrc(*ssrc);
        }
        if !self.groups.contains(&group) {
            self.groups.push(group);
        }
    }

    pub fn get_encodings(&self) -> &[Vec<TrackEncodingInfo>] {
        &self.encodings
    }

    pub fn add_alternative_encodings(&mut self, alternatives: Vec<TrackEncodingInfo>) {
        self.encodings.push(alternatives);
    }

    pub fn set_encodings(&mut self, encodings: Vec<Vec<TrackEncodingInfo>>) {
        self.encodings = encodings;
    }
}
