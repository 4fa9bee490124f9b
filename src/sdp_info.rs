use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{
    CandidateInfo, DTLSInfo, ICEInfo, MediaInfo, MediaType, StreamInfo, SupportedMedia, TrackInfo,
};

/// Local transport and capabilities used to answer an offer.
#[derive(Debug, Clone)]
pub struct AnswerParams {
    pub ice: ICEInfo,
    pub dtls: DTLSInfo,
    pub candidates: Vec<CandidateInfo>,
    pub capabilities: HashMap<MediaType, SupportedMedia>,
}

/// Local transport and capabilities used to build an offer.
#[derive(Debug, Clone)]
pub struct OfferParams {
    pub ice: ICEInfo,
    pub dtls: DTLSInfo,
    pub candidates: Vec<CandidateInfo>,
    pub capabilities: HashMap<MediaType, SupportedMedia>,
}

/// Semantic view of a whole session description sharing one bundled transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SDPInfo {
    version: u32,
    medias: Vec<MediaInfo>,
    streams: IndexMap<String, StreamInfo>,
    candidates: Vec<CandidateInfo>,
    ice: Option<ICEInfo>,
    dtls: Option<DTLSInfo>,
}

impl SDPInfo {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    /// Builds a local offer with one media per capability, audio first.
    pub fn create(params: &OfferParams) -> SDPInfo {
        let mut offer = SDPInfo::new(0);
        offer.set_ice(params.ice.clone());
        offer.set_dtls(params.dtls.clone());
        offer.add_candidates(params.candidates.iter().cloned());

        for media_type in [MediaType::Audio, MediaType::Video] {
            if let Some(supported) = params.capabilities.get(&media_type) {
                offer.add_media(MediaInfo::create(media_type, supported));
            }
        }
        offer
    }

    /// Derives an answer to this offer from the local transport and capabilities.
    pub fn answer(&self, params: &AnswerParams) -> SDPInfo {
        let mut answer = SDPInfo::new(self.version);
        answer.set_ice(params.ice.clone());
        answer.set_dtls(params.dtls.clone());
        answer.add_candidates(params.candidates.iter().cloned());

        for media in &self.medias {
            answer.add_media(media.answer(params.capabilities.get(&media.get_type())));
        }
        answer
    }

    /// Plain key/value projection of the whole graph.
    pub fn plain(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuilds a graph from its plain projection.
    pub fn expand(plain: serde_json::Value) -> Result<SDPInfo> {
        Ok(serde_json::from_value(plain)?)
    }

    pub fn get_version(&self) -> u32 {
        self.version
    }

    pub fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    pub fn add_media(&mut self, media: MediaInfo) {
        self.medias.push(media);
    }

    pub fn get_medias(&self) -> &[MediaInfo] {
        &self.medias
    }

    /// First media of the given type.
    pub fn get_media(&self, media_type: MediaType) -> Option<&MediaInfo> {
        self.medias
            .iter()
            .find(|media| media.get_type() == media_type)
    }

    pub fn get_medias_by_type(&self, media_type: MediaType) -> Vec<&MediaInfo> {
        self.medias
            .iter()
            .filter(|media| media.get_type() == media_type)
            .collect()
    }

    pub fn get_media_by_id(&self, id: &str) -> Option<&MediaInfo> {
        self.medias.iter().find(|media| media.get_id() == id)
    }

    /// Replaces the media with the same id, returns false when none matched.
    pub fn replace_media(&mut self, media: MediaInfo) -> bool {
        match self
            .medias
            .iter_mut()
            .find(|current| current.get_id() == media.get_id())
        {
            Some(current) => {
                *current = media;
                true
            }
            None => false,
        }
    }

    pub fn add_stream(&mut self, stream: StreamInfo) {
        self.streams.insert(stream.get_id().to_string(), stream);
    }

    pub fn get_stream(&self, id: &str) -> Option<&StreamInfo> {
        self.streams.get(id)
    }

    pub fn get_stream_mut(&mut self, id: &str) -> Option<&mut StreamInfo> {
        self.streams.get_mut(id)
    }

    pub fn get_streams(&self) -> &IndexMap<String, StreamInfo> {
        &self.streams
    }

    pub fn get_first_stream(&self) -> Option<&StreamInfo> {
        self.streams.values().next()
    }

    pub fn remove_stream(&mut self, id: &str) -> Option<StreamInfo> {
        self.streams.shift_remove(id)
    }

    pub fn get_stream_by_media_id(&self, media_id: &str) -> Option<&StreamInfo> {
        self.streams.values().find(|stream| {
            stream
                .get_tracks()
                .values()
                .any(|track| track.get_media_id() == Some(media_id))
        })
    }

    pub fn get_track_by_media_id(&self, media_id: &str) -> Option<&TrackInfo> {
        self.streams
            .values()
            .flat_map(|stream| stream.get_tracks().values())
            .find(|track| track.get_media_id() == Some(media_id))
    }

    /// Adds the candidate unless an identical one is already present.
    pub fn add_candidate(&mut self, candidate: CandidateInfo) {
        if !self.candidates.contains(&candidate) {
            self.candidates.push(candidate);
        }
    }

    pub fn add_candidates(&mut self, candidates: impl IntoIterator<Item = CandidateInfo>) {
        for candidate in candidates {
            self.add_candidate(candidate);
        }
    }

    pub fn get_candidates(&self) -> &[CandidateInfo] {
        &self.candidates
    }

    pub fn get_ice(&self) -> Option<&ICEInfo> {
        self.ice.as_ref()
    }

    pub fn set_ice(&mut self, ice: ICEInfo) {
        self.ice = Some(ice);
    }

    pub fn get_dtls(&self) -> Option<&DTLSInfo> {
        self.dtls.as_ref()
    }

    pub fn set_dtls(&mut self, dtls: DTLSInfo) {
        self.dtls = Some(dtls);
    }

    pub(crate) fn track_entry(
        &mut self,
        stream_id: &str,
        track_id: &str,
        create: impl FnOnce() -> TrackInfo,
    ) -> &mut TrackInfo {
        self.streams
            .entry(stream_id.to_string())
            .or_insert_with(|| StreamInfo::new(stream_id))
            .track_entry(track_id, create)
    }
}

#[cfg(test)]
mod sdp_info {
    use crate::{CandidateInfo, MediaInfo, MediaType, SDPInfo, StreamInfo, TrackInfo};

    fn session() -> SDPInfo {
        let mut sdp_info = SDPInfo::new(0);
        sdp_info.add_media(MediaInfo::new("0", MediaType::Audio));
        sdp_info.add_media(MediaInfo::new("1", MediaType::Video));
        sdp_info.add_media(MediaInfo::new("2", MediaType::Video));

        let mut stream = StreamInfo::new("stream1");
        let mut track = TrackInfo::new(MediaType::Video, "track1");
        track.set_media_id("2");
        stream.add_track(track);
        sdp_info.add_stream(stream);
        sdp_info
    }

    #[test]
    fn looks_up_media() {
        let sdp_info = session();

        assert_eq!(sdp_info.get_media(MediaType::Video).map(MediaInfo::get_id), Some("1"));
        assert_eq!(sdp_info.get_medias_by_type(MediaType::Video).len(), 2);
        assert!(sdp_info.get_media_by_id("3").is_none());
    }

    #[test]
    fn replaces_media_by_id() {
        let mut sdp_info = session();

        let replaced = sdp_info.replace_media(MediaInfo::new("1", MediaType::Audio));

        assert!(replaced);
        assert_eq!(sdp_info.get_medias()[1].get_type(), MediaType::Audio);
        assert!(!sdp_info.replace_media(MediaInfo::new("9", MediaType::Audio)));
    }

    #[test]
    fn finds_tracks_by_media_id() {
        let sdp_info = session();

        assert_eq!(
            sdp_info.get_track_by_media_id("2").map(TrackInfo::get_id),
            Some("track1")
        );
        assert_eq!(
            sdp_info.get_stream_by_media_id("2").map(StreamInfo::get_id),
            Some("stream1")
        );
        assert!(sdp_info.get_track_by_media_id("1").is_none());
    }

    #[test]
    fn skips_duplicate_candidates() {
        let mut sdp_info = session();
        let candidate = CandidateInfo::new("1", 1, "UDP", 2015363327, "192.168.0.198", 4557, "host");

        sdp_info.add_candidates(vec![candidate.clone(), candidate]);

        assert_eq!(sdp_info.get_candidates().len(), 1);
    }

    #[test]
    fn removes_streams() {
        let mut sdp_info = session();

        assert!(sdp_info.remove_stream("stream1").is_some());
        assert!(sdp_info.get_first_stream().is_none());
    }

    #[test]
    fn clone_is_independent() {
        let original = session();
        let mut copy = original.clone();

        copy.remove_stream("stream1");

        assert!(original.get_stream("stream1").is_some());
    }
}
