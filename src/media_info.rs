use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{CodecInfo, Direction, MediaType, RIDInfo, SimulcastInfo};

const PACKETIZATION_MODE: &str = "packetization-mode";

/// Local capabilities for one media type, used to build offers and answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedMedia {
    pub codecs: IndexMap<u8, CodecInfo>,
    pub extensions: Vec<String>,
    pub simulcast: bool,
}

/// One negotiated `m=` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    id: String,
    media_type: MediaType,
    direction: Direction,
    codecs: IndexMap<u8, CodecInfo>,
    extensions: IndexMap<u16, String>,
    rids: IndexMap<String, RIDInfo>,
    simulcast: Option<SimulcastInfo>,
    bitrate: Option<u32>,
}

impl MediaInfo {
    pub fn new(id: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            id: id.into(),
            media_type,
            direction: Direction::SendRecv,
            codecs: IndexMap::new(),
            extensions: IndexMap::new(),
            rids: IndexMap::new(),
            simulcast: None,
            bitrate: None,
        }
    }

    /// Local media offering every supported codec and extension.
    pub fn create(media_type: MediaType, supported: &SupportedMedia) -> Self {
        let mut media = MediaInfo::new(media_type.to_string(), media_type);
        for codec in supported.codecs.values() {
            media.add_codec(codec.clone());
        }
        for (id, uri) in (1u16..).zip(&supported.extensions) {
            media.add_extension(id, uri.clone());
        }
        media
    }

    /// Counterpart of this offered media restricted to the local capabilities.
    /// Without capabilities the media is rejected as inactive.
    pub fn answer(&self, supported: Option<&SupportedMedia>) -> MediaInfo {
        let mut answer = MediaInfo::new(self.id.clone(), self.media_type);

        let Some(supported) = supported else {
            answer.set_direction(Direction::Inactive);
            return answer;
        };
        answer.set_direction(self.direction.reverse());

        for codec in self.codecs.values() {
            let Some(local) = supported
                .codecs
                .values()
                .find(|local| is_compatible(codec, local))
            else {
                continue;
            };
            let mut answered = local.clone();
            answered.set_type(codec.get_type());
            match (codec.get_rtx(), local.has_rtx()) {
                (Some(rtx), true) => answered.set_rtx(rtx),
                _ => answered.remove_rtx(),
            }
            answer.add_codec(answered);
        }

        for (id, uri) in &self.extensions {
            if supported.extensions.contains(uri) {
                answer.add_extension(*id, uri.clone());
            }
        }

        if let Some(simulcast) = self.simulcast.as_ref().filter(|_| supported.simulcast) {
            answer.set_simulcast(simulcast.reverse());
            for rid in self.rids.values() {
                let mut reversed = rid.clone();
                reversed.set_direction(rid.get_direction().reverse());
                answer.add_rid(reversed);
            }
        }

        answer
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_type(&self) -> MediaType {
        self.media_type
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn add_codec(&mut self, codec: CodecInfo) {
        self.codecs.insert(codec.get_type(), codec);
    }

    pub fn get_codecs(&self) -> &IndexMap<u8, CodecInfo> {
        &self.codecs
    }

    /// First codec with the given name, compared case-insensitively.
    pub fn get_codec(&self, name: &str) -> Option<&CodecInfo> {
        self.codecs.values().find(|codec| codec.is(name))
    }

    pub fn get_codec_for_type(&self, payload_type: u8) -> Option<&CodecInfo> {
        self.codecs.get(&payload_type)
    }

    pub fn has_codec(&self, name: &str) -> bool {
        self.get_codec(name).is_some()
    }

    pub fn remove_codec(&mut self, payload_type: u8) -> Option<CodecInfo> {
        self.codecs.shift_remove(&payload_type)
    }

    pub fn add_extension(&mut self, id: u16, uri: impl Into<String>) {
        self.extensions.insert(id, uri.into());
    }

    pub fn get_extensions(&self) -> &IndexMap<u16, String> {
        &self.extensions
    }

    pub fn add_rid(&mut self, rid: RIDInfo) {
        self.rids.insert(rid.get_id().to_string(), rid);
    }

    pub fn get_rid(&self, id: &str) -> Option<&RIDInfo> {
        self.rids.get(id)
    }

    pub fn get_rids(&self) -> &IndexMap<String, RIDInfo> {
        &self.rids
    }

    pub fn get_simulcast(&self) -> Option<&SimulcastInfo> {
        self.simulcast.as_ref()
    }

    pub fn set_simulcast(&mut self, simulcast: SimulcastInfo) {
        self.simulcast = Some(simulcast);
    }

    pub fn get_bitrate(&self) -> Option<u32> {
        self.bitrate
    }

    pub fn set_bitrate(&mut self, bitrate: u32) {
        self.bitrate = Some(bitrate);
    }
}

fn is_compatible(offered: &CodecInfo, local: &CodecInfo) -> bool {
    if !offered.is(local.get_codec()) {
        return false;
    }
    if !offered.is("H264") {
        return true;
    }
    let mode = |codec: &CodecInfo| codec.get_param(PACKETIZATION_MODE).unwrap_or("0").to_string();
    mode(offered) == mode(local)
}
