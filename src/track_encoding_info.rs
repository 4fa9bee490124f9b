use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::CodecInfo;

/// A single simulcast encoding of a track, resolved from a send RID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEncodingInfo {
    id: String,
    paused: bool,
    codecs: IndexMap<u8, CodecInfo>,
    params: IndexMap<String, String>,
}

impl TrackEncodingInfo {
    pub fn new(id: impl Into<String>, paused: bool) -> Self {
        Self {
            id: id.into(),
            paused,
            codecs: IndexMap::new(),
            params: IndexMap::new(),
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn get_codecs(&self) -> &IndexMap<u8, CodecInfo> {
        &self.codecs
    }

    pub fn add_codec(&mut self, codec: CodecInfo) {
        self.codecs.insert(codec.get_type(), codec);
    }

    pub fn get_params(&self) -> &IndexMap<String, String> {
        &self.params
    }

    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn set_params(&mut self, params: IndexMap<String, String>) {
        self.params = params;
    }
}
