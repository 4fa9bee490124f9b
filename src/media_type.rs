use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Media kinds the semantic layer models. Other `m=` kinds are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Audio,
    Video,
}

impl MediaType {
    pub fn by_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    pub(crate) fn from_sdp(media_type: &sdp::MediaType) -> Option<Self> {
        match media_type {
            sdp::MediaType::Audio => Some(Self::Audio),
            sdp::MediaType::Video => Some(Self::Video),
            _ => None,
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Audio => write!(f, "audio"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

impl From<MediaType> for sdp::MediaType {
    fn from(value: MediaType) -> Self {
        match value {
            MediaType::Audio => sdp::MediaType::Audio,
            MediaType::Video => sdp::MediaType::Video,
        }
    }
}
