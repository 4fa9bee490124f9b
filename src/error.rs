use sdp::SDPParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to tokenize session description: {0}")]
    Parse(#[from] SDPParseError),
    #[error("media line {media_index} has no DTLS fingerprint")]
    MissingFingerprint { media_index: usize },
    #[error("media line {media_index} has no ICE credentials")]
    MissingIceCredentials { media_index: usize },
    #[error("ssrc group on media line {media_index} references unknown ssrc {ssrc}")]
    UnresolvedSourceGroup { media_index: usize, ssrc: u32 },
    #[error("malformed msid {value:?} on media line {media_index}")]
    MalformedMsid { media_index: usize, value: String },
    #[error("invalid direction {value:?} on media line {media_index}")]
    InvalidDirectionWay { media_index: usize, value: String },
    #[error("plain projection error: {0}")]
    Projection(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
