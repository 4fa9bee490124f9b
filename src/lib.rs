//! Semantic model of WebRTC session descriptions: streams, tracks, codecs,
//! simulcast encodings and the shared bundled transport, parsed from and
//! written back to SDP text.

pub use crate::candidate_info::CandidateInfo;
pub use crate::codec_info::CodecInfo;
pub use crate::direction::{Direction, DirectionWay};
pub use crate::dtls_info::{DTLSInfo, Setup};
pub use crate::error::{Error, Result};
pub use crate::ice_info::ICEInfo;
pub use crate::media_info::{MediaInfo, SupportedMedia};
pub use crate::media_type::MediaType;
pub use crate::rid_info::RIDInfo;
pub use crate::sdp_info::{AnswerParams, OfferParams, SDPInfo};
pub use crate::simulcast_info::{SimulcastInfo, SimulcastStreamInfo};
pub use crate::source_group_info::SourceGroupInfo;
pub use crate::stream_info::StreamInfo;
pub use crate::track_encoding_info::TrackEncodingInfo;
pub use crate::track_info::TrackInfo;

mod candidate_info;
mod codec_info;
mod direction;
mod dtls_info;
mod error;
mod ice_info;
mod media_info;
mod media_type;
mod parser;
mod rid_info;
mod sdp_info;
mod serializer;
mod simulcast_info;
mod source_group_info;
mod source_info;
mod stream_info;
mod track_encoding_info;
mod track_info;
