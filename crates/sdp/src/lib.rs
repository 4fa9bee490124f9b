pub use crate::line_parsers::{
    Bandwidth, Candidate, ConnectionData, ExtMap, Feedback, FeedbackType, Fingerprint,
    HashFunction, ICEOption, ICEOptions, MediaDescription, MediaDirection, MediaGroup, MediaSSRC,
    MediaTransportProtocol, MediaType, Msid, MsidSemantic, Originator, Rid, RTPMap,
    SDPParseError, SSRCGroup, SessionTime, Setup, Simulcast, SourceAttribute, FMTP,
};
pub use crate::micro_syntax::{
    parse_params, parse_simulcast_stream_list, write_params, write_simulcast_stream_list,
    SimulcastStreamEntry,
};
pub use crate::session_description::{parse, write, MediaSection, SessionDescription};

mod line_parsers;
mod micro_syntax;
mod session_description;
