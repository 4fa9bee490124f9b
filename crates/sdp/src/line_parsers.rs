use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SDPParseError {
    #[error("SDP lines are out of sequence")]
    SequenceError,
    #[error("malformed SDP attribute")]
    MalformedAttribute,
    #[error("malformed media descriptor")]
    MalformedMediaDescriptor,
    #[error("malformed SDP line")]
    MalformedSDPLine,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SDPLine {
    ProtocolVersion(u32),
    Originator(Originator),
    SessionName(String),
    SessionTime(SessionTime),
    ConnectionData(ConnectionData),
    Bandwidth(Bandwidth),
    Attribute(Attribute),
    MediaDescription(MediaDescription),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Attribute {
    Unrecognized,
    EndOfCandidates,
    ICELite,
    ICEOptions(ICEOptions),
    ICEUsername(ICEUsername),
    ICEPassword(ICEPassword),
    Fingerprint(Fingerprint),
    Setup(Setup),
    MediaID(MediaID),
    Direction(MediaDirection),
    MediaGroup(MediaGroup),
    MsidSemantic(MsidSemantic),
    Msid(Msid),
    MediaSSRC(MediaSSRC),
    SSRCGroup(SSRCGroup),
    RTCPMux,
    RTCPReducedSize,
    RTPMap(RTPMap),
    FMTP(FMTP),
    Feedback(Feedback),
    ExtMap(ExtMap),
    Rid(Rid),
    Simulcast(Simulcast),
    Candidate(Candidate),
}

#[derive(Debug, PartialEq, Clone)]
pub struct ConnectionData {
    pub ip: IpAddr,
}

impl Default for ConnectionData {
    fn default() -> Self {
        Self {
            ip: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct MediaDescription {
    pub media_type: MediaType,
    pub transport_port: u16,
    pub transport_protocol: MediaTransportProtocol,
    pub media_format_description: Vec<String>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum MediaType {
    Video,
    Audio,
    Application,
    Other(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum MediaTransportProtocol {
    DtlsSrtp,
    Other(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ICEOption {
    ICE2,
    Trickle,
    Other(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Originator {
    pub username: String,
    pub session_id: String,
    pub session_version: String,
    pub ip_addr: IpAddr,
}

impl Default for Originator {
    fn default() -> Self {
        Self {
            username: "-".to_string(),
            session_id: "0".to_string(),
            session_version: "0".to_string(),
            ip_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionTime {
    pub start_time: u64,
    pub end_time: u64,
}

/// `b=<type>:<limit>`, the limit is in kbps for `AS`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bandwidth {
    pub bandwidth_type: String,
    pub limit: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ICEOptions {
    pub options: Vec<ICEOption>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaID {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fingerprint {
    pub hash_function: HashFunction,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HashFunction {
    SHA1,
    SHA256,
    SHA384,
    SHA512,
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaDirection {
    SendReceive,
    SendOnly,
    ReceiveOnly,
    Inactive,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Setup {
    ActivePassive,
    Active,
    Passive,
    HoldConnection,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MediaGroup {
    Bundle(Vec<String>),
    LipSync(Vec<String>),
    Other(String, Vec<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MsidSemantic {
    pub semantic: String,
    pub identifiers: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Msid {
    pub stream_id: String,
    pub track_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaSSRC {
    pub ssrc: u32,
    pub source_attribute: SourceAttribute,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceAttribute {
    CNAME(String),
    Msid(String),
    Other(String, Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SSRCGroup {
    pub semantics: String,
    pub ssrcs: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RTPMap {
    pub payload_number: u8,
    pub codec: String,
    pub clock_rate: u32,
    pub channels: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FMTP {
    pub payload_number: u8,
    pub format_capability: String,
}

/// `a=rtcp-fb`. A `payload_type` of `None` stands for the `*` wildcard.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub payload_type: Option<u8>,
    pub feedback_type: FeedbackType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackType {
    NACK,
    PLI,
    FIR,
    REMB,
    TransportCC,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtMap {
    pub id: u16,
    pub direction: Option<String>,
    pub uri: String,
    pub attributes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rid {
    pub id: String,
    pub direction: String,
    pub params: Option<String>,
}

/// `a=simulcast:<dir1> <list1> [<dir2> <list2>]`, lists are kept in their
/// wire form and decoded with `parse_simulcast_stream_list`.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulcast {
    pub dir1: String,
    pub list1: String,
    pub dir2: Option<String>,
    pub list2: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub foundation: String,
    pub component_id: u16,
    pub transport: String,
    pub priority: u32,
    pub connection_address: String,
    pub port: u16,
    pub candidate_type: String,
    pub related_address: Option<String>,
    pub related_port: Option<u16>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ICEUsername {
    pub username: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ICEPassword {
    pub password: String,
}

impl From<SDPLine> for String {
    fn from(value: SDPLine) -> Self {
        match value {
            SDPLine::ProtocolVersion(proto) => format!("v={}", proto),
            SDPLine::Originator(originator) => String::from(originator),
            SDPLine::SessionName(session_name) => format!("s={}", session_name),
            SDPLine::SessionTime(session_time) => String::from(session_time),
            SDPLine::ConnectionData(connection_data) => String::from(connection_data),
            SDPLine::Bandwidth(bandwidth) => String::from(bandwidth),
            SDPLine::Attribute(attr) => String::from(attr),
            SDPLine::MediaDescription(media_description) => String::from(media_description),
            SDPLine::Unrecognized => "".to_string(),
        }
    }
}

impl From<ConnectionData> for String {
    fn from(value: ConnectionData) -> Self {
        let ip_family = match &value.ip {
            IpAddr::V4(_) => "IP4",
            IpAddr::V6(_) => "IP6",
        };
        format!("c=IN {} {}", ip_family, value.ip)
    }
}

impl From<Bandwidth> for String {
    fn from(value: Bandwidth) -> Self {
        format!("b={}:{}", value.bandwidth_type, value.limit)
    }
}

impl From<Attribute> for String {
    fn from(value: Attribute) -> Self {
        let attribute_name = match value {
            Attribute::Unrecognized => {
                panic!("Unrecognized attributes should not be converted to String")
            }
            Attribute::Direction(direction) => String::from(direction),
            Attribute::RTCPMux => "rtcp-mux".to_string(),
            Attribute::RTCPReducedSize => "rtcp-rsize".to_string(),
            Attribute::MediaID(attr) => String::from(attr),
            Attribute::ICEUsername(attr) => String::from(attr),
            Attribute::ICEPassword(attr) => String::from(attr),
            Attribute::Fingerprint(attr) => String::from(attr),
            Attribute::MediaGroup(attr) => String::from(attr),
            Attribute::MsidSemantic(attr) => String::from(attr),
            Attribute::Msid(attr) => String::from(attr),
            Attribute::MediaSSRC(attr) => String::from(attr),
            Attribute::SSRCGroup(attr) => String::from(attr),
            Attribute::RTPMap(attr) => String::from(attr),
            Attribute::FMTP(attr) => String::from(attr),
            Attribute::ExtMap(attr) => String::from(attr),
            Attribute::Rid(attr) => String::from(attr),
            Attribute::Simulcast(attr) => String::from(attr),
            Attribute::Candidate(attr) => String::from(attr),
            Attribute::Setup(attr) => String::from(attr),
            Attribute::ICELite => "ice-lite".to_string(),
            Attribute::EndOfCandidates => "end-of-candidates".to_string(),
            Attribute::ICEOptions(ice_options) => String::from(ice_options),
            Attribute::Feedback(feedback) => String::from(feedback),
        };
        format!("a={attribute_name}")
    }
}

impl From<Feedback> for String {
    fn from(value: Feedback) -> Self {
        let payload_type = value
            .payload_type
            .map(|payload_type| payload_type.to_string())
            .unwrap_or_else(|| "*".to_string());
        format!(
            "rtcp-fb:{} {}",
            payload_type,
            String::from(value.feedback_type)
        )
    }
}

impl From<FeedbackType> for String {
    fn from(value: FeedbackType) -> Self {
        match value {
            FeedbackType::NACK => "nack".to_string(),
            FeedbackType::PLI => "nack pli".to_string(),
            FeedbackType::FIR => "ccm fir".to_string(),
            FeedbackType::REMB => "goog-remb".to_string(),
            FeedbackType::TransportCC => "transport-cc".to_string(),
            FeedbackType::Other(feedback) => feedback,
        }
    }
}

impl From<SessionTime> for String {
    fn from(value: SessionTime) -> Self {
        format!("t={} {}", value.start_time, value.end_time)
    }
}

impl From<ICEUsername> for String {
    fn from(value: ICEUsername) -> Self {
        format!("ice-ufrag:{}", value.username)
    }
}

impl From<ICEPassword> for String {
    fn from(value: ICEPassword) -> Self {
        format!("ice-pwd:{}", value.password)
    }
}

impl From<Originator> for String {
    fn from(value: Originator) -> Self {
        let ip_version = match value.ip_addr {
            IpAddr::V4(_) => "IP4",
            IpAddr::V6(_) => "IP6",
        };
        format!(
            "o={} {} {} IN {} {}",
            value.username, value.session_id, value.session_version, ip_version, value.ip_addr
        )
    }
}

impl From<ICEOptions> for String {
    fn from(value: ICEOptions) -> Self {
        let ice_options = value
            .options
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        format!("ice-options:{}", ice_options)
    }
}

impl From<ICEOption> for String {
    fn from(value: ICEOption) -> Self {
        match value {
            ICEOption::ICE2 => "ice2".to_string(),
            ICEOption::Trickle => "trickle".to_string(),
            ICEOption::Other(option) => option,
        }
    }
}

impl From<Setup> for String {
    fn from(value: Setup) -> Self {
        match value {
            Setup::ActivePassive => "setup:actpass".to_string(),
            Setup::Active => "setup:active".to_string(),
            Setup::Passive => "setup:passive".to_string(),
            Setup::HoldConnection => "setup:holdconn".to_string(),
        }
    }
}

impl From<MediaDirection> for String {
    fn from(value: MediaDirection) -> Self {
        match value {
            MediaDirection::SendReceive => "sendrecv".to_string(),
            MediaDirection::SendOnly => "sendonly".to_string(),
            MediaDirection::ReceiveOnly => "recvonly".to_string(),
            MediaDirection::Inactive => "inactive".to_string(),
        }
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        match value {
            MediaType::Video => "video".to_string(),
            MediaType::Audio => "audio".to_string(),
            MediaType::Application => "application".to_string(),
            MediaType::Other(media_type) => media_type,
        }
    }
}

impl From<MediaTransportProtocol> for String {
    fn from(value: MediaTransportProtocol) -> Self {
        match value {
            MediaTransportProtocol::DtlsSrtp => "UDP/TLS/RTP/SAVPF".to_string(),
            MediaTransportProtocol::Other(protocol) => protocol,
        }
    }
}

impl From<MediaDescription> for String {
    fn from(value: MediaDescription) -> Self {
        let media_payloads = value.media_format_description.join(" ");
        format!(
            "m={} {} {} {}",
            String::from(value.media_type),
            value.transport_port,
            String::from(value.transport_protocol),
            media_payloads
        )
    }
}

impl From<MediaID> for String {
    fn from(value: MediaID) -> Self {
        format!("mid:{}", value.id)
    }
}

impl From<MediaGroup> for String {
    fn from(value: MediaGroup) -> Self {
        match value {
            MediaGroup::Bundle(groups) => {
                format!("group:BUNDLE {}", groups.join(" "))
            }
            MediaGroup::LipSync(groups) => {
                format!("group:LS {}", groups.join(" "))
            }
            MediaGroup::Other(semantics, groups) => {
                format!("group:{} {}", semantics, groups.join(" "))
            }
        }
    }
}

impl From<MsidSemantic> for String {
    fn from(value: MsidSemantic) -> Self {
        if value.identifiers.is_empty() {
            return format!("msid-semantic: {}", value.semantic);
        }
        format!(
            "msid-semantic: {} {}",
            value.semantic,
            value.identifiers.join(" ")
        )
    }
}

impl From<Msid> for String {
    fn from(value: Msid) -> Self {
        match value.track_id {
            Some(track_id) => format!("msid:{} {}", value.stream_id, track_id),
            None => format!("msid:{}", value.stream_id),
        }
    }
}

impl From<Fingerprint> for String {
    fn from(value: Fingerprint) -> Self {
        format!(
            "fingerprint:{} {}",
            String::from(value.hash_function),
            value.hash
        )
    }
}

impl From<HashFunction> for String {
    fn from(value: HashFunction) -> Self {
        match value {
            HashFunction::SHA1 => "sha-1".to_string(),
            HashFunction::SHA256 => "sha-256".to_string(),
            HashFunction::SHA384 => "sha-384".to_string(),
            HashFunction::SHA512 => "sha-512".to_string(),
            HashFunction::Unsupported(hash_function) => hash_function,
        }
    }
}

impl From<RTPMap> for String {
    fn from(value: RTPMap) -> Self {
        match value.channels {
            Some(channels) => format!(
                "rtpmap:{} {}/{}/{}",
                value.payload_number, value.codec, value.clock_rate, channels
            ),
            None => format!(
                "rtpmap:{} {}/{}",
                value.payload_number, value.codec, value.clock_rate
            ),
        }
    }
}

impl From<MediaSSRC> for String {
    fn from(value: MediaSSRC) -> Self {
        format!(
            "ssrc:{} {}",
            value.ssrc,
            String::from(value.source_attribute)
        )
    }
}

impl From<SourceAttribute> for String {
    fn from(value: SourceAttribute) -> Self {
        match value {
            SourceAttribute::CNAME(cname) => format!("cname:{}", cname),
            SourceAttribute::Msid(msid) => format!("msid:{}", msid),
            SourceAttribute::Other(name, Some(value)) => format!("{}:{}", name, value),
            SourceAttribute::Other(name, None) => name,
        }
    }
}

impl From<SSRCGroup> for String {
    fn from(value: SSRCGroup) -> Self {
        let ssrcs = value
            .ssrcs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        format!("ssrc-group:{} {}", value.semantics, ssrcs)
    }
}

impl From<FMTP> for String {
    fn from(value: FMTP) -> Self {
        format!("fmtp:{} {}", value.payload_number, value.format_capability)
    }
}

impl From<ExtMap> for String {
    fn from(value: ExtMap) -> Self {
        let id = match value.direction {
            Some(direction) => format!("{}/{}", value.id, direction),
            None => value.id.to_string(),
        };
        match value.attributes {
            Some(attributes) => format!("extmap:{} {} {}", id, value.uri, attributes),
            None => format!("extmap:{} {}", id, value.uri),
        }
    }
}

impl From<Rid> for String {
    fn from(value: Rid) -> Self {
        match value.params {
            Some(params) if !params.is_empty() => {
                format!("rid:{} {} {}", value.id, value.direction, params)
            }
            _ => format!("rid:{} {}", value.id, value.direction),
        }
    }
}

impl From<Simulcast> for String {
    fn from(value: Simulcast) -> Self {
        match (value.dir2, value.list2) {
            (Some(dir2), Some(list2)) => format!(
                "simulcast:{} {} {} {}",
                value.dir1, value.list1, dir2, list2
            ),
            _ => format!("simulcast:{} {}", value.dir1, value.list1),
        }
    }
}

impl From<Candidate> for String {
    fn from(value: Candidate) -> Self {
        let mut candidate = format!(
            "candidate:{} {} {} {} {} {} typ {}",
            value.foundation,
            value.component_id,
            value.transport,
            value.priority,
            value.connection_address,
            value.port,
            value.candidate_type
        );
        if let Some(related_address) = value.related_address {
            candidate.push_str(&format!(" raddr {}", related_address));
        }
        if let Some(related_port) = value.related_port {
            candidate.push_str(&format!(" rport {}", related_port));
        }
        candidate
    }
}

impl TryFrom<&str> for SDPLine {
    type Error = SDPParseError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let (sdp_type, value) = input
            .split_once("=")
            .ok_or(SDPParseError::MalformedSDPLine)?;

        match sdp_type {
            "v" => value
                .trim()
                .parse::<u32>()
                .map(SDPLine::ProtocolVersion)
                .map_err(|_| SDPParseError::MalformedSDPLine),
            "c" => Ok(SDPLine::ConnectionData(ConnectionData::try_from(input)?)),
            "o" => Ok(SDPLine::Originator(Originator::try_from(input)?)),
            "s" => Ok(SDPLine::SessionName(value.to_string())),
            "t" => Ok(SDPLine::SessionTime(SessionTime::try_from(input)?)),
            "b" => Ok(SDPLine::Bandwidth(Bandwidth::try_from(input)?)),
            "m" => Ok(SDPLine::MediaDescription(MediaDescription::try_from(
                input,
            )?)),
            "a" => Ok(SDPLine::Attribute(Attribute::try_from(input)?)),
            _ => Ok(SDPLine::Unrecognized),
        }
    }
}

impl TryFrom<&str> for Attribute {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("a=")
            .ok_or(SDPParseError::MalformedAttribute)?;
        let key = value
            .split(":")
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?;

        match key {
            "ice-ufrag" => Ok(Attribute::ICEUsername(ICEUsername::try_from(value)?)),
            "ice-pwd" => Ok(Attribute::ICEPassword(ICEPassword::try_from(value)?)),
            "ice-lite" => Ok(Attribute::ICELite),
            "ice-options" => Ok(Attribute::ICEOptions(ICEOptions::try_from(value)?)),
            "fingerprint" => Ok(Attribute::Fingerprint(Fingerprint::try_from(value)?)),
            "setup" => Ok(Attribute::Setup(Setup::try_from(value)?)),
            "candidate" => Ok(Attribute::Candidate(Candidate::try_from(value)?)),
            "end-of-candidates" => Ok(Attribute::EndOfCandidates),
            "ssrc" => Ok(Attribute::MediaSSRC(MediaSSRC::try_from(value)?)),
            "ssrc-group" => Ok(Attribute::SSRCGroup(SSRCGroup::try_from(value)?)),
            "sendrecv" => Ok(Attribute::Direction(MediaDirection::SendReceive)),
            "sendonly" => Ok(Attribute::Direction(MediaDirection::SendOnly)),
            "recvonly" => Ok(Attribute::Direction(MediaDirection::ReceiveOnly)),
            "inactive" => Ok(Attribute::Direction(MediaDirection::Inactive)),
            "mid" => Ok(Attribute::MediaID(MediaID::try_from(value)?)),
            "group" => Ok(Attribute::MediaGroup(MediaGroup::try_from(value)?)),
            "msid-semantic" => Ok(Attribute::MsidSemantic(MsidSemantic::try_from(value)?)),
            "msid" => Ok(Attribute::Msid(Msid::try_from(value)?)),
            "rtpmap" => Ok(Attribute::RTPMap(RTPMap::try_from(value)?)),
            "fmtp" => Ok(Attribute::FMTP(FMTP::try_from(value)?)),
            "rtcp-fb" => Ok(Attribute::Feedback(Feedback::try_from(value)?)),
            "rtcp-mux" => Ok(Attribute::RTCPMux),
            "rtcp-rsize" => Ok(Attribute::RTCPReducedSize),
            "extmap" => Ok(Attribute::ExtMap(ExtMap::try_from(value)?)),
            "rid" => Ok(Attribute::Rid(Rid::try_from(value)?)),
            "simulcast" => Ok(Attribute::Simulcast(Simulcast::try_from(value)?)),
            _ => Ok(Attribute::Unrecognized),
        }
    }
}

impl TryFrom<&str> for MediaDescription {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("m=")
            .ok_or(Self::Error::MalformedSDPLine)?;
        let mut split = value.split(" ");

        let media_type = split
            .next()
            .map(MediaType::from)
            .ok_or(SDPParseError::MalformedMediaDescriptor)?;

        // A port may carry a "/<number of ports>" suffix
        let transport_port = split
            .next()
            .and_then(|port| port.split("/").next())
            .and_then(|port| port.parse::<u16>().ok())
            .ok_or(SDPParseError::MalformedMediaDescriptor)?;

        let transport_protocol = split
            .next()
            .map(MediaTransportProtocol::from)
            .ok_or(SDPParseError::MalformedMediaDescriptor)?;

        let media_format_description = split
            .filter(|format| !format.is_empty())
            .map(ToString::to_string)
            .collect::<Vec<String>>();

        Ok(MediaDescription {
            transport_port,
            media_type,
            media_format_description,
            transport_protocol,
        })
    }
}

impl TryFrom<&str> for Originator {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_key, value) = value
            .split_once("o=")
            .ok_or(Self::Error::MalformedSDPLine)?;
        let mut split = value.split(" ");

        let username = split.next().ok_or(Self::Error::MalformedSDPLine)?;
        let session_id = split.next().ok_or(Self::Error::MalformedSDPLine)?;
        let session_version = split.next().ok_or(Self::Error::MalformedSDPLine)?;
        let network_type = split.next().ok_or(Self::Error::MalformedSDPLine)?;

        if network_type.ne("IN") {
            return Err(Self::Error::MalformedSDPLine);
        }

        let ip_type = split.next().ok_or(Self::Error::MalformedSDPLine)?;
        let unicast_address = split.next().ok_or(Self::Error::MalformedSDPLine)?;

        let ip_addr = match ip_type {
            "IP4" => Ipv4Addr::from_str(unicast_address)
                .map(IpAddr::V4)
                .map_err(|_| Self::Error::MalformedSDPLine)?,
            "IP6" => Ipv6Addr::from_str(unicast_address)
                .map(IpAddr::V6)
                .map_err(|_| Self::Error::MalformedSDPLine)?,
            _ => return Err(Self::Error::MalformedSDPLine),
        };

        Ok(Self {
            username: username.to_string(),
            session_id: session_id.to_string(),
            session_version: session_version.to_string(),
            ip_addr,
        })
    }
}

impl TryFrom<&str> for SessionTime {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("t=")
            .ok_or(Self::Error::MalformedSDPLine)?;
        let (start_time, end_time) = value
            .split_once(" ")
            .ok_or(Self::Error::MalformedSDPLine)?;

        Ok(Self {
            start_time: start_time
                .parse::<u64>()
                .map_err(|_| Self::Error::MalformedSDPLine)?,
            end_time: end_time
                .parse::<u64>()
                .map_err(|_| Self::Error::MalformedSDPLine)?,
        })
    }
}

impl TryFrom<&str> for ConnectionData {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("c=")
            .ok_or(Self::Error::MalformedSDPLine)?;
        let mut split = value.split(" ");

        let first_line_matches_pattern = split
            .next()
            .ok_or(Self::Error::MalformedSDPLine)?
            .eq_ignore_ascii_case("in");

        if !first_line_matches_pattern {
            return Err(Self::Error::MalformedSDPLine);
        }

        // Multicast addresses may carry a "/<ttl>" suffix
        let ip_addr = split
            .next()
            .and_then(|line| {
                let unparsed_ip = split.next()?.split("/").next()?;
                match line {
                    "IP4" => Ipv4Addr::from_str(unparsed_ip).ok().map(IpAddr::V4),
                    "IP6" => Ipv6Addr::from_str(unparsed_ip).ok().map(IpAddr::V6),
                    _ => None,
                }
            })
            .ok_or(Self::Error::MalformedSDPLine)?;

        Ok(Self { ip: ip_addr })
    }
}

impl TryFrom<&str> for Bandwidth {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("b=")
            .ok_or(Self::Error::MalformedSDPLine)?;
        let (bandwidth_type, limit) = value
            .split_once(":")
            .ok_or(Self::Error::MalformedSDPLine)?;

        Ok(Self {
            bandwidth_type: bandwidth_type.to_string(),
            limit: limit
                .trim()
                .parse::<u32>()
                .map_err(|_| Self::Error::MalformedSDPLine)?,
        })
    }
}

impl TryFrom<&str> for ICEOptions {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("ice-options:")
            .ok_or(Self::Error::MalformedAttribute)?;

        let options = value
            .split_whitespace()
            .map(ICEOption::from)
            .collect::<Vec<ICEOption>>();

        Ok(Self { options })
    }
}

impl From<&str> for ICEOption {
    fn from(value: &str) -> Self {
        match value {
            "ice2" => ICEOption::ICE2,
            "trickle" => ICEOption::Trickle,
            _ => ICEOption::Other(value.to_string()),
        }
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        match value {
            "video" => Self::Video,
            "audio" => Self::Audio,
            "application" => Self::Application,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl From<&str> for MediaTransportProtocol {
    fn from(value: &str) -> Self {
        match value {
            "UDP/TLS/RTP/SAVPF" => Self::DtlsSrtp,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl TryFrom<&str> for MediaID {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("mid:")
            .ok_or(Self::Error::MalformedAttribute)?;
        Ok(Self {
            id: value.trim().to_string(),
        })
    }
}

impl TryFrom<&str> for MediaGroup {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("group:")
            .ok_or(Self::Error::MalformedAttribute)?;

        let mut split = value.split_whitespace();
        let group_type = split.next().ok_or(Self::Error::MalformedAttribute)?;
        let group_values = split.map(ToString::to_string).collect::<Vec<_>>();

        match group_type {
            "BUNDLE" => Ok(MediaGroup::Bundle(group_values)),
            "LS" => Ok(MediaGroup::LipSync(group_values)),
            _ => Ok(MediaGroup::Other(group_type.to_string(), group_values)),
        }
    }
}

impl TryFrom<&str> for MsidSemantic {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("msid-semantic:")
            .ok_or(Self::Error::MalformedAttribute)?;

        let mut split = value.split_whitespace();
        let semantic = split.next().ok_or(Self::Error::MalformedAttribute)?;

        Ok(Self {
            semantic: semantic.to_string(),
            identifiers: split.map(ToString::to_string).collect(),
        })
    }
}

impl TryFrom<&str> for Msid {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("msid:")
            .ok_or(Self::Error::MalformedAttribute)?;

        let mut split = value.split_whitespace();
        let stream_id = split.next().ok_or(Self::Error::MalformedAttribute)?;

        Ok(Self {
            stream_id: stream_id.to_string(),
            track_id: split.next().map(ToString::to_string),
        })
    }
}

impl TryFrom<&str> for Fingerprint {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("fingerprint:")
            .ok_or(Self::Error::MalformedAttribute)?;
        let (hash_function, hash) = value
            .split_once(" ")
            .ok_or(SDPParseError::MalformedAttribute)?;

        let hash_function = HashFunction::from(hash_function);

        Ok(Fingerprint {
            hash_function,
            hash: hash.trim().to_string(),
        })
    }
}

impl From<&str> for HashFunction {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "sha-1" => HashFunction::SHA1,
            "sha-256" => HashFunction::SHA256,
            "sha-384" => HashFunction::SHA384,
            "sha-512" => HashFunction::SHA512,
            _ => HashFunction::Unsupported(value.to_string()),
        }
    }
}

impl TryFrom<&str> for Feedback {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("rtcp-fb:")
            .ok_or(Self::Error::MalformedAttribute)?;
        let (payload_type, feedback_type) = value
            .split_once(" ")
            .ok_or(SDPParseError::MalformedAttribute)?;

        let payload_type = match payload_type {
            "*" => None,
            payload_type => Some(
                payload_type
                    .parse::<u8>()
                    .map_err(|_| SDPParseError::MalformedAttribute)?,
            ),
        };

        Ok(Feedback {
            payload_type,
            feedback_type: match feedback_type.trim() {
                "nack" => FeedbackType::NACK,
                "nack pli" => FeedbackType::PLI,
                "ccm fir" => FeedbackType::FIR,
                "goog-remb" => FeedbackType::REMB,
                "transport-cc" => FeedbackType::TransportCC,
                other => FeedbackType::Other(other.to_string()),
            },
        })
    }
}

impl TryFrom<&str> for RTPMap {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("rtpmap:")
            .ok_or(Self::Error::MalformedAttribute)?;
        let (payload_number, codec) = value
            .split_once(" ")
            .ok_or(SDPParseError::MalformedAttribute)?;

        let payload_number = payload_number
            .parse::<u8>()
            .map_err(|_| SDPParseError::MalformedAttribute)?;

        let mut split = codec.trim().split("/");
        let codec = split.next().ok_or(SDPParseError::MalformedAttribute)?;
        let clock_rate = split
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?
            .parse::<u32>()
            .map_err(|_| SDPParseError::MalformedAttribute)?;
        let channels = split
            .next()
            .map(|channels| channels.parse::<u8>())
            .transpose()
            .map_err(|_| SDPParseError::MalformedAttribute)?;

        Ok(RTPMap {
            payload_number,
            codec: codec.to_string(),
            clock_rate,
            channels,
        })
    }
}

impl TryFrom<&str> for MediaSSRC {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("ssrc:")
            .ok_or(Self::Error::MalformedAttribute)?;

        let (ssrc, attribute) = value
            .split_once(" ")
            .ok_or(SDPParseError::MalformedAttribute)?;

        let ssrc = ssrc
            .parse::<u32>()
            .map_err(|_| Self::Error::MalformedAttribute)?;

        Ok(MediaSSRC {
            ssrc,
            source_attribute: SourceAttribute::from(attribute.trim()),
        })
    }
}

impl From<&str> for SourceAttribute {
    fn from(value: &str) -> Self {
        match value.split_once(":") {
            Some((key, attribute_value)) => match key.to_ascii_lowercase().as_str() {
                "cname" => Self::CNAME(attribute_value.to_string()),
                "msid" => Self::Msid(attribute_value.to_string()),
                _ => Self::Other(key.to_string(), Some(attribute_value.to_string())),
            },
            None => Self::Other(value.to_string(), None),
        }
    }
}

impl TryFrom<&str> for SSRCGroup {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("ssrc-group:")
            .ok_or(Self::Error::MalformedAttribute)?;

        let mut split = value.split_whitespace();
        let semantics = split.next().ok_or(SDPParseError::MalformedAttribute)?;
        let ssrcs = split
            .map(|ssrc| ssrc.parse::<u32>())
            .collect::<Result<Vec<u32>, _>>()
            .map_err(|_| SDPParseError::MalformedAttribute)?;

        if ssrcs.is_empty() {
            return Err(SDPParseError::MalformedAttribute);
        }

        Ok(SSRCGroup {
            semantics: semantics.to_string(),
            ssrcs,
        })
    }
}

impl TryFrom<&str> for Setup {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("setup:")
            .ok_or(Self::Error::MalformedAttribute)?;

        match value.trim() {
            "actpass" => Ok(Self::ActivePassive),
            "active" => Ok(Self::Active),
            "passive" => Ok(Self::Passive),
            "holdconn" => Ok(Self::HoldConnection),
            _ => Err(Self::Error::MalformedAttribute),
        }
    }
}

impl TryFrom<&str> for FMTP {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("fmtp:")
            .ok_or(Self::Error::MalformedAttribute)?;
        let (payload_number, capabilities) = value
            .split_once(" ")
            .ok_or(SDPParseError::MalformedAttribute)?;

        let payload_number = payload_number
            .parse::<u8>()
            .map_err(|_| SDPParseError::MalformedAttribute)?;

        Ok(FMTP {
            format_capability: capabilities.trim().to_string(),
            payload_number,
        })
    }
}

impl TryFrom<&str> for ExtMap {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("extmap:")
            .ok_or(Self::Error::MalformedAttribute)?;
        let mut split = value.split_whitespace();

        let id_with_direction = split.next().ok_or(SDPParseError::MalformedAttribute)?;
        let (id, direction) = match id_with_direction.split_once("/") {
            Some((id, direction)) => (id, Some(direction.to_string())),
            None => (id_with_direction, None),
        };

        let id = id
            .parse::<u16>()
            .map_err(|_| SDPParseError::MalformedAttribute)?;
        let uri = split.next().ok_or(SDPParseError::MalformedAttribute)?;
        let attributes = split.collect::<Vec<_>>().join(" ");

        Ok(ExtMap {
            id,
            direction,
            uri: uri.to_string(),
            attributes: Some(attributes).filter(|attributes| !attributes.is_empty()),
        })
    }
}

impl TryFrom<&str> for Rid {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("rid:")
            .ok_or(Self::Error::MalformedAttribute)?;
        let mut split = value.trim().splitn(3, " ");

        let id = split.next().ok_or(SDPParseError::MalformedAttribute)?;
        let direction = split.next().ok_or(SDPParseError::MalformedAttribute)?;

        Ok(Rid {
            id: id.to_string(),
            direction: direction.to_string(),
            params: split.next().map(|params| params.trim().to_string()),
        })
    }
}

impl TryFrom<&str> for Simulcast {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("simulcast:")
            .ok_or(Self::Error::MalformedAttribute)?;
        let mut split = value.split_whitespace();

        let dir1 = split.next().ok_or(SDPParseError::MalformedAttribute)?;
        let list1 = split.next().ok_or(SDPParseError::MalformedAttribute)?;
        let dir2 = split.next();
        let list2 = split.next();

        if dir2.is_some() && list2.is_none() {
            return Err(SDPParseError::MalformedAttribute);
        }

        Ok(Simulcast {
            dir1: dir1.to_string(),
            list1: list1.to_string(),
            dir2: dir2.map(ToString::to_string),
            list2: list2.map(ToString::to_string),
        })
    }
}

impl TryFrom<&str> for Candidate {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("candidate:")
            .ok_or(Self::Error::MalformedAttribute)?;
        let mut split = value.split_whitespace();
        let foundation = split
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?
            .to_string();
        let component_id = split
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?
            .parse::<u16>()
            .map_err(|_| SDPParseError::MalformedAttribute)?;

        let transport = split
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?
            .to_string();

        let priority = split
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?
            .parse::<u32>()
            .map_err(|_| SDPParseError::MalformedAttribute)?;

        let connection_address = split
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?
            .to_string();

        let port = split
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?
            .parse::<u16>()
            .map_err(|_| SDPParseError::MalformedAttribute)?;

        if split.next() != Some("typ") {
            return Err(SDPParseError::MalformedAttribute);
        }
        let candidate_type = split
            .next()
            .ok_or(SDPParseError::MalformedAttribute)?
            .to_string();

        let mut related_address = None;
        let mut related_port = None;
        while let Some(key) = split.next() {
            let value = split.next();
            match key {
                "raddr" => related_address = value.map(ToString::to_string),
                "rport" => related_port = value.and_then(|port| port.parse::<u16>().ok()),
                _ => {}
            }
        }

        Ok(Candidate {
            component_id,
            foundation,
            transport,
            connection_address,
            port,
            priority,
            candidate_type,
            related_address,
            related_port,
        })
    }
}

impl TryFrom<&str> for ICEUsername {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("ice-ufrag:")
            .ok_or(Self::Error::MalformedAttribute)?;
        Ok(ICEUsername {
            username: value.trim().to_string(),
        })
    }
}

impl TryFrom<&str> for ICEPassword {
    type Error = SDPParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (_, value) = value
            .split_once("ice-pwd:")
            .ok_or(Self::Error::MalformedAttribute)?;
        Ok(ICEPassword {
            password: value.trim().to_string(),
        })
    }
}
