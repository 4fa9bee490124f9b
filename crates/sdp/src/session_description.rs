use log::{debug, trace};

use crate::line_parsers::{
    Attribute, Bandwidth, Candidate, ConnectionData, Feedback, Fingerprint, ICEOptions,
    ICEPassword, ICEUsername, MediaDescription, MediaDirection, MediaGroup, MediaID, MediaSSRC,
    Msid, MsidSemantic, Originator, Rid, RTPMap, SDPLine, SDPParseError, SSRCGroup,
    SessionTime, Setup, Simulcast, ExtMap, FMTP,
};

/// Session level attribute tree of an SDP document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionDescription {
    pub version: u32,
    pub origin: Option<Originator>,
    pub session_name: Option<String>,
    pub session_time: Option<SessionTime>,
    pub connection: Option<ConnectionData>,
    pub ice_username: Option<String>,
    pub ice_password: Option<String>,
    pub ice_lite: bool,
    pub ice_options: Option<ICEOptions>,
    pub fingerprint: Option<Fingerprint>,
    pub setup: Option<Setup>,
    pub groups: Vec<MediaGroup>,
    pub msid_semantic: Option<MsidSemantic>,
    /// Header extensions declared before the first media section.
    pub extensions: Vec<ExtMap>,
    pub media: Vec<MediaSection>,
}

/// Attribute tree of a single `m=` section.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSection {
    pub description: MediaDescription,
    pub connection: Option<ConnectionData>,
    pub bandwidth: Vec<Bandwidth>,
    pub mid: Option<String>,
    pub direction: Option<MediaDirection>,
    pub rtcp_mux: bool,
    pub rtcp_reduced_size: bool,
    pub ice_username: Option<String>,
    pub ice_password: Option<String>,
    pub ice_options: Option<ICEOptions>,
    pub fingerprint: Option<Fingerprint>,
    pub setup: Option<Setup>,
    pub candidates: Vec<Candidate>,
    pub end_of_candidates: bool,
    pub rtp: Vec<RTPMap>,
    pub fmtp: Vec<FMTP>,
    pub feedback: Vec<Feedback>,
    pub extensions: Vec<ExtMap>,
    pub rids: Vec<Rid>,
    pub simulcast: Option<Simulcast>,
    pub ssrcs: Vec<MediaSSRC>,
    pub ssrc_groups: Vec<SSRCGroup>,
    pub msid: Option<Msid>,
}

impl MediaSection {
    pub fn new(description: MediaDescription) -> Self {
        Self {
            description,
            connection: None,
            bandwidth: vec![],
            mid: None,
            direction: None,
            rtcp_mux: false,
            rtcp_reduced_size: false,
            ice_username: None,
            ice_password: None,
            ice_options: None,
            fingerprint: None,
            setup: None,
            candidates: vec![],
            end_of_candidates: false,
            rtp: vec![],
            fmtp: vec![],
            feedback: vec![],
            extensions: vec![],
            rids: vec![],
            simulcast: None,
            ssrcs: vec![],
            ssrc_groups: vec![],
            msid: None,
        }
    }

    fn apply_attribute(&mut self, attribute: Attribute) {
        match attribute {
            Attribute::ICEUsername(attr) => self.ice_username = Some(attr.username),
            Attribute::ICEPassword(attr) => self.ice_password = Some(attr.password),
            Attribute::ICEOptions(attr) => self.ice_options = Some(attr),
            Attribute::Fingerprint(attr) => self.fingerprint = Some(attr),
            Attribute::Setup(attr) => self.setup = Some(attr),
            Attribute::MediaID(attr) => self.mid = Some(attr.id),
            Attribute::Direction(attr) => self.direction = Some(attr),
            Attribute::Msid(attr) => self.msid = Some(attr),
            Attribute::MediaSSRC(attr) => self.ssrcs.push(attr),
            Attribute::SSRCGroup(attr) => self.ssrc_groups.push(attr),
            Attribute::RTCPMux => self.rtcp_mux = true,
            Attribute::RTCPReducedSize => self.rtcp_reduced_size = true,
            Attribute::RTPMap(attr) => self.rtp.push(attr),
            Attribute::FMTP(attr) => self.fmtp.push(attr),
            Attribute::Feedback(attr) => self.feedback.push(attr),
            Attribute::ExtMap(attr) => self.extensions.push(attr),
            Attribute::Rid(attr) => self.rids.push(attr),
            Attribute::Simulcast(attr) => self.simulcast = Some(attr),
            Attribute::Candidate(attr) => self.candidates.push(attr),
            Attribute::EndOfCandidates => self.end_of_candidates = true,
            Attribute::ICELite
            | Attribute::MediaGroup(_)
            | Attribute::MsidSemantic(_)
            | Attribute::Unrecognized => {
                trace!(target: "SDP Parser", "Ignoring media level attribute {:?}", attribute)
            }
        }
    }

    fn to_lines(&self) -> Vec<SDPLine> {
        let mut lines = vec![SDPLine::MediaDescription(self.description.clone())];

        if let Some(connection) = &self.connection {
            lines.push(SDPLine::ConnectionData(connection.clone()));
        }
        for bandwidth in &self.bandwidth {
            lines.push(SDPLine::Bandwidth(bandwidth.clone()));
        }

        let mut attributes = vec![];
        if let Some(username) = &self.ice_username {
            attributes.push(Attribute::ICEUsername(ICEUsername {
                username: username.clone(),
            }));
        }
        if let Some(password) = &self.ice_password {
            attributes.push(Attribute::ICEPassword(ICEPassword {
                password: password.clone(),
            }));
        }
        if let Some(ice_options) = &self.ice_options {
            attributes.push(Attribute::ICEOptions(ice_options.clone()));
        }
        if let Some(fingerprint) = &self.fingerprint {
            attributes.push(Attribute::Fingerprint(fingerprint.clone()));
        }
        if let Some(setup) = &self.setup {
            attributes.push(Attribute::Setup(setup.clone()));
        }
        if let Some(mid) = &self.mid {
            attributes.push(Attribute::MediaID(MediaID { id: mid.clone() }));
        }
        attributes.extend(self.extensions.iter().cloned().map(Attribute::ExtMap));
        if let Some(direction) = &self.direction {
            attributes.push(Attribute::Direction(direction.clone()));
        }
        if let Some(msid) = &self.msid {
            attributes.push(Attribute::Msid(msid.clone()));
        }
        if self.rtcp_mux {
            attributes.push(Attribute::RTCPMux);
        }
        if self.rtcp_reduced_size {
            attributes.push(Attribute::RTCPReducedSize);
        }

        // Every rtpmap is followed by its own feedback and format lines
        for rtp in &self.rtp {
            attributes.push(Attribute::RTPMap(rtp.clone()));
            attributes.extend(
                self.feedback
                    .iter()
                    .filter(|feedback| feedback.payload_type == Some(rtp.payload_number))
                    .cloned()
                    .map(Attribute::Feedback),
            );
            attributes.extend(
                self.fmtp
                    .iter()
                    .filter(|fmtp| fmtp.payload_number == rtp.payload_number)
                    .cloned()
                    .map(Attribute::FMTP),
            );
        }
        let is_mapped = |payload_type: u8| {
            self.rtp
                .iter()
                .any(|rtp| rtp.payload_number == payload_type)
        };
        attributes.extend(
            self.feedback
                .iter()
                .filter(|feedback| !feedback.payload_type.is_some_and(is_mapped))
                .cloned()
                .map(Attribute::Feedback),
        );
        attributes.extend(
            self.fmtp
                .iter()
                .filter(|fmtp| !is_mapped(fmtp.payload_number))
                .cloned()
                .map(Attribute::FMTP),
        );

        attributes.extend(self.rids.iter().cloned().map(Attribute::Rid));
        if let Some(simulcast) = &self.simulcast {
            attributes.push(Attribute::Simulcast(simulcast.clone()));
        }
        attributes.extend(self.ssrc_groups.iter().cloned().map(Attribute::SSRCGroup));
        attributes.extend(self.ssrcs.iter().cloned().map(Attribute::MediaSSRC));
        attributes.extend(self.candidates.iter().cloned().map(Attribute::Candidate));
        if self.end_of_candidates {
            attributes.push(Attribute::EndOfCandidates);
        }

        lines.extend(attributes.into_iter().map(SDPLine::Attribute));
        lines
    }
}

impl SessionDescription {
    fn apply_attribute(&mut self, attribute: Attribute) -> Result<(), SDPParseError> {
        match attribute {
            Attribute::ICEUsername(attr) => self.ice_username = Some(attr.username),
            Attribute::ICEPassword(attr) => self.ice_password = Some(attr.password),
            Attribute::ICELite => self.ice_lite = true,
            Attribute::ICEOptions(attr) => self.ice_options = Some(attr),
            Attribute::Fingerprint(attr) => self.fingerprint = Some(attr),
            Attribute::Setup(attr) => self.setup = Some(attr),
            Attribute::MediaGroup(attr) => self.groups.push(attr),
            Attribute::MsidSemantic(attr) => self.msid_semantic = Some(attr),
            Attribute::ExtMap(attr) => self.extensions.push(attr),
            Attribute::Unrecognized => {
                trace!(target: "SDP Parser", "Ignoring unrecognized session attribute")
            }
            // Session level direction is allowed but carries no meaning for the media tree
            Attribute::Direction(_) => {}
            _ => {
                debug!(target: "SDP Parser", "Media attribute {:?} found before any media description", attribute);
                return Err(SDPParseError::SequenceError);
            }
        }
        Ok(())
    }

    fn to_lines(&self) -> Vec<SDPLine> {
        let mut lines = vec![
            SDPLine::ProtocolVersion(self.version),
            SDPLine::Originator(self.origin.clone().unwrap_or_default()),
            SDPLine::SessionName(self.session_name.clone().unwrap_or_else(|| "-".to_string())),
        ];
        if let Some(connection) = &self.connection {
            lines.push(SDPLine::ConnectionData(connection.clone()));
        }
        lines.push(SDPLine::SessionTime(
            self.session_time.clone().unwrap_or_default(),
        ));

        let mut attributes = vec![];
        attributes.extend(self.groups.iter().cloned().map(Attribute::MediaGroup));
        if let Some(msid_semantic) = &self.msid_semantic {
            attributes.push(Attribute::MsidSemantic(msid_semantic.clone()));
        }
        if self.ice_lite {
            attributes.push(Attribute::ICELite);
        }
        if let Some(username) = &self.ice_username {
            attributes.push(Attribute::ICEUsername(ICEUsername {
                username: username.clone(),
            }));
        }
        if let Some(password) = &self.ice_password {
            attributes.push(Attribute::ICEPassword(ICEPassword {
                password: password.clone(),
            }));
        }
        if let Some(ice_options) = &self.ice_options {
            attributes.push(Attribute::ICEOptions(ice_options.clone()));
        }
        if let Some(fingerprint) = &self.fingerprint {
            attributes.push(Attribute::Fingerprint(fingerprint.clone()));
        }
        if let Some(setup) = &self.setup {
            attributes.push(Attribute::Setup(setup.clone()));
        }
        attributes.extend(self.extensions.iter().cloned().map(Attribute::ExtMap));
        lines.extend(attributes.into_iter().map(SDPLine::Attribute));

        for media in &self.media {
            lines.extend(media.to_lines());
        }
        lines
    }
}

/// Tokenizes an SDP document into its attribute tree.
///
/// Attribute lines before the first `m=` line belong to the session, the
/// following ones to the closest preceding media section.
pub fn parse(input: &str) -> Result<SessionDescription, SDPParseError> {
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let version = match SDPLine::try_from(lines.next().ok_or(SDPParseError::SequenceError)?)? {
        SDPLine::ProtocolVersion(version) => version,
        _ => return Err(SDPParseError::SequenceError),
    };

    let mut session = SessionDescription {
        version,
        ..SessionDescription::default()
    };

    for line in lines {
        let sdp_line = SDPLine::try_from(line).inspect_err(|err| {
            debug!(target: "SDP Parser", "Failed to parse line {} with error: {}", line, err)
        })?;

        match sdp_line {
            SDPLine::ProtocolVersion(_) => return Err(SDPParseError::SequenceError),
            SDPLine::Originator(originator) => session.origin = Some(originator),
            SDPLine::SessionName(name) => session.session_name = Some(name),
            SDPLine::SessionTime(time) => session.session_time = Some(time),
            SDPLine::MediaDescription(description) => {
                session.media.push(MediaSection::new(description))
            }
            SDPLine::ConnectionData(connection) => match session.media.last_mut() {
                Some(media) => media.connection = Some(connection),
                None => session.connection = Some(connection),
            },
            SDPLine::Bandwidth(bandwidth) => match session.media.last_mut() {
                Some(media) => media.bandwidth.push(bandwidth),
                None => {
                    trace!(target: "SDP Parser", "Ignoring session level bandwidth {:?}", bandwidth)
                }
            },
            SDPLine::Attribute(attribute) => match session.media.last_mut() {
                Some(media) => media.apply_attribute(attribute),
                None => session.apply_attribute(attribute)?,
            },
            SDPLine::Unrecognized => {
                trace!(target: "SDP Parser", "Ignoring unrecognized line {}", line)
            }
        }
    }

    Ok(session)
}

/// Serializes an attribute tree into an SDP document with `\r\n` line endings.
pub fn write(session: &SessionDescription) -> String {
    session
        .to_lines()
        .into_iter()
        .map(String::from)
        .map(|line| line + "\r\n")
        .collect()
}
