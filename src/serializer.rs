use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr};
use std::time::{SystemTime, UNIX_EPOCH};

use indexmap::IndexMap;
use sdp::{
    Bandwidth, ConnectionData, Feedback, FeedbackType, MediaDescription, MediaGroup, MediaSection,
    MediaSSRC, MediaTransportProtocol, Msid, MsidSemantic, Originator, RTPMap, SSRCGroup,
    SessionDescription, SessionTime, SourceAttribute, ExtMap, FMTP,
};

use crate::{CodecInfo, MediaInfo, MediaType, SDPInfo, TrackInfo};

const SESSION_NAME: &str = "semantic-sdp";
const DISCARD_PORT: u16 = 9;
const VIDEO_CLOCK_RATE: u32 = 90000;
const OPUS_CLOCK_RATE: u32 = 48000;
const OPUS_CHANNELS: u8 = 2;
const AUDIO_CLOCK_RATE: u32 = 8000;
const FLEXFEC: &str = "flexfec-03";
const RTX: &str = "rtx";

impl SDPInfo {
    /// Attribute tree of this session, ready for `sdp::write`.
    pub fn to_session_description(&self) -> SessionDescription {
        let mut media: Vec<MediaSection> = self
            .get_medias()
            .iter()
            .map(|media| self.media_section(media))
            .collect();

        for stream in self.get_streams().values() {
            for track in stream.get_tracks().values() {
                match track.get_media_id() {
                    Some(mid) => {
                        if let Some(section) = media
                            .iter_mut()
                            .find(|section| section.mid.as_deref() == Some(mid))
                        {
                            add_sources(section, stream.get_id(), track, false);
                            section.msid = Some(Msid {
                                stream_id: stream.get_id().to_string(),
                                track_id: Some(track.get_id().to_string()),
                            });
                        }
                    }
                    None => {
                        let media_type = sdp::MediaType::from(track.get_media());
                        for section in media
                            .iter_mut()
                            .filter(|section| section.description.media_type == media_type)
                        {
                            add_sources(section, stream.get_id(), track, true);
                        }
                    }
                }
            }
        }

        let mids = media
            .iter()
            .filter_map(|section| section.mid.clone())
            .collect::<Vec<_>>();

        SessionDescription {
            version: self.get_version(),
            origin: Some(Originator {
                username: "-".to_string(),
                session_id: unix_time().to_string(),
                session_version: self.get_version().to_string(),
                ip_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            }),
            session_name: Some(SESSION_NAME.to_string()),
            session_time: Some(SessionTime::default()),
            connection: Some(ConnectionData::default()),
            ice_lite: self.get_ice().is_some_and(|ice| ice.is_lite()),
            groups: vec![MediaGroup::Bundle(mids)],
            msid_semantic: Some(MsidSemantic {
                semantic: "WMS".to_string(),
                identifiers: vec!["*".to_string()],
            }),
            media,
            ..SessionDescription::default()
        }
    }

    fn media_section(&self, media: &MediaInfo) -> MediaSection {
        let payloads = media
            .get_codecs()
            .values()
            .flat_map(|codec| std::iter::once(codec.get_type()).chain(codec.get_rtx()))
            .map(|payload_type| payload_type.to_string())
            .collect();

        let mut section = MediaSection::new(MediaDescription {
            media_type: media.get_type().into(),
            transport_port: DISCARD_PORT,
            transport_protocol: MediaTransportProtocol::DtlsSrtp,
            media_format_description: payloads,
        });
        section.connection = Some(ConnectionData::default());
        if let Some(bitrate) = media.get_bitrate() {
            section.bandwidth.push(Bandwidth {
                bandwidth_type: "AS".to_string(),
                limit: bitrate,
            });
        }

        if let Some(ice) = self.get_ice() {
            section.ice_username = Some(ice.get_ufrag().to_string());
            section.ice_password = Some(ice.get_pwd().to_string());
            section.end_of_candidates = ice.is_end_of_candidates();
        }
        if let Some(dtls) = self.get_dtls() {
            section.fingerprint = Some(dtls.to_fingerprint());
            section.setup = Some(dtls.get_setup().into());
        }
        section.mid = Some(media.get_id().to_string());
        section.direction = Some(media.get_direction().into());
        section.rtcp_mux = true;
        section.rtcp_reduced_size = true;

        for codec in media.get_codecs().values() {
            add_codec(&mut section, media.get_type(), codec);
        }

        section.extensions = media
            .get_extensions()
            .iter()
            .map(|(id, uri)| ExtMap {
                id: *id,
                direction: None,
                uri: uri.clone(),
                attributes: None,
            })
            .collect();
        section.rids = media
            .get_rids()
            .values()
            .map(|rid| sdp::Rid {
                id: rid.get_id().to_string(),
                direction: rid.get_direction().to_string(),
                params: rid.params_string(),
            })
            .collect();
        section.simulcast = media.get_simulcast().and_then(|simulcast| simulcast.to_simulcast());
        section.candidates = self.get_candidates().iter().map(sdp::Candidate::from).collect();

        section
    }
}

impl Display for SDPInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", sdp::write(&self.to_session_description()))
    }
}

fn add_codec(section: &mut MediaSection, media_type: MediaType, codec: &CodecInfo) {
    let payload_type = codec.get_type();

    let rtp = match media_type {
        MediaType::Video => RTPMap {
            payload_number: payload_type,
            codec: codec.get_codec().to_uppercase(),
            clock_rate: VIDEO_CLOCK_RATE,
            channels: None,
        },
        MediaType::Audio if codec.is("opus") => RTPMap {
            payload_number: payload_type,
            codec: codec.get_codec().to_string(),
            clock_rate: OPUS_CLOCK_RATE,
            channels: Some(OPUS_CHANNELS),
        },
        MediaType::Audio => RTPMap {
            payload_number: payload_type,
            codec: codec.get_codec().to_string(),
            clock_rate: AUDIO_CLOCK_RATE,
            channels: None,
        },
    };
    section.rtp.push(rtp);

    let mut feedback_types = vec![];
    if media_type == MediaType::Video && !codec.is(FLEXFEC) {
        feedback_types.extend([FeedbackType::NACK, FeedbackType::PLI, FeedbackType::REMB]);
    }
    feedback_types.push(FeedbackType::TransportCC);
    section
        .feedback
        .extend(feedback_types.into_iter().map(|feedback_type| Feedback {
            payload_type: Some(payload_type),
            feedback_type,
        }));

    if !codec.get_params().is_empty() {
        section.fmtp.push(FMTP {
            payload_number: payload_type,
            format_capability: sdp::write_params(codec.get_params()),
        });
    }

    if let Some(rtx) = codec.get_rtx() {
        section.rtp.push(RTPMap {
            payload_number: rtx,
            codec: RTX.to_string(),
            clock_rate: VIDEO_CLOCK_RATE,
            channels: None,
        });
        section.fmtp.push(FMTP {
            payload_number: rtx,
            format_capability: sdp::write_params(&IndexMap::from([(
                "apt".to_string(),
                payload_type.to_string(),
            )])),
        });
    }
}

/// Writes the groups and ssrc lines of a track. Plan B needs the msid
/// repeated on every ssrc since a media line carries several tracks.
fn add_sources(section: &mut MediaSection, stream_id: &str, track: &TrackInfo, per_ssrc_msid: bool) {
    section
        .ssrc_groups
        .extend(track.get_source_groups().iter().map(SSRCGroup::from));

    for ssrc in track.get_ssrcs() {
        section.ssrcs.push(MediaSSRC {
            ssrc: *ssrc,
            source_attribute: SourceAttribute::CNAME(stream_id.to_string()),
        });
        if per_ssrc_msid {
            section.ssrcs.push(MediaSSRC {
                ssrc: *ssrc,
                source_attribute: SourceAttribute::Msid(format!("{} {}", stream_id, track.get_id())),
            });
        }
    }
}

fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
