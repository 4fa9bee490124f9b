use indexmap::IndexMap;
use log::{debug, trace};
use sdp::{MediaSection, SessionDescription, SourceAttribute};

use crate::error::{Error, Result};
use crate::source_info::SourceInfo;
use crate::{
    CandidateInfo, CodecInfo, DTLSInfo, Direction, DirectionWay, ICEInfo, MediaInfo, MediaType,
    RIDInfo, SDPInfo, Setup, SimulcastInfo, SimulcastStreamInfo, SourceGroupInfo,
    TrackEncodingInfo, TrackInfo,
};

const APPLICATION_SPECIFIC_BANDWIDTH: &str = "AS";
const RID_FORMATS_PARAM: &str = "pt";
const RTX_APT_PARAM: &str = "apt";

impl SDPInfo {
    /// Parses an SDP document into its semantic graph.
    ///
    /// Media lines other than audio and video are skipped. All media lines
    /// are expected to share a single bundled transport: the session ICE and
    /// DTLS info end up as the one of the last media line.
    pub fn process(input: &str) -> Result<SDPInfo> {
        let session = sdp::parse(input)?;
        let mut sdp_info = SDPInfo::new(session.version);

        for (media_index, media) in session.media.iter().enumerate() {
            let Some(media_type) = MediaType::from_sdp(&media.description.media_type) else {
                debug!(target: "SDP Processor", "Skipping {:?} media at index {}", media.description.media_type, media_index);
                continue;
            };
            let mid = media
                .mid
                .clone()
                .unwrap_or_else(|| media_index.to_string());

            let mut media_info = MediaInfo::new(mid.clone(), media_type);
            media_info.set_direction(media.direction.as_ref().map(Direction::from).unwrap_or_default());

            sdp_info.set_ice(process_ice(&session, media, media_index)?);
            sdp_info.set_dtls(process_dtls(&session, media, media_index)?);

            for codec in process_codecs(media).into_values() {
                media_info.add_codec(codec);
            }
            let extensions = if media.extensions.is_empty() {
                &session.extensions
            } else {
                &media.extensions
            };
            for extension in extensions {
                media_info.add_extension(extension.id, extension.uri.clone());
            }
            for rid in &media.rids {
                media_info.add_rid(process_rid(rid, media_index)?);
            }

            let mut encodings = vec![];
            if let Some(simulcast) = &media.simulcast {
                let simulcast = process_simulcast(simulcast, media_index)?;
                encodings = process_encodings(&simulcast, &media_info);
                media_info.set_simulcast(simulcast);
            }

            process_sources(&mut sdp_info, media, media_index, &mid, media_type, &encodings)?;

            if let Some(bandwidth) = media
                .bandwidth
                .iter()
                .find(|bandwidth| bandwidth.bandwidth_type == APPLICATION_SPECIFIC_BANDWIDTH)
            {
                media_info.set_bitrate(bandwidth.limit);
            }
            sdp_info.add_candidates(media.candidates.iter().map(CandidateInfo::from));

            debug!(target: "SDP Processor", "Processed {} media with mid {}", media_type, mid);
            sdp_info.add_media(media_info);
        }

        Ok(sdp_info)
    }
}

fn process_ice(
    session: &SessionDescription,
    media: &MediaSection,
    media_index: usize,
) -> Result<ICEInfo> {
    let ufrag = media.ice_username.as_ref().or(session.ice_username.as_ref());
    let pwd = media.ice_password.as_ref().or(session.ice_password.as_ref());

    match (ufrag, pwd) {
        (Some(ufrag), Some(pwd)) => {
            let mut ice = ICEInfo::new(ufrag.clone(), pwd.clone());
            ice.set_lite(session.ice_lite);
            ice.set_end_of_candidates(media.end_of_candidates);
            Ok(ice)
        }
        _ => Err(Error::MissingIceCredentials { media_index }),
    }
}

fn process_dtls(
    session: &SessionDescription,
    media: &MediaSection,
    media_index: usize,
) -> Result<DTLSInfo> {
    let fingerprint = media
        .fingerprint
        .as_ref()
        .or(session.fingerprint.as_ref())
        .ok_or(Error::MissingFingerprint { media_index })?;
    let setup = media
        .setup
        .as_ref()
        .or(session.setup.as_ref())
        .map(Setup::from)
        .unwrap_or(Setup::ActPass);

    Ok(DTLSInfo::new(
        setup,
        String::from(fingerprint.hash_function.clone()),
        fingerprint.hash.clone(),
    ))
}

/// Builds the codec map of a media line. RED and ULPFEC are not modeled and
/// RTX payloads are attached to the codec their `apt` points at.
fn process_codecs(media: &MediaSection) -> IndexMap<u8, CodecInfo> {
    let mut codecs = IndexMap::new();
    let mut retransmissions = vec![];

    for rtp in &media.rtp {
        let name = rtp.codec.as_str();
        if name.eq_ignore_ascii_case("RED") || name.eq_ignore_ascii_case("ULPFEC") {
            trace!(target: "SDP Processor", "Skipping {} payload {}", name, rtp.payload_number);
            continue;
        }

        let mut params = IndexMap::new();
        for fmtp in media
            .fmtp
            .iter()
            .filter(|fmtp| fmtp.payload_number == rtp.payload_number)
        {
            params.extend(sdp::parse_params(&fmtp.format_capability));
        }

        if name.eq_ignore_ascii_case("RTX") {
            match params.get(RTX_APT_PARAM).and_then(|apt| apt.parse::<u8>().ok()) {
                Some(apt) => retransmissions.push((apt, rtp.payload_number)),
                None => trace!(target: "SDP Processor", "RTX payload {} has no apt", rtp.payload_number),
            }
            continue;
        }

        codecs.insert(
            rtp.payload_number,
            CodecInfo::with_params(name, rtp.payload_number, params),
        );
    }

    for (apt, rtx) in retransmissions {
        match codecs.get_mut(&apt) {
            Some(codec) => codec.set_rtx(rtx),
            None => trace!(target: "SDP Processor", "Dropping RTX payload {} for unknown apt {}", rtx, apt),
        }
    }

    codecs
}

fn process_rid(rid: &sdp::Rid, media_index: usize) -> Result<RIDInfo> {
    let direction = DirectionWay::by_value(&rid.direction).ok_or_else(|| Error::InvalidDirectionWay {
        media_index,
        value: rid.direction.clone(),
    })?;
    let mut rid_info = RIDInfo::new(rid.id.clone(), direction);

    let params = rid
        .params
        .as_deref()
        .map(sdp::parse_params)
        .unwrap_or_default();
    for (key, value) in params {
        if key == RID_FORMATS_PARAM {
            let formats = value
                .split(",")
                .filter_map(|format| format.trim().parse::<u8>().ok())
                .collect();
            rid_info.set_formats(formats);
        } else {
            rid_info.add_param(key, value);
        }
    }

    Ok(rid_info)
}

fn process_simulcast(simulcast: &sdp::Simulcast, media_index: usize) -> Result<SimulcastInfo> {
    let mut simulcast_info = SimulcastInfo::new();

    let lists = [
        Some((&simulcast.dir1, &simulcast.list1)),
        simulcast.dir2.as_ref().zip(simulcast.list2.as_ref()),
    ];
    for (direction, list) in lists.into_iter().flatten() {
        let direction = DirectionWay::by_value(direction).ok_or_else(|| Error::InvalidDirectionWay {
            media_index,
            value: direction.clone(),
        })?;
        for alternatives in sdp::parse_simulcast_stream_list(list) {
            simulcast_info.add_simulcast_alternative_streams(
                direction,
                alternatives.iter().map(SimulcastStreamInfo::from).collect(),
            );
        }
    }

    Ok(simulcast_info)
}

/// Sending encodings of the media, one set per send alternative list.
/// Streams without a declared RID and sets left empty are dropped.
fn process_encodings(
    simulcast: &SimulcastInfo,
    media_info: &MediaInfo,
) -> Vec<Vec<TrackEncodingInfo>> {
    simulcast
        .get_simulcast_streams(DirectionWay::Send)
        .iter()
        .map(|alternatives| {
            alternatives
                .iter()
                .filter_map(|stream| {
                    let rid = media_info.get_rid(stream.get_id())?;
                    let mut encoding = TrackEncodingInfo::new(rid.get_id(), stream.is_paused());
                    for format in rid.get_formats() {
                        if let Some(codec) = media_info.get_codec_for_type(*format) {
                            encoding.add_codec(codec.clone());
                        }
                    }
                    encoding.set_params(rid.get_params().clone());
                    Some(encoding)
                })
                .collect::<Vec<_>>()
        })
        .filter(|encodings| !encodings.is_empty())
        .collect()
}

/// Correlates the `a=ssrc`, `a=msid` and `a=ssrc-group` lines of a media
/// section into streams and tracks.
fn process_sources(
    sdp_info: &mut SDPInfo,
    media: &MediaSection,
    media_index: usize,
    mid: &str,
    media_type: MediaType,
    encodings: &[Vec<TrackEncodingInfo>],
) -> Result<()> {
    let new_track = |track_id: &str| {
        let mut track = TrackInfo::new(media_type, track_id);
        track.set_encodings(encodings.to_vec());
        track
    };
    let mut sources: IndexMap<u32, SourceInfo> = IndexMap::new();

    for media_ssrc in &media.ssrcs {
        let source = sources
            .entry(media_ssrc.ssrc)
            .or_insert_with(|| SourceInfo::new(media_ssrc.ssrc));

        match &media_ssrc.source_attribute {
            SourceAttribute::CNAME(cname) => source.cname = Some(cname.clone()),
            SourceAttribute::Msid(msid) => {
                let (stream_id, track_id) = msid
                    .split_once(" ")
                    .map(|(stream_id, track_id)| (stream_id.trim(), track_id.trim()))
                    .filter(|(_, track_id)| !track_id.is_empty())
                    .ok_or_else(|| Error::MalformedMsid {
                        media_index,
                        value: msid.clone(),
                    })?;
                source.assign(stream_id, track_id);
                sdp_info
                    .track_entry(stream_id, track_id, || new_track(track_id))
                    .add_ssrc(media_ssrc.ssrc);
            }
            SourceAttribute::Other(name, _) => {
                trace!(target: "SDP Processor", "Ignoring ssrc {} attribute {}", media_ssrc.ssrc, name)
            }
        }
    }

    if let Some(msid) = &media.msid {
        let track_id = msid
            .track_id
            .as_deref()
            .ok_or_else(|| Error::MalformedMsid {
                media_index,
                value: msid.stream_id.clone(),
            })?;
        let track = sdp_info.track_entry(&msid.stream_id, track_id, || new_track(track_id));
        track.set_media_id(mid);

        for source in sources.values_mut().filter(|source| source.stream_id.is_none()) {
            source.assign(&msid.stream_id, track_id);
            track.add_ssrc(source.ssrc);
        }
    }

    for group in &media.ssrc_groups {
        let mut owner: Option<(&str, &str)> = None;
        for ssrc in &group.ssrcs {
            let source = sources.get(ssrc).ok_or(Error::UnresolvedSourceGroup {
                media_index,
                ssrc: *ssrc,
            })?;
            match (owner, source.owner()) {
                (None, first) => {
                    owner = Some(first.ok_or(Error::UnresolvedSourceGroup {
                        media_index,
                        ssrc: *ssrc,
                    })?);
                }
                (Some(group_owner), Some(member_owner)) if group_owner != member_owner => {
                    debug!(target: "SDP Processor", "Grouped ssrc {} of {:?} also joins {:?} through {} group", ssrc, member_owner, group_owner, group.semantics);
                }
                _ => {}
            }
        }
        let Some((stream_id, track_id)) = owner else {
            continue;
        };

        if let Some(track) = sdp_info
            .get_stream_mut(stream_id)
            .and_then(|stream| stream.get_track_mut(track_id))
        {
            track.add_source_group(SourceGroupInfo::new(group.semantics.clone(), group.ssrcs.clone()));
        }
    }

    for source in sources.values() {
        trace!(target: "SDP Processor", "Source {} cname {:?} owned by {:?}", source.ssrc, source.cname, source.owner());
    }

    Ok(())
}

#[cfg(test)]
mod process {
    use crate::error::Error;
    use crate::{Direction, DirectionWay, MediaType, SDPInfo, Setup};

    const SESSION: &str = "v=0\r\n\
o=- 1 2 IN IP4 127.0.0.1\r\n\
s=-\r\n\
t=0 0\r\n\
a=ice-ufrag:abcd\r\n\
a=ice-pwd:0123456789abcdefghijkl\r\n\
a=fingerprint:sha-256 AA:BB:CC\r\n";

    fn with_session(media: &str) -> String {
        format!("{SESSION}{media}")
    }

    #[test]
    fn defaults_mid_direction_and_setup() {
        let input = with_session("m=audio 9 UDP/TLS/RTP/SAVPF 0\r\na=rtpmap:0 PCMU/8000\r\n");

        let sdp_info = SDPInfo::process(&input).expect("Should process");

        let media = &sdp_info.get_medias()[0];
        assert_eq!(media.get_id(), "0");
        assert_eq!(media.get_direction(), Direction::SendRecv);
        let dtls = sdp_info.get_dtls().expect("DTLS should be set");
        assert_eq!(dtls.get_setup(), Setup::ActPass);
        assert_eq!(dtls.get_hash(), "sha-256");
    }

    #[test]
    fn skips_application_media() {
        let input = with_session(
            "m=application 9 UDP/DTLS/SCTP webrtc-datachannel\r\na=mid:data\r\n\
m=video 9 UDP/TLS/RTP/SAVPF 96\r\na=mid:v\r\na=rtpmap:96 VP8/90000\r\n",
        );

        let sdp_info = SDPInfo::process(&input).expect("Should process");

        assert_eq!(sdp_info.get_medias().len(), 1);
        assert_eq!(sdp_info.get_medias()[0].get_type(), MediaType::Video);
    }

    #[test]
    fn rejects_unknown_rid_direction() {
        let input = with_session(
            "m=video 9 UDP/TLS/RTP/SAVPF 96\r\na=rtpmap:96 VP8/90000\r\na=rid:hi sendrecv\r\n",
        );

        let result = SDPInfo::process(&input);

        assert!(matches!(
            result,
            Err(Error::InvalidDirectionWay { media_index: 0, .. })
        ));
    }

    #[test]
    fn rejects_msid_without_track() {
        let input = with_session(
            "m=audio 9 UDP/TLS/RTP/SAVPF 111\r\na=rtpmap:111 opus/48000/2\r\na=ssrc:1 msid:stream\r\n",
        );

        let result = SDPInfo::process(&input);

        assert!(matches!(result, Err(Error::MalformedMsid { .. })));
    }

    #[test]
    fn reads_rid_formats_and_params() {
        let input = with_session(
            "m=video 9 UDP/TLS/RTP/SAVPF 96 97\r\n\
a=rtpmap:96 VP8/90000\r\n\
a=rtpmap:97 H264/90000\r\n\
a=rid:lo send pt=96,97;max-width=320\r\n",
        );

        let sdp_info = SDPInfo::process(&input).expect("Should process");

        let rid = sdp_info.get_medias()[0]
            .get_rid("lo")
            .expect("RID should be present");
        assert_eq!(rid.get_direction(), DirectionWay::Send);
        assert_eq!(rid.get_formats(), &[96, 97]);
        assert_eq!(rid.get_params().get("max-width").map(String::as_str), Some("320"));
        assert!(!rid.get_params().contains_key("pt"));
    }

    #[test]
    fn reads_bitrate_and_candidates() {
        let input = with_session(
            "m=audio 9 UDP/TLS/RTP/SAVPF 111\r\n\
b=AS:64\r\n\
a=rtpmap:111 opus/48000/2\r\n\
a=candidate:1 1 UDP 2015363327 192.168.0.198 4557 typ host\r\n\
a=end-of-candidates\r\n\
m=video 9 UDP/TLS/RTP/SAVPF 96\r\n\
a=rtpmap:96 VP8/90000\r\n\
a=candidate:1 1 UDP 2015363327 192.168.0.198 4557 typ host\r\n",
        );

        let sdp_info = SDPInfo::process(&input).expect("Should process");

        assert_eq!(sdp_info.get_medias()[0].get_bitrate(), Some(64));
        assert_eq!(sdp_info.get_medias()[1].get_bitrate(), None);
        assert_eq!(sdp_info.get_candidates().len(), 1, "Bundled candidates should be merged");
        assert_eq!(sdp_info.get_candidates()[0].get_port(), 4557);
    }
}
