mod whip_offer {
    use std::net::{IpAddr, Ipv4Addr};

    use sdp::{
        parse, parse_params, write, FeedbackType, HashFunction, MediaDirection, MediaGroup,
        MediaType, SDPParseError, Setup, SourceAttribute,
    };

    const VALID_SDP_OFFER: &str = "v=0\r\no=rtc 3767197920 0 IN IP4 127.0.0.1\r\ns=-\r\nt=0 0\r\na=group:BUNDLE 0 1\r\na=group:LS 0 1\r\na=msid-semantic:WMS *\r\na=setup:actpass\r\na=ice-ufrag:E2Fr\r\na=ice-pwd:OpQzg1PAwUdeOB244chlgd\r\na=ice-options:trickle\r\na=fingerprint:sha-256 EF:53:C9:F2:E0:A0:4F:1D:5E:99:4C:20:B8:D7:DE:21:3B:58:15:C4:E5:88:87:46:65:27:F7:3B:C6:DC:EF:3B\r\nm=audio 4557 UDP/TLS/RTP/SAVPF 111\r\nc=IN IP4 192.168.0.198\r\na=mid:0\r\na=sendonly\r\na=ssrc:1349455989 cname:0X2NGAsK9XcmnsuZ\r\na=ssrc:1349455989 msid:qUVEoh7TF9nLCrk4 qUVEoh7TF9nLCrk4-audio\r\na=msid:qUVEoh7TF9nLCrk4 qUVEoh7TF9nLCrk4-audio\r\na=rtcp-mux\r\na=rtpmap:111 opus/48000/2\r\na=fmtp:111 minptime=10;maxaveragebitrate=96000;stereo=1;sprop-stereo=1;useinbandfec=1\r\na=candidate:1 1 UDP 2015363327 192.168.0.198 4557 typ host\r\na=candidate:2 1 UDP 2015363583 fe80::6c3d:5b42:1532:2f9a 10007 typ host\r\na=end-of-candidates\r\nm=video 4557 UDP/TLS/RTP/SAVPF 96\r\nc=IN IP4 192.168.0.198\r\na=mid:1\r\na=sendonly\r\na=ssrc:1349455990 cname:0X2NGAsK9XcmnsuZ\r\na=ssrc:1349455990 msid:qUVEoh7TF9nLCrk4 qUVEoh7TF9nLCrk4-video\r\na=msid:qUVEoh7TF9nLCrk4 qUVEoh7TF9nLCrk4-video\r\na=rtcp-mux\r\na=rtpmap:96 H264/90000\r\na=rtcp-fb:96 nack\r\na=rtcp-fb:96 nack pli\r\na=rtcp-fb:96 goog-remb\r\na=fmtp:96 profile-level-id=42e01f;packetization-mode=1;level-asymmetry-allowed=1\r\n";

    #[test]
    fn parses_session_level_attributes() {
        let session = parse(VALID_SDP_OFFER).expect("Should parse offer");

        assert_eq!(session.ice_username.as_deref(), Some("E2Fr"));
        assert_eq!(
            session.ice_password.as_deref(),
            Some("OpQzg1PAwUdeOB244chlgd")
        );
        assert_eq!(session.setup, Some(Setup::ActivePassive));

        let fingerprint = session.fingerprint.expect("Fingerprint should be present");
        assert_eq!(fingerprint.hash_function, HashFunction::SHA256);
        assert!(fingerprint.hash.starts_with("EF:53:C9"));

        assert_eq!(
            session.groups,
            vec![
                MediaGroup::Bundle(vec!["0".to_string(), "1".to_string()]),
                MediaGroup::LipSync(vec!["0".to_string(), "1".to_string()]),
            ]
        );
        let msid_semantic = session.msid_semantic.expect("msid-semantic should be present");
        assert_eq!(msid_semantic.semantic, "WMS");
        assert_eq!(msid_semantic.identifiers, vec!["*".to_string()]);
    }

    #[test]
    fn parses_audio_media_section() {
        let session = parse(VALID_SDP_OFFER).expect("Should parse offer");
        let audio = &session.media[0];

        assert_eq!(audio.description.media_type, MediaType::Audio);
        assert_eq!(audio.description.transport_port, 4557);
        assert_eq!(audio.description.media_format_description, vec!["111"]);
        assert_eq!(
            audio.connection.as_ref().map(|connection| connection.ip),
            Some(IpAddr::V4(Ipv4Addr::new(192, 168, 0, 198)))
        );
        assert_eq!(audio.direction, Some(MediaDirection::SendOnly));
        assert!(audio.rtcp_mux);
        assert!(audio.end_of_candidates);
        assert_eq!(audio.candidates.len(), 2);
        assert_eq!(audio.candidates[1].connection_address, "fe80::6c3d:5b42:1532:2f9a");

        assert_eq!(audio.ssrcs.len(), 2);
        assert_eq!(
            audio.ssrcs[0].source_attribute,
            SourceAttribute::CNAME("0X2NGAsK9XcmnsuZ".to_string())
        );
        let msid = audio.msid.as_ref().expect("Media msid should be present");
        assert_eq!(msid.stream_id, "qUVEoh7TF9nLCrk4");
        assert_eq!(msid.track_id.as_deref(), Some("qUVEoh7TF9nLCrk4-audio"));

        let fmtp = parse_params(&audio.fmtp[0].format_capability);
        assert_eq!(fmtp.get("useinbandfec").map(String::as_str), Some("1"));
    }

    #[test]
    fn parses_video_feedback() {
        let session = parse(VALID_SDP_OFFER).expect("Should parse offer");
        let video = &session.media[1];

        assert_eq!(video.rtp[0].codec, "H264");
        assert_eq!(video.rtp[0].clock_rate, 90000);
        assert_eq!(
            video
                .feedback
                .iter()
                .map(|feedback| feedback.feedback_type.clone())
                .collect::<Vec<_>>(),
            vec![FeedbackType::NACK, FeedbackType::PLI, FeedbackType::REMB]
        );
    }

    #[test]
    fn written_offer_is_stable() {
        let session = parse(VALID_SDP_OFFER).expect("Should parse offer");

        let written = write(&session);
        let reparsed = parse(&written).expect("Should parse written offer");

        assert_eq!(session, reparsed, "Written SDP should parse to the same tree");
        assert_eq!(written, write(&reparsed), "Writing should be deterministic");
    }

    #[test]
    fn accepts_unix_line_endings() {
        let offer = VALID_SDP_OFFER.replace("\r\n", "\n");

        let session = parse(&offer).expect("Should parse offer");

        assert_eq!(session.media.len(), 2);
    }

    #[test]
    fn rejects_malformed_rtpmap() {
        let offer = "v=0\r\n\
    o=smid 3767197920 0 IN IP4 127.0.0.1\r\n\
    s=smid\r\n\
    t=0 0\r\n\
    m=video 52000 UDP/TLS/RTP/SAVPF 96\r\n\
    a=rtpmap:96\r\n";

        let result = parse(offer);

        assert_eq!(result, Err(SDPParseError::MalformedAttribute));
    }

    #[test]
    fn rejects_malformed_media_descriptor() {
        let offer = "v=0\r\n\
    o=smid 3767197920 0 IN IP4 127.0.0.1\r\n\
    s=smid\r\n\
    t=0 0\r\n\
    m=video port UDP/TLS/RTP/SAVPF 96\r\n";

        let result = parse(offer);

        assert_eq!(result, Err(SDPParseError::MalformedMediaDescriptor));
    }
}
