mod answer {
    use std::collections::HashMap;

    use semantic_sdp::{
        AnswerParams, CandidateInfo, CodecInfo, DTLSInfo, Direction, ICEInfo, MediaType,
        OfferParams, SDPInfo, Setup, SupportedMedia,
    };

    const BROWSER_OFFER: &str = "v=0\r\n\
    o=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n\
    s=-\r\n\
    t=0 0\r\n\
    a=group:BUNDLE 0 1 2\r\n\
    a=msid-semantic: WMS\r\n\
    a=ice-ufrag:E2Fr\r\n\
    a=ice-pwd:OpQzg1PAwUdeOB244chlgd\r\n\
    a=fingerprint:sha-256 EF:53:C9:F2\r\n\
    a=setup:actpass\r\n\
    m=audio 9 UDP/TLS/RTP/SAVPF 111 0\r\n\
    c=IN IP4 0.0.0.0\r\n\
    a=mid:0\r\n\
    a=extmap:1 urn:ietf:params:rtp-hdrext:ssrc-audio-level\r\n\
    a=sendonly\r\n\
    a=rtcp-mux\r\n\
    a=rtpmap:111 opus/48000/2\r\n\
    a=fmtp:111 minptime=10;useinbandfec=1\r\n\
    a=rtpmap:0 PCMU/8000\r\n\
    m=video 9 UDP/TLS/RTP/SAVPF 96 97\r\n\
    c=IN IP4 0.0.0.0\r\n\
    a=mid:1\r\n\
    a=extmap:3 urn:ietf:params:rtp-hdrext:sdes:mid\r\n\
    a=extmap:13 urn:3gpp:video-orientation\r\n\
    a=sendonly\r\n\
    a=rtcp-mux\r\n\
    a=rtpmap:96 VP8/90000\r\n\
    a=rtcp-fb:96 nack\r\n\
    a=rtpmap:97 rtx/90000\r\n\
    a=fmtp:97 apt=96\r\n\
    m=video 9 UDP/TLS/RTP/SAVPF 98\r\n\
    c=IN IP4 0.0.0.0\r\n\
    a=mid:2\r\n\
    a=recvonly\r\n\
    a=rtpmap:98 VP9/90000\r\n";

    fn local_params() -> AnswerParams {
        let mut audio_codecs = CodecInfo::map_from_names(&["opus"], false);
        if let Some(opus) = audio_codecs.get_mut(&96) {
            opus.add_param("stereo", "1");
        }

        let capabilities = HashMap::from([
            (
                MediaType::Audio,
                SupportedMedia {
                    codecs: audio_codecs,
                    extensions: vec![],
                    simulcast: false,
                },
            ),
            (
                MediaType::Video,
                SupportedMedia {
                    codecs: CodecInfo::map_from_names(&["vp8"], true),
                    extensions: vec!["urn:ietf:params:rtp-hdrext:sdes:mid".to_string()],
                    simulcast: true,
                },
            ),
        ]);

        AnswerParams {
            ice: ICEInfo::generate(true),
            dtls: DTLSInfo::new(Setup::Passive, "sha-256", "AA:BB:CC"),
            candidates: vec![CandidateInfo::new(
                "1", 1, "UDP", 2122317823, "127.0.0.1", 52000, "host",
            )],
            capabilities,
        }
    }

    #[test]
    fn answer_uses_local_transport() {
        let offer = SDPInfo::process(BROWSER_OFFER).expect("Should process offer");
        let params = local_params();

        let answer = offer.answer(&params);

        assert_eq!(answer.get_ice(), Some(&params.ice));
        assert_eq!(answer.get_dtls().map(DTLSInfo::get_setup), Some(Setup::Passive));
        assert_eq!(answer.get_candidates(), &params.candidates[..]);
        assert!(answer.get_streams().is_empty());
    }

    #[test]
    fn answer_keeps_media_order_and_reverses_direction() {
        let offer = SDPInfo::process(BROWSER_OFFER).expect("Should process offer");

        let answer = offer.answer(&local_params());

        let medias = answer
            .get_medias()
            .iter()
            .map(|media| (media.get_id(), media.get_direction()))
            .collect::<Vec<_>>();
        assert_eq!(
            medias,
            vec![
                ("0", Direction::RecvOnly),
                ("1", Direction::RecvOnly),
                ("2", Direction::SendOnly),
            ]
        );
    }

    #[test]
    fn answer_filters_codecs_and_extensions() {
        let offer = SDPInfo::process(BROWSER_OFFER).expect("Should process offer");

        let answer = offer.answer(&local_params());

        let audio = answer.get_media_by_id("0").expect("Audio should be answered");
        assert_eq!(audio.get_codecs().keys().copied().collect::<Vec<_>>(), vec![111]);
        assert_eq!(
            audio.get_codec_for_type(111).and_then(|opus| opus.get_param("stereo")),
            Some("1"),
            "Answered codec should carry local params"
        );
        assert!(audio.get_extensions().is_empty());

        let video = answer.get_media_by_id("1").expect("Video should be answered");
        assert_eq!(video.get_codec_for_type(96).and_then(CodecInfo::get_rtx), Some(97));
        assert_eq!(video.get_extensions().keys().copied().collect::<Vec<_>>(), vec![3]);

        let unsupported = answer.get_media_by_id("2").expect("VP9 media should be answered");
        assert!(unsupported.get_codecs().is_empty());
    }

    #[test]
    fn media_without_capabilities_is_inactive() {
        let offer = SDPInfo::process(BROWSER_OFFER).expect("Should process offer");
        let mut params = local_params();
        params.capabilities.remove(&MediaType::Video);

        let answer = offer.answer(&params);

        let video = answer.get_media_by_id("1").expect("Video should be answered");
        assert_eq!(video.get_direction(), Direction::Inactive);
        assert!(video.get_codecs().is_empty());
    }

    #[test]
    fn written_answer_processes_back() {
        let offer = SDPInfo::process(BROWSER_OFFER).expect("Should process offer");
        let answer = offer.answer(&local_params());

        let processed = SDPInfo::process(&answer.to_string()).expect("Should process answer");

        assert_eq!(processed.get_medias().len(), 3);
        assert_eq!(processed.get_ice(), answer.get_ice());
        assert!(processed.get_ice().is_some_and(ICEInfo::is_lite));
    }

    #[test]
    fn creates_offer_from_capabilities() {
        let params = local_params();
        let offer_params = OfferParams {
            ice: params.ice,
            dtls: DTLSInfo::new(Setup::ActPass, "sha-256", "AA:BB:CC"),
            candidates: params.candidates,
            capabilities: params.capabilities,
        };

        let offer = SDPInfo::create(&offer_params);

        let ids = offer
            .get_medias()
            .iter()
            .map(|media| media.get_id())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["audio", "video"]);
        let video = offer.get_media(MediaType::Video).expect("Video should exist");
        assert_eq!(video.get_direction(), Direction::SendRecv);
        assert_eq!(
            video.get_extensions().get(&1).map(String::as_str),
            Some("urn:ietf:params:rtp-hdrext:sdes:mid")
        );
    }
}
