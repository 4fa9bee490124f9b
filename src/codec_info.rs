use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

const FIRST_DYNAMIC_PAYLOAD_TYPE: u8 = 96;
const LAST_DYNAMIC_PAYLOAD_TYPE: u8 = 127;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodecInfo {
    codec: String,
    payload_type: u8,
    params: IndexMap<String, String>,
    rtx: Option<u8>,
}

impl CodecInfo {
    pub fn new(codec: impl Into<String>, payload_type: u8) -> Self {
        Self {
            codec: codec.into(),
            payload_type,
            params: IndexMap::new(),
            rtx: None,
        }
    }

    pub fn with_params(
        codec: impl Into<String>,
        payload_type: u8,
        params: IndexMap<String, String>,
    ) -> Self {
        Self {
            params,
            ..Self::new(codec, payload_type)
        }
    }

    /// Builds a codec map with dynamic payload types from 96 upwards. With
    /// `rtx` every codec takes the number following its own for retransmission.
    /// Names that no longer fit in the dynamic range (96-127) are left out.
    pub fn map_from_names(names: &[&str], rtx: bool) -> IndexMap<u8, CodecInfo> {
        let mut codecs = IndexMap::new();
        let mut payload_type = FIRST_DYNAMIC_PAYLOAD_TYPE;
        let needed = if rtx { 2 } else { 1 };

        for (index, name) in names.iter().enumerate() {
            if LAST_DYNAMIC_PAYLOAD_TYPE + 1 - payload_type < needed {
                debug!(target: "SDP Processor", "Dynamic payload types exhausted, dropping {:?}", &names[index..]);
                break;
            }
            let mut codec = CodecInfo::new(*name, payload_type);
            payload_type += 1;
            if rtx {
                codec.set_rtx(payload_type);
                payload_type += 1;
            }
            codecs.insert(codec.payload_type, codec);
        }
        codecs
    }

    pub fn get_codec(&self) -> &str {
        &self.codec
    }

    pub fn get_type(&self) -> u8 {
        self.payload_type
    }

    pub fn set_type(&mut self, payload_type: u8) {
        self.payload_type = payload_type;
    }

    pub fn get_params(&self) -> &IndexMap<String, String> {
        &self.params
    }

    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn add_params(&mut self, params: IndexMap<String, String>) {
        self.params.extend(params);
    }

    pub fn has_rtx(&self) -> bool {
        self.rtx.is_some()
    }

    pub fn get_rtx(&self) -> Option<u8> {
        self.rtx
    }

    pub fn set_rtx(&mut self, rtx: u8) {
        self.rtx = Some(rtx);
    }

    pub fn remove_rtx(&mut self) {
        self.rtx = None;
    }

    pub(crate) fn is(&self, name: &str) -> bool {
        self.codec.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod codec_info {
    use crate::CodecInfo;

    #[test]
    fn maps_names_to_dynamic_payload_types() {
        let codecs = CodecInfo::map_from_names(&["vp8", "h264"], false);

        let types = codecs.keys().copied().collect::<Vec<_>>();
        assert_eq!(types, vec![96, 97]);
        assert_eq!(codecs[&97].get_codec(), "h264");
        assert!(!codecs[&96].has_rtx());
    }

    #[test]
    fn reserves_rtx_payload_types() {
        let codecs = CodecInfo::map_from_names(&["vp8", "vp9"], true);

        assert_eq!(codecs[&96].get_rtx(), Some(97));
        assert_eq!(codecs[&98].get_codec(), "vp9");
        assert_eq!(codecs[&98].get_rtx(), Some(99));
    }

    #[test]
    fn stops_at_the_end_of_the_dynamic_range() {
        let names = vec!["vp8"; 20];

        let codecs = CodecInfo::map_from_names(&names, true);

        assert_eq!(codecs.len(), 16);
        let last = codecs.last().map(|(_, codec)| codec).expect("Should map codecs");
        assert_eq!(last.get_type(), 126);
        assert_eq!(last.get_rtx(), Some(127));

        let codecs = CodecInfo::map_from_names(&names, false);
        assert_eq!(codecs.len(), 20);
        assert!(codecs.keys().all(|payload_type| *payload_type <= 127));
    }

    #[test]
    fn keeps_param_order() {
        let mut codec = CodecInfo::new("H264", 102);
        codec.add_param("profile-level-id", "42e01f");
        codec.add_param("packetization-mode", "1");

        let keys = codec.get_params().keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, vec!["profile-level-id", "packetization-mode"]);
        assert_eq!(codec.get_param("packetization-mode"), Some("1"));
        assert!(codec.is("h264"));
    }
}
