use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::DirectionWay;

/// Restriction identifier declared with `a=rid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RIDInfo {
    id: String,
    direction: DirectionWay,
    formats: Vec<u8>,
    params: IndexMap<String, String>,
}

impl RIDInfo {
    pub fn new(id: impl Into<String>, direction: DirectionWay) -> Self {
        Self {
            id: id.into(),
            direction,
            formats: vec![],
            params: IndexMap::new(),
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_direction(&self) -> DirectionWay {
        self.direction
    }

    pub fn set_direction(&mut self, direction: DirectionWay) {
        self.direction = direction;
    }

    pub fn get_formats(&self) -> &[u8] {
        &self.formats
    }

    pub fn set_formats(&mut self, formats: Vec<u8>) {
        self.formats = formats;
    }

    pub fn get_params(&self) -> &IndexMap<String, String> {
        &self.params
    }

    pub fn add_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn set_params(&mut self, params: IndexMap<String, String>) {
        self.params = params;
    }

    /// Parameter string of the `a=rid` line, `pt=` first.
    pub(crate) fn params_string(&self) -> Option<String> {
        let mut params = IndexMap::new();
        if !self.formats.is_empty() {
            let formats = self
                .formats
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            params.insert("pt".to_string(), formats);
        }
        params.extend(self.params.clone());

        if params.is_empty() {
            return None;
        }
        Some(sdp::write_params(&params))
    }
}

#[cfg(test)]
mod rid_info {
    use crate::{DirectionWay, RIDInfo};

    #[test]
    fn writes_formats_before_params() {
        let mut rid = RIDInfo::new("hi", DirectionWay::Send);
        rid.add_param("max-width", "1280");
        rid.set_formats(vec![96, 97]);

        assert_eq!(
            rid.params_string().as_deref(),
            Some("pt=96,97;max-width=1280")
        );
    }

    #[test]
    fn omits_empty_params() {
        let rid = RIDInfo::new("lo", DirectionWay::Recv);

        assert_eq!(rid.params_string(), None);
    }
}
