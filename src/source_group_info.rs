use serde::{Deserialize, Serialize};

/// Named group of ssrcs, e.g. `FID` for retransmission or `SIM` for simulcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceGroupInfo {
    semantics: String,
    ssrcs: Vec<u32>,
}

impl SourceGroupInfo {
    pub fn new(semantics: impl Into<String>, ssrcs: Vec<u32>) -> Self {
        Self {
            semantics: semantics.into(),
            ssrcs,
        }
    }

    pub fn get_semantics(&self) -> &str {
        &self.semantics
    }

    pub fn get_ssrcs(&self) -> &[u32] {
        &self.ssrcs
    }
}

impl From<&SourceGroupInfo> for sdp::SSRCGroup {
    fn from(value: &SourceGroupInfo) -> Self {
        Self {
            semantics: value.semantics.clone(),
            ssrcs: value.ssrcs.clone(),
        }
    }
}
