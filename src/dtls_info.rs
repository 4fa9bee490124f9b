use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// DTLS role negotiated through `a=setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setup {
    Active,
    Passive,
    ActPass,
    Inactive,
}

impl Setup {
    pub fn by_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "passive" => Some(Self::Passive),
            "actpass" => Some(Self::ActPass),
            "inactive" | "holdconn" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Role an answerer takes for the offered role.
    pub fn reverse(self) -> Self {
        match self {
            Setup::Active => Setup::Passive,
            Setup::Passive => Setup::Active,
            Setup::ActPass => Setup::Passive,
            Setup::Inactive => Setup::Inactive,
        }
    }
}

impl Display for Setup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Setup::Active => "active",
            Setup::Passive => "passive",
            Setup::ActPass => "actpass",
            Setup::Inactive => "holdconn",
        };
        write!(f, "{}", value)
    }
}

impl From<&sdp::Setup> for Setup {
    fn from(value: &sdp::Setup) -> Self {
        match value {
            sdp::Setup::ActivePassive => Setup::ActPass,
            sdp::Setup::Active => Setup::Active,
            sdp::Setup::Passive => Setup::Passive,
            sdp::Setup::HoldConnection => Setup::Inactive,
        }
    }
}

impl From<Setup> for sdp::Setup {
    fn from(value: Setup) -> Self {
        match value {
            Setup::ActPass => sdp::Setup::ActivePassive,
            Setup::Active => sdp::Setup::Active,
            Setup::Passive => sdp::Setup::Passive,
            Setup::Inactive => sdp::Setup::HoldConnection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DTLSInfo {
    setup: Setup,
    hash: String,
    fingerprint: String,
}

impl DTLSInfo {
    pub fn new(setup: Setup, hash: impl Into<String>, fingerprint: impl Into<String>) -> Self {
        Self {
            setup,
            hash: hash.into(),
            fingerprint: fingerprint.into(),
        }
    }

    pub fn get_setup(&self) -> Setup {
        self.setup
    }

    pub fn set_setup(&mut self, setup: Setup) {
        self.setup = setup;
    }

    pub fn get_hash(&self) -> &str {
        &self.hash
    }

    pub fn get_fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub(crate) fn to_fingerprint(&self) -> sdp::Fingerprint {
        sdp::Fingerprint {
            hash_function: sdp::HashFunction::from(self.hash.as_str()),
            hash: self.fingerprint.clone(),
        }
    }
}

#[cfg(test)]
mod dtls_info {
    use crate::{DTLSInfo, Setup};

    #[test]
    fn answers_actpass_as_passive() {
        assert_eq!(Setup::ActPass.reverse(), Setup::Passive);
        assert_eq!(Setup::Active.reverse(), Setup::Passive);
        assert_eq!(Setup::Passive.reverse(), Setup::Active);
    }

    #[test]
    fn accepts_holdconn_as_inactive() {
        assert_eq!(Setup::by_value("holdconn"), Some(Setup::Inactive));
        assert_eq!(Setup::Inactive.to_string(), "holdconn");
    }

    #[test]
    fn builds_wire_fingerprint() {
        let dtls = DTLSInfo::new(Setup::Active, "sha-256", "AA:BB");

        let fingerprint = dtls.to_fingerprint();

        assert_eq!(fingerprint.hash_function, sdp::HashFunction::SHA256);
        assert_eq!(fingerprint.hash, "AA:BB");
    }
}
