use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

const UFRAG_LENGTH: usize = 8;
const PWD_LENGTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ICEInfo {
    ufrag: String,
    pwd: String,
    lite: bool,
    end_of_candidates: bool,
}

impl ICEInfo {
    pub fn new(ufrag: impl Into<String>, pwd: impl Into<String>) -> Self {
        Self {
            ufrag: ufrag.into(),
            pwd: pwd.into(),
            lite: false,
            end_of_candidates: false,
        }
    }

    /// Random credentials for a local description.
    pub fn generate(lite: bool) -> Self {
        let mut ice = Self::new(get_random_string(UFRAG_LENGTH), get_random_string(PWD_LENGTH));
        ice.set_lite(lite);
        ice
    }

    pub fn get_ufrag(&self) -> &str {
        &self.ufrag
    }

    pub fn get_pwd(&self) -> &str {
        &self.pwd
    }

    pub fn is_lite(&self) -> bool {
        self.lite
    }

    pub fn set_lite(&mut self, lite: bool) {
        self.lite = lite;
    }

    pub fn is_end_of_candidates(&self) -> bool {
        self.end_of_candidates
    }

    pub fn set_end_of_candidates(&mut self, end_of_candidates: bool) {
        self.end_of_candidates = end_of_candidates;
    }
}

fn get_random_string(size: usize) -> String {
    thread_rng()
        .sample_iter(Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod ice_info {
    use crate::ICEInfo;

    #[test]
    fn generates_alphanumeric_credentials() {
        let ice = ICEInfo::generate(true);

        assert_eq!(ice.get_ufrag().len(), 8);
        assert_eq!(ice.get_pwd().len(), 24);
        assert!(ice.get_pwd().chars().all(|symbol| symbol.is_ascii_alphanumeric()));
        assert!(ice.is_lite());
        assert!(!ice.is_end_of_candidates());
    }

    #[test]
    fn generated_credentials_differ() {
        let first = ICEInfo::generate(false);
        let second = ICEInfo::generate(false);

        assert_ne!(first.get_pwd(), second.get_pwd());
    }
}
