use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInfo {
    foundation: String,
    component_id: u16,
    transport: String,
    priority: u32,
    address: String,
    port: u16,
    candidate_type: String,
    rel_addr: Option<String>,
    rel_port: Option<u16>,
}

impl CandidateInfo {
    pub fn new(
        foundation: impl Into<String>,
        component_id: u16,
        transport: impl Into<String>,
        priority: u32,
        address: impl Into<String>,
        port: u16,
        candidate_type: impl Into<String>,
    ) -> Self {
        Self {
            foundation: foundation.into(),
            component_id,
            transport: transport.into(),
            priority,
            address: address.into(),
            port,
            candidate_type: candidate_type.into(),
            rel_addr: None,
            rel_port: None,
        }
    }

    pub fn with_related(mut self, rel_addr: impl Into<String>, rel_port: u16) -> Self {
        self.rel_addr = Some(rel_addr.into());
        self.rel_port = Some(rel_port);
        self
    }

    pub fn get_foundation(&self) -> &str {
        &self.foundation
    }

    pub fn get_component_id(&self) -> u16 {
        self.component_id
    }

    pub fn get_transport(&self) -> &str {
        &self.transport
    }

    pub fn get_priority(&self) -> u32 {
        self.priority
    }

    pub fn get_address(&self) -> &str {
        &self.address
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub fn get_type(&self) -> &str {
        &self.candidate_type
    }

    pub fn get_rel_addr(&self) -> Option<&str> {
        self.rel_addr.as_deref()
    }

    pub fn get_rel_port(&self) -> Option<u16> {
        self.rel_port
    }
}

impl From<&sdp::Candidate> for CandidateInfo {
    fn from(value: &sdp::Candidate) -> Self {
        Self {
            foundation: value.foundation.clone(),
            component_id: value.component_id,
            transport: value.transport.clone(),
            priority: value.priority,
            address: value.connection_address.clone(),
            port: value.port,
            candidate_type: value.candidate_type.clone(),
            rel_addr: value.related_address.clone(),
            rel_port: value.related_port,
        }
    }
}

impl From<&CandidateInfo> for sdp::Candidate {
    fn from(value: &CandidateInfo) -> Self {
        Self {
            foundation: value.foundation.clone(),
            component_id: value.component_id,
            transport: value.transport.clone(),
            priority: value.priority,
            connection_address: value.address.clone(),
            port: value.port,
            candidate_type: value.candidate_type.clone(),
            related_address: value.rel_addr.clone(),
            related_port: value.rel_port,
        }
    }
}
