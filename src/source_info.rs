/// Attributes of one ssrc gathered from scattered `a=ssrc` lines while a
/// media section is processed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SourceInfo {
    pub(crate) ssrc: u32,
    pub(crate) cname: Option<String>,
    pub(crate) stream_id: Option<String>,
    pub(crate) track_id: Option<String>,
}

impl SourceInfo {
    pub(crate) fn new(ssrc: u32) -> Self {
        Self {
            ssrc,
            cname: None,
            stream_id: None,
            track_id: None,
        }
    }

    pub(crate) fn assign(&mut self, stream_id: &str, track_id: &str) {
        self.stream_id = Some(stream_id.to_string());
        self.track_id = Some(track_id.to_string());
    }

    pub(crate) fn owner(&self) -> Option<(&str, &str)> {
        Some((self.stream_id.as_deref()?, self.track_id.as_deref()?))
    }
}
