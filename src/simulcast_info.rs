use serde::{Deserialize, Serialize};

use crate::DirectionWay;

/// One entry of a simulcast alternative set, referencing a RID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulcastStreamInfo {
    id: String,
    paused: bool,
}

impl SimulcastStreamInfo {
    pub fn new(id: impl Into<String>, paused: bool) -> Self {
        Self {
            id: id.into(),
            paused,
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl From<&sdp::SimulcastStreamEntry> for SimulcastStreamInfo {
    fn from(value: &sdp::SimulcastStreamEntry) -> Self {
        Self::new(value.scid.clone(), value.paused)
    }
}

impl From<&SimulcastStreamInfo> for sdp::SimulcastStreamEntry {
    fn from(value: &SimulcastStreamInfo) -> Self {
        Self {
            scid: value.id.clone(),
            paused: value.paused,
        }
    }
}

/// Send and receive stream lists of `a=simulcast`. Each inner list holds
/// equivalent alternatives, the outer order is the preference order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulcastInfo {
    send: Vec<Vec<SimulcastStreamInfo>>,
    recv: Vec<Vec<SimulcastStreamInfo>>,
}

impl SimulcastInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_simulcast_alternative_streams(
        &mut self,
        direction: DirectionWay,
        streams: Vec<SimulcastStreamInfo>,
    ) {
        match direction {
            DirectionWay::Send => self.send.push(streams),
            DirectionWay::Recv => self.recv.push(streams),
        }
    }

    pub fn add_simulcast_stream(&mut self, direction: DirectionWay, stream: SimulcastStreamInfo) {
        self.add_simulcast_alternative_streams(direction, vec![stream]);
    }

    pub fn get_simulcast_streams(&self, direction: DirectionWay) -> &[Vec<SimulcastStreamInfo>] {
        match direction {
            DirectionWay::Send => &self.send,
            DirectionWay::Recv => &self.recv,
        }
    }

    /// The same stream lists as seen by the remote side.
    pub fn reverse(&self) -> Self {
        Self {
            send: self.recv.clone(),
            recv: self.send.clone(),
        }
    }

    pub(crate) fn to_simulcast(&self) -> Option<sdp::Simulcast> {
        let mut lists = [DirectionWay::Send, DirectionWay::Recv]
            .into_iter()
            .filter(|direction| !self.get_simulcast_streams(*direction).is_empty())
            .map(|direction| {
                let entries = self
                    .get_simulcast_streams(direction)
                    .iter()
                    .map(|alternatives| {
                        alternatives
                            .iter()
                            .map(sdp::SimulcastStreamEntry::from)
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>();
                (
                    direction.to_string(),
                    sdp::write_simulcast_stream_list(&entries),
                )
            });

        let (dir1, list1) = lists.next()?;
        let second = lists.next();
        Some(sdp::Simulcast {
            dir1,
            list1,
            dir2: second.as_ref().map(|(direction, _)| direction.clone()),
            list2: second.map(|(_, list)| list),
        })
    }
}

#[cfg(test)]
mod simulcast_info {
    use crate::{DirectionWay, SimulcastInfo, SimulcastStreamInfo};

    #[test]
    fn swaps_directions_on_reverse() {
        let mut simulcast = SimulcastInfo::new();
        simulcast.add_simulcast_stream(DirectionWay::Send, SimulcastStreamInfo::new("a", false));

        let reversed = simulcast.reverse();

        assert!(reversed.get_simulcast_streams(DirectionWay::Send).is_empty());
        assert_eq!(reversed.get_simulcast_streams(DirectionWay::Recv).len(), 1);
    }

    #[test]
    fn writes_send_before_recv() {
        let mut simulcast = SimulcastInfo::new();
        simulcast.add_simulcast_stream(DirectionWay::Recv, SimulcastStreamInfo::new("r", false));
        simulcast.add_simulcast_alternative_streams(
            DirectionWay::Send,
            vec![
                SimulcastStreamInfo::new("1", false),
                SimulcastStreamInfo::new("2", true),
            ],
        );
        simulcast.add_simulcast_stream(DirectionWay::Send, SimulcastStreamInfo::new("3", false));

        let line = simulcast.to_simulcast().expect("Simulcast line should be written");

        assert_eq!(line.dir1, "send");
        assert_eq!(line.list1, "1,~2;3");
        assert_eq!(line.dir2.as_deref(), Some("recv"));
        assert_eq!(line.list2.as_deref(), Some("r"));
    }

    #[test]
    fn skips_empty_simulcast() {
        assert_eq!(SimulcastInfo::new().to_simulcast(), None);
    }
}
