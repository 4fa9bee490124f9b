use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Media line direction, as seen by the side that wrote the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    SendRecv,
    SendOnly,
    RecvOnly,
    Inactive,
}

impl Direction {
    pub fn by_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "sendrecv" => Some(Self::SendRecv),
            "sendonly" => Some(Self::SendOnly),
            "recvonly" => Some(Self::RecvOnly),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::SendOnly => Direction::RecvOnly,
            Direction::RecvOnly => Direction::SendOnly,
            Direction::SendRecv => Direction::SendRecv,
            Direction::Inactive => Direction::Inactive,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::SendRecv
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Direction::SendRecv => "sendrecv",
            Direction::SendOnly => "sendonly",
            Direction::RecvOnly => "recvonly",
            Direction::Inactive => "inactive",
        };
        write!(f, "{}", value)
    }
}

impl From<&sdp::MediaDirection> for Direction {
    fn from(value: &sdp::MediaDirection) -> Self {
        match value {
            sdp::MediaDirection::SendReceive => Direction::SendRecv,
            sdp::MediaDirection::SendOnly => Direction::SendOnly,
            sdp::MediaDirection::ReceiveOnly => Direction::RecvOnly,
            sdp::MediaDirection::Inactive => Direction::Inactive,
        }
    }
}

impl From<Direction> for sdp::MediaDirection {
    fn from(value: Direction) -> Self {
        match value {
            Direction::SendRecv => sdp::MediaDirection::SendReceive,
            Direction::SendOnly => sdp::MediaDirection::SendOnly,
            Direction::RecvOnly => sdp::MediaDirection::ReceiveOnly,
            Direction::Inactive => sdp::MediaDirection::Inactive,
        }
    }
}

/// Direction of a single RID or simulcast stream list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionWay {
    Send,
    Recv,
}

impl DirectionWay {
    pub fn by_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "send" => Some(Self::Send),
            "recv" => Some(Self::Recv),
            _ => None,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            DirectionWay::Send => DirectionWay::Recv,
            DirectionWay::Recv => DirectionWay::Send,
        }
    }
}

impl Display for DirectionWay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectionWay::Send => write!(f, "send"),
            DirectionWay::Recv => write!(f, "recv"),
        }
    }
}
