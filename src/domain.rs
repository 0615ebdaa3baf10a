use std::fmt;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum EventType {
    #[strum(serialize = "SET PIECE")]
    SetPiece,
    #[strum(serialize = "PASS")]
    Pass,
    #[strum(serialize = "BALL LOST")]
    BallLost,
    #[strum(serialize = "RECOVERY")]
    Recovery,
    #[strum(serialize = "CHALLENGE")]
    Challenge,
    #[strum(serialize = "BALL OUT")]
    BallOut,
    #[strum(serialize = "SHOT")]
    Shot,
    #[strum(serialize = "FAULT RECEIVED")]
    FaultReceived,
    #[strum(serialize = "CARD")]
    Card,
    #[strum(default)]
    Other(String),
}
impl EventType {
    /// The types a match log is known to contain, in the order the dashboard offers them.
    pub const KNOWN: [EventType; 9] = [
        EventType::Shot,
        EventType::Pass,
        EventType::Recovery,
        EventType::BallLost,
        EventType::Challenge,
        EventType::BallOut,
        EventType::SetPiece,
        EventType::FaultReceived,
        EventType::Card,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            EventType::SetPiece => "SET PIECE",
            EventType::Pass => "PASS",
            EventType::BallLost => "BALL LOST",
            EventType::Recovery => "RECOVERY",
            EventType::Challenge => "CHALLENGE",
            EventType::BallOut => "BALL OUT",
            EventType::Shot => "SHOT",
            EventType::FaultReceived => "FAULT RECEIVED",
            EventType::Card => "CARD",
            EventType::Other(other) => other,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
