//! Event catalog domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Star tier grouping. Used only for display ordering, no functional effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "5 Star")]
    FiveStar,
    #[serde(rename = "4 Star")]
    FourStar,
    #[serde(rename = "3 Star")]
    ThreeStar,
}

impl Tier {
    /// All tiers in display order (highest first).
    pub const DISPLAY_ORDER: [Tier; 3] = [Tier::FiveStar, Tier::FourStar, Tier::ThreeStar];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::FiveStar => "5 Star",
            Tier::FourStar => "4 Star",
            Tier::ThreeStar => "3 Star",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether an event is entered solo or as a team.
///
/// Serialized as the display label the clients already use, e.g.
/// `"Individual"` or `"Group (2 in a team)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Individual,
    Group { team_size: u8 },
}

impl EventKind {
    pub fn is_group(&self) -> bool {
        matches!(self, EventKind::Group { .. })
    }

    /// Team size for group events, `None` for individual events.
    pub fn team_size(&self) -> Option<u8> {
        match self {
            EventKind::Individual => None,
            EventKind::Group { team_size } => Some(*team_size),
        }
    }

    pub fn label(&self) -> String {
        match self {
            EventKind::Individual => "Individual".to_string(),
            EventKind::Group { team_size } => format!("Group ({} in a team)", team_size),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Error parsing an event kind label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid event kind label")]
pub struct ParseEventKindError;

impl FromStr for EventKind {
    type Err = ParseEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Individual" {
            return Ok(EventKind::Individual);
        }
        let size = s
            .strip_prefix("Group (")
            .and_then(|rest| rest.strip_suffix(" in a team)"))
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or(ParseEventKindError)?;
        if size < 2 {
            return Err(ParseEventKindError);
        }
        Ok(EventKind::Group { team_size: size })
    }
}

impl Serialize for EventKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One festival event as defined in the catalog.
///
/// Immutable at runtime; the catalog is the source of truth for kind and
/// capacity, regardless of what a client submits in its snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub tier: Tier,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub description: String,
    pub capacity: u32,
}

/// Events of one tier, for the grouped catalog listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierGroup {
    pub tier: Tier,
    pub events: Vec<Event>,
}

/// Capacity gate view of a single event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAvailability {
    pub event_id: u32,
    pub event_name: String,
    pub registered: u32,
    pub capacity: u32,
    pub open: bool,
}
