//! Registration domain model and API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Denormalized snapshot of an event inside a registration.
///
/// Stored exactly as submitted; not a foreign key into the catalog. The
/// catalog stays authoritative for kind and capacity rules, this snapshot
/// only feeds display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// One chosen event with its participant list.
///
/// For group events the participants are the team members; individual
/// events carry an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSelection {
    pub event: EventSnapshot,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A persisted registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub reg_no: String,
    pub course: String,
    pub events: Vec<EventSelection>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for submitting a registration.
///
/// Structural rules live here; catalog-dependent rules (unknown events,
/// participant requirements) are checked by
/// [`crate::services::validation::validate_selections`].
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub reg_no: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub course: String,

    #[validate(length(min = 1, message = "At least one event must be selected"))]
    pub events: Vec<EventSelection>,
}

/// One registrant in a per-event roster.
///
/// Participants are taken from the selection matching the queried event
/// only; other selections by the same registrant are not exposed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrant {
    pub id: Uuid,
    pub name: String,
    pub course: String,
    pub participants: Vec<String>,
}

/// Roster response for one event, polled by viewers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrations {
    pub event_name: String,
    pub total: usize,
    pub registrations: Vec<EventRegistrant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duologue_selection() -> serde_json::Value {
        serde_json::json!({
            "event": {
                "name": "Duologue",
                "type": "Group (2 in a team)",
                "description": "Perform an engaging dialogue with your partner."
            },
            "participants": ["Asha", "Ravi"]
        })
    }

    #[test]
    fn test_selection_deserializes_wire_format() {
        let selection: EventSelection = serde_json::from_value(duologue_selection()).unwrap();
        assert_eq!(selection.event.name, "Duologue");
        assert_eq!(selection.event.kind, "Group (2 in a team)");
        assert_eq!(selection.participants, vec!["Asha", "Ravi"]);
    }

    #[test]
    fn test_selection_participants_default_to_empty() {
        let selection: EventSelection = serde_json::from_value(serde_json::json!({
            "event": { "name": "Debate", "type": "Individual", "description": "..." }
        }))
        .unwrap();
        assert!(selection.participants.is_empty());
    }

    #[test]
    fn test_request_validates_complete_payload() {
        let request: CreateRegistrationRequest = serde_json::from_value(serde_json::json!({
            "name": "Asha",
            "phone": "9876543210",
            "regNo": "R100",
            "course": "BCA",
            "events": [duologue_selection()]
        }))
        .unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_rejects_blank_fields() {
        let request: CreateRegistrationRequest = serde_json::from_value(serde_json::json!({
            "name": "  ",
            "phone": "9876543210",
            "regNo": "",
            "course": "BCA",
            "events": [duologue_selection()]
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("reg_no"));
        assert!(!fields.contains_key("course"));
    }

    #[test]
    fn test_request_rejects_bad_phone() {
        let request: CreateRegistrationRequest = serde_json::from_value(serde_json::json!({
            "name": "Asha",
            "phone": "12345",
            "regNo": "R100",
            "course": "BCA",
            "events": [duologue_selection()]
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_request_rejects_empty_event_list() {
        let request: CreateRegistrationRequest = serde_json::from_value(serde_json::json!({
            "name": "Asha",
            "phone": "9876543210",
            "regNo": "R100",
            "course": "BCA",
            "events": []
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("events"));
    }

    #[test]
    fn test_registration_serializes_camel_case() {
        let registration = Registration {
            id: Uuid::nil(),
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            reg_no: "R100".to_string(),
            course: "BCA".to_string(),
            events: vec![serde_json::from_value(duologue_selection()).unwrap()],
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&registration).unwrap();
        assert!(value.get("regNo").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["events"][0]["event"]["type"], "Group (2 in a team)");
    }
}
