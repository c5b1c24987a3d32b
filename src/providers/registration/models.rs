// File: providers/registration/models.rs
// Registration wire models and the raw form input they are built from.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const REGISTRATIONS_PATH: &str = "/registrations";

/// Body of `POST /registrations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub address: String,
    pub course_id: String,
    /// ISO-8601 UTC timestamp, e.g. `2024-05-01T09:30:00.000Z`.
    pub registration_date: String,
}

/// The payload echoed back with the id the server assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub id: i64,
    #[serde(flatten)]
    pub payload: RegistrationPayload,
}

/// Values as typed into the form, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub address: String,
    pub course_id: String,
}

impl RegistrationInput {
    pub fn for_course(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Self::default()
        }
    }

    pub fn to_payload(&self, registered_at: DateTime<Utc>) -> RegistrationPayload {
        RegistrationPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            education: self.education.trim().to_string(),
            address: self.address.trim().to_string(),
            course_id: self.course_id.trim().to_string(),
            registration_date: registered_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_input() -> RegistrationInput {
        RegistrationInput {
            name: "  Ada Lovelace ".into(),
            email: "ada@example.com\n".into(),
            phone: " +44 20 7946 0000".into(),
            education: "Mathematics ".into(),
            address: "\t12 St James's Square, London ".into(),
            course_id: "web-dev".into(),
        }
    }

    #[test]
    fn test_payload_is_trimmed_and_stamped() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let payload = sample_input().to_payload(at);

        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.phone, "+44 20 7946 0000");
        assert_eq!(payload.education, "Mathematics");
        assert_eq!(payload.address, "12 St James's Square, London");
        assert_eq!(payload.course_id, "web-dev");
        assert_eq!(payload.registration_date, "2024-05-01T09:30:00.000Z");
    }

    #[test]
    fn test_payload_wire_names() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let value = serde_json::to_value(sample_input().to_payload(at)).unwrap();

        assert_eq!(value["courseId"], "web-dev");
        assert_eq!(value["registrationDate"], "2024-05-01T09:30:00.000Z");
        assert!(value.get("course_id").is_none());
    }

    #[test]
    fn test_response_flattens_payload() {
        let response: RegistrationResponse = serde_json::from_value(json!({
            "id": 42,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+44 20 7946 0000",
            "education": "Mathematics",
            "address": "London",
            "courseId": "web-dev",
            "registrationDate": "2024-05-01T09:30:00.000Z"
        }))
        .unwrap();

        assert_eq!(response.id, 42);
        assert_eq!(response.payload.course_id, "web-dev");
    }

    #[test]
    fn test_input_for_course() {
        let input = RegistrationInput::for_course("data-science");
        assert_eq!(input.course_id, "data-science");
        assert!(input.name.is_empty());
    }
}
