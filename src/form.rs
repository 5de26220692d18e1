use serde::Serialize;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }

    pub fn to_log_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn a_missing_email_fails_the_presence_check() {
        assert!(!message("Jane", "", "Hi").is_complete());
    }

    #[test]
    fn every_field_present_passes_the_presence_check() {
        assert!(message("Jane", "jane@example.com", "Hi").is_complete());
    }

    #[test]
    fn an_empty_form_fails_the_presence_check() {
        assert!(!ContactMessage::default().is_complete());
    }

    #[test]
    fn log_json_carries_all_fields() {
        let json = message("Jane", "jane@example.com", "Hi").to_log_json();

        assert!(json.contains(r#""name":"Jane""#));
        assert!(json.contains(r#""email":"jane@example.com""#));
        assert!(json.contains(r#""message":"Hi""#));
    }
}
