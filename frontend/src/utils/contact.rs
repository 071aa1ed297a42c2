use serde::{Deserialize, Serialize};

use crate::utils::api::Api;
use crate::utils::circuit::{Point, Viewport};

pub const SUBMIT_FORM_PATH: &str = "/api/submit-form";

/// The contact form as posted to the relay.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Submitted,
}

/// What came back from one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Success { id: String },
    Validation(String),
    Transport(String),
    Server(String),
}

#[derive(Deserialize, Default)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
    id: Option<String>,
    error: Option<String>,
}

impl SubmitOutcome {
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: RelayResponse = serde_json::from_str(body).unwrap_or_default();
        match status {
            200..=299 => match parsed.id {
                Some(id) if parsed.success => SubmitOutcome::Success { id },
                _ => SubmitOutcome::Server("Unexpected response from server".to_string()),
            },
            400 => SubmitOutcome::Validation(
                parsed
                    .error
                    .unwrap_or_else(|| "Please fill in all required fields".to_string()),
            ),
            _ => SubmitOutcome::Server(
                parsed
                    .error
                    .unwrap_or_else(|| format!("Request failed with status {}", status)),
            ),
        }
    }

    /// Any completed HTTP round trip ends the form; only a failed transport
    /// keeps the user editing.
    pub fn next_state(&self) -> SubmissionState {
        match self {
            SubmitOutcome::Transport(_) => SubmissionState::Editing,
            _ => SubmissionState::Submitted,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Success { .. } => None,
            SubmitOutcome::Validation(msg)
            | SubmitOutcome::Transport(msg)
            | SubmitOutcome::Server(msg) => Some(msg),
        }
    }
}

/// Posts the form to the relay once. Never retries.
pub async fn submit_contact(form: &ContactForm) -> SubmitOutcome {
    let request = match Api::post(SUBMIT_FORM_PATH)
        .header("Accept", "application/json")
        .json(form)
    {
        Ok(request) => request,
        Err(e) => return SubmitOutcome::Transport(e.to_string()),
    };
    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            SubmitOutcome::from_response(status, &body)
        }
        Err(e) => SubmitOutcome::Transport(e.to_string()),
    }
}

/// Screen rectangle of the button that opened the modal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TriggerRect {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl From<web_sys::DomRect> for TriggerRect {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Where the modal starts its entrance, relative to its centered resting spot.
pub fn launch_offset(trigger: &TriggerRect, viewport: Viewport) -> Point {
    let from = trigger.center();
    let to = viewport.center();
    Point::new(from.x - to.x, from.y - to.y)
}

/// SVG path of the triangle joining the trigger to the bottom edge of the modal.
pub fn beam_path(trigger: &TriggerRect, viewport: Viewport) -> String {
    let t = trigger.center();
    let c = viewport.center();
    format!(
        "M {} {} L {} {} L {} {} Z",
        t.x,
        t.y,
        c.x - 200.0,
        c.y + 200.0,
        c.x + 200.0,
        c.y + 200.0
    )
}

/// Entrance geometry of one opened modal.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchGeometry {
    pub offset: Point,
    pub beam: String,
}

impl LaunchGeometry {
    pub fn new(trigger: Option<TriggerRect>, viewport: Option<Viewport>) -> Option<Self> {
        let (trigger, viewport) = (trigger?, viewport?);
        Some(Self {
            offset: launch_offset(&trigger, viewport),
            beam: beam_path(&trigger, viewport),
        })
    }

    /// CSS custom properties read by the entrance keyframes.
    pub fn card_style(&self) -> String {
        format!("--start-x: {}px; --start-y: {}px;", self.offset.x, self.offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_serializes_as_the_relay_expects() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            message: "Hello".into(),
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "phone": "", "message": "Hello"})
        );
    }

    #[test]
    fn fields_update_one_at_a_time() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada".into());
        form.set(ContactField::Message, "Hi".into());
        assert_eq!(form.name, "Ada");
        assert_eq!(form.message, "Hi");
        assert!(form.email.is_empty() && form.phone.is_empty());
    }

    #[test]
    fn success_moves_to_submitted() {
        let outcome = SubmitOutcome::from_response(200, r#"{"success":true,"id":"rec123"}"#);
        assert_eq!(outcome, SubmitOutcome::Success { id: "rec123".into() });
        assert_eq!(outcome.next_state(), SubmissionState::Submitted);
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn bad_request_is_a_validation_outcome() {
        let outcome = SubmitOutcome::from_response(
            400,
            r#"{"error":"Missing required fields: name, email, and message are required"}"#,
        );
        assert!(matches!(outcome, SubmitOutcome::Validation(ref m) if m.starts_with("Missing")));
    }

    #[test]
    fn server_errors_keep_the_relay_message() {
        let outcome = SubmitOutcome::from_response(500, r#"{"error":"Failed to save data"}"#);
        assert_eq!(outcome, SubmitOutcome::Server("Failed to save data".into()));

        let opaque = SubmitOutcome::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(opaque, SubmitOutcome::Server("Request failed with status 502".into()));
    }

    #[test]
    fn ok_status_without_an_id_is_not_a_success() {
        let outcome = SubmitOutcome::from_response(200, "{}");
        assert!(matches!(outcome, SubmitOutcome::Server(_)));
    }

    #[test]
    fn only_transport_failures_stay_in_editing() {
        assert_eq!(
            SubmitOutcome::Transport("offline".into()).next_state(),
            SubmissionState::Editing
        );
        assert_eq!(
            SubmitOutcome::Server("x".into()).next_state(),
            SubmissionState::Submitted
        );
        assert_eq!(
            SubmitOutcome::Validation("x".into()).next_state(),
            SubmissionState::Submitted
        );
    }

    #[test]
    fn launch_offset_points_from_center_to_trigger() {
        let trigger = TriggerRect { left: 900.0, top: 600.0, width: 200.0, height: 60.0 };
        let offset = launch_offset(&trigger, Viewport::new(1280.0, 800.0));
        assert_eq!(offset, Point::new(360.0, 230.0));
    }

    #[test]
    fn beam_joins_trigger_to_modal_base() {
        let trigger = TriggerRect { left: 100.0, top: 100.0, width: 20.0, height: 10.0 };
        assert_eq!(
            beam_path(&trigger, Viewport::new(1000.0, 800.0)),
            "M 110 105 L 300 600 L 700 600 Z"
        );
    }

    #[test]
    fn launch_geometry_needs_both_trigger_and_viewport() {
        let trigger = TriggerRect { left: 100.0, top: 100.0, width: 20.0, height: 10.0 };
        let viewport = Viewport::new(1000.0, 800.0);
        assert_eq!(LaunchGeometry::new(None, Some(viewport)), None);
        assert_eq!(LaunchGeometry::new(Some(trigger), None), None);

        let geometry = LaunchGeometry::new(Some(trigger), Some(viewport)).unwrap();
        assert_eq!(geometry.offset, Point::new(-390.0, -295.0));
        assert_eq!(geometry.beam, "M 110 105 L 300 600 L 700 600 Z");
        assert_eq!(geometry.card_style(), "--start-x: -390px; --start-y: -295px;");
    }
}
