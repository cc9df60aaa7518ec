use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub specialties: Vec<String>,
    pub location: String,
    pub linkedin: String,
    pub bio: String,
}

impl StaffMember {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// One bookable half-hour interval. The id is the 24-hour "HH:MM" key; the
/// label is the 12-hour form shown to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub label: String,
    pub available: bool,
}

/// Validated visitor contact fields. Only constructible through [`parse`],
/// so an [`AppointmentRequest`] always carries well-formed contact data.
///
/// [`parse`]: ContactDetails::parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

impl ContactDetails {
    pub fn parse(
        name: &str,
        email: &str,
        phone: &str,
        message: &str,
    ) -> Result<Self, ContactFieldErrors> {
        let mut errors = ContactFieldErrors::default();
        if name.trim().is_empty() {
            errors.name = Some("Name is required".into());
        }
        if email.trim().is_empty() {
            errors.email = Some("Email is required".into());
        } else if !is_valid_email(email) {
            errors.email = Some("Email is invalid".into());
        }
        if phone.trim().is_empty() {
            errors.phone = Some("Phone number is required".into());
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            message: message.to_string(),
        })
    }
}

/// Minimal `local@domain.tld` shape check, matching the booking form's
/// contract: some local part, an `@`, and a dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.len() > 2
}

/// A complete, validated booking. Building one requires a staff member, a
/// date, a slot and parsed contact details, so the scheduling service never
/// sees a partial draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub slot_id: String,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub slot_id: String,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    SignIn,
    Register,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub fn label(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarProvider {
    Google,
    Outlook,
}

impl CalendarProvider {
    pub fn label(self) -> &'static str {
        match self {
            CalendarProvider::Google => "Google Calendar",
            CalendarProvider::Outlook => "Outlook Calendar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServicePreference {
    PropertyManagement,
    Sales,
    Investment,
}

impl ServicePreference {
    pub const ALL: [ServicePreference; 3] = [
        ServicePreference::PropertyManagement,
        ServicePreference::Sales,
        ServicePreference::Investment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServicePreference::PropertyManagement => "Property Management",
            ServicePreference::Sales => "Sales",
            ServicePreference::Investment => "Investment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAuthor {
    Agent,
    Visitor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: ChatAuthor,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn agent(body: impl Into<String>) -> Self {
        Self::new(ChatAuthor::Agent, body)
    }

    pub fn visitor(body: impl Into<String>) -> Self {
        Self::new(ChatAuthor::Visitor, body)
    }

    fn new(author: ChatAuthor, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            body: body.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ServiceError> for String {
    fn from(error: ServiceError) -> Self {
        error.error
    }
}

impl leptos::IntoView for ServiceError {
    fn into_view(self) -> leptos::View {
        leptos::IntoView::into_view(self.error)
    }
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "AUTH_FAILED".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }
}
