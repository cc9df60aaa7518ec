use leptos::*;

use crate::services::types::{ContactDetails, ContactFieldErrors, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
}

/// The details-step form. Field errors sit alongside the values so each can
/// clear independently as its field is edited.
#[derive(Clone, Copy)]
pub struct ContactFormState {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    message: RwSignal<String>,
    errors: RwSignal<ContactFieldErrors>,
    submit_error: RwSignal<Option<ServiceError>>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            message: create_rw_signal(String::new()),
            errors: create_rw_signal(ContactFieldErrors::default()),
            submit_error: create_rw_signal(None),
        }
    }
}

impl ContactFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn phone_signal(&self) -> RwSignal<String> {
        self.phone
    }

    pub fn message_signal(&self) -> RwSignal<String> {
        self.message
    }

    pub fn errors_signal(&self) -> RwSignal<ContactFieldErrors> {
        self.errors
    }

    pub fn submit_error_signal(&self) -> RwSignal<Option<ServiceError>> {
        self.submit_error
    }

    /// Stores an edited value and clears that field's error, leaving the
    /// other field errors in place.
    pub fn edit(&self, field: ContactField, value: String) {
        match field {
            ContactField::Name => {
                self.name.set(value);
                self.errors.update(|errors| errors.name = None);
            }
            ContactField::Email => {
                self.email.set(value);
                self.errors.update(|errors| errors.email = None);
            }
            ContactField::Phone => {
                self.phone.set(value);
                self.errors.update(|errors| errors.phone = None);
            }
        }
        self.submit_error.set(None);
    }

    /// Validates the current values. Failures land in the field-error signal
    /// and block submission.
    pub fn to_contact(&self) -> Result<ContactDetails, ContactFieldErrors> {
        let result = ContactDetails::parse(
            &self.name.get_untracked(),
            &self.email.get_untracked(),
            &self.phone.get_untracked(),
            &self.message.get_untracked(),
        );
        match result {
            Ok(contact) => {
                self.errors.set(ContactFieldErrors::default());
                Ok(contact)
            }
            Err(errors) => {
                self.errors.set(errors.clone());
                Err(errors)
            }
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.message.set(String::new());
        self.errors.set(ContactFieldErrors::default());
        self.submit_error.set(None);
    }
}
