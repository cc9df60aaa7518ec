use leptos::*;

use crate::services::ServicePreference;

/// The "tell us about you" form that slides in when Emma asks for details.
/// Local state only; nothing leaves the page.
#[derive(Clone, Copy)]
pub struct LeadFormState {
    name: RwSignal<String>,
    preference: RwSignal<Option<ServicePreference>>,
    error: RwSignal<Option<String>>,
}

impl Default for LeadFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            preference: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }
}

impl LeadFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn preference_signal(&self) -> RwSignal<Option<ServicePreference>> {
        self.preference
    }

    pub fn error_signal(&self) -> RwSignal<Option<String>> {
        self.error
    }

    /// Name first, then preference; the first missing field wins.
    pub fn validate(&self) -> Result<(String, ServicePreference), String> {
        let name = self.name.get_untracked();
        let name = name.trim();
        if name.is_empty() {
            return Err("Please enter your full name".into());
        }
        let Some(preference) = self.preference.get_untracked() else {
            return Err("Please select a service preference".into());
        };
        Ok((name.to_string(), preference))
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.preference.set(None);
        self.error.set(None);
    }
}

pub fn thank_you_message(name: &str, preference: ServicePreference) -> String {
    format!(
        "Thanks {}! I've noted your interest in {}. Would you like to meet our specialists in \
         this area?",
        name,
        preference.label().to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn validation_requires_name_then_preference() {
        with_runtime(|| {
            let form = LeadFormState::default();
            assert_eq!(form.validate().unwrap_err(), "Please enter your full name");

            form.name_signal().set("Jane Doe".into());
            assert_eq!(
                form.validate().unwrap_err(),
                "Please select a service preference"
            );

            form.preference_signal()
                .set(Some(ServicePreference::Sales));
            let (name, preference) = form.validate().unwrap();
            assert_eq!(name, "Jane Doe");
            assert_eq!(preference, ServicePreference::Sales);
        });
    }

    #[test]
    fn thank_you_message_uses_the_spoken_preference_label() {
        let message = thank_you_message("Jane", ServicePreference::PropertyManagement);
        assert!(message.contains("Thanks Jane!"));
        assert!(message.contains("property management"));
    }
}
