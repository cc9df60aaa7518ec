use leptos::*;

use crate::pages::chat::utils::{thank_you_message, LeadFormState};
use crate::services::{
    asks_for_contact_details, simulate_latency, use_services, ChatMessage, ServiceError,
    ServicePreference, GREETING, TROUBLE_REPLY,
};

const LEAD_FORM_LATENCY_MS: u32 = 500;

#[derive(Clone, Copy)]
pub struct ChatViewModel {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub draft: RwSignal<String>,
    pub show_welcome: RwSignal<bool>,
    pub minimized: RwSignal<bool>,
    pub show_lead_form: RwSignal<bool>,
    pub lead_form: LeadFormState,
    pub lead_submitting: RwSignal<bool>,
    /// Captured once the lead form goes through; unlocks the CTA buttons.
    pub captured_preference: RwSignal<Option<ServicePreference>>,
    pub reply_action: Action<Vec<ChatMessage>, Result<String, ServiceError>>,
}

fn apply_reply_result(
    result: Option<Result<String, ServiceError>>,
    messages: RwSignal<Vec<ChatMessage>>,
    show_lead_form: RwSignal<bool>,
) {
    if let Some(result) = result {
        match result {
            Ok(reply) => {
                let prompts_for_details = asks_for_contact_details(&reply);
                messages.update(|list| list.push(ChatMessage::agent(reply)));
                if prompts_for_details {
                    show_lead_form.set(true);
                }
            }
            Err(error) => {
                log::warn!("assistant reply failed: {}", error);
                messages.update(|list| list.push(ChatMessage::agent(TROUBLE_REPLY)));
            }
        }
    }
}

fn apply_lead_submission(
    name: &str,
    preference: ServicePreference,
    messages: RwSignal<Vec<ChatMessage>>,
    show_lead_form: RwSignal<bool>,
    captured_preference: RwSignal<Option<ServicePreference>>,
) {
    messages.update(|list| list.push(ChatMessage::agent(thank_you_message(name, preference))));
    captured_preference.set(Some(preference));
    show_lead_form.set(false);
}

impl ChatViewModel {
    pub fn new() -> Self {
        let services = store_value(use_services());

        let messages = create_rw_signal(vec![ChatMessage::agent(GREETING)]);
        let draft = create_rw_signal(String::new());
        let show_welcome = create_rw_signal(true);
        let minimized = create_rw_signal(false);
        let show_lead_form = create_rw_signal(false);
        let lead_form = LeadFormState::default();
        let lead_submitting = create_rw_signal(false);
        let captured_preference = create_rw_signal(None::<ServicePreference>);

        let reply_action = create_action(move |history: &Vec<ChatMessage>| {
            let assistant = services.get_value().assistant;
            let history = history.clone();
            async move { assistant.reply(&history).await }
        });

        {
            create_effect(move |_| {
                apply_reply_result(reply_action.value().get(), messages, show_lead_form);
            });
        }

        Self {
            messages,
            draft,
            show_welcome,
            minimized,
            show_lead_form,
            lead_form,
            lead_submitting,
            captured_preference,
            reply_action,
        }
    }

    pub fn dismiss_welcome(&self) {
        self.show_welcome.set(false);
    }

    pub fn send(&self) {
        let body = self.draft.get_untracked();
        let body = body.trim();
        if body.is_empty() || self.reply_action.pending().get_untracked() {
            return;
        }
        self.show_welcome.set(false);

        self.messages
            .update(|list| list.push(ChatMessage::visitor(body)));
        self.draft.set(String::new());
        self.reply_action.dispatch(self.messages.get_untracked());
    }

    pub fn submit_lead_form(&self) {
        if self.lead_submitting.get_untracked() {
            return;
        }
        let (name, preference) = match self.lead_form.validate() {
            Ok(valid) => valid,
            Err(message) => {
                self.lead_form.error_signal().set(Some(message));
                return;
            }
        };
        self.lead_form.error_signal().set(None);
        self.lead_submitting.set(true);

        let vm = *self;
        spawn_local(async move {
            simulate_latency(LEAD_FORM_LATENCY_MS).await;
            apply_lead_submission(
                &name,
                preference,
                vm.messages,
                vm.show_lead_form,
                vm.captured_preference,
            );
            vm.lead_submitting.set(false);
        });
    }
}

impl Default for ChatViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_chat_view_model() -> ChatViewModel {
    match use_context::<ChatViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ChatViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::services::{canned_reply, ChatAuthor, Services};
    use crate::test_support::ssr::with_runtime;

    fn new_vm() -> ChatViewModel {
        provide_context(Services::mock());
        ChatViewModel::new()
    }

    #[test]
    fn conversation_opens_with_the_greeting() {
        with_runtime(|| {
            let vm = new_vm();
            let messages = vm.messages.get();
            assert_eq!(messages.len(), 1);
            assert_eq!(messages[0].author, ChatAuthor::Agent);
            assert_eq!(messages[0].body, GREETING);
        });
    }

    #[test]
    fn blank_drafts_are_not_sent() {
        with_runtime(|| {
            let vm = new_vm();
            vm.draft.set("   ".into());
            vm.send();
            assert_eq!(vm.messages.get().len(), 1);
        });
    }

    #[test]
    fn detail_seeking_replies_open_the_lead_form() {
        with_runtime(|| {
            let vm = new_vm();
            apply_reply_result(
                Some(Ok(canned_reply("looking for an apartment").to_string())),
                vm.messages,
                vm.show_lead_form,
            );
            assert!(vm.show_lead_form.get());
            assert_eq!(vm.messages.get().len(), 2);
        });
    }

    #[test]
    fn failed_replies_surface_the_trouble_message() {
        with_runtime(|| {
            let vm = new_vm();
            apply_reply_result(
                Some(Err(ServiceError::request_failed("offline"))),
                vm.messages,
                vm.show_lead_form,
            );
            let last = vm.messages.get().last().cloned().unwrap();
            assert_eq!(last.body, TROUBLE_REPLY);
            assert!(!vm.show_lead_form.get());
        });
    }

    #[test]
    fn lead_submission_posts_a_thank_you_and_unlocks_the_ctas() {
        with_runtime(|| {
            let vm = new_vm();
            vm.show_lead_form.set(true);
            apply_lead_submission(
                "Jane",
                ServicePreference::Investment,
                vm.messages,
                vm.show_lead_form,
                vm.captured_preference,
            );
            assert!(!vm.show_lead_form.get());
            assert_eq!(
                vm.captured_preference.get(),
                Some(ServicePreference::Investment)
            );
            let last = vm.messages.get().last().cloned().unwrap();
            assert!(last.body.contains("Thanks Jane!"));
            assert!(last.body.contains("investment"));
        });
    }

    #[test]
    fn invalid_lead_form_reports_the_first_missing_field() {
        with_runtime(|| {
            let vm = new_vm();
            vm.submit_lead_form();
            assert_eq!(
                vm.lead_form.error_signal().get().as_deref(),
                Some("Please enter your full name")
            );
            assert!(!vm.lead_submitting.get());
        });
    }
}
