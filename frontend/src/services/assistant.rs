use async_trait::async_trait;

use crate::services::latency::simulate_latency;
use crate::services::types::{ChatAuthor, ChatMessage, ServiceError};

const REPLY_LATENCY_MS: u32 = 1_000;

/// Greeting seeded into a fresh conversation.
pub const GREETING: &str = "Hi there! I'm Emma, your Aone Real Estate assistant. Are you looking \
                            for property management, sales, or investment advice today?";

pub const TROUBLE_REPLY: &str = "I'm having trouble responding. Please try again shortly.";

/// Fixed keyword rule table: the first rule whose keyword appears in the
/// visitor's latest message wins.
const REPLY_RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi"],
        "Hello! I'm Emma, your Aone Real Estate assistant. How can I help you today?",
    ),
    (
        &["property", "house", "apartment"],
        "I'd be happy to help with your property search. Could you tell me your name and what \
         type of service you're looking for?",
    ),
    (
        &["investment"],
        "Investment properties are a great option in Adelaide. To provide personalised advice, \
         could you share your name and investment goals?",
    ),
    (
        &["rent", "lease"],
        "We have several rental properties available. To help you find the perfect match, may I \
         know your name and rental preferences?",
    ),
    (
        &["calendar", "sync", "google calendar"],
        "You can sync your appointments with Google Calendar or iCal. Would you like me to show \
         you how to set that up?",
    ),
];

const FALLBACK_REPLY: &str = "Thanks for your message. To better assist you, could you share \
                              your name and what type of real estate service you're interested \
                              in?";

pub fn canned_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| message.contains(keyword)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

/// Replies that fish for a name or service preference trigger the lead form.
pub fn asks_for_contact_details(reply: &str) -> bool {
    let reply = reply.to_lowercase();
    ["name", "prefer", "service", "details"]
        .iter()
        .any(|keyword| reply.contains(keyword))
}

/// Conversational boundary. The real system would call a language-model
/// backend with the full history; the mock pattern-matches the latest
/// visitor message against the rule table.
#[async_trait(?Send)]
pub trait AssistantService {
    async fn reply(&self, history: &[ChatMessage]) -> Result<String, ServiceError>;
}

#[derive(Debug, Default)]
pub struct MockAssistantService;

#[async_trait(?Send)]
impl AssistantService for MockAssistantService {
    async fn reply(&self, history: &[ChatMessage]) -> Result<String, ServiceError> {
        simulate_latency(REPLY_LATENCY_MS).await;
        let latest = history
            .iter()
            .rev()
            .find(|message| message.author == ChatAuthor::Visitor)
            .ok_or_else(|| ServiceError::validation("Nothing to reply to"))?;
        Ok(canned_reply(&latest.body).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_keywords_take_priority() {
        assert!(canned_reply("Hi Emma").contains("How can I help you today?"));
        assert!(canned_reply("hello there").contains("How can I help you today?"));
    }

    #[test]
    fn each_rule_matches_its_keywords() {
        assert!(canned_reply("looking for an apartment").contains("property search"));
        assert!(canned_reply("investment advice please").contains("Investment properties"));
        assert!(canned_reply("can I rent a unit").contains("rental properties"));
        assert!(canned_reply("does it sync with my calendar?").contains("Google Calendar"));
    }

    #[test]
    fn unmatched_messages_get_the_fallback() {
        assert_eq!(canned_reply("qwerty"), FALLBACK_REPLY);
    }

    #[test]
    fn contact_detail_prompts_are_detected() {
        assert!(asks_for_contact_details(FALLBACK_REPLY));
        assert!(asks_for_contact_details("Could you tell me your name?"));
        assert!(!asks_for_contact_details("Good morning!"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn reply_uses_the_latest_visitor_message() {
        let service = MockAssistantService;
        let history = vec![
            ChatMessage::agent(GREETING),
            ChatMessage::visitor("hello"),
            ChatMessage::agent(canned_reply("hello")),
            ChatMessage::visitor("I want to rent"),
        ];
        let reply = service.reply(&history).await.unwrap();
        assert!(reply.contains("rental properties"));
    }

    #[tokio::test]
    async fn reply_without_visitor_messages_is_an_error() {
        let service = MockAssistantService;
        let history = vec![ChatMessage::agent(GREETING)];
        assert!(service.reply(&history).await.is_err());
    }
}
