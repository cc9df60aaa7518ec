use std::rc::Rc;

use leptos::*;

mod assistant;
mod auth;
mod calendar_sync;
mod latency;
mod scheduling;
pub mod staff;
pub mod types;

pub use assistant::*;
pub use auth::*;
pub use calendar_sync::*;
pub use latency::simulate_latency;
pub use scheduling::*;
pub use types::*;

/// The app's injectable collaborators (auth, scheduling, calendar sync,
/// assistant), provided once at the root and looked up from view models.
#[derive(Clone)]
pub struct Services {
    pub auth: Rc<dyn AuthService>,
    pub scheduling: Rc<dyn SchedulingService>,
    pub calendar_sync: Rc<dyn CalendarSyncService>,
    pub assistant: Rc<dyn AssistantService>,
}

impl Services {
    pub fn mock() -> Self {
        Self {
            auth: Rc::new(MockAuthService),
            scheduling: Rc::new(MockSchedulingService),
            calendar_sync: Rc::new(MockCalendarSyncService),
            assistant: Rc::new(MockAssistantService),
        }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>().unwrap_or_else(Services::mock)
}
