use leptos::*;

use crate::services::StaffId;

/// What to do once the auth overlay reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthIntent {
    OpenChat,
    ResumeBooking,
}

/// At most one overlay is ever active; the enum makes the
/// two-modals-at-once state unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveOverlay {
    #[default]
    None,
    StaffDirectory,
    Booking {
        staff: Option<StaffId>,
    },
    Auth {
        intent: AuthIntent,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainView {
    #[default]
    Landing,
    Chat,
}

#[derive(Clone, Copy)]
pub struct UiState {
    pub overlay: RwSignal<ActiveOverlay>,
    pub view: RwSignal<MainView>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            overlay: create_rw_signal(ActiveOverlay::default()),
            view: create_rw_signal(MainView::default()),
        }
    }

    pub fn open_staff_directory(&self) {
        self.overlay.set(ActiveOverlay::StaffDirectory);
    }

    pub fn open_booking(&self, staff: Option<StaffId>) {
        self.overlay.set(ActiveOverlay::Booking { staff });
    }

    pub fn request_auth(&self, intent: AuthIntent) {
        self.overlay.set(ActiveOverlay::Auth { intent });
    }

    pub fn close_overlay(&self) {
        self.overlay.set(ActiveOverlay::None);
    }

    pub fn open_chat(&self) {
        self.view.set(MainView::Chat);
        self.overlay.set(ActiveOverlay::None);
    }

    pub fn leave_chat(&self) {
        self.view.set(MainView::Landing);
    }

    /// Routes the stored intent after a successful authentication.
    pub fn complete_auth(&self) {
        match self.overlay.get_untracked() {
            ActiveOverlay::Auth {
                intent: AuthIntent::OpenChat,
            } => self.open_chat(),
            ActiveOverlay::Auth {
                intent: AuthIntent::ResumeBooking,
            } => self.open_booking(None),
            _ => self.close_overlay(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_ui_state() -> UiState {
    let state = UiState::new();
    provide_context(state);
    state
}

pub fn use_ui_state() -> UiState {
    use_context::<UiState>().unwrap_or_else(UiState::new)
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
    fn opening_one_overlay_replaces_the_previous() {
        with_runtime(|| {
            let ui = UiState::new();
            ui.open_staff_directory();
            ui.open_booking(Some(StaffId(2)));
            assert_eq!(
                ui.overlay.get(),
                ActiveOverlay::Booking {
                    staff: Some(StaffId(2))
                }
            );
        });
    }

    #[test]
    fn auth_success_resumes_the_booking_flow() {
        with_runtime(|| {
            let ui = UiState::new();
            ui.request_auth(AuthIntent::ResumeBooking);
            ui.complete_auth();
            assert_eq!(ui.overlay.get(), ActiveOverlay::Booking { staff: None });
            assert_eq!(ui.view.get(), MainView::Landing);
        });
    }

    #[test]
    fn auth_success_opens_chat_when_that_was_the_intent() {
        with_runtime(|| {
            let ui = UiState::new();
            ui.request_auth(AuthIntent::OpenChat);
            ui.complete_auth();
            assert_eq!(ui.overlay.get(), ActiveOverlay::None);
            assert_eq!(ui.view.get(), MainView::Chat);
        });
    }

    #[test]
    fn leaving_chat_returns_to_the_landing_view() {
        with_runtime(|| {
            let ui = UiState::new();
            ui.open_chat();
            ui.leave_chat();
            assert_eq!(ui.view.get(), MainView::Landing);
        });
    }
}
