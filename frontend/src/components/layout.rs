use leptos::*;

use crate::config;
use crate::state::auth::use_auth;
use crate::state::ui::{use_ui_state, AuthIntent, UiState};

/// Chat is gated: unauthenticated visitors get the auth overlay with an
/// open-chat intent that is honoured on success.
pub fn request_chat(ui: UiState, authenticated: bool) {
    if authenticated {
        ui.open_chat();
    } else {
        ui.request_auth(AuthIntent::OpenChat);
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = use_ui_state();
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);

    let on_team = move |_| {
        set_menu_open.set(false);
        ui.open_staff_directory();
    };
    let on_booking = move |_| {
        set_menu_open.set(false);
        ui.open_booking(None);
    };
    let on_chat = move |_| {
        set_menu_open.set(false);
        request_chat(ui, auth.get_untracked().is_authenticated);
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="sticky top-0 z-40 bg-brand shadow-md">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-2">
                        <h1 class="text-2xl md:text-3xl font-bold text-text-inverse">
                            {config::agency().name.clone()}
                        </h1>
                    </div>

                    <nav class="hidden md:flex items-center gap-6">
                        <button
                            class="text-text-inverse hover:text-accent transition-colors flex items-center gap-2"
                            on:click=on_team
                        >
                            "Our Team"
                        </button>
                        <button
                            class="text-text-inverse hover:text-accent transition-colors flex items-center gap-2"
                            on:click=on_booking
                        >
                            "Book Appointment"
                        </button>
                        <button
                            class="bg-accent hover:bg-accent-strong text-text-inverse px-4 py-2 rounded-lg transition-all flex items-center gap-2"
                            on:click=on_chat
                        >
                            "Let's Chat"
                        </button>
                    </nav>

                    <button
                        type="button"
                        class="md:hidden text-text-inverse text-2xl"
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                        on:click=toggle_menu
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="md:hidden border-t border-overlay-border">
                        <nav class="py-4 flex flex-col gap-4">
                            <button
                                class="text-text-inverse hover:text-accent transition-colors flex items-center gap-2 p-3"
                                on:click=on_team
                            >
                                "Our Team"
                            </button>
                            <button
                                class="text-text-inverse hover:text-accent transition-colors flex items-center gap-2 p-3"
                                on:click=on_booking
                            >
                                "Book Appointment"
                            </button>
                            <button
                                class="bg-accent hover:bg-accent-strong text-text-inverse px-4 py-3 rounded-lg transition-all flex items-center gap-2"
                                on:click=on_chat
                            >
                                "Let's Chat"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex flex-col">
            <Header/>
            <main class="flex-1">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-brand"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::ui::{ActiveOverlay, MainView, UiState};
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn header_renders_the_three_primary_actions() {
        let html = render_to_string(move || view! { <Header/> });
        assert!(html.contains("Our Team"));
        assert!(html.contains("Book Appointment"));
        assert!(html.contains("Let's Chat"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner/>
                    <ErrorMessage message="error".into()/>
                    <SuccessMessage message="ok".into()/>
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }

    #[test]
    fn chat_request_routes_by_auth_state() {
        with_runtime(|| {
            let ui = UiState::new();
            request_chat(ui, false);
            assert_eq!(
                ui.overlay.get(),
                ActiveOverlay::Auth {
                    intent: AuthIntent::OpenChat
                }
            );
            assert_eq!(ui.view.get(), MainView::Landing);

            request_chat(ui, true);
            assert_eq!(ui.view.get(), MainView::Chat);
            assert_eq!(ui.overlay.get(), ActiveOverlay::None);
        });
    }
}
