use leptos::*;

use crate::config;
use crate::pages::chat::components::{
    composer::Composer, lead_form::LeadForm, messages::MessageList,
};
use crate::pages::chat::view_model::use_chat_view_model;
use crate::state::ui::use_ui_state;

/// Full-height conversation view shown in place of the landing content.
/// Minimising collapses it to a floating re-open button.
#[component]
pub fn ChatView() -> impl IntoView {
    let ui = use_ui_state();
    let vm = use_chat_view_model();

    view! {
        <Show
            when=move || !vm.minimized.get()
            fallback=move || {
                view! {
                    <div class="fixed bottom-4 right-4 z-50">
                        <button
                            class="bg-brand text-text-inverse p-4 rounded-full shadow-lg hover:bg-brand-strong transition-colors"
                            aria-label="Reopen chat"
                            on:click=move |_| vm.minimized.set(false)
                        >
                            "Chat"
                        </button>
                    </div>
                }
            }
        >
            <div class="relative flex flex-col h-[calc(100vh-4rem)] bg-surface overflow-hidden">
                <header class="flex items-center justify-between px-4 py-3 bg-brand text-text-inverse">
                    <div class="flex items-center gap-2">
                        <h1 class="text-xl font-bold">{config::agency().name.clone()}</h1>
                        <span class="w-2 h-2 rounded-full bg-status-success-bg" aria-label="Online"></span>
                    </div>
                    <div class="flex items-center gap-2">
                        <button
                            class="bg-overlay-button p-2 rounded-full hover:bg-overlay-button-hover transition-colors"
                            aria-label="Minimize"
                            on:click=move |_| vm.minimized.set(true)
                        >
                            {"—"}
                        </button>
                        <button
                            class="bg-overlay-button p-2 rounded-full hover:bg-overlay-button-hover transition-colors"
                            aria-label="Close"
                            on:click=move |_| ui.leave_chat()
                        >
                            {"✕"}
                        </button>
                    </div>
                </header>

                <Show when=move || vm.show_welcome.get()>
                    <WelcomeOverlay/>
                </Show>

                <MessageList/>

                <Show when=move || vm.captured_preference.get().is_some()>
                    <CtaButtons/>
                </Show>

                <Show when=move || vm.show_lead_form.get()>
                    <LeadForm/>
                </Show>

                <Composer/>
            </div>
        </Show>
    }
}

#[component]
fn WelcomeOverlay() -> impl IntoView {
    let vm = use_chat_view_model();

    view! {
        <div class="absolute inset-0 z-10 bg-brand/95 flex flex-col items-center justify-center text-text-inverse p-6 text-center">
            <div class="max-w-md">
                <h2 class="text-3xl font-bold mb-4">
                    {format!("Welcome to {}", config::agency().name)}
                </h2>
                <p class="opacity-80 mb-8">
                    "I'm Emma, your personal real estate assistant. I'm here to help you find the \
                     perfect property solution in Adelaide."
                </p>
                <button
                    class="bg-accent hover:bg-accent-strong text-text-inverse px-6 py-3 rounded-lg shadow-lg transition-all mx-auto"
                    on:click=move |_| vm.dismiss_welcome()
                >
                    "Start Chatting"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CtaButtons() -> impl IntoView {
    let ui = use_ui_state();

    view! {
        <div class="flex flex-wrap justify-center gap-3 p-3 border-t border-border bg-surface-elevated">
            <button
                class="flex items-center gap-2 px-5 py-2.5 rounded-lg bg-accent text-text-inverse hover:bg-accent-strong transition-colors"
                on:click=move |_| ui.open_staff_directory()
            >
                "Meet Our Specialists"
            </button>
            <button
                class="flex items-center gap-2 px-5 py-2.5 rounded-lg bg-brand text-text-inverse hover:bg-brand-strong transition-colors"
                on:click=move |_| ui.open_booking(None)
            >
                "Book an Appointment"
            </button>
        </div>
    }
}
