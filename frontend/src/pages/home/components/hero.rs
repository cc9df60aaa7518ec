use leptos::*;

use crate::components::layout::request_chat;
use crate::state::auth::use_auth;
use crate::state::ui::use_ui_state;

#[component]
pub fn HeroSection() -> impl IntoView {
    let ui = use_ui_state();
    let (auth, _) = use_auth();

    view! {
        <section class="relative bg-brand text-text-inverse py-24 md:py-32">
            <div class="max-w-7xl mx-auto px-4 relative z-10">
                <div class="max-w-3xl mx-auto text-center space-y-8">
                    <h2 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight">
                        "Adelaide's Trusted Real Estate Partner"
                    </h2>
                    <p class="text-xl opacity-90">
                        "Personalized property solutions with expert guidance every step of the way."
                    </p>

                    <div class="flex flex-wrap gap-4 justify-center pt-6">
                        <button
                            class="bg-accent hover:bg-accent-strong text-text-inverse px-6 py-3 rounded-lg shadow-lg transition-all flex items-center gap-2 text-lg font-medium"
                            on:click=move |_| ui.open_booking(None)
                        >
                            "Book a Consultation →"
                        </button>
                        <button
                            class="bg-overlay-button hover:bg-overlay-button-hover text-text-inverse border border-overlay-border px-6 py-3 rounded-lg shadow-lg transition-all flex items-center gap-2 text-lg font-medium"
                            on:click=move |_| request_chat(ui, auth.get_untracked().is_authenticated)
                        >
                            "Chat with Emma"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
