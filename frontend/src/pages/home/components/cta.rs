use leptos::*;

use crate::state::ui::use_ui_state;

#[component]
pub fn CallToActionSection() -> impl IntoView {
    let ui = use_ui_state();

    view! {
        <section class="py-16 bg-brand">
            <div class="max-w-4xl mx-auto px-4 text-center text-text-inverse">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">
                    "Ready to Find Your Perfect Property?"
                </h2>
                <p class="opacity-80 text-lg mb-8">
                    "Whether you're buying, selling, or investing, our team of experts is here to \
                     help you every step of the way."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="bg-accent hover:bg-accent-strong text-text-inverse px-6 py-3 rounded-lg shadow-lg transition-all flex items-center justify-center gap-2 text-lg font-medium"
                        on:click=move |_| ui.open_booking(None)
                    >
                        "Schedule a Consultation"
                    </button>
                    <button
                        class="bg-overlay-button hover:bg-overlay-button-hover text-text-inverse border border-overlay-border px-6 py-3 rounded-lg shadow-lg transition-all flex items-center justify-center gap-2 text-lg font-medium"
                        on:click=move |_| ui.open_staff_directory()
                    >
                        "Meet Our Team"
                    </button>
                </div>
            </div>
        </section>
    }
}
