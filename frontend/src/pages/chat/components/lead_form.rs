use leptos::*;

use crate::pages::chat::view_model::use_chat_view_model;
use crate::services::ServicePreference;

#[component]
pub fn LeadForm() -> impl IntoView {
    let vm = use_chat_view_model();
    let form = vm.lead_form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_lead_form();
    };

    view! {
        <form
            class="relative border-t border-border bg-surface-elevated p-6"
            on:submit=on_submit
        >
            <button
                type="button"
                class="absolute top-4 right-4 text-fg-muted hover:text-fg"
                aria-label="Close form"
                on:click=move |_| vm.show_lead_form.set(false)
            >
                {"✕"}
            </button>

            <div class="text-center mb-6">
                <h2 class="text-xl font-bold">"Tell us about you"</h2>
                <p class="text-fg-muted">"We'll connect you with the right expert"</p>
            </div>

            <div class="mb-6">
                <label for="lead-name" class="block mb-2 font-medium">"Full Name"</label>
                <input
                    id="lead-name"
                    type="text"
                    class="w-full px-4 py-3 rounded-lg border border-form-control-border focus:ring-2 focus:ring-brand outline-none"
                    prop:value=move || form.name_signal().get()
                    on:input=move |ev| form.name_signal().set(event_target_value(&ev))
                />
            </div>

            <div class="mb-6">
                <span class="block mb-2 font-medium">"Service Needed"</span>
                <div class="grid grid-cols-3 gap-3">
                    {ServicePreference::ALL
                        .iter()
                        .map(|option| {
                            let option = *option;
                            let checked = create_memo(move |_| {
                                form.preference_signal().get() == Some(option)
                            });
                            view! {
                                <label class=move || {
                                    if checked.get() {
                                        "flex flex-col items-center gap-2 p-4 rounded-lg border-2 border-brand bg-primary-subtle cursor-pointer"
                                    } else {
                                        "flex flex-col items-center gap-2 p-4 rounded-lg border border-border bg-surface-elevated cursor-pointer"
                                    }
                                }>
                                    <input
                                        type="radio"
                                        name="preference"
                                        class="sr-only"
                                        prop:checked=move || checked.get()
                                        on:change=move |_| {
                                            form.preference_signal().set(Some(option))
                                        }
                                    />
                                    <span class="text-center text-sm">{option.label()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                form.error_signal()
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mb-4 p-3 bg-status-error-bg border border-status-error-border rounded-lg text-status-error-text text-sm">
                                {message}
                            </div>
                        }
                    })
            }}

            <button
                type="submit"
                disabled=move || vm.lead_submitting.get()
                class="w-full bg-brand text-text-inverse py-3 rounded-lg font-medium hover:bg-brand-strong transition-colors disabled:opacity-70"
            >
                {move || if vm.lead_submitting.get() { "Sending..." } else { "Continue" }}
            </button>
        </form>
    }
}
