use leptos::*;

use crate::pages::chat::view_model::use_chat_view_model;

#[component]
pub fn Composer() -> impl IntoView {
    let vm = use_chat_view_model();
    let pending = vm.reply_action.pending();

    let has_draft = create_memo(move |_| !vm.draft.get().trim().is_empty());

    view! {
        <div class="flex items-center gap-3 p-4 border-t border-border bg-surface-elevated">
            <input
                class="flex-1 px-5 py-3 rounded-full border border-form-control-border outline-none focus:ring-2 focus:ring-brand"
                placeholder="Ask me anything about real estate..."
                disabled=move || pending.get()
                prop:value=move || vm.draft.get()
                on:input=move |ev| vm.draft.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        vm.send();
                    }
                }
            />
            <button
                class=move || {
                    if has_draft.get() {
                        "px-5 py-3 rounded-full bg-accent text-text-inverse shadow-md hover:bg-accent-strong transition-colors"
                    } else {
                        "px-5 py-3 rounded-full bg-state-disabled-bg text-state-disabled-text cursor-not-allowed"
                    }
                }
                disabled=move || pending.get() || !has_draft.get()
                on:click=move |_| vm.send()
            >
                "Send"
            </button>
        </div>
    }
}
