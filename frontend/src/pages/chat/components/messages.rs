use leptos::*;

use crate::pages::chat::view_model::use_chat_view_model;
use crate::services::ChatAuthor;
use crate::utils::time::format_clock_time;

#[component]
pub fn MessageList() -> impl IntoView {
    let vm = use_chat_view_model();
    let typing = vm.reply_action.pending();

    view! {
        <div class="flex-1 overflow-y-auto p-4 space-y-4 bg-surface">
            {move || {
                vm.messages
                    .get()
                    .into_iter()
                    .map(|message| {
                        let (bubble_class, align_class) = match message.author {
                            ChatAuthor::Agent => (
                                "bg-surface-elevated border border-border text-fg rounded-2xl rounded-tl-sm",
                                "flex justify-start",
                            ),
                            ChatAuthor::Visitor => (
                                "bg-brand text-text-inverse rounded-2xl rounded-tr-sm",
                                "flex justify-end",
                            ),
                        };
                        view! {
                            <div class=align_class>
                                <div class=format!("max-w-[80%] px-4 py-3 shadow-sm {}", bubble_class)>
                                    <p class="leading-relaxed">{message.body}</p>
                                    <time class="block mt-1 text-xs opacity-70">
                                        {format_clock_time(message.sent_at)}
                                    </time>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <Show when=move || typing.get()>
                <TypingIndicator/>
            </Show>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="bg-surface-elevated border border-border text-fg-muted rounded-2xl rounded-tl-sm px-4 py-3 shadow-sm flex items-center gap-2">
                <span class="animate-spin rounded-full h-3 w-3 border-b-2 border-current"></span>
                <span class="text-sm">"Emma is typing..."</span>
            </div>
        </div>
    }
}
