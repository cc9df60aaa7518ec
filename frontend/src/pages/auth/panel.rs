use leptos::*;

use crate::components::error::InlineErrorMessage;
use crate::components::modal::ModalShell;
use crate::pages::auth::utils::{heading_for, subheading_for, submit_label_for};
use crate::pages::auth::view_model::use_auth_view_model;
use crate::services::{AuthMode, SocialProvider};
use crate::state::ui::{use_ui_state, ActiveOverlay};

#[component]
pub fn AuthModal() -> impl IntoView {
    let ui = use_ui_state();
    let vm = use_auth_view_model(ui);
    let pending = vm.pending();

    let is_open = create_memo(move |_| matches!(ui.overlay.get(), ActiveOverlay::Auth { .. }));
    let on_close = Callback::new(move |_: ()| ui.close_overlay());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Show when=move || is_open.get()>
            <ModalShell on_close=on_close wide=false>
                <button
                    class="absolute top-4 right-4 p-2 rounded-full hover:bg-surface-muted transition-colors"
                    aria-label="Close"
                    on:click=move |_| ui.close_overlay()
                >
                    {"✕"}
                </button>

                <div class="text-center mb-6">
                    <h2 class="text-2xl font-bold text-fg">
                        {move || heading_for(vm.mode.get())}
                    </h2>
                    <p class="text-fg-muted mt-1">{move || subheading_for(vm.mode.get())}</p>
                </div>

                <div class="grid grid-cols-2 gap-4 mb-6">
                    <button
                        disabled=move || pending.get()
                        class="flex items-center justify-center gap-2 p-3 border border-border rounded-lg hover:bg-surface-muted transition-colors"
                        on:click=move |_| vm.social(SocialProvider::Google)
                    >
                        <span class="font-medium">"Google"</span>
                    </button>
                    <button
                        disabled=move || pending.get()
                        class="flex items-center justify-center gap-2 p-3 border border-border rounded-lg hover:bg-surface-muted transition-colors"
                        on:click=move |_| vm.social(SocialProvider::Facebook)
                    >
                        <span class="font-medium">"Facebook"</span>
                    </button>
                </div>

                <div class="relative flex items-center justify-center mb-6">
                    <div class="border-t border-border absolute w-full"></div>
                    <span class="bg-surface-elevated px-2 relative text-sm text-fg-muted">
                        "or continue with email"
                    </span>
                </div>

                <form on:submit=on_submit>
                    <Show when=move || vm.mode.get() == AuthMode::Register>
                        <div class="mb-4">
                            <label for="auth-name" class="block text-sm font-medium text-fg-muted mb-1">
                                "Full Name"
                            </label>
                            <input
                                id="auth-name"
                                type="text"
                                placeholder="John Doe"
                                disabled=move || pending.get()
                                class="w-full px-4 py-2 border border-form-control-border rounded-lg focus:ring-2 focus:ring-brand transition-colors"
                                prop:value=move || vm.name.get()
                                on:input=move |ev| vm.name.set(event_target_value(&ev))
                            />
                        </div>
                    </Show>

                    <div class="mb-4">
                        <label for="auth-email" class="block text-sm font-medium text-fg-muted mb-1">
                            "Email Address"
                        </label>
                        <input
                            id="auth-email"
                            type="email"
                            placeholder="you@example.com"
                            disabled=move || pending.get()
                            class="w-full px-4 py-2 border border-form-control-border rounded-lg focus:ring-2 focus:ring-brand transition-colors"
                            prop:value=move || vm.email.get()
                            on:input=move |ev| vm.email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="mb-6">
                        <label for="auth-password" class="block text-sm font-medium text-fg-muted mb-1">
                            "Password"
                        </label>
                        <div class="relative">
                            <input
                                id="auth-password"
                                type=move || if vm.show_password.get() { "text" } else { "password" }
                                placeholder=move || {
                                    if vm.mode.get() == AuthMode::SignIn {
                                        "Your password"
                                    } else {
                                        "Create a password"
                                    }
                                }
                                disabled=move || pending.get()
                                class="w-full px-4 py-2 pr-10 border border-form-control-border rounded-lg focus:ring-2 focus:ring-brand transition-colors"
                                prop:value=move || vm.password.get()
                                on:input=move |ev| vm.password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 pr-3 flex items-center text-fg-muted hover:text-fg"
                                on:click=move |_| vm.show_password.update(|show| *show = !*show)
                            >
                                {move || if vm.show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <InlineErrorMessage error=vm.error.into()/>

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full bg-brand hover:bg-brand-strong text-text-inverse py-2 rounded-lg transition-colors font-medium disabled:opacity-70 disabled:cursor-not-allowed"
                    >
                        {move || submit_label_for(vm.mode.get(), pending.get())}
                    </button>
                </form>

                <div class="mt-6 text-center text-sm">
                    <Show
                        when=move || vm.mode.get() == AuthMode::SignIn
                        fallback=move || {
                            view! {
                                <p class="text-fg-muted">
                                    "Already have an account? "
                                    <button
                                        class="text-brand font-medium hover:underline"
                                        on:click=move |_| vm.switch_mode(AuthMode::SignIn)
                                    >
                                        "Sign in"
                                    </button>
                                </p>
                            }
                        }
                    >
                        <p class="text-fg-muted">
                            "Don't have an account? "
                            <button
                                class="text-brand font-medium hover:underline"
                                on:click=move |_| vm.switch_mode(AuthMode::Register)
                            >
                                "Sign up"
                            </button>
                        </p>
                    </Show>
                </div>
            </ModalShell>
        </Show>
    }
}
