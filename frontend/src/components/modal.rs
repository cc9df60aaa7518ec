use leptos::ev::KeyboardEvent;
use leptos::*;

/// Shared overlay chrome: backdrop, centred panel, Escape-to-close. The
/// caller owns the open/closed state and renders the shell only while open.
#[component]
pub fn ModalShell(
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let panel_class = if wide {
        "relative z-[51] w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-2xl bg-surface-elevated shadow-2xl border border-border p-4 md:p-8"
    } else {
        "relative z-[51] w-full max-w-md rounded-2xl bg-surface-elevated shadow-2xl border border-border p-6 md:p-8"
    };

    let close_on_backdrop = on_close;
    let close_on_esc = on_close;

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop backdrop-blur-sm"
                on:click=move |_| close_on_backdrop.call(())
            ></button>
            <div
                class=panel_class
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close_on_esc.call(());
                    }
                }
            >
                {children()}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_shell_renders_dialog_markup_and_children() {
        let html = render_to_string(move || {
            view! {
                <ModalShell on_close=Callback::new(|_| {}) wide=true>
                    <div>"modal-content"</div>
                </ModalShell>
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("modal-content"));
        assert!(html.contains("max-w-4xl"));
    }

    #[test]
    fn narrow_modal_uses_the_compact_width() {
        let html = render_to_string(move || {
            view! {
                <ModalShell on_close=Callback::new(|_| {})>
                    <div>"narrow"</div>
                </ModalShell>
            }
        });
        assert!(html.contains("max-w-md"));
    }
}
