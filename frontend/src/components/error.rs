use crate::services::ServiceError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ServiceError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = &e.code;
                    if code != "UNKNOWN" && !code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message_and_code() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ServiceError::auth_failed("Authentication failed")));
            view! { <InlineErrorMessage error={signal.into()}/> }
        });
        assert!(html.contains("Authentication failed"));
        assert!(html.contains("Code: AUTH_FAILED"));
    }

    #[test]
    fn unknown_code_is_not_echoed() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ServiceError::unknown("boom")));
            view! { <InlineErrorMessage error={signal.into()}/> }
        });
        assert!(html.contains("boom"));
        assert!(!html.contains("Code:"));
    }

    #[test]
    fn nothing_renders_without_an_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ServiceError>);
            view! { <InlineErrorMessage error={signal.into()}/> }
        });
        assert!(!html.contains("status-error"));
    }
}
