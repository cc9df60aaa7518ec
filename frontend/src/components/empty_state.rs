use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-xl border-2 border-dashed border-border bg-surface-muted">
            <h3 class="text-sm font-semibold text-fg">{title}</h3>
            {move || description.clone().map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_title_and_optional_description() {
        let html = render_to_string(move || {
            view! {
                <EmptyState
                    title="No time selected"
                    description="Pick a date to see available times.".to_string()
                />
            }
        });
        assert!(html.contains("No time selected"));
        assert!(html.contains("Pick a date"));
    }
}
