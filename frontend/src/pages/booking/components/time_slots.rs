use leptos::*;

use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use crate::pages::booking::types::{selection_complete, ContinueOutcome};
use crate::pages::booking::view_model::use_booking_view_model;
use crate::state::auth::use_auth;
use crate::state::ui::{use_ui_state, AuthIntent};
use crate::utils::time::format_long_date;

#[component]
pub fn TimeSlotsStep() -> impl IntoView {
    let vm = use_booking_view_model();
    let ui = use_ui_state();
    let (auth, _) = use_auth();

    let continue_visible = create_memo(move |_| {
        selection_complete(vm.selected_date.get(), vm.selected_slot.get().as_deref())
    });

    let on_continue = move |_| {
        let authenticated = auth.get_untracked().is_authenticated;
        if vm.try_continue(authenticated) == ContinueOutcome::AuthRequired {
            ui.request_auth(AuthIntent::ResumeBooking);
        }
    };

    view! {
        <div>
            {move || {
                vm.selected_date
                    .get()
                    .map(|date| {
                        view! {
                            <div class="bg-surface-elevated p-4 md:p-6 rounded-xl shadow-sm border border-border">
                                <h3 class="font-bold text-lg mb-4">
                                    {format!("Available Times for {}", format_long_date(date))}
                                </h3>
                                <SlotList/>
                            </div>
                        }
                        .into_view()
                    })
                    .unwrap_or_else(|| {
                        view! {
                            <EmptyState
                                title="No date selected"
                                description={"Please select a date from the calendar to view \
                                              available time slots."
                                    .to_string()}
                            />
                        }
                        .into_view()
                    })
            }}

            <Show when=move || continue_visible.get()>
                <button
                    class="mt-6 bg-accent text-text-inverse w-full py-3 rounded-lg hover:bg-accent-strong transition-colors flex items-center justify-center gap-2 font-medium"
                    on:click=on_continue
                >
                    "Continue to Details"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn SlotList() -> impl IntoView {
    let vm = use_booking_view_model();

    view! {
        {move || match vm.slots.get() {
            None => view! { <LoadingSpinner/> }.into_view(),
            Some(Err(error)) => view! {
                <p class="text-status-error-text text-sm">{error.error}</p>
            }
            .into_view(),
            Some(Ok(slots)) => {
                let none_available = !slots.is_empty() && slots.iter().all(|slot| !slot.available);
                let buttons = slots
                    .into_iter()
                    .map(|slot| {
                        let id = slot.id.clone();
                        let available = slot.available;
                        let selected = create_memo({
                            let id = id.clone();
                            move |_| vm.selected_slot.get().as_deref() == Some(id.as_str())
                        });
                        let class = move || {
                            if selected.get() {
                                "p-3 rounded-lg text-center bg-brand text-text-inverse"
                            } else if available {
                                "p-3 rounded-lg text-center bg-surface-muted hover:bg-surface-strong text-fg"
                            } else {
                                "p-3 rounded-lg text-center bg-surface-muted text-state-disabled-text cursor-not-allowed"
                            }
                        };
                        view! {
                            <button
                                class=class
                                disabled=!available
                                on:click=move |_| {
                                    if available {
                                        vm.select_slot(id.clone());
                                    }
                                }
                            >
                                {slot.label}
                            </button>
                        }
                    })
                    .collect_view();
                view! {
                    <div>
                        <div class="grid grid-cols-2 gap-2">{buttons}</div>
                        <Show when=move || none_available>
                            <p class="text-center text-fg-muted mt-4">
                                "No available time slots for this date. Please select another date."
                            </p>
                        </Show>
                    </div>
                }
                .into_view()
            }
        }}
    }
}
