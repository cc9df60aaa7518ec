use leptos::*;

use crate::pages::booking::view_model::use_booking_view_model;
use crate::services::slot_label_for_id;
use crate::services::staff::staff_by_id;
use crate::services::CalendarProvider;
use crate::state::ui::use_ui_state;
use crate::utils::time::format_long_date;

#[component]
pub fn ConfirmationStep() -> impl IntoView {
    let vm = use_booking_view_model();
    let ui = use_ui_state();

    view! {
        <div class="text-center">
            <div class="flex flex-col items-center">
                <div class="w-24 h-24 bg-status-success-bg rounded-full flex items-center justify-center mb-6 text-status-success-text text-4xl">
                    {"✓"}
                </div>

                <h3 class="text-2xl font-bold mb-2">"Appointment Confirmed!"</h3>
                <p class="text-fg-muted mb-8 max-w-md mx-auto">
                    "Your appointment has been scheduled successfully. We've sent a confirmation \
                     email with all the details."
                </p>

                {move || {
                    vm.confirmed
                        .get()
                        .map(|appointment| {
                            let member = staff_by_id(appointment.staff_id);
                            let slot = slot_label_for_id(&appointment.slot_id).unwrap_or_default();
                            view! {
                                <div class="bg-surface-elevated p-6 rounded-xl shadow-sm border border-border mb-8 max-w-md w-full text-left">
                                    <h4 class="font-bold text-lg mb-4">"Appointment Details"</h4>
                                    {member
                                        .map(|member| {
                                            view! {
                                                <div class="flex items-center gap-4 mb-4 pb-4 border-b border-border">
                                                    <div class="w-16 h-16 rounded-full bg-brand text-text-inverse flex items-center justify-center text-xl font-bold">
                                                        {member.initials()}
                                                    </div>
                                                    <div>
                                                        <p class="font-medium text-lg">{member.name.clone()}</p>
                                                        <p class="text-accent">{member.role.clone()}</p>
                                                    </div>
                                                </div>
                                            }
                                        })}
                                    <div class="space-y-3">
                                        <div>
                                            <p class="text-sm text-fg-muted">"Date"</p>
                                            <p class="font-medium">{format_long_date(appointment.date)}</p>
                                        </div>
                                        <div>
                                            <p class="text-sm text-fg-muted">"Time"</p>
                                            <p class="font-medium">{slot}</p>
                                        </div>
                                        <div>
                                            <p class="text-sm text-fg-muted">"Location"</p>
                                            <p class="font-medium">
                                                {member.map(|m| m.location.clone()).unwrap_or_default()}
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}

                <Show
                    when=move || vm.calendar_synced.get()
                    fallback=move || view! { <SyncOptions/> }
                >
                    <div class="mb-6 bg-status-success-bg p-4 rounded-xl border border-status-success-border max-w-md mx-auto text-left">
                        <p class="font-medium text-status-success-text">"Calendar Synced Successfully"</p>
                        <p class="text-status-success-text text-sm">
                            "Your appointment has been added to your calendar"
                        </p>
                    </div>
                </Show>

                {move || {
                    vm.notice
                        .get()
                        .map(|notice| {
                            view! {
                                <p class="mb-6 text-sm text-fg-muted italic">{notice}</p>
                            }
                        })
                }}

                <div class="flex flex-col sm:flex-row gap-4">
                    <button
                        class="bg-surface-elevated border border-brand text-brand py-3 px-6 rounded-lg hover:bg-surface-muted transition-colors"
                        on:click=move |_| vm.reset()
                    >
                        "Book Another Appointment"
                    </button>
                    <button
                        class="bg-accent text-text-inverse py-3 px-6 rounded-lg hover:bg-accent-strong transition-colors"
                        on:click=move |_| ui.close_overlay()
                    >
                        "Done"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SyncOptions() -> impl IntoView {
    let vm = use_booking_view_model();
    let syncing = vm.sync_action.pending();

    view! {
        <div class="mb-6">
            <button
                class="bg-brand text-text-inverse px-6 py-3 rounded-lg hover:bg-brand-strong transition-colors mx-auto"
                on:click=move |_| vm.toggle_sync_options()
            >
                "Sync with Calendar"
            </button>

            <Show when=move || vm.show_sync_options.get()>
                <div class="mt-4 bg-surface-elevated p-4 rounded-xl border border-border max-w-md mx-auto">
                    <p class="text-fg-muted mb-4 text-sm">"Choose your calendar service:"</p>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                        <button
                            disabled=move || syncing.get()
                            class="flex items-center justify-center gap-2 p-3 border border-border rounded-lg hover:bg-surface-muted transition-colors disabled:opacity-70"
                            on:click=move |_| vm.sync_calendar(CalendarProvider::Google)
                        >
                            {move || if syncing.get() { "Syncing..." } else { "Google Calendar" }}
                        </button>
                        <button
                            disabled=move || syncing.get()
                            class="flex items-center justify-center gap-2 p-3 border border-border rounded-lg hover:bg-surface-muted transition-colors disabled:opacity-70"
                            on:click=move |_| vm.sync_calendar(CalendarProvider::Outlook)
                        >
                            {move || if syncing.get() { "Syncing..." } else { "Outlook Calendar" }}
                        </button>
                        <button
                            class="flex items-center justify-center gap-2 p-3 border border-border rounded-lg hover:bg-surface-muted transition-colors"
                            on:click=move |_| vm.download_ics()
                        >
                            "Download .ics File"
                        </button>
                        <button
                            class="flex items-center justify-center gap-2 p-3 border border-border rounded-lg hover:bg-surface-muted transition-colors"
                            on:click=move |_| vm.copy_link()
                        >
                            "Copy Calendar Link"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
