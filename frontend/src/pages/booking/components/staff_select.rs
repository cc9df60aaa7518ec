use leptos::*;

use crate::pages::booking::view_model::use_booking_view_model;
use crate::services::staff::staff_catalogue;

#[component]
pub fn StaffSelectStep() -> impl IntoView {
    let vm = use_booking_view_model();

    view! {
        <div>
            <p class="text-fg-muted text-lg mb-6 text-center">
                "Select a team member to schedule an appointment with:"
            </p>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 md:gap-6">
                {staff_catalogue()
                    .iter()
                    .map(|member| {
                        let id = member.id;
                        view! {
                            <div
                                class="bg-surface-elevated rounded-xl p-4 md:p-6 cursor-pointer hover:shadow-xl transition-all border border-border"
                                on:click=move |_| vm.select_staff(id)
                            >
                                <div class="flex flex-col items-center text-center">
                                    <div class="w-16 h-16 md:w-24 md:h-24 rounded-full bg-brand text-text-inverse flex items-center justify-center text-2xl font-bold border-2 border-brand shadow-md mb-4">
                                        {member.initials()}
                                    </div>
                                    <h3 class="font-bold text-xl text-fg">{member.name.clone()}</h3>
                                    <p class="text-accent font-medium">{member.role.clone()}</p>
                                    <div class="flex items-center gap-1 mt-3 text-sm text-fg-muted">
                                        <span>{member.location.clone()}</span>
                                    </div>
                                    <button class="mt-4 bg-brand text-text-inverse px-4 py-2 rounded-lg hover:bg-brand-strong transition-colors text-sm">
                                        "Schedule Appointment"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
