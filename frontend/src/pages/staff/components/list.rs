use leptos::*;

use crate::pages::staff::utils::{filter_staff, StaffFilter};
use crate::pages::staff::view_model::use_staff_directory_view_model;

#[component]
pub fn StaffList() -> impl IntoView {
    let vm = use_staff_directory_view_model();

    view! {
        <div>
            <div class="mb-8">
                <div class="flex flex-wrap gap-2 mb-6">
                    {StaffFilter::ALL_FILTERS
                        .iter()
                        .map(|filter| {
                            let filter = *filter;
                            view! {
                                <button
                                    class=move || {
                                        if vm.filter.get() == filter {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-brand text-text-inverse shadow-md"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium bg-surface-muted hover:bg-surface-strong text-fg"
                                        }
                                    }
                                    on:click=move |_| vm.filter.set(filter)
                                >
                                    {filter.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-fg-muted text-lg">
                    "Connect with our specialists to get personalized assistance with your real \
                     estate needs."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {move || {
                    filter_staff(vm.filter.get())
                        .into_iter()
                        .map(|member| {
                            let id = member.id;
                            view! {
                                <div
                                    class="bg-surface-elevated rounded-xl p-6 cursor-pointer hover:shadow-xl transition-all border border-border"
                                    on:click=move |_| vm.select(id)
                                >
                                    <div class="flex gap-5">
                                        <div class="w-20 h-20 rounded-full bg-brand text-text-inverse flex items-center justify-center text-xl font-bold border-2 border-brand shadow-md">
                                            {member.initials()}
                                        </div>
                                        <div class="flex-1">
                                            <h3 class="font-bold text-xl text-fg">{member.name.clone()}</h3>
                                            <p class="text-accent font-medium">{member.role.clone()}</p>
                                            <p class="text-fg-muted text-sm mt-1">{member.experience.clone()}</p>
                                            <div class="mt-3 flex flex-wrap gap-2">
                                                {member
                                                    .specialties
                                                    .iter()
                                                    .take(2)
                                                    .map(|specialty| {
                                                        view! {
                                                            <span class="bg-surface-muted text-fg text-xs px-2 py-1 rounded-full">
                                                                {specialty.clone()}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                                <Show when=move || (member.specialties.len() > 2)>
                                                    <span class="text-xs text-fg-muted">
                                                        {format!("+{} more", member.specialties.len() - 2)}
                                                    </span>
                                                </Show>
                                            </div>
                                            <p class="mt-3 text-sm text-brand">{member.email.clone()}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
