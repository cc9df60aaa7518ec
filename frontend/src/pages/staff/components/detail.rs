use leptos::*;

use crate::pages::staff::view_model::use_staff_directory_view_model;
use crate::services::staff::staff_by_id;
use crate::services::StaffId;
use crate::state::ui::use_ui_state;

#[component]
pub fn StaffDetail(id: StaffId) -> impl IntoView {
    let vm = use_staff_directory_view_model();
    let ui = use_ui_state();

    let Some(member) = staff_by_id(id) else {
        return view! { <div class="text-fg-muted">"Team member not found."</div> }.into_view();
    };

    let book_id = member.id;
    view! {
        <div>
            <button
                class="mb-6 flex items-center gap-2 text-brand hover:underline bg-surface-muted px-4 py-2 rounded-lg transition-colors hover:bg-surface-strong"
                on:click=move |_| vm.back_to_list()
            >
                "← Back to team"
            </button>

            <div class="flex flex-col md:flex-row gap-8">
                <div class="md:w-1/3">
                    <div class="w-full aspect-square rounded-xl shadow-lg bg-brand text-text-inverse flex items-center justify-center text-6xl font-bold">
                        {member.initials()}
                    </div>

                    <div class="mt-6 space-y-4 bg-surface-elevated p-5 rounded-xl shadow-sm border border-border">
                        <div class="flex items-center gap-3">
                            <span class="text-fg">{member.location.clone()}</span>
                        </div>
                        <div class="flex items-center gap-3">
                            <a href=format!("tel:{}", member.phone) class="text-brand hover:underline">
                                {member.phone.clone()}
                            </a>
                        </div>
                        <div class="flex items-center gap-3">
                            <a href=format!("mailto:{}", member.email) class="text-brand hover:underline">
                                {member.email.clone()}
                            </a>
                        </div>
                        <div class="flex items-center gap-3">
                            <a
                                href=member.linkedin.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-brand hover:underline"
                            >
                                "LinkedIn Profile"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="md:w-2/3">
                    <h2 class="text-3xl font-bold text-brand">{member.name.clone()}</h2>
                    <p class="text-accent font-medium text-xl">{member.role.clone()}</p>
                    <p class="text-fg font-medium mt-3">{member.experience.clone()}</p>

                    <div class="mt-6 bg-surface-elevated p-6 rounded-xl shadow-sm border border-border">
                        <h3 class="font-semibold text-xl mb-3 text-brand">"About"</h3>
                        <p class="text-fg leading-relaxed">{member.bio.clone()}</p>
                    </div>

                    <div class="mt-6 bg-surface-elevated p-6 rounded-xl shadow-sm border border-border">
                        <h3 class="font-semibold text-xl mb-3 text-brand">"Specialties"</h3>
                        <div class="flex flex-wrap gap-2">
                            {member
                                .specialties
                                .iter()
                                .map(|specialty| {
                                    view! {
                                        <span class="bg-surface-muted text-fg px-3 py-1.5 rounded-full text-sm font-medium">
                                            {specialty.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="mt-8 flex gap-4">
                        <a
                            href=format!("mailto:{}", member.email)
                            class="bg-accent text-text-inverse px-6 py-3 rounded-lg shadow-md transition-all font-medium hover:bg-accent-strong"
                        >
                            {format!("Email {}", member.first_name())}
                        </a>
                        <button
                            class="bg-surface-elevated text-brand border border-brand px-6 py-3 rounded-lg shadow-sm transition-all font-medium hover:bg-brand hover:text-text-inverse"
                            on:click=move |_| ui.open_booking(Some(book_id))
                        >
                            "Book Appointment"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
    .into_view()
}
