use leptos::*;

use crate::components::modal::ModalShell;
use crate::pages::staff::components::{detail::StaffDetail, list::StaffList};
use crate::pages::staff::view_model::use_staff_directory_view_model;
use crate::state::ui::{use_ui_state, ActiveOverlay};

#[component]
pub fn StaffDirectoryModal() -> impl IntoView {
    let ui = use_ui_state();
    let vm = use_staff_directory_view_model();

    let is_open = create_memo(move |_| ui.overlay.get() == ActiveOverlay::StaffDirectory);
    let on_close = Callback::new(move |_: ()| ui.close_overlay());

    view! {
        <Show when=move || is_open.get()>
            <ModalShell on_close=on_close wide=true>
                <div class="flex justify-between items-center mb-8">
                    <h2 class="text-3xl font-bold text-brand">
                        {move || {
                            if vm.selected.get().is_none() {
                                "Our Dedicated Team"
                            } else {
                                "Team Member Profile"
                            }
                        }}
                    </h2>
                    <button
                        class="p-2 rounded-full bg-surface-muted hover:bg-surface-strong transition-colors"
                        aria-label="Close"
                        on:click=move |_| ui.close_overlay()
                    >
                        {"✕"}
                    </button>
                </div>

                {move || match vm.selected.get() {
                    None => view! { <StaffList/> }.into_view(),
                    Some(id) => view! { <StaffDetail id=id/> }.into_view(),
                }}
            </ModalShell>
        </Show>
    }
}
