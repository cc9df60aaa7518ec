use leptos::*;

use crate::components::modal::ModalShell;
use crate::pages::booking::components::{
    calendar_grid::CalendarGrid, confirmation::ConfirmationStep, details_form::DetailsStep,
    progress::StepProgress, staff_select::StaffSelectStep, time_slots::TimeSlotsStep,
};
use crate::pages::booking::types::BookingStep;
use crate::pages::booking::view_model::use_booking_view_model;
use crate::services::staff::staff_by_id;
use crate::state::ui::{use_ui_state, ActiveOverlay};

/// The appointment wizard overlay. The view model lives in context above the
/// modal, so closing and reopening it resumes the draft in progress.
#[component]
pub fn BookingModal() -> impl IntoView {
    let ui = use_ui_state();
    let vm = use_booking_view_model();

    let is_open = create_memo(move |_| {
        matches!(ui.overlay.get(), ActiveOverlay::Booking { .. })
    });

    // Seed the wizard whenever the overlay opens targeting a specific staff
    // member; resuming (staff: None) leaves the draft untouched.
    create_effect(move |_| {
        if let ActiveOverlay::Booking { staff } = ui.overlay.get() {
            vm.open(staff);
        }
    });

    let on_close = Callback::new(move |_: ()| ui.close_overlay());

    view! {
        <Show when=move || is_open.get()>
            <ModalShell on_close=on_close wide=true>
                <div class="flex justify-between items-center mb-6 md:mb-8">
                    <h2 class="text-2xl md:text-3xl font-bold text-brand">
                        {move || vm.step.get().title()}
                    </h2>
                    <button
                        class="p-2 rounded-full bg-surface-muted hover:bg-surface-strong transition-colors"
                        aria-label="Close"
                        on:click=move |_| ui.close_overlay()
                    >
                        {"✕"}
                    </button>
                </div>

                <StepProgress/>

                {move || match vm.step.get() {
                    BookingStep::StaffSelect => view! { <StaffSelectStep/> }.into_view(),
                    BookingStep::DateTime => view! { <DateTimeStep/> }.into_view(),
                    BookingStep::Details => view! { <DetailsStep/> }.into_view(),
                    BookingStep::Confirmation => view! { <ConfirmationStep/> }.into_view(),
                }}
            </ModalShell>
        </Show>
    }
}

#[component]
fn DateTimeStep() -> impl IntoView {
    let vm = use_booking_view_model();

    let staff_card = move || {
        vm.selected_staff.get().and_then(staff_by_id).map(|member| {
            let changeable = vm.preselected_staff.get().is_none();
            view! {
                <div class="mb-6 flex items-center gap-4 bg-surface-elevated p-4 rounded-xl shadow-sm">
                    <div class="w-12 h-12 rounded-full bg-brand text-text-inverse flex items-center justify-center font-bold border-2 border-brand">
                        {member.initials()}
                    </div>
                    <div>
                        <h3 class="font-bold text-lg">{member.name.clone()}</h3>
                        <p class="text-accent">{member.role.clone()}</p>
                    </div>
                    <Show when=move || changeable>
                        <button
                            class="ml-auto text-sm text-brand hover:underline"
                            on:click=move |_| vm.back()
                        >
                            "Change"
                        </button>
                    </Show>
                </div>
            }
        })
    };

    view! {
        <div>
            {staff_card}
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8">
                <CalendarGrid/>
                <TimeSlotsStep/>
            </div>
        </div>
    }
}
