use leptos::*;

use crate::pages::booking::types::BookingStep;
use crate::pages::booking::view_model::use_booking_view_model;

#[component]
pub fn StepProgress() -> impl IntoView {
    let vm = use_booking_view_model();
    let current_index = create_memo(move |_| vm.step.get().index());

    view! {
        <div class="mb-6 md:mb-8">
            <div class="flex items-center justify-between max-w-md mx-auto relative">
                {BookingStep::ALL
                    .iter()
                    .map(|step| {
                        let step = *step;
                        view! {
                            <div class="flex flex-col items-center z-10">
                                <div class=move || {
                                    if current_index.get() >= step.index() {
                                        "w-8 h-8 rounded-full flex items-center justify-center bg-brand text-text-inverse"
                                    } else {
                                        "w-8 h-8 rounded-full flex items-center justify-center bg-surface-muted text-fg-muted"
                                    }
                                }>
                                    {step.index() + 1}
                                </div>
                                <span class="text-xs mt-1 text-fg-muted hidden md:block">{step.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="absolute left-0 right-0 flex justify-center h-0.5 bg-surface-muted -z-0"></div>
            </div>
        </div>
    }
}
