use leptos::*;

use crate::pages::booking::utils::ContactField;
use crate::pages::booking::view_model::use_booking_view_model;
use crate::services::slot_label_for_id;
use crate::services::staff::staff_by_id;
use crate::utils::time::format_long_date;

#[component]
pub fn DetailsStep() -> impl IntoView {
    let vm = use_booking_view_model();
    let pending = vm.submit_action.pending();
    let errors = vm.form.errors_signal();

    let staff_name = move || {
        vm.selected_staff
            .get()
            .and_then(staff_by_id)
            .map(|member| member.name.clone())
            .unwrap_or_default()
    };
    let date_label = move || {
        vm.selected_date
            .get()
            .map(format_long_date)
            .unwrap_or_default()
    };
    let slot_label = move || {
        vm.selected_slot
            .get()
            .and_then(|id| slot_label_for_id(&id))
            .unwrap_or_default()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    let input_class = |has_error: bool| {
        if has_error {
            "w-full p-3 border border-status-error-border rounded-lg focus:outline-none focus:ring-2 focus:ring-brand"
        } else {
            "w-full p-3 border border-form-control-border rounded-lg focus:outline-none focus:ring-2 focus:ring-brand"
        }
    };

    view! {
        <div>
            <div class="mb-6 bg-surface-elevated p-4 rounded-xl shadow-sm border border-border">
                <h3 class="font-bold text-lg mb-2">"Appointment Summary"</h3>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div>
                        <p class="text-sm text-fg-muted">"Staff Member"</p>
                        <p class="font-medium">{staff_name}</p>
                    </div>
                    <div>
                        <p class="text-sm text-fg-muted">"Date"</p>
                        <p class="font-medium">{date_label}</p>
                    </div>
                    <div>
                        <p class="text-sm text-fg-muted">"Time"</p>
                        <p class="font-medium">{slot_label}</p>
                    </div>
                </div>
                <button
                    class="mt-4 text-sm text-brand hover:underline"
                    on:click=move |_| vm.back()
                >
                    "‹ Change date/time"
                </button>
            </div>

            <form
                class="bg-surface-elevated p-6 rounded-xl shadow-sm border border-border"
                on:submit=on_submit
            >
                <h3 class="font-bold text-lg mb-4">"Your Contact Information"</h3>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-4">
                    <div>
                        <label for="name" class="block text-sm font-medium text-fg-muted mb-1">
                            "Full Name *"
                        </label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Enter your full name"
                            class=move || input_class(errors.get().name.is_some())
                            prop:value=move || vm.form.name_signal().get()
                            on:input=move |ev| vm.form.edit(ContactField::Name, event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .get()
                                .name
                                .map(|message| view! { <p class="mt-1 text-sm text-status-error-text">{message}</p> })
                        }}
                    </div>

                    <div>
                        <label for="email" class="block text-sm font-medium text-fg-muted mb-1">
                            "Email Address *"
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="Enter your email"
                            class=move || input_class(errors.get().email.is_some())
                            prop:value=move || vm.form.email_signal().get()
                            on:input=move |ev| vm.form.edit(ContactField::Email, event_target_value(&ev))
                        />
                        {move || {
                            errors
                                .get()
                                .email
                                .map(|message| view! { <p class="mt-1 text-sm text-status-error-text">{message}</p> })
                        }}
                    </div>
                </div>

                <div class="mb-4">
                    <label for="phone" class="block text-sm font-medium text-fg-muted mb-1">
                        "Phone Number *"
                    </label>
                    <input
                        id="phone"
                        type="tel"
                        placeholder="Enter your phone number"
                        class=move || input_class(errors.get().phone.is_some())
                        prop:value=move || vm.form.phone_signal().get()
                        on:input=move |ev| vm.form.edit(ContactField::Phone, event_target_value(&ev))
                    />
                    {move || {
                        errors
                            .get()
                            .phone
                            .map(|message| view! { <p class="mt-1 text-sm text-status-error-text">{message}</p> })
                    }}
                </div>

                <div class="mb-6">
                    <label for="message" class="block text-sm font-medium text-fg-muted mb-1">
                        "Message (Optional)"
                    </label>
                    <textarea
                        id="message"
                        rows="4"
                        placeholder="Tell us about your inquiry or any specific requirements"
                        class="w-full p-3 border border-form-control-border rounded-lg focus:outline-none focus:ring-2 focus:ring-brand"
                        prop:value=move || vm.form.message_signal().get()
                        on:input=move |ev| vm.form.message_signal().set(event_target_value(&ev))
                    ></textarea>
                </div>

                {move || {
                    vm.form
                        .submit_error_signal()
                        .get()
                        .map(|error| {
                            view! {
                                <div class="mb-4 p-3 bg-status-error-bg border border-status-error-border rounded-lg text-status-error-text text-sm">
                                    {error.error}
                                </div>
                            }
                        })
                }}

                <div class="flex flex-col sm:flex-row gap-4">
                    <button
                        type="button"
                        class="py-3 px-6 border border-border rounded-lg hover:bg-surface-muted transition-colors"
                        on:click=move |_| vm.back()
                    >
                        "‹ Back"
                    </button>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="flex-1 bg-brand text-text-inverse py-3 px-6 rounded-lg hover:bg-brand-strong transition-colors font-medium disabled:opacity-70 disabled:cursor-not-allowed"
                    >
                        {move || if pending.get() { "Processing..." } else { "Book Appointment" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
