use chrono::NaiveDate;
use leptos::*;

use crate::pages::booking::calendar::MonthCursor;
use crate::pages::booking::types::{selection_complete, BookingStep, ContinueOutcome};
use crate::pages::booking::utils::ContactFormState;
use crate::services::{
    use_services, Appointment, AppointmentRequest, CalendarProvider, ServiceError, StaffId,
    TimeSlot,
};
use crate::state::auth;
use crate::utils::time::today_in_agency_tz;

pub const DOWNLOAD_STUB_NOTICE: &str = "ICS file would be downloaded here";
pub const COPY_LINK_STUB_NOTICE: &str = "Appointment link copied to clipboard";

#[derive(Clone, Copy)]
pub struct BookingViewModel {
    pub step: RwSignal<BookingStep>,
    pub preselected_staff: RwSignal<Option<StaffId>>,
    pub selected_staff: RwSignal<Option<StaffId>>,
    pub cursor: RwSignal<MonthCursor>,
    pub selected_date: RwSignal<Option<NaiveDate>>,
    pub selected_slot: RwSignal<Option<String>>,
    pub slots: Resource<(Option<StaffId>, Option<NaiveDate>), Result<Vec<TimeSlot>, ServiceError>>,
    pub form: ContactFormState,
    pub appointments: RwSignal<Vec<Appointment>>,
    pub confirmed: RwSignal<Option<Appointment>>,
    pub awaiting_auth: RwSignal<bool>,
    pub calendar_synced: RwSignal<bool>,
    pub show_sync_options: RwSignal<bool>,
    pub notice: RwSignal<Option<String>>,
    pub submit_action: Action<AppointmentRequest, Result<Appointment, ServiceError>>,
    pub sync_action: Action<CalendarProvider, Result<(), ServiceError>>,
}

fn apply_submit_result(
    result: Option<Result<Appointment, ServiceError>>,
    appointments: RwSignal<Vec<Appointment>>,
    confirmed: RwSignal<Option<Appointment>>,
    step: RwSignal<BookingStep>,
    form: ContactFormState,
) {
    if let Some(result) = result {
        match result {
            Ok(appointment) => {
                appointments.update(|list| list.push(appointment.clone()));
                confirmed.set(Some(appointment));
                form.submit_error_signal().set(None);
                step.set(BookingStep::Confirmation);
            }
            Err(error) => form.submit_error_signal().set(Some(error)),
        }
    }
}

fn apply_sync_result(
    result: Option<Result<(), ServiceError>>,
    calendar_synced: RwSignal<bool>,
    show_sync_options: RwSignal<bool>,
    notice: RwSignal<Option<String>>,
) {
    if let Some(result) = result {
        match result {
            Ok(()) => {
                calendar_synced.set(true);
                show_sync_options.set(false);
            }
            Err(error) => notice.set(Some(error.error)),
        }
    }
}

/// Completes the deferred date-time → details transition once the external
/// auth-success signal lands.
fn resume_after_auth(
    authenticated: bool,
    awaiting_auth: RwSignal<bool>,
    step: RwSignal<BookingStep>,
) {
    if authenticated && awaiting_auth.get_untracked() {
        awaiting_auth.set(false);
        step.set(BookingStep::Details);
    }
}

impl BookingViewModel {
    pub fn new() -> Self {
        let services = store_value(use_services());
        let (auth_state, _) = auth::use_auth();

        let step = create_rw_signal(BookingStep::initial(false));
        let preselected_staff = create_rw_signal(None::<StaffId>);
        let selected_staff = create_rw_signal(None::<StaffId>);
        let cursor = create_rw_signal(MonthCursor::for_date(today_in_agency_tz()));
        let selected_date = create_rw_signal(None::<NaiveDate>);
        let selected_slot = create_rw_signal(None::<String>);
        let form = ContactFormState::default();
        let appointments = create_rw_signal(Vec::<Appointment>::new());
        let confirmed = create_rw_signal(None::<Appointment>);
        let awaiting_auth = create_rw_signal(false);
        let calendar_synced = create_rw_signal(false);
        let show_sync_options = create_rw_signal(false);
        let notice = create_rw_signal(None::<String>);

        let slots = create_resource(
            move || (selected_staff.get(), selected_date.get()),
            move |(staff, date)| {
                let scheduling = services.get_value().scheduling;
                async move {
                    match (staff, date) {
                        (Some(staff), Some(date)) => scheduling.availability(staff, date).await,
                        _ => Ok(Vec::new()),
                    }
                }
            },
        );

        let submit_action = create_action(move |request: &AppointmentRequest| {
            let scheduling = services.get_value().scheduling;
            let request = request.clone();
            async move { scheduling.create_appointment(request).await }
        });

        let sync_action = create_action(move |provider: &CalendarProvider| {
            let calendar_sync = services.get_value().calendar_sync;
            let provider = *provider;
            let appointment = confirmed.get_untracked();
            async move {
                match appointment {
                    Some(appointment) => calendar_sync.sync(&appointment, provider).await,
                    None => Err(ServiceError::validation("No appointment to sync yet")),
                }
            }
        });

        {
            create_effect(move |_| {
                apply_submit_result(
                    submit_action.value().get(),
                    appointments,
                    confirmed,
                    step,
                    form,
                );
            });
        }

        {
            create_effect(move |_| {
                apply_sync_result(
                    sync_action.value().get(),
                    calendar_synced,
                    show_sync_options,
                    notice,
                );
            });
        }

        {
            create_effect(move |_| {
                resume_after_auth(auth_state.get().is_authenticated, awaiting_auth, step);
            });
        }

        Self {
            step,
            preselected_staff,
            selected_staff,
            cursor,
            selected_date,
            selected_slot,
            slots,
            form,
            appointments,
            confirmed,
            awaiting_auth,
            calendar_synced,
            show_sync_options,
            notice,
            submit_action,
            sync_action,
        }
    }

    /// Seeds the wizard for an explicit staff member (from a staff card or a
    /// chat CTA). Opening without one resumes whatever was in progress.
    pub fn open(&self, staff: Option<StaffId>) {
        if let Some(id) = staff {
            self.preselected_staff.set(Some(id));
            self.clear_draft();
            self.selected_staff.set(Some(id));
            self.step.set(BookingStep::DateTime);
        }
    }

    pub fn select_staff(&self, staff: StaffId) {
        self.selected_staff.set(Some(staff));
        self.step.set(BookingStep::DateTime);
    }

    /// Picking a date always clears a previously selected slot; the slot
    /// resource re-queries availability for the new (staff, date) key.
    pub fn select_date(&self, date: NaiveDate) {
        self.selected_date.set(Some(date));
        self.selected_slot.set(None);
    }

    pub fn select_slot(&self, slot: String) {
        self.selected_slot.set(Some(slot));
    }

    pub fn month_back(&self) {
        self.cursor.update(|cursor| *cursor = cursor.prev());
    }

    pub fn month_forward(&self) {
        self.cursor.update(|cursor| *cursor = cursor.next());
    }

    pub fn try_continue(&self, authenticated: bool) -> ContinueOutcome {
        let date = self.selected_date.get_untracked();
        let slot = self.selected_slot.get_untracked();
        if !selection_complete(date, slot.as_deref()) {
            return ContinueOutcome::Blocked;
        }
        if authenticated {
            self.step.set(BookingStep::Details);
            ContinueOutcome::Advanced
        } else {
            self.awaiting_auth.set(true);
            ContinueOutcome::AuthRequired
        }
    }

    pub fn back(&self) {
        let preselected = self.preselected_staff.get_untracked().is_some();
        match self.step.get_untracked() {
            BookingStep::StaffSelect => {}
            BookingStep::DateTime => {
                if let Some(previous) = BookingStep::DateTime.previous(preselected) {
                    self.selected_staff.set(None);
                    self.step.set(previous);
                }
            }
            BookingStep::Details => {
                self.selected_slot.set(None);
                self.step.set(BookingStep::DateTime);
            }
            BookingStep::Confirmation => self.reset(),
        }
    }

    /// Validates the draft and builds the request the scheduling service
    /// needs. `None` means something blocked submission and the form now
    /// shows why.
    pub fn prepare_submission(&self) -> Option<AppointmentRequest> {
        let contact = self.form.to_contact().ok()?;
        let (staff_id, date, slot_id) = match (
            self.selected_staff.get_untracked(),
            self.selected_date.get_untracked(),
            self.selected_slot.get_untracked(),
        ) {
            (Some(staff), Some(date), Some(slot)) if !slot.is_empty() => (staff, date, slot),
            _ => {
                self.form.submit_error_signal().set(Some(ServiceError::validation(
                    "Please choose a staff member, date and time first.",
                )));
                return None;
            }
        };
        Some(AppointmentRequest {
            staff_id,
            date,
            slot_id,
            contact,
        })
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        if let Some(request) = self.prepare_submission() {
            self.submit_action.dispatch(request);
        }
    }

    pub fn sync_calendar(&self, provider: CalendarProvider) {
        if self.sync_action.pending().get_untracked() {
            return;
        }
        self.sync_action.dispatch(provider);
    }

    pub fn toggle_sync_options(&self) {
        self.show_sync_options.update(|open| *open = !*open);
    }

    pub fn download_ics(&self) {
        self.notice.set(Some(DOWNLOAD_STUB_NOTICE.to_string()));
    }

    pub fn copy_link(&self) {
        self.notice.set(Some(COPY_LINK_STUB_NOTICE.to_string()));
    }

    /// Back to the initial step with every draft field and post-booking flag
    /// cleared. Staff pre-selection survives; everything else goes.
    pub fn reset(&self) {
        let preselected = self.preselected_staff.get_untracked();
        self.clear_draft();
        self.selected_staff.set(preselected);
        self.step.set(BookingStep::initial(preselected.is_some()));
    }

    fn clear_draft(&self) {
        self.selected_date.set(None);
        self.selected_slot.set(None);
        self.form.reset();
        self.confirmed.set(None);
        self.calendar_synced.set(false);
        self.show_sync_options.set(false);
        self.notice.set(None);
        self.awaiting_auth.set(false);
    }
}

pub fn use_booking_view_model() -> BookingViewModel {
    match use_context::<BookingViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = BookingViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::booking::utils::ContactField;
    use crate::services::types::ContactDetails;
    use crate::services::Services;
    use crate::test_support::ssr::with_runtime;
    use uuid::Uuid;

    fn new_vm() -> BookingViewModel {
        provide_context(Services::mock());
        leptos_reactive::suppress_resource_load(true);
        BookingViewModel::new()
    }

    fn fill_valid_selection(vm: &BookingViewModel) {
        vm.select_staff(StaffId(1));
        vm.select_date(NaiveDate::from_ymd_opt(2099, 1, 12).unwrap());
        vm.select_slot("09:00".into());
    }

    fn sample_appointment() -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            staff_id: StaffId(1),
            date: NaiveDate::from_ymd_opt(2099, 1, 12).unwrap(),
            slot_id: "09:00".into(),
            contact: ContactDetails::parse("Jane Doe", "jane@example.com", "0400000000", "")
                .unwrap(),
        }
    }

    #[test]
    fn wizard_cannot_reach_details_without_full_selection() {
        with_runtime(|| {
            let vm = new_vm();
            assert_eq!(vm.try_continue(true), ContinueOutcome::Blocked);

            vm.select_staff(StaffId(1));
            vm.select_date(NaiveDate::from_ymd_opt(2099, 1, 12).unwrap());
            assert_eq!(vm.try_continue(true), ContinueOutcome::Blocked);
            assert_eq!(vm.step.get(), BookingStep::DateTime);

            vm.select_slot("09:00".into());
            assert_eq!(vm.try_continue(true), ContinueOutcome::Advanced);
            assert_eq!(vm.step.get(), BookingStep::Details);
        });
    }

    #[test]
    fn selecting_a_new_date_clears_the_slot() {
        with_runtime(|| {
            let vm = new_vm();
            fill_valid_selection(&vm);
            assert!(vm.selected_slot.get().is_some());

            vm.select_date(NaiveDate::from_ymd_opt(2099, 1, 13).unwrap());
            assert!(vm.selected_slot.get().is_none());
        });
    }

    #[test]
    fn unauthenticated_continue_defers_until_the_auth_signal() {
        with_runtime(|| {
            let vm = new_vm();
            fill_valid_selection(&vm);

            assert_eq!(vm.try_continue(false), ContinueOutcome::AuthRequired);
            assert_eq!(vm.step.get(), BookingStep::DateTime);
            assert!(vm.awaiting_auth.get());

            super::resume_after_auth(true, vm.awaiting_auth, vm.step);
            assert_eq!(vm.step.get(), BookingStep::Details);
            assert!(!vm.awaiting_auth.get());
        });
    }

    #[test]
    fn auth_signal_without_a_pending_continue_does_nothing() {
        with_runtime(|| {
            let vm = new_vm();
            fill_valid_selection(&vm);
            super::resume_after_auth(true, vm.awaiting_auth, vm.step);
            assert_eq!(vm.step.get(), BookingStep::DateTime);
        });
    }

    #[test]
    fn invalid_email_blocks_submission_with_a_field_error() {
        with_runtime(|| {
            let vm = new_vm();
            fill_valid_selection(&vm);
            let _ = vm.try_continue(true);

            vm.form.edit(ContactField::Name, "Jane Doe".into());
            vm.form.edit(ContactField::Email, "not-an-email".into());
            vm.form.edit(ContactField::Phone, "0400000000".into());

            assert!(vm.prepare_submission().is_none());
            assert_eq!(
                vm.form.errors_signal().get().email.as_deref(),
                Some("Email is invalid")
            );
            assert_eq!(vm.step.get(), BookingStep::Details);
            assert!(vm.appointments.get().is_empty());
        });
    }

    #[test]
    fn corrected_submission_confirms_and_appends_exactly_one_appointment() {
        with_runtime(|| {
            let vm = new_vm();
            fill_valid_selection(&vm);
            let _ = vm.try_continue(true);

            vm.form.edit(ContactField::Name, "Jane Doe".into());
            vm.form.edit(ContactField::Email, "not-an-email".into());
            vm.form.edit(ContactField::Phone, "0400000000".into());
            assert!(vm.prepare_submission().is_none());

            vm.form.edit(ContactField::Email, "jane@example.com".into());
            let request = vm.prepare_submission().expect("valid draft");
            assert_eq!(request.contact.email, "jane@example.com");

            apply_submit_result(
                Some(Ok(sample_appointment())),
                vm.appointments,
                vm.confirmed,
                vm.step,
                vm.form,
            );
            assert_eq!(vm.step.get(), BookingStep::Confirmation);
            assert_eq!(vm.appointments.get().len(), 1);
            assert!(vm.confirmed.get().is_some());
        });
    }

    #[test]
    fn failed_submission_reports_a_form_scoped_error() {
        with_runtime(|| {
            let vm = new_vm();
            apply_submit_result(
                Some(Err(ServiceError::request_failed(
                    "Failed to book appointment. Please try again.",
                ))),
                vm.appointments,
                vm.confirmed,
                vm.step,
                vm.form,
            );
            assert!(vm.appointments.get().is_empty());
            assert_eq!(
                vm.form.submit_error_signal().get().map(|err| err.error),
                Some("Failed to book appointment. Please try again.".to_string())
            );
        });
    }

    #[test]
    fn sync_result_flips_the_synced_flag_and_collapses_options() {
        with_runtime(|| {
            let vm = new_vm();
            vm.show_sync_options.set(true);
            apply_sync_result(
                Some(Ok(())),
                vm.calendar_synced,
                vm.show_sync_options,
                vm.notice,
            );
            assert!(vm.calendar_synced.get());
            assert!(!vm.show_sync_options.get());

            apply_sync_result(
                Some(Err(ServiceError::request_failed("sync failed"))),
                vm.calendar_synced,
                vm.show_sync_options,
                vm.notice,
            );
            assert_eq!(vm.notice.get().as_deref(), Some("sync failed"));
        });
    }

    #[test]
    fn reset_restores_the_initial_step_and_clears_everything() {
        with_runtime(|| {
            let vm = new_vm();
            fill_valid_selection(&vm);
            let _ = vm.try_continue(true);
            vm.form.edit(ContactField::Name, "Jane Doe".into());
            apply_submit_result(
                Some(Ok(sample_appointment())),
                vm.appointments,
                vm.confirmed,
                vm.step,
                vm.form,
            );
            vm.calendar_synced.set(true);
            vm.download_ics();

            vm.reset();
            assert_eq!(vm.step.get(), BookingStep::StaffSelect);
            assert!(vm.selected_staff.get().is_none());
            assert!(vm.selected_date.get().is_none());
            assert!(vm.selected_slot.get().is_none());
            assert!(vm.form.name_signal().get().is_empty());
            assert!(vm.confirmed.get().is_none());
            assert!(!vm.calendar_synced.get());
            assert!(vm.notice.get().is_none());
            // The booked appointment itself survives in the session list.
            assert_eq!(vm.appointments.get().len(), 1);
        });
    }

    #[test]
    fn reset_returns_to_date_time_when_staff_was_preselected() {
        with_runtime(|| {
            let vm = new_vm();
            vm.open(Some(StaffId(2)));
            vm.select_date(NaiveDate::from_ymd_opt(2099, 1, 12).unwrap());
            vm.select_slot("10:30".into());

            vm.reset();
            assert_eq!(vm.step.get(), BookingStep::DateTime);
            assert_eq!(vm.selected_staff.get(), Some(StaffId(2)));
        });
    }

    #[test]
    fn back_walks_the_transition_table() {
        with_runtime(|| {
            let vm = new_vm();
            fill_valid_selection(&vm);
            let _ = vm.try_continue(true);
            assert_eq!(vm.step.get(), BookingStep::Details);

            vm.back();
            assert_eq!(vm.step.get(), BookingStep::DateTime);
            assert!(vm.selected_slot.get().is_none());

            vm.back();
            assert_eq!(vm.step.get(), BookingStep::StaffSelect);
            assert!(vm.selected_staff.get().is_none());
        });
    }

    #[test]
    fn back_from_date_time_is_inert_with_a_preselected_staff() {
        with_runtime(|| {
            let vm = new_vm();
            vm.open(Some(StaffId(3)));
            vm.back();
            assert_eq!(vm.step.get(), BookingStep::DateTime);
            assert_eq!(vm.selected_staff.get(), Some(StaffId(3)));
        });
    }

    #[test]
    fn stub_actions_only_surface_notices() {
        with_runtime(|| {
            let vm = new_vm();
            vm.download_ics();
            assert_eq!(vm.notice.get().as_deref(), Some(DOWNLOAD_STUB_NOTICE));
            vm.copy_link();
            assert_eq!(vm.notice.get().as_deref(), Some(COPY_LINK_STUB_NOTICE));
        });
    }
}
