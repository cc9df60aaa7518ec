use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::services::latency::simulate_latency;
use crate::services::types::{
    Appointment, AppointmentRequest, ServiceError, StaffId, TimeSlot,
};

/// Consultations run 09:00 up to (but not including) 17:00, in half-hour
/// steps: sixteen slots from 09:00 to 16:30.
pub const OPENING_HOUR: u32 = 9;
pub const CLOSING_HOUR: u32 = 17;
pub const SLOTS_PER_DAY: usize = ((CLOSING_HOUR - OPENING_HOUR) * 2) as usize;

const AVAILABILITY_LATENCY_MS: u32 = 350;
const BOOKING_LATENCY_MS: u32 = 1_500;

/// Scheduling boundary. A production system would answer both calls from an
/// authoritative diary keyed by (staff, date, slot); the mock derives
/// availability deterministically and mints appointments locally.
#[async_trait(?Send)]
pub trait SchedulingService {
    async fn availability(
        &self,
        staff: StaffId,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, ServiceError>;

    async fn create_appointment(
        &self,
        request: AppointmentRequest,
    ) -> Result<Appointment, ServiceError>;
}

pub fn slot_id(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// 12-hour display label for a slot: 9 -> "9:00 AM", 12 -> "12:30 PM",
/// 16 -> "4:00 PM".
pub fn slot_label(hour: u32, minute: u32) -> String {
    let display_hour = if hour > 12 { hour - 12 } else { hour };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", display_hour, minute, meridiem)
}

/// Display label for a stored "HH:MM" slot id, used after the slot list for
/// the booked date is gone.
pub fn slot_label_for_id(id: &str) -> Option<String> {
    let (hour, minute) = id.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(slot_label(hour, minute))
}

/// The day's sixteen half-hour slots with availability answered by `is_open`.
pub fn business_day_slots(mut is_open: impl FnMut(&str) -> bool) -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity(SLOTS_PER_DAY);
    for hour in OPENING_HOUR..CLOSING_HOUR {
        for minute in [0, 30] {
            let id = slot_id(hour, minute);
            let available = is_open(&id);
            slots.push(TimeSlot {
                label: slot_label(hour, minute),
                id,
                available,
            });
        }
    }
    slots
}

#[derive(Debug, Default)]
pub struct MockSchedulingService;

#[async_trait(?Send)]
impl SchedulingService for MockSchedulingService {
    async fn availability(
        &self,
        staff: StaffId,
        date: NaiveDate,
    ) -> Result<Vec<TimeSlot>, ServiceError> {
        simulate_latency(AVAILABILITY_LATENCY_MS).await;
        log::info!("mock scheduling: availability for staff {} on {}", staff.0, date);
        Ok(business_day_slots(|slot| mock_slot_open(staff, date, slot)))
    }

    async fn create_appointment(
        &self,
        request: AppointmentRequest,
    ) -> Result<Appointment, ServiceError> {
        simulate_latency(BOOKING_LATENCY_MS).await;
        if !mock_slot_open(request.staff_id, request.date, &request.slot_id) {
            return Err(ServiceError::request_failed(
                "Failed to book appointment. Please try again.",
            ));
        }
        let appointment = Appointment {
            id: Uuid::new_v4(),
            staff_id: request.staff_id,
            date: request.date,
            slot_id: request.slot_id,
            contact: request.contact,
        };
        log::info!(
            "mock scheduling: booked {} on {} at {}",
            appointment.id,
            appointment.date,
            appointment.slot_id
        );
        Ok(appointment)
    }
}

/// Deterministic stand-in for a scheduling-conflict check: roughly 70% of
/// slots read as open, stable for a given (staff, date, slot) key so the UI
/// and tests see consistent answers.
fn mock_slot_open(staff: StaffId, date: NaiveDate, slot: &str) -> bool {
    booking_key_hash(staff, date, slot) % 10 < 7
}

fn booking_key_hash(staff: StaffId, date: NaiveDate, slot: &str) -> u64 {
    // FNV-1a over the booking key.
    let key = format!("{}|{}|{}", staff.0, date, slot);
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in key.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_business_day_has_sixteen_slots_spanning_opening_hours() {
        let slots = business_day_slots(|_| true);
        assert_eq!(slots.len(), 16);
        assert_eq!(slots.first().map(|s| s.id.as_str()), Some("09:00"));
        assert_eq!(slots.last().map(|s| s.id.as_str()), Some("16:30"));
    }

    #[test]
    fn slot_labels_use_twelve_hour_form() {
        assert_eq!(slot_label(9, 0), "9:00 AM");
        assert_eq!(slot_label(11, 30), "11:30 AM");
        assert_eq!(slot_label(12, 0), "12:00 PM");
        assert_eq!(slot_label(12, 30), "12:30 PM");
        assert_eq!(slot_label(16, 30), "4:30 PM");
    }

    #[test]
    fn slot_label_for_id_parses_stored_keys() {
        assert_eq!(slot_label_for_id("09:30").as_deref(), Some("9:30 AM"));
        assert_eq!(slot_label_for_id("16:00").as_deref(), Some("4:00 PM"));
        assert!(slot_label_for_id("25:00").is_none());
        assert!(slot_label_for_id("nonsense").is_none());
    }

    #[test]
    fn mock_availability_is_deterministic_per_booking_key() {
        let staff = StaffId(1);
        let date = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let first = business_day_slots(|slot| mock_slot_open(staff, date, slot));
        let second = business_day_slots(|slot| mock_slot_open(staff, date, slot));
        assert_eq!(first, second);
    }

    #[test]
    fn mock_availability_varies_across_dates() {
        let staff = StaffId(1);
        let days: Vec<Vec<bool>> = (1..=28)
            .filter_map(|day| NaiveDate::from_ymd_opt(2026, 8, day))
            .map(|date| {
                business_day_slots(|s| mock_slot_open(staff, date, s))
                    .into_iter()
                    .map(|s| s.available)
                    .collect()
            })
            .collect();
        assert!(days.iter().any(|day| day != &days[0]));
    }
}

#[cfg(test)]
fn first_date_with_slot(staff: StaffId, want_open: bool) -> (NaiveDate, TimeSlot) {
    (1..=28)
        .filter_map(|day| NaiveDate::from_ymd_opt(2026, 8, day))
        .find_map(|date| {
            business_day_slots(|s| mock_slot_open(staff, date, s))
                .into_iter()
                .find(|slot| slot.available == want_open)
                .map(|slot| (date, slot))
        })
        .expect("some date in the month has a matching slot")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::services::types::ContactDetails;

    #[tokio::test]
    async fn booking_an_open_slot_mints_an_appointment() {
        let service = MockSchedulingService;
        let staff = StaffId(1);
        let (date, open) = first_date_with_slot(staff, true);

        let contact =
            ContactDetails::parse("Jane Doe", "jane@example.com", "0400000000", "").unwrap();
        let appointment = service
            .create_appointment(AppointmentRequest {
                staff_id: staff,
                date,
                slot_id: open.id.clone(),
                contact,
            })
            .await
            .unwrap();
        assert_eq!(appointment.date, date);
        assert_eq!(appointment.slot_id, open.id);
    }

    #[tokio::test]
    async fn booking_a_closed_slot_is_rejected() {
        let service = MockSchedulingService;
        let staff = StaffId(1);
        let (date, closed) = first_date_with_slot(staff, false);

        let contact =
            ContactDetails::parse("Jane Doe", "jane@example.com", "0400000000", "").unwrap();
        let err = service
            .create_appointment(AppointmentRequest {
                staff_id: staff,
                date,
                slot_id: closed.id.clone(),
                contact,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, "REQUEST_FAILED");
    }
}
