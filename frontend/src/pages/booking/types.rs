use chrono::NaiveDate;

/// Wizard steps, in order. `StaffSelect` is skipped when the wizard opens
/// with a staff member already chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    StaffSelect,
    DateTime,
    Details,
    Confirmation,
}

impl BookingStep {
    pub const ALL: [BookingStep; 4] = [
        BookingStep::StaffSelect,
        BookingStep::DateTime,
        BookingStep::Details,
        BookingStep::Confirmation,
    ];

    pub fn initial(staff_preselected: bool) -> Self {
        if staff_preselected {
            BookingStep::DateTime
        } else {
            BookingStep::StaffSelect
        }
    }

    pub fn index(self) -> usize {
        match self {
            BookingStep::StaffSelect => 0,
            BookingStep::DateTime => 1,
            BookingStep::Details => 2,
            BookingStep::Confirmation => 3,
        }
    }

    /// Modal heading per step.
    pub fn title(self) -> &'static str {
        match self {
            BookingStep::StaffSelect => "Schedule an Appointment",
            BookingStep::DateTime => "Select Date & Time",
            BookingStep::Details => "Your Details",
            BookingStep::Confirmation => "Appointment Confirmed",
        }
    }

    /// Short label under the progress indicator.
    pub fn label(self) -> &'static str {
        match self {
            BookingStep::StaffSelect => "Staff",
            BookingStep::DateTime => "Date",
            BookingStep::Details => "Details",
            BookingStep::Confirmation => "Confirm",
        }
    }

    /// Where "back" lands, if anywhere. Backing out of `Confirmation` is a
    /// full reset and handled separately.
    pub fn previous(self, staff_preselected: bool) -> Option<Self> {
        match self {
            BookingStep::StaffSelect | BookingStep::Confirmation => None,
            BookingStep::DateTime => (!staff_preselected).then_some(BookingStep::StaffSelect),
            BookingStep::Details => Some(BookingStep::DateTime),
        }
    }
}

/// Date-time step gate: both a date and a slot must be chosen.
pub fn selection_complete(date: Option<NaiveDate>, slot: Option<&str>) -> bool {
    date.is_some() && slot.is_some_and(|slot| !slot.is_empty())
}

/// What happened when the visitor asked to continue past the date-time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueOutcome {
    Advanced,
    AuthRequired,
    Blocked,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn initial_step_depends_on_preselection() {
        assert_eq!(BookingStep::initial(false), BookingStep::StaffSelect);
        assert_eq!(BookingStep::initial(true), BookingStep::DateTime);
    }

    #[test]
    fn back_from_date_time_respects_preselection() {
        assert_eq!(
            BookingStep::DateTime.previous(false),
            Some(BookingStep::StaffSelect)
        );
        assert_eq!(BookingStep::DateTime.previous(true), None);
    }

    #[test]
    fn back_from_details_returns_to_date_time() {
        assert_eq!(
            BookingStep::Details.previous(false),
            Some(BookingStep::DateTime)
        );
        assert_eq!(
            BookingStep::Details.previous(true),
            Some(BookingStep::DateTime)
        );
    }

    #[test]
    fn confirmation_has_no_plain_back_step() {
        assert_eq!(BookingStep::Confirmation.previous(false), None);
    }

    #[test]
    fn step_order_is_stable() {
        for (index, step) in BookingStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), index);
        }
    }

    #[test]
    fn selection_gate_requires_both_date_and_slot() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 10);
        assert!(!selection_complete(None, None));
        assert!(!selection_complete(date, None));
        assert!(!selection_complete(None, Some("09:00")));
        assert!(!selection_complete(date, Some("")));
        assert!(selection_complete(date, Some("09:00")));
    }
}
