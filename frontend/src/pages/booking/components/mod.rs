pub mod calendar_grid;
pub mod confirmation;
pub mod details_form;
pub mod progress;
pub mod staff_select;
pub mod time_slots;
