pub mod composer;
pub mod lead_form;
pub mod messages;
