pub mod auth;
pub mod booking;
pub mod chat;
pub mod home;
pub mod staff;

pub use auth::*;
pub use booking::*;
pub use chat::*;
pub use home::*;
pub use staff::*;
