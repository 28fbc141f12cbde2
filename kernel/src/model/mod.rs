pub mod auth;
pub mod booking;
pub mod id;
pub mod inquiry;
pub mod institution;
pub mod item;
