pub mod auth;
pub mod booking;
pub mod health;
pub mod inquiry;
pub mod institution;
pub mod item;
pub mod v1;
