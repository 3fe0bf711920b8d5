pub mod channel;
pub mod forum;
pub mod guild;
pub mod permission;
pub mod user;
