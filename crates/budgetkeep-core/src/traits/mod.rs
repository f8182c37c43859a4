//! Collaborator traits consumed by the authentication core.

pub mod clock;
pub mod password;

pub use clock::{Clock, ManualClock, SystemClock};
pub use password::PasswordEncoder;
