pub mod key_handlers;
pub mod sign_handlers;
pub mod verify_handlers;

use crate::models::EdsignError;

/// How a command finished when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Completed,
    CompletedWithErrors,
}

pub fn report_error(err: &EdsignError) {
    eprintln!("Error: {}", err);
}
