//! Payload interpretation.
//!
//! The payload attached to a delivery is a command code. Only two values
//! are defined; everything else maps to `None` and the listener treats it
//! as a no-op rather than an error, leaving room for future commands.

use crate::signal::Payload;

/// Payload requesting an orderly exit with success status.
pub const PAYLOAD_TERMINATE: Payload = 0;
/// Payload requesting an abort that leaves a core dump.
pub const PAYLOAD_ABORT: Payload = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Terminate,
    Abort,
}

impl Command {
    pub fn from_payload(payload: Payload) -> Option<Self> {
        match payload {
            PAYLOAD_TERMINATE => Some(Command::Terminate),
            PAYLOAD_ABORT => Some(Command::Abort),
            _ => None,
        }
    }

    /// Domain check the notifier runs before any delivery attempt.
    pub fn payload_in_domain(payload: Payload) -> bool {
        Self::from_payload(payload).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defined_payloads_map_to_commands() {
        assert_eq!(Command::from_payload(0), Some(Command::Terminate));
        assert_eq!(Command::from_payload(1), Some(Command::Abort));
    }

    #[test]
    fn everything_else_is_undefined() {
        assert_eq!(Command::from_payload(2), None);
        assert_eq!(Command::from_payload(-1), None);
        assert_eq!(Command::from_payload(i32::MAX), None);
        assert!(!Command::payload_in_domain(2));
    }
}
