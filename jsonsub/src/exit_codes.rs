//! Stable exit codes for jsonsub CLI commands.

use crate::core::error::SubstitutionError;

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid input, config, document shape, or I/O errors.
pub const INVALID: i32 = 1;
/// Substitution rules were rejected (bad key or non-object rules document).
pub const INVALID_RULES: i32 = 2;

/// Pick the exit code for a failed command.
pub fn for_error(err: &anyhow::Error) -> i32 {
    let substitution = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SubstitutionError>());
    match substitution {
        Some(SubstitutionError::InvalidKey { .. } | SubstitutionError::RulesNotObject { .. }) => {
            INVALID_RULES
        }
        Some(SubstitutionError::ExpectedObject { .. }) | None => INVALID,
    }
}
