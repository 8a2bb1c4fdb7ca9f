//! Continuation delivery.

use crate::errors::SlackError;

/// Hand a completed call's value to `continuation`.
///
/// The continuation runs exactly once, on the caller's task, before this returns. A
/// failed call never reaches the continuation: the error is returned instead.
///
/// # Errors
///
/// Returns the call's own error unchanged.
pub fn dispatch<R, F>(outcome: Result<R, SlackError>, continuation: F) -> Result<(), SlackError>
where
    F: FnOnce(R),
{
    let value = outcome?;
    continuation(value);
    Ok(())
}
