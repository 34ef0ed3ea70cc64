//! Error classification logic

use crate::error::ErrorKind;

/// Map the outcome of a failed call to an error kind.
///
/// `None` means no response was received (transport failure). Checked in order,
/// first match wins:
/// - no response => `Api`
/// - 401 => `Authentication`
/// - 404 => `NotFound`
/// - 429 => `RateLimit`
/// - anything else => `Api`
pub fn classify_status(status: Option<u16>) -> ErrorKind {
    match status {
        None => ErrorKind::Api,
        Some(401) => ErrorKind::Authentication,
        Some(404) => ErrorKind::NotFound,
        Some(429) => ErrorKind::RateLimit,
        Some(_) => ErrorKind::Api,
    }
}
