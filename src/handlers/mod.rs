pub mod artist_handlers;
pub mod playlist_handlers;
pub mod search_handlers;
pub mod song_handlers;
pub mod system_handlers;
pub mod user_handlers;

/// A required text field: absent and blank are treated alike.
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Passwords are taken verbatim: only absent or empty is rejected.
pub(crate) fn required_secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
