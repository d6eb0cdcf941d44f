use crate::{
    routes::{split_location, Route},
    token_store::TokenStore,
};
use regex::Regex;
use tracing::debug;

/// Page names that need a signed-in user.
const PROTECTED_PAGES: &str = r"dashboard|cases|suspects|case\.html|suspect\.html|add-";

/// True when the page of `location` needs a credential. Only the path is
/// matched; query string and fragment are ignored.
#[must_use]
pub fn is_protected(location: &str) -> bool {
    let (path, _) = split_location(location);
    Regex::new(PROTECTED_PAGES).map_or(false, |re| re.is_match(path))
}

/// Returns the landing route when `path` is protected and no credential is
/// stored, `None` when the page may load.
///
/// UX-only guard; real access control must live on the API.
#[must_use]
pub fn require_auth(path: &str, tokens: &dyn TokenStore) -> Option<Route> {
    if is_protected(path) && !tokens.is_present() {
        debug!("redirecting unauthenticated visit to {path}");
        return Some(Route::Landing);
    }
    None
}
