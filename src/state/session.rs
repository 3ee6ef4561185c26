use rusqlite::Result as SqlResult;

use super::storage::Storage;

/// Key used for the signed-in user. Changing this will sign everyone out.
pub const USER_KEY: &str = "ll_user";

/// The signed-in-user state.
///
/// This is an identity label, not an auth mechanism: any non-empty name is
/// accepted and nothing is ever verified. The name persists across runs
/// until an explicit sign-out, and every wishlist operation re-reads it,
/// so switching users redirects reads and writes immediately.
pub struct Session<'a> {
    storage: &'a Storage,
}

impl<'a> Session<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Session { storage }
    }

    /// The currently signed-in user, or None when browsing anonymously.
    pub fn current_user(&self) -> SqlResult<Option<String>> {
        self.storage.get(USER_KEY)
    }

    /// Set the current user. Surrounding whitespace is trimmed; an empty
    /// name signs the user out, reverting to the shared anonymous scope.
    pub fn set_user(&self, name: &str) -> SqlResult<()> {
        let name = name.trim();
        if name.is_empty() {
            self.storage.remove(USER_KEY)
        } else {
            self.storage.set(USER_KEY, name)
        }
    }
}
