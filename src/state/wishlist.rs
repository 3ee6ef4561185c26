/// Per-user wishlist storage
///
/// Each user's wishlist is one JSON-encoded array stored under a key
/// derived from their name. Every operation resolves the signed-in user
/// at call time, reads the whole array, applies the change and writes the
/// whole array back. With two processes pointed at the same database the
/// last writer wins; the storage model accepts that.

use chrono::Utc;
use rand::Rng;

use super::data::{EntryDraft, EntryField, WishlistEntry};
use super::session::Session;
use super::storage::Storage;
use crate::error::HubError;

/// Prefix for per-user wishlist keys. Changing this orphans existing lists.
const WISHLIST_PREFIX: &str = "ll_wishlist_";

/// Namespace shared by everyone who is not signed in.
const ANON_NAMESPACE: &str = "_anon";

/// Derive the storage key for a user's wishlist.
///
/// Named users get their literal name as the namespace, which keeps the
/// stored keys readable when poking at the database by hand. Anonymous use
/// shares one fixed namespace. Two distinct names can never collide.
pub fn wishlist_key(user: Option<&str>) -> String {
    let ns = match user {
        Some(name) if !name.is_empty() => name,
        _ => ANON_NAMESPACE,
    };
    format!("{}{}", WISHLIST_PREFIX, ns)
}

/// Mint a new entry id: millisecond timestamp plus a short random suffix.
/// The timestamp alone is not enough, rapid successive adds can land on
/// the same millisecond, so four random base-36 characters break the tie.
fn generate_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::rng();
    let suffix: String = (0..4)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}_{}", Utc::now().timestamp_millis(), suffix)
}

/// CRUD over the signed-in user's wishlist.
pub struct Wishlist<'a> {
    storage: &'a Storage,
}

impl<'a> Wishlist<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Wishlist { storage }
    }

    /// Storage key for the current user's list, resolved at call time so
    /// a user switch takes effect on the very next operation.
    fn key(&self) -> Result<String, HubError> {
        let user = Session::new(self.storage).current_user()?;
        Ok(wishlist_key(user.as_deref()))
    }

    /// Decode the array stored under `key`. An absent key reads as an
    /// empty list, and so does a value that no longer parses: a corrupt
    /// list degrades to "no data" instead of taking the app down.
    fn load(&self, key: &str) -> Result<Vec<WishlistEntry>, HubError> {
        let raw = self.storage.get(key)?;
        Ok(match raw {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => Vec::new(),
        })
    }

    fn persist(&self, key: &str, entries: &[WishlistEntry]) -> Result<(), HubError> {
        let json = serde_json::to_string(entries)?;
        self.storage.set(key, &json)?;
        Ok(())
    }

    /// All entries for the current user, oldest first.
    pub fn list(&self) -> Result<Vec<WishlistEntry>, HubError> {
        let key = self.key()?;
        self.load(&key)
    }

    /// Append a new entry built from `draft` and return it.
    /// This is the only place entry ids are minted.
    pub fn add(&self, draft: EntryDraft) -> Result<WishlistEntry, HubError> {
        let key = self.key()?;
        let mut entries = self.load(&key)?;

        let entry = WishlistEntry {
            id: generate_id(),
            title: draft
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "Untitled".to_string()),
            author: draft.author.unwrap_or_default(),
            url: draft.url.unwrap_or_default(),
            source: draft.source.unwrap_or_default(),
            isbn: draft.isbn.unwrap_or_default(),
            assignee: draft.assignee.unwrap_or_default(),
            note: draft.note.unwrap_or_default(),
            photo: draft.photo,
        };

        entries.push(entry.clone());
        self.persist(&key, &entries)?;

        Ok(entry)
    }

    /// Remove the entry with `id`. An unknown id is a silent no-op.
    pub fn remove(&self, id: &str) -> Result<(), HubError> {
        let key = self.key()?;
        let mut entries = self.load(&key)?;
        entries.retain(|entry| entry.id != id);
        self.persist(&key, &entries)
    }

    /// Replace a single field on the entry with `id`, leaving its position
    /// and every other field untouched. An unknown id is a silent no-op.
    pub fn update_field(
        &self,
        id: &str,
        field: EntryField,
        value: &str,
    ) -> Result<(), HubError> {
        let key = self.key()?;
        let mut entries = self.load(&key)?;

        for entry in entries.iter_mut() {
            if entry.id == id {
                let slot = match field {
                    EntryField::Title => &mut entry.title,
                    EntryField::Author => &mut entry.author,
                    EntryField::Url => &mut entry.url,
                    EntryField::Source => &mut entry.source,
                    EntryField::Isbn => &mut entry.isbn,
                    EntryField::Assignee => &mut entry.assignee,
                    EntryField::Note => &mut entry.note,
                };
                *slot = value.to_string();
            }
        }

        self.persist(&key, &entries)
    }

    /// Update who an entry is assigned to.
    pub fn assign(&self, id: &str, name: &str) -> Result<(), HubError> {
        self.update_field(id, EntryField::Assignee, name)
    }

    /// Delete every entry for the current user. Other users' lists are not
    /// touched. There is no undo; the caller confirms intent first.
    pub fn clear(&self) -> Result<(), HubError> {
        let key = self.key()?;
        self.persist(&key, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> EntryDraft {
        EntryDraft {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_wishlist_key_namespaces() {
        assert_eq!(wishlist_key(Some("alice")), "ll_wishlist_alice");
        assert_eq!(wishlist_key(Some("bob")), "ll_wishlist_bob");
        assert_eq!(wishlist_key(None), "ll_wishlist__anon");
        // Empty string counts as anonymous, same as an absent user
        assert_eq!(wishlist_key(Some("")), "ll_wishlist__anon");
    }

    #[test]
    fn test_empty_list_for_new_user() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);
        assert!(wishlist.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_fills_defaults() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        let entry = wishlist.add(EntryDraft::default()).unwrap();
        assert_eq!(entry.title, "Untitled");
        assert_eq!(entry.author, "");
        assert_eq!(entry.url, "");
        assert_eq!(entry.source, "");
        assert_eq!(entry.isbn, "");
        assert_eq!(entry.assignee, "");
        assert_eq!(entry.note, "");
        assert_eq!(entry.photo, None);
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_empty_title_becomes_untitled() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        let entry = wishlist.add(draft("")).unwrap();
        assert_eq!(entry.title, "Untitled");
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        wishlist.add(draft("first")).unwrap();
        wishlist.add(draft("second")).unwrap();
        wishlist.add(draft("third")).unwrap();

        let titles: Vec<String> = wishlist
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        for _ in 0..20 {
            wishlist.add(draft("click")).unwrap();
        }

        let mut ids: Vec<String> = wishlist
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids.len(), 20);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20, "ids must stay unique under rapid adds");
    }

    #[test]
    fn test_lists_are_scoped_per_user() {
        let storage = Storage::open_in_memory().unwrap();
        let session = Session::new(&storage);
        let wishlist = Wishlist::new(&storage);

        session.set_user("alice").unwrap();
        wishlist.add(draft("Dune")).unwrap();

        session.set_user("bob").unwrap();
        assert!(wishlist.list().unwrap().is_empty());
        wishlist.add(draft("Neuromancer")).unwrap();

        // Switching back restores alice's list unchanged
        session.set_user("alice").unwrap();
        let entries = wishlist.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Dune");
    }

    #[test]
    fn test_anonymous_is_one_shared_namespace() {
        let storage = Storage::open_in_memory().unwrap();
        let session = Session::new(&storage);
        let wishlist = Wishlist::new(&storage);

        wishlist.add(draft("before sign-in")).unwrap();

        session.set_user("alice").unwrap();
        session.set_user("").unwrap();
        let after_alice = wishlist.list().unwrap();

        session.set_user("bob").unwrap();
        session.set_user("").unwrap();
        let after_bob = wishlist.list().unwrap();

        // The anonymous list is the same no matter who was signed in before
        assert_eq!(after_alice, after_bob);
        assert_eq!(after_alice.len(), 1);
        assert_eq!(after_alice[0].title, "before sign-in");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        let keep = wishlist.add(draft("keep")).unwrap();
        let goner = wishlist.add(draft("goner")).unwrap();

        wishlist.remove(&goner.id).unwrap();
        let once = wishlist.list().unwrap();
        wishlist.remove(&goner.id).unwrap();
        let twice = wishlist.list().unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].id, keep.id);
    }

    #[test]
    fn test_remove_unknown_id_changes_nothing() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        wishlist.add(draft("stays")).unwrap();
        let before = wishlist.list().unwrap();
        wishlist.remove("no_such_id").unwrap();
        assert_eq!(wishlist.list().unwrap(), before);
    }

    #[test]
    fn test_assign_touches_only_that_field() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        let first = wishlist
            .add(EntryDraft {
                title: Some("Dune".to_string()),
                author: Some("Frank Herbert".to_string()),
                isbn: Some("9780441013593".to_string()),
                note: Some("paperback".to_string()),
                ..Default::default()
            })
            .unwrap();
        let second = wishlist.add(draft("other")).unwrap();

        wishlist.assign(&first.id, "Sam").unwrap();

        let entries = wishlist.list().unwrap();
        assert_eq!(entries.len(), 2);

        // Order preserved, only the assignee differs from the original
        assert_eq!(entries[0].id, first.id);
        assert_eq!(entries[0].assignee, "Sam");
        assert_eq!(
            WishlistEntry {
                assignee: String::new(),
                ..entries[0].clone()
            },
            first
        );
        assert_eq!(entries[1], second);
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        wishlist.add(draft("only")).unwrap();
        let before = wishlist.list().unwrap();
        wishlist.assign("missing", "Sam").unwrap();
        assert_eq!(wishlist.list().unwrap(), before);
    }

    #[test]
    fn test_corrupt_value_reads_as_empty() {
        let storage = Storage::open_in_memory().unwrap();
        let wishlist = Wishlist::new(&storage);

        storage
            .set(&wishlist_key(None), "this is not json {{{")
            .unwrap();
        assert!(wishlist.list().unwrap().is_empty());

        // The store stays usable afterwards
        wishlist.add(draft("fresh start")).unwrap();
        assert_eq!(wishlist.list().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_only_hits_the_current_user() {
        let storage = Storage::open_in_memory().unwrap();
        let session = Session::new(&storage);
        let wishlist = Wishlist::new(&storage);

        session.set_user("alice").unwrap();
        wishlist.add(draft("a1")).unwrap();

        session.set_user("bob").unwrap();
        wishlist.add(draft("b1")).unwrap();
        wishlist.clear().unwrap();
        assert!(wishlist.list().unwrap().is_empty());

        session.set_user("alice").unwrap();
        assert_eq!(wishlist.list().unwrap().len(), 1);
    }

    #[test]
    fn test_manual_add_round_trip_across_users() {
        let storage = Storage::open_in_memory().unwrap();
        let session = Session::new(&storage);
        let wishlist = Wishlist::new(&storage);

        session.set_user("alice").unwrap();
        wishlist
            .add(EntryDraft {
                title: Some("Dune".to_string()),
                source: Some("manual".to_string()),
                ..Default::default()
            })
            .unwrap();

        let entries = wishlist.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Dune");
        assert_eq!(entries[0].source, "manual");
        assert_eq!(entries[0].author, "");
        assert_eq!(entries[0].url, "");
        assert_eq!(entries[0].isbn, "");
        assert_eq!(entries[0].note, "");
        assert!(!entries[0].id.is_empty());

        session.set_user("bob").unwrap();
        assert!(wishlist.list().unwrap().is_empty());

        session.set_user("alice").unwrap();
        let back = wishlist.list().unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].title, "Dune");
    }
}
