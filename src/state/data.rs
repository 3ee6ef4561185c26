/// Shared data structures for the wishlist
///
/// These structs represent the data model that flows between
/// the persistence layer and the front end.

use serde::{Deserialize, Serialize};

/// A single saved item in a user's wishlist.
///
/// Entries are serialized to JSON and stored as one array per user.
/// `id` is assigned once at creation and never changes; it is the handle
/// used for removal and field updates. Optional fields default to empty
/// so lists written by older builds keep decoding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    /// Where the entry came from: a catalog shelf name, "manual",
    /// "photo" or "isbn".
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub note: String,
    /// Cover image as a self-describing data URI, if one was attached.
    #[serde(default)]
    pub photo: Option<String>,
}

/// Input for a new wishlist entry.
///
/// Everything is optional: unset fields become empty strings and a missing
/// title becomes "Untitled". The front end validates what it cares about
/// (e.g. refusing an empty manual title) before building a draft.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub isbn: Option<String>,
    pub assignee: Option<String>,
    pub note: Option<String>,
    pub photo: Option<String>,
}

/// The entry fields that can be patched after creation.
/// The photo is set at creation only, so it is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Title,
    Author,
    Url,
    Source,
    Isbn,
    Assignee,
    Note,
}

impl EntryField {
    /// Parse a field name as typed on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "title" => Some(EntryField::Title),
            "author" => Some(EntryField::Author),
            "url" => Some(EntryField::Url),
            "source" => Some(EntryField::Source),
            "isbn" => Some(EntryField::Isbn),
            "assignee" => Some(EntryField::Assignee),
            "note" => Some(EntryField::Note),
            _ => None,
        }
    }
}
