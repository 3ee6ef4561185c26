/// Curated catalog of reading resources
///
/// This module holds the read-only listings shown on the three shelves
/// (eBooks, poetry sites, extras) plus the normalization and filtering
/// helpers the front end uses. Nothing here ever writes to storage and
/// the wishlist never depends on it.

pub mod data;

/// How a resource can be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Downloadable,
    Online,
    Audiobook,
    Mixed,
}

impl ResourceKind {
    /// Display tag used in tables and Markdown exports.
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceKind::Downloadable => "📥 Downloadable",
            ResourceKind::Online => "🌐 Online",
            ResourceKind::Audiobook => "🎧 Audio",
            ResourceKind::Mixed => "⚖️ Mixed",
        }
    }

    /// Parse a kind name as typed on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "downloadable" | "dl" => Some(ResourceKind::Downloadable),
            "online" => Some(ResourceKind::Online),
            "audiobook" | "audio" => Some(ResourceKind::Audiobook),
            "mixed" => Some(ResourceKind::Mixed),
            _ => None,
        }
    }
}

/// One normalized row of a catalog shelf.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// 1-based row number within its shelf.
    pub n: u32,
    pub name: String,
    pub url: Option<String>,
    pub kind: ResourceKind,
    pub notes: String,
}

/// The three curated shelves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    Ebooks,
    Poetry,
    Extras,
}

impl Shelf {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ebooks" => Some(Shelf::Ebooks),
            "poetry" => Some(Shelf::Poetry),
            "extras" => Some(Shelf::Extras),
            _ => None,
        }
    }

    /// The shelf name as used in sources and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Shelf::Ebooks => "ebooks",
            Shelf::Poetry => "poetry",
            Shelf::Extras => "extras",
        }
    }
}

/// All normalized rows for a shelf.
pub fn shelf_resources(shelf: Shelf) -> Vec<Resource> {
    match shelf {
        Shelf::Ebooks => data::ebooks(),
        Shelf::Poetry => data::poetry(),
        Shelf::Extras => data::extras(),
    }
}

/// Build a full URL from a bare domain. Strings that already look like
/// URLs pass through unchanged; a leading "www." is dropped before the
/// scheme is prepended. Empty input yields no URL at all.
pub fn url_from_domain(domain: &str) -> Option<String> {
    let d = domain.trim();
    if d.is_empty() {
        return None;
    }
    let lower = d.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(d.to_string());
    }
    let stripped = if lower.starts_with("www.") { &d[4..] } else { d };
    Some(format!("https://{}", stripped))
}

/// Map a free-text format label ("PDF", "Online viewing only, Audio", ...)
/// onto one of the four kinds. The checks run in priority order.
pub fn kind_from_label(label: &str) -> ResourceKind {
    let s = label.to_lowercase();
    if s.contains("mp3") || s.contains("ogg") {
        return ResourceKind::Audiobook;
    }
    if s.contains("pdf") || s.contains("various") || s.contains("all formats") {
        return ResourceKind::Downloadable;
    }
    if s.contains("online") && s.contains("audio") {
        return ResourceKind::Mixed;
    }
    if s.contains("handwritten") {
        // Handwritten is closest to online
        return ResourceKind::Online;
    }
    if s.contains("mixed") {
        return ResourceKind::Mixed;
    }
    ResourceKind::Online
}

/// Rows whose kind is one of `kinds` (empty slice = all kinds) and whose
/// name or notes contain `query` case-insensitively (empty = match all).
pub fn filter(rows: &[Resource], kinds: &[ResourceKind], query: &str) -> Vec<Resource> {
    let q = query.trim().to_lowercase();
    rows.iter()
        .filter(|r| kinds.is_empty() || kinds.contains(&r.kind))
        .filter(|r| {
            q.is_empty()
                || r.name.to_lowercase().contains(&q)
                || r.notes.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}
