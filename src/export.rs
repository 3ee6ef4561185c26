/// Markdown rendering for the wishlist and the catalog shelves
///
/// The front end prints these to stdout so they can be piped into notes
/// or pasted anywhere Markdown is understood.

use crate::catalog::Resource;
use crate::state::data::WishlistEntry;

/// Render a user's wishlist as a Markdown table.
pub fn wishlist_markdown(user: Option<&str>, entries: &[WishlistEntry]) -> String {
    let mut lines = vec![
        format!("# Reading Hub Wishlist ({})", user.unwrap_or("anonymous")),
        String::new(),
        "| Title | Author | ISBN | Link | Source | Assigned |".to_string(),
        "|---|---|---|---|---|---|".to_string(),
    ];
    for entry in entries {
        let link = if entry.url.is_empty() {
            String::new()
        } else {
            format!("[link]({})", entry.url)
        };
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            entry.title, entry.author, entry.isbn, link, entry.source, entry.assignee
        ));
    }
    lines.join("\n")
}

/// Render catalog rows as a Markdown table matching the on-screen columns.
pub fn catalog_markdown(rows: &[Resource]) -> String {
    let mut lines = vec![
        "| # | Site | Type | Notes |".to_string(),
        "|---:|---|---|---|".to_string(),
    ];
    for row in rows {
        let site = match &row.url {
            Some(url) => format!("[{}]({})", row.name, url),
            None => row.name.clone(),
        };
        lines.push(format!(
            "| {} | {} | {} | {} |",
            row.n,
            site,
            row.kind.tag(),
            row.notes
        ));
    }
    lines.join("\n")
}
