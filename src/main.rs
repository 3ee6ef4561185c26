/// Reading Hub
///
/// A local-first reading hub. Wishlists are stored per user in a small
/// SQLite database under the platform data directory; the curated
/// catalog shelves are compiled in. Every command runs, prints, and
/// exits, so the output can be piped anywhere.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod catalog;
mod error;
mod export;
mod isbn;
mod state;

use catalog::{ResourceKind, Shelf};
use error::HubError;
use state::data::{EntryDraft, EntryField, WishlistEntry};
use state::session::Session;
use state::storage::Storage;
use state::wishlist::Wishlist;

#[derive(Parser)]
#[command(name = "reading-hub", version, about = "Local-first reading wishlist and catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in as a user (wishlists are kept per user)
    Login {
        /// Name to sign in as
        name: String,
    },
    /// Sign out of the current session
    Logout,
    /// Show who is currently signed in
    Whoami,
    /// Show where the database file lives
    Path,
    /// List the wishlist of the signed-in user
    List,
    /// Add a book to the wishlist
    Add {
        /// Book title
        title: String,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        /// Attach a cover photo from an image file
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Add a book to the wishlist by ISBN
    AddIsbn {
        /// ISBN in any common written form
        isbn: String,
    },
    /// Assign a wishlist entry to someone
    Assign {
        /// Entry id as shown by `list`
        id: String,
        /// Person to assign the entry to
        name: String,
    },
    /// Edit a single field on a wishlist entry
    Edit {
        /// Entry id as shown by `list`
        id: String,
        /// Field to change (title, author, url, source, isbn, assignee, note)
        field: String,
        /// New value
        value: String,
    },
    /// Remove an entry from the wishlist
    Remove {
        /// Entry id as shown by `list`
        id: String,
    },
    /// Clear the entire wishlist of the signed-in user
    Clear {
        /// Actually clear it (required)
        #[arg(long)]
        yes: bool,
    },
    /// Print the wishlist as a Markdown table
    Export,
    /// Browse a catalog shelf (ebooks, poetry, extras)
    Catalog {
        /// Shelf to browse
        shelf: String,
        /// Only show resources of these kinds (downloadable, online, audio, mixed)
        #[arg(long)]
        kind: Vec<String>,
        /// Only show rows matching this text
        #[arg(long)]
        search: Option<String>,
        /// Print as a Markdown table instead of a list
        #[arg(long)]
        markdown: bool,
        /// Save row number N from the shelf to the wishlist
        #[arg(long)]
        save: Option<u32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let storage = match Storage::new() {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("⚠️  Failed to open storage: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli.command, &storage) {
        eprintln!("⚠️  {}", e);
        std::process::exit(1);
    }
}

fn run(command: &Command, storage: &Storage) -> Result<(), HubError> {
    let session = Session::new(storage);
    let wishlist = Wishlist::new(storage);

    match command {
        Command::Login { name } => {
            let name = name.trim();
            if name.is_empty() {
                eprintln!("⚠️  Enter a name to sign in");
                std::process::exit(1);
            }
            session.set_user(name)?;
            println!("👋 Signed in as {}", name);
        }
        Command::Logout => {
            session.set_user("")?;
            println!("👋 Signed out");
        }
        Command::Whoami => match session.current_user()? {
            Some(user) => println!("Signed in as {}", user),
            None => println!("Not signed in"),
        },
        Command::Path => {
            println!("📁 Database location: {}", storage.path().display());
        }
        Command::List => {
            let entries = wishlist.list()?;
            println!("⭐ {} items saved", entries.len());
            for entry in &entries {
                print_entry(entry);
            }
        }
        Command::Add {
            title,
            author,
            url,
            note,
            assignee,
            photo,
        } => {
            if title.trim().is_empty() {
                eprintln!("⚠️  Add a title");
                std::process::exit(1);
            }
            let photo_data = match photo {
                Some(path) => Some(read_photo(path)?),
                None => None,
            };
            let source = if photo_data.is_some() { "photo" } else { "manual" };
            let entry = wishlist.add(EntryDraft {
                title: Some(title.trim().to_string()),
                author: author.clone(),
                url: url.clone(),
                source: Some(source.to_string()),
                note: note.clone(),
                assignee: assignee.clone(),
                photo: photo_data,
                ..EntryDraft::default()
            })?;
            println!("⭐ Saved to wishlist: {} [{}]", entry.title, entry.id);
        }
        Command::AddIsbn { isbn } => {
            let normalized = match isbn::normalize(isbn) {
                Some(n) => n,
                None => {
                    eprintln!("⚠️  Enter an ISBN");
                    std::process::exit(1);
                }
            };
            let entry = wishlist.add(EntryDraft {
                title: Some(format!("ISBN {}", normalized)),
                isbn: Some(normalized),
                source: Some("isbn".to_string()),
                ..EntryDraft::default()
            })?;
            println!("⭐ Saved to wishlist: {} [{}]", entry.title, entry.id);
        }
        Command::Assign { id, name } => {
            wishlist.assign(id, name)?;
            println!("✅ Updated assignee");
        }
        Command::Edit { id, field, value } => {
            let field = match EntryField::parse(field) {
                Some(f) => f,
                None => {
                    eprintln!(
                        "⚠️  Unknown field: {} (try: title, author, url, source, isbn, assignee, note)",
                        field
                    );
                    std::process::exit(1);
                }
            };
            wishlist.update_field(id, field, value)?;
            println!("✅ Updated entry");
        }
        Command::Remove { id } => {
            wishlist.remove(id)?;
            println!("🗑️  Removed");
        }
        Command::Clear { yes } => {
            if !*yes {
                eprintln!("⚠️  This clears the whole wishlist; pass --yes to confirm");
                std::process::exit(1);
            }
            wishlist.clear()?;
            println!("🗑️  Wishlist cleared");
        }
        Command::Export => {
            let user = session.current_user()?;
            let entries = wishlist.list()?;
            println!("{}", export::wishlist_markdown(user.as_deref(), &entries));
        }
        Command::Catalog {
            shelf,
            kind,
            search,
            markdown,
            save,
        } => {
            let shelf = match Shelf::parse(shelf) {
                Some(s) => s,
                None => {
                    eprintln!("⚠️  Unknown shelf (try: ebooks, poetry, extras)");
                    std::process::exit(1);
                }
            };
            let rows = catalog::shelf_resources(shelf);

            if let Some(n) = save {
                let row = match rows.iter().find(|r| r.n == *n) {
                    Some(r) => r,
                    None => {
                        eprintln!("⚠️  No row {} on the {} shelf", n, shelf.name());
                        std::process::exit(1);
                    }
                };
                let entry = wishlist.add(EntryDraft {
                    title: Some(row.name.clone()),
                    url: row.url.clone(),
                    note: Some(row.notes.clone()),
                    source: Some(shelf.name().to_string()),
                    ..EntryDraft::default()
                })?;
                println!("⭐ Saved to wishlist: {} [{}]", entry.title, entry.id);
                return Ok(());
            }

            let mut kinds = Vec::new();
            for k in kind {
                match ResourceKind::parse(k) {
                    Some(parsed) => kinds.push(parsed),
                    None => {
                        eprintln!("⚠️  Unknown kind: {} (try: downloadable, online, audio, mixed)", k);
                        std::process::exit(1);
                    }
                }
            }
            let query = search.as_deref().unwrap_or("");
            let filtered = catalog::filter(&rows, &kinds, query);

            if *markdown {
                println!("{}", export::catalog_markdown(&filtered));
            } else {
                for row in &filtered {
                    println!("{:>3}. {} [{}]", row.n, row.name, row.kind.tag());
                    if let Some(url) = &row.url {
                        println!("     {}", url);
                    }
                    if !row.notes.is_empty() {
                        println!("     {}", row.notes);
                    }
                }
                println!("{} of {} shown", filtered.len(), rows.len());
            }
        }
    }

    Ok(())
}

fn print_entry(entry: &WishlistEntry) {
    if entry.author.is_empty() {
        println!("[{}] {}", entry.id, entry.title);
    } else {
        println!("[{}] {} — {}", entry.id, entry.title, entry.author);
    }
    let mut meta = Vec::new();
    if !entry.source.is_empty() {
        meta.push(format!("Source: {}", entry.source));
    }
    if !entry.isbn.is_empty() {
        meta.push(format!("ISBN: {}", entry.isbn));
    }
    if !entry.url.is_empty() {
        meta.push(entry.url.clone());
    }
    if !meta.is_empty() {
        println!("     {}", meta.join(" • "));
    }
    if entry.photo.is_some() {
        println!("     📷 cover photo attached");
    }
    if !entry.assignee.is_empty() {
        println!("     Assigned to: {}", entry.assignee);
    }
    if !entry.note.is_empty() {
        println!("     Note: {}", entry.note);
    }
}

/// Read an image file into a data URL so the photo travels with the
/// wishlist entry instead of pointing at a path that may move.
fn read_photo(path: &Path) -> Result<String, HubError> {
    let bytes = std::fs::read(path)?;
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
}
