/// Static shelf data
///
/// The curated listings, kept as plain consts. The eBook and extras rows
/// carry full URLs already; the poetry rows are raw (name, domain, format
/// label, notes) tuples that get normalized when the shelf is built.

use super::{kind_from_label, url_from_domain, Resource, ResourceKind};

/// eBook sites. Each row: name, URL, kind, notes.
const EBOOKS: &[(&str, &str, ResourceKind, &str)] = &[
    ("Planet eBook", "https://www.planetebook.com", ResourceKind::Downloadable, "Classic literature — PDFs ready to download"),
    ("Free-eBooks.net", "https://www.free-ebooks.net", ResourceKind::Downloadable, "Free with sign-up — ePub/Kindle/PDF"),
    ("ManyBooks", "https://manybooks.net", ResourceKind::Downloadable, "DRM-free downloads across genres"),
    ("LibriVox", "https://librivox.org", ResourceKind::Audiobook, "Public-domain audiobooks — downloadable MP3s"),
    ("Internet Archive", "https://archive.org", ResourceKind::Mixed, "Millions of books — some borrow-only, many downloadable"),
    ("BookBub", "https://www.bookbub.com/ebook-deals/free-ebooks", ResourceKind::Online, "Links to free deals on Kindle/Apple/etc."),
    ("Open Library", "https://openlibrary.org", ResourceKind::Mixed, "Borrow or read online; public-domain titles downloadable"),
    ("Bookboon", "https://bookboon.com", ResourceKind::Downloadable, "Free textbooks & business books — PDF"),
    ("Feedbooks — Public Domain", "https://www.feedbooks.com/publicdomain", ResourceKind::Downloadable, "Public-domain classics — ePub/PDF"),
    ("Smashwords (Free)", "https://www.smashwords.com/free", ResourceKind::Downloadable, "Indie authors — DRM-free downloads"),
    ("Project Gutenberg", "https://www.gutenberg.org", ResourceKind::Downloadable, "Public-domain classics — ePub/Kindle/Text"),
    ("Google Books", "https://books.google.com", ResourceKind::Online, "Some full view free; many previews only"),
    ("PDFBooksWorld", "https://www.pdfbooksworld.com", ResourceKind::Downloadable, "Well-formatted PDFs of classics"),
    ("FreeTechBooks", "https://www.freetechbooks.com", ResourceKind::Downloadable, "Academic & tech books — PDF/HTML"),
    ("Bookyards", "https://www.bookyards.com", ResourceKind::Downloadable, "Mixed categories — PDF downloads"),
    ("GetFreeBooks", "https://www.getfreeebooks.com", ResourceKind::Downloadable, "Curated free ebooks — downloads"),
    ("eBookLobby", "https://www.ebooklobby.com", ResourceKind::Downloadable, "Business & education — free PDFs"),
    ("FreeComputerBooks", "https://freecomputerbooks.com", ResourceKind::Downloadable, "Programming, engineering, math — PDF/HTML"),
    ("LibriVox (duplicate in source list)", "https://librivox.org", ResourceKind::Audiobook, "Same as #4 — audiobooks"),
    ("ManyBooks (duplicate in source list)", "https://manybooks.net", ResourceKind::Downloadable, "Same as #3 — DRM-free downloads"),
];

/// Raw poetry rows: name, domain or URL (may be empty), format label, notes.
const POETRY: &[(&str, &str, &str, &str)] = &[
    ("GigglePoetry.com", "gigglepoetry.com", "Online viewing only", "Children’s poetry activities & readings"),
    ("PoemHunter.com", "poemhunter.com", "PDF", "Poems & poets, some downloadable PDFs"),
    ("e-booksdirectory.com", "e-booksdirectory.com", "various formats", "Aggregated ebooks incl. poetry"),
    ("ebooks.adelaide.edu.au", "ebooks.adelaide.edu.au", "Online viewing only", "University of Adelaide ebooks (archive)"),
    ("Literatureproject.com", "literatureproject.com", "Online viewing only", "Classic texts to read online"),
    ("Alharris.com", "alharris.com", "PDF", "Poetry PDFs by Al Harris (site availability varies)"),
    ("Smashwords.com", "smashwords.com", "All formats", "Indie poetry, many free titles"),
    ("Manybooks.net", "manybooks.net", "All formats", "Large catalog incl. poetry"),
    ("Poemsforfree.com", "poemsforfree.com", "Online viewing only", "Occasional printable poems"),
    ("Familyfriendpoems.com", "familyfriendpoems.com", "Online viewing only", "Popular themed poems & submissions"),
    ("Lovepoemsandquotes.com", "lovepoemsandquotes.com", "Online viewing only", "Love poems & quote collections"),
    ("Voicesnet.org", "voicesnet.org", "Online viewing only", "Poet community & contests"),
    ("Poetrypoem.com", "poetrypoem.com", "Online viewing only", "Personal poetry pages & posts"),
    ("Poetryintranslation.com", "poetryintranslation.com", "Online viewing only", "Classic poetry in translation"),
    ("Poetrysoup.com", "poetrysoup.com", "Online viewing only", "Poet social site & forms"),
    ("Firebirdpoetry.com", "firebirdpoetry.com", "Online viewing only", "Poetry resource (availability may vary)"),
    ("Short-love-poem.com", "short-love-poem.com", "Online viewing only", "Short romantic poems"),
    ("Poets.org", "poets.org", "Online viewing only", "Academy of American Poets — poems & essays"),
    ("Librivox.org", "librivox.org", "MP3", "Public-domain poetry audiobooks"),
    ("Poets on Poets", "", "Online viewing, MP3, OGG", "Poets discussing poets (assorted media)"),
    ("Audio Poetry", "", "Online viewing, MP3, OGG", "Audio poetry collections (assorted)"),
    ("Free Poems on Demand", "", "Handwritten", "Request handwritten poems"),
    ("Poetry 180", "www.loc.gov/poetry/180/", "Online viewing only", "Poetry for each of the 180 days of school"),
    ("The Poetry Corner", "", "Online viewing only", "Poetry portal/collection"),
    ("Red House Books", "", "Online viewing only", "Poetry & book blog/archives"),
    ("Poetry Explorer", "poetryexplorer.net", "Online viewing only", "Searchable anthology explorer"),
    ("Wattpad.com", "wattpad.com", "Online viewing only", "User fiction & poetry"),
    ("Protagonize.com", "protagonize.com", "Online viewing only", "Collaborative writing (historic/archived)"),
    ("Scrapbook.com", "scrapbook.com", "Online viewing only", "Poem/quote resources for crafts"),
    ("TeenInk.com", "teenink.com", "Online viewing only", "Teen poetry & essays"),
    ("WritersLounge.net", "", "Online viewing only", "Writing community (availability varies)"),
    ("OutlawPoetry.com", "outlawpoetry.com", "Online viewing only", "Indie poetry & journals"),
    ("Poetry Library", "poetrylibrary.org.uk", "Online viewing only, Audio", "UK poetry library & recordings"),
    ("Hello Poetry", "hellopoetry.com", "Online viewing only", "Poetry posting community"),
    ("Poetry Archive", "poetryarchive.org", "Online viewing only, Audio", "Recorded poets reading their work"),
    ("Poe Stories", "poestories.com", "Online viewing only", "Edgar Allan Poe texts & notes"),
    ("Poetry4kids.com", "poetry4kids.com", "Online viewing only", "Kenn Nesbitt’s children’s poetry"),
    ("Poetry on a Roll", "", "Online viewing only", "Poetry blog/collection"),
    ("OldPoetry.com", "oldpoetry.com", "Online viewing only", "Classic & community poetry"),
    ("Gratefulness.org", "gratefulness.org", "Online viewing only", "Poems on gratitude & reflection"),
];

/// Extra resources. Same row shape as the eBook shelf.
const EXTRAS: &[(&str, &str, ResourceKind, &str)] = &[
    ("The Literature Network", "https://www.online-literature.com/", ResourceKind::Online, "Authors, full texts, and study guides"),
];

fn from_rows(rows: &[(&str, &str, ResourceKind, &str)]) -> Vec<Resource> {
    rows.iter()
        .enumerate()
        .map(|(idx, (name, url, kind, notes))| Resource {
            n: idx as u32 + 1,
            name: name.to_string(),
            url: Some(url.to_string()),
            kind: *kind,
            notes: notes.to_string(),
        })
        .collect()
}

pub fn ebooks() -> Vec<Resource> {
    from_rows(EBOOKS)
}

/// Normalize the raw poetry rows: derive the URL from the domain, map the
/// format label onto a kind, and fold the label into the notes column.
pub fn poetry() -> Vec<Resource> {
    POETRY
        .iter()
        .enumerate()
        .map(|(idx, (name, domain, label, extra))| {
            let notes = if extra.is_empty() {
                label.to_string()
            } else {
                format!("{} — {}", label, extra)
            };
            Resource {
                n: idx as u32 + 1,
                name: name.to_string(),
                url: url_from_domain(domain),
                kind: kind_from_label(label),
                notes,
            }
        })
        .collect()
}

pub fn extras() -> Vec<Resource> {
    from_rows(EXTRAS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelves_are_populated() {
        assert_eq!(ebooks().len(), 20);
        assert_eq!(poetry().len(), 40);
        assert_eq!(extras().len(), 1);
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let rows = poetry();
        assert_eq!(rows[0].n, 1);
        assert_eq!(rows[rows.len() - 1].n, rows.len() as u32);
    }

    #[test]
    fn test_poetry_normalization() {
        let rows = poetry();

        let hunter = rows.iter().find(|r| r.name == "PoemHunter.com").unwrap();
        assert_eq!(hunter.url, Some("https://poemhunter.com".to_string()));
        assert_eq!(hunter.kind, ResourceKind::Downloadable);
        assert_eq!(hunter.notes, "PDF — Poems & poets, some downloadable PDFs");

        // Rows without a domain get no URL
        let on_demand = rows.iter().find(|r| r.name == "Free Poems on Demand").unwrap();
        assert_eq!(on_demand.url, None);
        assert_eq!(on_demand.kind, ResourceKind::Online);

        // "Online viewing only, Audio" resolves to mixed
        let archive = rows.iter().find(|r| r.name == "Poetry Archive").unwrap();
        assert_eq!(archive.kind, ResourceKind::Mixed);
    }
}
