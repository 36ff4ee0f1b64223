//! Selection registry: the ordered set of books chosen for a draft.

use crate::models::Book;

/// One selected book with its quantity. Carries the full catalog record so
/// the shell can render name/subject/publisher without a lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEntry {
    pub book_id: i32,
    pub quantity: u32,
    pub book: Book,
}

/// Ordered mapping of book id to selection entry. Entries keep the order
/// books were added in, and each book appears at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionRegistry {
    entries: Vec<SelectionEntry>,
}

impl SelectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from persisted items, preserving server order and
    /// quantities.
    pub(crate) fn from_entries(entries: Vec<SelectionEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn contains(&self, book_id: i32) -> bool {
        self.entries.iter().any(|e| e.book_id == book_id)
    }

    /// Add a catalog book with quantity 1. No-op (returns `None`) when the
    /// id is not a real selection, not found in the catalog, or already
    /// present.
    pub fn add(&mut self, book_id: i32, catalog: &[Book]) -> Option<&SelectionEntry> {
        if book_id <= 0 || self.contains(book_id) {
            return None;
        }
        let book = catalog.iter().find(|b| b.id == book_id)?.clone();
        self.entries.push(SelectionEntry {
            book_id,
            quantity: 1,
            book,
        });
        self.entries.last()
    }

    /// Remove the entry for `book_id` if present.
    pub fn remove(&mut self, book_id: i32) {
        self.entries.retain(|e| e.book_id != book_id);
    }

    /// Set the quantity for `book_id` from raw form input. Anything that is
    /// not a positive integer stores 1. No-op when the id is absent.
    pub fn set_quantity(&mut self, book_id: i32, raw: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.book_id == book_id) {
            entry.quantity = parse_quantity(raw);
        }
    }

    /// Catalog books not yet selected, in catalog order. Feeds the add-book
    /// selector so a book cannot be added twice.
    pub fn candidates<'a>(&self, catalog: &'a [Book]) -> Vec<&'a Book> {
        catalog.iter().filter(|b| !self.contains(b.id)).collect()
    }
}

fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|q| *q >= 1).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_input_is_coerced_to_a_positive_integer() {
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-3"), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity(""), 1);
    }
}
