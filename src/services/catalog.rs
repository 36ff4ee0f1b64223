//! Fetch-once catalog loading for the composer screens.

use futures::try_join;

use crate::composer::ComposerSession;
use crate::domain::{ApiError, BookSetProvider, MasterDataProvider};
use crate::models::{AcademicYear, Board, Book, Medium, SchoolClass};

/// The five reference catalogs a composer screen needs. Loaded once per
/// page, read-only for the life of the session.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub boards: Vec<Board>,
    pub mediums: Vec<Medium>,
    pub classes: Vec<SchoolClass>,
    pub years: Vec<AcademicYear>,
    pub books: Vec<Book>,
}

/// Load all five catalogs in parallel.
pub async fn load_catalogs<P>(provider: &P) -> Result<Catalogs, ApiError>
where
    P: MasterDataProvider + ?Sized,
{
    let (boards, mediums, classes, years, books) = try_join!(
        provider.get_boards(),
        provider.get_mediums(),
        provider.get_classes(),
        provider.get_academic_years(),
        provider.get_books(),
    )?;

    tracing::debug!(
        boards = boards.len(),
        mediums = mediums.len(),
        classes = classes.len(),
        years = years.len(),
        books = books.len(),
        "catalogs loaded"
    );

    Ok(Catalogs {
        boards,
        mediums,
        classes,
        years,
        books,
    })
}

/// Bootstrap the edit flow: catalogs plus a session hydrated from the
/// persisted set, fetched in parallel.
pub async fn load_edit_context<P>(
    provider: &P,
    id: i32,
) -> Result<(Catalogs, ComposerSession), ApiError>
where
    P: MasterDataProvider + BookSetProvider + ?Sized,
{
    let (catalogs, book_set) = try_join!(load_catalogs(provider), provider.get_book_set(id))?;
    Ok((catalogs, ComposerSession::edit(&book_set)))
}
