//! Dashboard stats: one count per entity, fetched in parallel.

use futures::try_join;

use crate::domain::{ApiError, BookSetFilter, BookSetProvider, MasterDataProvider};

/// Entity counts shown on the landing screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_book_sets: usize,
    pub total_boards: usize,
    pub total_mediums: usize,
    pub total_classes: usize,
    pub total_books: usize,
    pub total_years: usize,
}

pub async fn load_stats<P>(provider: &P) -> Result<DashboardStats, ApiError>
where
    P: MasterDataProvider + BookSetProvider + ?Sized,
{
    let filter = BookSetFilter::default();
    let (book_sets, boards, mediums, classes, books, years) = try_join!(
        provider.list_book_sets(&filter),
        provider.get_boards(),
        provider.get_mediums(),
        provider.get_classes(),
        provider.get_books(),
        provider.get_academic_years(),
    )?;

    Ok(DashboardStats {
        total_book_sets: book_sets.len(),
        total_boards: boards.len(),
        total_mediums: mediums.len(),
        total_classes: classes.len(),
        total_books: books.len(),
        total_years: years.len(),
    })
}
