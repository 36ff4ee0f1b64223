pub mod academic_year;
pub mod board;
pub mod book;
pub mod book_set;
pub mod medium;
pub mod school_class;

pub use academic_year::AcademicYear;
pub use board::Board;
pub use book::Book;
pub use book_set::{BookSet, BookSetItem, BookSetSubmission, SubmissionBook};
pub use medium::Medium;
pub use school_class::SchoolClass;
