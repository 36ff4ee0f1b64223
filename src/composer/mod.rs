//! Book-set composer
//!
//! The draft/selection core plus the submission state machine. Shells drive
//! it through `ComposerSession`; everything here is callable from tests
//! without rendering anything.

pub mod draft;
pub mod registry;
pub mod session;

pub use draft::BookSetDraft;
pub use registry::{SelectionEntry, SelectionRegistry};
pub use session::{ComposerSession, SUCCESS_REDIRECT_DELAY, SessionMode, SessionState};
