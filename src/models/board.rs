use serde::{Deserialize, Serialize};

/// An education board (e.g. CBSE). Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: i32,
    pub board_name: String,
}
