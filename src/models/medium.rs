use serde::{Deserialize, Serialize};

/// A medium of instruction (e.g. English).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medium {
    pub id: i32,
    pub medium_name: String,
}
