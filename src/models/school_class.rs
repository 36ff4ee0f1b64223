use serde::{Deserialize, Serialize};

/// A school class. `class_order` drives display ordering, not this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: i32,
    pub class_name: String,
    pub class_order: i32,
}
