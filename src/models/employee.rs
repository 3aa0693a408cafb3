use serde::{Deserialize, Serialize};

/// A row of the `employees` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub badge_number: String,
    pub role: String,
}

/// Form payload used to create an employee (id is assigned by SQLite).
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub badge_number: String,
    pub role: String,
}
