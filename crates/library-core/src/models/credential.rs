//! Administrator credential row.

use crate::store::Record;

/// One `username,password` row of the admin access table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// Whether the trimmed stored values equal the given inputs.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username.trim() == username && self.password.trim() == password
    }
}

impl Record for Credential {
    const KIND: &'static str = "Credential";
    const COLUMNS: &'static [&'static str] = &["username", "password"];

    fn key(&self) -> &str {
        &self.username
    }

    fn from_row(row: Vec<String>) -> Self {
        let mut fields = row.into_iter();
        let mut next = move || fields.next().unwrap_or_default();
        Self {
            username: next(),
            password: next(),
        }
    }

    fn to_row(&self) -> Vec<&str> {
        vec![self.username.as_str(), self.password.as_str()]
    }
}
