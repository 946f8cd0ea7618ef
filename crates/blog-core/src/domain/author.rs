use serde::{Deserialize, Serialize};

/// Author of a blog post, stored as a structured name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Build an author from a display name such as `"Ada Lovelace"`.
    ///
    /// The name is split at its last whitespace run, so `"Mary Ann Evans"`
    /// becomes `Mary Ann` / `Evans`. A single word is kept as the first name.
    pub fn from_display_name(name: &str) -> Self {
        let name = name.trim();
        match name.rsplit_once(char::is_whitespace) {
            Some((first, last)) => Self::new(first.trim_end(), last),
            None => Self::new(name, ""),
        }
    }

    /// `"First Last"`, trimmed.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn is_blank(&self) -> bool {
        self.first_name.trim().is_empty() && self.last_name.trim().is_empty()
    }
}
