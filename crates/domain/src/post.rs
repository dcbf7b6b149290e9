//! Post entities.

use serde::{Deserialize, Serialize};

/// A published post shown on the posts screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub body: String,
}

impl Post {
    /// Returns the first line of the body for list previews.
    #[must_use]
    pub fn preview(&self) -> &str {
        self.body.lines().next().unwrap_or_default()
    }
}
