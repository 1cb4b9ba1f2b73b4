use serde::{Deserialize, Serialize};

/// One normalized film-interaction record: a film that was watched,
/// rated, or put on the watchlist.
///
/// Feed-derived records may carry a year, rating, watch date and rewatch
/// flag; listing-derived records only ever have a title and link. There is
/// no provenance field — the populated fields are the distinction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub rewatch: bool,
}

impl Film {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year: None,
            rating: None,
            watch_date: None,
            link: None,
            rewatch: false,
        }
    }

    /// One-line rendering: `Title (Year) ★★★★½ (rewatch)`, with each
    /// decoration present only when the field is.
    pub fn summary_line(&self) -> String {
        let mut line = self.title.clone();
        if let Some(year) = &self.year {
            line.push_str(&format!(" ({})", year));
        }
        if let Some(rating) = &self.rating {
            line.push_str(&format!(" {}", rating));
        }
        if self.rewatch {
            line.push_str(" (rewatch)");
        }
        line
    }
}
