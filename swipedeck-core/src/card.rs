//! Cards - the display records a deck is built from.

use serde::{Deserialize, Serialize};

use crate::{DeckError, DeckResult};

/// Unique identifier for a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a card ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A portfolio project card.
///
/// Everything except `id` is display data; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,
    /// Project title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Optional short description for compact layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    /// Three-word tagline.
    #[serde(default)]
    pub three_word_descriptor: String,
    /// Image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Technology tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Year the project started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<u16>,
    /// Year the project ended, if it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<u16>,
    /// `owner/name` of the GitHub repository backing the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<String>,
    /// External link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Card {
    /// Create a card with the required fields; optional fields start empty.
    #[must_use]
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            short_description: None,
            three_word_descriptor: String::new(),
            image: None,
            tags: Vec::new(),
            start_year: None,
            end_year: None,
            github_repo: None,
            link: None,
        }
    }

    /// Set the three-word tagline.
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.three_word_descriptor = descriptor.into();
        self
    }

    /// Set the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the active year range.
    #[must_use]
    pub fn with_years(mut self, start: u16, end: Option<u16>) -> Self {
        self.start_year = Some(start);
        self.end_year = end;
        self
    }

    /// Set the GitHub repository (`owner/name`).
    #[must_use]
    pub fn with_github_repo(mut self, repo: impl Into<String>) -> Self {
        self.github_repo = Some(repo.into());
        self
    }

    /// Description suited to the available space: the short form when
    /// `compact` and one exists, otherwise the full description.
    #[must_use]
    pub fn display_description(&self, compact: bool) -> &str {
        match (&self.short_description, compact) {
            (Some(short), true) => short,
            _ => &self.description,
        }
    }

    /// Human-readable year range, e.g. `2021 - 2023` or `2024 - Present`.
    #[must_use]
    pub fn year_range(&self) -> Option<String> {
        let start = self.start_year?;
        Some(match self.end_year {
            Some(end) if end == start => start.to_string(),
            Some(end) => format!("{start} - {end}"),
            None => format!("{start} - Present"),
        })
    }
}

/// Parse a JSON array of cards.
///
/// # Errors
///
/// Returns an error if the JSON is malformed.
pub fn cards_from_json(json: &str) -> DeckResult<Vec<Card>> {
    serde_json::from_str(json).map_err(DeckError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_json_uses_camel_case() {
        let json = r#"[{
            "id": "atlas",
            "title": "Atlas",
            "description": "A long description",
            "shortDescription": "Short",
            "threeWordDescriptor": "fast tiny maps",
            "tags": ["rust", "wasm"],
            "startYear": 2022,
            "githubRepo": "me/atlas"
        }]"#;

        let cards = cards_from_json(json).expect("should parse");
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.id.as_str(), "atlas");
        assert_eq!(card.short_description.as_deref(), Some("Short"));
        assert_eq!(card.tags, vec!["rust", "wasm"]);
        assert_eq!(card.github_repo.as_deref(), Some("me/atlas"));
        assert!(card.end_year.is_none());
    }

    #[test]
    fn test_cards_from_json_rejects_garbage() {
        assert!(cards_from_json("{ not json").is_err());
    }

    #[test]
    fn test_display_description() {
        let mut card = Card::new("a", "A", "full text");
        assert_eq!(card.display_description(true), "full text");
        card.short_description = Some("short".to_string());
        assert_eq!(card.display_description(true), "short");
        assert_eq!(card.display_description(false), "full text");
    }

    #[test]
    fn test_year_range() {
        let card = Card::new("a", "A", "");
        assert!(card.year_range().is_none());
        assert_eq!(
            card.clone().with_years(2021, Some(2023)).year_range().as_deref(),
            Some("2021 - 2023")
        );
        assert_eq!(
            card.clone().with_years(2024, None).year_range().as_deref(),
            Some("2024 - Present")
        );
        assert_eq!(
            card.with_years(2020, Some(2020)).year_range().as_deref(),
            Some("2020")
        );
    }
}
