//! Page Models
//!
//! Data persisted to browser storage and the static project catalogue.

use serde::{Deserialize, Serialize};

/// A single todo entry, stored as `{id, text, done}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(id: String, text: String) -> Self {
        Self { id, text, done: false }
    }
}

/// Color scheme applied to the whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The theme button reads as "pressed" in light mode
    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }
}

/// A project entry in the portfolio list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub summary: &'static str,
    /// Space-separated keywords, searchable but also shown as chips
    pub tags: &'static str,
}

impl ProjectCard {
    pub fn tag_list(&self) -> impl Iterator<Item = &'static str> {
        self.tags.split_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_item_wire_format() {
        let item = TodoItem::new("a".to_string(), "Buy milk".to_string());
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"a","text":"Buy milk","done":false}"#);
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::from_str::<Theme>("\"dark\"").unwrap(), Theme::Dark);
        assert!(serde_json::from_str::<Theme>("\"blue\"").is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert!(Theme::Light.is_light());
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn test_tag_list() {
        let card = ProjectCard { title: "t", summary: "s", tags: " rust  wasm " };
        assert_eq!(card.tag_list().collect::<Vec<_>>(), vec!["rust", "wasm"]);
    }
}
