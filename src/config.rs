//! Page Configuration
//!
//! Storage keys, timings, user-facing texts and the project catalogue.

use crate::models::ProjectCard;

pub const THEME_KEY: &str = "theme";
pub const VISITS_KEY: &str = "visits";
pub const TODOS_KEY: &str = "todos";

/// Clock refresh period
pub const CLOCK_TICK_MS: u32 = 1_000;
/// How long the contact form's success hint stays up
pub const HINT_CLEAR_MS: u32 = 3_000;

pub const EMPTY_TODOS_TEXT: &str = "目前沒有待辦事項。";
pub const DELETE_TODO_TEXT: &str = "刪除";
pub const CONTACT_INCOMPLETE_HINT: &str = "請把欄位填完整。";
pub const CONTACT_SENT_HINT: &str = "已送出（示範）。";

/// Projects shown in the portfolio section, in display order
pub const PROJECTS: &[ProjectCard] = &[
    ProjectCard {
        title: "Terminal Dashboard",
        summary: "A live system monitor rendered in the terminal.",
        tags: "rust tui cli monitoring",
    },
    ProjectCard {
        title: "Markdown Notes",
        summary: "Offline-first notes with tagging and full-text search.",
        tags: "wasm leptos markdown",
    },
    ProjectCard {
        title: "Tiny HTTP Cache",
        summary: "A caching reverse proxy with LRU eviction.",
        tags: "network cache proxy",
    },
    ProjectCard {
        title: "Portfolio Page",
        summary: "This page: theme switch, todo list and project search.",
        tags: "web frontend localstorage",
    },
];
