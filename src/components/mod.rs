//! UI Components
//!
//! Leptos components for each section of the page.

mod theme_button;
mod clock_display;
mod visit_counter;
mod project_search;
mod todo_panel;
mod todo_row;
mod contact_form;
mod site_footer;

pub use theme_button::ThemeButton;
pub use clock_display::ClockDisplay;
pub use visit_counter::VisitCounter;
pub use project_search::ProjectSearch;
pub use todo_panel::TodoPanel;
pub use todo_row::TodoRow;
pub use contact_form::ContactForm;
pub use site_footer::SiteFooter;
