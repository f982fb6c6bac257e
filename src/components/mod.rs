//! UI Components
//!
//! Reusable Leptos components for the portfolio pages.

pub mod about;
pub mod backdrop;
pub mod coursework;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod loading;
pub mod nav;
pub mod overlay;
pub mod passions;
pub mod projects;
pub mod skills;

pub use about::About;
pub use backdrop::StarBackdrop;
pub use coursework::Coursework;
pub use experience::Experience;
pub use footer::{BackToTop, Footer};
pub use hero::Hero;
pub use loading::LoadingScreen;
pub use nav::Nav;
pub use overlay::ThemeRevealOverlay;
pub use passions::Passions;
pub use projects::{InProgress, Projects};
pub use skills::Skills;
