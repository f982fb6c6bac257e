//! State Management
//!
//! Theme state and the intro loading/reveal state machine.

pub mod loading;
pub mod theme;

pub use loading::{RevealFrame, RevealPhase, RevealSequencer};
pub use theme::{provide_theme_state, Palette, ThemeMode, ThemeState};
