//! App Root Component
//!
//! Router and global theme provider.

use leptos::*;
use leptos_router::*;

use crate::pages::{Home, Notes, Thoughts};
use crate::state::theme::provide_theme_state;

/// The three page variants a path can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRoute {
    Home,
    Notes,
    Thoughts,
}

impl PageRoute {
    /// Exact-match routing. Anything unrecognized lands on the portfolio
    /// rather than a 404.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/notes" => PageRoute::Notes,
            "/thoughts" => PageRoute::Thoughts,
            _ => PageRoute::Home,
        }
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Theme state outlives every page, so toggles survive navigation.
    provide_theme_state();

    view! {
        <Router>
            <Routes>
                <Route path="/*any" view=PageDispatch />
            </Routes>
        </Router>
    }
}

/// Mount exactly one page variant for the current path.
#[component]
fn PageDispatch() -> impl IntoView {
    let location = use_location();

    view! {
        {move || match PageRoute::from_path(&location.pathname.get()) {
            PageRoute::Home => view! { <Home /> }.into_view(),
            PageRoute::Notes => view! { <Notes /> }.into_view(),
            PageRoute::Thoughts => view! { <Thoughts /> }.into_view(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve_exactly() {
        assert_eq!(PageRoute::from_path("/"), PageRoute::Home);
        assert_eq!(PageRoute::from_path("/notes"), PageRoute::Notes);
        assert_eq!(PageRoute::from_path("/thoughts"), PageRoute::Thoughts);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        for path in [
            "",
            "/blog",
            "/notes/",
            "/notes/2024",
            "/Thoughts",
            "/NOTES",
            "/thoughts/x",
            "/index.html",
        ] {
            assert_eq!(PageRoute::from_path(path), PageRoute::Home, "path {path:?}");
        }
    }
}
