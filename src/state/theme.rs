//! Theme State
//!
//! Two named palettes plus a fixed loading palette, carried as an explicit
//! value object through context. A palette is applied by rendering all of
//! its variables as CSS custom properties on a page root, so a toggle swaps
//! every variable atomically.

use leptos::*;

/// Settle time for the reveal transition before toggles are accepted again.
pub const TOGGLE_SETTLE_MS: u32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Every style variable the pages consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub accent_rgb: &'static str,
    pub secondary: &'static str,
    pub cta: &'static str,
    pub demo_btn: &'static str,
    pub divider: &'static str,
    pub muted: &'static str,
    pub link_hover: &'static str,
    pub card_hover: &'static str,
    pub intro_text: &'static str,
}

pub const DARK: Palette = Palette {
    bg: "#000000",
    text: "#FFFFFF",
    accent: "#8B0000",
    accent_rgb: "139, 0, 0",
    secondary: "#1A1A1A",
    cta: "#600000",
    demo_btn: "#333333",
    divider: "#333333",
    muted: "#AAAAAA",
    link_hover: "#600000",
    card_hover: "#2A2A2A",
    intro_text: "#FFFBEA",
};

pub const LIGHT: Palette = Palette {
    bg: "#FFFBEA",
    text: "#1A1A1A",
    accent: "#0066CC",
    accent_rgb: "0, 102, 204",
    secondary: "#FFF4CC",
    cta: "#0066CC",
    demo_btn: "#4D4D4D",
    divider: "#E0E0C0",
    muted: "#6C757D",
    link_hover: "#0066CC",
    card_hover: "#FFF0B3",
    intro_text: "#000000",
};

/// Applied while the intro sequence runs, regardless of the stored mode.
pub const LOADING: Palette = Palette {
    bg: "#0A0A0A",
    text: "#FFFFFF",
    accent: "#FFFFFF",
    accent_rgb: "255, 255, 255",
    secondary: "#121212",
    cta: "#121212",
    demo_btn: "#333333",
    divider: "#333333",
    muted: "#F0F0F0",
    link_hover: "#FFFFFF",
    card_hover: "#1A1A1A",
    intro_text: "#FFFFFF",
};

impl Palette {
    /// Render the palette as CSS custom properties for a page root.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --text: {}; --accent: {}; --accent-rgb: {}; \
             --secondary: {}; --cta: {}; --demo-btn: {}; --divider: {}; \
             --muted: {}; --link-hover: {}; --card-hover: {}; --intro-text: {};",
            self.bg,
            self.text,
            self.accent,
            self.accent_rgb,
            self.secondary,
            self.cta,
            self.demo_btn,
            self.divider,
            self.muted,
            self.link_hover,
            self.card_hover,
            self.intro_text,
        )
    }
}

pub fn palette_for(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

/// Seed the mode from the OS preference: dark reported means dark, anything
/// else (including no media-query support) means light.
pub fn mode_from_preference(prefers_dark: Option<bool>) -> ThemeMode {
    if prefers_dark == Some(true) {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Read `prefers-color-scheme` once at startup.
pub fn detect_initial_mode() -> ThemeMode {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches());
    mode_from_preference(prefers_dark)
}

/// Theme state provided to the whole component tree.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: RwSignal<ThemeMode>,
    /// Set while the reveal transition is in flight; suppresses re-entry.
    pub transitioning: RwSignal<bool>,
    /// Pointer origin of the last toggle, in viewport pixels.
    pub toggle_origin: RwSignal<(f64, f64)>,
}

impl ThemeState {
    /// Flip the mode. The origin feeds the circular reveal; re-entrant calls
    /// are ignored until the settle delay clears the in-flight flag.
    pub fn toggle(&self, origin: (f64, f64)) {
        if self.transitioning.get_untracked() {
            return;
        }
        self.toggle_origin.set(origin);
        self.transitioning.set(true);
        self.mode.update(|mode| *mode = mode.flipped());

        let transitioning = self.transitioning;
        gloo_timers::callback::Timeout::new(TOGGLE_SETTLE_MS, move || {
            transitioning.set(false);
        })
        .forget();
    }
}

/// Provide theme state to the component tree.
pub fn provide_theme_state() {
    let state = ThemeState {
        mode: create_rw_signal(detect_initial_mode()),
        transitioning: create_rw_signal(false),
        toggle_origin: create_rw_signal((0.0, 0.0)),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_seeded_from_preference() {
        assert_eq!(mode_from_preference(Some(true)), ThemeMode::Dark);
        assert_eq!(mode_from_preference(Some(false)), ThemeMode::Light);
        assert_eq!(mode_from_preference(None), ThemeMode::Light);
    }

    #[test]
    fn test_double_flip_restores_palette() {
        for initial in [ThemeMode::Dark, ThemeMode::Light] {
            let toggled_twice = initial.flipped().flipped();
            assert_eq!(toggled_twice, initial);
            assert_eq!(
                palette_for(toggled_twice).css_vars(),
                palette_for(initial).css_vars()
            );
        }
    }

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(DARK, LIGHT);
        assert_ne!(LOADING, DARK);
        assert_ne!(LOADING, LIGHT);
    }

    #[test]
    fn test_css_vars_cover_every_variable() {
        let vars = DARK.css_vars();
        for name in [
            "--bg", "--text", "--accent", "--accent-rgb", "--secondary", "--cta",
            "--demo-btn", "--divider", "--muted", "--link-hover", "--card-hover",
            "--intro-text",
        ] {
            assert!(vars.contains(&format!("{name}: ")), "missing {name}");
        }
    }
}
