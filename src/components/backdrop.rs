//! Star Backdrop
//!
//! Decorative twinkling dots behind the portfolio, positioned randomly once
//! per mount. Purely cosmetic; the animation itself is CSS.

use leptos::*;

const STAR_COUNT: usize = 40;

struct Star {
    left: f64,
    top: f64,
    size: f64,
    delay: f64,
}

fn scatter() -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            left: js_sys::Math::random() * 100.0,
            top: js_sys::Math::random() * 100.0,
            size: js_sys::Math::random() * 3.0 + 2.0,
            delay: js_sys::Math::random() * 3.0,
        })
        .collect()
}

/// Fixed full-viewport layer of twinkling dots.
#[component]
pub fn StarBackdrop() -> impl IntoView {
    let stars = scatter();

    view! {
        <div class="fixed inset-0 z-0 pointer-events-none">
            {stars
                .into_iter()
                .map(|star| view! {
                    <div
                        class="absolute rounded-full star-twinkle"
                        style=format!(
                            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; \
                             background-color: rgba(var(--accent-rgb), 0.35); \
                             box-shadow: 0 0 4px 1px rgba(var(--accent-rgb), 0.25); \
                             animation-delay: {:.2}s;",
                            star.left, star.top, star.size, star.size, star.delay,
                        )
                    ></div>
                })
                .collect_view()}
        </div>
    }
}
