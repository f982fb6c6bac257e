//! Hero Component
//!
//! Oversized name and caption, shown once the intro sequence hands off.

use leptos::*;

use crate::state::loading::{CAPTION_TEXT, INTRO_TEXT, NAME_TEXT};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center relative px-4 z-10">
            <div class="text-center relative max-w-full">
                // Soft glow behind the name
                <div
                    class="hero-glow absolute rounded-full -z-10"
                    style="width: 160px; height: 160px; left: 50%; top: 50%; \
                           transform: translate(-50%, -50%); background: var(--accent);"
                ></div>

                <h1 class="text-[2.5rem] sm:text-[3.5rem] md:text-[5rem] font-bold mb-0">
                    <span class="text-[var(--accent)] inline-block">{INTRO_TEXT}</span>
                    " "
                    <span class="text-[var(--text)] inline-block">{NAME_TEXT}</span>
                </h1>
                <p class="text-sm sm:text-base md:text-lg text-[var(--muted)] -mt-2">
                    {CAPTION_TEXT}
                </p>
            </div>
        </div>
    }
}
