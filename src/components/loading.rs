//! Loading Screen
//!
//! Full-screen intro shown while the home page boots: a pulsing progress
//! ring and the three hero lines decoding out of binary/hex noise.

use leptos::*;

use crate::state::loading::RevealFrame;

/// Intro loading view. `progress` drives the percentage readout; `frame`
/// carries the partially decoded hero lines.
#[component]
pub fn LoadingScreen(
    progress: ReadSignal<u32>,
    frame: ReadSignal<RevealFrame>,
) -> impl IntoView {
    view! {
        <div
            class="h-screen w-full flex flex-col items-center justify-center overflow-hidden"
            style="background-color: var(--bg); color: var(--text)"
        >
            // Progress ring with percentage readout
            <div class="relative z-10 mb-12">
                <div
                    class="w-28 h-28 rounded-full border-4 border-[var(--accent)] \
                           flex items-center justify-center pulse-ring"
                >
                    <span class="text-3xl font-bold">
                        {move || format!("{}%", progress.get())}
                    </span>
                </div>
            </div>

            // Hero lines, decoding
            <h2 class="text-3xl font-semibold mb-1 font-mono tracking-wider">
                <span class="text-[var(--accent)]">{move || frame.get().intro}</span>
                " "
                <span class="text-[var(--text)]">{move || frame.get().name}</span>
            </h2>
            <p class="text-xs sm:text-sm text-[var(--muted)] font-mono mb-8 px-4 text-center">
                {move || frame.get().caption}
            </p>

            <p class="text-lg text-[var(--muted)] mb-3">"Loading Portfolio"</p>
            <div class="h-1 w-3/5 shimmer-bar"></div>
        </div>
    }
}
