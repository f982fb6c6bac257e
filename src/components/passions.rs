//! Passions Section
//!
//! Tabbed hobby cards: technical, creative, and lifestyle. The section
//! title links through to the thoughts page.

use leptos::*;
use leptos_router::A;

use crate::content::{Passion, CREATIVE_PASSIONS, LIFESTYLE_PASSIONS, TECHNICAL_PASSIONS};

#[derive(Clone, Copy, PartialEq, Eq)]
enum PassionTab {
    Technical,
    Creative,
    Lifestyle,
}

const PASSION_TABS: [PassionTab; 3] =
    [PassionTab::Technical, PassionTab::Creative, PassionTab::Lifestyle];

impl PassionTab {
    fn label(self) -> &'static str {
        match self {
            PassionTab::Technical => "Technical",
            PassionTab::Creative => "Creative",
            PassionTab::Lifestyle => "Lifestyle",
        }
    }

    fn passions(self) -> &'static [Passion] {
        match self {
            PassionTab::Technical => TECHNICAL_PASSIONS,
            PassionTab::Creative => CREATIVE_PASSIONS,
            PassionTab::Lifestyle => LIFESTYLE_PASSIONS,
        }
    }
}

#[component]
pub fn Passions() -> impl IntoView {
    let (active, set_active) = create_signal(PassionTab::Technical);

    view! {
        <section id="passions" class="min-h-[50vh] py-10 px-6 rounded-2xl mb-8 section-shell">
            <h2 class="text-4xl font-semibold mb-10 section-title">
                <A href="/thoughts">"Passions"</A>
            </h2>

            <div class="flex space-x-2 border-b border-[var(--divider)] pb-2 mb-8">
                {PASSION_TABS
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class=move || super::coursework::tab_classes(active.get() == tab)
                            on:click=move |_| set_active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {move || {
                    active
                        .get()
                        .passions()
                        .iter()
                        .map(|passion| view! { <PassionCard passion /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn PassionCard(passion: &'static Passion) -> impl IntoView {
    view! {
        <div
            class="bg-[var(--secondary)] rounded-lg p-6 text-center animate-fade-in \
                   border border-[var(--divider)] hover:bg-[var(--card-hover)] \
                   transition-colors duration-300"
        >
            <div class="text-5xl mb-4">{passion.glyph}</div>
            <h4 class="text-xl font-semibold mb-2">{passion.name}</h4>
            <p class="text-[var(--muted)] text-sm">{passion.blurb}</p>
        </div>
    }
}
