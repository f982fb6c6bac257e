//! Project Sections
//!
//! Shipped project cards and the in-progress feature section with milestone
//! timelines.

use leptos::*;

use crate::content::{
    Milestone, MilestoneStatus, Project, WorkInProgress, IN_PROGRESS, PROJECTS,
};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="min-h-[50vh] py-10 px-6 rounded-2xl mb-8 section-shell">
            <h2 class="text-4xl font-semibold mb-10 section-title">"Projects"</h2>

            <div class="grid md:grid-cols-2 gap-6">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div
            class="group bg-[var(--secondary)] rounded-lg p-6 border border-[var(--divider)] \
                   hover:bg-[var(--card-hover)] hover:shadow-xl transition-all duration-300"
        >
            <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
            <p class="text-sm text-[var(--muted)] mb-4">{project.description}</p>

            <div class="flex flex-wrap gap-2 mb-4">
                {project.tech_stack
                    .iter()
                    .map(|tech| view! {
                        <span class="px-2 py-1 text-xs rounded-md bg-[var(--bg)] text-[var(--muted)]">
                            {*tech}
                        </span>
                    })
                    .collect_view()}
            </div>

            {project.learned.map(|learned| view! {
                <p class="text-sm text-[var(--muted)] italic mb-4">{learned}</p>
            })}

            <div class="flex flex-wrap gap-2">
                <a
                    href=project.github
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-3 py-1.5 text-sm rounded-md bg-[var(--cta)] text-white \
                           hover:opacity-90 transition-opacity"
                >
                    "GitHub"
                </a>
                <a
                    href=project.demo
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-3 py-1.5 text-sm rounded-md bg-[var(--demo-btn)] text-white \
                           hover:opacity-90 transition-opacity"
                >
                    "Live Demo"
                </a>
            </div>
        </div>
    }
}

/// "What I'm Building": featured works in progress.
#[component]
pub fn InProgress() -> impl IntoView {
    view! {
        <section
            id="current-projects"
            class="min-h-[50vh] py-10 px-6 rounded-2xl mb-8 section-shell"
        >
            <h2 class="text-4xl font-semibold section-title">"What I'm Building"</h2>
            <p class="text-[var(--muted)] mt-2 mb-10 max-w-2xl">
                "Current projects I'm actively developing, from concept to completion"
            </p>

            <div class="space-y-10">
                {IN_PROGRESS
                    .iter()
                    .map(|work| view! { <WipCard work /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn WipCard(work: &'static WorkInProgress) -> impl IntoView {
    view! {
        <div
            class="bg-[var(--secondary)] rounded-lg overflow-hidden shadow-lg border \
                   border-[var(--divider)] hover:shadow-xl transition-all duration-300"
        >
            <div class="flex flex-col md:flex-row">
                // Summary column
                <div class="md:w-1/3 p-6 flex flex-col justify-between">
                    <div>
                        <h3 class="text-xl font-semibold mb-2">
                            <a
                                href=work.github
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hover:underline"
                            >
                                {work.title}
                            </a>
                        </h3>
                        <div class="flex items-center gap-2 mb-4">
                            <div class=format!("w-3 h-3 rounded-full animate-pulse {}", work.status_hue)></div>
                            <span class="text-sm text-[var(--muted)]">{work.status_label}</span>
                        </div>
                        <p class="text-sm text-[var(--muted)] mb-4">{work.summary}</p>
                    </div>
                    <div class="flex flex-wrap gap-2 mt-4">
                        {work.stack
                            .iter()
                            .map(|tech| view! {
                                <span class="px-2 py-1 text-xs rounded-md bg-[var(--bg)] text-[var(--muted)]">
                                    {*tech}
                                </span>
                            })
                            .collect_view()}
                    </div>
                </div>

                // Milestones and timeline column
                <div class="md:w-2/3 p-6">
                    <div class="flex flex-col sm:flex-row justify-between items-start \
                                sm:items-center mb-4 gap-2">
                        <h4 class="font-medium text-lg">{work.plan_heading}</h4>
                        <span
                            class="text-sm px-3 py-1 rounded-full font-medium whitespace-nowrap"
                            style="background-color: rgba(var(--accent-rgb), 0.2)"
                        >
                            {work.eta}
                        </span>
                    </div>

                    <div class="space-y-4">
                        {work.milestones
                            .iter()
                            .map(|milestone| view! { <MilestoneRow milestone /> })
                            .collect_view()}
                    </div>

                    <div class="mt-6 pt-4 border-t border-[var(--divider)]">
                        <h5 class="text-sm font-medium mb-2">"Timeline"</h5>
                        <div class="overflow-hidden h-2 rounded bg-[var(--bg)]">
                            <div
                                class="h-full bg-[var(--accent)]"
                                style=format!("width: {}%", work.completion_pct)
                            ></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MilestoneRow(milestone: &'static Milestone) -> impl IntoView {
    let marker = match milestone.status {
        MilestoneStatus::Done => "w-5 h-5 rounded-full bg-[var(--accent)] mt-0.5 shrink-0",
        MilestoneStatus::Active => {
            "w-5 h-5 rounded-full bg-[var(--accent)] opacity-50 mt-0.5 shrink-0"
        }
        MilestoneStatus::Planned => {
            "w-5 h-5 rounded-full border border-dashed border-[var(--accent)] mt-0.5 shrink-0"
        }
    };

    view! {
        <div class="flex items-start gap-3">
            <div class=marker></div>
            <div>
                <p class="font-medium">{milestone.title}</p>
                <p class="text-sm text-[var(--muted)]">{milestone.detail}</p>
            </div>
        </div>
    }
}
