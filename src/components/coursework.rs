//! Coursework Section
//!
//! Tabbed course catalog: completed, current, and upcoming terms. The
//! section title links through to the notes page.

use leptos::*;
use leptos_router::A;

use crate::content::{Course, COMPLETED_COURSES, CURRENT_COURSES, UPCOMING_COURSES};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CourseTab {
    Completed,
    Current,
    Upcoming,
}

const COURSE_TABS: [CourseTab; 3] =
    [CourseTab::Completed, CourseTab::Current, CourseTab::Upcoming];

impl CourseTab {
    fn label(self) -> &'static str {
        match self {
            CourseTab::Completed => "Completed",
            CourseTab::Current => "Current",
            CourseTab::Upcoming => "Upcoming",
        }
    }

    fn courses(self) -> &'static [Course] {
        match self {
            CourseTab::Completed => COMPLETED_COURSES,
            CourseTab::Current => CURRENT_COURSES,
            CourseTab::Upcoming => UPCOMING_COURSES,
        }
    }
}

#[component]
pub fn Coursework() -> impl IntoView {
    let (active, set_active) = create_signal(CourseTab::Completed);

    view! {
        <section id="coursework" class="min-h-[50vh] py-10 px-6 rounded-2xl mb-8 section-shell">
            <h2 class="text-4xl font-semibold mb-10 section-title">
                <A href="/notes">"Coursework"</A>
            </h2>

            // Tab bar
            <div class="flex space-x-2 border-b border-[var(--divider)] pb-2 mb-8">
                {COURSE_TABS
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class=move || tab_classes(active.get() == tab)
                            on:click=move |_| set_active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            // Cards for the active tab
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                {move || {
                    active
                        .get()
                        .courses()
                        .iter()
                        .map(|course| view! { <CourseCard course /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

/// Tab button styling shared with the passions section.
pub(super) fn tab_classes(selected: bool) -> String {
    let base = "px-4 py-2 font-medium rounded-t-lg transition-colors";
    if selected {
        format!("{base} bg-[var(--secondary)] text-[var(--accent)]")
    } else {
        format!("{base} text-[var(--muted)] hover:text-[var(--text)]")
    }
}

#[component]
fn CourseCard(course: &'static Course) -> impl IntoView {
    view! {
        <div
            class="bg-[var(--secondary)] p-6 rounded-lg min-h-[160px] flex flex-col \
                   animate-fade-in hover:scale-[1.02] transition-transform duration-200"
        >
            <h4 class="text-xl font-medium mb-2">{course.name}</h4>
            <div class="flex items-center gap-2 mb-2 flex-wrap">
                {course.tags
                    .iter()
                    .map(|tag| view! {
                        <span class=format!("px-2 py-0.5 text-xs rounded-full border {}", tag.classes)>
                            {tag.label}
                        </span>
                    })
                    .collect_view()}
            </div>
            <p class="text-[var(--muted)] text-sm">{course.summary}</p>
        </div>
    }
}
