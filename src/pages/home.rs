//! Home Page
//!
//! Portfolio landing page. Hosts the intro loading sequence; once the
//! progress gate opens it renders the full portfolio layout.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::*;
use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};

use crate::components::{
    About, BackToTop, Coursework, Experience, Footer, Hero, InProgress, LoadingScreen,
    Nav, Passions, Projects, Skills, StarBackdrop, ThemeRevealOverlay,
};
use crate::state::loading::{
    step_progress, RevealFrame, RevealSequencer, LOADING_TOTAL_MS, PROGRESS_TICK_MS,
};
use crate::state::theme::{palette_for, ThemeState, LOADING};

/// Timer handles for the intro drivers. Cleared when the gate opens or the
/// page unmounts; no callback may fire after that.
#[derive(Default)]
struct IntroDrivers {
    progress: Cell<Option<IntervalHandle>>,
    reveal: Cell<Option<TimeoutHandle>>,
    janitor: Cell<Option<TimeoutHandle>>,
}

impl IntroDrivers {
    fn shutdown(&self) {
        if let Some(handle) = self.progress.take() {
            handle.clear();
        }
        if let Some(handle) = self.reveal.take() {
            handle.clear();
        }
        if let Some(handle) = self.janitor.take() {
            handle.clear();
        }
    }
}

fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// Schedule the next reveal tick. Re-arms itself after every tick until the
/// machine reports no further delay.
fn arm_reveal(
    sequencer: Rc<RefCell<RevealSequencer>>,
    set_frame: WriteSignal<RevealFrame>,
    drivers: Rc<IntroDrivers>,
) {
    let Some(delay) = sequencer.borrow().next_delay_ms() else {
        drivers.reveal.set(None);
        return;
    };

    let tick = {
        let sequencer = Rc::clone(&sequencer);
        let drivers = Rc::clone(&drivers);
        move || {
            sequencer.borrow_mut().tick(&mut random_unit);
            set_frame.set(sequencer.borrow().frame());
            arm_reveal(sequencer, set_frame, drivers);
        }
    };

    if let Ok(handle) = set_timeout_with_handle(tick, Duration::from_millis(u64::from(delay))) {
        drivers.reveal.set(Some(handle));
    }
}

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");

    let (progress, set_progress) = create_signal(0u32);
    let mut rng = random_unit;
    let sequencer = Rc::new(RefCell::new(RevealSequencer::new(&mut rng)));
    let (frame, set_frame) = create_signal(sequencer.borrow().frame());

    // The gate: the loading view stays up until progress hits 100.
    let loading = create_memo(move |_| progress.get() < 100);

    let drivers = Rc::new(IntroDrivers::default());

    // Progress driver: one percent per tick, clamped at 100.
    if let Ok(handle) = set_interval_with_handle(
        move || set_progress.update(|p| *p = step_progress(*p)),
        Duration::from_millis(u64::from(PROGRESS_TICK_MS)),
    ) {
        drivers.progress.set(Some(handle));
    }

    // Text-reveal driver, armed from its start delay.
    arm_reveal(Rc::clone(&sequencer), set_frame, Rc::clone(&drivers));

    // Wall-clock janitor: open the gate and retire every driver. A reveal
    // still mid-string at this point is abandoned.
    {
        let drivers_for_janitor = Rc::clone(&drivers);
        if let Ok(handle) = set_timeout_with_handle(
            move || {
                drivers_for_janitor.shutdown();
                set_progress.set(100);
                web_sys::console::log_1(&"intro sequence complete".into());
            },
            Duration::from_millis(u64::from(LOADING_TOTAL_MS)),
        ) {
            drivers.janitor.set(Some(handle));
        }
    }

    on_cleanup({
        let drivers = Rc::clone(&drivers);
        move || drivers.shutdown()
    });

    // While loading, the fixed loading palette applies no matter what mode
    // the user has stored.
    let root_style = move || {
        let palette = if loading.get() {
            &LOADING
        } else {
            palette_for(theme.mode.get())
        };
        format!(
            "{} background-color: var(--bg); color: var(--text);",
            palette.css_vars()
        )
    };

    view! {
        <div class="flex flex-col min-h-screen relative" style=root_style>
            {move || {
                if loading.get() {
                    view! { <LoadingScreen progress frame /> }.into_view()
                } else {
                    view! { <Portfolio /> }.into_view()
                }
            }}
        </div>
    }
}

/// The interactive portfolio, mounted once the gate opens.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen animate-fade-in">
            <StarBackdrop />
            <ThemeRevealOverlay />
            <Nav />
            <Hero />
            <main class="container mx-auto px-4 sm:px-6 md:px-8 lg:px-16 relative z-10">
                <About />
                <Projects />
                <Experience />
                <Skills />
                <InProgress />
                <Coursework />
                <Passions />
            </main>
            <Footer />
            <BackToTop />
        </div>
    }
}
