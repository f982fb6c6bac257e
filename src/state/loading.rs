//! Intro Loading State
//!
//! The progress counter and the staged text-reveal machine that run while
//! the home page boots. Both are pure so they can be driven by tests; the
//! page wires them to browser timers.

/// First hero line.
pub const INTRO_TEXT: &str = "Abdullah";
/// Second hero line.
pub const NAME_TEXT: &str = "Rana";
/// Caption under the hero name.
pub const CAPTION_TEXT: &str =
    "Math + CS @ UVA | Systems, Intelligence, Probability | Thinking Analysis";

/// Progress tick cadence: one percent per tick.
pub const PROGRESS_TICK_MS: u32 = 25;
/// Percent added per progress tick.
pub const PROGRESS_STEP: u32 = 1;
/// Total wall-clock duration of the loading screen.
pub const LOADING_TOTAL_MS: u32 = PROGRESS_TICK_MS * (100 / PROGRESS_STEP);

/// Quiet period before the first reveal tick.
pub const REVEAL_START_DELAY_MS: u32 = 1_000;
/// Per-character cadence for the two name lines.
pub const NAME_TICK_MS: u32 = 100;
/// The caption is far longer, so it decodes faster.
pub const CAPTION_TICK_MS: u32 = 30;
/// Breather between one line completing and the next starting.
pub const PHASE_PAUSE_MS: u32 = 300;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Advance the loading percentage by one step, saturating at 100.
pub fn step_progress(progress: u32) -> u32 {
    (progress + PROGRESS_STEP).min(100)
}

/// Phases of the text reveal. Strictly sequential; each phase is gated on
/// its predecessor finishing plus a fixed pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Booting,
    Intro,
    Name,
    Caption,
    Done,
}

/// Snapshot of the three display lines for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealFrame {
    pub intro: String,
    pub name: String,
    pub caption: String,
}

/// Character-by-character decode of the hero lines from binary/hex noise.
///
/// One driving clock: the host asks [`next_delay_ms`](Self::next_delay_ms),
/// sleeps that long, then calls [`tick`](Self::tick). Characters left of the
/// revealed prefix are final and never re-rolled; everything to the right is
/// re-scrambled on every tick of its phase. Randomness is injected as a
/// `[0, 1)` sampler so ticks are deterministic under test.
pub struct RevealSequencer {
    phase: RevealPhase,
    revealed: usize,
    delay_ms: Option<u32>,
    intro: String,
    name: String,
    caption: String,
}

impl RevealSequencer {
    /// All three lines start fully scrambled; the first tick fires after the
    /// start delay.
    pub fn new(rng: &mut dyn FnMut() -> f64) -> Self {
        Self {
            phase: RevealPhase::Booting,
            revealed: 0,
            delay_ms: Some(REVEAL_START_DELAY_MS),
            intro: scramble(INTRO_TEXT.len(), rng),
            name: scramble(NAME_TEXT.len(), rng),
            caption: scramble(CAPTION_TEXT.len(), rng),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Revealed prefix length of the line the active phase is decoding.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// How long to sleep before the next [`tick`](Self::tick), or `None`
    /// once the machine is done and nothing more should be scheduled.
    pub fn next_delay_ms(&self) -> Option<u32> {
        self.delay_ms
    }

    pub fn frame(&self) -> RevealFrame {
        RevealFrame {
            intro: self.intro.clone(),
            name: self.name.clone(),
            caption: self.caption.clone(),
        }
    }

    pub fn tick(&mut self, rng: &mut dyn FnMut() -> f64) {
        match self.phase {
            RevealPhase::Booting => {
                self.phase = RevealPhase::Intro;
                self.revealed = 0;
                self.delay_ms = Some(NAME_TICK_MS);
            }
            RevealPhase::Intro => {
                self.revealed += 1;
                self.intro = reveal_line(INTRO_TEXT, self.revealed, rng);
                if self.revealed == INTRO_TEXT.len() {
                    self.enter(RevealPhase::Name, NAME_TICK_MS, rng);
                } else {
                    self.delay_ms = Some(NAME_TICK_MS);
                }
            }
            RevealPhase::Name => {
                self.revealed += 1;
                self.name = reveal_line(NAME_TEXT, self.revealed, rng);
                if self.revealed == NAME_TEXT.len() {
                    self.enter(RevealPhase::Caption, CAPTION_TICK_MS, rng);
                } else {
                    self.delay_ms = Some(NAME_TICK_MS);
                }
            }
            RevealPhase::Caption => {
                self.revealed += 1;
                self.caption = reveal_line(CAPTION_TEXT, self.revealed, rng);
                if self.revealed == CAPTION_TEXT.len() {
                    self.phase = RevealPhase::Done;
                    self.delay_ms = None;
                } else {
                    self.delay_ms = Some(CAPTION_TICK_MS);
                }
            }
            RevealPhase::Done => {}
        }
    }

    /// Arm the next phase from a freshly scrambled line, after the pause.
    fn enter(&mut self, phase: RevealPhase, tick_ms: u32, rng: &mut dyn FnMut() -> f64) {
        match phase {
            RevealPhase::Name => self.name = scramble(NAME_TEXT.len(), rng),
            RevealPhase::Caption => self.caption = scramble(CAPTION_TEXT.len(), rng),
            _ => {}
        }
        self.phase = phase;
        self.revealed = 0;
        self.delay_ms = Some(PHASE_PAUSE_MS + tick_ms);
    }
}

/// One noise character: a coin flip picks binary or hex, then a second draw
/// picks the digit.
fn random_symbol(rng: &mut dyn FnMut() -> f64) -> char {
    if rng() > 0.5 {
        if rng() < 0.5 {
            '0'
        } else {
            '1'
        }
    } else {
        let index = ((rng() * 16.0) as usize).min(15);
        HEX_CHARS[index] as char
    }
}

fn scramble(len: usize, rng: &mut dyn FnMut() -> f64) -> String {
    (0..len).map(|_| random_symbol(rng)).collect()
}

/// The first `prefix` characters of `target`, the rest re-rolled noise.
fn reveal_line(target: &str, prefix: usize, rng: &mut dyn FnMut() -> f64) -> String {
    let mut line: String = target.chars().take(prefix).collect();
    line.push_str(&scramble(target.chars().count().saturating_sub(prefix), rng));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise_char(c: char) -> bool {
        c.is_ascii_digit() || ('A'..='F').contains(&c)
    }

    #[test]
    fn test_progress_monotonic_and_capped() {
        let mut progress = 0;
        let mut ticks = 0;
        while progress < 100 {
            let next = step_progress(progress);
            assert!(next >= progress);
            assert!(next <= 100);
            progress = next;
            ticks += 1;
        }
        assert_eq!(ticks, 100);
        // Further ticks stay pinned at 100.
        assert_eq!(step_progress(progress), 100);
    }

    #[test]
    fn test_loading_duration() {
        assert_eq!(LOADING_TOTAL_MS, 2_500);
    }

    #[test]
    fn test_initial_lines_are_noise() {
        let mut rng = cycle_rng();
        let seq = RevealSequencer::new(&mut rng);
        let frame = seq.frame();
        assert_eq!(frame.intro.len(), INTRO_TEXT.len());
        assert_eq!(frame.name.len(), NAME_TEXT.len());
        assert_eq!(frame.caption.len(), CAPTION_TEXT.len());
        for c in frame.intro.chars().chain(frame.name.chars()).chain(frame.caption.chars()) {
            assert!(noise_char(c), "unexpected symbol {c:?}");
        }
        assert_eq!(seq.phase(), RevealPhase::Booting);
        assert_eq!(seq.next_delay_ms(), Some(REVEAL_START_DELAY_MS));
    }

    #[test]
    fn test_intro_completion_hands_off_to_name() {
        let mut rng = cycle_rng();
        let mut seq = RevealSequencer::new(&mut rng);
        seq.tick(&mut rng); // leave Booting

        for expected in 1..=INTRO_TEXT.len() {
            seq.tick(&mut rng);
            if expected < INTRO_TEXT.len() {
                assert_eq!(seq.phase(), RevealPhase::Intro);
                assert_eq!(seq.revealed(), expected);
                assert_eq!(seq.next_delay_ms(), Some(NAME_TICK_MS));
            }
        }

        // Intro is fully revealed; the machine is parked on Name with a
        // zeroed counter and the inter-phase pause scheduled.
        assert_eq!(seq.phase(), RevealPhase::Name);
        assert_eq!(seq.revealed(), 0);
        assert_eq!(seq.next_delay_ms(), Some(PHASE_PAUSE_MS + NAME_TICK_MS));
        assert_eq!(seq.frame().intro, INTRO_TEXT);
    }

    #[test]
    fn test_phases_run_in_order() {
        let mut rng = cycle_rng();
        let mut seq = RevealSequencer::new(&mut rng);
        let mut order = vec![seq.phase()];
        while seq.next_delay_ms().is_some() {
            seq.tick(&mut rng);
            if order.last() != Some(&seq.phase()) {
                order.push(seq.phase());
            }
        }
        assert_eq!(
            order,
            vec![
                RevealPhase::Booting,
                RevealPhase::Intro,
                RevealPhase::Name,
                RevealPhase::Caption,
                RevealPhase::Done,
            ]
        );
        assert_eq!(seq.frame().intro, INTRO_TEXT);
        assert_eq!(seq.frame().name, NAME_TEXT);
        assert_eq!(seq.frame().caption, CAPTION_TEXT);
    }

    #[test]
    fn test_caption_prefix_matches_literal() {
        let mut rng = cycle_rng();
        let mut seq = RevealSequencer::new(&mut rng);
        while seq.phase() != RevealPhase::Caption {
            seq.tick(&mut rng);
        }

        while seq.phase() == RevealPhase::Caption {
            seq.tick(&mut rng);
            let k = seq.revealed();
            let line = seq.frame().caption;
            assert_eq!(&line[..k.min(line.len())], &CAPTION_TEXT[..k.min(line.len())]);
            for c in line.chars().skip(k) {
                assert!(noise_char(c), "suffix escaped the noise pool: {c:?}");
            }
        }
    }

    #[test]
    fn test_revealed_prefix_never_regresses() {
        let mut rng = cycle_rng();
        let mut seq = RevealSequencer::new(&mut rng);
        let mut last = 0;
        seq.tick(&mut rng);
        while seq.phase() == RevealPhase::Intro {
            assert!(seq.revealed() >= last);
            last = seq.revealed();
            seq.tick(&mut rng);
        }
    }

    #[test]
    fn test_done_schedules_nothing() {
        let mut rng = cycle_rng();
        let mut seq = RevealSequencer::new(&mut rng);
        while seq.next_delay_ms().is_some() {
            seq.tick(&mut rng);
        }
        assert_eq!(seq.phase(), RevealPhase::Done);

        let frame = seq.frame();
        seq.tick(&mut rng);
        assert_eq!(seq.frame(), frame);
        assert_eq!(seq.next_delay_ms(), None);
    }

    #[test]
    fn test_noise_pool_membership() {
        let mut rng = cycle_rng();
        for _ in 0..256 {
            assert!(noise_char(random_symbol(&mut rng)));
        }
    }

    /// Deterministic sampler that walks the unit interval.
    fn cycle_rng() -> impl FnMut() -> f64 {
        let mut step = 0u32;
        move || {
            step = (step + 7) % 97;
            f64::from(step) / 97.0
        }
    }
}
