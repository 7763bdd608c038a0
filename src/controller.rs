use tracing::debug;
use crate::haptics::Haptics;
use crate::script::Script;
use crate::step::Step;

/// Owns the cursor into the script and the single state transition.
/// The cursor lives in `0..script.len()` and only `advance` and `seek`
/// move it; the step ring has no terminal state, a tap on the last
/// step wraps back to the first.
pub struct StepController<H: Haptics> {
    script: Script,
    cursor: usize,
    haptics: H,
}

impl<H: Haptics> StepController<H> {
    pub fn new(script: Script, haptics: H) -> Self {
        Self { script, cursor: 0, haptics }
    }

    pub fn current(&self) -> &Step {
        self.script.step_at(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step_count(&self) -> usize {
        self.script.len()
    }

    /// Jump straight to a step without side effects. Debugging aid for
    /// starting a session mid-script; indexes wrap.
    pub fn seek(&mut self, index: usize) {
        self.cursor = index % self.script.len();
    }

    /// The tap transition: move to the next step (wrapping), then pulse
    /// the haptics once if the newly current step asks for it.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.script.len();
        debug!(cursor = self.cursor, "advanced to next step");
        if self.current().enable_vibration {
            self.haptics.play_notification();
        }
    }

    /// Called once when the view becomes visible: the initial step gets
    /// the same vibration treatment a step entered via `advance` would.
    pub fn on_activate(&mut self) {
        if self.current().enable_vibration {
            self.haptics.play_notification();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingHaptics {
        pulses: usize,
    }

    impl Haptics for CountingHaptics {
        fn play_notification(&mut self) {
            self.pulses += 1;
        }
    }

    fn controller(steps: Vec<Step>) -> StepController<CountingHaptics> {
        let script = Script::new(steps).unwrap();
        StepController::new(script, CountingHaptics { pulses: 0 })
    }

    fn plain_steps(count: usize) -> Vec<Step> {
        (0..count).map(|_| Step::default()).collect()
    }

    #[test]
    fn advance_wraps_from_last_step_to_first() {
        let mut c = controller(plain_steps(3));
        c.seek(2);
        c.advance();
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn advancing_length_times_returns_to_start() {
        for start in 0..4 {
            let mut c = controller(plain_steps(4));
            c.seek(start);
            for _ in 0..4 {
                c.advance();
            }
            assert_eq!(c.cursor(), start);
        }
    }

    #[test]
    fn cursor_stays_in_range() {
        let mut c = controller(plain_steps(5));
        for _ in 0..37 {
            c.advance();
            assert!(c.cursor() < c.step_count());
        }
    }

    #[test]
    fn single_step_script_loops_on_itself() {
        let mut c = controller(plain_steps(1));
        c.advance();
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn advance_pulses_once_when_new_step_vibrates() {
        let mut c = controller(vec![
            Step::default(),
            Step { enable_vibration: true, ..Step::default() },
            Step::default(),
        ]);
        c.advance(); // lands on vibrating step 1
        assert_eq!(c.haptics.pulses, 1);
        c.advance(); // lands on quiet step 2
        assert_eq!(c.haptics.pulses, 1);
        c.advance(); // wraps to quiet step 0
        assert_eq!(c.haptics.pulses, 1);
        c.advance(); // back on step 1
        assert_eq!(c.haptics.pulses, 2);
    }

    #[test]
    fn on_activate_pulses_only_for_vibrating_initial_step() {
        let mut quiet = controller(plain_steps(2));
        quiet.on_activate();
        assert_eq!(quiet.haptics.pulses, 0);

        let mut buzzing = controller(vec![
            Step { enable_vibration: true, ..Step::default() },
            Step::default(),
        ]);
        buzzing.on_activate();
        assert_eq!(buzzing.haptics.pulses, 1);
    }

    #[test]
    fn current_reflects_seek_position() {
        let mut c = controller(vec![
            Step { text: "a", ..Step::default() },
            Step { text: "b", ..Step::default() },
            Step { text: "c", ..Step::default() },
        ]);
        for (i, expected) in ["a", "b", "c"].iter().enumerate() {
            c.seek(i);
            assert_eq!(c.current().text, *expected);
        }
    }
}
