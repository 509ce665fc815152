use crate::launcher::Launcher;
use crate::section::SectionId;
use crate::sequencer::{DisplayState, Sequencer};
use std::time::Instant;

// The simulated machine as the view sees it: the sequencer plus the launch
// overlay in front of it. All user input goes through here.
pub struct Console {
    sequencer: Sequencer,
    launcher: Launcher,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(Sequencer::default(), Launcher::default())
    }
}

impl Console {
    pub fn new(sequencer: Sequencer, launcher: Launcher) -> Self {
        Self { sequencer, launcher }
    }

    pub fn display(&self) -> &DisplayState {
        self.sequencer.state()
    }

    pub fn is_launching(&self) -> bool {
        self.launcher.is_busy()
    }

    pub fn launch_progress(&self, now: Instant) -> f32 {
        self.launcher.progress(now)
    }

    pub fn screen_click(&mut self, now: Instant) {
        log::debug!("Screen clicked.");
        self.sequencer.screen_clicked(now);
    }

    pub fn keyboard_click(&mut self, now: Instant) {
        if self.launcher.is_busy() {
            log::debug!("Keyboard click ignored: application launching.");
            return;
        }
        self.sequencer.keyboard_clicked(now);
    }

    /// Sidebar pick: starts the launch overlay, the sequencer hears about it
    /// once the launch delay has passed.
    pub fn pick_section(&mut self, id: SectionId, now: Instant) {
        let display = self.sequencer.state();
        if !display.powered || display.active_section.is_some() {
            log::debug!("Section pick {:?} ignored in current state.", id);
            return;
        }
        self.launcher.request(id, now);
    }

    pub fn close(&mut self, now: Instant) {
        self.launcher.cancel();
        self.sequencer.close_requested(now);
    }

    pub fn escape(&mut self, now: Instant) {
        self.launcher.cancel();
        self.sequencer.escape_pressed(now);
    }

    /// Runs due timers. A launch never outlives the power.
    pub fn advance(&mut self, now: Instant) {
        if !self.sequencer.state().powered {
            self.launcher.cancel();
        }
        if let Some(id) = self.launcher.poll(now) {
            self.sequencer.section_icon_double_clicked(id, now);
        }
        self.sequencer.tick(now);
    }

    // Earliest pending timer of the sequencer or the launcher
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.sequencer.next_deadline(), self.launcher.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn booted(t0: Instant) -> Console {
        let mut console = Console::default();
        console.screen_click(t0);
        console.advance(t0 + Duration::from_millis(2000));
        console
    }

    #[test]
    fn keyboard_ignored_while_launching() {
        let t0 = Instant::now();
        let mut console = booted(t0);
        console.pick_section(SectionId::Skills, t0 + Duration::from_millis(2100));
        console.keyboard_click(t0 + Duration::from_millis(2200));
        assert_eq!(console.display().active_section, None);
        console.advance(t0 + Duration::from_millis(3100));
        assert_eq!(console.display().active_section, Some(SectionId::Skills));
    }

    #[test]
    fn pick_ignored_while_off() {
        let t0 = Instant::now();
        let mut console = Console::default();
        console.pick_section(SectionId::About, t0);
        assert!(!console.is_launching());
        assert_eq!(console.next_deadline(), None);
    }

    #[test]
    fn next_deadline_is_the_earliest() {
        let t0 = Instant::now();
        let mut console = booted(t0);
        assert_eq!(console.next_deadline(), None);
        console.pick_section(SectionId::About, t0 + Duration::from_millis(2500));
        assert_eq!(console.next_deadline(), Some(t0 + Duration::from_millis(3500)));
    }
}
