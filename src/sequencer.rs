// Display sequencer for the retro computer. Owns the (powered,
// active_section, screen_text) triple and performs the only transitions
// allowed on it. Follow-ups run off a single pending timer that every state
// change cancels first. Time is passed in; call `Sequencer::tick` per frame.

use crate::section::SectionId;
use log::{debug, info};
use std::time::{Duration, Instant};

pub const DEFAULT_BOOT_DELAY_MS: u64 = 2000;
pub const DEFAULT_SHUTDOWN_DELAY_MS: u64 = 1500;
pub const DEFAULT_EMERGENCY_RESET_DELAY_MS: u64 = 1000;

/// Texts the sequencer writes to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenScript {
    pub boot_prompt: String,
    pub booting: String,
    pub ready: String,
    pub shutting_down: String,
    pub emergency_stop: String,
}

impl Default for ScreenScript {
    fn default() -> Self {
        Self {
            boot_prompt: "PORTFOLIO OS v1.0\n\nClick screen to boot system\n\n\
                          > Power button located\n  on right side of monitor"
                .to_string(),
            booting: "PORTFOLIO OS v1.0\n\nBOOTING SYSTEM...\n\n> Loading desktop environment\n\
                      > Initializing applications\n> System ready!"
                .to_string(),
            ready: "PORTFOLIO OS v1.0\n\nSYSTEM READY\n\nDouble-click desktop icons\n\
                    to open applications"
                .to_string(),
            shutting_down: "SHUTTING DOWN...\n\nClosing applications\nSaving data\nPowering off"
                .to_string(),
            emergency_stop: "SYSTEM SHUTDOWN...".to_string(),
        }
    }
}

impl ScreenScript {
    pub fn opening(&self, id: SectionId) -> String {
        format!("OPENING {}.exe\n\nLoading application...\nPlease wait...", id.tag())
    }
}

/// Delays of the scheduled follow-up transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub boot: Duration,
    pub shutdown: Duration,
    pub emergency_reset: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            boot: Duration::from_millis(DEFAULT_BOOT_DELAY_MS),
            shutdown: Duration::from_millis(DEFAULT_SHUTDOWN_DELAY_MS),
            emergency_reset: Duration::from_millis(DEFAULT_EMERGENCY_RESET_DELAY_MS),
        }
    }
}

/// Observable state of the simulated machine.
///
/// `active_section.is_some()` implies `powered`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub powered: bool,
    pub active_section: Option<SectionId>,
    pub screen_text: String,
}

/// Identifies one scheduled follow-up. Handles are never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum FollowUp {
    ShowReady,
    ShowBootPrompt,
}

#[derive(Debug, Clone)]
struct PendingTransition {
    handle: TimerHandle,
    due: Instant,
    follow_up: FollowUp,
}

pub struct Sequencer {
    state: DisplayState,
    script: ScreenScript,
    timings: Timings,
    pending: Option<PendingTransition>,
    next_handle: u64,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(ScreenScript::default(), Timings::default())
    }
}

impl Sequencer {
    pub fn new(script: ScreenScript, timings: Timings) -> Self {
        let state = DisplayState {
            powered: false,
            active_section: None,
            screen_text: script.boot_prompt.clone(),
        };
        Self {
            state,
            script,
            timings,
            pending: None,
            next_handle: 0,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn script(&self) -> &ScreenScript {
        &self.script
    }

    /// Handle of the outstanding follow-up, if any.
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|p| p.handle)
    }

    /// When the outstanding follow-up is due. Used to schedule repaints.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    // --- Transitions ---

    /// Powers the machine on. Ignored if already powered.
    pub fn activate(&mut self, now: Instant) {
        if self.state.powered {
            debug!("activate ignored: already powered");
            return;
        }
        self.cancel_pending();
        self.state.powered = true;
        self.state.screen_text = self.script.booting.clone();
        self.schedule(now, self.timings.boot, FollowUp::ShowReady);
        info!("System booting.");
    }

    /// Opens a section. Only valid while powered with no section open.
    pub fn open_section(&mut self, id: SectionId, _now: Instant) {
        if !self.state.powered {
            debug!("open_section({:?}) ignored: not powered", id);
            return;
        }
        if let Some(open) = self.state.active_section {
            debug!("open_section({:?}) ignored: {:?} already open", id, open);
            return;
        }
        self.cancel_pending();
        self.state.active_section = Some(id);
        self.state.screen_text = self.script.opening(id);
        info!("Opened section {:?}.", id);
    }

    /// Closes the open section and powers down. With no section open this
    /// is the emergency stop: the machine is forced off regardless.
    pub fn close_section(&mut self, now: Instant) {
        match self.state.active_section.take() {
            Some(id) => {
                self.cancel_pending();
                self.state.powered = false;
                self.state.screen_text = self.script.shutting_down.clone();
                self.schedule(now, self.timings.shutdown, FollowUp::ShowBootPrompt);
                info!("Closed section {:?}, shutting down.", id);
            }
            None if self.state.powered => {
                self.cancel_pending();
                self.state.powered = false;
                self.state.screen_text = self.script.emergency_stop.clone();
                self.schedule(now, self.timings.emergency_reset, FollowUp::ShowBootPrompt);
                info!("Emergency stop.");
            }
            None => debug!("close_section ignored: already powered off"),
        }
    }

    /// Fires the pending follow-up if it is due. Returns true if the state
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match &self.pending {
            Some(p) => p.due <= now,
            None => false,
        };
        if !due {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        debug!("Timer {:?} fired: {:?}", pending.handle, pending.follow_up);
        self.state.screen_text = match pending.follow_up {
            FollowUp::ShowReady => self.script.ready.clone(),
            FollowUp::ShowBootPrompt => self.script.boot_prompt.clone(),
        };
        true
    }

    // --- Inbound stimuli ---

    pub fn screen_clicked(&mut self, now: Instant) {
        self.activate(now);
    }

    pub fn section_icon_double_clicked(&mut self, id: SectionId, now: Instant) {
        self.open_section(id, now);
    }

    pub fn keyboard_clicked(&mut self, now: Instant) {
        self.open_section(SectionId::About, now);
    }

    pub fn escape_pressed(&mut self, now: Instant) {
        self.close_section(now);
    }

    pub fn close_requested(&mut self, now: Instant) {
        self.close_section(now);
    }

    // --- Timer bookkeeping ---

    fn schedule(&mut self, now: Instant, delay: Duration, follow_up: FollowUp) {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        debug!("Scheduling {:?} as {:?} in {:?}", follow_up, handle, delay);
        self.pending = Some(PendingTransition {
            handle,
            due: now + delay,
            follow_up,
        });
    }

    fn cancel_pending(&mut self) {
        if let Some(p) = self.pending.take() {
            debug!("Cancelled timer {:?} ({:?})", p.handle, p.follow_up);
        }
    }
}
