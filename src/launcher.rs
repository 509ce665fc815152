use crate::section::SectionId;
use std::time::{Duration, Instant};

pub const DEFAULT_LAUNCH_DELAY_MS: u64 = 1000;

// The "BOOTING SYSTEM..." overlay shown between picking a section in the
// sidebar and the section-select stimulus reaching the sequencer.
#[derive(Debug, Clone)]
pub struct Launcher {
    delay: Duration,
    pending: Option<(SectionId, Instant)>, // (section, due)
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LAUNCH_DELAY_MS))
    }
}

impl Launcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Starts launching `id`. A request while another launch is running is
    /// ignored.
    pub fn request(&mut self, id: SectionId, now: Instant) {
        if let Some((busy, _)) = self.pending {
            log::debug!("Launch of {:?} ignored: {:?} still launching", id, busy);
            return;
        }
        log::debug!("Launching {:?}", id);
        self.pending = Some((id, now + self.delay));
    }

    /// Returns the section whose launch delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<SectionId> {
        match self.pending {
            Some((id, due)) if due <= now => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        if let Some((id, _)) = self.pending.take() {
            log::debug!("Launch of {:?} cancelled", id);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, due)| due)
    }

    /// Fraction of the launch delay already elapsed, for the progress blocks.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.pending {
            Some((_, due)) if !self.delay.is_zero() => {
                let remaining = due.saturating_duration_since(now).as_secs_f32();
                (1.0 - remaining / self.delay.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}
