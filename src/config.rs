use crate::launcher::DEFAULT_LAUNCH_DELAY_MS;
use crate::sequencer::{
    Timings, DEFAULT_BOOT_DELAY_MS, DEFAULT_EMERGENCY_RESET_DELAY_MS, DEFAULT_SHUTDOWN_DELAY_MS,
};
use crate::state::StartView;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PARTICLE_COUNT: usize = 1000;
pub const DEFAULT_PARTICLE_RADIUS: f32 = 30.0;
pub const DEFAULT_AUTO_ROTATE_SPEED: f32 = 0.3;
pub const MAX_PARTICLE_COUNT: usize = 20_000;
pub const DEFAULT_STAR_COUNT: usize = 3000;

// Configuration data saved to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigData {
    #[serde(default = "default_boot_delay")]
    pub boot_delay_ms: u64,
    #[serde(default = "default_shutdown_delay")]
    pub shutdown_delay_ms: u64,
    #[serde(default = "default_emergency_reset_delay")]
    pub emergency_reset_delay_ms: u64,
    #[serde(default = "default_launch_delay")]
    pub launch_delay_ms: u64,
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    #[serde(default = "default_particle_radius")]
    pub particle_radius: f32,
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    #[serde(default)] // None means a fresh field every run
    pub particle_seed: Option<u64>,
    #[serde(default = "default_auto_rotate_speed")]
    pub auto_rotate_speed: f32,
    #[serde(default)]
    pub start_view: StartView,
}

fn default_boot_delay() -> u64 { DEFAULT_BOOT_DELAY_MS }
fn default_shutdown_delay() -> u64 { DEFAULT_SHUTDOWN_DELAY_MS }
fn default_emergency_reset_delay() -> u64 { DEFAULT_EMERGENCY_RESET_DELAY_MS }
fn default_launch_delay() -> u64 { DEFAULT_LAUNCH_DELAY_MS }
fn default_particle_count() -> usize { DEFAULT_PARTICLE_COUNT }
fn default_star_count() -> usize { DEFAULT_STAR_COUNT }
fn default_particle_radius() -> f32 { DEFAULT_PARTICLE_RADIUS }
fn default_auto_rotate_speed() -> f32 { DEFAULT_AUTO_ROTATE_SPEED }

// Default values for a new configuration
impl Default for ConfigData {
    fn default() -> Self {
        Self {
            boot_delay_ms: DEFAULT_BOOT_DELAY_MS,
            shutdown_delay_ms: DEFAULT_SHUTDOWN_DELAY_MS,
            emergency_reset_delay_ms: DEFAULT_EMERGENCY_RESET_DELAY_MS,
            launch_delay_ms: DEFAULT_LAUNCH_DELAY_MS,
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            star_count: DEFAULT_STAR_COUNT,
            particle_seed: None,
            auto_rotate_speed: DEFAULT_AUTO_ROTATE_SPEED,
            start_view: StartView::Desk,
        }
    }
}

impl ConfigData {
    pub fn timings(&self) -> Timings {
        Timings {
            boot: Duration::from_millis(self.boot_delay_ms),
            shutdown: Duration::from_millis(self.shutdown_delay_ms),
            emergency_reset: Duration::from_millis(self.emergency_reset_delay_ms),
        }
    }

    pub fn launch_delay(&self) -> Duration {
        Duration::from_millis(self.launch_delay_ms)
    }

    /// Clamps hand-edited values back into a usable range.
    pub fn sanitize(&mut self) {
        if self.particle_count > MAX_PARTICLE_COUNT {
            log::warn!(
                "particle_count {} too large, clamping to {}",
                self.particle_count, MAX_PARTICLE_COUNT
            );
            self.particle_count = MAX_PARTICLE_COUNT;
        }
        if self.star_count > MAX_PARTICLE_COUNT {
            log::warn!(
                "star_count {} too large, clamping to {}",
                self.star_count, MAX_PARTICLE_COUNT
            );
            self.star_count = MAX_PARTICLE_COUNT;
        }
        if !self.particle_radius.is_finite() || self.particle_radius <= 0.0 {
            log::warn!(
                "Invalid particle_radius {}, using {}",
                self.particle_radius, DEFAULT_PARTICLE_RADIUS
            );
            self.particle_radius = DEFAULT_PARTICLE_RADIUS;
        }
        if !self.auto_rotate_speed.is_finite() {
            log::warn!("Invalid auto_rotate_speed, using {}", DEFAULT_AUTO_ROTATE_SPEED);
            self.auto_rotate_speed = DEFAULT_AUTO_ROTATE_SPEED;
        }
    }
}
