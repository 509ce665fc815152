// Export modules for testing
pub mod about;
pub mod app;
pub mod config;
pub mod console;
pub mod content;
pub mod launcher;
pub mod particles;
pub mod scene;
pub mod section;
pub mod sequencer;
pub mod state;
pub mod ui;
pub mod util;

// Re-export main types for testing
pub use crate::config::ConfigData;
pub use crate::console::Console;
pub use crate::section::SectionId;
pub use crate::sequencer::{DisplayState, Sequencer};
pub use crate::state::State;

// Constants
pub const PROGRAM_TITLE: &str = "Portfolio OS";
pub const INITIAL_WIDTH: f32 = 1280.0;
pub const INITIAL_HEIGHT: f32 = 800.0;
pub const CONFIG_FILE_NAME: &str = "retro_folio.json";

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the one in the user config directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the particle field, overrides the config
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start on the classic portfolio page
    #[arg(short, long, default_value_t = false)]
    pub portfolio: bool,
}

pub use fast_config::Config;

// The main application struct
pub struct RetroFolio {
    // State
    pub state: State,
    pub home: State,    // Where Initialising and About lead back to
    pub started: Instant,
    pub last_frame: Option<Instant>,

    // The simulated machine
    pub console: Console,
    pub catalog: content::SectionCatalog,

    // 3D view
    pub camera: scene::OrbitCamera,
    pub particles: particles::ParticleField,
    pub stars: particles::StarField,
    pub hits: scene::HitMap, // Hotspot outlines from the last painted frame

    // Classic page: section to scroll to on the next frame
    pub scroll_target: Option<ui::PageAnchor>,

    // Configuration
    pub config: Config<ConfigData>,
    pub seed_override: Option<u64>,
}

impl RetroFolio {
    // Elapsed scene time in seconds
    pub fn elapsed(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started).as_secs_f32()
    }

    // Current machine state, read by the view
    pub fn display(&self) -> &DisplayState {
        self.console.display()
    }
}
