use crate::config::ConfigData;
use crate::console::Console;
use crate::content::SectionCatalog;
use crate::launcher::Launcher;
use crate::particles::{ParticleField, StarField};
use crate::scene::{HitMap, OrbitCamera};
use crate::sequencer::{ScreenScript, Sequencer};
use crate::state::State;
use crate::{ui, Args, RetroFolio, CONFIG_FILE_NAME};
use eframe::{egui, glow};
use fast_config::Config;
use std::process::exit;
use std::time::{Duration, Instant};

const MAX_FRAME_STEP: f32 = 0.1; // seconds

// Config file location: --config wins, then the user config dir
pub fn config_path(args: &Args) -> String {
    if let Some(path) = &args.config {
        return path.to_string_lossy().into_owned();
    }
    let config_dir = dirs::config_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string()); // Fallback to current dir
    format!("{}/{}", config_dir, CONFIG_FILE_NAME)
}

// Implementations specific to App lifecycle and top-level control
impl RetroFolio {
    pub fn new(args: &Args) -> Self {
        let config_path = config_path(args);
        let mut config = match Config::new(&config_path, ConfigData::default()) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("Error creating config file at {}: {}", config_path, e);
                exit(1)
            }
        };
        config.data.sanitize();
        log::info!("Using config file {}", config_path);

        let home = if args.portfolio {
            State::Portfolio
        } else {
            config.data.start_view.into()
        };

        Self {
            state: State::Initialising,
            home,
            started: Instant::now(),
            last_frame: None,
            console: Console::new(
                Sequencer::new(ScreenScript::default(), config.data.timings()),
                Launcher::new(config.data.launch_delay()),
            ),
            catalog: SectionCatalog::default(),
            camera: OrbitCamera::default(),
            particles: ParticleField::new(0, config.data.particle_radius, None),
            stars: StarField::new(0, None),
            hits: HitMap::default(),
            scroll_target: None,
            config,
            seed_override: args.seed,
        }
    }

    // Initialization logic called once at the start
    fn init(&mut self) {
        let seed = self.seed_override.or(self.config.data.particle_seed);
        self.particles = ParticleField::new(
            self.config.data.particle_count,
            self.config.data.particle_radius,
            seed,
        );
        self.stars = StarField::new(self.config.data.star_count, seed);
        self.state = self.home;
        log::info!(
            "Initialization complete: {} particles, {} stars. State set to {:?}.",
            self.particles.len(),
            self.stars.len(),
            self.state
        );
    }

    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        if let Some(deadline) = self.console.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    // Graceful shutdown logic
    fn shutdown_app(&mut self) {
        log::info!("Shutdown requested.");
        if let Err(e) = self.config.save() {
            log::error!("Failed to save configuration on exit: {}", e);
        } else {
            log::info!("Configuration saved.");
        }
    }
}

// Main eframe application loop
impl eframe::App for RetroFolio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|t| now.saturating_duration_since(t).as_secs_f32())
            .unwrap_or(0.0)
            .min(MAX_FRAME_STEP);
        self.last_frame = Some(now);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.console.escape(now);
        }
        // Timers run whatever the view
        self.console.advance(now);

        match self.state {
            State::Initialising => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label("Initialising...");
                    });
                });
                // Actual init logic runs once after this frame
                self.init();
                ctx.request_repaint();
            }
            State::Desk => {
                if !self.display().powered {
                    self.camera.auto_rotate(dt, self.config.data.auto_rotate_speed);
                }
                ui::draw_desk(self, ctx, now);
                // The scene never stops moving
                ctx.request_repaint_after(Duration::from_millis(16));
            }
            State::Portfolio => {
                ui::draw_portfolio(self, ctx);
                self.schedule_repaint(ctx, now);
            }
            State::About => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::draw_about_screen(self, ui);
                });
                self.schedule_repaint(ctx, now);
            }
        }
    }

    // Called when the application is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.shutdown_app();
    }
}
