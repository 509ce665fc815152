use crate::about;
use crate::content::{SectionEntry, PROFILE, PROJECTS, SKILLS, TECHNOLOGIES};
use crate::scene::{self, HitMap, Hotspot, Projector};
use crate::state::State;
use crate::util::{copyright_line, format_clock, hex_color, with_opacity};
use crate::{RetroFolio, PROGRAM_TITLE};
use chrono::Local;
use eframe::egui::{
    self, Align, Align2, Color32, Context, FontId, Painter, RichText, ScrollArea, Sense, Ui,
};
use std::time::Instant;

const BACKGROUND: Color32 = Color32::from_rgb(9, 9, 20);
const SCREEN_GREEN: Color32 = Color32::from_rgb(0, 255, 0);
const TERMINAL_GREEN: Color32 = Color32::from_rgb(74, 222, 128);
const CLOSE_RED: Color32 = Color32::from_rgb(248, 113, 113);
const DRAG_SPEED: f32 = 0.005; // rad per point
const ZOOM_SPEED: f32 = 0.002;
const LAUNCH_BLOCKS: usize = 10;

/// Headings on the classic page that buttons can jump to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PageAnchor {
    About,
    Skills,
    Projects,
    Contact,
}

// Keep UI event handlers associated with RetroFolio
impl RetroFolio {
    fn switch_view(&mut self, view: State) {
        log::info!("Switching view to {:?}.", view);
        self.state = view;
        self.home = view;
    }
}

// --- Desk view ---

pub(crate) fn draw_desk(app: &mut RetroFolio, ctx: &Context, now: Instant) {
    let elapsed = app.elapsed(now);
    let powered = app.display().powered;

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BACKGROUND))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

            if response.dragged() {
                let delta = response.drag_delta();
                app.camera.drag(delta.x * DRAG_SPEED, delta.y * DRAG_SPEED);
            }
            if response.hovered() {
                let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                if scroll != 0.0 {
                    app.camera.zoom((-scroll * ZOOM_SPEED).exp());
                }
            }

            let projector = Projector::new(&app.camera, response.rect);
            let parts = scene::build_computer(powered, elapsed);
            app.hits = scene::paint(
                &painter,
                &projector,
                &app.stars,
                &app.particles,
                &parts,
                scene::sway_angle(elapsed),
                elapsed,
            );
            draw_screen_text(&painter, &app.hits, &app.display().screen_text, powered);

            if let Some(pos) = response.hover_pos() {
                if app.hits.hit(pos).is_some() {
                    ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                }
            }
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    match app.hits.hit(pos) {
                        Some(Hotspot::Screen) => app.console.screen_click(now),
                        Some(Hotspot::Keyboard) => app.console.keyboard_click(now),
                        None => {}
                    }
                }
            }
        });

    if !powered {
        draw_instructions(app, ctx);
    } else if app.console.is_launching() {
        draw_launch_screen(app, ctx, now);
    } else {
        draw_menu_bar(app, ctx, now);
        draw_sidebar(app, ctx, now);
        draw_content(app, ctx);
    }
}

/// Writes the sequencer text onto the projected monitor screen.
fn draw_screen_text(painter: &Painter, hits: &HitMap, text: &str, powered: bool) {
    let Some(bounds) = hits.bounds(Hotspot::Screen) else {
        return;
    };
    let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(1).max(1) as f32;
    let lines = text.lines().count().max(1) as f32;
    let size = (bounds.width() * 0.85 / (widest * 0.62))
        .min(bounds.height() * 0.85 / (lines * 1.3))
        .clamp(4.0, 18.0);
    let color = if powered {
        SCREEN_GREEN
    } else {
        with_opacity(SCREEN_GREEN, 0.35)
    };
    painter.text(
        bounds.center(),
        Align2::CENTER_CENTER,
        text,
        FontId::monospace(size),
        color,
    );
}

fn draw_instructions(app: &mut RetroFolio, ctx: &Context) {
    egui::Area::new(egui::Id::new("instructions"))
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -32.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).inner_margin(16.0).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("PORTFOLIO OS").monospace().strong());
                    ui.label("Click on the computer screen to boot up the system");
                    ui.small("Drag to look around, scroll to zoom, ESC to shut down");
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("Classic view").clicked() {
                            app.switch_view(State::Portfolio);
                        }
                        if ui.button("About").clicked() {
                            app.state = State::About;
                        }
                    });
                });
            });
        });
}

fn draw_launch_screen(app: &RetroFolio, ctx: &Context, now: Instant) {
    let screen = ctx.screen_rect();
    let progress = app.console.launch_progress(now);
    egui::Area::new(egui::Id::new("launch_screen"))
        .fixed_pos(screen.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            // Swallow clicks while launching
            let (rect, _) = ui.allocate_exact_size(screen.size(), Sense::click());
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, Color32::from_black_alpha(230));
            painter.text(
                rect.center() - egui::vec2(0.0, 30.0),
                Align2::CENTER_CENTER,
                "BOOTING SYSTEM...",
                FontId::monospace(24.0),
                TERMINAL_GREEN,
            );
            let step = 16.0;
            let left = rect.center().x - step * LAUNCH_BLOCKS as f32 / 2.0;
            for i in 0..LAUNCH_BLOCKS {
                let lit = (i as f32 + 0.5) / LAUNCH_BLOCKS as f32 <= progress;
                let block = egui::Rect::from_min_size(
                    egui::pos2(left + i as f32 * step, rect.center().y + 10.0),
                    egui::vec2(12.0, 12.0),
                );
                let alpha = if lit { 1.0 } else { 0.3 };
                painter.rect_filled(block, 0.0, with_opacity(TERMINAL_GREEN, alpha));
            }
        });
}

fn draw_menu_bar(app: &mut RetroFolio, ctx: &Context, now: Instant) {
    let width = ctx.screen_rect().width() - 32.0;
    egui::Area::new(egui::Id::new("menu_bar"))
        .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).inner_margin(12.0).show(ui, |ui| {
                ui.set_width(width - 24.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("PORTFOLIO_OS v1.0")
                            .monospace()
                            .color(TERMINAL_GREEN),
                    );
                    ui.label(RichText::new(format_clock(&Local::now())).small().weak());
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        if ui
                            .button(RichText::new("X").color(CLOSE_RED))
                            .on_hover_text("Shut down")
                            .clicked()
                        {
                            app.console.close(now);
                        }
                        if ui.button("About").clicked() {
                            app.state = State::About;
                        }
                    });
                });
            });
        });
}

fn draw_sidebar(app: &mut RetroFolio, ctx: &Context, now: Instant) {
    let active = app.display().active_section;
    let entries: Vec<SectionEntry> = app.catalog.iter().copied().collect();
    let mut picked = None;

    egui::Area::new(egui::Id::new("sidebar"))
        .anchor(Align2::LEFT_TOP, egui::vec2(16.0, 84.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).inner_margin(16.0).show(ui, |ui| {
                ui.set_width(220.0);
                ui.heading("Navigation");
                ui.add_space(8.0);
                for entry in &entries {
                    let label = RichText::new(format!("■  {}", entry.id))
                        .color(hex_color(entry.accent));
                    let button = egui::Button::new(label)
                        .selected(active == Some(entry.id))
                        .min_size(egui::vec2(220.0, 0.0));
                    // Switching needs a shutdown first
                    if ui.add_enabled(active.is_none(), button).clicked() {
                        picked = Some(entry.id);
                    }
                }
            });
        });

    if let Some(id) = picked {
        app.console.pick_section(id, now);
    }
}

fn draw_content(app: &RetroFolio, ctx: &Context) {
    egui::Area::new(egui::Id::new("content"))
        .anchor(Align2::CENTER_CENTER, egui::vec2(130.0, 40.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).inner_margin(24.0).show(ui, |ui| {
                ui.set_min_size(egui::vec2(520.0, 420.0));
                match app.display().active_section {
                    Some(id) => {
                        ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
                            ui.label(
                                RichText::new(app.catalog.text(id))
                                    .monospace()
                                    .color(TERMINAL_GREEN),
                            );
                        });
                    }
                    None => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(120.0);
                            ui.heading("Welcome to Portfolio OS");
                            ui.label("Select a section from the navigation menu to get started.");
                        });
                    }
                }
            });
        });
}

// --- Classic portfolio page ---

pub(crate) fn draw_portfolio(app: &mut RetroFolio, ctx: &Context) {
    egui::TopBottomPanel::top("portfolio_nav").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong(PROFILE.name);
            ui.separator();
            for (anchor, label) in [
                (PageAnchor::About, "About"),
                (PageAnchor::Skills, "Skills"),
                (PageAnchor::Projects, "Projects"),
                (PageAnchor::Contact, "Contact"),
            ] {
                if ui.link(label).clicked() {
                    app.scroll_target = Some(anchor);
                }
            }
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Desk view").clicked() {
                    app.switch_view(State::Desk);
                }
                if ui.button("About").clicked() {
                    app.state = State::About;
                }
            });
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(900.0);
                    draw_hero(app, ui);
                    draw_about_section(app, ui);
                    draw_skills_section(app, ui);
                    draw_projects_section(app, ui);
                    draw_contact_section(app, ui);
                    draw_footer(ui);
                });
            });
    });
}

// Heading that scrolls into view when its anchor was requested
fn section_heading(app: &mut RetroFolio, ui: &mut Ui, anchor: PageAnchor, title: &str) {
    ui.add_space(48.0);
    let response = ui.heading(RichText::new(title).size(28.0));
    if app.scroll_target == Some(anchor) {
        response.scroll_to_me(Some(Align::TOP));
        app.scroll_target = None;
    }
    ui.add_space(12.0);
}

fn draw_hero(app: &mut RetroFolio, ui: &mut Ui) {
    ui.add_space(96.0);
    ui.label(RichText::new(PROFILE.name).size(48.0).strong());
    ui.label(RichText::new(PROFILE.role).size(22.0).color(hex_color("#06B6D4")));
    ui.add_space(12.0);
    ui.label(PROFILE.tagline);
    ui.add_space(24.0);
    ui.horizontal(|ui| {
        if ui.button("View My Work").clicked() {
            app.scroll_target = Some(PageAnchor::Projects);
        }
        if ui.button("Get In Touch").clicked() {
            app.scroll_target = Some(PageAnchor::Contact);
        }
    });
    ui.add_space(48.0);
}

fn draw_about_section(app: &mut RetroFolio, ui: &mut Ui) {
    section_heading(app, ui, PageAnchor::About, "About Me");
    for paragraph in PROFILE.bio {
        ui.label(*paragraph);
        ui.add_space(6.0);
    }
}

fn draw_skills_section(app: &mut RetroFolio, ui: &mut Ui) {
    section_heading(app, ui, PageAnchor::Skills, "Skills & Expertise");
    egui::Grid::new("skills_grid")
        .num_columns(3)
        .spacing([16.0, 10.0])
        .show(ui, |ui| {
            for skill in SKILLS {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 14.0, hex_color(skill.color));
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    skill.name.chars().next().unwrap_or(' '),
                    FontId::proportional(14.0),
                    Color32::WHITE,
                );
                ui.label(skill.name);
                ui.add(
                    egui::ProgressBar::new(skill.level as f32 / 100.0)
                        .desired_width(320.0)
                        .text(format!("{}%", skill.level)),
                );
                ui.end_row();
            }
        });
    ui.add_space(24.0);
    ui.label(RichText::new("Technologies I Work With").strong());
    ui.horizontal_wrapped(|ui| {
        for tech in TECHNOLOGIES {
            chip(ui, tech);
        }
    });
}

fn draw_projects_section(app: &mut RetroFolio, ui: &mut Ui) {
    section_heading(app, ui, PageAnchor::Projects, "Featured Projects");
    for project in PROJECTS {
        egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(project.title).size(20.0).strong());
                if project.featured {
                    ui.label(RichText::new("Featured").color(hex_color("#8B5CF6")));
                }
            });
            ui.label(project.description);
            ui.horizontal_wrapped(|ui| {
                for tech in project.technologies {
                    chip(ui, tech);
                }
            });
            ui.horizontal(|ui| {
                ui.hyperlink_to("Code", project.code_url);
                ui.hyperlink_to("Live Demo", project.live_url);
            });
        });
        ui.add_space(12.0);
    }
}

fn draw_contact_section(app: &mut RetroFolio, ui: &mut Ui) {
    section_heading(app, ui, PageAnchor::Contact, "Get In Touch");
    ui.label("Currently open for new opportunities and exciting projects!");
    ui.hyperlink_to(PROFILE.email, format!("mailto:{}", PROFILE.email));
    ui.hyperlink_to("GitHub", PROFILE.github);
    ui.hyperlink_to("LinkedIn", PROFILE.linkedin);
}

fn draw_footer(ui: &mut Ui) {
    ui.add_space(48.0);
    ui.separator();
    ui.small(copyright_line(&Local::now(), PROFILE.name));
    ui.add_space(16.0);
}

fn chip(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(8.0)
        .inner_margin(egui::vec2(8.0, 2.0))
        .show(ui, |ui| {
            ui.small(text);
        });
}

// --- About screen ---

pub(crate) fn draw_about_screen(app: &mut RetroFolio, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.state = app.home;
        }
    });
}
