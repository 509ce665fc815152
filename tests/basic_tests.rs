use retro_folio::config::ConfigData;
use retro_folio::console::Console;
use retro_folio::content::SectionCatalog;
use retro_folio::launcher::Launcher;
use retro_folio::section::SectionId;
use retro_folio::sequencer::{ScreenScript, Sequencer, Timings};
use retro_folio::state::{StartView, State};
use std::time::{Duration, Instant};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

// A machine that has finished booting and shows the desktop
fn ready_machine(t0: Instant) -> Sequencer {
    let mut seq = Sequencer::default();
    seq.activate(t0);
    seq.tick(t0 + ms(2000));
    seq
}

#[test]
fn test_config_data_default() {
    // Test that the default ConfigData carries the documented delays
    let config = ConfigData::default();

    assert_eq!(config.boot_delay_ms, 2000);
    assert_eq!(config.shutdown_delay_ms, 1500);
    assert_eq!(config.emergency_reset_delay_ms, 1000);
    assert_eq!(config.launch_delay_ms, 1000);
    assert_eq!(config.particle_count, 1000);
    assert_eq!(config.particle_radius, 30.0);
    assert_eq!(config.star_count, 3000);
    assert_eq!(config.particle_seed, None);
    assert_eq!(config.start_view, StartView::Desk);
    assert_eq!(config.timings(), Timings::default());
}

#[test]
fn test_state_enum() {
    // Test that the State enum has the expected variants
    assert_ne!(State::Initialising, State::Desk);
    assert_ne!(State::Desk, State::Portfolio);
    assert_ne!(State::Portfolio, State::About);

    // Start views map onto their states
    assert_eq!(State::from(StartView::Desk), State::Desk);
    assert_eq!(State::from(StartView::Portfolio), State::Portfolio);
}

#[test]
fn test_section_display() {
    // Test the Display implementation and tags for SectionId
    assert_eq!(format!("{}", SectionId::About), "About Me");
    assert_eq!(format!("{}", SectionId::Contact), "Contact");
    assert_eq!(SectionId::Projects.tag(), "PROJECTS");
    assert_eq!(SectionId::ALL.len(), 4);
}

#[test]
fn test_open_section_ignored_while_off() {
    // For every section, opening while powered off changes nothing
    let t0 = Instant::now();
    for id in SectionId::ALL {
        let mut seq = Sequencer::default();
        let before = seq.state().clone();
        seq.open_section(id, t0);
        assert_eq!(seq.state(), &before);
        assert_eq!(seq.pending(), None);
    }
}

#[test]
fn test_open_section_ignored_while_another_is_open() {
    // No switching between sections without closing first
    let t0 = Instant::now();
    for first in SectionId::ALL {
        for second in SectionId::ALL {
            let mut seq = ready_machine(t0);
            seq.open_section(first, t0 + ms(2500));
            let before = seq.state().clone();
            seq.open_section(second, t0 + ms(2600));
            assert_eq!(seq.state(), &before);
        }
    }
}

#[test]
fn test_activate_boots_then_ready() {
    // Boot indicator immediately, ready indicator after the delay
    let t0 = Instant::now();
    let mut seq = Sequencer::default();
    seq.activate(t0);

    assert!(seq.state().powered);
    assert!(seq.state().screen_text.contains("BOOTING"));
    assert_eq!(seq.state().active_section, None);

    seq.tick(t0 + ms(2000));
    assert!(seq.state().screen_text.contains("READY"));
    assert_eq!(seq.state().active_section, None);
}

#[test]
fn test_open_contact() {
    // Opening Contact from the desktop references it on screen right away
    let t0 = Instant::now();
    let mut seq = ready_machine(t0);
    seq.open_section(SectionId::Contact, t0 + ms(2500));

    assert_eq!(seq.state().active_section, Some(SectionId::Contact));
    assert!(seq.state().screen_text.contains("CONTACT"));
}

#[test]
fn test_close_section_shuts_down_and_resets() {
    // Closing an open section powers off, then restores the boot prompt
    let t0 = Instant::now();
    let mut seq = ready_machine(t0);
    seq.open_section(SectionId::Skills, t0 + ms(2500));
    seq.close_section(t0 + ms(3000));

    assert_eq!(seq.state().active_section, None);
    assert!(!seq.state().powered);
    assert!(seq.state().screen_text.contains("SHUTTING DOWN"));

    seq.tick(t0 + ms(4499));
    assert!(seq.state().screen_text.contains("SHUTTING DOWN"));
    seq.tick(t0 + ms(4500));
    assert_eq!(seq.state().screen_text, ScreenScript::default().boot_prompt);
}

#[test]
fn test_activate_is_idempotent() {
    // Two activations in a row look exactly like one
    let t0 = Instant::now();
    let mut once = Sequencer::default();
    once.activate(t0);

    let mut twice = Sequencer::default();
    twice.activate(t0);
    twice.activate(t0 + ms(10));

    assert_eq!(once.state(), twice.state());
    assert_eq!(once.next_deadline(), twice.next_deadline());

    once.tick(t0 + ms(2000));
    twice.tick(t0 + ms(2000));
    assert_eq!(once.state(), twice.state());
}

#[test]
fn test_stale_boot_timer_does_not_overwrite_shutdown() {
    // Open and close before the boot delay ends: the old READY timer must not fire
    let t0 = Instant::now();
    let mut seq = Sequencer::default();
    seq.activate(t0);
    seq.open_section(SectionId::About, t0 + ms(100));
    seq.close_section(t0 + ms(800));

    seq.tick(t0 + ms(2000));
    assert!(!seq.state().screen_text.contains("READY"));
    assert!(seq.state().screen_text.contains("SHUTTING DOWN"));

    seq.tick(t0 + ms(2300));
    assert_eq!(seq.state().screen_text, ScreenScript::default().boot_prompt);
}

#[test]
fn test_stale_reset_timer_does_not_overwrite_reboot() {
    // Emergency stop then reboot before the reset fires
    let t0 = Instant::now();
    let mut seq = ready_machine(t0);
    seq.escape_pressed(t0 + ms(3000));
    assert!(!seq.state().powered);

    seq.screen_clicked(t0 + ms(3200));
    seq.tick(t0 + ms(4000));
    assert!(seq.state().powered);
    assert!(seq.state().screen_text.contains("BOOTING"));

    seq.tick(t0 + ms(5200));
    assert!(seq.state().screen_text.contains("READY"));
}

#[test]
fn test_at_most_one_pending_timer() {
    // Every new transition replaces the outstanding timer
    let t0 = Instant::now();
    let mut seq = Sequencer::default();
    seq.activate(t0);
    let boot = seq.pending().unwrap();
    seq.open_section(SectionId::Projects, t0 + ms(10));
    assert_eq!(seq.pending(), None);
    seq.close_section(t0 + ms(20));
    let shutdown = seq.pending().unwrap();
    assert_ne!(boot, shutdown);
    assert_eq!(seq.next_deadline(), Some(t0 + ms(1520)));
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Activate,
    Open(SectionId),
    Close,
    Wait(u64),
}

const OPS: [Op; 8] = [
    Op::Activate,
    Op::Open(SectionId::About),
    Op::Open(SectionId::Skills),
    Op::Open(SectionId::Projects),
    Op::Open(SectionId::Contact),
    Op::Close,
    Op::Wait(1200),
    Op::Wait(2100),
];

#[test]
fn test_invariant_holds_for_all_short_sequences() {
    // Exhaustively walk every sequence of five operations
    let depth = 5;
    let total = OPS.len().pow(depth);
    for n in 0..total {
        let t0 = Instant::now();
        let mut now = t0;
        let mut seq = Sequencer::default();
        let mut code = n;
        for _ in 0..depth {
            let op = OPS[code % OPS.len()];
            code /= OPS.len();
            match op {
                Op::Activate => seq.activate(now),
                Op::Open(id) => seq.open_section(id, now),
                Op::Close => seq.close_section(now),
                Op::Wait(v) => {
                    now += ms(v);
                    seq.tick(now);
                }
            }
            let state = seq.state();
            assert!(
                state.active_section.is_none() || state.powered,
                "section open while powered off after sequence #{}",
                n
            );
            if let Some(due) = seq.next_deadline() {
                assert!(due > now, "overdue timer left pending after sequence #{}", n);
            }
        }
    }
}

#[test]
fn test_custom_timings_and_script() {
    // Delays and texts are injected, not baked in
    let script = ScreenScript {
        boot_prompt: "press any key".to_string(),
        booting: "BOOTING...".to_string(),
        ready: "READY.".to_string(),
        shutting_down: "BYE".to_string(),
        emergency_stop: "HALT".to_string(),
    };
    let timings = Timings {
        boot: ms(10),
        shutdown: ms(20),
        emergency_reset: ms(30),
    };
    let t0 = Instant::now();
    let mut seq = Sequencer::new(script, timings);
    assert_eq!(seq.state().screen_text, "press any key");

    seq.activate(t0);
    seq.tick(t0 + ms(10));
    assert_eq!(seq.state().screen_text, "READY.");

    seq.close_section(t0 + ms(10));
    assert_eq!(seq.state().screen_text, "HALT");
    seq.tick(t0 + ms(40));
    assert_eq!(seq.state().screen_text, "press any key");
}

#[test]
fn test_sidebar_launch_reaches_sequencer() {
    // Launch overlay delay followed by the section-select stimulus
    let t0 = Instant::now();
    let mut seq = ready_machine(t0);
    let mut launcher = Launcher::new(ms(1000));
    launcher.request(SectionId::Projects, t0 + ms(2500));

    assert_eq!(launcher.poll(t0 + ms(3000)), None);
    let id = launcher.poll(t0 + ms(3500)).unwrap();
    seq.section_icon_double_clicked(id, t0 + ms(3500));

    assert_eq!(seq.state().active_section, Some(SectionId::Projects));
    let catalog = SectionCatalog::default();
    assert!(catalog.text(id).starts_with("> PROJECTS.dir"));
}

#[test]
fn test_launch_dropped_when_escape_powers_off() {
    // Escape during the launch overlay: the section must never open
    let t0 = Instant::now();
    let mut console = Console::default();
    console.screen_click(t0);
    console.advance(t0 + ms(2000));
    console.pick_section(SectionId::Contact, t0 + ms(2500));
    assert!(console.is_launching());

    console.escape(t0 + ms(2800));
    console.advance(t0 + ms(3600));

    assert_eq!(console.display().active_section, None);
    assert!(!console.display().powered);
    assert!(!console.is_launching());
}

#[test]
fn test_launch_dropped_when_powered_off_behind_it() {
    // Shutdown from any path drops the launch on the next advance
    let t0 = Instant::now();
    let mut console = Console::default();
    console.screen_click(t0);
    console.advance(t0 + ms(2000));
    console.pick_section(SectionId::Projects, t0 + ms(2500));
    console.close(t0 + ms(2600));
    console.advance(t0 + ms(5000));

    assert_eq!(console.display().active_section, None);
    assert!(!console.display().powered);
    assert_eq!(console.display().screen_text, ScreenScript::default().boot_prompt);
    assert_eq!(console.next_deadline(), None);
}
