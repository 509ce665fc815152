use serde::{Deserialize, Serialize};

// Represents the current high-level state of the application UI
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Initialising, // App is starting, building the scene and particle field
    Desk,         // The interactive retro computer
    Portfolio,    // The classic scrolling portfolio page
    About,        // Showing the about screen
}

// Which view the app opens on, saved in the config
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum StartView {
    #[default]
    Desk,
    Portfolio,
}

impl From<StartView> for State {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Desk => State::Desk,
            StartView::Portfolio => State::Portfolio,
        }
    }
}
