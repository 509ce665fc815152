use serde::{Deserialize, Serialize};

// The four content panels the fake OS can open
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Upper-case tag used in screen messages, e.g. `OPENING CONTACT.exe`.
    pub fn tag(&self) -> &'static str {
        match self {
            SectionId::About => "ABOUT",
            SectionId::Skills => "SKILLS",
            SectionId::Projects => "PROJECTS",
            SectionId::Contact => "CONTACT",
        }
    }
}

// How the section is displayed in the sidebar
impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SectionId::About => write!(f, "About Me"),
            SectionId::Skills => write!(f, "Skills"),
            SectionId::Projects => write!(f, "Projects"),
            SectionId::Contact => write!(f, "Contact"),
        }
    }
}
