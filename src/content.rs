use crate::section::SectionId;

// Static reference data. Nothing in here is derived or mutated at runtime.

/// One panel of the fake OS: sidebar accent colour plus the text shown in
/// the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: SectionId,
    pub accent: &'static str,
    pub text: &'static str,
}

/// Lookup table from `SectionId` to its panel. Handed to the view layer,
/// the sequencer only ever sees the id.
#[derive(Debug, Clone)]
pub struct SectionCatalog {
    entries: [SectionEntry; 4],
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self {
            entries: [
                SectionEntry { id: SectionId::About, accent: "#4F46E5", text: ABOUT_TEXT },
                SectionEntry { id: SectionId::Skills, accent: "#06B6D4", text: SKILLS_TEXT },
                SectionEntry { id: SectionId::Projects, accent: "#8B5CF6", text: PROJECTS_TEXT },
                SectionEntry { id: SectionId::Contact, accent: "#10B981", text: CONTACT_TEXT },
            ],
        }
    }
}

impl SectionCatalog {
    pub fn entry(&self, id: SectionId) -> &SectionEntry {
        // Entries are stored in `SectionId::ALL` order
        let idx = SectionId::ALL
            .iter()
            .position(|s| *s == id)
            .unwrap_or(0);
        &self.entries[idx]
    }

    pub fn text(&self, id: SectionId) -> &'static str {
        self.entry(id).text
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionEntry> {
        self.entries.iter()
    }
}

const ABOUT_TEXT: &str = "> ABOUT_ME.exe

Name: John Doe
Role: Full Stack Developer & 3D Enthusiast
Experience: 5+ years

Passionate developer specializing in:
• Modern web technologies
• 3D graphics and WebGL
• Interactive user experiences
• Full-stack solutions

Currently working on cutting-edge
projects that blend creativity with
technical excellence.

[PRESS ESC TO RETURN]";

const SKILLS_TEXT: &str = "> SKILLS.bat

TECHNICAL EXPERTISE:
━━━━━━━━━━━━━━━━━━━━━━━

Frontend:
• React/TypeScript     ████████████ 95%
• Three.js/WebGL       ████████████ 80%
• CSS/Tailwind         ████████████ 90%

Backend:
• Node.js/Express      ████████████ 85%
• Python/FastAPI       ████████████ 88%
• PostgreSQL           ████████████ 82%

Tools:
• Docker               ████████████ 78%
• AWS                  ████████████ 75%
• Git                  ████████████ 95%

[PRESS ESC TO RETURN]";

const PROJECTS_TEXT: &str = "> PROJECTS.dir

FEATURED PROJECTS:
━━━━━━━━━━━━━━━━━━━━━━━

E-Commerce Platform
   Tech: React, Node.js, PostgreSQL
   Status: Production Ready

3D Portfolio Website
   Tech: Three.js, React, TypeScript
   Status: You're viewing it!

Task Management App
   Tech: React Native, Socket.io
   Status: In Development

AI Chat Application
   Tech: Python, OpenAI, FastAPI
   Status: Beta Testing

[PRESS ESC TO RETURN]";

const CONTACT_TEXT: &str = "> CONTACT.info

CONTACT INFORMATION:
━━━━━━━━━━━━━━━━━━━━━━━

Email: john.doe@example.com
Phone: +1 (555) 123-4567
Location: New York, NY

SOCIAL LINKS:
• GitHub: github.com/johndoe
• LinkedIn: linkedin.com/in/johndoe
• Twitter: @johndoe_dev

AVAILABILITY:
Currently open for new opportunities
and exciting projects!

[PRESS ESC TO RETURN]";

// --- Classic portfolio page data ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "John Doe",
    role: "Full Stack Developer & 3D Enthusiast",
    tagline: "Crafting immersive digital experiences with cutting-edge technology, \
              beautiful design, and seamless functionality.",
    bio: &[
        "I'm a passionate full stack developer with over five years of experience \
         building web applications that people enjoy using.",
        "My work sits where solid engineering meets visual craft: 3D graphics, \
         interactive interfaces and the back ends that keep them running.",
    ],
    email: "john.doe@example.com",
    github: "https://github.com/johndoe",
    linkedin: "https://linkedin.com/in/johndoe",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8, // percent, 0-100
    pub color: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", level: 95, color: "#61DAFB" },
    Skill { name: "TypeScript", level: 90, color: "#3178C6" },
    Skill { name: "Node.js", level: 85, color: "#339933" },
    Skill { name: "Three.js", level: 80, color: "#000000" },
    Skill { name: "Python", level: 88, color: "#3776AB" },
    Skill { name: "PostgreSQL", level: 82, color: "#336791" },
    Skill { name: "Docker", level: 78, color: "#2496ED" },
    Skill { name: "AWS", level: 75, color: "#FF9900" },
];

pub const TECHNOLOGIES: &[&str] = &[
    "JavaScript", "HTML5", "CSS3", "Sass", "Tailwind CSS", "Redux",
    "Next.js", "Express.js", "MongoDB", "Redis", "GraphQL", "REST APIs",
    "Git", "Linux", "Webpack", "Vite", "Jest", "Cypress",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub code_url: &'static str,
    pub live_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with React, Node.js, and PostgreSQL. \
                      Features include user authentication, payment processing, and admin dashboard.",
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    Project {
        title: "3D Portfolio Website",
        description: "An interactive 3D portfolio built with Three.js and React. \
                      Showcases modern web development techniques with immersive user experience.",
        technologies: &["Three.js", "React", "TypeScript", "GSAP"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: true,
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, \
                      drag-and-drop functionality, and team collaboration features.",
        technologies: &["React", "Socket.io", "MongoDB", "Express"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
    Project {
        title: "AI Chat Application",
        description: "An intelligent chat application powered by AI with natural language \
                      processing and context-aware responses.",
        technologies: &["Python", "FastAPI", "OpenAI", "React"],
        code_url: "https://github.com",
        live_url: "https://example.com",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_entry_per_section() {
        let catalog = SectionCatalog::default();
        for id in SectionId::ALL {
            assert_eq!(catalog.entry(id).id, id);
        }
        assert_eq!(catalog.iter().count(), 4);
    }

    #[test]
    fn every_panel_explains_how_to_return() {
        let catalog = SectionCatalog::default();
        for entry in catalog.iter() {
            assert!(entry.text.ends_with("[PRESS ESC TO RETURN]"), "{:?}", entry.id);
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 2);
    }
}
