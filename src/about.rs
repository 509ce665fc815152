use crate::content::PROFILE;

pub fn about() -> Vec<String> {
    vec![
        "A personal portfolio presented as a retro desktop computer. \
        Click the monitor to boot Portfolio OS, then open its applications \
        to browse the content.".to_string(),
        "\n".to_string(),
        "Press ESC at any time to shut the system down.".to_string(),
        "License: MIT".to_string(),
        format!("Author: {}", PROFILE.name),
        PROFILE.github.to_string(),
    ]
}
