use chrono::{DateTime, Datelike, Local};
use eframe::egui::Color32;
use log::warn;

const FALLBACK_COLOR: Color32 = Color32::from_rgb(128, 128, 128);

/// Parses a `#RRGGBB` colour. Anything else maps to grey.
pub fn hex_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or_else(|e| {
        warn!("hex_color called with invalid colour {}: {:?}", hex, e);
        FALLBACK_COLOR
    })
}

/// Scales the RGB channels of `color` by `factor`, keeping alpha.
pub fn shade(color: Color32, factor: f32) -> Color32 {
    let f = factor.max(0.0);
    let scale = |c: u8| ((c as f32) * f).round().clamp(0.0, 255.0) as u8;
    Color32::from_rgba_unmultiplied(scale(color.r()), scale(color.g()), scale(color.b()), color.a())
}

/// Same colour with opacity `alpha` in [0, 1].
pub fn with_opacity(color: Color32, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), a)
}

/// Menu bar clock, e.g. `14:05:09`.
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Footer copyright line for the given moment.
pub fn copyright_line(now: &DateTime<Local>, owner: &str) -> String {
    format!("© {} {}. All rights reserved.", now.year(), owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(hex_color("#4F46E5"), Color32::from_rgb(0x4F, 0x46, 0xE5));
        assert_eq!(hex_color("#00ff00"), Color32::from_rgb(0, 255, 0));
        assert_eq!(hex_color("00ff00"), FALLBACK_COLOR);
        assert_eq!(hex_color("#12"), FALLBACK_COLOR);
        assert_eq!(hex_color("#zzzzzz"), FALLBACK_COLOR);
    }

    #[test]
    fn shade_scales_and_clamps() {
        let c = Color32::from_rgb(100, 200, 50);
        assert_eq!(shade(c, 0.5), Color32::from_rgb(50, 100, 25));
        assert_eq!(shade(c, 2.0), Color32::from_rgb(200, 255, 100));
        assert_eq!(shade(c, -1.0), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn opacity_sets_alpha() {
        assert_eq!(with_opacity(Color32::from_rgb(1, 2, 3), 1.0).a(), 255);
        assert_eq!(with_opacity(Color32::from_rgb(1, 2, 3), 0.0).a(), 0);
    }

    #[test]
    fn clock_and_footer_formatting() {
        let t = Local.with_ymd_and_hms(2025, 3, 4, 9, 7, 5).unwrap();
        assert_eq!(format_clock(&t), "09:07:05");
        assert_eq!(copyright_line(&t, "John Doe"), "© 2025 John Doe. All rights reserved.");
    }
}
