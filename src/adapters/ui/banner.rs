//! Farcaster-purple ASCII banner with gradient (VIBE CHECK).
//! Uses figlet's bundled standard font.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Farcaster Purple (#8a63d2).
pub const FARCASTER_PURPLE: (u8, u8, u8) = (0x8a, 0x63, 0xd2);
/// Rose (#f43f5e).
pub const ROSE: (u8, u8, u8) = (0xf4, 0x3f, 0x5e);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn banner_art() -> String {
    let Ok(font) = FIGfont::standard() else {
        return "VIBE CHECK\n".to_string();
    };
    font.convert("VIBE CHECK")
        .map(|figure| figure.to_string())
        .unwrap_or_else(|| "VIBE CHECK\n".to_string())
}

/// Prints the welcome banner with a purple → rose gradient, then the version line.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(FARCASTER_PURPLE, ROSE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: FARCASTER_PURPLE.0,
        g: FARCASTER_PURPLE.1,
        b: FARCASTER_PURPLE.2,
    }));
    let _ = out.execute(Print(format!(
        "Farcaster Follow Manager v{}\r\nFind who doesn't follow you back and check their vibe with Gemini.\r\n",
        version
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
