//! Coloured terminal output for check results

use owo_colors::{OwoColorize, colors::css};

/// Detects whether stdout should receive colour codes
fn color_enabled() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

#[derive(Clone, Copy)]
enum Tone {
    Pass,
    Fail,
    Heading,
    Note,
}

fn paint(text: &str, tone: Tone) -> String {
    if !color_enabled() {
        return text.to_string();
    }
    match tone {
        Tone::Pass => text.fg::<css::Green>().to_string(),
        Tone::Fail => text.fg::<css::Orange>().to_string(),
        Tone::Heading => text.fg::<css::LightBlue>().to_string(),
        Tone::Note => text.dimmed().to_string(),
    }
}

/// Extension trait for colouring report lines
pub trait Colorize {
    /// A check that passed (green)
    fn pass(&self) -> String;
    /// A check that found violations (amber)
    fn fail(&self) -> String;
    /// A section heading (blue)
    fn heading(&self) -> String;
    /// Secondary information (dimmed)
    fn note(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn pass(&self) -> String {
        paint(self.as_ref(), Tone::Pass)
    }

    fn fail(&self) -> String {
        paint(self.as_ref(), Tone::Fail)
    }

    fn heading(&self) -> String {
        paint(self.as_ref(), Tone::Heading)
    }

    fn note(&self) -> String {
        paint(self.as_ref(), Tone::Note)
    }
}
