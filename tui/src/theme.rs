//! Color theme and glyphs for ZenPulse TUI.
//!
//! Uses a dark system palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use zenpulse_types::Mood;
use zenpulse_types::ui::UiOptions;

/// Dark system palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(0, 0, 0);
    pub const BG_PANEL: Color = Color::Rgb(28, 28, 30); // elevated
    pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 44, 46); // secondary
    pub const BG_POPUP: Color = Color::Rgb(58, 58, 60); // tertiary
    pub const BG_BORDER: Color = Color::Rgb(72, 72, 74);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color = Color::Rgb(235, 235, 245);
    pub const TEXT_MUTED: Color = Color::Rgb(142, 142, 147);
    pub const TEXT_DISABLED: Color = Color::Rgb(99, 99, 102);

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(0, 122, 255); // systemBlue
    pub const PRIMARY_DIM: Color = Color::Rgb(88, 86, 214); // systemIndigo

    // === Accent Colors ===
    pub const PINK: Color = Color::Rgb(255, 45, 85);
    pub const TEAL: Color = Color::Rgb(90, 200, 250);
    pub const GREEN: Color = Color::Rgb(52, 199, 89);
    pub const YELLOW: Color = Color::Rgb(255, 204, 0);
    pub const ORANGE: Color = Color::Rgb(255, 149, 0);
    pub const PURPLE: Color = Color::Rgb(175, 82, 222);

    // === Semantic Aliases ===
    pub const ACCENT: Color = PINK;
    pub const SUCCESS: Color = GREEN;
    pub const WARNING: Color = ORANGE;
    pub const PREMIUM: Color = YELLOW;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub premium: Color,
    pub mood_happy: Color,
    pub mood_neutral: Color,
    pub mood_sad: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            premium: colors::PREMIUM,
            mood_happy: colors::YELLOW,
            mood_neutral: colors::TEAL,
            mood_sad: colors::PURPLE,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::Cyan,
            primary_dim: Color::Gray,
            accent: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            premium: Color::Yellow,
            mood_happy: Color::Yellow,
            mood_neutral: Color::Cyan,
            mood_sad: Color::Magenta,
        }
    }

    #[must_use]
    pub fn mood(&self, mood: Mood) -> Color {
        match mood {
            Mood::Happy => self.mood_happy,
            Mood::Neutral => self.mood_neutral,
            Mood::Sad => self.mood_sad,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub locked: &'static str,
    pub premium: &'static str,
    pub play: &'static str,
    pub clock: &'static str,
    pub check: &'static str,
    pub bullet: &'static str,
    pub selected: &'static str,
    pub radio_on: &'static str,
    pub radio_off: &'static str,
    pub close: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub mood_happy: &'static str,
    pub mood_neutral: &'static str,
    pub mood_sad: &'static str,
    pub spinner_frames: &'static [&'static str],
}

impl Glyphs {
    #[must_use]
    pub fn mood(&self, mood: Mood) -> &'static str {
        match mood {
            Mood::Happy => self.mood_happy,
            Mood::Neutral => self.mood_neutral,
            Mood::Sad => self.mood_sad,
        }
    }
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            locked: "[L]",
            premium: "*",
            play: ">",
            clock: "@",
            check: "+",
            bullet: "-",
            selected: ">",
            radio_on: "(o)",
            radio_off: "( )",
            close: "x",
            arrow_up: "^",
            arrow_down: "v",
            mood_happy: ":)",
            mood_neutral: ":|",
            mood_sad: ":(",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            locked: "🔒",
            premium: "★",
            play: "▶",
            clock: "◷",
            check: "✓",
            bullet: "•",
            selected: "▸",
            radio_on: "◉",
            radio_off: "○",
            close: "✕",
            arrow_up: "↑",
            arrow_down: "↓",
            mood_happy: "☀",
            mood_neutral: "☁",
            mood_sad: "☂",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn premium_badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.premium)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn primary_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use zenpulse_types::ui::UiOptions;

    use super::{glyphs, spinner_frame};

    #[test]
    fn spinner_frame_cycles_without_reduced_motion() {
        let options = UiOptions::default();
        let frame0 = spinner_frame(0, options);
        let frame1 = spinner_frame(1, options);
        assert_ne!(frame0, frame1, "spinner should cycle through frames");
    }

    #[test]
    fn spinner_frame_static_with_reduced_motion() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        assert_eq!(spinner_frame(0, options), spinner_frame(1, options));
        assert_eq!(spinner_frame(0, options), spinner_frame(100, options));
    }

    #[test]
    fn ascii_glyphs_stay_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for glyph in [g.locked, g.premium, g.check, g.radio_on, g.mood_happy, g.mood_sad] {
            assert!(glyph.is_ascii(), "{glyph} is not ascii");
        }
        assert_eq!(spinner_frame(0, options), "|");
    }
}
