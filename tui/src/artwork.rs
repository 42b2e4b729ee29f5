//! Terminal artwork for meditation cards.

use ratatui::style::Color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use zenpulse_engine::Artwork;

use crate::theme::Palette;

/// Repeating motif for `art`. Unknown artwork already resolved to
/// [`Artwork::Placeholder`], which gets a neutral fill.
#[must_use]
pub fn motif(art: Artwork, ascii_only: bool) -> &'static str {
    match (art, ascii_only) {
        (Artwork::Forest, false) => "▲ ▴ ▲▲ ▴ ",
        (Artwork::Forest, true) => "^ ^^ ^ ",
        (Artwork::Ocean, false) => "∿∿≈ ",
        (Artwork::Ocean, true) => "~~= ",
        (Artwork::Mountain, false) => "╱╲╱╲__",
        (Artwork::Mountain, true) => "/\\/\\__",
        (Artwork::Night, false) => " · ✦  ☾  · ",
        (Artwork::Night, true) => " .  *  C  . ",
        (Artwork::Sunrise, false) => "─◠─ ",
        (Artwork::Sunrise, true) => "-o- ",
        (Artwork::Rain, false) => "╎ ╷ ",
        (Artwork::Rain, true) => "| ' ",
        (Artwork::Placeholder, false) => "░",
        (Artwork::Placeholder, true) => ".",
    }
}

#[must_use]
pub fn tint(art: Artwork, palette: &Palette) -> Color {
    match art {
        Artwork::Forest => palette.success,
        Artwork::Ocean | Artwork::Rain => palette.mood_neutral,
        Artwork::Mountain => palette.primary_dim,
        Artwork::Night => palette.mood_sad,
        Artwork::Sunrise => palette.warning,
        Artwork::Placeholder => palette.text_disabled,
    }
}

/// Tile `motif` across `width` columns.
#[must_use]
pub fn strip(motif: &str, width: usize) -> String {
    if motif.width() == 0 {
        return String::new();
    }
    let mut out = String::with_capacity(width * 3);
    let mut used = 0;
    for ch in motif.chars().cycle() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}
