//! Modal animation effects for TUI overlays.

use ratatui::layout::Rect;

use zenpulse_engine::{ModalEffect, ModalEffectKind};

/// Apply a modal effect to transform the base rectangle.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect, viewport: Rect) -> Rect {
    let t = ease_out_cubic(effect.progress());
    match effect.kind() {
        ModalEffectKind::PopScale => scale_rect(base, 0.6 + 0.4 * t),
        ModalEffectKind::SlideUp => {
            // The paywall is full-height, so it slides in from below the viewport.
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let travel = viewport_bottom.saturating_sub(base.y).min(base.height);
            let y_offset = ((1.0 - t) * f32::from(travel)).round() as u16;
            let y = base.y.saturating_add(y_offset);
            Rect {
                x: base.x,
                y,
                width: base.width,
                height: base.height.min(viewport_bottom.saturating_sub(y)),
            }
        }
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;
    use zenpulse_engine::ModalEffect;

    use super::apply_modal_effect;

    #[test]
    fn pop_scale_starts_small_and_centered() {
        let base = Rect::new(10, 5, 40, 10);
        let effect = ModalEffect::pop_scale(Duration::from_millis(200));
        let area = apply_modal_effect(&effect, base, Rect::new(0, 0, 80, 24));
        assert_eq!(area.width, 24);
        assert_eq!(area.height, 6);
        assert_eq!(area.x, 18);
        assert_eq!(area.y, 7);
    }

    #[test]
    fn slide_up_settles_on_base() {
        let base = Rect::new(0, 0, 80, 24);
        let viewport = base;
        let mut effect = ModalEffect::slide_up(Duration::from_millis(100));
        let start = apply_modal_effect(&effect, base, viewport);
        assert_eq!(start.y, 24);
        assert_eq!(start.height, 0);

        effect.advance(Duration::from_millis(100));
        assert_eq!(apply_modal_effect(&effect, base, viewport), base);
    }
}
