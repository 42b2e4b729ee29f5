//! TUI rendering for ZenPulse using ratatui.

mod artwork;
mod catalog;
mod effects;
mod input;
mod paywall;
mod prompt;
mod theme;

pub use catalog::CARD_HEIGHT;
pub use effects::apply_modal_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Block,
};

use zenpulse_engine::{App, ModalEffectKind, Route, SubscriptionError};

/// Main draw function.
///
/// Fails only when the app was built outside a subscription provider.
pub fn draw(frame: &mut Frame, app: &mut App) -> Result<(), SubscriptionError> {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    // The paywall is modal: the catalog stays visible behind it while it
    // slides in.
    catalog::draw_catalog(frame, app, &palette, &glyphs)?;
    if app.route() == Route::Paywall {
        paywall::draw_paywall(frame, app, &palette, &glyphs);
    }

    if app.prompt().is_some() {
        prompt::draw_prompt(frame, app, &palette);
    }
    Ok(())
}

/// Advance the running modal effect of `kind` and return where the overlay
/// should be drawn this frame.
pub(crate) fn animated_area(
    app: &mut App,
    kind: ModalEffectKind,
    base: Rect,
    viewport: Rect,
) -> Rect {
    let running = app
        .modal_effect_mut()
        .is_some_and(|effect| effect.kind() == kind);
    if !running {
        return base;
    }

    let elapsed = app.frame_elapsed();
    let (area, done) = match app.modal_effect_mut() {
        Some(effect) => {
            effect.advance(elapsed);
            (
                apply_modal_effect(effect, base, viewport),
                effect.is_finished(),
            )
        }
        None => (base, false),
    };
    if done {
        app.clear_modal_effect();
    }
    area
}

pub(crate) fn key_hints(bindings: &[(&'static str, &'static str)], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(bindings.len() * 2);
    for (i, (key, action)) in bindings.iter().enumerate() {
        let lead = if i == 0 { "" } else { "  " };
        spans.push(Span::styled(format!("{lead}{key}"), styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }
    Line::from(spans)
}

fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    let max = max.max(3);
    let trimmed = raw.trim();
    if trimmed.chars().count() <= max {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(max - 3).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod test_support {
    use std::time::Duration;

    use zenpulse_engine::{App, SubscriptionProvider, UiOptions};

    pub(crate) fn app() -> App {
        let catalog = zenpulse_config::builtin_catalog().expect("builtin catalog");
        App::new(
            catalog,
            SubscriptionProvider::in_memory(),
            UiOptions::default(),
            Duration::from_millis(1500),
        )
    }

    pub(crate) fn app_unprovided() -> App {
        let catalog = zenpulse_config::builtin_catalog().expect("builtin catalog");
        App::new(
            catalog,
            SubscriptionProvider::unprovided(),
            UiOptions::default(),
            Duration::from_millis(1500),
        )
    }
}
