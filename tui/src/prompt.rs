//! Modal prompt overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use zenpulse_engine::{App, ButtonRole, ModalEffectKind};

use crate::animated_area;
use crate::theme::{Palette, styles};

const PROMPT_MAX_WIDTH: u16 = 52;

pub(crate) fn draw_prompt(frame: &mut Frame, app: &mut App, palette: &Palette) {
    let viewport = frame.area();
    let Some(prompt) = app.prompt() else {
        return;
    };

    let width = PROMPT_MAX_WIDTH.min(viewport.width.saturating_sub(4)).max(20);
    let text_width = usize::from(width.saturating_sub(4)).max(1);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(Span::styled(
        prompt.title().to_string(),
        styles::title(palette),
    )));
    lines.push(Line::from(""));
    let mut body_rows = 0usize;
    for paragraph in prompt.body().lines() {
        body_rows += paragraph.width().div_ceil(text_width).max(1);
        lines.push(Line::from(Span::styled(
            paragraph.to_string(),
            Style::default().fg(palette.text_secondary),
        )));
    }
    lines.push(Line::from(""));

    let mut buttons = Vec::new();
    for (i, button) in prompt.buttons().iter().enumerate() {
        if i > 0 {
            buttons.push(Span::raw("   "));
        }
        let selected = i == prompt.selected();
        let style = match (selected, button.role) {
            (true, _) => styles::primary_button(palette),
            (false, ButtonRole::Cancel) => styles::muted(palette),
            (false, ButtonRole::Default) => Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        };
        buttons.push(Span::styled(format!(" {} ", button.label), style));
    }
    lines.push(Line::from(buttons));

    // title + blank + body + blank + buttons, plus borders and padding
    let height = u16::try_from(body_rows + 4)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(viewport.height);
    let base = Rect {
        x: viewport.x + viewport.width.saturating_sub(width) / 2,
        y: viewport.y + viewport.height.saturating_sub(height) / 2,
        width: width.min(viewport.width),
        height,
    };
    let area = animated_area(app, ModalEffectKind::PopScale, base, viewport);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_popup))
        .padding(Padding::uniform(1));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
