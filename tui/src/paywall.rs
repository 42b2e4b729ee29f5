//! Paywall screen, presented over the catalog.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use zenpulse_engine::{App, ModalEffectKind, PlanKind, PlanOption};

use crate::theme::{Glyphs, Palette, styles};
use crate::{animated_area, key_hints};

const PAYWALL_MAX_WIDTH: u16 = 64;

pub(crate) fn draw_paywall(frame: &mut Frame, app: &mut App, palette: &Palette, glyphs: &Glyphs) {
    let viewport = frame.area();
    let width = PAYWALL_MAX_WIDTH.min(viewport.width);
    let base = Rect {
        x: viewport.x + (viewport.width - width) / 2,
        y: viewport.y,
        width,
        height: viewport.height,
    };
    let area = animated_area(app, ModalEffectKind::SlideUp, base, viewport);
    if area.height == 0 {
        return;
    }

    let catalog = app.catalog();
    let plans = catalog.plans();
    let selected = app.paywall().selected();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("ZenPulse ", styles::title(palette)),
        Span::styled(
            "Premium",
            Style::default()
                .fg(palette.premium)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        "Unlock every meditation and go deeper.",
        styles::muted(palette),
    )));
    lines.push(Line::from(""));

    for feature in catalog.features() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.check),
                Style::default().fg(palette.success),
            ),
            Span::styled(
                feature.as_str().to_string(),
                Style::default().fg(palette.text_secondary),
            ),
        ]));
    }
    lines.push(Line::from(""));

    for kind in PlanKind::ALL {
        plan_lines(&mut lines, plans.get(kind), kind == selected, palette, glyphs);
    }

    lines.push(Line::from(Span::styled(
        "  Try 7 days free  ",
        styles::primary_button(palette),
    )));
    lines.push(Line::from(Span::styled(
        app.terms_line(),
        styles::muted(palette),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{} Secure payment   {} 30-day refund",
            glyphs.check, glyphs.check
        ),
        styles::muted(palette),
    )));
    lines.push(Line::from(""));
    lines.push(key_hints(
        &[
            ("↑↓", "plan"),
            ("y/m", "yearly/monthly"),
            ("Enter", "subscribe"),
            ("Esc", "close"),
        ],
        palette,
    ));

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.premium))
        .style(Style::default().bg(palette.bg_dark))
        .padding(Padding::horizontal(1))
        .title(Line::from(Span::styled(
            format!(" {} ", glyphs.close),
            styles::muted(palette),
        )))
        .title_alignment(Alignment::Right);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn plan_lines(
    lines: &mut Vec<Line<'static>>,
    plan: &PlanOption,
    selected: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let radio = if selected {
        glyphs.radio_on
    } else {
        glyphs.radio_off
    };
    let title_style = if selected {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_secondary)
    };

    let mut head = vec![
        Span::styled(format!("{radio} "), title_style),
        Span::styled(plan.title.as_str().to_string(), title_style),
    ];
    if plan.best_value {
        head.push(Span::raw("  "));
        head.push(Span::styled(" BEST VALUE ", styles::premium_badge(palette)));
    }
    lines.push(Line::from(head));

    let mut price = vec![
        Span::styled(plan.price.as_str().to_string(), styles::title(palette)),
        Span::styled(format!(" {}", plan.period), styles::muted(palette)),
    ];
    if let Some(per_month) = plan.price_per_month.as_deref() {
        price.push(Span::styled(format!("  ({per_month})"), styles::muted(palette)));
    }
    if let Some(savings) = plan.savings.as_deref() {
        price.push(Span::styled(
            format!("  {savings}"),
            Style::default().fg(palette.success),
        ));
    }
    lines.push(Line::from(price));
    lines.push(Line::from(""));
}
