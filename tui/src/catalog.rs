//! Catalog screen: greeting header, mood affirmations, and the card grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use zenpulse_engine::{
    AccessSummary, AffirmationPhase, App, CARD_COLUMNS, CardView, CatalogFocus, Mood,
    SubscriptionError,
};

use crate::artwork;
use crate::theme::{Glyphs, Palette, spinner_frame, styles};
use crate::{key_hints, truncate_with_ellipsis};

/// Bordered card: artwork, title, duration line.
pub const CARD_HEIGHT: u16 = 5;
const HEADER_HEIGHT: u16 = 3;
const MOOD_HEIGHT: u16 = 7;

pub(crate) fn draw_catalog(
    frame: &mut Frame,
    app: &mut App,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Result<(), SubscriptionError> {
    let subscribed = app.is_subscribed()?;
    let summary = app.access_summary()?;
    let focus = app.focus();

    let [header, moods, heading, cards, hints] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(MOOD_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(1),
    ])
    .horizontal_margin(2)
    .vertical_margin(1)
    .areas(frame.area());

    draw_header(frame, app, header, subscribed, focus, palette, glyphs);
    draw_moods(frame, app, moods, focus, palette, glyphs);
    draw_section_heading(frame, heading, summary, palette, glyphs);

    let visible_rows = usize::from(cards.height / CARD_HEIGHT).max(1);
    let first_row = app.card_scroll(visible_rows);
    let views = app.card_views()?;
    draw_cards(
        frame,
        cards,
        &views,
        focus,
        first_row,
        visible_rows,
        app.ui_options().ascii_only,
        palette,
        glyphs,
    );

    let mut bindings = vec![
        ("↑↓←→", "move"),
        ("Enter", "open"),
        ("1-3", "mood"),
    ];
    if subscribed {
        bindings.push(("u", "reset premium"));
    } else {
        bindings.push(("p", "premium"));
    }
    bindings.push(("q", "quit"));
    frame.render_widget(Paragraph::new(key_hints(&bindings, palette)), hints);
    Ok(())
}

fn draw_header(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    subscribed: bool,
    focus: CatalogFocus,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(14)]).areas(area);

    let lines = vec![
        Line::from(Span::styled(
            "ZenPulse",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(app.greeting().text(), styles::title(palette))),
        Line::from(Span::styled(
            "Take a moment for yourself",
            styles::muted(palette),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), left);

    let (label, style) = if subscribed {
        (
            format!(" {} Premium ", glyphs.check),
            Style::default()
                .fg(palette.premium)
                .add_modifier(Modifier::BOLD),
        )
    } else if focus == CatalogFocus::PremiumButton {
        (
            format!("{} {} Premium ", glyphs.selected, glyphs.premium),
            styles::premium_badge(palette).add_modifier(Modifier::UNDERLINED),
        )
    } else {
        (
            format!(" {} Premium ", glyphs.premium),
            styles::premium_badge(palette),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Right),
        right,
    );
}

fn draw_moods(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    focus: CatalogFocus,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let widget = app.catalog_screen().affirmation();
    let options = app.ui_options();

    let mut buttons = Vec::new();
    for (i, mood) in Mood::ALL.into_iter().enumerate() {
        if i > 0 {
            buttons.push(Span::raw("  "));
        }
        let color = palette.mood(mood);
        let focused = focus == CatalogFocus::Mood(mood);
        let chosen = widget.selected_mood() == Some(mood);
        let mut style = Style::default().fg(color);
        if chosen {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        if focused {
            style = style.bg(palette.bg_highlight).add_modifier(Modifier::UNDERLINED);
        }
        let pointer = if focused { glyphs.selected } else { " " };
        buttons.push(Span::styled(
            format!("{pointer}{} {} {}", mood.index() + 1, glyphs.mood(mood), mood.label()),
            style,
        ));
    }

    let body = match widget.phase() {
        AffirmationPhase::Idle => Line::from(Span::styled(
            "Pick a mood to receive an affirmation.",
            styles::muted(palette),
        )),
        AffirmationPhase::Loading { .. } => Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(app.tick_count(), options)),
                Style::default().fg(palette.accent),
            ),
            Span::styled("Finding the right words for you...", styles::muted(palette)),
        ]),
        AffirmationPhase::Shown { text } => Line::from(Span::styled(
            format!("\u{201c}{text}\u{201d}"),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let border_color = widget
        .selected_mood()
        .map_or(palette.bg_border, |mood| palette.mood(mood));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(Span::styled(
            " Daily affirmation ",
            styles::title(palette),
        )));

    let lines = vec![
        Line::from(Span::styled(
            "How are you feeling today?",
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(buttons),
        Line::from(""),
        body,
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_section_heading(
    frame: &mut Frame,
    area: Rect,
    summary: AccessSummary,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let badge = match summary {
        AccessSummary::Full => Span::styled(
            format!("{} Full access", glyphs.check),
            Style::default().fg(palette.success),
        ),
        AccessSummary::Partial { free, total } => Span::styled(
            format!("{free} of {total} free"),
            styles::muted(palette),
        ),
    };
    let [left, right] =
        Layout::horizontal([Constraint::Min(12), Constraint::Length(20)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("Meditations", styles::title(palette)))),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::from(badge)).alignment(Alignment::Right),
        right,
    );
}

#[allow(clippy::too_many_arguments)]
fn draw_cards(
    frame: &mut Frame,
    area: Rect,
    views: &[CardView<'_>],
    focus: CatalogFocus,
    first_row: usize,
    visible_rows: usize,
    ascii_only: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let total_rows = views.len().div_ceil(CARD_COLUMNS);
    let column_constraints = [Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS];

    for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + CARD_HEIGHT * slot as u16,
            width: area.width,
            height: CARD_HEIGHT,
        };
        let columns = Layout::horizontal(column_constraints)
            .spacing(1)
            .split(row_area);
        for (col, cell) in columns.iter().enumerate() {
            let index = row * CARD_COLUMNS + col;
            if let Some(view) = views.get(index) {
                let focused = focus == CatalogFocus::Card(index);
                draw_card(frame, *cell, view, focused, ascii_only, palette, glyphs);
            }
        }
    }

    if first_row > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(glyphs.arrow_up, styles::muted(palette)))
                .alignment(Alignment::Right),
            Rect { height: 1, ..area },
        );
    }
    if first_row + visible_rows < total_rows && area.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(glyphs.arrow_down, styles::muted(palette)))
                .alignment(Alignment::Right),
            Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            },
        );
    }
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    view: &CardView<'_>,
    focused: bool,
    ascii_only: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let item = view.item;
    let art = item.artwork();
    let inner_width = usize::from(area.width.saturating_sub(2));

    let border_style = if focused {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.bg_border)
    };
    let title_style = if view.locked {
        Style::default().fg(palette.text_muted)
    } else if focused {
        styles::title(palette)
    } else {
        Style::default().fg(palette.text_primary)
    };

    let mut meta = vec![Span::styled(
        format!("{} {} min", glyphs.clock, item.duration_minutes),
        styles::muted(palette),
    )];
    if view.locked {
        meta.push(Span::styled(
            format!("  {} Premium", glyphs.locked),
            Style::default().fg(palette.premium),
        ));
    } else if item.premium {
        meta.push(Span::styled(
            format!("  {}", glyphs.premium),
            Style::default().fg(palette.premium),
        ));
    }

    let art_style = if view.locked {
        Style::default().fg(palette.text_disabled)
    } else {
        Style::default().fg(artwork::tint(art, palette))
    };
    let lines = vec![
        Line::from(Span::styled(
            artwork::strip(artwork::motif(art, ascii_only), inner_width),
            art_style,
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(item.title.as_str(), inner_width),
            title_style,
        )),
        Line::from(meta),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(if focused {
            palette.bg_highlight
        } else {
            palette.bg_panel
        }));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
