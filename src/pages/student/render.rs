//! Student form rendering (read-only from state).
//!
//! Every field takes two rows: a label and either the typed text or a row
//! of numbered chips. When the form is taller than the area, rows scroll so
//! the focused field stays visible.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::pages::actions::*;
use crate::widgets::{ClickableList, TabBar};

use super::{
    Field, StudentPage, ALL_FIELDS, EDUCATION_OPTIONS, GOAL_OPTIONS, INTEREST_OPTIONS,
};

const ROWS_PER_FIELD: u16 = 2;

pub fn render(
    page: &StudentPage,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Fields
            Constraint::Length(4), // Actions
        ])
        .split(area);

    let mut cs = click_state.borrow_mut();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Tell us about yourself ");
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);
    render_fields(page, f, inner, &mut cs);

    render_actions(page, f, chunks[1], &mut cs);
}

/// First field to draw so that the focused one fits in `visible_fields`.
fn first_visible_field(focus: usize, visible_fields: usize) -> usize {
    if visible_fields == 0 {
        return focus;
    }
    (focus + 1).saturating_sub(visible_fields)
}

fn render_fields(page: &StudentPage, f: &mut Frame, inner: Rect, cs: &mut ClickState) {
    let visible = (inner.height / ROWS_PER_FIELD) as usize;
    let first = first_visible_field(page.focus.index(), visible);
    let missing = if page.show_missing {
        page.form.missing()
    } else {
        Vec::new()
    };

    for (slot, field) in ALL_FIELDS.iter().skip(first).take(visible).enumerate() {
        let y = inner.y + slot as u16 * ROWS_PER_FIELD;
        let label_row = Rect::new(inner.x, y, inner.width, 1);
        let value_row = Rect::new(inner.x, y + 1, inner.width, 1);
        let focused = *field == page.focus;
        let focus_id = FOCUS_FIELD_BASE + field.index() as u16;

        let marker = if focused { "▸ " } else { "  " };
        let mut label = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(
                field.label(),
                if focused {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ),
        ];
        if missing.contains(field) {
            label.push(Span::styled("  required", Style::default().fg(Color::Red)));
        }
        f.render_widget(Paragraph::new(Line::from(label)), label_row);
        cs.add_row_target(inner, label_row.y, focus_id);

        match field {
            Field::Education => render_chips(
                f,
                value_row,
                cs,
                EDUCATION_OPTIONS.iter().map(|(_, label)| *label),
                page.form.choice(Field::Education),
                EDUCATION_BASE,
            ),
            Field::Interest => render_chips(
                f,
                value_row,
                cs,
                INTEREST_OPTIONS.iter().copied(),
                page.form.choice(Field::Interest),
                INTEREST_BASE,
            ),
            Field::Goal => render_chips(
                f,
                value_row,
                cs,
                GOAL_OPTIONS.iter().copied(),
                page.form.choice(Field::Goal),
                GOAL_BASE,
            ),
            _ => {
                render_text_value(page, *field, focused, f, value_row);
                cs.add_row_target(inner, value_row.y, focus_id);
            }
        }
    }
}

fn render_text_value(page: &StudentPage, field: Field, focused: bool, f: &mut Frame, row: Rect) {
    let text = page.form.text(field);
    let mut spans = vec![Span::raw("    ")];
    if text.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            text.to_string(),
            Style::default().fg(Color::White),
        ));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn render_chips<'a>(
    f: &mut Frame,
    row: Rect,
    cs: &mut ClickState,
    labels: impl Iterator<Item = &'a str>,
    chosen: Option<usize>,
    base: u16,
) {
    let indent = Rect::new(row.x + 4.min(row.width), row.y, row.width.saturating_sub(4), 1);
    let mut bar = TabBar::new(" ");
    for (i, label) in labels.enumerate() {
        let style = if chosen == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        bar = bar.tab(format!("{} {}", i + 1, label), style, base + i as u16);
    }
    bar.render(f, indent, cs);
}

fn render_actions(page: &StudentPage, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let ready = page.form.can_submit();
    let mut cl = ClickableList::new();
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [Enter] ",
                Style::default()
                    .fg(if ready { Color::Green } else { Color::DarkGray })
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Find My Career Path →",
                Style::default().fg(if ready { Color::White } else { Color::DarkGray }),
            ),
        ]),
        SUBMIT_PROFILE,
    );
    cl.push_clickable(
        Line::from(vec![
            Span::styled(" [Esc] ", Style::default().fg(Color::Yellow)),
            Span::styled("Back to home", Style::default().fg(Color::Gray)),
        ]),
        CANCEL_PROFILE,
    );

    cl.register_targets(area, cs, 1, 1, 0, area.width.saturating_sub(2));

    let hint = if page.focus.is_choice() {
        " 1-4 pick · Tab next "
    } else {
        " type · Tab next "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(hint);
    f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
}
