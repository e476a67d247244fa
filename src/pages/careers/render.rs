//! Career list rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::pages::actions::*;
use crate::widgets::ClickableList;

use super::CareersPage;

pub fn render(
    page: &CareersPage,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cs = click_state.borrow_mut();
    let cl = career_lines(page);

    // Size the list to its wrapped content; the profile summary takes the rest.
    let list_height = cl.visual_height(area.width.saturating_sub(2)) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(list_height), Constraint::Min(3)])
        .split(area);

    cl.register_targets(chunks[0], &mut cs, 1, 1, 0, chunks[0].width.saturating_sub(2));
    let student = &page.recommendation.student;
    let title = if student.name.is_empty() {
        " Your Career Destinations ".to_string()
    } else {
        format!(" Career Destinations for {} ", student.name)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    f.render_widget(
        Paragraph::new(cl.into_lines())
            .block(block)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    render_summary(page, f, chunks[1], &mut cs);
}

fn career_lines(page: &CareersPage) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    for (i, career) in page.recommendation.careers.iter().enumerate() {
        let id = CHOOSE_CAREER_BASE + i as u16;
        let selected = i == page.cursor;
        let title_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![
            Span::styled(
                format!(" [{}] ", i + 1),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(career.title.clone(), title_style),
        ];
        if career.recommended {
            spans.push(Span::styled(
                "  ★ Recommended Career",
                Style::default().fg(Color::Green),
            ));
        }
        cl.push_clickable(Line::from(spans), id);
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     {}", career.description),
                Style::default().fg(Color::Gray),
            )),
            id,
        );
        cl.push(Line::from(""));
    }
    cl
}

fn render_summary(page: &CareersPage, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let student = &page.recommendation.student;
    let field = |label: &'static str, value: &str| {
        let shown = if value.is_empty() { "—" } else { value };
        Line::from(vec![
            Span::styled(format!(" {label}: "), Style::default().fg(Color::DarkGray)),
            Span::styled(shown.to_string(), Style::default().fg(Color::White)),
        ])
    };

    let reason = match page.recommendation.matched_rule {
        Some(rule) => format!(" Matched on your {rule} profile"),
        None => " No specific match, so here is a flexible path".to_string(),
    };

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(reason, Style::default().fg(Color::Cyan))));
    cl.push(field("Interest", &student.interest));
    cl.push(field("Goal", &student.goal));
    cl.push(field("Hobbies", &student.hobbies));
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(" [E] ", Style::default().fg(Color::Yellow)),
            Span::styled("Edit my profile", Style::default().fg(Color::Gray)),
        ]),
        EDIT_PROFILE,
    );
    cl.register_targets(area, cs, 1, 1, 0, area.width.saturating_sub(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Based on your profile ");
    f.render_widget(
        Paragraph::new(cl.into_lines())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
