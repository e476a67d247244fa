//! Landing page rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::career::stages::PREVIEW_GRAPH;
use crate::input::{is_narrow_layout, ClickState};
use crate::pages::actions::*;
use crate::pages::canvas::{node_style, render_stage_graph, EdgeLayer};
use crate::widgets::{ClickableList, TabBar};

use super::LandingPage;

pub fn render(
    page: &LandingPage,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if is_narrow { 10 } else { 9 }), // Hero
            Constraint::Length(3),                             // Route selector
            Constraint::Min(8),                                // Preview map
            Constraint::Length(1),                             // Footer
        ])
        .split(area);

    let mut cs = click_state.borrow_mut();
    render_hero(page, f, chunks[0], &mut cs);
    render_route_tabs(page, f, chunks[1], &mut cs);
    render_preview(page, f, chunks[2]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "© 2026 SKLG — Navigate Your Career with Confidence",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

fn render_hero(page: &LandingPage, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        " Navigate your career like a map",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        " Tell us where you are. We plot the routes to where you want to be.",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(
                " [S] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("Start your journey", Style::default().fg(Color::White)),
        ]),
        START_PROFILE,
    );
    if page.has_selection {
        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    " [M] ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("Open my career map", Style::default().fg(Color::White)),
            ]),
            OPEN_CAREER_MAP,
        );
        cl.push_clickable(
            Line::from(vec![
                Span::styled(" [X] ", Style::default().fg(Color::DarkGray)),
                Span::styled("Start over", Style::default().fg(Color::DarkGray)),
            ]),
            CLEAR_DATA,
        );
    }

    let inner_width = area.width.saturating_sub(2);
    cl.register_targets(area, cs, 1, 1, 0, inner_width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Career Navigator ");
    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_route_tabs(page: &LandingPage, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let title = match &page.career {
        Some(career) => format!(" Path to {} ", career.title),
        None => " Routes ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    let Some(preview) = &page.preview else {
        f.render_widget(block, area);
        return;
    };
    let active = preview.active().map(|r| r.id);

    let mut bar = TabBar::new(" │ ").block(block);
    for (i, route) in preview.visible().iter().enumerate() {
        let style = if Some(route.id) == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        bar = bar.tab(
            format!("{} {}", i + 1, route.name),
            style,
            PREVIEW_ROUTE_BASE + i as u16,
        );
    }
    bar.render(f, area, cs);
}

fn render_preview(page: &LandingPage, f: &mut Frame, area: Rect) {
    let Some(preview) = &page.preview else {
        return;
    };
    let active = preview.active();

    let inactive_edges = preview
        .visible()
        .iter()
        .filter(|r| Some(r.id) != active.map(|a| a.id))
        .flat_map(|r| PREVIEW_GRAPH.route_edges(r))
        .collect();
    let active_edges = active
        .map(|r| PREVIEW_GRAPH.route_edges(r))
        .unwrap_or_default();

    let layers = [
        EdgeLayer {
            edges: inactive_edges,
            color: Color::DarkGray,
            dashed: true,
        },
        EdgeLayer {
            edges: active_edges,
            color: Color::Cyan,
            dashed: false,
        },
    ];

    let title = match active {
        Some(route) => format!(" Showing route: {} ", route.name),
        None => " No routes ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(title);

    render_stage_graph(f, area, block, &PREVIEW_GRAPH, &layers, &|stage| {
        let on_route = preview.is_on_active_route(stage.id);
        let endpoint = stage.id == "start" || stage.id == "destination";
        node_style(endpoint && on_route, on_route)
    });
}
