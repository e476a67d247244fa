//! Career map rendering (read-only from state).

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::career::route_map::stage_hint;
use crate::career::stages::{RouteId, Stage, MAP_GRAPH};
use crate::input::{is_narrow_layout, ClickState};
use crate::pages::actions::*;
use crate::pages::canvas::{node_style, render_stage_graph, stage_cell, EdgeLayer};
use crate::widgets::{ClickableList, TabBar};

use super::CareerMapPage;

pub fn render(
    page: &CareerMapPage,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let is_narrow = is_narrow_layout(area.width);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Route tabs
            Constraint::Min(8),    // Map (+ side panel when wide)
        ])
        .split(area);

    let (map_area, info_area) = if is_narrow {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(12)])
            .split(rows[1]);
        (split[0], split[1])
    } else {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(rows[1]);
        (split[0], split[1])
    };

    let mut cs = click_state.borrow_mut();
    render_route_tabs(page, f, rows[0], &mut cs);
    render_map(page, f, map_area, &mut cs);
    render_info(page, f, info_area, &mut cs);
}

fn render_route_tabs(page: &CareerMapPage, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let title = match (&page.career_title, page.student_name.is_empty()) {
        (Some(career), false) => format!(" {} → {} ", page.student_name, career),
        (Some(career), true) => format!(" Your route to {} ", career),
        (None, _) => " Your Career Map ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    let active = page.map.route_id();
    let tab_style = |id: RouteId| {
        if id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    };
    let mut bar = TabBar::new(" │ ").block(block);
    for (id, action) in [(RouteId::Best, SHOW_BEST), (RouteId::Alternate, SHOW_ALTERNATE)] {
        if let Some(route) = MAP_GRAPH.route_by_id(id) {
            bar = bar.tab(route.name, tab_style(id), action);
        }
    }
    bar.render(f, area, cs);
}

/// Every stage pair, for the faint background web.
fn all_pairs() -> Vec<(&'static Stage, &'static Stage)> {
    let stages = MAP_GRAPH.stages;
    let mut pairs = Vec::new();
    for (i, a) in stages.iter().enumerate() {
        for b in &stages[i + 1..] {
            pairs.push((a, b));
        }
    }
    pairs
}

fn render_map(page: &CareerMapPage, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let route_edges = page
        .map
        .active_route()
        .map(|r| MAP_GRAPH.route_edges(r))
        .unwrap_or_default();
    let layers = [
        EdgeLayer {
            edges: all_pairs(),
            color: Color::Rgb(40, 40, 60),
            dashed: true,
        },
        EdgeLayer {
            edges: route_edges,
            color: Color::Cyan,
            dashed: false,
        },
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(" Map ");
    let inner = block.inner(area);

    let current = page.map.stage_id();
    render_stage_graph(f, area, block, &MAP_GRAPH, &layers, &|stage| {
        node_style(stage.id == current, page.map.is_on_route(stage.id))
    });

    // Three cells around each node.
    for (i, stage) in MAP_GRAPH.stages.iter().enumerate() {
        let (col, row) = stage_cell(&MAP_GRAPH, stage, inner);
        let left = col.saturating_sub(1).max(inner.x);
        cs.add_click_target(Rect::new(left, row, 3, 1), SELECT_STAGE_BASE + i as u16);
    }
}

fn render_info(page: &CareerMapPage, f: &mut Frame, area: Rect, cs: &mut ClickState) {
    let mut cl = ClickableList::new();
    let stage = page.map.active_stage();

    cl.push(Line::from(Span::styled(
        " Current stage",
        Style::default().fg(Color::DarkGray),
    )));
    cl.push(Line::from(Span::styled(
        format!(" {}", stage.map(|s| s.label).unwrap_or("—")),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(hint) = stage.and_then(|s| stage_hint(s.id)) {
        cl.push(Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(Color::Gray),
        )));
    }
    if !page.map.is_on_route(page.map.stage_id()) {
        cl.push(Line::from(Span::styled(
            " Not on this route. Re-route or pick a stage on it.",
            Style::default().fg(Color::Yellow),
        )));
    }
    if !page.route_names.is_empty() {
        cl.push(Line::from(Span::styled(
            format!(" Routes: {}", page.route_names.join(", ")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    cl.push(Line::from(""));

    let button = |key: &'static str, label: &'static str, color: Color| {
        Line::from(vec![
            Span::styled(
                key,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label, Style::default().fg(Color::White)),
        ])
    };
    cl.push_clickable(
        button(" [C] ", "I completed this stage", Color::Green),
        COMPLETE_STAGE,
    );
    cl.push_clickable(button(" [R] ", "Re-route", Color::Yellow), REROUTE);
    cl.push_clickable(
        button(" [E] ", "Change interest", Color::Yellow),
        CHANGE_INTEREST,
    );
    cl.push_clickable(
        button(" [Esc] ", "Back to careers", Color::DarkGray),
        BACK_TO_CAREERS,
    );

    cl.register_targets(area, cs, 1, 1, 0, area.width.saturating_sub(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Stage ");
    f.render_widget(
        Paragraph::new(cl.into_lines())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
