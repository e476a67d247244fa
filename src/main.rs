mod app;
mod career;
mod console;
mod input;
mod pages;
mod storage;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::{Frame, Terminal};
use ratzilla::{DomBackend, WebRenderer};

use app::App;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use pages::Route;
use storage::{MemoryStore, Store};
use time::{FrameClock, TICKS_PER_SEC};

#[cfg(target_arch = "wasm32")]
fn open_store() -> Store {
    match storage::LocalStorage::open() {
        Some(local) => Store::new(Box::new(local)),
        None => {
            console::warn("localStorage unavailable, progress will not be kept");
            Store::new(Box::new(MemoryStore::default()))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_store() -> Store {
    Store::new(Box::new(MemoryStore::default()))
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Mirror the route into the URL hash and the document title.
fn publish_route(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hash = format!("#{}", route.path());
    if current_hash() != hash {
        if let Err(e) = window.location().set_hash(&hash) {
            console::warn(&format!("failed to set location hash: {e:?}"));
        }
    }
    if let Some(document) = window.document() {
        document.set_title(&format!("{} | Career Navigator", route.title()));
    }
}

/// Milliseconds from `performance.now()`, or the wall clock without it.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Query the grid container's bounding rect and convert pixel coordinates
/// to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let route = Route::from_path(&current_hash());
    let app = Rc::new(RefCell::new(App::new(open_store(), route)));
    publish_route(&app.borrow().route);

    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let action = cs.hit_test(col, row);
            drop(cs);

            if let Some(id) = action {
                let mut app = app.borrow_mut();
                if app.handle_input(&InputEvent::Click(id)) {
                    publish_route(&app.route);
                }
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c),
                KeyCode::Backspace => InputEvent::Backspace,
                KeyCode::Enter => InputEvent::Enter,
                KeyCode::Tab if key_event.shift => InputEvent::FocusPrev,
                KeyCode::Tab | KeyCode::Down => InputEvent::FocusNext,
                KeyCode::Up => InputEvent::FocusPrev,
                KeyCode::Esc => InputEvent::Back,
                _ => return,
            };
            let mut app = app.borrow_mut();
            if app.handle_input(&event) {
                publish_route(&app.route);
            }
        }
    });

    let mut clock = FrameClock::new(TICKS_PER_SEC);
    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let mut app = app.borrow_mut();

            // Back/forward buttons and typed URLs change the hash under us.
            if app.sync_to_path(&current_hash()) {
                publish_route(&app.route);
            }

            let ticks = clock.update(now_ms());
            if ticks > 0 && app.tick(ticks) {
                publish_route(&app.route);
            }

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            render_title(f, &app.route, chunks[0]);
            app.render(f, chunks[1], &click_state);
            render_help(f, &app.route, chunks[2]);
        }
    });

    Ok(())
}

fn render_title(f: &mut Frame, route: &Route, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "◆ SKLG ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(route.title(), Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn help_text(route: &Route) -> &'static str {
    match route {
        Route::Landing => "S start · 1-4 preview route · M open map",
        Route::Student => "Tab/↑↓ move · 1-4 pick · Enter next/submit · Esc home",
        Route::Analyzing => "Analyzing your profile...",
        Route::Careers => "1-9 choose · ↑↓ + Enter · E edit profile",
        Route::CareerMap => "C complete · R re-route · 1-8 jump to stage · Esc careers",
        Route::NotFound(_) => "H or Enter: home",
    }
}

fn render_help(f: &mut Frame, route: &Route, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        help_text(route),
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}
