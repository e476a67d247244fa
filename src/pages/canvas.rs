//! Stage graph drawing on a ratatui canvas.
//!
//! Graph coordinates grow downward (SVG style); the canvas y axis grows
//! upward, so every y is flipped against the graph height.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::symbols::Marker;
use ratzilla::ratatui::text::Span;
use ratzilla::ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratzilla::ratatui::widgets::Block;
use ratzilla::ratatui::Frame;

use crate::career::stages::{curve_points, Stage, StageGraph};

const CURVE_SEGMENTS: usize = 24;

/// A set of edges drawn in one color.
pub struct EdgeLayer {
    pub edges: Vec<(&'static Stage, &'static Stage)>,
    pub color: Color,
    /// Draw every other curve segment.
    pub dashed: bool,
}

/// How a stage node is drawn.
pub struct NodeMark {
    pub symbol: &'static str,
    pub style: Style,
    pub show_label: bool,
}

/// Draw `layers` in order (later on top), then every stage node.
pub fn render_stage_graph(
    f: &mut Frame,
    area: Rect,
    block: Block,
    graph: &'static StageGraph,
    layers: &[EdgeLayer],
    mark: &dyn Fn(&Stage) -> NodeMark,
) {
    let height = graph.height;
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, graph.width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for layer in layers {
                for (a, b) in &layer.edges {
                    let pts = curve_points(a, b, CURVE_SEGMENTS);
                    for (i, w) in pts.windows(2).enumerate() {
                        if layer.dashed && i % 2 == 1 {
                            continue;
                        }
                        ctx.draw(&CanvasLine::new(
                            w[0].0,
                            height - w[0].1,
                            w[1].0,
                            height - w[1].1,
                            layer.color,
                        ));
                    }
                }
                ctx.layer();
            }
            for stage in graph.stages {
                let m = mark(stage);
                ctx.print(stage.x, height - stage.y, Span::styled(m.symbol, m.style));
                if m.show_label {
                    // One text row below the node.
                    let label_y = height - stage.y - height / 12.0;
                    ctx.print(
                        stage.x,
                        label_y.max(0.0),
                        Span::styled(stage.label, Style::default().fg(Color::Gray)),
                    );
                }
            }
        });
    f.render_widget(canvas, area);
}

/// Terminal cell a stage lands on inside the canvas' inner area.
pub fn stage_cell(graph: &StageGraph, stage: &Stage, inner: Rect) -> (u16, u16) {
    if inner.width == 0 || inner.height == 0 {
        return (inner.x, inner.y);
    }
    let col = (stage.x / graph.width * (inner.width - 1) as f64).round() as u16;
    let row = (stage.y / graph.height * (inner.height - 1) as f64).round() as u16;
    (inner.x + col, inner.y + row)
}

pub fn node_style(active: bool, on_route: bool) -> NodeMark {
    if active {
        NodeMark {
            symbol: "◉",
            style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            show_label: true,
        }
    } else if on_route {
        NodeMark {
            symbol: "●",
            style: Style::default().fg(Color::Cyan),
            show_label: true,
        }
    } else {
        NodeMark {
            symbol: "○",
            style: Style::default().fg(Color::DarkGray),
            show_label: false,
        }
    }
}
