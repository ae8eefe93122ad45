use glam::Vec3;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as Segment, Rectangle};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use stride::{CameraRig, MovementState};

use crate::app::{LogLevel, ViewerState};
use crate::scene::{DemoScene, FLOOR_HALF_EXTENT, PROP_POSITION};

/// World units shown across the map's height.
const MAP_SPAN: f64 = 24.0;
const GRID_STEP: f32 = 10.0;

pub fn render(frame: &mut Frame, scene: &DemoScene, viewer: &ViewerState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(38)])
        .split(frame.area());

    let panel = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(6),
        ])
        .split(columns[1]);

    render_map(frame, columns[0], scene);
    render_state(frame, panel[0], scene);
    render_blend(frame, panel[1], scene);
    render_log(frame, panel[2], viewer);
    render_help(frame, panel[3], viewer);
}

/// Plane coordinates for the map: +x right, -z up.
fn plane(point: Vec3) -> (f64, f64) {
    (point.x as f64, -point.z as f64)
}

fn render_map(frame: &mut Frame, area: Rect, scene: &DemoScene) {
    let controller = scene.session.controller();
    let camera = scene.session.camera();
    let (cx, cy) = plane(controller.position());

    // terminal cells are about twice as tall as wide
    let aspect = if area.height > 0 {
        area.width as f64 / (area.height as f64 * 2.0)
    } else {
        1.0
    };
    let half_y = MAP_SPAN / 2.0;
    let half_x = half_y * aspect;

    let color = state_color(controller.current());
    let facing = controller.rotation() * Vec3::Z;
    let (fx, fy) = plane(controller.position() + facing * 1.5);
    let (ex, ey) = plane(camera.position());
    let (tx, ty) = plane(camera.target());
    let (px, py) = plane(PROP_POSITION);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Floor ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .x_bounds([cx - half_x, cx + half_x])
        .y_bounds([cy - half_y, cy + half_y])
        .paint(move |ctx| {
            let extent = FLOOR_HALF_EXTENT as f64;
            let mut line = -FLOOR_HALF_EXTENT + GRID_STEP;
            while line < FLOOR_HALF_EXTENT {
                let l = line as f64;
                ctx.draw(&Segment::new(l, -extent, l, extent, Color::DarkGray));
                ctx.draw(&Segment::new(-extent, l, extent, l, Color::DarkGray));
                line += GRID_STEP;
            }
            ctx.draw(&Rectangle {
                x: -extent,
                y: -extent,
                width: extent * 2.0,
                height: extent * 2.0,
                color: Color::Gray,
            });
            ctx.layer();

            ctx.draw(&Circle {
                x: px,
                y: py,
                radius: 1.2,
                color: Color::Magenta,
            });
            ctx.print(px + 1.6, py, Span::styled("monster", Style::default().fg(Color::Magenta)));

            ctx.draw(&Segment::new(ex, ey, tx, ty, Color::Yellow));
            ctx.print(ex, ey, Span::styled("cam", Style::default().fg(Color::Yellow)));

            ctx.draw(&Circle {
                x: cx,
                y: cy,
                radius: 0.5,
                color,
            });
            ctx.draw(&Segment::new(cx, cy, fx, fy, color));
        });

    frame.render_widget(canvas, area);
}

fn state_color(state: MovementState) -> Color {
    match state {
        MovementState::Idle => Color::Green,
        MovementState::Walk => Color::Cyan,
        MovementState::Run => Color::Red,
    }
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::Gray))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White))
}

fn render_state(frame: &mut Frame, area: Rect, scene: &DemoScene) {
    let session = &scene.session;
    let controller = session.controller();
    let camera = session.camera();
    let position = controller.position();

    let held: Vec<&str> = session
        .keyboard()
        .snapshot()
        .held()
        .map(|key| key.name())
        .collect();
    let held = if held.is_empty() {
        "-".to_string()
    } else {
        held.join(" ")
    };
    let mode = if controller.is_run_toggled() { "run" } else { "walk" };

    let lines = vec![
        Line::from(vec![
            label("State: "),
            Span::styled(
                controller.current().to_string(),
                Style::default()
                    .fg(state_color(controller.current()))
                    .add_modifier(Modifier::BOLD),
            ),
            label("  Mode: "),
            value(mode.to_string()),
        ]),
        Line::from(vec![
            label("Pos: "),
            value(format!(
                "{:6.2} {:5.2} {:6.2}",
                position.x, position.y, position.z
            )),
        ]),
        Line::from(vec![
            label("Facing: "),
            value(format!("{:7.1}", controller.orientation().to_degrees())),
            label("  Goal: "),
            value(format!("{:7.1}", controller.target_orientation().to_degrees())),
        ]),
        Line::from(vec![
            label("Cam az: "),
            value(format!("{:7.1}", camera.azimuth().to_degrees())),
            label("  Dist: "),
            value(format!("{:5.1}", camera.distance())),
        ]),
        Line::from(vec![
            label("Tilt: "),
            value(format!("{:5.1}", camera.polar_angle().to_degrees())),
        ]),
        Line::from(vec![label("Frames: "), value(session.frames().to_string())]),
        Line::from(vec![label("Held: "), value(held)]),
    ];

    let block = Block::default()
        .title(" Character ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_blend(frame: &mut Frame, area: Rect, scene: &DemoScene) {
    let block = Block::default()
        .title(" Blend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(inner);

    let library = scene.session.controller().library();
    let mixer = scene.session.mixer();
    for (state, row) in MovementState::ALL.into_iter().zip(rows.iter()) {
        let weight = library
            .clip(state)
            .map(|clip| mixer.weight(clip))
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(state_color(state)))
            .ratio(weight as f64)
            .label(format!("{state} {:3.0}%", weight * 100.0));
        frame.render_widget(gauge, *row);
    }
}

fn render_log(frame: &mut Frame, area: Rect, viewer: &ViewerState) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let visible = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = viewer
        .log_lines()
        .rev()
        .take(visible)
        .map(|(level, message)| {
            let color = match level {
                LogLevel::Info => Color::White,
                LogLevel::Warn => Color::Yellow,
            };
            Line::from(Span::styled(message.as_str(), Style::default().fg(color)))
        })
        .collect();
    lines.reverse();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_help(frame: &mut Frame, area: Rect, viewer: &ViewerState) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let shift = if viewer.release_events() {
        "Shift/Tab toggle run"
    } else {
        "Tab toggle run"
    };
    let text = vec![
        Line::from("WASD/arrows move"),
        Line::from(shift),
        Line::from("Q/E orbit  R/F tilt  +/- zoom"),
        Line::from("Esc quit"),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(paragraph, area);
}
