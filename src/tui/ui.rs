use crate::tui::textarea::expand_tabs;
use crate::tui::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &str = "^S save  ^T todo  ^P priority  ^E editor  ^C quit";

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Text area
            Constraint::Length(1), // Status bar
        ])
        .split(f.size());

    draw_title_bar(f, app, chunks[0]);
    draw_text_area(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

fn draw_title_bar(f: &mut Frame, app: &App, area: Rect) {
    let marker = if app.is_modified() { " [+]" } else { "" };
    let title = format!(" lsq - {}{}", app.session.path().display(), marker);
    let bar = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(bar, area);
}

fn draw_text_area(f: &mut Frame, app: &mut App, area: Rect) {
    let height = area.height as usize;
    app.textarea.scroll_to_cursor(height);

    let scroll = app.textarea.scroll();
    let end = (scroll + height).min(app.textarea.line_count());
    let lines: Vec<Line> = (scroll..end)
        .map(|row| Line::from(expand_tabs(&app.textarea.line(row))))
        .collect();
    f.render_widget(Paragraph::new(lines), area);

    let (row, _) = app.textarea.cursor();
    let x = area.x + (app.textarea.cursor_display_col() as u16).min(area.width.saturating_sub(1));
    let y = area.y + (row - scroll) as u16;
    f.set_cursor(x, y);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = match app.status_message() {
        Some(msg) => Line::from(Span::styled(
            msg.to_string(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
