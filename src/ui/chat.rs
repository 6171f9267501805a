use crate::app::App;
use crate::constants::{CHAT_HEIGHT, CHAT_PLACEHOLDER, CHAT_WIDTH};
use crate::ui::message::render_message;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The popup's rectangle: bottom-right corner of `area`, shrunk to fit.
pub fn chat_area(area: Rect) -> Rect {
    let width = CHAT_WIDTH.min(area.width);
    let height = CHAT_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

/// The collapsed launcher shown while the chat is closed.
pub fn draw_launcher(f: &mut Frame<'_>, area: Rect) {
    let label = " 💬 Ask AI [c] ";
    let width = (label.width() as u16).min(area.width);
    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height.saturating_sub(1),
        width,
        height: 1.min(area.height),
    };
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(label).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        rect,
    );
}

pub fn draw_chat(f: &mut Frame<'_>, area: Rect, app: &App) {
    let popup = chat_area(area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Green)),
            Span::styled(
                format!("Ask AI {} ✨ ", app.profile.first_name()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]))
        .title_bottom(Line::styled(" Esc ✕ ", Style::default().fg(Color::DarkGray)).right_aligned());
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let [messages_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

    draw_messages(f, app, messages_area);
    draw_input(f, app, input_area);
}

fn draw_messages(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for message in app.chat.transcript().iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, area.width));
    }

    if app.chat.is_pending() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("┌─ AI ", Style::default().fg(Color::Gray)),
            Span::styled(app.status.typing_dots(), Style::default().fg(Color::Gray)),
        ]));
    }

    // Follow the newest message unless the user scrolled up.
    let total_lines = lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(area.height);
    let offset = max_scroll.saturating_sub(app.chat_scroll);

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn draw_input(f: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let input = app.chat.input();
    let send_style = if app.chat.can_submit() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let visible_width = inner.width.saturating_sub(4) as usize;
    let input_width = input.width();
    let shown: String = if input_width > visible_width {
        // Keep the tail visible, like a single-line text field.
        let mut tail = String::new();
        let mut width = 0;
        for c in input.chars().rev() {
            width += c.width().unwrap_or(0);
            if width > visible_width {
                break;
            }
            tail.insert(0, c);
        }
        tail
    } else {
        input.to_string()
    };

    let body = if input.is_empty() {
        Span::styled(CHAT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(shown.clone(), Style::default().fg(Color::White))
    };

    let [text_area, send_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(2)]).areas(inner);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("→ ", Style::default().fg(Color::DarkGray)),
            body,
        ])),
        text_area,
    );
    f.render_widget(Paragraph::new(Span::styled("⏎", send_style)), send_area);

    if !app.chat.is_pending() {
        let cursor_x = text_area.x + 2 + shown.width() as u16;
        f.set_cursor_position((cursor_x.min(text_area.right().saturating_sub(1)), text_area.y));
    }
}
