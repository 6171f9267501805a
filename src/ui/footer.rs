use crate::app::Focus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draws the footer with instructions for whatever has focus.
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, focus: Focus) {
    let instructions = match focus {
        Focus::Page => {
            "↑/↓ scroll · Tab/1-5 sections · s AI summary · c chat · l/m/g links · q quit"
        }
        Focus::Chat => "Type a question, Enter to send · ↑/↓ scroll · Esc to close chat",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
