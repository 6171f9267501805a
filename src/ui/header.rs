use crate::ui::page::Section;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Nav bar: logo on the left, section links in the middle, the active
/// section highlighted.
pub fn draw_header(f: &mut Frame<'_>, area: Rect, logo: &str, active: Section) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [logo_area, nav_area] =
        Layout::horizontal([Constraint::Length(8), Constraint::Min(1)]).areas(inner);

    let logo_style = if active == Section::Home {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {}", logo), logo_style)),
        logo_area,
    );

    let mut spans = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate().skip(1) {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        let style = if *section == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, section.label()), style));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        nav_area,
    );
}
