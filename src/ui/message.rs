use crate::chat::{ChatMessage, Role};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

const USER_INDENT: &str = "    ";

fn base_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan),
        Role::Assistant => Style::default().fg(Color::Gray),
    }
}

/// Renders one transcript message into bordered lines of at most `width`
/// columns. User messages are indented so the two sides read apart.
pub fn render_message(message: &ChatMessage, width: u16) -> Vec<Line<'static>> {
    let style = base_style(message.role());
    let indent = if message.from_user() { USER_INDENT } else { "" };
    let mut lines = Vec::new();

    let who = match message.role() {
        Role::User => "You",
        Role::Assistant => "AI",
    };
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─ ".to_string(), style),
        Span::styled(who.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" · {}", message.sent_at().format("%H:%M")),
            style.add_modifier(Modifier::DIM),
        ),
    ]));

    let wrap_width = (width as usize)
        .saturating_sub(indent.len() + 2)
        .max(8);
    let mut in_code_block = false;
    for raw in message.text().lines() {
        if raw.trim().starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }

        if in_code_block {
            let code_style = Style::default()
                .fg(Color::Rgb(209, 154, 102))
                .add_modifier(Modifier::BOLD);
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled("▎".to_string(), Style::default().fg(Color::DarkGray)),
                Span::styled(format!(" {}", raw), code_style),
            ]));
            continue;
        }

        if raw.trim().is_empty() {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│".to_string(), style),
            ]));
            continue;
        }

        for wrapped in wrap(raw, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped.into_owned(), style),
            ]));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_indented() {
        let message = ChatMessage::new(Role::User, "What are his skills?");
        let lines = render_message(&message, 40);
        assert!(lines[0].to_string().starts_with("    ┌─ You"));
        assert_eq!(lines[1].to_string(), "    │ What are his skills?");
        assert_eq!(lines.last().unwrap().to_string(), "    ╰─");
    }

    #[test]
    fn test_long_reply_wraps() {
        let message = ChatMessage::new(Role::Assistant, "word ".repeat(30));
        let lines = render_message(&message, 30);
        assert!(lines.len() > 4);
        assert!(lines[1..lines.len() - 1]
            .iter()
            .all(|line| line.width() <= 30));
    }

    #[test]
    fn test_code_block_lines_are_marked() {
        let message = ChatMessage::new(Role::Assistant, "Here:\n```\nfn main() {}\n```");
        let lines = render_message(&message, 40);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.contains(&"│ ▎ fn main() {}".to_string()));
        assert!(!text.iter().any(|l| l.contains("```")));
    }
}
