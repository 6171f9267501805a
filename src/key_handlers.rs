use crate::app::{App, ContactLink, Focus};
use crate::ui::page::Section;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

const MOUSE_SCROLL_LINES: i32 = 3;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.focus() {
        Focus::Chat => handle_chat_input(app, key),
        Focus::Page => handle_page_input(app, key),
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match (app.focus(), mouse.kind) {
        (Focus::Page, MouseEventKind::ScrollDown) => app.scroll_by(MOUSE_SCROLL_LINES),
        (Focus::Page, MouseEventKind::ScrollUp) => app.scroll_by(-MOUSE_SCROLL_LINES),
        (Focus::Chat, MouseEventKind::ScrollUp) => {
            app.chat_scroll = app.chat_scroll.saturating_add(MOUSE_SCROLL_LINES as u16)
        }
        (Focus::Chat, MouseEventKind::ScrollDown) => {
            app.chat_scroll = app.chat_scroll.saturating_sub(MOUSE_SCROLL_LINES as u16)
        }
        _ => {}
    }
}

fn handle_page_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(app.page_step()),
        KeyCode::PageUp => app.scroll_by(-app.page_step()),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Tab => {
            let next = app.active_section().next();
            app.jump_to(next);
        }
        KeyCode::BackTab => {
            let prev = app.active_section().prev();
            app.jump_to(prev);
        }
        KeyCode::Char('v') => app.jump_to(Section::Experience),
        KeyCode::Char('s') => {
            app.request_summary();
        }
        KeyCode::Char('c') | KeyCode::Char('a') => app.open_chat(),
        KeyCode::Char('l') => app.open_contact(ContactLink::LinkedIn),
        KeyCode::Char('m') => app.open_contact(ContactLink::Email),
        KeyCode::Char('g') => app.open_contact(ContactLink::GitHub),
        KeyCode::Char(c) => {
            if let Some(section) = Section::from_digit(c) {
                app.jump_to(section);
            }
        }
        _ => {}
    }
}

fn handle_chat_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_chat(),
        KeyCode::Enter => {
            app.submit_chat();
        }
        KeyCode::Backspace => app.chat.backspace(),
        KeyCode::Up => app.chat_scroll = app.chat_scroll.saturating_add(1),
        KeyCode::Down => app.chat_scroll = app.chat_scroll.saturating_sub(1),
        KeyCode::PageUp => app.chat_scroll = app.chat_scroll.saturating_add(5),
        KeyCode::PageDown => app.chat_scroll = app.chat_scroll.saturating_sub(5),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat.push_char(c)
        }
        _ => {}
    }
}
