// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;
pub mod message;
pub mod page;

use crate::app::{App, AppEvent};
use crate::constants::{MAX_PAGE_WIDTH, TICK_RATE_MS};
use crate::key_handlers::{handle_key, handle_mouse};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Terminal input and the UI clock, forwarded from the blocking reader.
enum Event {
    Input(CEvent),
    Tick,
}

/// Takes over the terminal, runs the app until it quits, then restores the
/// terminal even if the loop failed.
pub async fn run_ui(app: App, app_events: UnboundedReceiver<AppEvent>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, app_events).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("UI loop failed: {}", err);
    }
    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut app_events: UnboundedReceiver<AppEvent>,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    // crossterm's poll/read block, so the reader lives on a blocking thread.
    tokio::task::spawn_blocking(move || {
        let tick_rate = Duration::from_millis(TICK_RATE_MS);
        loop {
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(Event::Input(ev)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {
                    if tx.send(Event::Tick).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    error!("Failed to poll terminal: {}", e);
                    return;
                }
            }
        }
    });

    info!("UI started");
    loop {
        terminal.draw(|f| draw(f, &mut app))?;

        tokio::select! {
            Some(event) = rx.recv() => match event {
                Event::Input(CEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key);
                }
                Event::Input(CEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
                Event::Input(_) => {}
                Event::Tick => app.on_tick(),
            },
            Some(event) = app_events.recv() => {
                debug!("Completion event received");
                app.handle_event(event);
            }
            else => break,
        }

        if app.should_quit {
            break;
        }
    }

    info!("UI exiting");
    Ok(())
}

/// Renders one frame: nav bar, the page column, footer and the chat widget
/// floating over the page.
pub fn draw(f: &mut Frame, app: &mut App) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let column_width = body_area.width.min(MAX_PAGE_WIDTH);
    let column = Rect {
        x: body_area.x + (body_area.width - column_width) / 2,
        y: body_area.y,
        width: column_width,
        height: body_area.height,
    };
    let [page_area] = Layout::horizontal([Constraint::Min(1)])
        .horizontal_margin(2)
        .areas(column);

    let layout = app.frame_layout(page_area.width, page_area.height);
    let active = layout.active_section(app.scroll, page_area.height);

    header::draw_header(f, header_area, &app.profile.initials(), active);

    f.render_widget(
        Paragraph::new(layout.into_lines()).scroll((app.scroll, 0)),
        page_area,
    );

    footer::draw_footer(f, footer_area, app.focus());

    if app.chat_open {
        chat::draw_chat(f, body_area, app);
    } else {
        chat::draw_launcher(f, body_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::backend::TestBackend;
    use wiremock::MockServer;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn test_draw_page_and_launcher() {
        let mock_server = MockServer::start().await;
        let (mut app, _rx) = test_app(&mock_server);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("HB."));
        assert!(text.contains("Experience"));
        assert!(text.contains("Harmish Bhavsar"));
        assert!(text.contains("Ask AI [c]"));
        assert_eq!(app.viewport_height, 27);
    }

    #[tokio::test]
    async fn test_draw_chat_widget() {
        let mock_server = MockServer::start().await;
        let (mut app, _rx) = test_app(&mock_server);
        app.open_chat();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("Ask AI Harmish"));
        assert!(text.contains(crate::constants::CHAT_PLACEHOLDER));
        assert!(text.contains("Esc to close chat"));
    }

    #[tokio::test]
    async fn test_nav_follows_jump() {
        let mock_server = MockServer::start().await;
        let (mut app, _rx) = test_app(&mock_server);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| draw(f, &mut app)).unwrap();
        app.jump_to(crate::ui::page::Section::Education);
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Education & Background"));
        assert!(!text.contains("Hi, I'm"));
    }
}
