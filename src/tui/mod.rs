// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, mouse input, timer ticks)
// - Translating terminal events into page events for the reducers

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::events::{Field, FormEvent, UiEvent};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use layout::HitTarget;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(&config, log_buffer);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two sources drive the app: terminal input (keys and mouse) and a
/// periodic tick. The tick advances every timed behavior - glide
/// scrolling, reveal delays, typing, toast expiry - by dispatching
/// `UiEvent::Tick` into the reducers.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // 20 FPS is plenty for a page this size
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick drives animations and due timers
            _ = tick_interval.tick() => {
                app.dispatch(UiEvent::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: focused form captures text first, then global keys.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    let key = key_event.code;

    // Layer 1: a focused form field captures text input. Characters and
    // Backspace bypass the debouncing input handler so typing is never
    // swallowed; the structural keys still go through it.
    if app.form_focused() {
        match key {
            KeyCode::Char(c) => {
                app.dispatch(UiEvent::Form(FormEvent::Input(c)));
                return;
            }
            KeyCode::Backspace => {
                app.dispatch(UiEvent::Form(FormEvent::Backspace));
                return;
            }
            KeyCode::Tab => {
                if app.handle_key_press(key) {
                    app.dispatch(UiEvent::Form(FormEvent::FocusNext));
                }
                return;
            }
            KeyCode::Enter => {
                if app.handle_key_press(key) {
                    app.dispatch(UiEvent::Form(FormEvent::Submit));
                }
                return;
            }
            KeyCode::Esc => {
                if app.handle_key_press(key) {
                    app.dispatch(UiEvent::Form(FormEvent::Blur));
                }
                return;
            }
            _ => {}
        }
    }

    // Layer 2: global keys (debounced / hold-to-repeat)
    if !app.handle_key_press(key) {
        return;
    }

    let viewport = app.state.viewport as i32;
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('m') => app.dispatch(UiEvent::MenuToggle),
        KeyCode::Char('f') => app.dispatch(UiEvent::Form(FormEvent::Focus(Field::Name))),
        KeyCode::Esc => {
            if app.state.menu_open {
                app.dispatch(UiEvent::OutsideClick);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(UiEvent::ScrollBy(-1)),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(UiEvent::ScrollBy(1)),
        KeyCode::PageUp => app.dispatch(UiEvent::ScrollBy(-viewport)),
        KeyCode::PageDown => app.dispatch(UiEvent::ScrollBy(viewport)),
        KeyCode::Home => app.dispatch(UiEvent::ScrollTo(0)),
        KeyCode::End => {
            let max = app.state.max_scroll(&app.page);
            app.dispatch(UiEvent::ScrollTo(max));
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            app.dispatch(UiEvent::NavLinkClick(index));
        }
        _ => {}
    }
}

/// Handle mouse input
///
/// Positions are resolved against the hit map recorded by the last
/// draw, which mirrors what is actually on screen.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.dispatch(UiEvent::ScrollBy(-3)),
        MouseEventKind::ScrollDown => app.dispatch(UiEvent::ScrollBy(3)),
        MouseEventKind::Down(MouseButton::Left) => {
            match app.hits.hit(mouse_event.column, mouse_event.row) {
                Some(HitTarget::NavToggle) => app.dispatch(UiEvent::MenuToggle),
                Some(HitTarget::NavLink(i)) | Some(HitTarget::MenuLink(i)) => {
                    app.dispatch(UiEvent::NavLinkClick(i));
                }
                // Clicks on the open panel body neither select nor close
                Some(HitTarget::MenuPanel) => {}
                Some(HitTarget::Tag(id)) => app.dispatch(UiEvent::TagClick(id)),
                Some(HitTarget::EmailLink) => {}
                Some(HitTarget::FormField(field)) => {
                    app.dispatch(UiEvent::Form(FormEvent::Focus(field)));
                }
                Some(HitTarget::FormSubmit) => app.dispatch(UiEvent::Form(FormEvent::Submit)),
                None => {
                    if app.state.menu_open {
                        app.dispatch(UiEvent::OutsideClick);
                    }
                }
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            if let Some(HitTarget::EmailLink) = app.hits.hit(mouse_event.column, mouse_event.row) {
                app.dispatch(UiEvent::EmailContextMenu);
            }
        }
        _ => {}
    }
}
