// nook - a personal profile page for the terminal
// Theme switching, pointer parallax, and hover flair over plain text.

mod app;
mod motion;
mod prefs;
mod theme;
mod ui;

use anyhow::Result;
use app::event::{handle_key_event, handle_mouse_event};
use app::AppState;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use prefs::JsonPrefs;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    // Setup terminal; mouse capture feeds the parallax and hover reactions
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    let mut app = AppState::new(Box::new(JsonPrefs::new()));
    let tick = Duration::from_millis(app::config::TICK_INTERVAL_MS);
    loop {
        app.on_tick();
        terminal.draw(|f| ui::draw(f, &mut app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => {
                    handle_key_event(&mut app, key.code);
                }
                Event::Mouse(mouse) => handle_mouse_event(&mut app, mouse),
                Event::Resize(width, height) => app.on_resize(width, height),
                _ => {}
            }
        }
    }
}
