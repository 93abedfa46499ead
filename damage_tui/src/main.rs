//! damage_tui - Interactive weapon damage calculator

mod app;
mod form;
mod ui;

use app::{App, InputMode, Tab};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use damage_core::config::load_calculator_config;
use damage_core::{default_config, DamageCalculator};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "damage.toml";
const LOG_FILE: &str = "damage_tui.log";
const DEFAULT_LOG_FILTER: &str = "damage_tui=info,damage_core=info";

fn main() -> io::Result<()> {
    init_logging()?;
    tracing::info!("damage_tui starting");

    let calculator = load_calculator();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(calculator);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(saved = app.results.len(), "damage_tui exiting");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let quit = match app.input_mode {
                    InputMode::Normal => handle_normal_key(app, key),
                    InputMode::Naming => {
                        handle_naming_key(app, key);
                        false
                    }
                };
                if quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Returns true when the app should quit
fn handle_normal_key(app: &mut App, key: KeyEvent) -> bool {
    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return true,
        (KeyCode::Tab, _) => app.next_tab(),
        (KeyCode::BackTab, _) => app.prev_tab(),
        (KeyCode::Char('1'), _) => app.set_tab(0),
        (KeyCode::Char('2'), _) => app.set_tab(1),
        (KeyCode::Char('3'), _) | (KeyCode::Char('?'), _) => app.set_tab(2),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.adjust(-1, coarse),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.adjust(1, coarse),
        (KeyCode::Char('H'), _) => app.adjust(-1, true),
        (KeyCode::Char('L'), _) => app.adjust(1, true),
        (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => app.on_space(),
        (KeyCode::Char('s'), _) => app.begin_naming(),
        (KeyCode::Char('r'), _) => app.reset_form(),
        _ if app.current_tab == Tab::Saved => match key.code {
            KeyCode::Char('x') => app.export_csv(),
            KeyCode::Char('J') => app.export_json(),
            KeyCode::Char('d') => app.delete_selected_record(),
            KeyCode::Char('c') => app.clear_records(),
            _ => {}
        },
        _ => {}
    }
    false
}

fn handle_naming_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.confirm_save(),
        KeyCode::Esc => app.cancel_naming(),
        KeyCode::Backspace => app.pop_name_char(),
        KeyCode::Char(c) => app.push_name_char(c),
        _ => {}
    }
}

/// Log to a file; stdout belongs to the terminal UI
fn init_logging() -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;
    let filter = EnvFilter::try_from_env("DAMAGE_TUI_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Use ./damage.toml when present, otherwise the bundled defaults
fn load_calculator() -> DamageCalculator {
    let path = Path::new(CONFIG_FILE);
    let config = if path.exists() {
        match load_calculator_config(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = CONFIG_FILE, error = %e, "invalid config, using defaults");
                default_config()
            }
        }
    } else {
        default_config()
    };

    DamageCalculator::from_config(&config).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid weapon overrides, using built-in table");
        DamageCalculator::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use damage_core::DamageCalculator;

    fn press(app: &mut App, c: char) -> bool {
        handle_normal_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn app_with_saved(count: usize) -> App {
        let mut app = App::new(DamageCalculator::default());
        for _ in 0..count {
            app.begin_naming();
            app.confirm_save();
        }
        app
    }

    #[test]
    fn test_record_keys_ignored_on_calculator_tab() {
        let mut app = app_with_saved(2);
        assert_eq!(app.current_tab, Tab::Calculator);
        let status = app.status.clone();

        assert!(!press(&mut app, 'c'));
        assert!(!press(&mut app, 'd'));
        assert_eq!(app.results.len(), 2);
        assert_eq!(app.status, status);
    }

    #[test]
    fn test_record_keys_on_saved_tab() {
        let mut app = app_with_saved(2);
        press(&mut app, '2');
        assert_eq!(app.current_tab, Tab::Saved);

        press(&mut app, 'd');
        assert_eq!(app.results.len(), 1);
        press(&mut app, 'c');
        assert!(app.results.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with_saved(1);
        assert!(press(&mut app, 'q'));
        assert!(handle_normal_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert_eq!(app.results.len(), 1);
    }
}
