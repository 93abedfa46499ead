//! UI rendering

mod calculator_view;
mod help_view;
mod saved_view;

use crate::app::{App, InputMode, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status / name entry
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Calculator => calculator_view::draw(f, app, chunks[1]),
        Tab::Saved => saved_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_status(f, app, chunks[2]);
    draw_keybindings(f, app, chunks[3]);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let paragraph = match app.input_mode {
        InputMode::Naming => Paragraph::new(Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::Yellow)),
            Span::styled(app.name_buffer.clone(), Style::default().fg(Color::White)),
            Span::styled(
                "_",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::SLOW_BLINK),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Save result (Enter to save, Esc to cancel) "),
        ),
        InputMode::Normal => {
            let text = app.status.clone().unwrap_or_default();
            Paragraph::new(text)
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title(" Status "))
        }
    };

    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![
        ("Tab", "Next tab"),
        ("q", "Quit"),
    ];

    let tab_keys: Vec<(&str, &str)> = match (app.input_mode, app.current_tab) {
        (InputMode::Naming, _) => vec![
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
        (_, Tab::Calculator) => vec![
            ("↑/↓", "Field"),
            ("←/→", "Adjust (Shift ×10)"),
            ("Space", "Toggle"),
            ("s", "Save"),
            ("r", "Reset"),
        ],
        (_, Tab::Saved) => vec![
            ("↑/↓", "Select"),
            ("x", "Export CSV"),
            ("J", "Export JSON"),
            ("d", "Delete"),
            ("c", "Clear"),
        ],
        (_, Tab::Help) => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Weapon Damage Calculator "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn damage_line(name: &str, value: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:28}", name),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{:.1}", value),
            Style::default().fg(Color::White),
        ),
    ])
}
