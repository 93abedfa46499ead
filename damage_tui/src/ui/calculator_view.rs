//! Calculator tab - input form and live results

use super::{damage_line, section_header};
use crate::app::App;
use damage_core::DamageReport;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(area);

    draw_form(f, app, chunks[0]);

    match &app.report {
        Ok(report) => draw_results(f, report, chunks[1]),
        Err(e) => draw_error(f, e, chunks[1]),
    }
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let profile = app.profile();
    let selected = app.selected();
    let mut lines: Vec<Line> = Vec::new();

    for field in app.visible_fields() {
        if let Some(section) = field.section() {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(section_header(section));
        }

        let is_selected = field == selected;
        let marker = if is_selected { "▶ " } else { "  " };
        let label_style = if is_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = if field.is_toggle() {
            app.form.value_text(field)
        } else {
            format!("◀ {} ▶", app.form.value_text(field))
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:34}", app.form.label(field, profile)), label_style),
            Span::styled(value, Style::default().fg(Color::White)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Inputs "));

    f.render_widget(paragraph, area);
}

fn draw_results(f: &mut Frame, report: &DamageReport, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let mut summary = vec![
        Line::from(vec![
            Span::styled(
                format!("{:28}", "Displayed Weapon Damage"),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                report.displayed.rounded().to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        damage_line("Actual Damage", report.displayed.value()),
    ];
    if report.inputs.tempering_enabled() {
        summary.push(damage_line("Smithing Improvement", report.tempering_bonus));
    }
    if report.inputs.ammo_damage > 0 {
        summary.push(damage_line("Ammo Damage", report.inputs.ammo_damage as f64));
    }
    if let Some(dual) = report.attacks.dual_wield_power_attack {
        summary.push(damage_line("Dual-Wield Power Attack", dual));
    }

    let paragraph = Paragraph::new(summary)
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", report.category)));
    f.render_widget(paragraph, chunks[0]);

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Normal Attack"),
        Cell::from("Sneak Attack"),
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows = vec![
        Row::new(vec![
            Cell::from("Normal Attack"),
            Cell::from(format!("{:.1}", report.displayed.value())),
            Cell::from(format!("{:.1}", report.attacks.sneak_attack)),
        ]),
        Row::new(vec![
            Cell::from("Power Attack"),
            Cell::from(format!("{:.1}", report.attacks.power_attack)),
            Cell::from(format!("{:.1}", report.attacks.power_sneak_attack)),
        ]),
    ];

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Results "));
    f.render_widget(table, chunks[1]);
}

fn draw_error(f: &mut Frame, error: &str, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "Cannot calculate",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error.to_string()),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Results "));

    f.render_widget(paragraph, area);
}
