//! Saved tab - results stored this session

use super::{damage_line, section_header};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    if app.results.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from("  No saved results yet."),
            Line::from("  Press [s] on the Calculator tab to save the current calculation."),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Saved Results "));
        f.render_widget(paragraph, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(area);

    draw_table(f, app, chunks[0]);
    draw_detail(f, app, chunks[1]);
}

fn draw_table(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Name", "Weapon Type", "Displayed Damage"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .results
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.name.clone()),
                Cell::from(record.weapon_type.name()),
                Cell::from(record.displayed_damage.to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .highlight_symbol("▶ ")
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Saved Results ({}) ", app.results.len())),
    );

    let mut state = TableState::default();
    state.select(Some(app.selected_record));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_detail(f: &mut Frame, app: &App, area: Rect) {
    let Some(record) = app.results.get(app.selected_record) else {
        return;
    };

    let mut lines = vec![
        section_header("Inputs"),
        damage_line("Base Damage", record.base_damage as f64),
        damage_line("Skill Level", record.skill_level as f64),
        damage_line("Perk Rank", record.perk_rank as f64),
        damage_line("Fortify Enchantments %", record.fortify_enchantment * 100.0),
        damage_line("Fortify Potion %", record.fortify_potion * 100.0),
    ];
    if record.ammo_damage > 0 {
        lines.push(damage_line("Ammo Damage", record.ammo_damage as f64));
    }
    if record.tempering {
        lines.push(damage_line("Smithing Skill", record.smithing_level as f64));
        lines.push(damage_line("Smithing Improvement", record.tempering_bonus));
    }
    lines.push(Line::from(""));
    lines.push(section_header("Outputs"));
    lines.push(damage_line("Actual Damage", record.actual_damage));
    lines.push(damage_line("Power Attack", record.power_attack_damage));
    lines.push(damage_line("Sneak Attack", record.sneak_attack_damage));
    lines.push(damage_line("Power Sneak Attack", record.power_sneak_attack_damage));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(paragraph, area);
}
