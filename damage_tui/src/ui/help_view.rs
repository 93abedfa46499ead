//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("1-3", "Jump to tab (Calculator/Saved/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select field / saved result"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Calculator ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("←/h  →/l", "Adjust value (Shift or H/L: ×10)"),
        key_line("Space / Enter", "Toggle checkbox, cycle weapon type"),
        key_line("s", "Save current result (type a name, Enter)"),
        key_line("r", "Reset form to defaults"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Saved ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("x", "Export all saved results to results.csv"),
        key_line("J", "Export all saved results to results.json"),
        key_line("d", "Delete selected result"),
        key_line("c", "Clear all saved results"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Formulas ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Displayed Damage:", Style::default().fg(Color::Yellow))),
        Line::from("  (Base + Tempering) × Skill × Perk × Fortify × Seeker + Ammo"),
        Line::from("  Skill = 1 + 0.5 × Level/100    Perk = 1 + 0.2 × Rank"),
        Line::from("  Fortify = 1 + Enchantments + Potion (additive)"),
        Line::from(""),
        Line::from(Span::styled("Tempering:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  Active model: {}",
            app.calculator.tempering_model().name()
        )),
        Line::from("  Approximate = Base × Smithing/200 × (1.5 with perk) × Fortify × Seeker"),
        Line::from(""),
        Line::from(Span::styled("Attacks:", Style::default().fg(Color::Yellow))),
        Line::from("  Power = Displayed × 2 (× 1.25 with perk), bows have none"),
        Line::from("  Sneak = Displayed × category multiplier (× 2 with gloves)"),
        Line::from("  Dual-wield power attack ≈ Displayed × 3"),
        Line::from(""),
        Line::from(Span::styled("Sneak multipliers:", Style::default().fg(Color::Yellow))),
        Line::from(sneak_summary(app)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Formulas "));

    f.render_widget(paragraph, area);
}

fn sneak_summary(app: &App) -> String {
    let parts: Vec<String> = app
        .calculator
        .table()
        .iter()
        .map(|p| format!("{} {}×", p.category, p.sneak_multiplier))
        .collect();
    format!("  {}", parts.join("   "))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
