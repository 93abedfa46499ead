//! Application state

use crate::form::{Field, FormState};
use damage_core::{DamageCalculator, DamageReport, ResultLog, WeaponProfile};
use std::path::PathBuf;

pub const CSV_EXPORT_FILE: &str = "results.csv";
pub const JSON_EXPORT_FILE: &str = "results.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calculator,
    Saved,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Calculator, Tab::Saved, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Calculator => "Calculator",
            Tab::Saved => "Saved",
            Tab::Help => "Help",
        }
    }
}

/// Whether keystrokes edit the form or type a save name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Naming,
}

pub struct App {
    pub current_tab: Tab,
    pub input_mode: InputMode,
    pub calculator: DamageCalculator,
    pub form: FormState,
    pub selected_field: usize,
    /// Latest calculation, or the validation error that prevented it
    pub report: Result<DamageReport, String>,
    pub results: ResultLog,
    pub selected_record: usize,
    pub name_buffer: String,
    pub status: Option<String>,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(calculator: DamageCalculator) -> Self {
        let mut app = App {
            current_tab: Tab::Calculator,
            input_mode: InputMode::Normal,
            calculator,
            form: FormState::default(),
            selected_field: 0,
            report: Err("not calculated".to_string()),
            results: ResultLog::new(),
            selected_record: 0,
            name_buffer: String::new(),
            status: None,
            export_dir: PathBuf::from("."),
        };
        app.recalculate();
        app
    }

    pub fn profile(&self) -> &WeaponProfile {
        self.calculator.profile(self.form.category)
    }

    pub fn visible_fields(&self) -> Vec<Field> {
        self.form.visible_fields(self.profile())
    }

    pub fn selected(&self) -> Field {
        let fields = self.visible_fields();
        fields[self.selected_field.min(fields.len() - 1)]
    }

    pub fn recalculate(&mut self) {
        let profile = *self.profile();
        let inputs = self.form.inputs();
        let options = self.form.options(&profile);
        self.report = self
            .calculator
            .calculate(self.form.category, &inputs, options)
            .map_err(|e| e.to_string());
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Calculator => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            Tab::Saved => {
                if self.selected_record > 0 {
                    self.selected_record -= 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Calculator => {
                if self.selected_field < self.visible_fields().len().saturating_sub(1) {
                    self.selected_field += 1;
                }
            }
            Tab::Saved => {
                if self.selected_record < self.results.len().saturating_sub(1) {
                    self.selected_record += 1;
                }
            }
            Tab::Help => {}
        }
    }

    /// Step the selected field; `coarse` multiplies the step by ten
    pub fn adjust(&mut self, delta: i32, coarse: bool) {
        if self.current_tab != Tab::Calculator {
            return;
        }
        let field = self.selected();
        let delta = if coarse && !field.is_toggle() && field != Field::WeaponType {
            delta * 10
        } else {
            delta
        };
        self.form.adjust(field, delta);
        self.after_form_change();
    }

    pub fn on_space(&mut self) {
        if self.current_tab != Tab::Calculator {
            return;
        }
        let field = self.selected();
        self.form.toggle(field);
        self.after_form_change();
    }

    /// Keep the cursor on a visible field when fields appear or disappear
    fn after_form_change(&mut self) {
        let visible = self.visible_fields().len();
        if self.selected_field >= visible {
            self.selected_field = visible - 1;
        }
        self.recalculate();
    }

    pub fn reset_form(&mut self) {
        self.form = FormState::default();
        self.selected_field = 0;
        self.recalculate();
        self.status = Some("Form reset to defaults".to_string());
    }

    pub fn begin_naming(&mut self) {
        if self.report.is_err() {
            self.status = Some("Nothing to save: fix the inputs first".to_string());
            return;
        }
        self.input_mode = InputMode::Naming;
        self.name_buffer.clear();
    }

    pub fn push_name_char(&mut self, c: char) {
        self.name_buffer.push(c);
    }

    pub fn pop_name_char(&mut self) {
        self.name_buffer.pop();
    }

    pub fn cancel_naming(&mut self) {
        self.input_mode = InputMode::Normal;
        self.name_buffer.clear();
    }

    /// Append the current report to the saved results under the typed name
    pub fn confirm_save(&mut self) {
        self.input_mode = InputMode::Normal;
        let name = std::mem::take(&mut self.name_buffer);

        match &self.report {
            Ok(report) => {
                let record = self.results.save(name.trim(), report);
                self.status = Some(format!(
                    "Saved {} ({}): {} displayed",
                    if record.name.is_empty() { "result" } else { record.name.as_str() },
                    record.weapon_type,
                    record.displayed_damage
                ));
            }
            Err(e) => self.status = Some(format!("Cannot save: {}", e)),
        }
    }

    pub fn delete_selected_record(&mut self) {
        if let Some(removed) = self.results.remove(self.selected_record) {
            self.status = Some(format!("Removed {:?}", removed.name));
        }
        if self.selected_record >= self.results.len() {
            self.selected_record = self.results.len().saturating_sub(1);
        }
    }

    pub fn clear_records(&mut self) {
        self.results.clear();
        self.selected_record = 0;
        self.status = Some("Cleared saved results".to_string());
    }

    pub fn export_csv(&mut self) {
        let path = self.export_dir.join(CSV_EXPORT_FILE);
        self.status = Some(match self.results.write_csv(&path) {
            Ok(()) => format!("Exported {} rows to {}", self.results.len(), path.display()),
            Err(e) => {
                tracing::error!(error = %e, "CSV export failed");
                format!("Export failed: {}", e)
            }
        });
    }

    pub fn export_json(&mut self) {
        let path = self.export_dir.join(JSON_EXPORT_FILE);
        self.status = Some(match self.results.write_json(&path) {
            Ok(()) => format!("Exported {} records to {}", self.results.len(), path.display()),
            Err(e) => {
                tracing::error!(error = %e, "JSON export failed");
                format!("Export failed: {}", e)
            }
        });
    }
}
