//! CSV export - header row plus one row per saved record

use super::SavedResultRecord;
use std::io::{self, Write};

/// Column headers, one per [`SavedResultRecord`] field
pub const CSV_HEADERS: [&str; 23] = [
    "Name",
    "Weapon Type",
    "Base Damage",
    "Ammo Damage (if applicable)",
    "Skill Level",
    "Weapon Perk Rank (e.g. Armsman)",
    "Fortify Skill Enchantments",
    "Fortify Skill Potion",
    "Using power attack perk (e.g. Savage Strike)",
    "Using sneak multiplier gloves",
    "Seeker of Might damage boost",
    "Include Smithing improvement",
    "Smithing Skill",
    "Smithing Perk",
    "Smithing Enchantments",
    "Smithing Potion",
    "Smithing Seeker of Might bonus",
    "Smithing Improvement Amount",
    "Displayed Damage",
    "Actual Damage",
    "Power Attack Damage",
    "Sneak Attack Damage",
    "Power Sneak Attack Damage",
];

/// Write records as CSV to any writer
pub fn write_csv<'a, W, I>(writer: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a SavedResultRecord>,
{
    write_row(writer, CSV_HEADERS.iter().copied())?;
    for record in records {
        let fields = record.csv_fields();
        write_row(writer, fields.iter().map(String::as_str))?;
    }
    Ok(())
}

fn write_row<'a, W: Write>(
    writer: &mut W,
    fields: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    let row: Vec<String> = fields.map(escape).collect();
    writeln!(writer, "{}", row.join(","))
}

/// Quote a field if it contains a separator, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
