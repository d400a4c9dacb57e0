//! `bijoy themes` — list canonical themes and their aliases.

use anyhow::Result;

use bijoy::ThemeAliasTable;

use super::display;

pub fn run() -> Result<()> {
    let table = ThemeAliasTable::default();

    let entries: Vec<(String, Vec<String>)> = table
        .canonical_keys()
        .into_iter()
        .map(|key| {
            let aliases = table.aliases(&key).unwrap_or_default().to_vec();
            (key, aliases)
        })
        .collect();

    display::print_themes(&entries);
    Ok(())
}
