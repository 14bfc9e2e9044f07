use comfy_table::{ContentArrangement, Table};
use ut_table::Color;

use super::paint;
use crate::TableArgs;

pub fn run(args: &TableArgs) -> Result<(), String> {
    let catalog = super::load_catalog(args)?;

    if catalog.effects().is_empty() {
        println!("  No effects defined.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Name".to_string(), "Abbr".to_string(), "Ability".to_string()];
    header.extend(Color::all().iter().map(|c| paint(*c, &c.to_string()).to_string()));
    table.set_header(header);

    for effect in catalog.effects() {
        let mut row = vec![
            effect.name.clone(),
            effect.abbreviation.clone(),
            effect.ability.clone(),
        ];
        row.extend(Color::all().iter().map(|c| match effect.text(*c) {
            "" => "—".to_string(),
            text => text.to_string(),
        }));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  {} effects", catalog.effects().len());

    Ok(())
}
