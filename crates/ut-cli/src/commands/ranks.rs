use comfy_table::{ContentArrangement, Table};
use ut_table::Color;

use super::paint;
use crate::TableArgs;

pub fn run(args: &TableArgs) -> Result<(), String> {
    let catalog = super::load_catalog(args)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Name".to_string(),
        "Abbr".to_string(),
        "Minimum".to_string(),
        "Standard".to_string(),
        paint(Color::Green, "Green").to_string(),
        paint(Color::Yellow, "Yellow").to_string(),
        paint(Color::Red, "Red").to_string(),
    ]);

    for rank in catalog.ranks() {
        table.add_row(vec![
            rank.name.clone(),
            rank.abbreviation.clone(),
            rank.minimum.to_string(),
            rank.standard.to_string(),
            rank.green.to_string(),
            rank.yellow.to_string(),
            rank.red.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} ranks", catalog.ranks().len());

    Ok(())
}
