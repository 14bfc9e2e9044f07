pub mod check;
pub mod effect;
pub mod effects;
pub mod ranks;
pub mod roll;

use colored::{ColoredString, Colorize};
use ut_table::{Catalog, Color};

use crate::TableArgs;

/// Load the catalog named on the command line.
fn load_catalog(args: &TableArgs) -> Result<Catalog, String> {
    Catalog::load(&args.table_file, &args.table_name).map_err(|e| e.to_string())
}

/// Paint text in the color of a result tier.
fn paint(color: Color, text: &str) -> ColoredString {
    match color {
        Color::White => text.bold(),
        Color::Green => text.green().bold(),
        Color::Yellow => text.yellow().bold(),
        Color::Red => text.red().bold(),
    }
}
