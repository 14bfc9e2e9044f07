use crate::TableArgs;

pub fn run(args: &TableArgs) -> Result<(), String> {
    let catalog = super::load_catalog(args)?;

    println!("  All checks passed for '{}'.", args.table_name);
    println!(
        "  {} ranks, {} effects",
        catalog.ranks().len(),
        catalog.effects().len()
    );

    Ok(())
}
