use ut_table::{EffectRef, Resolver};

use crate::TableArgs;

pub fn run(args: &TableArgs, effect: &str, color: &str) -> Result<(), String> {
    let catalog = super::load_catalog(args)?;
    let resolver = Resolver::new(&catalog);

    let text = resolver
        .effect_text_for(EffectRef::Key(effect), color)
        .map_err(|e| e.to_string())?;
    println!("{text}");

    Ok(())
}
