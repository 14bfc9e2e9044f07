use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ut_table::{EntropySource, Outcome, Resolver, RollRequest};

use super::paint;
use crate::TableArgs;

pub fn run(
    args: &TableArgs,
    request: &RollRequest,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(args)?;
    let resolver = Resolver::new(&catalog);

    let outcome = match seed {
        Some(seed) => resolver.resolve(request, &mut StdRng::seed_from_u64(seed)),
        None => resolver.resolve(request, &mut EntropySource),
    }
    .map_err(|e| e.to_string())?;

    if json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
        println!("{rendered}");
    } else {
        print_outcome(&outcome, request);
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome, request: &RollRequest) {
    let shift = if request.shift == 0 {
        String::new()
    } else {
        format!(" (cs{:+})", request.shift)
    };
    println!(
        "  {} {} ({}){shift}",
        "Rank".dimmed(),
        outcome.rank,
        outcome.number
    );
    println!(
        "  {} {:>3} -> {}",
        "Roll".dimmed(),
        outcome.roll,
        paint(outcome.result, &outcome.result.to_string())
    );

    if let (Some(required), Some(success)) = (outcome.required, outcome.success) {
        let verdict = if success {
            "success".green().bold()
        } else {
            "failure".red().bold()
        };
        println!("  {} {required} needed, {verdict}", "Intensity".dimmed());
    }

    if let (Some(column), Some(effect)) = (&outcome.column, &outcome.effect) {
        let text = if effect.is_empty() { "—" } else { effect.as_str() };
        println!("  {} {text}", format!("{column}:").dimmed());
    }
}
