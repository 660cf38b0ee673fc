//! Pot Report Binary
//!
//! Replays a recorded hand from a JSON file and prints its pots.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use potbook::*;

#[derive(Parser)]
#[command(author, version, about = "Main pot, side pot and dead money report for a recorded hand")]
struct Args {
    /// Hand file (JSON)
    #[arg(required = true)]
    hand: std::path::PathBuf,
    /// Section to settle at, e.g. flop_more; defaults to the last played section
    #[arg(long)]
    at: Option<SectionId>,
    /// Sections to gather contributions from: section, street or hand
    #[arg(long, default_value = "hand")]
    scope: Scope,
    /// Print the replay as JSON
    #[arg(long)]
    json: bool,
    /// Log every replayed section
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose);
    let text = std::fs::read_to_string(&args.hand)
        .with_context(|| format!("reading {}", args.hand.display()))?;
    let hand = serde_json::from_str::<Hand>(&text)
        .with_context(|| format!("parsing {}", args.hand.display()))?;
    let target = args
        .at
        .or_else(|| hand.actions.sections().last())
        .unwrap_or_else(SectionId::opening);
    let replay = hand.cascade_with(target, args.scope, &mut Logger)?;
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&replay)?),
        false => report(&hand, &replay, target),
    }
    Ok(())
}

fn report(hand: &Hand, replay: &Replay, target: SectionId) {
    let pots = &replay.pots;
    println!(
        "{} {} {}",
        target.street().to_string().bold(),
        target.level().label().bold(),
        format!("({})", pots.scope).dimmed()
    );
    for player in hand.players.iter() {
        let last = hand
            .previous(player.id, target)
            .map(|(section, action)| format!("{} at {}", action, section))
            .unwrap_or_else(|| "-".to_string());
        let now = hand.action(target, player.id);
        let stack = pots
            .contribution(player.id)
            .map(|c| Unit::format(c.stack))
            .unwrap_or_default();
        let line = format!(
            "  {:<6}{:<12}{:>9}  {:<14}{}",
            player.position.to_string(),
            player.name,
            stack,
            now.to_string(),
            last.dimmed()
        );
        match pots.contribution(player.id).is_some_and(|c| c.folded) {
            true => println!("{}", line.dimmed()),
            false => println!("{}", line),
        }
    }
    println!();
    for (i, pot) in pots.pots.iter().enumerate() {
        let label = Pots::label(i);
        let label = match i {
            0 => label.green().bold(),
            _ => label.yellow().bold(),
        };
        let eligible = pot
            .eligible
            .iter()
            .map(|p| pots.name(*p))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {:<11}{:>9}  {:>5.1}%  {}",
            label,
            Unit::format(pot.amount),
            pot.share,
            eligible
        );
        for exclusion in pot.excluded.iter() {
            let line = format!("excluded {} ({})", pots.name(exclusion.player), exclusion.reason);
            println!("    {}", line.dimmed());
        }
    }
    println!("  {:<11}{:>9}  {}", "dead", Unit::format(pots.dead.total()), pots.dead.to_string().dimmed());
    println!("  {:<11}{:>9}", "total".bold(), Unit::format(pots.total).bold());
    for shortfall in replay.shortfalls.iter() {
        println!("  {}", shortfall.to_string().red());
    }
    match &pots.status {
        status if status.is_complete() => println!("  {}", status.to_string().green()),
        status => println!("  {}", status.to_string().yellow()),
    }
}
