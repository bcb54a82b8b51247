// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Use library instead of local modules
use lira_words::{
    convert_file, denominations, format_amount, parse_amount_strict, spell_number,
    spell_number_simple, spell_number_with_currency_label, Config, Conversion, CurrencyEra,
    Direction,
};

const USAGE: &str = "\
Usage:
  lira-words                                   interactive converter
  lira-words words <amount> [old|new]          spell an amount with the pound noun
  lira-words preview <amount>                  short spelling, no currency
  lira-words convert <old-to-new|new-to-old> <amount>
  lira-words batch <input.csv> <output.csv> [old-to-new|new-to-old]
  lira-words denominations";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::load()?;

    match args.first().map(String::as_str) {
        None => run_ui_mode(&config)?,
        Some("words") => run_words(&args[1..])?,
        Some("preview") => run_preview(&args[1..])?,
        Some("convert") => run_convert(&args[1..], &config)?,
        Some("batch") => run_batch(&args[1..], &config)?,
        Some("denominations") => run_denominations(&config),
        Some("help") | Some("--help") | Some("-h") => println!("{}", USAGE),
        Some(other) => bail!("Unknown command: {:?}\n\n{}", other, USAGE),
    }

    Ok(())
}

fn amount_arg(args: &[String], index: usize) -> Result<f64> {
    let raw = args
        .get(index)
        .with_context(|| format!("Missing amount\n\n{}", USAGE))?;
    parse_amount_strict(raw)
}

fn run_words(args: &[String]) -> Result<()> {
    let amount = amount_arg(args, 0)?;
    let era = match args.get(1) {
        Some(era) => era.parse::<CurrencyEra>()?,
        None => CurrencyEra::New,
    };

    println!("{}", spell_number_with_currency_label(amount, era));
    Ok(())
}

fn run_preview(args: &[String]) -> Result<()> {
    let amount = amount_arg(args, 0)?;
    println!("{}", spell_number_simple(amount));
    Ok(())
}

fn run_convert(args: &[String], config: &Config) -> Result<()> {
    let direction = args
        .first()
        .with_context(|| format!("Missing direction\n\n{}", USAGE))?
        .parse::<Direction>()?;
    let conversion = Conversion::new(amount_arg(args, 1)?, direction);
    let source = direction.source_era();
    let target = direction.target_era();

    println!("💱 {}", direction.title());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  {} {}",
        format_amount(conversion.input, config.use_arabic_numerals, 2),
        source.noun_phrase()
    );
    println!("  {}", spell_number_with_currency_label(conversion.input, source));
    println!();
    println!(
        "= {} {}",
        format_amount(
            conversion.output,
            config.use_arabic_numerals,
            conversion.display_fraction_digits()
        ),
        target.noun_phrase()
    );
    println!("  {}", spell_number_with_currency_label(conversion.output, target));

    Ok(())
}

fn run_batch(args: &[String], config: &Config) -> Result<()> {
    let (input, output) = match (args.first(), args.get(1)) {
        (Some(input), Some(output)) => (Path::new(input), Path::new(output)),
        _ => bail!("Missing input or output path\n\n{}", USAGE),
    };
    let direction = match args.get(2) {
        Some(direction) => direction.parse::<Direction>()?,
        None => config.default_direction,
    };

    println!("📂 Converting {:?} ({})...", input, direction);
    let count = convert_file(input, output, direction)?;
    println!("✓ Wrote {} rows to {:?}", count, output);

    Ok(())
}

fn run_denominations(config: &Config) {
    for era in [CurrencyEra::Old, CurrencyEra::New] {
        println!("🏦 {}", era.noun_phrase());
        for value in denominations(era) {
            let value = *value as f64;
            println!(
                "  {:>8}  {}",
                format_amount(value, config.use_arabic_numerals, 0),
                spell_number(value)
            );
        }
        println!();
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &Config) -> Result<()> {
    let mut app = ui::App::new(config);
    ui::run_ui(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the API: cargo run --bin lira-server --features server");
    eprintln!();
    eprintln!("{}", USAGE);
    std::process::exit(1);
}
