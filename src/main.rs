use clap::Parser;
use miette::{IntoDiagnostic, Result};
use shopcart::application::checkout::{Checkout, DEFAULT_FAILURE_PERCENT};
use shopcart::application::session::Session;
use shopcart::domain::catalog::Catalog;
use shopcart::domain::ports::RandomSourceBox;
use shopcart::infrastructure::random::SeededRandom;
use shopcart::interfaces::console::prompt::Console;
use shopcart::interfaces::csv::catalog_reader::CatalogReader;
use shopcart::observability;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog CSV file with `name, price, quantity` columns. Uses the built-in catalog if omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for the payment outcome. Seeded from the clock if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Chance, in percent, that the payment is declined.
    #[arg(long, default_value_t = DEFAULT_FAILURE_PERCENT, value_parser = clap::value_parser!(u8).range(0..=100))]
    payment_failure_percent: u8,

    /// Print debug logs to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose);

    let catalog = match cli.catalog {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            CatalogReader::new(file).into_catalog().into_diagnostic()?
        }
        None => Catalog::builtin(),
    };

    let random: RandomSourceBox = match cli.seed {
        Some(seed) => Box::new(SeededRandom::from_seed(seed)),
        None => Box::new(SeededRandom::from_clock()),
    };
    let checkout = Checkout::new(random, cli.payment_failure_percent);

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), io::stderr());
    let session = Session::new(console, catalog, checkout);

    // Session failures end the session, not the process.
    if let Err(e) = session.run() {
        eprintln!("{}", e);
    }

    Ok(())
}
