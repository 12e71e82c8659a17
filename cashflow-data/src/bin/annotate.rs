use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cashflow_core::{
    CashflowCalculator, FederalTaxEstimator, Household, InflationAdjuster, YearCashflow,
};
use cashflow_data::ProjectionLoader;
use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Annotate a household projection CSV with derived cashflow figures.
///
/// The input CSV should have the following columns:
/// - start_date: First day of the projection year (YYYY-MM-DD)
/// - user_work: Filer's work income
/// - spouse_work: Spouse's work income (empty for single households)
/// - user_social_security: Filer's social security income
/// - spouse_social_security: Spouse's social security income (empty for
///   single households)
/// - asset_income: Retirement-account withdrawals
/// - total: Combined income
///
/// The output CSV carries one row per projection year with ages, income
/// totals, the estimated federal tax and the after-tax income.
#[derive(Parser, Debug)]
#[command(name = "cashflow-annotate")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing the yearly projection
    #[arg(short, long)]
    file: PathBuf,

    /// Where to write the annotated CSV (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Filer's birthday (YYYY-MM-DD)
    #[arg(long)]
    user_birthday: NaiveDate,

    /// Spouse's birthday (YYYY-MM-DD)
    #[arg(long)]
    spouse_birthday: Option<NaiveDate>,

    /// Treat the household as filing jointly
    #[arg(long, default_value_t = false)]
    joint: bool,

    /// Calendar year the bracket schedule is anchored to
    #[arg(long, default_value_t = 2017)]
    reference_year: i32,

    /// Annual inflation rate applied to bracket thresholds
    #[arg(long, default_value = "0.02")]
    rate: Decimal,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let projection = ProjectionLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} projection years from CSV", projection.len());

    let household = Household {
        user_birthday: args.user_birthday,
        spouse_birthday: args.spouse_birthday,
        joint: args.joint,
    };
    let estimator =
        FederalTaxEstimator::new(InflationAdjuster::new(args.reference_year, args.rate));
    let calculator = CashflowCalculator::new(household, estimator);

    let rows = calculator.project(&projection);

    match &args.output {
        Some(path) => {
            let writer = csv::Writer::from_path(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            write_rows(writer, &rows)?;
            println!("Wrote {} annotated years to {}", rows.len(), path.display());
        }
        None => {
            write_rows(csv::Writer::from_writer(std::io::stdout()), &rows)?;
        }
    }

    Ok(())
}

fn write_rows<W: Write>(mut writer: csv::Writer<W>, rows: &[YearCashflow]) -> Result<()> {
    for row in rows {
        writer
            .serialize(row)
            .context("Failed to write annotated row")?;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(())
}
