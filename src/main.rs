use std::path::PathBuf;

use campaign_data::config::{ConvertConfig, DEFAULT_OUTPUT};
use campaign_data::convert;
use campaign_data::io::json;
use campaign_data::query::StartingFunds;
use campaign_data::{Result, ToolError};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_tracing().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => execute_convert(cli.paths),
        Some(Command::Convert(args)) => execute_convert(args),
        Some(Command::Template(args)) => convert::write_template(&args.output),
        Some(Command::Inspect(args)) => execute_inspect(args),
        Some(Command::Funds(args)) => execute_funds(args),
    }
}

fn execute_convert(args: PathArgs) -> Result<()> {
    let config = ConvertConfig::default().with_overrides(args.input, args.output);
    if !config.input.exists() {
        return Err(ToolError::MissingInput(config.input));
    }

    let document = convert::workbook_to_json(&config)?;

    println!("{}", convert::summary(&document, &config.output));
    Ok(())
}

fn execute_inspect(args: InspectArgs) -> Result<()> {
    if !args.data.exists() {
        return Err(ToolError::MissingInput(args.data));
    }
    let document = json::read_document(&args.data)?;
    let state = document
        .state(&args.state)
        .ok_or_else(|| ToolError::UnknownState(args.state.clone()))?;

    println!(
        "{} ({}), {} EV, {} region, tier {}",
        state.name,
        state.abbreviation,
        state.electoral_votes,
        state.region,
        state.competitiveness_tier
    );
    let staffing = &state.staffing;
    println!(
        "  Staff: {} total, {} field organizers, {} regional offices, {} peak volunteers",
        staffing.total_staff,
        staffing.field_organizers,
        staffing.regional_offices,
        staffing.active_volunteers_peak
    );
    let budget = &state.budget;
    println!(
        "  Budget: ${}M total, ${}M TV, ${}M digital, ${}M GOTV",
        budget.total_budget_m,
        budget.tv_advertising_m,
        budget.digital_advertising_m,
        budget.gotv_operations_m
    );

    if let Some(week) = args.week {
        let target = document
            .weekly_target(&state.name, week)
            .ok_or(ToolError::WeekOutOfRange(week))?;
        println!(
            "  Week {}: {} staff, {} volunteers, ${}K",
            target.week, target.staff, target.volunteers, target.budget_k
        );
    }
    Ok(())
}

fn execute_funds(args: FundsArgs) -> Result<()> {
    let funds = if args.data.exists() {
        json::read_document(&args.data)?.recommended_starting_funds()
    } else {
        warn!(data = %args.data.display(), "no campaign document; using fallback funds");
        StartingFunds::FALLBACK
    };
    println!("Incumbent: ${:.0}", funds.incumbent);
    println!("Challenger: ${:.0}", funds.challenger);
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Turn the campaign planning workbook into simulator JSON.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    paths: PathArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the workbook into the JSON document (the default).
    Convert(PathArgs),
    /// Write an empty planning workbook with every required sheet.
    Template(TemplateArgs),
    /// Show one state from a generated document.
    Inspect(InspectArgs),
    /// Show the recommended starting funds for both campaigns.
    Funds(FundsArgs),
}

#[derive(clap::Args)]
struct PathArgs {
    /// Planning workbook to read.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the JSON document.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct TemplateArgs {
    /// Workbook file to create.
    #[arg(long)]
    output: PathBuf,
}

#[derive(clap::Args)]
struct InspectArgs {
    /// Generated JSON document.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    data: PathBuf,

    /// State name, e.g. "Ohio".
    #[arg(long)]
    state: String,

    /// Also show the pacing target for this week (1-20).
    #[arg(long)]
    week: Option<u32>,
}

#[derive(clap::Args)]
struct FundsArgs {
    /// Generated JSON document.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    data: PathBuf,
}
