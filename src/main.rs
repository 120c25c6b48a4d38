use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use scg_billing::config::TomlBusinessIdentity;
use scg_billing::console::{ConsoleReport, ReportPresenter};
use scg_billing::dataset::JsonDataset;
use scg_billing::invoice_command::{InvoiceArgs, InvoiceCommand};
use scg_billing::time_cards_command::{TimeCardsArgs, TimeCardsCommand};

/// コンサルタントのtime cardから月次の請求書を作成するCLIアプリケーション。
///
/// # Examples
/// ```
/// $ cargo run -- --data billing.json invoice --month 2017-03
/// $ cargo run -- --data billing.json timecards --sort consultant
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(
        long = "data",
        global = true,
        default_value = "billing.json",
        help = "Path to the JSON file with client accounts and time cards"
    )]
    data: PathBuf,

    #[clap(
        long = "config",
        global = true,
        help = "Path to the TOML file with the business identity"
    )]
    config: Option<PathBuf>,

    #[clap(short = 'v', long = "verbose", global = true, help = "Enable debug logging")]
    verbose: bool,

    #[clap(subcommand)]
    subcommand: SubCommands,
}

/// サブコマンドを表す列挙型。
#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Render monthly invoices for every client with billable time
    Invoice(InvoiceArgs),
    /// Print weekly time cards
    #[clap(name = "timecards")]
    TimeCards(TimeCardsArgs),
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logger(args.verbose).context("Failed to set up logger")?;

    let repository = JsonDataset::new(args.data);
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let mut presenter = ConsoleReport::new(&mut writer);

    match args.subcommand {
        SubCommands::Invoice(invoice) => {
            let invoices = InvoiceCommand::new(&repository).run(invoice)?;
            let source = TomlBusinessIdentity::locate(args.config)?;
            presenter.show_invoices(&invoices, &source)?;
        }
        SubCommands::TimeCards(time_cards) => {
            let time_cards = TimeCardsCommand::new(&repository).run(time_cards)?;
            presenter.show_time_cards(&time_cards)?;
        }
    }

    Ok(())
}

/// ログの出力先と書式を設定する。レポートと混ざらないよう標準エラーに出す。
fn setup_logger(verbose: bool) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue);
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;

    Ok(())
}
