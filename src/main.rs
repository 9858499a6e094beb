//! Binary entrypoint for the mender CLI.
//!
//! Commands:
//! - `init` - create a starter `config.toml` and `player.toml`
//! - `repair [confirm]` - quote or execute a repair for the player file
//! - `status` - print balance and held-item wear
//!
//! The player file stands in for the external economy and inventory
//! backends: it is loaded before the request, and written back only after a
//! successful transaction.
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use mender::config::Config;
use mender::mend::{
    format_wear_rate, handle_repair, quote, MendError, MessageCatalog, PricingTable,
    RepairOutcome,
};
use mender::providers::{MemoryEconomy, MemoryInventory, PlayerRecord};

#[derive(Parser)]
#[command(name = "mender")]
#[command(about = "Item repair pricing and transactions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a starter configuration and player file
    Init,
    /// Quote a repair, or execute it when `confirm` is passed
    Repair {
        /// Pass `confirm` to pay the quoted cost and repair the item
        argument: Option<String>,

        /// Player file acting as the economy/inventory backend
        #[arg(short, long, default_value = "player.toml")]
        player: PathBuf,
    },
    /// Show the player's balance and held-item wear
    Status {
        /// Player file acting as the economy/inventory backend
        #[arg(short, long, default_value = "player.toml")]
        player: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Init => None,
        _ => Some(Config::load(&cli.config)),
    };

    init_logging(
        config.as_ref().and_then(|c| c.as_ref().ok()),
        cli.verbose,
    );

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: Option<Result<Config>>) -> Result<()> {
    match cli.command {
        Commands::Init => {
            Config::create_default(&cli.config)?;
            let player_path = Path::new("player.toml");
            PlayerRecord::starter().save(player_path)?;
            println!(
                "Wrote {} and {}",
                cli.config.display(),
                player_path.display()
            );
            Ok(())
        }
        Commands::Repair { argument, player } => {
            let config = require_config(config)?;
            repair_command(&config, &player, argument.as_deref())
        }
        Commands::Status { player } => {
            let config = require_config(config)?;
            status_command(&config, &player)
        }
    }
}

/// A missing or unparseable config file is fatal before any request runs.
fn require_config(config: Option<Result<Config>>) -> Result<Config> {
    match config {
        Some(Ok(config)) => Ok(config),
        Some(Err(e)) => Err(anyhow!(
            "{}",
            MendError::ConfigurationMissing(e.to_string())
        )),
        None => unreachable!("config is loaded for every command but init"),
    }
}

fn repair_command(config: &Config, player_path: &Path, argument: Option<&str>) -> Result<()> {
    let catalog = MessageCatalog::from_config(&config.messages);
    let table = PricingTable::from_config(&config.pricing);

    // No player file means no payment backend to transact against.
    let record = PlayerRecord::load(player_path).map_err(|e| {
        debug!("player file rejected: {}", e);
        anyhow!("{}", catalog.error_notice(&MendError::EconomyUnavailable))
    })?;

    let mut economy = MemoryEconomy::default();
    economy.deposit(&record.username, record.balance);
    let mut inventory = MemoryInventory::default();
    if let Some(item) = record.held_item.clone() {
        inventory.put(&record.username, item);
    }

    let args: Vec<&str> = argument.iter().copied().collect();
    match handle_repair(
        &record.username,
        &args,
        &table,
        &mut economy,
        &mut inventory,
    ) {
        Ok(RepairOutcome::Quoted(quote)) => {
            println!("{}", catalog.quote_notice(&quote));
            Ok(())
        }
        Ok(RepairOutcome::Repaired(receipt)) => {
            let updated = PlayerRecord {
                username: record.username.clone(),
                balance: economy.balance_of(&record.username),
                held_item: inventory.get(&record.username),
            };
            updated.save(player_path)?;
            info!(
                "repaired held item for {} at a cost of {}",
                record.username, receipt.cost
            );
            println!("{}", catalog.repaired_notice(receipt.cost));
            Ok(())
        }
        Err(e) => Err(anyhow!("{}", catalog.error_notice(&e))),
    }
}

fn status_command(config: &Config, player_path: &Path) -> Result<()> {
    let table = PricingTable::from_config(&config.pricing);
    let record = PlayerRecord::load(player_path)?;

    println!("Player:  {}", record.username);
    println!("Balance: {:.2}", record.balance);
    match &record.held_item {
        None => println!("Held:    nothing"),
        Some(item) => {
            println!(
                "Held:    {} ({}/{} damage)",
                item.category.key(),
                item.damage,
                item.max_durability
            );
            if let Ok(q) = quote(item, &table) {
                println!(
                    "Wear:    {}%  (repair cost {:.2})",
                    format_wear_rate(q.wear_rate),
                    q.cost
                );
            }
        }
    }
    Ok(())
}

fn init_logging(config: Option<&Config>, verbose: u8) {
    let level = match verbose {
        0 => config.map(|c| c.logging.level.clone()).unwrap_or_else(|| "info".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str()),
    )
        .format_timestamp_secs()
        .try_init();
}
