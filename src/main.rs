use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::error::Error;
use std::io::Write;
use subnet_calc::config::{Policy, FORM_MAX_PREFIX, FORM_MIN_PREFIX};
use subnet_calc::logging::init_logging;
use subnet_calc::output::{write_csv, write_json, write_table};
use subnet_calc::{compute_from_address_and_mask_with_policy, compute_from_cidr_with_policy};

/// IPv4 subnet calculator
#[derive(Parser)]
#[command(name = "subnet-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "human", global = true)]
    output: OutputFormat,

    /// List the subnets of the classful network
    #[arg(short, long, global = true)]
    enumerate: bool,

    /// Accept 0.0.0.0, loopback and self-broadcast addresses
    #[arg(long, global = true)]
    lenient: bool,

    /// Limit prefixes to /8../30 like the web input form
    #[arg(long, global = true)]
    form: bool,

    /// Shortest accepted prefix
    #[arg(long, global = true)]
    min_prefix: Option<u8>,

    /// Longest accepted prefix
    #[arg(long, global = true)]
    max_prefix: Option<u8>,

    /// Maximum number of subnets to list (1-65536)
    #[arg(long, global = true)]
    max_subnets: Option<usize>,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml", global = true)]
    log_config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate from CIDR notation, e.g. 192.168.1.0/24
    Cidr {
        #[arg(value_name = "A.B.C.D/P")]
        cidr: String,
    },
    /// Calculate from an address and a dotted mask
    Mask {
        #[arg(value_name = "ADDRESS")]
        address: String,
        #[arg(value_name = "MASK")]
        mask: String,
    },
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Colored table
    Human,
    /// JSON (pretty-printed)
    Json,
    /// CSV, one row per subnet
    Csv,
}

fn build_policy(cli: &Cli) -> Result<Policy, Box<dyn Error>> {
    let mut policy = Policy::from_env()?;
    if cli.form {
        policy.min_prefix = FORM_MIN_PREFIX;
        policy.max_prefix = FORM_MAX_PREFIX;
    }
    if let Some(min) = cli.min_prefix {
        policy.min_prefix = min;
    }
    if let Some(max) = cli.max_prefix {
        policy.max_prefix = max;
    }
    if let Some(max) = cli.max_subnets {
        policy.max_subnets = max;
    }
    policy.reject_reserved &= !cli.lenient;
    policy.enumerate |= cli.enumerate;
    policy.validate()?;
    Ok(policy)
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_config)?;
    log::info!("#Start main()");

    let policy = build_policy(&cli)?;
    let result = match &cli.command {
        Commands::Cidr { cidr } => compute_from_cidr_with_policy(cidr, &policy),
        Commands::Mask { address, mask } => {
            compute_from_address_and_mask_with_policy(address, mask, &policy)
        }
    };

    let info = match result {
        Ok(info) => info,
        Err(e) => {
            log::warn!("calculation failed: {e}");
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    };

    let mut out = std::io::stdout().lock();
    match cli.output {
        OutputFormat::Human => write_table(&info, &mut out)?,
        OutputFormat::Json => write_json(&info, &mut out)?,
        OutputFormat::Csv => write_csv(&info, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
