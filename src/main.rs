use b3_tracker::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "b3-tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Watch a B3 tracking request and notify a webhook on change", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// More log output (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the tracking page once (default)
    Check {
        /// Path to the JSON config file
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Path to the state file
        #[arg(short, long, default_value = ".state")]
        state: PathBuf,
    },

    /// Show the persisted state
    Show {
        /// Path to the state file
        #[arg(short, long, default_value = ".state")]
        state: PathBuf,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let verbosity = if cli.quiet {
        -1
    } else {
        cli.verbose.min(i8::MAX as u8) as i8
    };
    b3_tracker::logging::init(verbosity);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to start runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Check {
        config: b3_tracker::Config::default_path(),
        state: b3_tracker::StateStore::default_path(),
    });

    match command {
        Commands::Check { config, state } => {
            b3_tracker::cli::check::run(&config, &state).await?;
        }

        Commands::Show { state, json } => {
            b3_tracker::cli::show::run(&state, json)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "b3-tracker", &mut io::stdout());
        }
    }

    Ok(())
}
