//! Starknet contract class declarer.
//!
//! ```text
//!   argv[1] ──▶ artifact loader ──▶ signing account ──▶ Starknet node
//!                     │                    │
//!                     ▼                    ▼
//!          "Error loading artifact"   "Declare result" / "Error during declaration"
//! ```
//!
//! Exit status: 0 on success, 1 when the declaration fails, 3 when the
//! artifact cannot be loaded, 4 on configuration errors.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use class_declarer::artifact::ArtifactError;
use class_declarer::config::{load_config, ConfigOverrides};
use class_declarer::observability::logging;
use class_declarer::workflow::outcome::EXIT_CONFIG_FAILED;
use class_declarer::workflow::{exit_code, WorkflowError};
use class_declarer::{DeclareWorkflow, StarknetAccount};

#[derive(Parser)]
#[command(name = "class-declarer")]
#[command(about = "Declare a compiled Starknet contract class", long_about = None)]
struct Cli {
    /// Path to the Sierra contract class, relative to the current directory.
    sierra_path: String,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Node JSON-RPC endpoint.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Account address.
    #[arg(long)]
    address: Option<String>,

    /// Compiled (CASM) class hash.
    #[arg(long)]
    compiled_class_hash: Option<String>,

    /// Path to the compiled CASM class.
    #[arg(long)]
    casm: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        rpc_url: cli.rpc_url,
        address: cli.address,
        compiled_class_hash: cli.compiled_class_hash,
        casm_path: cli.casm,
    };

    let config = match load_config(cli.config.as_deref(), overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::from(EXIT_CONFIG_FAILED);
        }
    };

    logging::init(&config.observability.log_level);

    tracing::info!(
        rpc_url = %config.node.rpc_url,
        address = %config.account.address,
        "class-declarer v0.1.0 starting"
    );

    let account = match StarknetAccount::from_config(&config) {
        Ok(account) => account,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::from(EXIT_CONFIG_FAILED);
        }
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            let err = WorkflowError::from(ArtifactError::Io {
                path: PathBuf::from("."),
                source: e,
            });
            println!("{}{}", err.label(), err);
            return ExitCode::from(err.exit_code());
        }
    };

    let workflow = DeclareWorkflow::new(account);
    let mut stdout = io::stdout();
    let outcome = workflow
        .declare_from_path(&cli.sierra_path, &cwd, &mut stdout)
        .await;

    ExitCode::from(exit_code(&outcome))
}
