use std::process::ExitCode;

use catshell::*;
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// configuration file path, by default only CATSHELL_* environment variables are used
    #[clap(short, long)]
    config: Option<String>,

    /// Print debug information to stderr
    #[clap(long)]
    debug: bool,
}

fn main() -> ExitCode {
    // a missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = match CatshellConfig::new(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("configuration:\n{}", config.summary());

    let conn = match MongoConn::connect(&config) {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("{}", e);
            println!("{}", e.diagnostic());
            return ExitCode::FAILURE;
        }
    };
    let repo = CatRepository::new(&conn);

    let stdin = std::io::stdin();
    match Shell::new(&repo, stdin.lock(), std::io::stdout()).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
