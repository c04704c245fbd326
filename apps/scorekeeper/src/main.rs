use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use scorekeeper::cli;
use scorekeeper::config::app::data_dir;
use scorekeeper::domain::command::Command;
use scorekeeper::services::session::GameSession;
use scorekeeper::store::slot::JsonSlotStore;
use scorekeeper::telemetry;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Score keeper for the card game Wizard")]
struct Args {
    /// Directory holding the durable game slot (overrides SCOREKEEPER_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Discard any saved game and start from setup
    #[arg(long)]
    fresh: bool,
}

fn main() -> ExitCode {
    telemetry::init_tracing();
    let args = Args::parse();

    let dir = match args.data_dir {
        Some(dir) => dir,
        None => match data_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("❌ {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let store = match JsonSlotStore::open(&dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("🎴 Wizard Scorekeeper — slot {}", store.path().display());

    let mut session = GameSession::load(store);
    if args.fresh {
        session.dispatch(Command::ResetGame);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    if let Err(e) = cli::run(&mut session, &mut input, &mut output) {
        eprintln!("❌ {e}");
        return ExitCode::FAILURE;
    }
    println!("👋 Scores saved. Until next time.");
    ExitCode::SUCCESS
}
