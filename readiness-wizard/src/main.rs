mod opt;

use anyhow::Result;
use clap::Parser;
use readiness::{AssessmentResult, Session, bank, run};
use readiness_dialoguer_wizard::{DialoguerBackend, DialoguerError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::opt::Cli;

fn init_tracing(cli: &Cli) {
    // RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn emit_json(result: &AssessmentResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    debug!(?cli, "parsed arguments");

    let backend = if cli.plain {
        DialoguerBackend::plain()
    } else {
        DialoguerBackend::new()
    };
    let mut backend = backend.with_report(!cli.json);

    let mut session = Session::checked(bank::stakeholder_coaching(), cli.scoring_config())?;

    loop {
        let result = match run(&mut session, &mut backend) {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => {
                info!(answered = session.responses().len(), "assessment cancelled");
                println!("Assessment cancelled.");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        if cli.json {
            emit_json(&result)?;
            return Ok(());
        }

        match backend.confirm_retake() {
            Ok(true) => session.reset(),
            Ok(false) | Err(DialoguerError::Cancelled) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}
