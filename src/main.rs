//! Console trainer.
//!
//! Reads trainee lines from stdin and prints the client's replies. Typing
//! `/koniec` (or closing stdin) ends the session and prints the report;
//! `/stav` prints the stored session state as JSON.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use sales_sim::adapters::{InMemorySessionStore, SeededRandom};
use sales_sim::application::{
    FinishSessionCommand, FinishSessionHandler, StartSessionCommand, StartSessionHandler,
    SubmitTurnCommand, SubmitTurnHandler,
};
use sales_sim::config::{init_tracing, AppConfig};
use sales_sim::domain::analysis::FeedbackReport;
use sales_sim::domain::foundation::Timestamp;
use sales_sim::domain::simulation::TurnSimulator;
use sales_sim::ports::SessionStore;

const FINISH_COMMAND: &str = "/koniec";
const STATE_COMMAND: &str = "/stav";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let rng = match config.trainer.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let simulator = Arc::new(TurnSimulator::new(config.simulation.clone()));

    let start = StartSessionHandler::new(store.clone(), simulator.clone());
    let submit = SubmitTurnHandler::new(store.clone(), simulator.clone(), Box::new(rng));
    let finish = FinishSessionHandler::new(store.clone(), simulator);

    let started = start
        .handle(StartSessionCommand {
            persona: config.trainer.persona,
        })
        .await?;
    let session_id = started.session_id;
    info!(session_id = %session_id, seed = ?config.trainer.seed, "Console trainer ready");

    println!("Klient [{}]: {}", started.greeting.mood, started.greeting.text);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text == FINISH_COMMAND {
            break;
        }
        if text == STATE_COMMAND {
            let state = store.load(session_id).await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
            continue;
        }

        let outcome = submit
            .handle(SubmitTurnCommand {
                session_id,
                text: text.to_string(),
                persona: None,
            })
            .await?;

        println!(
            "Klient [{}, {}]: {}",
            outcome.client_mood,
            outcome.next_phase.label(),
            outcome.client_message
        );
        if !outcome.phase_gate_result.passed {
            for hint in outcome.phase_gate_result.hints() {
                println!("  - {hint}");
            }
        }

        if outcome.should_end {
            break;
        }
    }

    // Returns the stored report when the conversation ended on its own
    let finished = finish
        .handle(FinishSessionCommand { session_id })
        .await?;
    print_report(&finished.report, finished.finished_at);
    Ok(())
}

fn print_report(report: &FeedbackReport, finished_at: Timestamp) {
    println!();
    println!("Celkové hodnotenie: {}/10 ({finished_at})", report.overall_score);
    for dimension in &report.dimensions {
        println!(
            "  {}: {}/10 ({})",
            dimension.name, dimension.score, dimension.comment
        );
    }
    println!();
    println!("{}", report.personalized_message);
    println!("{}", report.next_steps);
}
