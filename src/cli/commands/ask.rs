//! Ask command implementation.
//!
//! One-shot flow: load the video, then answer a single question.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(
    input: &str,
    question: &str,
    model: Option<String>,
    retrieval_k: Option<usize>,
    mut settings: Settings,
) -> Result<()> {
    if let Some(model) = model {
        settings.generation.model = model;
    }
    if let Some(k) = retrieval_k {
        settings.retrieval.k = k;
    }

    let orchestrator = Orchestrator::new(settings)?;

    let spinner = Output::spinner("Loading video transcript...");
    match orchestrator.load_video(input).await {
        Ok(result) => {
            spinner.finish_and_clear();
            Output::success(&format!(
                "Indexed {} chunks from {}",
                result.chunk_count, result.video_id
            ));
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to load video: {}", e));
            return Err(e.into());
        }
    }

    let spinner = Output::spinner("Generating answer...");
    match orchestrator.ask(question).await {
        Ok(answer) => {
            spinner.finish_and_clear();
            println!("\n{}\n", answer);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
