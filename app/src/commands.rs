//! Subcommand implementations

use anyhow::{Context, Result};
use futures::StreamExt;
use weather_report_pipeline::{DefaultPipeline, PipelineState, StageOutput};
use weather_report_web::{AppState, router};

/// Serve the web surface until Ctrl-C
pub async fn serve(pipeline: DefaultPipeline, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    let addr = listener
        .local_addr()
        .context("Failed to read the bound address")?;

    let app = router(AppState::new(pipeline));

    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// One run for a templated location; prints the report
pub async fn report(pipeline: &DefaultPipeline, location: &str) -> Result<()> {
    let report = pipeline
        .run_for_location(location)
        .await
        .with_context(|| format!("Weather report for {location:?} failed"))?;

    println!("{report}");
    Ok(())
}

/// Stream one run, printing each stage's output as it completes
pub async fn smoke(pipeline: &DefaultPipeline, query: &str) -> Result<()> {
    tracing::info!(query, "Smoke run started");

    let mut outputs = std::pin::pin!(pipeline.stream(PipelineState::new(query)));
    while let Some(output) = outputs.next().await {
        let output = output.context("Smoke run failed")?;
        print!("{}", render_stage_output(&output));
    }

    tracing::info!("Smoke run completed");
    Ok(())
}

/// Diagnostic block for one stage
fn render_stage_output(output: &StageOutput) -> String {
    format!(
        "Output from node '{}':\n---\n{}\n\n---\n\n",
        output.stage, output.output
    )
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use std::time::Duration;
    use weather_report_pipeline::{PipelineConfig, Stage};

    fn offline_pipeline() -> DefaultPipeline {
        DefaultPipeline::from_config(&PipelineConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_serve_resolves_host_names() {
        let running = tokio::time::timeout(
            Duration::from_millis(500),
            serve(offline_pipeline(), "localhost", 0),
        )
        .await;

        assert!(running.is_err(), "server exited early: {running:?}");
    }

    #[test]
    fn test_render_stage_output() {
        let output = StageOutput::new(Stage::CityExtractor, "Toronto");
        assert_eq!(
            render_stage_output(&output),
            "Output from node 'city_extractor':\n---\nToronto\n\n---\n\n"
        );
    }
}
