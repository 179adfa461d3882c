// Report generation workflow
//
// extract petition/meeting → load reference library → build prompt →
// one completion call → write Word and PDF reports. Any failure outside
// the reference loaders ends the run.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::extract::{extract_document_text, extract_optional};
use crate::prompt::{build_prompt, PromptInputs};
use crate::providers::{CompletionRequest, LlmProvider};
use crate::reference::ReferenceLibrary;
use crate::report::{write_reports, PdfStyle, ReportPaths};

/// The documents supplied for one run
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Petition (PDF)
    pub petition: PathBuf,
    /// Client meeting summary (PDF or text), optional
    pub meeting: Option<PathBuf>,
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// Raw text returned by the model
    pub text: String,
    /// Model that produced it, as reported by the API
    pub model: String,
    pub paths: ReportPaths,
}

/// Extract the documents, load the references and assemble the prompt
///
/// No network access; `generate_report` starts here.
pub fn prepare_prompt(config: &Config, request: &ReportRequest) -> Result<String> {
    let petition = extract_document_text(&request.petition).context("Failed to read petition")?;
    let meeting =
        extract_optional(request.meeting.as_deref()).context("Failed to read meeting summary")?;

    let library = ReferenceLibrary::load(&config.data_paths());
    let prompt = build_prompt(&PromptInputs::new(&petition, Some(&meeting), &library));

    tracing::info!(chars = prompt.chars().count(), "Prompt assembled");
    Ok(prompt)
}

/// Run the whole workflow and write both reports
pub async fn generate_report(
    config: &Config,
    provider: &dyn LlmProvider,
    request: &ReportRequest,
) -> Result<ReportOutcome> {
    let prompt = prepare_prompt(config, request)?;

    let started = Instant::now();
    tracing::debug!(
        provider = provider.name(),
        provider_default_model = provider.default_model(),
        model = %config.model,
        "Requesting analysis"
    );
    let completion = CompletionRequest::from_prompt(prompt).with_model(config.model.clone());
    let response = provider
        .complete(&completion)
        .await
        .context("Completion request failed")?;
    tracing::info!(
        provider = %response.provider,
        id = %response.id,
        model = %response.model,
        finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
        elapsed_ms = started.elapsed().as_millis() as u64,
        chars = response.text.chars().count(),
        "Received analysis"
    );

    let paths = ReportPaths::in_dir(&config.output_dir);
    let style = PdfStyle::default().with_font(config.pdf_font.clone());
    write_reports(&response.text, &paths, &style)?;

    Ok(ReportOutcome {
        text: response.text,
        model: response.model,
        paths,
    })
}
