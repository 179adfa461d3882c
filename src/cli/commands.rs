// Subcommand handlers

use anyhow::Result;

use super::{Cli, Commands, InputArgs};
use crate::config::{load_config, Config};
use crate::pipeline::{generate_report, prepare_prompt, ReportRequest};
use crate::providers::OpenAIProvider;

/// Execute the parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            inputs,
            output_dir,
            quiet,
        } => {
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            let request = apply_inputs(&mut config, inputs);
            let provider = OpenAIProvider::from_config(&config)?;

            eprintln!("Lendo petição e gerando relatório...");
            let outcome = generate_report(&config, &provider, &request).await?;

            eprintln!("✓ Relatório gerado!");
            println!("Word: {}", outcome.paths.docx.display());
            println!("PDF:  {}", outcome.paths.pdf.display());
            if !quiet {
                println!();
                println!("{}", outcome.text);
            }
        }
        Commands::Prompt { inputs } => {
            let request = apply_inputs(&mut config, inputs);
            print!("{}", prepare_prompt(&config, &request)?);
        }
    }

    Ok(())
}

fn apply_inputs(config: &mut Config, inputs: InputArgs) -> ReportRequest {
    if let Some(dir) = inputs.data_dir {
        config.data_dir = dir;
    }
    ReportRequest {
        petition: inputs.petition,
        meeting: inputs.meeting,
    }
}
