// Command-line interface

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use commands::run;

#[derive(Parser, Debug)]
#[command(
    name = "laborbrief",
    version,
    about = "Generate a labour-law defence report from a petition PDF"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: ./laborbrief.toml, then ~/.laborbrief/config.toml)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "More log output (-v info, -vv debug)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse the petition and write the Word and PDF reports
    Generate {
        #[command(flatten)]
        inputs: InputArgs,

        #[arg(long, help = "Directory for relatorio_final.docx / relatorio_final.pdf")]
        output_dir: Option<PathBuf>,

        #[arg(long, default_value_t = false, help = "Do not print the report text")]
        quiet: bool,
    },
    /// Print the assembled prompt without calling the API
    Prompt {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    #[arg(long, help = "Petition (PDF)")]
    pub petition: PathBuf,

    #[arg(long, help = "Client meeting summary (PDF or text)")]
    pub meeting: Option<PathBuf>,

    #[arg(long, help = "Directory with the reference datasets (default: dados)")]
    pub data_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "laborbrief",
            "-vv",
            "generate",
            "--petition",
            "peticao.pdf",
            "--meeting",
            "reuniao.txt",
            "--output-dir",
            "/tmp/out",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate { inputs, output_dir, quiet } => {
                assert_eq!(inputs.petition, PathBuf::from("peticao.pdf"));
                assert_eq!(inputs.meeting, Some(PathBuf::from("reuniao.txt")));
                assert!(inputs.data_dir.is_none());
                assert_eq!(output_dir, Some(PathBuf::from("/tmp/out")));
                assert!(quiet);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_petition_is_required() {
        assert!(Cli::try_parse_from(["laborbrief", "prompt"]).is_err());
    }
}
