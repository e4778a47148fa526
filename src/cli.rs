use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::views::SummaryView;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
            OutputFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "accessmap")]
#[command(about = "ERP role-access violation reconciliation and reporting", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile the HR roster against the access report and render views
    Analyze {
        /// HR master sheet (CSV with a header row)
        roster: PathBuf,

        /// Access data sheet (CSV with a header row)
        access: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Cluster values to keep (repeat or comma-separate)
        #[arg(long, value_delimiter = ',')]
        cluster: Vec<String>,

        /// SPG values to keep
        #[arg(long, value_delimiter = ',')]
        spg: Vec<String>,

        /// BU values to keep
        #[arg(long, value_delimiter = ',')]
        bu: Vec<String>,

        /// Which projection the summary section shows
        #[arg(long, value_enum, default_value = "violations")]
        view: SummaryView,
    },
}
