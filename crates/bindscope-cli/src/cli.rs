use super::commands;
use bindscope_core::{Interface, Method, DEFAULT_CONTACT_CUTOFF};
use bindscope_io::{AnalysisConfig, DEFAULT_TARGET};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Correlate binder design outcomes with sequence and structure features", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Where to read inputs and write charts.
#[derive(Args, Debug, Clone)]
pub struct Paths {
    /// Directory holding result_summary.csv, the DE-STRESS CSV and structures/
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,

    /// Directory the SVG charts are written to
    #[arg(long, default_value = "plots")]
    pub out_dir: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct InterfaceArgs {
    #[arg(long, default_value = "A")]
    pub chain_a: String,

    #[arg(long, default_value = "B")]
    pub chain_b: String,

    /// Residue contact distance cutoff in Ångström
    #[arg(long, default_value_t = DEFAULT_CONTACT_CUTOFF)]
    pub cutoff: f32,
}

impl From<InterfaceArgs> for Interface {
    fn from(args: InterfaceArgs) -> Self {
        Interface {
            chain_a: args.chain_a,
            chain_b: args.chain_b,
            cutoff: args.cutoff,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Correlation heatmap of all designs and the per-feature correlation with the target
    Correlate {
        #[command(flatten)]
        paths: Paths,

        #[command(flatten)]
        interface: InterfaceArgs,

        /// spearman or pearson
        #[arg(long, default_value_t = Method::Spearman)]
        method: Method,

        /// Column whose absolute correlations are charted
        #[arg(long, default_value = DEFAULT_TARGET)]
        target: String,

        /// Write the merged design table as CSV
        #[arg(long)]
        table_out: Option<PathBuf>,
    },
    /// One correlation heatmap per design model
    Models {
        #[command(flatten)]
        paths: Paths,

        #[arg(long, default_value_t = Method::Pearson)]
        method: Method,
    },
    /// Binding strength and expression counts per design model
    Outcomes {
        #[command(flatten)]
        paths: Paths,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Correlate {
                paths,
                interface,
                method,
                target,
                table_out,
            } => {
                let config = AnalysisConfig::builder()
                    .results_dir(paths.results_dir)
                    .interface(interface.into())
                    .method(method)
                    .target(target)
                    .build();
                commands::correlate::execute(&config, &paths.out_dir, table_out.as_deref())
            }
            Commands::Models { paths, method } => {
                commands::models::execute(&paths.results_dir, &paths.out_dir, method)
            }
            Commands::Outcomes { paths } => {
                commands::outcomes::execute(&paths.results_dir, &paths.out_dir)
            }
        }
    }
}
