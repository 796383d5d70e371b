//! agm - kernel-based belief change on the command line.
//!
//! Reads a TOML belief document, applies one operation with the given
//! formula, and writes the resulting base to another document.

use std::path::PathBuf;

use agmcore::{
    blackbox::ExpansionStrategy,
    functions::{IncisionStrategy, SelectionStrategy},
    operations::{Operation, SuccessPolicy},
    search::{SearchStatus, SearchStrategy},
    utils::conf::AgmConfig,
};
use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

mod run;

/// Contraction, revision and SRW pseudo-contraction of propositional belief
/// bases.
#[derive(Debug, Parser)]
#[command(name = "agm")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("operation")
        .required(true)
        .args(["contraction", "revision", "srw"])
))]
#[command(group(ArgGroup::new("postulate").args(["core_retainment", "relevance"])))]
struct Cli {
    /// Input belief document (TOML)
    #[arg(short, long)]
    input: PathBuf,

    /// Output belief document (TOML)
    #[arg(short, long)]
    output: PathBuf,

    /// Formula to work with
    #[arg(short, long)]
    formula: String,

    /// Contraction; pick a minimality postulate with it
    #[arg(short, long, requires = "postulate")]
    contraction: bool,

    /// Kernel revision
    #[arg(short, long)]
    revision: bool,

    /// SRW pseudo-contraction
    #[arg(long, alias = "srw-pseudo-contraction")]
    srw: bool,

    /// Core-retainment: contract through kernels and an incision function
    #[arg(long)]
    core_retainment: bool,

    /// Relevance: contract through remainders and a selection function
    #[arg(long)]
    relevance: bool,

    /// Limit of the search queue size
    #[arg(long)]
    queue_limit: Option<usize>,

    /// Maximum number of kernel elements to compute. A meet cut short by it
    /// still removes the formula, through a diagnosis checked with the reasoner
    #[arg(long)]
    remainder_limit: Option<usize>,

    /// Use the optimized (cached, depth-first) search
    #[arg(long)]
    optimized: bool,

    /// Kernel expansion strategy (incremental, whole-set)
    #[arg(long)]
    expansion: Option<ExpansionStrategy>,

    /// Incision function for kernel contraction and revision (any, union, greedy)
    #[arg(long, default_value_t = IncisionStrategy::default())]
    incision: IncisionStrategy,

    /// Selection function for partial meet contraction (any, full, smallest)
    #[arg(long, default_value_t = SelectionStrategy::default())]
    selection: SelectionStrategy,

    /// Success policy for revision (strong, none)
    #[arg(long)]
    success: Option<SuccessPolicy>,

    /// Closure generators, comma separated (literals, subformulas)
    #[arg(long, value_delimiter = ',')]
    closure: Vec<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn operation(&self) -> Operation {
        if self.revision {
            Operation::Revision
        } else if self.srw {
            Operation::PseudoContraction
        } else if self.relevance {
            Operation::PartialMeetContraction
        } else {
            Operation::KernelContraction
        }
    }

    /// File configuration with the command-line overrides applied.
    fn config(&self) -> Result<AgmConfig> {
        let mut config = match &self.config {
            Some(path) => AgmConfig::load_from_toml(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => AgmConfig::load_or_default(&AgmConfig::default_path())?,
        };

        if self.optimized {
            config.search.strategy = SearchStrategy::Optimized;
        }
        if let Some(limit) = self.queue_limit {
            config.search.queue_limit = Some(limit);
        }
        if let Some(limit) = self.remainder_limit {
            config.search.kernel_limit = Some(limit);
        }
        if let Some(expansion) = self.expansion {
            config.search.expansion = expansion;
        }
        if let Some(success) = self.success {
            config.revision.success = success;
        }
        if !self.closure.is_empty() {
            config.closure.generators = self.closure.clone();
        }
        Ok(config)
    }

    fn job(&self) -> run::Job {
        run::Job {
            operation: self.operation(),
            input: self.input.clone(),
            output: self.output.clone(),
            formula: self.formula.clone(),
            incision: self.incision,
            selection: self.selection,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config = cli.config()?;
    let outcome = run::execute(&cli.job(), &config)?;

    if let SearchStatus::Truncated {
        dropped_paths,
        kernel_limit_hit,
    } = &outcome.search.status
    {
        tracing::warn!(
            dropped_paths,
            kernel_limit_hit,
            "search was truncated, the result may not satisfy every postulate"
        );
    }

    println!(
        "{}: removed {} axioms, {} in the result ({} oracle calls)",
        outcome.operation,
        outcome.removed.len(),
        outcome.result.len(),
        outcome.search.run_info.oracle_calls
    );
    for axiom in outcome.removed.iter() {
        println!("  - {axiom}");
    }
    Ok(())
}
