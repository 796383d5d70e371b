use std::path::PathBuf;

use agmcore::{
    ext::observe::default_observer,
    functions::{IncisionStrategy, SelectionStrategy},
    operations::{
        KernelContractor, Operation, OperationOutcome, PartialMeetContractor, PseudoContractor,
        Revisor,
    },
    utils::conf::AgmConfig,
};
use agmprop::prelude::*;
use anyhow::{Context, Result};

/// One operation requested on the command line.
#[derive(Debug, Clone)]
pub struct Job {
    pub operation: Operation,
    pub input: PathBuf,
    pub output: PathBuf,
    pub formula: String,
    pub incision: IncisionStrategy,
    pub selection: SelectionStrategy,
}

/// Loads the input document, applies the operation and writes the result.
pub fn execute(job: &Job, config: &AgmConfig) -> Result<OperationOutcome<Formula>> {
    let base = load_belief_set(&job.input)
        .with_context(|| format!("reading belief base {}", job.input.display()))?;
    let formula: Formula = job.formula.parse()?;
    let closure = SignatureClosure::from_names(&config.closure.generators)?;
    let search = config.search.build(default_observer());
    let oracle = TruthTableOracle::new();

    tracing::info!(
        operation = %job.operation,
        axioms = base.len(),
        %formula,
        strategy = %config.search.strategy,
        "applying operation"
    );

    let outcome = match job.operation {
        Operation::KernelContraction => KernelContractor::new(search, job.incision)
            .with_closure(closure)
            .contract(&oracle, &base, &formula)?,
        Operation::PartialMeetContraction => PartialMeetContractor::new(search, job.selection)
            .with_closure(closure)
            .with_degenerate(Formula::is_degenerate)
            .contract(&oracle, &base, &formula)?,
        Operation::PseudoContraction => PseudoContractor::new(search)
            .with_closure(closure)
            .with_degenerate(Formula::is_degenerate)
            .pseudo_contract(&oracle, &base, &formula)?,
        Operation::Revision => Revisor::new(search, job.incision)
            .with_closure(closure)
            .with_success(config.revision.success)
            .revise(&oracle, &base, &formula)?,
    };

    save_belief_set(&job.output, &outcome.result)
        .with_context(|| format!("writing result to {}", job.output.display()))?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace(name: &str, axioms: &[&str]) -> (PathBuf, PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("agm-run-{name}-{}", std::process::id()));
        let input = dir.join("in.toml");
        let output = dir.join("out.toml");
        BeliefDocument {
            axioms: axioms.iter().map(|axiom| axiom.to_string()).collect(),
        }
        .save_to_toml(&input)
        .unwrap();
        (dir, input, output)
    }

    fn job(operation: Operation, input: PathBuf, output: PathBuf, formula: &str) -> Job {
        Job {
            operation,
            input,
            output,
            formula: formula.to_string(),
            incision: IncisionStrategy::Greedy,
            selection: SelectionStrategy::Full,
        }
    }

    #[test]
    fn kernel_contraction_writes_the_result() {
        let (dir, input, output) = workspace("kernel", &["rain -> wet", "rain", "cold"]);

        let outcome = execute(
            &job(Operation::KernelContraction, input, output.clone(), "wet"),
            &AgmConfig::default(),
        )
        .unwrap();

        let written = load_belief_set(&output).unwrap();
        assert_eq!(written, outcome.result);
        assert!(written.contains(&"cold".parse().unwrap()));
        assert!(!written.contains(&"rain".parse().unwrap()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn revision_adds_the_sentence() {
        let (dir, input, output) = workspace("revision", &["p", "p -> q"]);
        let mut config = AgmConfig::default();
        config.search.strategy = agmcore::search::SearchStrategy::Optimized;

        let outcome = execute(&job(Operation::Revision, input, output, "!q"), &config).unwrap();
        assert!(outcome.result.contains(&"!q".parse().unwrap()));
        assert_eq!(outcome.removed.len(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn partial_meet_keeps_a_base_that_does_not_entail() {
        let (dir, input, output) = workspace("vacuity", &["p -> false", "q"]);
        let mut job = job(Operation::PartialMeetContraction, input.clone(), output, "r");
        job.selection = SelectionStrategy::Full;

        let outcome = execute(&job, &AgmConfig::default()).unwrap();
        assert_eq!(outcome.result, load_belief_set(&input).unwrap());
        assert!(outcome.removed.is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unknown_generator_is_an_error() {
        let (dir, input, output) = workspace("generator", &["p"]);
        let mut config = AgmConfig::default();
        config.closure.generators = vec!["everything".to_string()];

        assert!(execute(&job(Operation::PseudoContraction, input, output, "p"), &config).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn bad_formula_is_an_error() {
        let (dir, input, output) = workspace("formula", &["p"]);
        assert!(
            execute(
                &job(Operation::KernelContraction, input, output, "p &"),
                &AgmConfig::default()
            )
            .is_err()
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
