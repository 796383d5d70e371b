//! TOML belief documents.
//!
//! ```toml
//! axioms = ["rain -> wet", "rain"]
//! ```
use std::path::Path;

use agmcore::base::BeliefSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PropError, PropResult},
    formula::Formula,
};

/// A belief base as stored on disk: one formula per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeliefDocument {
    #[serde(default)]
    pub axioms: Vec<String>,
}

impl BeliefDocument {
    /// Printed form of every axiom, in belief set order.
    pub fn from_belief_set(set: &BeliefSet<Formula>) -> Self {
        Self {
            axioms: set.iter().map(Formula::to_string).collect(),
        }
    }

    /// Parses every axiom. Duplicates collapse.
    pub fn to_belief_set(&self) -> PropResult<BeliefSet<Formula>> {
        self.axioms.iter().map(|src| src.parse()).collect()
    }

    /// Load a document from a TOML file.
    pub fn load_from_toml(path: &Path) -> PropResult<Self> {
        let toml_str = std::fs::read_to_string(path)?;

        toml::from_str(&toml_str).map_err(|source| PropError::DocumentParseError {
            source,
            file: path.display().to_string(),
        })
    }

    /// Save the document to a TOML file, creating parent directories.
    pub fn save_to_toml(&self, path: &Path) -> PropResult<()> {
        let toml_str = toml::to_string(self).map_err(|source| PropError::DocumentSerializeError {
            source,
            file: path.display().to_string(),
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

/// Reads and parses the belief base stored at `path`.
pub fn load_belief_set(path: &Path) -> PropResult<BeliefSet<Formula>> {
    let set = BeliefDocument::load_from_toml(path)?.to_belief_set()?;
    log::debug!("loaded {} axioms from {}", set.len(), path.display());
    Ok(set)
}

/// Writes `set` to `path` as a belief document.
pub fn save_belief_set(path: &Path, set: &BeliefSet<Formula>) -> PropResult<()> {
    BeliefDocument::from_belief_set(set).save_to_toml(path)?;
    log::debug!("saved {} axioms to {}", set.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_axioms() {
        let document: BeliefDocument =
            toml::from_str(r#"axioms = ["a -> b", "a", "a"]"#).unwrap();
        let set = document.to_belief_set().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Formula::atom("a")));
    }

    #[test]
    fn missing_axioms_key_is_empty() {
        let document: BeliefDocument = toml::from_str("").unwrap();
        assert!(document.to_belief_set().unwrap().is_empty());
    }

    #[test]
    fn bad_axiom_is_reported() {
        let document = BeliefDocument {
            axioms: vec!["a".to_string(), "a &".to_string()],
        };
        match document.to_belief_set() {
            Err(PropError::Parse { input, errors }) => {
                assert_eq!(input, "a &");
                assert!(!errors.is_empty());
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("agm-doc-{}", std::process::id()));
        let path = dir.join("base.toml");
        let set: BeliefSet<Formula> = ["p -> q", "!(q & r)", "p"]
            .iter()
            .map(|src| src.parse().unwrap())
            .collect();

        save_belief_set(&path, &set).unwrap();
        assert_eq!(load_belief_set(&path).unwrap(), set);
        assert!(matches!(
            BeliefDocument::load_from_toml(&dir.join("missing.toml")),
            Err(PropError::IoError(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
