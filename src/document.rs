//! Document-scoped label tables.
//!
//! Built once per document after numbering, read-only during rendering.

use std::collections::HashMap;

use crate::error::{ResolutionError, Result};

/// A numbered, labelled display equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub number: u32,
    pub label: String,
}

/// Document-wide tables mapping stable identifiers to numbered content.
#[derive(Debug, Default)]
pub struct LabelTables {
    equations: HashMap<String, Equation>,
    /// Flattened reference-id index: id to owning container number.
    /// Containers are registered in document order and the first
    /// registration of an id wins.
    refs: HashMap<String, u32>,
}

impl LabelTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a numbered equation under its label.
    ///
    /// Identifiers are unique within the equation table; a repeated label
    /// is a hard error.
    pub fn add_equation(&mut self, label: impl Into<String>, number: u32) -> Result<()> {
        let label = label.into();
        if self.equations.contains_key(&label) {
            return Err(ResolutionError::DuplicateLabel(label).into());
        }
        self.equations.insert(
            label.clone(),
            Equation {
                number,
                label,
            },
        );
        Ok(())
    }

    /// Register a reference-holding container and the ids it owns.
    ///
    /// An id already owned by an earlier container is a document-authoring
    /// error; the earlier registration is kept and the duplicate logged.
    pub fn add_container(
        &mut self,
        number: u32,
        ids: impl IntoIterator<Item = impl Into<String>>,
    ) {
        for id in ids {
            let id = id.into();
            if self.refs.contains_key(&id) {
                log::warn!("reference id `{}` is registered in more than one container", id);
                continue;
            }
            self.refs.insert(id, number);
        }
    }

    /// Look up an equation by its label.
    pub fn equation(&self, id: &str) -> Option<&Equation> {
        self.equations.get(id)
    }

    /// Number of the container owning a reference id.
    pub fn container_number(&self, id: &str) -> Option<u32> {
        self.refs.get(id).copied()
    }
}
