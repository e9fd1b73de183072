//! Process lattice storage.

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::types::{ProcessLattice, RecordKind, Result, SpelworkError};

/// Version stamped on lattices created without one.
pub const DEFAULT_LATTICE_VERSION: &str = "1.0.0";

/// Partial update for a lattice. Absent fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct LatticeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// Keyed store of process lattices.
#[derive(Debug, Default)]
pub struct LatticeManager {
    lattices: HashMap<String, ProcessLattice>,
}

impl LatticeManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty lattice.
    pub fn create_lattice(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        version: Option<String>,
    ) -> ProcessLattice {
        let now = Utc::now();
        let lattice = ProcessLattice {
            id: generate_id(),
            name: name.into(),
            description: description.into(),
            nodes: vec![],
            edges: vec![],
            wishes: vec![],
            domains: vec![],
            resources: vec![],
            trust_metrics: vec![],
            ethics_evaluations: vec![],
            bias_detections: vec![],
            created: now,
            updated: now,
            version: version.unwrap_or_else(|| DEFAULT_LATTICE_VERSION.to_string()),
        };

        info!(lattice_id = %lattice.id, name = %lattice.name, "Created lattice");
        self.lattices.insert(lattice.id.clone(), lattice.clone());
        lattice
    }

    /// Get a lattice by ID.
    pub fn get_lattice(&self, id: &str) -> Option<&ProcessLattice> {
        self.lattices.get(id)
    }

    /// Get a lattice for in-place edits (attaching nodes, wishes, ...).
    pub fn get_lattice_mut(&mut self, id: &str) -> Option<&mut ProcessLattice> {
        self.lattices.get_mut(id)
    }

    /// All lattices, in no particular order.
    pub fn all_lattices(&self) -> Vec<&ProcessLattice> {
        self.lattices.values().collect()
    }

    /// Apply a partial update and bump the modified timestamp.
    pub fn update_lattice(&mut self, id: &str, update: LatticeUpdate) -> Result<ProcessLattice> {
        let lattice = self
            .lattices
            .get_mut(id)
            .ok_or_else(|| SpelworkError::not_found(RecordKind::Lattice, id))?;

        if let Some(name) = update.name {
            lattice.name = name;
        }
        if let Some(description) = update.description {
            lattice.description = description;
        }
        if let Some(version) = update.version {
            lattice.version = version;
        }
        lattice.updated = Utc::now();

        debug!(lattice_id = %id, "Updated lattice");
        Ok(lattice.clone())
    }

    /// Store an externally produced lattice, replacing any with the same ID.
    ///
    /// Rejects lattices without an ID or name.
    pub fn import_lattice(&mut self, mut lattice: ProcessLattice) -> Result<()> {
        if lattice.id.is_empty() || lattice.name.is_empty() {
            warn!(lattice_id = %lattice.id, "Rejected lattice import");
            return Err(SpelworkError::InvalidInput(
                "Invalid lattice data: missing required fields".to_string(),
            ));
        }

        lattice.updated = Utc::now();
        info!(lattice_id = %lattice.id, "Imported lattice");
        self.lattices.insert(lattice.id.clone(), lattice);
        Ok(())
    }

    /// Remove a lattice. Returns whether it existed.
    pub fn remove_lattice(&mut self, id: &str) -> bool {
        self.lattices.remove(id).is_some()
    }

    /// Copy a lattice under a new ID and name.
    pub fn clone_lattice(&mut self, id: &str, new_name: impl Into<String>) -> Result<ProcessLattice> {
        let original = self
            .lattices
            .get(id)
            .ok_or_else(|| SpelworkError::not_found(RecordKind::Lattice, id))?;

        let now = Utc::now();
        let cloned = ProcessLattice {
            id: generate_id(),
            name: new_name.into(),
            created: now,
            updated: now,
            ..original.clone()
        };

        info!(source_id = %id, lattice_id = %cloned.id, "Cloned lattice");
        self.lattices.insert(cloned.id.clone(), cloned.clone());
        Ok(cloned)
    }

    pub fn len(&self) -> usize {
        self.lattices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lattices.is_empty()
    }
}

fn generate_id() -> String {
    format!("lattice_{}", uuid::Uuid::new_v4().simple())
}
