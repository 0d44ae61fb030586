//! Message id assignment

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CanonicalFields;

/// How missing message ids are synthesized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Random UUID v4
    #[default]
    Uuid,
    /// Random integer in 1..=50. Two messages can share an id, in which case
    /// the later notification replaces the earlier one.
    LegacyRandom,
}

/// Upper bound of legacy random ids
pub const LEGACY_ID_MAX: u32 = 50;

/// Guarantees every message has a non-empty id
#[derive(Debug, Clone, Copy, Default)]
pub struct IdAssigner {
    strategy: IdStrategy,
}

impl IdAssigner {
    pub fn new(strategy: IdStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    /// Fill in an id when the message has none; existing ids are kept
    pub fn ensure_id(&self, mut fields: CanonicalFields) -> CanonicalFields {
        if fields.id.is_empty() {
            fields.id = self.synthesize();
            debug!(id = %fields.id, strategy = ?self.strategy, "Assigned message id");
        }
        fields
    }

    fn synthesize(&self) -> String {
        match self.strategy {
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
            IdStrategy::LegacyRandom => rand::rng().random_range(1..=LEGACY_ID_MAX).to_string(),
        }
    }
}
