//! Machine-readable export of a completed analysis.

use crate::analysis::Analysis;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sortlab_compare::CostSummary;
use sortlab_core::OpCounters;

/// Export error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// Encoding to JSON failed
    #[error("failed to encode export: {reason}")]
    Encode {
        /// Underlying serializer message
        reason: String,
    },
    /// Decoding from JSON failed
    #[error("failed to decode export: {reason}")]
    Decode {
        /// Underlying deserializer message
        reason: String,
    },
}

/// Per-algorithm cost entry
///
/// Accesses are present only for the traced engine; the comparison
/// sorts do not track them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmCost {
    /// Order tests between two elements
    pub comparisons: u64,
    /// Writes of a value into a slot
    pub moves: u64,
    /// Array slot reads and writes, when tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accesses: Option<u64>,
}

impl From<OpCounters> for AlgorithmCost {
    fn from(counters: OpCounters) -> Self {
        Self {
            comparisons: counters.comparisons,
            moves: counters.moves,
            accesses: Some(counters.accesses),
        }
    }
}

impl From<CostSummary> for AlgorithmCost {
    fn from(cost: CostSummary) -> Self {
        Self {
            comparisons: cost.comparisons,
            moves: cost.moves,
            accesses: None,
        }
    }
}

/// Machine-readable view of a completed analysis
///
/// The algorithm map keeps insertion order, so exports list the traced
/// engine first and the comparison sorts after it, deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunExport {
    /// The input sequence as parsed
    pub original: Vec<i64>,
    /// The sorted sequence
    pub sorted: Vec<i64>,
    /// Per-algorithm counters, keyed by algorithm name
    #[serde(flatten)]
    pub algorithms: IndexMap<String, AlgorithmCost>,
}

impl RunExport {
    /// Build an export from a completed analysis
    #[must_use]
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let mut algorithms = IndexMap::new();
        algorithms.insert(
            "insertion".to_string(),
            AlgorithmCost::from(analysis.traced.counters),
        );
        if let Some(bubble) = &analysis.bubble {
            algorithms.insert("bubble".to_string(), AlgorithmCost::from(bubble.cost));
        }
        if let Some(quick) = &analysis.quick {
            algorithms.insert("quick".to_string(), AlgorithmCost::from(quick.cost));
        }

        Self {
            original: analysis.input.clone(),
            sorted: analysis.traced.sorted.clone(),
            algorithms,
        }
    }

    /// Serialize to JSON
    ///
    /// # Errors
    ///
    /// Returns error if encoding fails
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(|e| ExportError::Encode {
            reason: e.to_string(),
        })
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    ///
    /// Returns error if decoding fails
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        serde_json::from_str(json).map_err(|e| ExportError::Decode {
            reason: e.to_string(),
        })
    }
}
