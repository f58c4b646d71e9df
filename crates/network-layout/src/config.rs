use crate::{DegenerateScale, LayoutError, PruningPolicy, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry and pruning parameters of a network layout
///
/// Every field has a default, so a RON file only needs the ones it changes:
///
/// ```ron
/// (
///     node_size: 0.5,
///     importance_prune_threshold: 0.8,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Footprint of a single node
    pub node_size: f32,

    /// Spacing between two layer planes
    pub layer_distance: f32,

    pub importance_prune_threshold: f32,

    pub degenerate_scale: DegenerateScale,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: 1.0,
            layer_distance: 10.0,
            importance_prune_threshold: 0.5,
            degenerate_scale: DegenerateScale::Reject,
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a config from RON
    pub fn from_ron(source: &str) -> Result<Self> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a RON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.node_size.is_finite() && self.node_size > 0.0) {
            return Err(LayoutError::InvalidNodeSize(self.node_size));
        }
        if !(self.layer_distance.is_finite() && self.layer_distance > 0.0) {
            return Err(LayoutError::InvalidLayerDistance(self.layer_distance));
        }
        if !self.importance_prune_threshold.is_finite() {
            return Err(LayoutError::InvalidThreshold(
                self.importance_prune_threshold,
            ));
        }
        Ok(())
    }

    pub fn pruning_policy(&self) -> PruningPolicy {
        PruningPolicy {
            threshold: self.importance_prune_threshold,
            degenerate_scale: self.degenerate_scale,
        }
    }
}
