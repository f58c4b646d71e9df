use crate::EdgeAttributes;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What to do with an edge whose scale factor is zero or not finite
///
/// The prune test divides the threshold by the scale factor, so such edges
/// have no meaningful bar to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegenerateScale {
    /// Drop the edge and count it as pruned
    #[default]
    Reject,
    /// Keep the edge
    Accept,
}

/// Importance-weighted accept/reject test for edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PruningPolicy {
    pub threshold: f32,
    pub degenerate_scale: DegenerateScale,
}

impl Default for PruningPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            degenerate_scale: DegenerateScale::Reject,
        }
    }
}

impl PruningPolicy {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Whether an edge survives pruning
    ///
    /// The bar is `threshold / scale_factor`: longer edges need less joint
    /// importance to be kept than short ones.
    pub fn accepts(&self, data: &EdgeAttributes) -> bool {
        if data.scale_factor == 0.0 || !data.scale_factor.is_finite() {
            debug!(
                "Degenerate scale factor {}, applying {:?}",
                data.scale_factor, self.degenerate_scale
            );
            return self.degenerate_scale == DegenerateScale::Accept;
        }
        data.importance() > self.threshold / data.scale_factor
    }
}
