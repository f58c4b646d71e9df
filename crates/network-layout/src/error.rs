use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur while building or updating a network layout
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The network has no layers at all
    #[error("network has no layers")]
    EmptyLayers,

    #[error("layer {layer} has no units")]
    EmptyLayer { layer: usize },

    #[error("node size must be positive and finite, got {0}")]
    InvalidNodeSize(f32),

    #[error("layer distance must be positive and finite, got {0}")]
    InvalidLayerDistance(f32),

    #[error("importance prune threshold must be finite, got {0}")]
    InvalidThreshold(f32),

    /// Auxiliary layer data was given but not one entry per layer
    #[error("expected layer data for {expected} layers, got {actual}")]
    LayerDataMismatch { expected: usize, actual: usize },

    /// The placer returned the wrong number of layers
    #[error("placer returned {actual} layers, expected {expected}")]
    PlacedLayerCount { expected: usize, actual: usize },

    /// The placer returned the wrong number of nodes for one layer
    #[error("placer returned {actual} nodes for layer {layer}, expected {expected}")]
    PlacementMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    /// Bulk node replacement with a differently sized sequence
    #[error("expected {expected} nodes, got {actual}")]
    NodeCountMismatch { expected: usize, actual: usize },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ron::error::SpannedError),
}
