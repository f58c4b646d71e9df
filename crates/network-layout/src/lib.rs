//! 3D layout and edge pruning for layered networks
//!
//! This crate positions the units of a feed-forward network in space, one
//! plane per layer, and generates the connections between adjacent layers.
//! Connections with too little importance for their length are pruned before
//! they ever reach a renderer.
//!
//! # Building a model
//!
//! - [`BoundingVolume`] is sized from the widest layer
//! - a [`NodePlacer`] (e.g. [`GridPlacer`], or any closure) positions the nodes
//! - [`NetworkModel`] generates edges, applies the [`PruningPolicy`] and keeps
//!   distance diagnostics
//!
//! # Example
//!
//! ```
//! use network_layout::{
//!     BoundingVolume, GridPlacer, LayerData, LayoutConfig, NetworkModel, Node, Vec3,
//! };
//!
//! let config = LayoutConfig::default();
//!
//! // One weight magnitude per unit drives the importance of each node
//! let weights = vec![vec![0.9, 0.1, 0.4], vec![1.0, 0.05], vec![0.3]];
//! let mut model =
//!     NetworkModel::new(vec![3, 2, 1], &config, Some(weights.as_slice()), &GridPlacer).unwrap();
//!
//! let edges = model.generate_edges();
//! assert_eq!(edges.len() + model.pruned_edges(), model.edge_count());
//!
//! // Or use a custom placer
//! let stacked = |layers: &[usize], _: &BoundingVolume, _: Option<&[LayerData]>| {
//!     layers
//!         .iter()
//!         .enumerate()
//!         .map(|(z, &units)| {
//!             (0..units)
//!                 .map(|x| Node::new(Vec3::new(x as f32, 0.0, z as f32)))
//!                 .collect()
//!         })
//!         .collect::<Vec<Vec<_>>>()
//! };
//! let model = NetworkModel::new(vec![2, 2], &config, None, &stacked).unwrap();
//! assert_eq!(model.max_distance(), 2.0_f32.sqrt());
//! ```

mod bounds;
mod config;
mod edge;
mod error;
mod geometry;
mod grid;
mod node;
mod placement;

pub mod network;

// Re-export core types and traits
pub use bounds::{max_layer_width, BoundingVolume};
pub use config::LayoutConfig;
pub use edge::{Edge, EdgeAttributes};
pub use error::{LayoutError, Result};
pub use geometry::Vec3;
pub use grid::GridPlacer;
pub use node::{Node, NodeId};
pub use placement::{LayerData, NodePlacer};

// Re-export network model types
pub use network::{DegenerateScale, NetworkModel, PruningPolicy};

// Re-export petgraph types used by the connectivity view
pub use petgraph::graphmap::DiGraphMap;
pub use petgraph::Direction;
