use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use network_layout::{GridPlacer, LayerData, LayoutConfig, NetworkModel};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Unit count of each layer, e.g. 784,128,10
    #[arg(short, long, value_delimiter = ',', required = true)]
    layers: Vec<usize>,

    /// RON file with the layout config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RON file with one list of weight magnitudes per layer
    #[arg(short, long)]
    weights: Option<PathBuf>,

    #[arg(long)]
    node_size: Option<f32>,

    #[arg(long)]
    layer_distance: Option<f32>,

    /// Importance prune threshold
    #[arg(short, long)]
    threshold: Option<f32>,
}

impl Args {
    /// Config file (or defaults) with the command line overrides applied
    fn layout_config(&self) -> Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => LayoutConfig::default(),
        };

        if let Some(node_size) = self.node_size {
            config.node_size = node_size;
        }
        if let Some(layer_distance) = self.layer_distance {
            config.layer_distance = layer_distance;
        }
        if let Some(threshold) = self.threshold {
            config.importance_prune_threshold = threshold;
        }
        config.validate()?;

        Ok(config)
    }
}

fn load_weights(path: &Path) -> Result<Vec<LayerData>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read weights from {}", path.display()))?;
    let weights = ron::from_str(&source)
        .with_context(|| format!("Invalid weights in {}", path.display()))?;
    Ok(weights)
}

/// Summary of a model and one pruned edge generation
#[derive(Debug, PartialEq)]
struct Report {
    layers: Vec<usize>,
    node_size: f32,
    layer_distance: f32,
    nodes: usize,
    edges: usize,
    kept: usize,
    pruned: usize,
    isolated: usize,
    max_distance: f32,
    average_edge_distance: f32,
}

impl Report {
    fn new(model: &mut NetworkModel) -> Self {
        let edges = model.generate_edges();
        Self {
            layers: model.layers().to_vec(),
            node_size: model.node_size(),
            layer_distance: model.layer_distance(),
            nodes: model.node_count(),
            edges: model.edge_count(),
            kept: edges.len(),
            pruned: model.pruned_edges(),
            isolated: model.isolated_nodes(&edges).len(),
            max_distance: model.max_distance(),
            average_edge_distance: model.average_edge_distance(),
        }
    }
}

fn run(args: &Args) -> Result<Report> {
    let config = args.layout_config()?;
    debug!("Layout config: {config:?}");

    let weights = args.weights.as_deref().map(load_weights).transpose()?;

    let mut model = NetworkModel::new(
        args.layers.clone(),
        &config,
        weights.as_deref(),
        &GridPlacer,
    )
    .context("Failed to build the network layout")?;
    info!("Bounding volume: {:?}", model.bounds());

    Ok(Report::new(&mut model))
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let report = run(&args)?;

    println!("layers:                {:?}", report.layers);
    println!("node size:             {}", report.node_size);
    println!("layer distance:        {}", report.layer_distance);
    println!("nodes:                 {}", report.nodes);
    println!("edges:                 {}", report.edges);
    println!("kept:                  {}", report.kept);
    println!("pruned:                {}", report.pruned);
    println!("isolated nodes:        {}", report.isolated);
    println!("max distance:          {:.4}", report.max_distance);
    println!("average edge distance: {:.4}", report.average_edge_distance);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use network_layout::LayoutError;
    use std::io::Write;
    use test_log::test;

    fn ron_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["netlayout", "--layers", "4,8,2", "-t", "0.8"]).unwrap();
        assert_eq!(args.layers, vec![4, 8, 2]);

        let config = args.layout_config().unwrap();
        assert_eq!(config.importance_prune_threshold, 0.8);
        assert_eq!(config.node_size, 1.0);

        assert!(Args::try_parse_from(["netlayout"]).is_err());
    }

    #[test]
    fn test_overrides_apply_on_top_of_config_file() {
        let file = ron_file("(node_size: 0.5, layer_distance: 3.0)");
        let path = file.path().to_str().unwrap();
        let args =
            Args::try_parse_from(["netlayout", "-l", "2", "-c", path, "--layer-distance", "4.0"])
                .unwrap();

        let config = args.layout_config().unwrap();
        assert_eq!(config.node_size, 0.5);
        assert_eq!(config.layer_distance, 4.0);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args = Args::try_parse_from(["netlayout", "-l", "2,2", "--node-size=-1"]).unwrap();
        assert!(args.layout_config().is_err());
    }

    #[test]
    fn test_run_with_weights() {
        let file = ron_file("[[1.0, 0.1], [1.0, 0.2]]");
        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["netlayout", "-l", "2,2", "-w", path]).unwrap();

        let report = run(&args).unwrap();
        assert_eq!(report.layers, vec![2, 2]);
        assert_eq!(report.node_size, 1.0);
        assert_eq!(report.layer_distance, 10.0);
        assert_eq!(report.nodes, 4);
        assert_eq!(report.edges, 4);
        assert_eq!(report.kept, 3);
        assert_eq!(report.pruned, 1);
        assert_eq!(report.isolated, 0);
        assert_eq!(report.average_edge_distance, 1.0);
    }

    #[test]
    fn test_run_with_mismatched_weights() {
        let file = ron_file("[[1.0, 0.1]]");
        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from(["netlayout", "-l", "2,2", "-w", path]).unwrap();

        let err = run(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LayoutError>(),
            Some(LayoutError::LayerDataMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }
}
