use crate::bounds::grid_side;
use crate::{BoundingVolume, LayerData, Node, NodePlacer, Vec3};

/// Places each layer as a square grid on its own z plane
///
/// Layers are stacked along z, one equally sized slot per layer, and units
/// fill a `ceil(sqrt(units))` wide grid row by row. Cell centers are spread
/// evenly across the x/y extents of the bounding volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPlacer;

impl NodePlacer for GridPlacer {
    fn place(
        &self,
        layers: &[usize],
        bounds: &BoundingVolume,
        layer_data: Option<&[LayerData]>,
    ) -> Vec<Vec<Node>> {
        let (z_min, z_max) = bounds.z_bounds();
        let slot = (z_max - z_min) / layers.len().max(1) as f32;

        layers
            .iter()
            .enumerate()
            .map(|(layer, &units)| {
                let z = z_min + slot * (layer as f32 + 0.5);
                let importances = layer_data
                    .and_then(|data| data.get(layer))
                    .map(|weights| normalized_magnitudes(weights));

                grid_positions(units, bounds, z)
                    .into_iter()
                    .enumerate()
                    .map(|(index, position)| Node {
                        position,
                        importance: importances
                            .as_ref()
                            .and_then(|values| values.get(index).copied()),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Positions of `units` cells on a square grid at height `z`
fn grid_positions(units: usize, bounds: &BoundingVolume, z: f32) -> Vec<Vec3> {
    let side = grid_side(units).max(1);
    let (x_min, x_max) = bounds.x_bounds();
    let (y_min, y_max) = bounds.y_bounds();
    let step_x = (x_max - x_min) / side as f32;
    let step_y = (y_max - y_min) / side as f32;

    (0..units)
        .map(|i| {
            let column = (i % side) as f32;
            let row = (i / side) as f32;
            Vec3::new(
                x_min + step_x * (column + 0.5),
                y_min + step_y * (row + 0.5),
                z,
            )
        })
        .collect()
}

/// Magnitudes scaled so that the largest one is 1.0
fn normalized_magnitudes(weights: &[f32]) -> Vec<f32> {
    let max = weights.iter().map(|w| w.abs()).fold(0.0, f32::max);
    if max == 0.0 {
        return vec![1.0; weights.len()];
    }
    weights.iter().map(|w| w.abs() / max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_grid_preserves_counts_and_bounds() {
        let layers = [3, 7, 1, 16];
        let bounds = BoundingVolume::for_layers(&layers, 0.5, 4.0);
        let placed = GridPlacer.place(&layers, &bounds, None);

        assert_eq!(placed.len(), layers.len());
        for (nodes, &units) in placed.iter().zip(&layers) {
            assert_eq!(nodes.len(), units);
            assert!(nodes.iter().all(|node| bounds.contains(node.position)));
            assert!(nodes.iter().all(|node| node.importance.is_none()));
        }
    }

    #[test]
    fn test_grid_positions() {
        let bounds = BoundingVolume::for_layers(&[2, 2], 1.0, 10.0);
        let placed = GridPlacer.place(&[2, 2], &bounds, None);

        assert_eq!(placed[0][0].position, Vec3::new(-1.0, -1.0, -5.0));
        assert_eq!(placed[0][1].position, Vec3::new(1.0, -1.0, -5.0));
        assert_eq!(placed[1][0].position, Vec3::new(-1.0, -1.0, 5.0));
        assert_eq!(placed[1][1].position, Vec3::new(1.0, -1.0, 5.0));
    }

    #[test]
    fn test_importance_from_layer_data() {
        let bounds = BoundingVolume::for_layers(&[3, 2], 1.0, 1.0);
        let data = vec![vec![-2.0, 1.0, 0.5], vec![0.0]];
        let placed = GridPlacer.place(&[3, 2], &bounds, Some(data.as_slice()));

        let importances: Vec<_> = placed[0].iter().map(|n| n.importance).collect();
        assert_eq!(importances, vec![Some(1.0), Some(0.5), Some(0.25)]);

        // All-zero magnitudes fall back to 1.0, missing entries stay unset
        assert_eq!(placed[1][0].importance, Some(1.0));
        assert_eq!(placed[1][1].importance, None);
    }
}
