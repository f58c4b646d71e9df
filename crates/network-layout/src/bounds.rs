use crate::Vec3;

/// Smallest `side` with `side * side >= units`
pub(crate) fn grid_side(units: usize) -> usize {
    // Float estimate, corrected with integer math
    let mut side = (units as f64).sqrt() as usize;
    while side * side < units {
        side += 1;
    }
    while side > 0 && (side - 1) * (side - 1) >= units {
        side -= 1;
    }
    side
}

/// Width of the widest layer when its units are laid out on a square grid
///
/// Never smaller than 1.0 so that tiny networks still get a usable volume.
pub fn max_layer_width(layers: &[usize], node_size: f32) -> f32 {
    layers
        .iter()
        .map(|&units| grid_side(units) as f32 * node_size)
        .fold(1.0, f32::max)
}

/// Axis-aligned box that contains every node of the network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    pub min: Vec3,
    pub max: Vec3,

    /// Midpoint of the two corners
    pub mid: Vec3,

    /// Component-wise absolute half extents
    pub range: Vec3,
}

impl BoundingVolume {
    /// Create a volume from two corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min,
            max,
            mid: (max + min) / 2.0,
            range: ((max - min) / 2.0).abs(),
        }
    }

    /// Size the volume for a stack of layers
    ///
    /// The x/y cross-section is a square of half-width [`max_layer_width`], the
    /// z span holds one `layer_distance` slot per layer, and the whole box is
    /// centered at the origin.
    pub fn for_layers(layers: &[usize], node_size: f32, layer_distance: f32) -> Self {
        let width = max_layer_width(layers, node_size);
        let depth = layers.len() as f32 * layer_distance / 2.0;
        Self::new(
            Vec3::new(-width, -width, -depth),
            Vec3::new(width, width, depth),
        )
    }

    pub fn x_bounds(&self) -> (f32, f32) {
        (self.min.x, self.max.x)
    }

    pub fn y_bounds(&self) -> (f32, f32) {
        (self.min.y, self.max.y)
    }

    pub fn z_bounds(&self) -> (f32, f32) {
        (self.min.z, self.max.z)
    }

    /// Check that a point lies inside the volume, borders included
    pub fn contains(&self, point: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }
}
