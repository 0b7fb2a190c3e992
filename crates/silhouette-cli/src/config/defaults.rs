use silhouette::core::raster::{DEFAULT_ATOM_RADIUS, DEFAULT_GRID_STEP};

pub struct DefaultsConfig {
    pub step: f64,
    pub radius: f64,
    pub output_path: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_GRID_STEP,
            radius: DEFAULT_ATOM_RADIUS,
            output_path: "area_matrix.dat".to_string(),
        }
    }
}
