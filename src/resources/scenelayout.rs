//! Scene layout data for auxiliary entities.
//!
//! Portal and castle placement is defined externally in a JSON file; the host
//! loads it at startup and [`game::spawn_scenery`](crate::game::spawn_scenery)
//! turns it into marker-tagged entities the sequencer can discover.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "portals": [[9.0, 0.0, 4.0], [9.0, 0.0, 6.0]],
//!   "castles": [[0.0, 0.0, 5.0]]
//! }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Placement of the auxiliary scene entities moved along with the grid.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SceneLayoutData {
    /// Positions of enemy spawn portals.
    #[serde(default)]
    pub portals: Vec<Vec3>,
    /// Positions of player castles.
    #[serde(default)]
    pub castles: Vec<Vec3>,
}

impl SceneLayoutData {
    /// Loads scene layout data from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let layout_data: SceneLayoutData = serde_json::from_str(&file_content)?;
        Ok(layout_data)
    }
}
