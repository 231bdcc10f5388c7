//! Biome descriptors consumed by terrain decoration.
pub mod ground_cover;

pub use ground_cover::{GroundCoverLayer, GroundCoverLayerBuilder};
