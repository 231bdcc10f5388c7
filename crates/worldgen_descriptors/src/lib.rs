#![forbid(unsafe_code)]
//! worldgen_descriptors: Value descriptors for world generation content.
//!
//! Modules:
//! - amount: variable amounts sampled at generation time (fixed, ranges, base plus variance)
//! - identity: shared handles to externally owned item kinds, block states, and item properties
//! - weighted: weighted candidates, including item candidates with quantity and properties
//! - biome: ground cover layers
//! - descriptor: closed enum over all descriptor kinds
//!
//! Selection, world generation, and registry resolution live in the consuming pipeline.
pub mod amount;
pub mod biome;
pub mod descriptor;
pub mod error;
pub mod identity;
pub mod weighted;

/// Convenient re-exports for common types. Import with `use worldgen_descriptors::prelude::*;`.
pub mod prelude {
    pub use crate::amount::{AmountSource, VariableAmount};
    pub use crate::biome::{GroundCoverLayer, GroundCoverLayerBuilder};
    pub use crate::descriptor::Descriptor;
    pub use crate::error::{Error, Result};
    pub use crate::identity::{BlockState, Handle, ItemKind, ItemProperty, PropertyValue};
    pub use crate::weighted::{Weighted, WeightedItem, WeightedItemBuilder, WeightedObject};
}
