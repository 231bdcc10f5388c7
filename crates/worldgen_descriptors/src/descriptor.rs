//! A closed set of descriptor kinds for pipelines that store them side by side.
//!
//! Two descriptors are equal only when they are the same kind and all of that kind's
//! fields match; an item candidate never equals a ground cover layer.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::biome::GroundCoverLayer;
use crate::weighted::WeightedItem;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Descriptor {
    Item(WeightedItem),
    GroundCover(GroundCoverLayer),
}

impl Descriptor {
    pub fn as_item(&self) -> Option<&WeightedItem> {
        match self {
            Descriptor::Item(item) => Some(item),
            Descriptor::GroundCover(_) => None,
        }
    }

    pub fn as_ground_cover(&self) -> Option<&GroundCoverLayer> {
        match self {
            Descriptor::GroundCover(layer) => Some(layer),
            Descriptor::Item(_) => None,
        }
    }
}

impl From<WeightedItem> for Descriptor {
    fn from(value: WeightedItem) -> Self {
        Descriptor::Item(value)
    }
}

impl From<GroundCoverLayer> for Descriptor {
    fn from(value: GroundCoverLayer) -> Self {
        Descriptor::GroundCover(value)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Item(item) => fmt::Display::fmt(item, f),
            Descriptor::GroundCover(layer) => fmt::Display::fmt(layer, f),
        }
    }
}
