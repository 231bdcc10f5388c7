//! Ground cover layers: a block state laid down to a variable depth.
use std::fmt;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::amount::{AmountSource, VariableAmount};
use crate::error::{Error, Result};
use crate::identity::{BlockState, Handle};

/// One layer of a biome's ground cover.
///
/// Both the block and the depth are always present. The fallible constructors and
/// setters exist for callers holding optional values; they reject `None` without
/// touching the layer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroundCoverLayer {
    block: Handle<BlockState>,
    depth: VariableAmount,
}

impl GroundCoverLayer {
    pub fn new(block: Handle<BlockState>, depth: VariableAmount) -> Self {
        Self { block, depth }
    }

    /// Create a layer from parts that may be missing.
    pub fn try_from_parts(
        block: Option<Handle<BlockState>>,
        depth: Option<VariableAmount>,
    ) -> Result<Self> {
        let block = block.ok_or_else(|| Error::missing("block"))?;
        let depth = depth.ok_or_else(|| Error::missing("depth"))?;
        Ok(Self::new(block, depth))
    }

    pub fn builder() -> GroundCoverLayerBuilder {
        GroundCoverLayerBuilder::default()
    }

    pub fn block_state(&self) -> &Handle<BlockState> {
        &self.block
    }

    pub fn set_block_state(&mut self, block: Handle<BlockState>) {
        trace!("Ground cover block {} -> {}", self.block, block);
        self.block = block;
    }

    /// Replace the block, failing on `None` and keeping the current block.
    pub fn try_set_block_state(&mut self, block: Option<Handle<BlockState>>) -> Result<()> {
        let block = block.ok_or_else(|| Error::missing("block"))?;
        self.set_block_state(block);
        Ok(())
    }

    pub fn depth(&self) -> &VariableAmount {
        &self.depth
    }

    pub fn set_depth(&mut self, depth: VariableAmount) {
        trace!("Ground cover depth {} -> {}", self.depth, depth);
        self.depth = depth;
    }

    /// Replace the depth, failing on `None` and keeping the current depth.
    pub fn try_set_depth(&mut self, depth: Option<VariableAmount>) -> Result<()> {
        let depth = depth.ok_or_else(|| Error::missing("depth"))?;
        self.set_depth(depth);
        Ok(())
    }

    /// Draw the number of vertical units this layer occupies.
    pub fn sample_depth(&self, rng: &mut dyn RngCore) -> u32 {
        self.depth.floored_amount(rng)
    }
}

impl fmt::Display for GroundCoverLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GroundCoverLayer{{block={}, depth={}}}",
            self.block, self.depth
        )
    }
}

/// Collects the parts of a [`GroundCoverLayer`] before validating them.
#[derive(Clone, Debug, Default)]
pub struct GroundCoverLayerBuilder {
    block: Option<Handle<BlockState>>,
    depth: Option<VariableAmount>,
}

impl GroundCoverLayerBuilder {
    pub fn block(mut self, block: Handle<BlockState>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn depth(mut self, depth: VariableAmount) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn build(self) -> Result<GroundCoverLayer> {
        GroundCoverLayer::try_from_parts(self.block, self.depth)
    }
}
