//! Item candidates: an item kind with a weight, a variable quantity, and extra properties.
use std::fmt;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::amount::{AmountSource, VariableAmount};
use crate::error::{Error, Result};
use crate::identity::{Handle, ItemKind, ItemProperty};
use crate::weighted::{note_zero_weight, Weighted};

/// A weighted candidate producing a stack of items when chosen.
///
/// The quantity is required. Properties keep the order they were supplied in and
/// are exposed only as a slice, so callers cannot alter the candidate's list.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "WeightedItemDef"))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeightedItem {
    object: Handle<ItemKind>,
    weight: u32,
    quantity: VariableAmount,
    additional_properties: Vec<Handle<ItemProperty>>,
}

/// Deserialized fields, passed through [`WeightedItem::with_properties`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct WeightedItemDef {
    object: Handle<ItemKind>,
    weight: u32,
    quantity: VariableAmount,
    #[serde(default)]
    additional_properties: Vec<Handle<ItemProperty>>,
}

#[cfg(feature = "serde")]
impl From<WeightedItemDef> for WeightedItem {
    fn from(def: WeightedItemDef) -> Self {
        WeightedItem::with_properties(
            def.object,
            def.weight,
            def.quantity,
            def.additional_properties,
        )
    }
}

impl WeightedItem {
    /// Create an item candidate without additional properties.
    pub fn new(object: Handle<ItemKind>, weight: u32, quantity: VariableAmount) -> Self {
        Self::with_properties(object, weight, quantity, std::iter::empty())
    }

    /// Create an item candidate with the given properties, in order.
    pub fn with_properties(
        object: Handle<ItemKind>,
        weight: u32,
        quantity: VariableAmount,
        properties: impl IntoIterator<Item = Handle<ItemProperty>>,
    ) -> Self {
        note_zero_weight(weight);
        Self {
            object,
            weight,
            quantity,
            additional_properties: properties.into_iter().collect(),
        }
    }

    /// Start a builder for a candidate whose quantity or properties are assembled later.
    pub fn builder(object: Handle<ItemKind>, weight: u32) -> WeightedItemBuilder {
        WeightedItemBuilder {
            object,
            weight,
            quantity: None,
            properties: Vec::new(),
        }
    }

    pub fn quantity(&self) -> &VariableAmount {
        &self.quantity
    }

    pub fn additional_properties(&self) -> &[Handle<ItemProperty>] {
        &self.additional_properties
    }

    /// Return a copy of this candidate with a different quantity.
    pub fn with_quantity(mut self, quantity: VariableAmount) -> Self {
        self.quantity = quantity;
        self
    }

    /// Draw how many items to produce.
    pub fn sample_quantity(&self, rng: &mut dyn RngCore) -> u32 {
        self.quantity.floored_amount(rng)
    }
}

impl Weighted for WeightedItem {
    type Object = ItemKind;

    fn object(&self) -> &Handle<ItemKind> {
        &self.object
    }

    fn weight(&self) -> u32 {
        self.weight
    }
}

impl fmt::Display for WeightedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WeightedItem{{object={}, weight={}, quantity={}, additionalProperties=[",
            self.object, self.weight, self.quantity
        )?;
        for (i, property) in self.additional_properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{property}")?;
        }
        f.write_str("]}")
    }
}

/// Builder for [`WeightedItem`]; [`WeightedItemBuilder::build`] fails without a quantity.
#[derive(Clone, Debug)]
pub struct WeightedItemBuilder {
    object: Handle<ItemKind>,
    weight: u32,
    quantity: Option<VariableAmount>,
    properties: Vec<Handle<ItemProperty>>,
}

impl WeightedItemBuilder {
    pub fn quantity(mut self, quantity: VariableAmount) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Append a single property.
    pub fn property(mut self, property: Handle<ItemProperty>) -> Self {
        self.properties.push(property);
        self
    }

    /// Append several properties, keeping their order.
    pub fn properties(
        mut self,
        properties: impl IntoIterator<Item = Handle<ItemProperty>>,
    ) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn build(self) -> Result<WeightedItem> {
        let quantity = self.quantity.ok_or_else(|| Error::missing("quantity"))?;
        Ok(WeightedItem::with_properties(
            self.object,
            self.weight,
            quantity,
            self.properties,
        ))
    }
}
