//! Identities owned by registries outside this crate.
//!
//! Descriptors only reference these through a [`Handle`]; they never copy or mutate
//! the identity itself, so an update made by the owner is visible through every
//! descriptor sharing the handle.
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shared, non-owning reference to an externally owned identity.
pub type Handle<T> = Arc<T>;

/// Namespaced identifier of an item kind, e.g. `minecraft:apple`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemKind {
    pub key: String,
}

impl ItemKind {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Create the kind and wrap it in a [`Handle`].
    pub fn handle(key: impl Into<String>) -> Handle<Self> {
        Arc::new(Self::new(key))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

/// A configured terrain block: the block id plus its property assignments.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockState {
    pub block: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: BTreeMap<String, String>,
}

impl BlockState {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set a property, replacing any earlier value for the same name.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn into_handle(self) -> Handle<Self> {
        Arc::new(self)
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.block)?;
        if self.properties.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, (name, value)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str("]")
    }
}

/// Value carried by an [`ItemProperty`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(v) => write!(f, "{v}"),
            PropertyValue::Int(v) => write!(f, "{v}"),
            PropertyValue::Text(v) => write!(f, "{v:?}"),
        }
    }
}

/// Auxiliary property applied to a produced item (enchantment, durability, name...).
///
/// How a property customizes the item is decided by the consumer.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemProperty {
    pub key: String,
    pub value: PropertyValue,
}

impl ItemProperty {
    pub fn new(key: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn into_handle(self) -> Handle<Self> {
        Arc::new(self)
    }
}

impl fmt::Display for ItemProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
