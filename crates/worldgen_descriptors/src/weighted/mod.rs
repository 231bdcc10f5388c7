//! Weighted candidates consumed by an external weighted-random selector.
//!
//! - [WeightedObject]: the plain candidate, a shared object plus an integer weight.
//! - [item::WeightedItem]: an item candidate that also carries a quantity and
//!   auxiliary properties.
//!
//! Weights are relative; a selector draws proportionally to them. A weight of zero is
//! accepted but the candidate can never be drawn.
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::identity::Handle;

pub mod item;

pub use item::{WeightedItem, WeightedItemBuilder};

/// A candidate for weighted-random selection.
pub trait Weighted {
    type Object;

    /// Shared handle to the candidate's object.
    fn object(&self) -> &Handle<Self::Object>;

    /// Relative selection weight.
    fn weight(&self) -> u32;
}

/// A shared object paired with a fixed selection weight.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "WeightedObjectDef<T>",
        bound(deserialize = "T: Deserialize<'de>")
    )
)]
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct WeightedObject<T> {
    object: Handle<T>,
    weight: u32,
}

/// Deserialized fields, passed through [`WeightedObject::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct WeightedObjectDef<T> {
    object: Handle<T>,
    weight: u32,
}

#[cfg(feature = "serde")]
impl<T> From<WeightedObjectDef<T>> for WeightedObject<T> {
    fn from(def: WeightedObjectDef<T>) -> Self {
        WeightedObject::new(def.object, def.weight)
    }
}

impl<T> WeightedObject<T> {
    pub fn new(object: Handle<T>, weight: u32) -> Self {
        note_zero_weight(weight);
        Self { object, weight }
    }

    /// Wrap an owned object in a fresh [`Handle`].
    pub fn from_owned(object: T, weight: u32) -> Self {
        Self::new(Arc::new(object), weight)
    }
}

// Manual impl: cloning only bumps the handle, so `T: Clone` is not required.
impl<T> Clone for WeightedObject<T> {
    fn clone(&self) -> Self {
        Self {
            object: Arc::clone(&self.object),
            weight: self.weight,
        }
    }
}

impl<T> Weighted for WeightedObject<T> {
    type Object = T;

    fn object(&self) -> &Handle<T> {
        &self.object
    }

    fn weight(&self) -> u32 {
        self.weight
    }
}

impl<T: fmt::Display> fmt::Display for WeightedObject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WeightedObject{{object={}, weight={}}}",
            self.object, self.weight
        )
    }
}

pub(crate) fn note_zero_weight(weight: u32) {
    if weight == 0 {
        debug!("Weighted candidate created with weight 0; it can never be selected.");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};

    use super::*;
    use crate::identity::ItemKind;

    struct EventCounter {
        events: Arc<AtomicUsize>,
    }

    impl Subscriber for EventCounter {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, _event: &Event<'_>) {
            self.events.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    /// Run `f` with a thread-local subscriber and return how many events it emitted.
    pub(crate) fn count_events<R>(f: impl FnOnce() -> R) -> (usize, R) {
        let events = Arc::new(AtomicUsize::new(0));
        let counter = EventCounter {
            events: Arc::clone(&events),
        };
        let out = tracing::subscriber::with_default(counter, f);
        (events.load(Ordering::SeqCst), out)
    }

    #[test]
    fn zero_weight_is_logged() {
        let (events, _) = count_events(|| WeightedObject::from_owned(ItemKind::new("a"), 0));
        assert_eq!(events, 1);

        let (events, _) = count_events(|| WeightedObject::from_owned(ItemKind::new("a"), 2));
        assert_eq!(events, 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_object_goes_through_constructor() {
        let (events, candidate) = count_events(|| {
            ron::from_str::<WeightedObject<ItemKind>>(
                r#"(object: (key: "minecraft:bone"), weight: 0)"#,
            )
        });
        assert_eq!(events, 1);
        assert_eq!(
            candidate.unwrap(),
            WeightedObject::from_owned(ItemKind::new("minecraft:bone"), 0)
        );
    }

    #[test]
    fn weight_and_object_are_exposed() {
        let kind = ItemKind::handle("minecraft:bone");
        let candidate = WeightedObject::new(Arc::clone(&kind), 12);
        assert_eq!(candidate.weight(), 12);
        assert!(Arc::ptr_eq(candidate.object(), &kind));
    }

    #[test]
    fn equality_uses_object_value_and_weight() {
        let a = WeightedObject::from_owned(ItemKind::new("minecraft:bone"), 3);
        let b = WeightedObject::from_owned(ItemKind::new("minecraft:bone"), 3);
        let c = WeightedObject::from_owned(ItemKind::new("minecraft:bone"), 4);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn clone_shares_the_handle() {
        let a = WeightedObject::from_owned(ItemKind::new("minecraft:string"), 1);
        let b = a.clone();
        assert!(Arc::ptr_eq(a.object(), b.object()));
    }

    #[test]
    fn display_lists_object_then_weight() {
        let a = WeightedObject::from_owned(ItemKind::new("minecraft:bone"), 3);
        assert_eq!(a.to_string(), "WeightedObject{object=minecraft:bone, weight=3}");
    }
}
