//! Capability contracts for everything a [`CoffeeMachine`](crate::machine::CoffeeMachine) can brew.
//!
//! Two flat traits instead of a class hierarchy:
//! - [`Coffee`] is the base capability every beverage provides.
//! - [`MilkCoffee`] is the extra capability for beverages that take milk.
//!
//! Callers holding a `&dyn Coffee` ask for the milk capability through
//! [`Coffee::as_milk`]; no `Any` downcasting and no panics.

/// Fixed, non-empty text describing a brewing step.
pub type Description = &'static str;

/// Base capability: anything that can be prepared.
pub trait Coffee {
    /// Short display name, e.g. `"Espresso"`.
    fn name(&self) -> &'static str;

    /// Describes the brew action. Pure and always succeeds.
    fn prepare(&self) -> Description;

    /// Capability query for milk support.
    ///
    /// Beverages that implement [`MilkCoffee`] override this to return
    /// `Some(self)`; everything else keeps the `None` default.
    fn as_milk(&self) -> Option<&dyn MilkCoffee> {
        None
    }
}

/// Extended capability: a beverage that also takes milk.
///
/// A type either implements both operations or neither; there is no
/// partial conformance.
pub trait MilkCoffee: Coffee {
    fn add_milk(&self) -> Description;
}

/// Returns the milk description if `coffee` supports milk.
pub fn milk_for(coffee: &dyn Coffee) -> Option<Description> {
    coffee.as_milk().map(|milk| milk.add_milk())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Water;

    impl Coffee for Water {
        fn name(&self) -> &'static str {
            "Water"
        }

        fn prepare(&self) -> Description {
            "Pouring water"
        }
    }

    struct Flat;

    impl Coffee for Flat {
        fn name(&self) -> &'static str {
            "Flat White"
        }

        fn prepare(&self) -> Description {
            "Pulling a ristretto"
        }

        fn as_milk(&self) -> Option<&dyn MilkCoffee> {
            Some(self)
        }
    }

    impl MilkCoffee for Flat {
        fn add_milk(&self) -> Description {
            "Steaming microfoam"
        }
    }

    #[test]
    fn test_default_capability_query_is_none() {
        assert!(Water.as_milk().is_none());
        assert_eq!(milk_for(&Water), None);
    }

    #[test]
    fn test_overridden_capability_query() {
        let coffee: &dyn Coffee = &Flat;
        let milk = coffee.as_milk().unwrap();
        assert_eq!(milk.add_milk(), "Steaming microfoam");
        // The milk view still exposes the base capability.
        assert_eq!(milk.prepare(), coffee.prepare());
        assert_eq!(milk_for(coffee), Some("Steaming microfoam"));
    }
}
