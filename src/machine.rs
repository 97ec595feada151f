use crate::coffee::{milk_for, Coffee, Description};
use std::io::{self, Write};
use tracing::debug;

/// Brews whatever beverage it was built around.
///
/// The machine only knows the [`Coffee`] capability. The beverage is
/// injected by the caller and borrowed for the machine's lifetime.
pub struct CoffeeMachine<'a> {
    coffee: &'a dyn Coffee,
}

impl<'a> CoffeeMachine<'a> {
    pub fn new(coffee: &'a dyn Coffee) -> Self {
        debug!(coffee = coffee.name(), "machine loaded");
        Self { coffee }
    }

    pub fn coffee(&self) -> &'a dyn Coffee {
        self.coffee
    }

    pub fn preparation(&self) -> Description {
        self.coffee.prepare()
    }

    /// `None` when the loaded beverage has no milk capability.
    pub fn milk(&self) -> Option<Description> {
        milk_for(self.coffee)
    }

    /// Writes the preparation line to `out`.
    pub fn prepare<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        debug!(coffee = self.coffee.name(), "prepare");
        writeln!(out, "{}", self.preparation())
    }

    /// Writes the milk line to `out` if the beverage takes milk.
    ///
    /// Beverages without the milk capability are skipped silently: nothing
    /// is written and `Ok(())` is returned.
    pub fn add_milk<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self.milk() {
            Some(line) => {
                debug!(coffee = self.coffee.name(), "add milk");
                writeln!(out, "{line}")
            }
            None => {
                debug!(coffee = self.coffee.name(), "no milk capability, skipping");
                Ok(())
            }
        }
    }
}
