use crate::coffee::{Coffee, Description, MilkCoffee};
use crate::error::Error;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Beverages
// =============================================================================

/// Plain espresso. Base capability only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Espresso;

impl Coffee for Espresso {
    fn name(&self) -> &'static str {
        "Espresso"
    }

    fn prepare(&self) -> Description {
        "☕ Preparando un Espresso..."
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cappuccino;

impl Coffee for Cappuccino {
    fn name(&self) -> &'static str {
        "Cappuccino"
    }

    fn prepare(&self) -> Description {
        "☕ Preparando un Cappuccino..."
    }

    fn as_milk(&self) -> Option<&dyn MilkCoffee> {
        Some(self)
    }
}

impl MilkCoffee for Cappuccino {
    fn add_milk(&self) -> Description {
        "🥛 Añadiendo leche al Cappuccino..."
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latte;

impl Coffee for Latte {
    fn name(&self) -> &'static str {
        "Latte"
    }

    fn prepare(&self) -> Description {
        "☕ Preparando un Latte..."
    }

    fn as_milk(&self) -> Option<&dyn MilkCoffee> {
        Some(self)
    }
}

impl MilkCoffee for Latte {
    fn add_milk(&self) -> Description {
        "🥛 Añadiendo leche al Latte..."
    }
}

// =============================================================================
// Menu lookup
// =============================================================================

/// Names every beverage on the menu, so orders can be written down in a
/// scenario file and brewed later. Names are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CoffeeKind {
    Espresso,
    Cappuccino,
    Latte,
}

impl CoffeeKind {
    pub const ALL: [CoffeeKind; 3] = [Self::Espresso, Self::Cappuccino, Self::Latte];

    pub fn brew(self) -> Box<dyn Coffee> {
        match self {
            Self::Espresso => Box::new(Espresso),
            Self::Cappuccino => Box::new(Cappuccino),
            Self::Latte => Box::new(Latte),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Espresso => "espresso",
            Self::Cappuccino => "cappuccino",
            Self::Latte => "latte",
        }
    }
}

impl FromStr for CoffeeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCoffee(wanted.to_string()))
    }
}

impl TryFrom<String> for CoffeeKind {
    type Error = Error;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for CoffeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
