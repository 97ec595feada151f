//! The demonstration script: a banner followed by one machine per order.

use crate::machine::CoffeeMachine;
use crate::menu::CoffeeKind;
use colored::Colorize;
use serde::Deserialize;
use std::io::Write;
use tracing::debug;

pub const BANNER: &str = "---- Máquina de Café ----";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Order {
    pub coffee: CoffeeKind,
    /// Ask for milk after preparing. Ignored by beverages that take none.
    #[serde(default = "default_milk")]
    pub milk: bool,
}

fn default_milk() -> bool {
    true
}

impl Order {
    pub fn new(coffee: CoffeeKind) -> Self {
        Self { coffee, milk: true }
    }

    pub fn without_milk(coffee: CoffeeKind) -> Self {
        Self { coffee, milk: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub banner: String,
    pub orders: Vec<Order>,
    pub color: bool,
}

impl Scenario {
    /// Espresso prepared only, then cappuccino and latte each prepared and
    /// topped with milk.
    pub fn reference() -> Self {
        Self {
            banner: BANNER.to_string(),
            orders: vec![
                Order::without_milk(CoffeeKind::Espresso),
                Order::new(CoffeeKind::Cappuccino),
                Order::new(CoffeeKind::Latte),
            ],
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn render_banner(&self) -> String {
        if self.color {
            self.banner.bold().to_string()
        } else {
            self.banner.clone()
        }
    }

    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> crate::Result<()> {
        writeln!(out, "{}", self.render_banner())?;

        for order in &self.orders {
            debug!(coffee = %order.coffee, milk = order.milk, "serving order");
            let coffee = order.coffee.brew();
            let machine = CoffeeMachine::new(coffee.as_ref());
            machine.prepare(&mut *out)?;
            if order.milk {
                machine.add_milk(&mut *out)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::reference()
    }
}
