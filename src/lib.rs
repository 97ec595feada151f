//! # Coffee Machine
//!
//! Capability-based dispatch with dependency injection:
//!
//! - [`coffee`]: the `Coffee` base capability and the `MilkCoffee` extension
//! - [`menu`]: `Espresso`, `Cappuccino` and `Latte`, plus `CoffeeKind` for lookup
//! - [`machine`]: `CoffeeMachine`, which only ever sees `&dyn Coffee`
//! - [`scenario`]: the demonstration script and its reference output
//! - [`config`]: optional TOML/JSON scenario files
//! - [`cli`]: entry point used by the `coffee_machine` binary
//!
//! Run with: `cargo run --bin coffee_machine [scenario.toml]`

pub mod cli;
pub mod coffee;
pub mod config;
pub mod error;
pub mod machine;
pub mod menu;
pub mod scenario;

pub use coffee::{Coffee, Description, MilkCoffee};
pub use config::{load_scenario, Config};
pub use error::{Error, Result};
pub use machine::CoffeeMachine;
pub use menu::{Cappuccino, CoffeeKind, Espresso, Latte};
pub use scenario::{Order, Scenario};
