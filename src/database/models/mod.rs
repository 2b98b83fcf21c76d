pub mod coffee;

pub use coffee::{CoffeeInput, CoffeeRecord, CoffeeView};
