mod balance_store;

pub use balance_store::*;
