//! Dullahan operational scripts: the discount and renting yield model, and the keeper tooling built on it.

pub use discount_yield_model as model;
pub use dullahan_keeper as keeper;
