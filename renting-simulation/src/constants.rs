/// Default log filter of the simulation, overridable through `RUST_LOG`.
pub const DEFAULT_LOG_FILTER: &str = "info";
