pub mod cache;
pub mod detector;
pub mod error;
pub mod fingerprint;
pub mod grid;
pub mod service;
pub mod stats;
pub mod store;

pub use error::{MutantError, MutantResult};
pub use grid::{Grid, ValidationError};
pub use service::{Evaluation, MutantService};
pub use stats::StatsSnapshot;
