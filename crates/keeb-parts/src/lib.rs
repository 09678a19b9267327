pub mod curve;
pub mod handrest;
pub mod tenting;
pub mod types;

pub use curve::{sample_curve, SlopeCurve};
pub use handrest::{generate_handrest, handrest_profile, HandrestParams, Placement};
pub use tenting::{column_profile, generate_tenting_column, ColumnProfile, TentingColumnParams};
pub use types::*;
