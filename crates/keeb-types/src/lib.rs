pub mod point;
pub mod profile;

pub use point::*;
pub use profile::*;
