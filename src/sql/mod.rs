//! Safe SQL builder: identifiers from static table descriptors only, values as parameters.

mod builder;
mod tables;
pub use builder::*;
pub use tables::*;
