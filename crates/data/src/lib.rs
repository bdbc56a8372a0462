//! Loading and validation of shuffle settings, spreads and card catalogs.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
