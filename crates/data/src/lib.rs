//! Card catalog files: loading the reduced database and producing it.

pub mod load;
pub mod reduce;
pub mod schema;

pub use load::*;
pub use reduce::*;
pub use schema::*;
