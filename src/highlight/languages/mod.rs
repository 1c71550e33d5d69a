//! Built-in syntax tables.

mod c;
mod go;

pub use c::C;
pub use go::GO;
