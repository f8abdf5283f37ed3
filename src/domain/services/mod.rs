//! Domain Services
//!
//! Pure functions over domain types; no I/O.

mod destination;
pub mod diagnostics;

pub use destination::destination_for;
pub use diagnostics::legible;
