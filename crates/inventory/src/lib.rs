//! Inventory domain module.
//!
//! Piece keys, frequency tables and the buildability math, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod flexible;
pub mod key;
pub mod table;

pub use flexible::{ColorAssignment, ColorUsage, assign_colors};
pub use key::{ColorId, PieceKey};
pub use table::{Inventory, PieceCount, PieceTable, Requirements, is_buildable};
