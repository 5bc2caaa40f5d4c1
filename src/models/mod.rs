pub mod common;
pub mod pagination;
pub mod prize;
pub mod spin;

pub use common::*;
pub use pagination::*;
pub use prize::*;
pub use spin::*;
