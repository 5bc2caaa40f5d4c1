pub mod spin_service;

pub use spin_service::*;
