pub mod expand;
pub mod stats;
