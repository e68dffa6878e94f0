pub mod ops;
pub mod utils;
