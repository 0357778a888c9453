pub mod common;
pub mod trunks;
pub mod wizard;
