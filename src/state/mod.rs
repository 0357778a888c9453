pub mod trunks;
pub mod ui;
pub mod wizard;

pub use trunks::*;
pub use ui::*;
pub use wizard::*;

#[cfg(test)]
mod tests;
