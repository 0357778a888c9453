pub mod trunk;
pub mod region;
pub mod credential;

pub use trunk::*;
pub use region::*;
pub use credential::*;
