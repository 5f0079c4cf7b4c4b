mod simulator;
mod summary;

pub use simulator::*;
pub use summary::*;
