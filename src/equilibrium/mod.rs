mod density;
mod mixed;
mod pure;
mod strategy;

pub use density::*;
pub use mixed::*;
pub use pure::*;
pub use strategy::*;
