mod capability;
mod failure;
mod outcome;
mod solver;

pub use capability::*;
pub use failure::*;
pub use outcome::*;
pub use solver::*;

#[cfg(feature = "mixed")]
mod enumeration;
#[cfg(feature = "mixed")]
mod linear;
#[cfg(feature = "mixed")]
mod supports;

#[cfg(feature = "mixed")]
pub use enumeration::*;
#[cfg(feature = "mixed")]
pub use supports::*;
