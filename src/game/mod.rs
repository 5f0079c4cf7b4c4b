mod catalog;
mod game;
mod invalid;
mod matrix;

pub use catalog::*;
pub use game::*;
pub use invalid::*;
pub use matrix::*;
