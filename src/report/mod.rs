mod block;
mod dto;
mod report;

pub use block::*;
pub use dto::*;
pub use report::*;
