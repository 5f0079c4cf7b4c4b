mod canvas;
mod font;
mod heatmap;
mod palette;

pub use canvas::*;
pub use heatmap::*;
pub use palette::*;
