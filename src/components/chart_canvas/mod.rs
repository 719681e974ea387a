mod component;
mod paint;

pub use component::ChartCanvas;
pub(crate) use paint::context_2d;
