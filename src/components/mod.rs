pub mod chart_canvas;
pub mod force_graph;
pub mod legend;

pub use chart_canvas::ChartCanvas;
pub use force_graph::ForceGraphCanvas;
pub use legend::GenreLegend;
