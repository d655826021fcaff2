//! Figures of an optimization trajectory over its objective landscape.
//!
//! [`contour_figure`] and [`surface_figure`] turn a sampled [`Grid`] and a
//! [`PlanarPath`] into [`Figure`] values. Figures are plain data in the
//! Plotly.js schema; serialize them with `serde_json` and hand them to
//! `Plotly.newPlot` to render.
//!
//! # Example
//!
//! ```
//! use pathview_core::{Grid, Objective, PlanarPath};
//! use pathview_plot::{Theme, contour_figure};
//!
//! let grid = Grid::sample(Objective::Quadratic, Grid::RESOLUTION);
//! let path = PlanarPath::from_steps(&[vec![3.0, 4.0], vec![0.0, 0.0]]).unwrap();
//!
//! let figure = contour_figure(Objective::Quadratic, &grid, &path, &Theme::dark());
//! assert_eq!(figure.data.len(), 2);
//! ```
//!
//! [`Grid`]: pathview_core::Grid
//! [`PlanarPath`]: pathview_core::PlanarPath

mod figure;
mod trajectory;

pub use figure::{
    Axis, AxisTitle, Contour, ContourLines, Figure, Font, Layout, Line, Margin, Marker, Mode,
    Scatter, Scatter3d, Scene, Surface, Theme, Title, Trace,
};
pub use trajectory::{contour_figure, surface_figure};
