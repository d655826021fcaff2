//! Figure descriptions in the Plotly.js JSON schema.
//!
//! These types carry no behavior beyond serialization: a [`Figure`] encodes
//! to exactly the `{ "data": [...], "layout": {...} }` object that
//! `Plotly.newPlot` accepts.

use serde::Serialize;

/// A complete figure: its traces and its layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Creates a figure with no traces.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    /// Appends a trace, drawn above the previous ones.
    #[must_use]
    pub fn add_trace(mut self, trace: impl Into<Trace>) -> Self {
        self.data.push(trace.into());
        self
    }
}

/// A single trace, tagged with its Plotly.js `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Contour(Contour),
    Scatter(Scatter),
    Surface(Surface),
    Scatter3d(Scatter3d),
}

/// Filled contour over a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contour {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub colorscale: String,
    pub contours: ContourLines,
    pub showscale: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContourLines {
    pub showlines: bool,
}

/// 3D surface over a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surface {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub colorscale: String,
    pub opacity: f64,
}

/// Points in the plane, optionally connected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: Mode,
    pub marker: Marker,
    pub line: Line,
    pub name: String,
}

/// Points in space, optionally connected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter3d {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub mode: Mode,
    pub marker: Marker,
    pub line: Line,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    #[serde(rename = "markers+lines")]
    MarkersAndLines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
    pub size: f64,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

macro_rules! impl_into_trace {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Trace {
                fn from(trace: $variant) -> Self {
                    Trace::$variant(trace)
                }
            }
        )*
    };
}

impl_into_trace!(Contour, Scatter, Surface, Scatter3d);

/// Figure layout: title, axes or 3D scene, size, and theme colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    pub height: u32,
    pub margin: Margin,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
}

impl Layout {
    /// Creates a themed layout with a centered title and no axes.
    #[must_use]
    pub fn new(title: impl Into<String>, theme: &Theme) -> Self {
        Self {
            title: Title {
                text: title.into(),
                x: 0.5,
            },
            xaxis: None,
            yaxis: None,
            scene: None,
            height: 450,
            margin: Margin::uniform(50),
            paper_bgcolor: theme.paper.clone(),
            plot_bgcolor: theme.plot.clone(),
            font: Font {
                color: theme.text.clone(),
            },
        }
    }

    /// Sets the 2D axes.
    #[must_use]
    pub fn axes(mut self, x: Axis, y: Axis) -> Self {
        self.xaxis = Some(x);
        self.yaxis = Some(y);
        self
    }

    /// Sets the 3D scene.
    #[must_use]
    pub fn scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Sets the figure height in pixels.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    pub showgrid: bool,
    pub zeroline: bool,
    pub gridcolor: String,
    pub zerolinecolor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub bgcolor: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Margin {
    #[must_use]
    pub const fn uniform(px: u32) -> Self {
        Self {
            l: px,
            r: px,
            t: px,
            b: px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Font {
    pub color: String,
}

/// Colors shared by every part of a figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub paper: String,
    pub plot: String,
    pub text: String,
    pub grid: String,
}

impl Theme {
    /// The dark theme used by the dashboard.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            paper: "rgb(17,17,17)".to_owned(),
            plot: "rgb(17,17,17)".to_owned(),
            text: "#f2f5fa".to_owned(),
            grid: "#283442".to_owned(),
        }
    }

    /// A gridded axis with a zero line, colored for this theme.
    #[must_use]
    pub fn axis(&self, title: impl Into<String>) -> Axis {
        Axis {
            title: AxisTitle { text: title.into() },
            showgrid: true,
            zeroline: true,
            gridcolor: self.grid.clone(),
            zerolinecolor: self.grid.clone(),
        }
    }

    /// A 3D scene with the given axis titles.
    #[must_use]
    pub fn scene(&self, x: &str, y: &str, z: &str) -> Scene {
        Scene {
            xaxis: self.axis(x),
            yaxis: self.axis(y),
            zaxis: self.axis(z),
            bgcolor: self.plot.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
