use pathview_core::{Grid, Objective, PlanarPath};
use tracing::warn;

use crate::figure::{
    Contour, ContourLines, Figure, Layout, Line, Marker, Mode, Scatter, Scatter3d, Surface, Theme,
};

const PATH_NAME: &str = "Optimization Path";
const COLORSCALE: &str = "Viridis";
const MARKER_COLOR: &str = "red";
const LINE_COLOR: &str = "blue";

/// Builds a filled contour of the sampled objective with the path on top.
#[must_use]
pub fn contour_figure(
    objective: Objective,
    grid: &Grid,
    path: &PlanarPath,
    theme: &Theme,
) -> Figure {
    let layout = Layout::new(format!("2D Contour Plot of {objective} Function"), theme)
        .axes(theme.axis("X"), theme.axis("Y"))
        .height(600);

    let contour = Contour {
        x: grid.x.clone(),
        y: grid.y.clone(),
        z: grid.z.clone(),
        colorscale: COLORSCALE.to_owned(),
        contours: ContourLines { showlines: false },
        showscale: true,
    };

    let overlay = Scatter {
        x: path.x.clone(),
        y: path.y.clone(),
        mode: Mode::MarkersAndLines,
        marker: path_marker(8.0),
        line: path_line(2.0),
        name: PATH_NAME.to_owned(),
    };

    Figure::new(layout).add_trace(contour).add_trace(overlay)
}

/// Builds a 3D surface of the sampled objective with the path on top.
///
/// The path's planar position is lifted to the logged objective values. If
/// the two differ in length, points are paired by index up to the shorter.
#[must_use]
pub fn surface_figure(
    objective: Objective,
    grid: &Grid,
    path: &PlanarPath,
    objective_values: &[f64],
    theme: &Theme,
) -> Figure {
    let layout = Layout::new(format!("3D Surface Plot of {objective} Function"), theme)
        .scene(theme.scene("X", "Y", "Objective Function Value"))
        .height(700);

    let surface = Surface {
        x: grid.x.clone(),
        y: grid.y.clone(),
        z: grid.z.clone(),
        colorscale: COLORSCALE.to_owned(),
        opacity: 0.8,
    };

    let n = path.len().min(objective_values.len());
    if n != path.len() || n != objective_values.len() {
        warn!(
            points = path.len(),
            values = objective_values.len(),
            "path and objective values differ in length, pairing the first {n}"
        );
    }

    let overlay = Scatter3d {
        x: path.x[..n].to_vec(),
        y: path.y[..n].to_vec(),
        z: objective_values[..n].to_vec(),
        mode: Mode::MarkersAndLines,
        marker: path_marker(4.0),
        line: path_line(5.0),
        name: PATH_NAME.to_owned(),
    };

    Figure::new(layout).add_trace(surface).add_trace(overlay)
}

fn path_marker(size: f64) -> Marker {
    Marker {
        color: MARKER_COLOR.to_owned(),
        size,
        symbol: "x".to_owned(),
    }
}

fn path_line(width: f64) -> Line {
    Line {
        color: LINE_COLOR.to_owned(),
        width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Value, json};

    use crate::Trace;

    fn path() -> PlanarPath {
        PlanarPath {
            x: vec![1.0, 0.0],
            y: vec![1.0, 0.0],
        }
    }

    #[test]
    fn contour_has_grid_and_overlay() {
        let grid = Grid::sample(Objective::Rosenbrock, 10);

        let figure = contour_figure(Objective::Rosenbrock, &grid, &path(), &Theme::dark());

        assert_eq!(figure.layout.title.text, "2D Contour Plot of Rosenbrock Function");
        assert_eq!(figure.data.len(), 2);

        let Trace::Contour(contour) = &figure.data[0] else {
            panic!("expected a contour trace first");
        };
        assert_eq!(contour.z, grid.z);
        assert!(!contour.contours.showlines);

        let Trace::Scatter(overlay) = &figure.data[1] else {
            panic!("expected a scatter overlay");
        };
        assert_eq!(overlay.x, vec![1.0, 0.0]);
        assert_eq!(overlay.y, vec![1.0, 0.0]);
        assert_eq!(overlay.mode, Mode::MarkersAndLines);
        assert_eq!(overlay.marker.color, "red");
    }

    #[test]
    fn surface_overlay_uses_logged_values_as_height() {
        let grid = Grid::sample(Objective::Rosenbrock, 10);

        let figure = surface_figure(
            Objective::Rosenbrock,
            &grid,
            &path(),
            &[0.0, 2.0],
            &Theme::dark(),
        );

        let Trace::Scatter3d(overlay) = &figure.data[1] else {
            panic!("expected a 3D scatter overlay");
        };
        assert_eq!(overlay.x, vec![1.0, 0.0]);
        assert_eq!(overlay.y, vec![1.0, 0.0]);
        assert_eq!(overlay.z, vec![0.0, 2.0]);
        assert!(figure.layout.scene.is_some());
        assert!(figure.layout.xaxis.is_none());
    }

    #[test]
    fn surface_overlay_pairs_up_to_shorter_length() {
        let grid = Grid::sample(Objective::Quadratic, 4);

        let figure = surface_figure(
            Objective::Quadratic,
            &grid,
            &path(),
            &[5.0],
            &Theme::dark(),
        );

        let Trace::Scatter3d(overlay) = &figure.data[1] else {
            panic!("expected a 3D scatter overlay");
        };
        assert_eq!(overlay.x, vec![1.0]);
        assert_eq!(overlay.z, vec![5.0]);
    }

    #[test]
    fn serializes_to_plotly_schema() {
        let grid = Grid::sample(Objective::Quadratic, 3);

        let figure = contour_figure(Objective::Quadratic, &grid, &path(), &Theme::dark());
        let value: Value = serde_json::to_value(&figure).unwrap();

        assert_eq!(value["data"][0]["type"], "contour");
        assert_eq!(value["data"][0]["contours"], json!({ "showlines": false }));
        assert_eq!(value["data"][1]["type"], "scatter");
        assert_eq!(value["data"][1]["mode"], "markers+lines");
        assert_eq!(value["layout"]["title"]["x"], 0.5);
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "X");
        assert!(value["layout"].get("scene").is_none());
    }

    #[test]
    fn surface_serializes_scene() {
        let grid = Grid::sample(Objective::Ackley, 3);

        let figure = surface_figure(
            Objective::Ackley,
            &grid,
            &path(),
            &[0.0, 1.0],
            &Theme::dark(),
        );
        let value: Value = serde_json::to_value(&figure).unwrap();

        assert_eq!(value["data"][0]["type"], "surface");
        assert_eq!(value["data"][1]["type"], "scatter3d");
        assert_eq!(
            value["layout"]["scene"]["zaxis"]["title"]["text"],
            "Objective Function Value"
        );
        assert_eq!(value["layout"]["height"], 700);
    }
}
