use std::{fmt::Write as _, fs, path::Path};

use pathview_core::{Grid, Outcome, TrajectoryLog};
use pathview_plot::{Figure, Theme, contour_figure, surface_figure};
use tracing::{debug, info};

use crate::Error;

/// Element id of the contour graph.
pub const CONTOUR_GRAPH_ID: &str = "2d-contour-graph";

/// Element id of the surface graph.
pub const SURFACE_GRAPH_ID: &str = "3d-surface-graph";

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// A page of figures with headings, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub title: String,
    pub subtitle: String,
    pub panels: Vec<Panel>,
}

/// One headed figure on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub heading: String,
    pub graph_id: String,
    pub figure: Figure,
}

impl Dashboard {
    /// Builds the contour and surface figures for a parsed log.
    ///
    /// # Errors
    ///
    /// Returns an error if the log names no supported objective, or if its
    /// trajectory is empty or has steps with fewer than two components.
    pub fn from_log(log: &TrajectoryLog) -> Result<Self, Error> {
        let objective = log.objective()?;
        info!(%objective, steps = log.len(), "resolved objective function");

        let path = log.planar_path()?;

        let grid = Grid::sample(objective, Grid::RESOLUTION);
        debug!(
            resolution = Grid::RESOLUTION,
            z_min = ?grid.z_min(),
            z_max = ?grid.z_max(),
            "sampled objective grid"
        );

        let theme = Theme::dark();
        let contour = contour_figure(objective, &grid, &path, &theme);
        let surface = surface_figure(objective, &grid, &path, &log.objective_values, &theme);

        let [x_min, y_min] = objective.minimum();
        let mut subtitle = format!("{objective} · global minimum at ({x_min}, {y_min})");
        if let Some(algorithm) = &log.algorithm {
            let _ = write!(subtitle, " · {algorithm}");
        }
        let _ = write!(subtitle, " · {} steps", log.len());
        if let Some(value) = log.final_value() {
            let _ = write!(subtitle, " · final value {value}");
        }
        match log.outcome {
            Some(Outcome::Converged { iterations }) => {
                let _ = write!(subtitle, " · converged after {iterations} iterations");
            }
            Some(Outcome::MaxIterations) => subtitle.push_str(" · iteration limit reached"),
            None => {}
        }

        Ok(Self {
            title: "Function Optimization Visualization".to_owned(),
            subtitle,
            panels: vec![
                Panel {
                    heading: "2D Contour".to_owned(),
                    graph_id: CONTOUR_GRAPH_ID.to_owned(),
                    figure: contour,
                },
                Panel {
                    heading: "3D Surface".to_owned(),
                    graph_id: SURFACE_GRAPH_ID.to_owned(),
                    figure: surface,
                },
            ],
        })
    }

    /// Returns the figure shown under `graph_id`.
    #[must_use]
    pub fn figure(&self, graph_id: &str) -> Option<&Figure> {
        self.panels
            .iter()
            .find(|panel| panel.graph_id == graph_id)
            .map(|panel| &panel.figure)
    }

    /// Renders the page as a standalone HTML document.
    ///
    /// Plotly.js is loaded from a CDN; figures are embedded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a figure cannot be serialized.
    pub fn render_html(&self) -> Result<String, Error> {
        let mut html = String::with_capacity(64 * 1024);

        let _ = write!(
            html,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{PLOTLY_SRC}"></script>
<style>
  body {{ font-family: "Times New Roman", Times, serif; background-color: #1f1f1f;
         color: #e0e0e0; padding: 20px; margin: 0; }}
  h1 {{ text-align: center; margin-bottom: 30px; }}
  h2 {{ text-align: center; margin-bottom: 20px; }}
  .subtitle {{ text-align: center; color: #a0a0a0; margin-bottom: 30px; }}
  .panel {{ margin-bottom: 40px; }}
  .graph {{ margin: auto; width: 80%; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
"#,
            title = escape_html(&self.title),
            subtitle = escape_html(&self.subtitle),
        );

        for panel in &self.panels {
            let figure = serde_json::to_string(&panel.figure)?;
            let id = escape_html(&panel.graph_id);

            let _ = write!(
                html,
                r#"<div class="panel">
<h2>{heading}</h2>
<div id="{id}" class="graph"></div>
<script>
(function () {{
  const figure = {figure};
  Plotly.newPlot("{id}", figure.data, figure.layout, {{ responsive: true }});
}})();
</script>
</div>
"#,
                heading = escape_html(&panel.heading),
                figure = escape_script(&figure),
            );
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }

    /// Renders the page and writes it to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a figure cannot be serialized and
    /// [`Error::Export`] if the file cannot be written.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let html = self.render_html()?;

        fs::write(path, html).map_err(|source| Error::Export {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "wrote dashboard page");
        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Keeps embedded JSON from closing the surrounding `<script>` element.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    use pathview_core::{PathError, ResolveError};
    use pathview_plot::Trace;

    fn rosenbrock_log() -> TrajectoryLog {
        TrajectoryLog::parse(
            "Objective Function: Rosenbrock\n\
             Algorithm: Steepest Descent\n\
             Objective Function Value: 0.0\n\
             x-values: 1.0 1.0\n\
             Objective Function Value: 2.0\n\
             x-values: 0.0 0.0\n\
             Maximum iterations reached without satisfying the tolerance.\n",
        )
        .unwrap()
    }

    #[test]
    fn builds_both_panels() {
        let dashboard = Dashboard::from_log(&rosenbrock_log()).unwrap();

        let ids: Vec<_> = dashboard.panels.iter().map(|p| p.graph_id.as_str()).collect();
        assert_eq!(ids, [CONTOUR_GRAPH_ID, SURFACE_GRAPH_ID]);
        assert_eq!(dashboard.panels[0].heading, "2D Contour");
        assert_eq!(dashboard.panels[1].heading, "3D Surface");

        let surface = dashboard.figure(SURFACE_GRAPH_ID).unwrap();
        let Trace::Scatter3d(overlay) = &surface.data[1] else {
            panic!("expected a 3D scatter overlay");
        };
        assert_eq!(overlay.z, vec![0.0, 2.0]);
        assert!(dashboard.figure("nope").is_none());
    }

    #[test]
    fn subtitle_summarizes_the_run() {
        let dashboard = Dashboard::from_log(&rosenbrock_log()).unwrap();

        assert_eq!(
            dashboard.subtitle,
            "Rosenbrock · global minimum at (1, 1) · Steepest Descent · 2 steps \
             · final value 2 · iteration limit reached"
        );
    }

    #[test]
    fn unknown_function_aborts() {
        let log = TrajectoryLog::parse("Objective Function: Foo\nx-values: 1 2\n").unwrap();

        let err = Dashboard::from_log(&log).unwrap_err();

        assert!(matches!(err, Error::Resolve(ResolveError::Unknown(_))));
        assert!(err.to_string().contains("Foo"));
    }

    #[test]
    fn empty_trajectory_aborts() {
        let log = TrajectoryLog::parse("Objective Function: Quadratic\n").unwrap();

        let err = Dashboard::from_log(&log).unwrap_err();

        assert!(matches!(err, Error::Path(PathError::Empty)));
    }

    #[test]
    fn renders_graph_containers_in_order() {
        let html = Dashboard::from_log(&rosenbrock_log())
            .unwrap()
            .render_html()
            .unwrap();

        let contour = html.find(r#"id="2d-contour-graph""#).unwrap();
        let surface = html.find(r#"id="3d-surface-graph""#).unwrap();
        assert!(contour < surface);
        assert!(html.contains("<h1>Function Optimization Visualization</h1>"));
        assert!(html.contains(PLOTLY_SRC));
        assert!(html.contains(r#""type":"scatter3d""#));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
        assert_eq!(escape_script(r#"{"t":"</script>"}"#), r#"{"t":"<\/script>"}"#);
    }

    #[test]
    fn export_writes_rendered_page() {
        let dashboard = Dashboard::from_log(&rosenbrock_log()).unwrap();
        let path = std::env::temp_dir().join(format!("pathview-export-{}.html", std::process::id()));

        dashboard.export(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(written, dashboard.render_html().unwrap());
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dashboard = Dashboard::from_log(&rosenbrock_log()).unwrap();
        let path = std::env::temp_dir()
            .join(format!("pathview-missing-{}", std::process::id()))
            .join("page.html");

        let err = dashboard.export(&path).unwrap_err();

        assert!(matches!(err, Error::Export { path: p, .. } if p == path));
    }
}
