use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use tracing::info;
use warp::{Filter, Rejection, Reply};

use crate::{Dashboard, Error};

/// The rendered page and figures, shared read-only across requests.
#[derive(Debug)]
struct Rendered {
    html: String,
    figures: HashMap<String, String>,
}

impl Rendered {
    fn new(dashboard: &Dashboard) -> Result<Self, Error> {
        let html = dashboard.render_html()?;
        let mut figures = HashMap::with_capacity(dashboard.panels.len());
        for panel in &dashboard.panels {
            figures.insert(panel.graph_id.clone(), serde_json::to_string(&panel.figure)?);
        }

        Ok(Self { html, figures })
    }
}

/// Serves a [`Dashboard`] over HTTP.
///
/// The server provides:
/// - `GET /` with the rendered page
/// - `GET /figures/<graph-id>` with one figure as Plotly.js JSON
#[derive(Debug)]
pub struct DashboardServer {
    rendered: Arc<Rendered>,
    addr: SocketAddr,
}

impl DashboardServer {
    /// Renders `dashboard` up front so serving cannot fail per request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a figure cannot be serialized.
    pub fn new(dashboard: &Dashboard, addr: SocketAddr) -> Result<Self, Error> {
        Ok(Self {
            rendered: Arc::new(Rendered::new(dashboard)?),
            addr,
        })
    }

    /// The request routes, usable without binding a socket.
    pub fn routes(self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        let page = Arc::clone(&self.rendered);
        let index = warp::path::end()
            .and(warp::get())
            .map(move || warp::reply::html(page.html.clone()));

        let rendered = self.rendered;
        let figure = warp::path!("figures" / String)
            .and(warp::get())
            .and_then(move |graph_id: String| {
                let rendered = Arc::clone(&rendered);
                async move {
                    rendered
                        .figures
                        .get(&graph_id)
                        .cloned()
                        .map(|json| {
                            warp::reply::with_header(json, "content-type", "application/json")
                        })
                        .ok_or_else(warp::reject::not_found)
                }
            });

        index.or(figure)
    }

    /// Serves until Ctrl-C is received.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] if the address cannot be bound.
    pub async fn run(self) -> Result<(), Error> {
        let addr = self.addr;
        let routes = self.routes();

        let (addr, server) = warp::serve(routes).try_bind_with_graceful_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
        })?;

        info!("dashboard running on http://{addr}");
        server.await;
        info!("dashboard stopped");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pathview_core::TrajectoryLog;
    use warp::http::StatusCode;

    use crate::{CONTOUR_GRAPH_ID, SURFACE_GRAPH_ID};

    fn server() -> DashboardServer {
        let log = TrajectoryLog::parse(
            "Objective Function: Quadratic\n\
             x-values: 3.0 4.0\n\
             Objective Function Value: 25.0\n\
             x-values: 0.0 0.0\n\
             Objective Function Value: 0.0\n",
        )
        .unwrap();
        let dashboard = Dashboard::from_log(&log).unwrap();

        DashboardServer::new(&dashboard, ([127, 0, 0, 1], 0).into()).unwrap()
    }

    #[tokio::test]
    async fn serves_page() {
        let routes = server().routes();

        let response = warp::test::request().path("/").reply(&routes).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert!(body.contains(CONTOUR_GRAPH_ID));
        assert!(body.contains(SURFACE_GRAPH_ID));
    }

    #[tokio::test]
    async fn serves_figure_json() {
        let routes = server().routes();

        let response = warp::test::request()
            .path("/figures/2d-contour-graph")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        let figure: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(figure["data"][1]["x"], serde_json::json!([3.0, 0.0]));
    }

    #[tokio::test]
    async fn unknown_figure_is_not_found() {
        let routes = server().routes();

        let response = warp::test::request()
            .path("/figures/elsewhere")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rejects_other_methods() {
        let routes = server().routes();

        let response = warp::test::request()
            .method("POST")
            .path("/")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
