use wn_core::gateways::revalidate::{RevalidationGateway, StaleView};

fn view_path(view: &StaleView) -> String {
    match view {
        StaleView::Map => "/".into(),
        StaleView::Dashboard => "/dashboard".into(),
        StaleView::AdminPlaces => "/admin".into(),
        StaleView::Place(id) => format!("/places/{id}"),
    }
}

/// Asks the frontend to recompute the cached output of the given views.
pub struct WebhookRevalidation {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl WebhookRevalidation {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl RevalidationGateway for WebhookRevalidation {
    fn views_changed(&self, views: &[StaleView]) {
        let paths: Vec<String> = views.iter().map(view_path).collect();
        log::debug!("Requesting revalidation of {paths:?}");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "paths": paths }))
            .send();
        match response {
            Ok(response) if !response.status().is_success() => {
                log::warn!(
                    "Revalidation request failed with status {}",
                    response.status()
                );
            }
            Ok(_) => (),
            Err(err) => {
                log::warn!("Could not request revalidation: {err}");
            }
        }
    }
}

/// Used when no frontend webhook is configured.
#[derive(Debug, Default)]
pub struct NoRevalidation;

impl RevalidationGateway for NoRevalidation {
    fn views_changed(&self, views: &[StaleView]) {
        log::debug!("No revalidation endpoint configured, skipping {} views", views.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_paths() {
        assert_eq!("/", view_path(&StaleView::Map));
        assert_eq!("/dashboard", view_path(&StaleView::Dashboard));
        assert_eq!("/admin", view_path(&StaleView::AdminPlaces));
        assert_eq!("/places/p1", view_path(&StaleView::Place("p1".into())));
    }
}
