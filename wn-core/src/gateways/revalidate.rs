use wn_entities::id::Id;

/// Logical identifier of a cached, server-rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleView {
    Map,
    Dashboard,
    AdminPlaces,
    Place(Id),
}

/// Signals that the rendered output of the given views must be recomputed
/// on next access.
///
/// Fire-and-forget: a failed revalidation is not a workflow failure.
pub trait RevalidationGateway {
    fn views_changed(&self, views: &[StaleView]);
}
