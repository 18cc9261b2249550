use super::health;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Router fragment for the system endpoints (currently just the health
/// probe); feature slices merge their own fragments next to this one.
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
