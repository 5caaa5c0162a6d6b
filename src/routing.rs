//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{MethodRouter, get},
};

use crate::{
    AppState, Error, endpoints,
    endpoints::find_shadowed_route,
    logging::logging_middleware,
    summary::get_summary_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let routes = route_table();

    let paths = routes.iter().map(|(path, _)| *path).collect::<Vec<_>>();
    if let Some((earlier, shadowed)) = find_shadowed_route(&paths) {
        tracing::warn!("The route {shadowed} is registered after {earlier}, which captures it");
    }

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router.route(path, method_router)
        })
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The app's routes in the order they are registered.
///
/// Literal routes must come before parameterised routes with the same prefix,
/// see [find_shadowed_route].
fn route_table() -> Vec<(&'static str, MethodRouter<AppState>)> {
    vec![
        (
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        ),
        (endpoints::TRANSACTION_SUMMARY, get(get_summary_endpoint)),
        (
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        ),
    ]
}

async fn get_404_not_found() -> Error {
    Error::NotFound
}
