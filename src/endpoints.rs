//! The API endpoints URIs.
//!
//! Routes with a parameter are written in axum's `{parameter}` syntax, e.g.
//! '/transactions/{transaction_id}'.

/// The route to create and list transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for the totals of income and expenses.
pub const TRANSACTION_SUMMARY: &str = "/transactions/summary";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Only the first parameter is replaced. Paths without a parameter are
/// returned unchanged.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{}{}",
            &endpoint_path[..start],
            id,
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_owned(),
    }
}

/// Find the first route in `routes` that an earlier route would capture.
///
/// Routes are checked in registration order. A route is shadowed when an
/// earlier route has the same number of segments and, segment by segment,
/// either matches it literally or has a path parameter (e.g.
/// `{transaction_id}`) where the later route has a literal. For example,
/// registering `/transactions/{transaction_id}` before
/// `/transactions/summary` would make the summary reachable only as a
/// transaction ID.
///
/// Returns the pair `(earlier_route, shadowed_route)`, or `None` if every
/// route is reachable.
pub fn find_shadowed_route<'a>(routes: &[&'a str]) -> Option<(&'a str, &'a str)> {
    routes.iter().enumerate().find_map(|(index, route)| {
        routes[..index]
            .iter()
            .find(|earlier| captures(earlier, route))
            .map(|earlier| (*earlier, *route))
    })
}

fn is_parameter(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// Whether every path `route` matches is also matched by `earlier`.
fn captures(earlier: &str, route: &str) -> bool {
    let earlier_segments = earlier.split('/').collect::<Vec<_>>();
    let segments = route.split('/').collect::<Vec<_>>();

    earlier != route
        && earlier_segments.len() == segments.len()
        && earlier_segments
            .iter()
            .zip(&segments)
            .all(|(earlier, segment)| is_parameter(earlier) || earlier == segment)
}
