//! Shared route fixtures for integration tests.

use std::sync::Arc;

use reverse_router::routing::{RouteCollector, RouteTable};

/// The routes every generation test runs against.
pub fn populate_routes(collector: &mut RouteCollector) {
    collector.get("/users", Some("users")).unwrap();
    // {id} must be a number
    collector.get("/user/{id:\\d+}", Some("user")).unwrap();
    // the /{title} suffix is optional
    collector
        .get("/articles/{id:\\d+}[/{title}]", Some("article"))
        .unwrap();
    collector
        .get("/fixedRoutePart/{varName}[/moreFixed/{varName2:\\d+}]", Some("fixed"))
        .unwrap();
    collector
        .get("/widget/{var1}/{var2}/bar", Some("widget"))
        .unwrap();
}

/// Frozen table built from [`populate_routes`].
pub fn route_table() -> Arc<RouteTable> {
    let mut collector = RouteCollector::new();
    populate_routes(&mut collector);
    collector.into_table()
}
