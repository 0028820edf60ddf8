//! Route registration.
//!
//! # Responsibilities
//! - Parse templates into branches and store them by route name
//! - Assign names to anonymous routes
//! - Record which HTTP methods each route was registered for
//! - Freeze the result into a route table for the generator
//!
//! # Design Decisions
//! - Anonymous names use a per-collector counter, never process-wide state
//! - Re-registering a name overwrites the previous route (logged)
//! - Methods are normalized to upper case; no further validation

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::schema::RouteConfig;
use crate::routing::branch::RouteEntry;
use crate::routing::parser::{ParseError, RouteParser, StdParser};
use crate::routing::table::RouteTable;

/// Prefix for names assigned to routes registered without one.
pub const ANONYMOUS_ROUTE_PREFIX: &str = "__route__";

/// Collects routes into a [`RouteTable`].
#[derive(Debug)]
pub struct RouteCollector<P: RouteParser = StdParser> {
    parser: P,
    parsed_routes: RouteTable,
    methods: HashMap<String, Vec<String>>,
    next_anon_route: usize,
}

impl RouteCollector<StdParser> {
    pub fn new() -> Self {
        Self::with_parser(StdParser::new())
    }

    /// Register every configured route, in file order.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, ParseError> {
        let mut collector = Self::new();
        for route in routes {
            collector.add_route(route.methods.as_slice(), &route.pattern, route.name.as_deref())?;
        }
        tracing::info!(routes = collector.parsed_routes.len(), "Routes registered from config");
        Ok(collector)
    }
}

impl Default for RouteCollector<StdParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RouteParser> RouteCollector<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            parsed_routes: RouteTable::new(),
            methods: HashMap::new(),
            next_anon_route: 0,
        }
    }

    /// Add a route for one or more HTTP methods.
    ///
    /// Returns the name the route was stored under: `name` when given and
    /// non-empty, otherwise a generated `__route__<n>`.
    pub fn add_route<M: AsRef<str>>(
        &mut self,
        methods: &[M],
        template: &str,
        name: Option<&str>,
    ) -> Result<String, ParseError> {
        let branches = self.parser.parse(template)?;
        let entry = RouteEntry::new(branches).map_err(|_| ParseError::NoBranches {
            template: template.to_string(),
        })?;

        let name = match name.filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => {
                let name = format!("{ANONYMOUS_ROUTE_PREFIX}{}", self.next_anon_route);
                self.next_anon_route += 1;
                name
            }
        };

        tracing::debug!(
            route = %name,
            template,
            branches = entry.len(),
            "Route registered"
        );

        if self.parsed_routes.insert(name.clone(), entry).is_some() {
            tracing::warn!(route = %name, template, "Route name already registered, overwriting");
        }

        let methods = methods
            .iter()
            .map(|m| m.as_ref().to_ascii_uppercase())
            .collect();
        self.methods.insert(name.clone(), methods);

        Ok(name)
    }

    pub fn get(&mut self, template: &str, name: Option<&str>) -> Result<String, ParseError> {
        self.add_route(&["GET"], template, name)
    }

    pub fn post(&mut self, template: &str, name: Option<&str>) -> Result<String, ParseError> {
        self.add_route(&["POST"], template, name)
    }

    pub fn put(&mut self, template: &str, name: Option<&str>) -> Result<String, ParseError> {
        self.add_route(&["PUT"], template, name)
    }

    pub fn delete(&mut self, template: &str, name: Option<&str>) -> Result<String, ParseError> {
        self.add_route(&["DELETE"], template, name)
    }

    pub fn patch(&mut self, template: &str, name: Option<&str>) -> Result<String, ParseError> {
        self.add_route(&["PATCH"], template, name)
    }

    pub fn head(&mut self, template: &str, name: Option<&str>) -> Result<String, ParseError> {
        self.add_route(&["HEAD"], template, name)
    }

    /// The routes collected so far.
    pub fn parsed_routes(&self) -> &RouteTable {
        &self.parsed_routes
    }

    /// Methods the route was last registered for.
    pub fn methods_for(&self, name: &str) -> Option<&[String]> {
        self.methods.get(name).map(Vec::as_slice)
    }

    /// Freeze the collected routes for sharing with generators.
    pub fn into_table(self) -> Arc<RouteTable> {
        Arc::new(self.parsed_routes)
    }
}
