//! Static mock data backing the marketplace and dashboards.

pub mod templates;
