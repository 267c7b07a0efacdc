//! Korean public-support domain: categories, content catalog, text rules
//! and the REST surface over the tool registry.

pub mod analysis;
pub mod catalog;
pub mod model;
pub mod region;
pub mod routes;
