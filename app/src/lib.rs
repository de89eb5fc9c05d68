#![recursion_limit = "512"]
//! Instructions page for selected participants of MEDHA'26.
//!
//! Everything on the page is static text except the route map, which lets
//! the visitor switch between two driving routes to the venue.

pub mod components;
pub mod components_impl;
pub mod content;
pub mod route_selector;
