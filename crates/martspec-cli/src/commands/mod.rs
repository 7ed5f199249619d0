//! Command handlers grouped by concern.

pub(crate) mod languages;
pub(crate) mod render;
pub(crate) mod sitemap;
