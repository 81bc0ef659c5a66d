/// State management module
///
/// This module handles all non-presentational application state:
/// - Product data model and form drafts (product.rs)
/// - Search filter and client-side pagination (query.rs)
/// - The single list view-state store (catalog.rs)
/// - The detail/edit dialog state machine (detail.rs)
/// - Confirmation and alert dialog descriptors (dialog.rs)

pub mod catalog;
pub mod detail;
pub mod dialog;
pub mod product;
pub mod query;
