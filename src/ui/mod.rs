/// Widget builders
///
/// Presentation only; every piece of business logic lives in `state`.
/// - Modal overlay and dialog chrome (modal.rs)
/// - Product form fields (form.rs)
/// - Card grid and pagination bar (grid.rs)
/// - Confirm and alert dialogs (dialogs.rs)

pub mod dialogs;
pub mod form;
pub mod grid;
pub mod modal;
