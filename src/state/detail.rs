/// Detail/edit dialog state
///
/// One slot, opened per product id. The fetch outcome is tracked
/// separately from the view/edit mode so the dialog can distinguish
/// "still loading", "fetch failed" and "loaded". Editing binds a local
/// draft seeded from the fetched record; cancelling restores it.

use super::product::{DraftForm, Product, ProductPatch};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailFetch {
    Loading,
    Failed(String),
    Loaded(Product),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    Viewing,
    Editing,
}

#[derive(Debug)]
pub struct DetailView {
    pub id: u64,
    pub fetch: DetailFetch,
    pub mode: DetailMode,
    pub form: DraftForm,
}

impl DetailView {
    /// Open the dialog for a product; the record is still on its way
    pub fn loading(id: u64) -> Self {
        Self {
            id,
            fetch: DetailFetch::Loading,
            mode: DetailMode::Viewing,
            form: DraftForm::default(),
        }
    }

    /// Apply the fetch outcome. Seeds the form on success so switching
    /// to edit mode starts from the record as fetched.
    pub fn resolve(&mut self, result: Result<Product, String>) {
        match result {
            Ok(product) => {
                self.form = DraftForm::from_product(&product);
                self.fetch = DetailFetch::Loaded(product);
            }
            Err(message) => self.fetch = DetailFetch::Failed(message),
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match &self.fetch {
            DetailFetch::Loaded(product) => Some(product),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == DetailMode::Editing
    }

    /// Switch to edit mode, reseeding the draft from the current record
    pub fn begin_edit(&mut self) {
        if let DetailFetch::Loaded(product) = &self.fetch {
            self.form = DraftForm::from_product(product);
            self.mode = DetailMode::Editing;
        }
    }

    /// Discard unsaved changes and return to viewing
    pub fn cancel_edit(&mut self) {
        if let DetailFetch::Loaded(product) = &self.fetch {
            self.form = DraftForm::from_product(product);
        }
        self.mode = DetailMode::Viewing;
    }

    /// Merge a successful update into the record, refresh the draft and
    /// drop back to viewing
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let DetailFetch::Loaded(product) = &mut self.fetch {
            patch.merge_into(product);
            self.form = DraftForm::from_product(product);
        }
        self.mode = DetailMode::Viewing;
    }

    /// Save precondition: record loaded and the draft passes validation
    pub fn can_save(&self) -> bool {
        self.product().is_some() && self.form.is_valid()
    }
}
