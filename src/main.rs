use std::collections::HashMap;
use std::time::Duration;

use iced::widget::{
    button, column, container, horizontal_space, image, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Alignment, Element, Length, Task, Theme};

mod api;
mod state;
mod ui;

use api::{ApiClient, ApiError};
use state::catalog::{Catalog, PAGE_SIZES};
use state::detail::{DetailFetch, DetailView};
use state::dialog::{AlertKind, AlertState, ConfirmState, PendingAction};
use state::product::{DraftEvent, DraftForm, Product, ProductPatch};

/// How long success/info alerts stay up before closing themselves
const ALERT_AUTO_CLOSE: Duration = Duration::from_millis(3500);

/// Shown inside the detail dialog when the record fetch fails
const DETAIL_UNAVAILABLE: &str = "Informasi produk tidak tersedia karena data ini tidak \
     sebenarnya masuk ke database fakestoreapi, silahkan pilih detail produk lainnya.";

/// Main application state
struct Katalog {
    /// Remote collection adapter
    api: ApiClient,
    /// The single list view-state store
    catalog: Catalog,
    /// Detail/edit dialog, when open
    detail: Option<DetailView>,
    /// Add-product modal form, when open
    add_form: Option<DraftForm>,
    confirm: ConfirmState,
    alert: AlertState,
    /// Single-permit guard: true while a mutating request is in flight.
    /// All mutating entry points are disabled while set; reads are not.
    busy: bool,
    /// Downloaded product images, keyed by product id
    thumbnails: HashMap<u64, image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    ProductsLoaded(Result<Vec<Product>, ApiError>),
    QueryChanged(String),
    PageSizePicked(usize),
    PageSelected(usize),
    PrevPage,
    NextPage,
    OpenAdd,
    CloseAdd,
    AddForm(DraftEvent),
    SubmitAdd,
    OpenDetail(u64),
    DetailLoaded(u64, Result<Product, ApiError>),
    CloseDetail,
    StartEdit,
    CancelEdit,
    DetailForm(DraftEvent),
    SubmitEdit,
    RequestDelete,
    ConfirmAccepted,
    ConfirmCancelled,
    CreateFinished(Result<Product, ApiError>),
    UpdateFinished(u64, Result<ProductPatch, ApiError>),
    DeleteFinished(u64, Result<(), ApiError>),
    AlertDismissed,
    AlertExpired(u64),
    ThumbnailFetched(u64, Result<Vec<u8>, ApiError>),
}

impl Katalog {
    /// Create the application and kick off the initial list fetch
    fn new() -> (Self, Task<Message>) {
        let api = ApiClient::new();
        println!("🛒 Katalog Produk dimulai, sumber data: {}", api::client::BASE_URL);

        let fetch = Task::perform(
            {
                let api = api.clone();
                async move { api.fetch_all().await }
            },
            Message::ProductsLoaded,
        );

        (
            Katalog {
                api,
                catalog: Catalog::new(),
                detail: None,
                add_form: None,
                confirm: ConfirmState::default(),
                alert: AlertState::default(),
                busy: false,
                thumbnails: HashMap::new(),
            },
            fetch,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProductsLoaded(Ok(products)) => {
                println!("✅ {} produk dimuat", products.len());
                let thumbs: Vec<Task<Message>> = products
                    .iter()
                    .map(|p| self.fetch_thumbnail(p.id, p.image.clone()))
                    .collect();
                self.catalog.set_products(products);
                Task::batch(thumbs)
            }
            Message::ProductsLoaded(Err(error)) => {
                eprintln!("⚠️  Gagal memuat daftar produk: {error}");
                self.catalog.set_error(error.to_string());
                Task::none()
            }

            Message::QueryChanged(query) => {
                self.catalog.set_query(query);
                Task::none()
            }
            Message::PageSizePicked(size) => {
                self.catalog.set_page_size(size);
                Task::none()
            }
            Message::PageSelected(page) => {
                self.catalog.go_to_page(page);
                Task::none()
            }
            Message::PrevPage => {
                self.catalog.prev_page();
                Task::none()
            }
            Message::NextPage => {
                self.catalog.next_page();
                Task::none()
            }

            Message::OpenAdd => {
                if !self.busy {
                    self.add_form = Some(DraftForm::default());
                }
                Task::none()
            }
            Message::CloseAdd => {
                if !self.busy {
                    self.add_form = None;
                }
                Task::none()
            }
            Message::AddForm(event) => {
                if let Some(form) = &mut self.add_form {
                    form.apply(event);
                }
                Task::none()
            }
            Message::SubmitAdd => {
                if !self.busy {
                    if let Some(draft) = self.add_form.as_ref().and_then(|f| f.to_draft()) {
                        self.confirm.open(
                            "Simpan Produk",
                            format!("Yakin simpan produk baru: {}?", draft.title),
                            false,
                            PendingAction::Create(draft),
                        );
                    }
                }
                Task::none()
            }

            // Detail fetches are reads and are not gated by the busy flag
            Message::OpenDetail(id) => {
                self.detail = Some(DetailView::loading(id));
                let api = self.api.clone();
                Task::perform(
                    async move { (id, api.fetch_one(id).await) },
                    |(id, result)| Message::DetailLoaded(id, result),
                )
            }
            Message::DetailLoaded(id, result) => {
                // A late response for a dialog that was replaced is dropped
                if !self.detail.as_ref().is_some_and(|d| d.id == id) {
                    return Task::none();
                }
                let thumb = match &result {
                    Ok(product) => self.fetch_thumbnail(product.id, product.image.clone()),
                    Err(_) => Task::none(),
                };
                if let Some(detail) = &mut self.detail {
                    detail.resolve(result.map_err(|e| e.to_string()));
                }
                thumb
            }
            Message::CloseDetail => {
                if !self.busy {
                    self.detail = None;
                }
                Task::none()
            }
            Message::StartEdit => {
                if !self.busy {
                    if let Some(detail) = &mut self.detail {
                        detail.begin_edit();
                    }
                }
                Task::none()
            }
            Message::CancelEdit => {
                if !self.busy {
                    if let Some(detail) = &mut self.detail {
                        detail.cancel_edit();
                    }
                }
                Task::none()
            }
            Message::DetailForm(event) => {
                if let Some(detail) = &mut self.detail {
                    if detail.is_editing() {
                        detail.form.apply(event);
                    }
                }
                Task::none()
            }
            Message::SubmitEdit => {
                if !self.busy {
                    if let Some(detail) = &self.detail {
                        if detail.can_save() {
                            if let Some(draft) = detail.form.to_draft() {
                                self.confirm.open(
                                    "Update Produk",
                                    format!("Yakin update produk #{}?", detail.id),
                                    false,
                                    PendingAction::Update(detail.id, draft),
                                );
                            }
                        }
                    }
                }
                Task::none()
            }
            Message::RequestDelete => {
                if !self.busy {
                    if let Some(detail) = &self.detail {
                        self.confirm.open(
                            "Hapus Produk",
                            format!("Produk #{} akan dihapus. Yakin?", detail.id),
                            true,
                            PendingAction::Delete(detail.id),
                        );
                    }
                }
                Task::none()
            }

            Message::ConfirmAccepted => {
                if self.busy {
                    return Task::none();
                }
                let Some(action) = self.confirm.action().cloned() else {
                    return Task::none();
                };
                self.busy = true;
                let api = self.api.clone();
                match action {
                    PendingAction::Create(draft) => Task::perform(
                        async move { api.create(&draft).await },
                        Message::CreateFinished,
                    ),
                    PendingAction::Update(id, draft) => Task::perform(
                        async move { (id, api.update(id, &draft).await) },
                        |(id, result)| Message::UpdateFinished(id, result),
                    ),
                    PendingAction::Delete(id) => Task::perform(
                        async move { (id, api.delete(id).await) },
                        |(id, result)| Message::DeleteFinished(id, result),
                    ),
                }
            }
            Message::ConfirmCancelled => {
                if !self.busy {
                    self.confirm.close();
                }
                Task::none()
            }

            Message::CreateFinished(Ok(product)) => {
                self.busy = false;
                self.confirm.close();
                self.add_form = None;
                println!("✅ Produk #{} tersimpan", product.id);
                let thumb = self.fetch_thumbnail(product.id, product.image.clone());
                self.catalog.prepend(product);
                let alert = self.show_alert(
                    "Sukses",
                    "Data berhasil disimpan".into(),
                    AlertKind::Success,
                    Some(ALERT_AUTO_CLOSE),
                );
                Task::batch([thumb, alert])
            }
            Message::CreateFinished(Err(error)) => self.mutation_failed(error),

            Message::UpdateFinished(id, Ok(patch)) => {
                self.busy = false;
                self.confirm.close();
                println!("✅ Produk #{id} diperbarui");
                // A changed image URL invalidates the cached thumbnail
                let thumb = match &patch.image {
                    Some(url) => {
                        self.thumbnails.remove(&id);
                        self.fetch_thumbnail(id, url.clone())
                    }
                    None => Task::none(),
                };
                self.catalog.apply_patch(id, &patch);
                if let Some(detail) = &mut self.detail {
                    if detail.id == id {
                        detail.apply_patch(&patch);
                    }
                }
                let alert = self.show_alert(
                    "Sukses",
                    "Data berhasil diperbarui".into(),
                    AlertKind::Info,
                    Some(ALERT_AUTO_CLOSE),
                );
                Task::batch([thumb, alert])
            }
            Message::UpdateFinished(_, Err(error)) => self.mutation_failed(error),

            Message::DeleteFinished(id, Ok(())) => {
                self.busy = false;
                self.confirm.close();
                println!("✅ Produk #{id} dihapus");
                self.catalog.remove(id);
                self.thumbnails.remove(&id);
                if self.detail.as_ref().is_some_and(|d| d.id == id) {
                    self.detail = None;
                }
                self.show_alert(
                    "Sukses",
                    "Data berhasil dihapus".into(),
                    AlertKind::Info,
                    Some(ALERT_AUTO_CLOSE),
                )
            }
            Message::DeleteFinished(_, Err(error)) => self.mutation_failed(error),

            Message::AlertDismissed => {
                self.alert.dismiss();
                Task::none()
            }
            Message::AlertExpired(generation) => {
                self.alert.expire(generation);
                Task::none()
            }

            Message::ThumbnailFetched(id, Ok(bytes)) => {
                self.thumbnails.insert(id, image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::ThumbnailFetched(id, Err(error)) => {
                // Card keeps its placeholder
                eprintln!("⚠️  Gambar produk #{id} gagal dimuat: {error}");
                Task::none()
            }
        }
    }

    /// Shared failure path for create/update/delete: the UI returns to a
    /// stable state and the triggering form stays open for a retry
    fn mutation_failed(&mut self, error: ApiError) -> Task<Message> {
        self.busy = false;
        self.confirm.close();
        eprintln!("⚠️  Operasi gagal: {error}");
        self.show_alert("Gagal", error.to_string(), AlertKind::Error, None)
    }

    /// Open (or replace) the alert and arm its auto-close timer
    fn show_alert(
        &mut self,
        title: &str,
        message: String,
        kind: AlertKind,
        auto_close: Option<Duration>,
    ) -> Task<Message> {
        let generation = self.alert.show(title, message, kind);
        match auto_close {
            Some(delay) => Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    generation
                },
                Message::AlertExpired,
            ),
            None => Task::none(),
        }
    }

    /// Download a product image unless it is already cached
    fn fetch_thumbnail(&self, id: u64, url: String) -> Task<Message> {
        if url.trim().is_empty() || self.thumbnails.contains_key(&id) {
            return Task::none();
        }
        let api = self.api.clone();
        Task::perform(
            async move { (id, api.fetch_image(url).await) },
            |(id, result)| Message::ThumbnailFetched(id, result),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut screen = self.browse_view();

        if let Some(form) = &self.add_form {
            screen = ui::modal::modal(screen, self.add_modal_view(form), Message::CloseAdd);
        }
        if let Some(detail) = &self.detail {
            screen = ui::modal::modal(screen, self.detail_modal_view(detail), Message::CloseDetail);
        }
        if let ConfirmState::Open {
            title,
            message,
            danger,
            ..
        } = &self.confirm
        {
            screen = ui::modal::modal(
                screen,
                ui::dialogs::confirm_dialog(title, message, *danger, self.busy),
                Message::ConfirmCancelled,
            );
        }
        if let Some(alert) = self.alert.current() {
            screen = ui::modal::modal(
                screen,
                ui::dialogs::alert_dialog(alert),
                Message::AlertDismissed,
            );
        }

        screen
    }

    /// The main screen: header, search controls, card grid, pagination
    fn browse_view(&self) -> Element<Message> {
        let header = row![
            column![
                text("Daftar Produk").size(22),
                text(self.catalog.showing_text())
                    .size(13)
                    .style(text::secondary),
            ]
            .spacing(4),
            horizontal_space(),
            button(text("+ Tambah Produk").size(14))
                .padding(10)
                .on_press_maybe((!self.busy).then_some(Message::OpenAdd)),
        ]
        .align_y(Alignment::Center);

        let search = text_input("Cari judul / kategori...", &self.catalog.query)
            .on_input(Message::QueryChanged)
            .padding(10)
            .size(14)
            .width(Length::Fixed(360.0));

        let page_size = row![
            text("Per halaman:").size(13).style(text::secondary),
            pick_list(
                PAGE_SIZES,
                Some(self.catalog.page_size),
                Message::PageSizePicked,
            )
            .text_size(13)
            .padding(6),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let mut content = column![
            header,
            row![search, horizontal_space(), page_size].align_y(Alignment::Center),
        ]
        .spacing(16)
        .padding(24);

        if let Some(error) = &self.catalog.error {
            content = content.push(
                container(text(error).size(13).style(text::danger))
                    .padding(12)
                    .width(Length::Fill)
                    .style(container::bordered_box),
            );
        }

        if self.catalog.loading {
            content = content.push(
                container(text("Loading...").size(20).style(text::secondary))
                    .padding(40)
                    .center_x(Length::Fill),
            );
        } else {
            let visible = self.catalog.visible();
            if visible.is_empty() {
                content = content.push(
                    container(
                        text("Tidak ada produk yang cocok dengan pencarian")
                            .size(14)
                            .style(text::secondary),
                    )
                    .padding(24)
                    .width(Length::Fill)
                    .style(container::bordered_box),
                );
            } else {
                content = content.push(ui::grid::product_grid(visible, &self.thumbnails));
            }
            content = content.push(ui::grid::pagination_bar(
                self.catalog.page,
                self.catalog.total_pages(),
            ));
        }

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn add_modal_view<'a>(&'a self, form: &'a DraftForm) -> Element<'a, Message> {
        let valid = form.is_valid();

        let mut body = column![ui::form::product_form(form, false).map(Message::AddForm)]
            .spacing(12);
        if !valid {
            body = body.push(
                text("*Wajib: lengkapi title, description, category, dan price > 0")
                    .size(12)
                    .style(text::secondary),
            );
        }

        let footer = row![
            horizontal_space(),
            button(text("Batal").size(14))
                .style(button::secondary)
                .padding(8)
                .on_press_maybe((!self.busy).then_some(Message::CloseAdd)),
            button(text("Simpan").size(14))
                .padding(8)
                .on_press_maybe((!self.busy && valid).then_some(Message::SubmitAdd)),
        ]
        .spacing(8);

        ui::modal::dialog_box("Tambah Produk".to_string(), body.into(), footer.into(), 460.0)
    }

    fn detail_modal_view<'a>(&'a self, detail: &'a DetailView) -> Element<'a, Message> {
        let body: Element<'a, Message> = match &detail.fetch {
            DetailFetch::Loading => text("Loading detail...")
                .size(14)
                .style(text::secondary)
                .into(),
            DetailFetch::Failed(_) => text(DETAIL_UNAVAILABLE)
                .size(14)
                .style(text::secondary)
                .into(),
            DetailFetch::Loaded(product) => {
                let visual: Element<'a, Message> = match self.thumbnails.get(&product.id) {
                    Some(handle) => image(handle.clone())
                        .width(Length::Fixed(180.0))
                        .height(Length::Fixed(180.0))
                        .into(),
                    None => container(text("Memuat gambar...").size(12).style(text::secondary))
                        .width(Length::Fixed(180.0))
                        .height(Length::Fixed(180.0))
                        .padding(12)
                        .style(container::bordered_box)
                        .into(),
                };

                let editing = detail.is_editing();
                let mut fields =
                    column![ui::form::product_form(&detail.form, !editing).map(Message::DetailForm)]
                        .spacing(8)
                        .width(Length::Fill);
                if editing && !detail.can_save() {
                    fields = fields.push(
                        text("Lengkapi title, description, category, dan price > 0.")
                            .size(12)
                            .style(text::secondary),
                    );
                }

                row![visual, fields].spacing(16).into()
            }
        };

        let busy = self.busy;
        let mut left = row![].spacing(8);
        if detail.product().is_some() {
            left = left.push(
                button(text("Hapus").size(14))
                    .style(button::danger)
                    .padding(8)
                    .on_press_maybe((!busy).then_some(Message::RequestDelete)),
            );
        }

        let mut right = row![].spacing(8);
        if detail.is_editing() {
            right = right.push(
                button(text("Batal Edit").size(14))
                    .style(button::secondary)
                    .padding(8)
                    .on_press_maybe((!busy).then_some(Message::CancelEdit)),
            );
            right = right.push(
                button(text("Simpan Perubahan").size(14))
                    .padding(8)
                    .on_press_maybe((!busy && detail.can_save()).then_some(Message::SubmitEdit)),
            );
        } else {
            right = right.push(
                button(text("Tutup").size(14))
                    .style(button::secondary)
                    .padding(8)
                    .on_press_maybe((!busy).then_some(Message::CloseDetail)),
            );
            if detail.product().is_some() {
                right = right.push(
                    button(text("Edit").size(14))
                        .padding(8)
                        .on_press_maybe((!busy).then_some(Message::StartEdit)),
                );
            }
        }

        let footer = row![left, horizontal_space(), right].align_y(Alignment::Center);

        ui::modal::dialog_box(
            format!("Detail Produk #{}", detail.id),
            body,
            footer.into(),
            680.0,
        )
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application("Katalog Produk", Katalog::update, Katalog::view)
        .theme(Katalog::theme)
        .centered()
        .run_with(Katalog::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::detail::DetailMode;
    use crate::state::product::Rating;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Produk {id}"),
            price: 10.0 + id as f64,
            description: "deskripsi".into(),
            category: "umum".into(),
            image: String::new(),
            rating: Some(Rating { rate: 4.0, count: 12 }),
        }
    }

    fn app_with_products(n: usize) -> Katalog {
        let (mut app, _) = Katalog::new();
        app.catalog
            .set_products((1..=n as u64).map(product).collect());
        app
    }

    #[test]
    fn failed_mutation_recovers_to_stable_state() {
        let mut app = app_with_products(3);
        app.busy = true;
        app.confirm.open(
            "Hapus Produk",
            "Produk #1 akan dihapus. Yakin?".into(),
            true,
            PendingAction::Delete(1),
        );

        let _ = app.update(Message::DeleteFinished(
            1,
            Err(ApiError::Status {
                status: 500,
                context: "gagal hapus produk".into(),
            }),
        ));

        assert!(!app.busy);
        assert!(!app.confirm.is_open());
        let alert = app.alert.current().expect("error alert should be open");
        assert_eq!(alert.kind, AlertKind::Error);
        assert!(alert.message.contains("HTTP 500"));
        // The list is untouched by the failed delete
        assert_eq!(app.catalog.products.len(), 3);
    }

    #[test]
    fn delete_success_removes_product_and_closes_detail() {
        let mut app = app_with_products(3);
        let mut detail = DetailView::loading(2);
        detail.resolve(Ok(product(2)));
        app.detail = Some(detail);
        app.busy = true;
        app.confirm.open(
            "Hapus Produk",
            "Produk #2 akan dihapus. Yakin?".into(),
            true,
            PendingAction::Delete(2),
        );

        let _ = app.update(Message::DeleteFinished(2, Ok(())));

        assert!(!app.busy);
        assert!(!app.confirm.is_open());
        assert!(app.detail.is_none());
        assert!(app.catalog.products.iter().all(|p| p.id != 2));
        assert!(app.alert.current().is_some());
    }

    #[test]
    fn create_success_prepends_and_closes_add_modal() {
        let mut app = app_with_products(2);
        app.add_form = Some(DraftForm::default());
        app.busy = true;

        let mut created = product(99);
        created.rating = None;
        let _ = app.update(Message::CreateFinished(Ok(created)));

        assert!(!app.busy);
        assert!(app.add_form.is_none());
        assert_eq!(app.catalog.products.first().map(|p| p.id), Some(99));
        assert_eq!(
            app.alert.current().map(|a| a.kind),
            Some(AlertKind::Success)
        );
    }

    #[test]
    fn update_success_patches_list_and_detail_preserving_rating() {
        let mut app = app_with_products(2);
        let mut detail = DetailView::loading(1);
        detail.resolve(Ok(product(1)));
        detail.begin_edit();
        app.detail = Some(detail);
        app.busy = true;

        let patch = ProductPatch {
            id: Some(1),
            title: Some("Produk Baru".into()),
            price: Some(55.0),
            ..ProductPatch::default()
        };
        let _ = app.update(Message::UpdateFinished(1, Ok(patch)));

        let listed = app.catalog.products.iter().find(|p| p.id == 1).unwrap();
        assert_eq!(listed.title, "Produk Baru");
        assert_eq!(listed.rating, Some(Rating { rate: 4.0, count: 12 }));

        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.mode, DetailMode::Viewing);
        assert_eq!(detail.form.title, "Produk Baru");
    }

    #[test]
    fn update_failure_keeps_editing_with_draft_unchanged() {
        let mut app = app_with_products(1);
        let mut detail = DetailView::loading(1);
        detail.resolve(Ok(product(1)));
        detail.begin_edit();
        detail.form.apply(DraftEvent::TitleChanged("Draf Saya".into()));
        app.detail = Some(detail);
        app.busy = true;

        let _ = app.update(Message::UpdateFinished(
            1,
            Err(ApiError::Request("connection reset".into())),
        ));

        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.mode, DetailMode::Editing);
        assert_eq!(detail.form.title, "Draf Saya");
        assert!(!app.busy);
    }

    #[test]
    fn stale_detail_response_is_discarded() {
        let mut app = app_with_products(5);
        app.detail = Some(DetailView::loading(5));

        let _ = app.update(Message::DetailLoaded(3, Ok(product(3))));

        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.id, 5);
        assert_eq!(detail.fetch, DetailFetch::Loading);
    }

    #[test]
    fn busy_flag_blocks_mutating_entry_points() {
        let mut app = app_with_products(1);
        app.busy = true;
        app.add_form = Some(DraftForm::default());
        app.confirm.open(
            "Simpan Produk",
            "Yakin?".into(),
            false,
            PendingAction::Delete(1),
        );

        // Backdrop dismissal and cancel are inert while busy
        let _ = app.update(Message::CloseAdd);
        assert!(app.add_form.is_some());
        let _ = app.update(Message::ConfirmCancelled);
        assert!(app.confirm.is_open());

        // A second accept while one is in flight is blocked too
        let _ = app.update(Message::ConfirmAccepted);
        assert!(app.busy);
        assert!(app.confirm.is_open());
    }

    #[test]
    fn submit_add_with_valid_form_opens_confirmation() {
        let mut app = app_with_products(0);
        let mut form = DraftForm::default();
        form.apply(DraftEvent::TitleChanged("Topi".into()));
        form.apply(DraftEvent::DescriptionChanged("Topi hitam".into()));
        form.apply(DraftEvent::CategoryChanged("aksesoris".into()));
        form.apply(DraftEvent::PriceChanged("5.5".into()));
        app.add_form = Some(form);

        let _ = app.update(Message::SubmitAdd);

        assert!(app.confirm.is_open());
        assert!(matches!(
            app.confirm.action(),
            Some(PendingAction::Create(draft)) if draft.title == "Topi"
        ));
    }

    #[test]
    fn search_and_paging_drive_the_visible_slice() {
        let mut app = app_with_products(10);
        assert_eq!(app.catalog.visible().len(), 8);

        let _ = app.update(Message::NextPage);
        assert_eq!(app.catalog.page, 2);
        assert_eq!(app.catalog.visible().len(), 2);

        let _ = app.update(Message::QueryChanged("Produk 3".into()));
        assert_eq!(app.catalog.page, 1);
        assert_eq!(app.catalog.visible().len(), 1);
    }
}
