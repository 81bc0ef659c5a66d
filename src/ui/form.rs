/// Product form, shared by the add modal and the detail dialog
///
/// Emits raw field edits; validation lives on the form state itself.
/// In readonly mode the inputs have no change handler, which iced
/// renders as disabled.

use iced::widget::{column, row, text, text_input};
use iced::{Element, Length};

use crate::state::product::{DraftEvent, DraftForm};

pub fn product_form<'a>(form: &'a DraftForm, readonly: bool) -> Element<'a, DraftEvent> {
    let title = labeled_field(
        "Title",
        "Judul Produk",
        &form.title,
        DraftEvent::TitleChanged,
        readonly,
    );
    let price = labeled_field("Price", "0.1", &form.price, DraftEvent::PriceChanged, readonly);
    let category = labeled_field(
        "Category",
        "misal: pakaian pria",
        &form.category,
        DraftEvent::CategoryChanged,
        readonly,
    );
    let description = labeled_field(
        "Description",
        "Deskripsi produk",
        &form.description,
        DraftEvent::DescriptionChanged,
        readonly,
    );
    let image = labeled_field(
        "Image URL",
        "http://example.com",
        &form.image,
        DraftEvent::ImageChanged,
        readonly,
    );

    column![
        title,
        row![price, category].spacing(12),
        description,
        image,
    ]
    .spacing(12)
    .into()
}

fn labeled_field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_change: fn(String) -> DraftEvent,
    readonly: bool,
) -> Element<'a, DraftEvent> {
    let mut input = text_input(placeholder, value).padding(8).size(14);
    if !readonly {
        input = input.on_input(on_change);
    }

    column![text(label).size(12), input]
        .spacing(4)
        .width(Length::Fill)
        .into()
}
