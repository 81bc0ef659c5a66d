/// Confirmation and alert dialog views
///
/// Both render through the shared dialog chrome. The confirm dialog's
/// buttons go inert while the guarded operation is in flight; the alert
/// dialog only ever offers dismissal.

use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Element, Length, Theme};

use crate::state::dialog::{AlertContent, AlertKind};
use crate::ui::modal::dialog_box;
use crate::Message;

pub fn confirm_dialog<'a>(
    title: &'a str,
    message: &'a str,
    danger: bool,
    busy: bool,
) -> Element<'a, Message> {
    let confirm_label = if busy { "Memproses..." } else { "Ya, lanjut" };
    let confirm_style: fn(&Theme, button::Status) -> button::Style = if danger {
        button::danger
    } else {
        button::primary
    };

    let footer = row![
        horizontal_space(),
        button(text("Batal").size(14))
            .style(button::secondary)
            .padding(8)
            .on_press_maybe((!busy).then_some(Message::ConfirmCancelled)),
        button(text(confirm_label).size(14))
            .style(confirm_style)
            .padding(8)
            .on_press_maybe((!busy).then_some(Message::ConfirmAccepted)),
    ]
    .spacing(8);

    dialog_box(
        title.to_string(),
        text(message).size(14).into(),
        footer.into(),
        420.0,
    )
}

pub fn alert_dialog(alert: &AlertContent) -> Element<'_, Message> {
    let tint: fn(&Theme) -> text::Style = match alert.kind {
        AlertKind::Success => text::success,
        AlertKind::Error => text::danger,
        AlertKind::Info => text::base,
    };

    let body = container(text(&alert.message).size(14).style(tint))
        .padding(12)
        .width(Length::Fill)
        .style(container::bordered_box);

    let footer = row![
        horizontal_space(),
        button(text("OK").size(14))
            .style(button::primary)
            .padding(8)
            .on_press(Message::AlertDismissed),
    ];

    dialog_box(alert.title.clone(), body.into(), footer.into(), 380.0)
}
