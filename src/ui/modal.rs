/// Modal overlay plumbing
///
/// Dialogs are stacked over the base screen with a dimmed backdrop;
/// clicking the backdrop emits the given message so the application can
/// decide whether dismissal is currently allowed (it is ignored while a
/// mutation is in flight).

use iced::widget::{center, column, container, mouse_area, opaque, stack, text};
use iced::{Color, Element, Length};

/// Stack a dialog over the base screen with a click-to-dismiss backdrop
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = center(opaque(dialog.into())).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.5,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![base.into(), opaque(mouse_area(backdrop).on_press(on_blur))].into()
}

/// Shared dialog chrome: title, body and footer in a rounded box
pub fn dialog_box<'a, Message: 'a>(
    title: String,
    body: Element<'a, Message>,
    footer: Element<'a, Message>,
    width: f32,
) -> Element<'a, Message> {
    container(
        column![text(title).size(18), body, footer].spacing(16),
    )
    .width(Length::Fixed(width))
    .padding(20)
    .style(container::rounded_box)
    .into()
}
