/// Card grid and pagination bar
///
/// Cards flow in a Wrap so the grid reflows with the window width.
/// Product images arrive asynchronously; until then a card shows a
/// textual placeholder.

use std::collections::HashMap;

use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::product::Product;
use crate::Message;

const CARD_WIDTH: f32 = 220.0;
const CARD_HEIGHT: f32 = 310.0;
const IMAGE_HEIGHT: f32 = 140.0;

/// Page-number buttons shown before collapsing into an ellipsis
const MAX_PAGE_BUTTONS: usize = 8;

pub fn product_grid<'a>(
    products: Vec<&'a Product>,
    thumbnails: &'a HashMap<u64, image::Handle>,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = products
        .into_iter()
        .map(|product| product_card(product, thumbnails.get(&product.id)))
        .collect();

    Wrap::with_elements(cards)
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
}

fn product_card<'a>(
    product: &'a Product,
    thumbnail: Option<&'a image::Handle>,
) -> Element<'a, Message> {
    let visual: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .into(),
        None => container(text("Memuat gambar...").size(12).style(text::secondary))
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let rating = match &product.rating {
        Some(r) => format!("⭐ {:.1}", r.rate),
        None => String::from("⭐ -"),
    };

    let body = column![
        visual,
        text(&product.title).size(14),
        text(truncate(&product.description, 90))
            .size(12)
            .style(text::secondary),
        row![
            text(format!("${:.2}", product.price)).size(14),
            horizontal_space(),
            text(rating).size(12).style(text::secondary),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(8);

    let card = container(body)
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(CARD_HEIGHT))
        .padding(12)
        .clip(true)
        .style(container::bordered_box);

    button(card)
        .padding(0)
        .style(button::text)
        .on_press(Message::OpenDetail(product.id))
        .into()
}

pub fn pagination_bar<'a>(page: usize, total: usize) -> Element<'a, Message> {
    let mut numbers = row![].spacing(4);
    for n in 1..=total.min(MAX_PAGE_BUTTONS) {
        let style: fn(&Theme, button::Status) -> button::Style = if n == page {
            button::primary
        } else {
            button::secondary
        };
        numbers = numbers.push(
            button(text(n.to_string()).size(13))
                .style(style)
                .padding(8)
                .on_press(Message::PageSelected(n)),
        );
    }
    if total > MAX_PAGE_BUTTONS {
        numbers = numbers.push(text("...").size(13).style(text::secondary));
    }

    row![
        text(format!("Halaman {page} / {total}")).size(13).style(text::secondary),
        horizontal_space(),
        button(text("Kembali").size(13))
            .style(button::secondary)
            .padding(8)
            .on_press_maybe((page > 1).then_some(Message::PrevPage)),
        numbers,
        button(text("Lanjut").size(13))
            .style(button::secondary)
            .padding(8)
            .on_press_maybe((page < total).then_some(Message::NextPage)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Kemeja", 10), "Kemeja");
    }

    #[test]
    fn truncate_cuts_on_char_boundary() {
        assert_eq!(truncate("Kemeja lengan panjang", 6), "Kemeja...");
        // Multi-byte characters must not split
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }
}
