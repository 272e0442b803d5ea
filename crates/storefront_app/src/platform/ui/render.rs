use storefront_core::{
    AppViewModel, FeedView, ProductCardView, EMPTY_FEED_MESSAGE, LOADING_MESSAGE, RATING_MAX,
    RETRY_LABEL,
};

use super::constants::*;
use super::layout::{footer_lines, header_lines};

/// Full screen: header, feed section, status line, footer.
pub fn render_frame(view: &AppViewModel, status: Option<&str>, year: i32) -> String {
    let mut lines = header_lines();
    lines.push(String::new());
    lines.extend(render_feed(view));
    lines.push(String::new());
    if let Some(status) = status {
        lines.push(status.to_string());
    }
    lines.extend(footer_lines(year));

    let mut frame = lines.join("\n");
    frame.push('\n');
    frame
}

pub fn render_feed(view: &AppViewModel) -> Vec<String> {
    match &view.feed {
        FeedView::Loading => vec![format!("... {LOADING_MESSAGE}")],
        FeedView::Error { message } => {
            vec![format!("! {message}"), format!("[r] {RETRY_LABEL}")]
        }
        FeedView::Empty => {
            let mut lines = section_header();
            lines.push(EMPTY_FEED_MESSAGE.to_string());
            lines
        }
        FeedView::Products { cards } => {
            let mut lines = section_header();
            for card in cards {
                lines.extend(format_card(card));
                lines.push(String::new());
            }
            lines.pop();
            lines
        }
    }
}

fn section_header() -> Vec<String> {
    vec![
        SECTION_TITLE.to_string(),
        SECTION_SUBTITLE.to_string(),
        String::new(),
    ]
}

fn format_card(card: &ProductCardView) -> Vec<String> {
    vec![
        format!("[#{key}] {name}  <{badge}>", key = card.key, name = card.name, badge = card.badge),
        format!(
            "    {category} | {stars} {rating}",
            category = card.category,
            stars = stars(card.rating),
            rating = card.rating_text
        ),
        format!(
            "    {current}  (was {original})",
            current = card.current_price,
            original = card.original_price
        ),
        format!("    image: {}", card.image),
        format!("    [a {}] {ADD_TO_CART_LABEL}", card.key),
    ]
}

fn stars(filled: u8) -> String {
    (1..=RATING_MAX)
        .map(|star| if star <= filled { '*' } else { '.' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use storefront_core::{Price, Product, ProductId};

    fn view_of(feed: FeedView) -> AppViewModel {
        AppViewModel {
            feed,
            active: true,
        }
    }

    fn mouse_card() -> ProductCardView {
        ProductCardView::from_product(&Product {
            id: ProductId(1),
            name: "Mouse".to_string(),
            price: Price::from_cents(4999),
            category: None,
            image_url: None,
        })
    }

    #[test]
    fn loading_shows_indicator_without_products() {
        let lines = render_feed(&view_of(FeedView::Loading));
        assert_eq!(lines, vec!["... Loading amazing gaming gear...".to_string()]);
    }

    #[test]
    fn error_shows_message_and_retry_control() {
        let lines = render_feed(&view_of(FeedView::Error {
            message: "Failed to load products".to_string(),
        }));
        assert_eq!(
            lines,
            vec![
                "! Failed to load products".to_string(),
                "[r] Try Again".to_string()
            ]
        );
    }

    #[test]
    fn empty_feed_shows_empty_state_and_no_cards() {
        let lines = render_feed(&view_of(FeedView::Empty));
        assert_eq!(lines.last().unwrap(), "No products available at the moment");
        assert!(!lines.iter().any(|line| line.starts_with("[#")));
    }

    #[test]
    fn product_card_lists_both_prices() {
        let lines = render_feed(&view_of(FeedView::Products {
            cards: vec![mouse_card()],
        }));
        assert_eq!(
            lines,
            vec![
                "Featured Gaming Gear".to_string(),
                "Level up your gaming experience with our premium selection".to_string(),
                String::new(),
                "[#1] Mouse  <New>".to_string(),
                "    Gaming | ****. (4.0)".to_string(),
                "    $49.99  (was $59.99)".to_string(),
                "    image: /api/placeholder/300/200".to_string(),
                "    [a 1] Add to Cart".to_string(),
            ]
        );
    }

    #[test]
    fn cards_render_in_feed_order() {
        let mut second = mouse_card();
        second.key = ProductId(7);
        second.name = "Headset".to_string();

        let lines = render_feed(&view_of(FeedView::Products {
            cards: vec![second, mouse_card()],
        }));
        let titles: Vec<_> = lines
            .iter()
            .map(String::as_str)
            .filter(|l| l.starts_with("[#"))
            .collect();
        assert_eq!(titles, vec!["[#7] Headset  <New>", "[#1] Mouse  <New>"]);
    }

    #[test]
    fn frame_wraps_feed_with_header_footer_and_status() {
        let frame = render_frame(&view_of(FeedView::Loading), Some("Unknown command: x"), 2026);

        assert!(frame.starts_with(&"=".repeat(FRAME_WIDTH)));
        assert!(frame.contains("GameGear Pro   Home | Categories | Deals"));
        assert!(frame.contains("[Cart: 0]"));
        assert!(frame.contains("Search: [Search gaming gear...]"));
        assert!(frame.contains("Unknown command: x"));
        assert!(frame.contains("Support: Help Center, Shipping Info, Returns, Warranty"));
        assert!(frame.contains("© 2026 GameGear Pro. All rights reserved."));
        assert!(frame.ends_with('\n'));
    }
}
