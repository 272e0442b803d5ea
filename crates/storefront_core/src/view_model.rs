use crate::{Product, ProductId};

pub const LOADING_MESSAGE: &str = "Loading amazing gaming gear...";
pub const EMPTY_FEED_MESSAGE: &str = "No products available at the moment";
pub const RETRY_LABEL: &str = "Try Again";
pub const DEFAULT_CATEGORY: &str = "Gaming";
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/200";
pub const CARD_BADGE: &str = "New";
pub const RATING_MAX: u8 = 5;

// Cards carry a fixed rating until the catalog exposes reviews.
const FIXED_RATING: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub feed: FeedView,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedView {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Empty,
    Products {
        cards: Vec<ProductCardView>,
    },
}

impl FeedView {
    pub fn cards(&self) -> &[ProductCardView] {
        match self {
            FeedView::Products { cards } => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    /// Stable render key.
    pub key: ProductId,
    pub name: String,
    pub category: String,
    pub image: String,
    pub badge: String,
    pub rating: u8,
    pub rating_text: String,
    pub current_price: String,
    pub original_price: String,
}

impl ProductCardView {
    pub fn from_product(product: &Product) -> Self {
        let category = product
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        let image = product
            .image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE);

        Self {
            key: product.id,
            name: product.name.clone(),
            category: category.to_string(),
            image: image.to_string(),
            badge: CARD_BADGE.to_string(),
            rating: FIXED_RATING,
            rating_text: format!("({FIXED_RATING}.0)"),
            current_price: product.price.to_string(),
            original_price: product.price.original_price().to_string(),
        }
    }
}
