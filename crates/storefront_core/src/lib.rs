//! Storefront core: pure feed state machine and view-model helpers.
mod effect;
mod msg;
mod product;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use product::{Price, Product, ProductId, ORIGINAL_PRICE_MARKUP_PERCENT};
pub use state::{AppState, FeedState, RequestId, FEED_UNAVAILABLE_MESSAGE};
pub use update::update;
pub use view_model::{
    AppViewModel, FeedView, ProductCardView, CARD_BADGE, DEFAULT_CATEGORY, EMPTY_FEED_MESSAGE,
    LOADING_MESSAGE, PLACEHOLDER_IMAGE, RATING_MAX, RETRY_LABEL,
};
