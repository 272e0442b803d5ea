use crate::view_model::{AppViewModel, FeedView, ProductCardView};
use crate::{Product, ProductId};

pub type RequestId = u64;

/// The only message a user ever sees for a failed load.
pub const FEED_UNAVAILABLE_MESSAGE: &str = "Failed to load products";

/// Exactly one of the three feed phases is ever held.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Error { message: String },
    Loaded { products: Vec<Product> },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    feed: FeedState,
    active: bool,
    last_request_id: RequestId,
    /// First request id issued by the current activation.
    activation_floor: RequestId,
    last_failure: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let feed = match &self.feed {
            FeedState::Loading => FeedView::Loading,
            FeedState::Error { message } => FeedView::Error {
                message: message.clone(),
            },
            FeedState::Loaded { products } if products.is_empty() => FeedView::Empty,
            FeedState::Loaded { products } => FeedView::Products {
                cards: products.iter().map(ProductCardView::from_product).collect(),
            },
        };
        AppViewModel {
            feed,
            active: self.active,
        }
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Id of the most recently issued fetch, `0` before the first one.
    pub fn last_request_id(&self) -> RequestId {
        self.last_request_id
    }

    /// Cause of the latest failure, kept for diagnostics and never rendered.
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn product(&self, id: ProductId) -> Option<&Product> {
        match &self.feed {
            FeedState::Loaded { products } => products.iter().find(|p| p.id == id),
            _ => None,
        }
    }

    pub(crate) fn activate(&mut self) -> RequestId {
        self.active = true;
        let request_id = self.begin_fetch();
        self.activation_floor = request_id;
        request_id
    }

    pub(crate) fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.mark_dirty();
        }
    }

    /// Enter `Loading` and allocate the id for the fetch about to be issued.
    pub(crate) fn begin_fetch(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_failure = None;
        self.feed = FeedState::Loading;
        self.mark_dirty();
        self.last_request_id
    }

    /// Whether a settled request belongs to the current activation.
    pub fn accepts(&self, request_id: RequestId) -> bool {
        self.active && request_id >= self.activation_floor
    }

    /// Results that land while inactive, or that belong to an earlier
    /// activation, are dropped.
    pub(crate) fn apply_loaded(&mut self, request_id: RequestId, products: Vec<Product>) {
        if !self.accepts(request_id) {
            return;
        }
        self.last_failure = None;
        self.feed = FeedState::Loaded { products };
        self.mark_dirty();
    }

    pub(crate) fn apply_failed(&mut self, request_id: RequestId, cause: String) {
        if !self.accepts(request_id) {
            return;
        }
        self.feed = FeedState::Error {
            message: FEED_UNAVAILABLE_MESSAGE.to_string(),
        };
        self.last_failure = Some(cause);
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
