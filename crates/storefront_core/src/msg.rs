#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The feed view became visible.
    Activated,
    /// The feed view went away. In-flight results are dropped on arrival.
    Deactivated,
    /// User clicked the retry control in the error view.
    RetryClicked,
    /// Catalog request settled with a decoded product list.
    FeedLoaded {
        request_id: crate::RequestId,
        products: Vec<crate::Product>,
    },
    /// Catalog request failed. `cause` is diagnostic only.
    FeedFailed {
        request_id: crate::RequestId,
        cause: String,
    },
    /// User clicked "Add to Cart" on a product card.
    AddToCartClicked { product_id: crate::ProductId },
    /// Fallback for placeholder wiring.
    NoOp,
}
