use crate::{ProductId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one read request against the catalog's product listing.
    FetchProducts { request_id: RequestId },
    /// Add-to-cart is a stub; the runner only records the request.
    AddToCartRequested { product_id: ProductId, name: String },
}
