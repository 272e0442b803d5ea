//! Storefront engine: catalog IO and effect execution.
mod catalog;
mod decode;
mod engine;
mod fetch;
mod types;

pub use catalog::CatalogClient;
pub use decode::{decode_catalog, CatalogProduct, DecodeError, PRODUCTS_FIELD};
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use fetch::{FeedQuery, FetchSettings, Fetcher, ReqwestFetcher, PRODUCTS_PATH};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, RequestId};
