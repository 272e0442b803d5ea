use std::sync::{mpsc, Arc};

use storefront_core::{Effect, Msg, Price, Product, ProductId};
use storefront_engine::{
    CatalogProduct, EngineError, EngineEvent, EngineHandle, EventSink, FetchSettings,
};
use storefront_logging::sf_info;

use super::input::UiEvent;

/// Executes effects returned by `update`.
pub trait EffectExecutor {
    fn run(&self, effects: Vec<Effect>);
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, tx: mpsc::Sender<UiEvent>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx }))?;
        Ok(Self { engine })
    }
}

impl EffectExecutor for EffectRunner {
    fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchProducts { request_id } => {
                    sf_info!("FetchProducts request_id={}", request_id);
                    self.engine.fetch_products(request_id);
                }
                Effect::AddToCartRequested { product_id, name } => {
                    // Cart is not implemented; the click is only recorded.
                    sf_info!("Adding to cart: {} (product {})", name, product_id);
                }
            }
        }
    }
}

/// Turns engine events into loop messages.
struct MsgSink {
    tx: mpsc::Sender<UiEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(UiEvent::Msg(map_event(event)));
    }
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FeedFetched { request_id, result } => {
            let mapped = result
                .map_err(|err| err.to_string())
                .and_then(map_products);
            match mapped {
                Ok(products) => {
                    sf_info!(
                        "Catalog request {} returned {} products",
                        request_id,
                        products.len()
                    );
                    Msg::FeedLoaded {
                        request_id,
                        products,
                    }
                }
                Err(cause) => Msg::FeedFailed { request_id, cause },
            }
        }
    }
}

fn map_products(products: Vec<CatalogProduct>) -> Result<Vec<Product>, String> {
    products.into_iter().map(map_product).collect()
}

fn map_product(product: CatalogProduct) -> Result<Product, String> {
    let price = Price::from_decimal(product.price)
        .ok_or_else(|| format!("product {} has invalid price {}", product.id, product.price))?;
    Ok(Product {
        id: ProductId(product.id),
        name: product.name,
        price,
        category: product.category,
        image_url: product.image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_engine::decode_catalog;

    #[test]
    fn successful_fetch_maps_to_loaded_products() {
        let products =
            decode_catalog(br#"{"products":[{"id":1,"name":"Mouse","price":49.99}]}"#).unwrap();

        let msg = map_event(EngineEvent::FeedFetched {
            request_id: 3,
            result: Ok(products),
        });

        assert_eq!(
            msg,
            Msg::FeedLoaded {
                request_id: 3,
                products: vec![Product {
                    id: ProductId(1),
                    name: "Mouse".to_string(),
                    price: Price::from_cents(4999),
                    category: None,
                    image_url: None,
                }],
            }
        );
    }

    #[test]
    fn out_of_range_price_maps_to_failure() {
        let msg = map_event(EngineEvent::FeedFetched {
            request_id: 4,
            result: Ok(vec![CatalogProduct {
                id: 8,
                name: "Chair".to_string(),
                price: 1e300,
                category: None,
                image_url: None,
            }]),
        });

        assert!(matches!(msg, Msg::FeedFailed { request_id: 4, .. }));
    }
}
