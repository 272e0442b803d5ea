use serde::Deserialize;
use serde_json::Value;

/// Field of the listing payload that carries the product records.
pub const PRODUCTS_FIELD: &str = "products";

/// One product record as the catalog service sends it. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogProduct {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DecodeError {
    #[error("body is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("`products` has an unexpected shape: {0}")]
    InvalidProducts(String),
    #[error("product {id} has invalid price {price}")]
    InvalidPrice { id: u64, price: f64 },
}

/// Decode a listing payload of the form `{ "products": [...] }`.
///
/// A missing or `null` `products` field, or a body that is not a JSON object,
/// yields an empty list. Record order is kept as sent.
pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<CatalogProduct>, DecodeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson(err.to_string()))?;

    let products = match value {
        Value::Object(mut map) => match map.remove(PRODUCTS_FIELD) {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => serde_json::from_value::<Vec<CatalogProduct>>(raw)
                .map_err(|err| DecodeError::InvalidProducts(err.to_string()))?,
        },
        _ => Vec::new(),
    };

    if let Some(bad) = products
        .iter()
        .find(|p| !p.price.is_finite() || p.price < 0.0)
    {
        return Err(DecodeError::InvalidPrice {
            id: bad.id,
            price: bad.price,
        });
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_products_in_order() {
        let body = br#"{"products":[
            {"id":2,"name":"Keyboard","price":129.5,"category":"Keyboards"},
            {"id":1,"name":"Mouse","price":49.99,"image_url":"/img/mouse.png","sku":"M-1"}
        ]}"#;

        let products = decode_catalog(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 2);
        assert_eq!(products[0].category.as_deref(), Some("Keyboards"));
        assert_eq!(products[1].name, "Mouse");
        assert_eq!(products[1].image_url.as_deref(), Some("/img/mouse.png"));
    }

    #[test]
    fn missing_or_null_products_is_empty() {
        assert!(decode_catalog(b"{}").unwrap().is_empty());
        assert!(decode_catalog(br#"{"products":null}"#).unwrap().is_empty());
        assert!(decode_catalog(br#"{"items":[{"id":1}]}"#).unwrap().is_empty());
    }

    #[test]
    fn non_object_body_is_empty() {
        assert!(decode_catalog(b"[]").unwrap().is_empty());
        assert!(decode_catalog(b"\"ok\"").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = decode_catalog(b"<html>").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson(_)));
    }

    #[test]
    fn wrong_products_shape_is_an_error() {
        let err = decode_catalog(br#"{"products":"none"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidProducts(_)));

        let err = decode_catalog(br#"{"products":[{"id":1,"price":3}]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidProducts(_)));
    }

    #[test]
    fn negative_price_is_an_error() {
        let err = decode_catalog(br#"{"products":[{"id":4,"name":"Pad","price":-1}]}"#)
            .unwrap_err();
        assert_eq!(err, DecodeError::InvalidPrice { id: 4, price: -1.0 });
    }
}
