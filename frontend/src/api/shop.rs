//! Public shop endpoints under `/shopping/api/v1`.

use serde::{Deserialize, Serialize};
use tatvapada_shared::{Cart, CartLine, Product, Validate, ValidationError};

use super::{build_url, endpoints, get_json, post_json, ApiError, ListQuery, Paged};

/// Checkout payload: contact details plus the cart lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub phone: String,
    pub lines: Vec<CartLine>,
}

impl CheckoutRequest {
    /// Builds the payload from form fields and the persisted cart.
    pub fn from_cart(customer_name: &str, phone: &str, cart: &Cart) -> Self {
        CheckoutRequest {
            customer_name: customer_name.trim().to_string(),
            phone: phone.trim().to_string(),
            lines: cart.lines.clone(),
        }
    }
}

impl Validate for CheckoutRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::Missing("ಹೆಸರು"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::Missing("ದೂರವಾಣಿ ಸಂಖ್ಯೆ"));
        }
        if self.lines.is_empty() {
            return Err(ValidationError::Invalid {
                field: "ಕಾರ್ಟ್",
                reason: "cart is empty",
            });
        }
        Ok(())
    }
}

/// Order confirmation returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub total_paise: u64,
}

/// Storefront product listing (same records as the admin catalog).
pub async fn fetch_shop_products(query: &ListQuery) -> Result<Paged<Product>, ApiError> {
    get_json(&build_url(endpoints::SHOP_PRODUCTS, query)).await
}

/// Places an order for the current cart.
pub async fn place_order(request: &CheckoutRequest) -> Result<OrderReceipt, ApiError> {
    post_json(&build_url(endpoints::SHOP_ORDERS, &ListQuery::default()), request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tatvapada_shared::Product;

    fn cart_with_one_line() -> Cart {
        let mut cart = Cart::default();
        cart.add_product(
            &Product {
                id: Some(1),
                name: "ಸಂಪುಟ 1".into(),
                price_paise: 25000,
                stock: 3,
                ..Product::default()
            },
            1,
        );
        cart
    }

    #[test]
    fn checkout_requires_contact_details() {
        let cart = cart_with_one_line();
        let request = CheckoutRequest::from_cart("", "9876543210", &cart);
        assert!(request.validate().is_err());
        let request = CheckoutRequest::from_cart("ಸುಮಾ", "9876543210", &cart);
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn checkout_rejects_an_empty_cart() {
        let request = CheckoutRequest::from_cart("ಸುಮಾ", "9876543210", &Cart::default());
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Invalid { .. })
        ));
    }
}
