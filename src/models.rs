//! OrderLine domain entity and its merge-patch form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A single order line of a customer order.
///
/// `id` is absent until the store has persisted the entity; the store
/// owns identifier assignment. `product_id` is an opaque reference that
/// the resource server passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderLine {
    /// Assigned by the store on create; must be absent in create requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Number of units on this line.
    #[validate(range(min = 0))]
    #[schema(example = 3)]
    pub quantity: i32,
    /// Line total, non-negative.
    #[validate(custom(function = validate_non_negative))]
    #[schema(value_type = String, example = "59.97")]
    pub total_price: Decimal,
    /// Referenced product, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
}

/// Merge-patch form of [`OrderLine`]: a `None` field leaves the stored
/// value untouched.
///
/// PATCH bodies deserialize into this instead of the entity itself, so
/// the null-means-unchanged merge is explicit rather than hidden in
/// per-field null checks.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OrderLinePatch {
    /// Must be present and equal to the path id.
    pub id: Option<i64>,
    pub quantity: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub total_price: Option<Decimal>,
    pub product_id: Option<i64>,
}

impl OrderLinePatch {
    /// Apply the patch to a stored entity, overwriting only the fields
    /// that were supplied.
    pub fn apply_to(&self, stored: &mut OrderLine) {
        if let Some(quantity) = self.quantity {
            stored.quantity = quantity;
        }
        if let Some(total_price) = self.total_price {
            stored.total_price = total_price;
        }
        if let Some(product_id) = self.product_id {
            stored.product_id = Some(product_id);
        }
    }
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("negative"));
    }
    Ok(())
}
