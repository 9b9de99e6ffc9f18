//! Input checks applied before anything is written to a store or split.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::PersonId;

use super::NewItem;

/// Largest line total (unit price x quantity) an item may have.
///
/// Bounding every line keeps bill sums, and tax and tip on them, far inside
/// `Decimal`'s range.
pub const MAX_LINE_PRICE: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Trims `name` and rejects it if nothing is left.
fn required_name(
    name: &str,
    make_error: impl FnOnce(String, String) -> EngineError,
) -> EngineResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(make_error("name".to_string(), "cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn event_name(name: &str) -> EngineResult<String> {
    required_name(name, |field, message| EngineError::InvalidEvent { field, message })
}

pub(crate) fn person_name(name: &str) -> EngineResult<String> {
    required_name(name, |field, message| EngineError::InvalidPerson { field, message })
}

/// Folds `quantity` into `unit_price`, rejecting totals above [`MAX_LINE_PRICE`].
fn line_price(unit_price: Decimal, quantity: u32) -> EngineResult<Decimal> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .filter(|price| *price <= MAX_LINE_PRICE)
        .ok_or_else(|| EngineError::InvalidItem {
            field: "unit_price".to_string(),
            message: format!(
                "{} x {} exceeds the largest line total of {}",
                unit_price, quantity, MAX_LINE_PRICE
            ),
        })
}

/// Checks an item's fields. `is_member` says whether a sharer id belongs to
/// one of the people on the bill.
///
/// Returns the trimmed name.
pub(crate) fn new_item(
    item: &NewItem,
    is_member: impl Fn(PersonId) -> bool,
) -> EngineResult<String> {
    let name = required_name(&item.name, |field, message| EngineError::InvalidItem {
        field,
        message,
    })?;

    if item.unit_price < Decimal::ZERO {
        return Err(EngineError::InvalidItem {
            field: "unit_price".to_string(),
            message: format!("must not be negative, got {}", item.unit_price),
        });
    }

    if item.quantity == 0 {
        return Err(EngineError::InvalidItem {
            field: "quantity".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    line_price(item.unit_price, item.quantity)?;

    if let Some(unknown) = item.shared_by.iter().find(|id| !is_member(**id)) {
        return Err(EngineError::InvalidItem {
            field: "shared_by".to_string(),
            message: format!("person '{}' is not one of the people on this bill", unknown),
        });
    }

    Ok(name)
}
