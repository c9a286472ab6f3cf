//! Session shopping cart aggregator.
//!
//! A [`Cart`] is a flat mapping from string-encoded product ids to quantity
//! lines, owned by one visitor session. The cart itself never talks to the
//! database: pricing queries take a pre-fetched product map so callers (and
//! tests) decide where product data comes from. Persistence is equally
//! external -- [`Cart::from_json`] / [`Cart::to_json`] are the validated
//! boundary to whatever session store holds the serialized mapping.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::money;

/// One persisted cart entry: a product reference and how many of it.
///
/// Only these two fields are ever stored. Joined product data and line
/// totals are derived at read time and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub quantity: i64,
}

/// Read-only product data the cart needs for pricing.
///
/// A deliberately small projection so the cart does not depend on the
/// database row shape. `price` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductInfo {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub price: i64,
}

/// A cart line joined against its product, with the display line total.
#[derive(Debug, Clone, Serialize)]
pub struct PricedLine {
    pub product: ProductInfo,
    pub quantity: i64,
    pub total_price: Decimal,
}

/// Per-session mapping of product ids to quantity lines.
///
/// Invariant: no line is ever stored with quantity 0 -- a mutation that
/// would leave a line at exactly 0 deletes it instead. Keys are the
/// string-encoded product ids and always match `line.product_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: BTreeMap<String, CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Session-store boundary
    // -----------------------------------------------------------------------

    /// Decode a cart from its persisted JSON form.
    ///
    /// Strict: the payload must be an object of `{ product_id: CartLine }`
    /// entries, every quantity must be a positive integer, and each entry's
    /// `product_id` must match its key. Anything else is a validation error
    /// rather than a silent reset, so corrupt session state is surfaced.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        let map = value
            .as_object()
            .ok_or_else(|| CoreError::Validation("Cart payload must be a JSON object".into()))?;

        let mut lines = BTreeMap::new();

        for (key, entry) in map {
            let line: CartLine = serde_json::from_value(entry.clone()).map_err(|e| {
                CoreError::Validation(format!("Malformed cart line for product {key}: {e}"))
            })?;

            if line.product_id != *key {
                return Err(CoreError::Validation(format!(
                    "Cart line key {key} does not match product_id {}",
                    line.product_id
                )));
            }
            if line.quantity <= 0 {
                return Err(CoreError::Validation(format!(
                    "Cart line for product {key} has non-positive quantity {}",
                    line.quantity
                )));
            }

            lines.insert(key.clone(), line);
        }

        Ok(Self { lines })
    }

    /// Encode the cart into its persisted JSON form.
    pub fn to_json(&self) -> Value {
        let map: serde_json::Map<String, Value> = self
            .lines
            .iter()
            .map(|(id, line)| {
                (
                    id.clone(),
                    serde_json::to_value(line).expect("CartLine serialization cannot fail"),
                )
            })
            .collect();
        Value::Object(map)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Add a product to the cart.
    ///
    /// The product id is normalized to its string form. If the line is
    /// absent it is inserted with `quantity`. If it is present, `replace`
    /// decides the behavior: `true` adds `quantity` to the existing amount
    /// (a negative value decrements), `false` leaves the existing line
    /// untouched (insert guard). A resulting quantity of exactly 0 removes
    /// the line.
    ///
    /// Product existence is not checked here; a dangling reference is
    /// tolerated until the cart is priced.
    pub fn add(&mut self, product_id: impl ToString, quantity: i64, replace: bool) {
        let product_id = product_id.to_string();

        let new_quantity = match self.lines.get(&product_id) {
            None => quantity,
            Some(line) if replace => line.quantity + quantity,
            Some(line) => line.quantity,
        };

        if new_quantity == 0 {
            self.lines.remove(&product_id);
        } else {
            self.lines.insert(
                product_id.clone(),
                CartLine {
                    product_id,
                    quantity: new_quantity,
                },
            );
        }
    }

    /// Remove a product's line entirely.
    ///
    /// Returns `true` if a line was deleted, `false` if the product was not
    /// in the cart (a silent no-op; callers skip persisting on `false`).
    pub fn remove(&mut self, product_id: &str) -> bool {
        self.lines.remove(product_id).is_some()
    }

    /// Empty the cart. At the session layer this deletes the stored entry.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Total number of items: the sum of quantities across all lines.
    pub fn count(&self) -> i64 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The stored lines, ordered by product id.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// String-encoded ids of every referenced product.
    pub fn product_ids(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    /// Join every line against `products` and compute display line totals.
    ///
    /// Re-derives from current state on every call. Each line total is
    /// `trunc(price * quantity) / 100`, applied per line -- this is a
    /// different truncation point than [`Cart::total_cost`] and the two are
    /// intentionally not unified.
    ///
    /// Fails the whole enumeration with [`CoreError::NotFound`] if any
    /// referenced product is missing from `products`.
    pub fn priced_lines(
        &self,
        products: &HashMap<String, ProductInfo>,
    ) -> Result<Vec<PricedLine>, CoreError> {
        self.lines
            .values()
            .map(|line| {
                let product = lookup(products, &line.product_id)?;
                Ok(PricedLine {
                    product: product.clone(),
                    quantity: line.quantity,
                    total_price: money::line_total(product.price, line.quantity),
                })
            })
            .collect()
    }

    /// Total cost of the cart in integer cents: `sum(price * quantity)`.
    ///
    /// Same missing-product failure mode as [`Cart::priced_lines`].
    pub fn total_cents(&self, products: &HashMap<String, ProductInfo>) -> Result<i64, CoreError> {
        self.lines
            .values()
            .map(|line| {
                let product = lookup(products, &line.product_id)?;
                Ok(product.price * line.quantity)
            })
            .sum()
    }

    /// Display total cost: `trunc(sum(price * quantity)) / 100`.
    ///
    /// The truncation applies to the aggregate sum, not per line, so this
    /// may differ in rounding from the sum of per-line totals.
    pub fn total_cost(&self, products: &HashMap<String, ProductInfo>) -> Result<Decimal, CoreError> {
        Ok(money::display_price(self.total_cents(products)?))
    }
}

fn lookup<'a>(
    products: &'a HashMap<String, ProductInfo>,
    product_id: &str,
) -> Result<&'a ProductInfo, CoreError> {
    products.get(product_id).ok_or_else(|| CoreError::NotFound {
        entity: "Product",
        id: product_id.to_string(),
    })
}
