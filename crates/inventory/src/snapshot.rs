use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cellar_core::{DomainError, DomainResult, ValueObject};

/// Inventory entry as supplied. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    /// Unit price in smallest currency unit (e.g., cents).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: u64, price: u64) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            price: Some(price),
        }
    }
}

/// Inventory snapshot as supplied. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// A `null` entry is kept as `None` so it fails validation rather than parsing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Option<InventoryItem>>>,
    /// Aggregate value in smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<u64>,
}

impl Inventory {
    pub fn new(items: Vec<InventoryItem>, total_price: u64) -> Self {
        Self {
            items: Some(items.into_iter().map(Some).collect()),
            total_price: Some(total_price),
        }
    }

    /// Check that every required field is present and produce the validated form.
    pub fn validate(&self) -> DomainResult<Stock> {
        let items = self
            .items
            .as_ref()
            .ok_or_else(|| DomainError::missing("items"))?;
        let total_price = self
            .total_price
            .ok_or_else(|| DomainError::missing("total_price"))?;

        let lines = items
            .iter()
            .enumerate()
            .map(|(idx, item)| StockLine::from_item(idx, item.as_ref()))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Stock { lines, total_price })
    }
}

/// Validated inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub name: String,
    pub quantity: u64,
    pub price: u64,
}

impl ValueObject for StockLine {}

impl StockLine {
    fn from_item(idx: usize, item: Option<&InventoryItem>) -> DomainResult<Self> {
        let item = item.ok_or_else(|| DomainError::missing(format!("items[{idx}]")))?;
        let field = |name: &str| DomainError::missing(format!("items[{idx}].{name}"));
        Ok(Self {
            name: item.name.clone().ok_or_else(|| field("name"))?,
            quantity: item.quantity.ok_or_else(|| field("quantity"))?,
            price: item.price.ok_or_else(|| field("price"))?,
        })
    }
}

/// An inventory snapshot whose required fields are all present.
///
/// A name may be listed more than once. Each requested quantity is drawn
/// from a single entry: the first one with that name holding enough stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stock {
    lines: Vec<StockLine>,
    total_price: u64,
}

impl ValueObject for Stock {}

impl Stock {
    pub fn lines(&self) -> &[StockLine] {
        &self.lines
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// First entry named `name` holding at least `quantity`.
    pub fn covering(&self, name: &str, quantity: u64) -> Option<&StockLine> {
        self.position_covering(name, quantity).map(|idx| &self.lines[idx])
    }

    /// Largest quantity a single entry named `name` holds, or `None` if the
    /// item is not stocked.
    pub fn available(&self, name: &str) -> Option<u64> {
        self.lines
            .iter()
            .filter(|l| l.name == name)
            .map(|l| l.quantity)
            .max()
    }

    fn position_covering(&self, name: &str, quantity: u64) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.name == name && l.quantity >= quantity)
    }

    /// Remove `demand` (quantity per item name) and `value` from the snapshot,
    /// returning the resulting snapshot. `self` is left untouched.
    ///
    /// Fails with an invariant violation instead of letting any quantity or
    /// the total drop below zero.
    pub fn withdraw(&self, demand: &BTreeMap<&str, u64>, value: u64) -> DomainResult<Stock> {
        let mut next = self.clone();

        for (&name, &quantity) in demand {
            let Some(idx) = next.position_covering(name, quantity) else {
                return Err(match next.available(name) {
                    None => DomainError::invariant(format!("`{name}` is not stocked")),
                    Some(_) => {
                        DomainError::invariant(format!("stock of `{name}` cannot go negative"))
                    }
                });
            };
            next.lines[idx].quantity -= quantity;
        }

        next.total_price = next
            .total_price
            .checked_sub(value)
            .ok_or_else(|| DomainError::invariant("inventory total cannot go negative"))?;

        Ok(next)
    }
}

impl From<Stock> for Inventory {
    fn from(stock: Stock) -> Self {
        Inventory {
            items: Some(
                stock
                    .lines
                    .into_iter()
                    .map(|l| Some(InventoryItem::new(l.name, l.quantity, l.price)))
                    .collect(),
            ),
            total_price: Some(stock.total_price),
        }
    }
}
