use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cellar_core::{DomainError, DomainResult, ValueObject};

/// Order line as submitted. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    /// Unit price in smallest currency unit (e.g., cents).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u64, price: u64) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            price: Some(price),
        }
    }
}

/// Purchase order as submitted. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// A `null` entry is kept as `None` so it fails validation rather than parsing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Option<LineItem>>>,
    /// Order total in smallest currency unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<u64>,
}

impl Order {
    pub fn new(customer_name: impl Into<String>, items: Vec<LineItem>, total_price: u64) -> Self {
        Self {
            customer_name: Some(customer_name.into()),
            items: Some(items.into_iter().map(Some).collect()),
            total_price: Some(total_price),
        }
    }

    /// Check that every required field is present and produce the validated form.
    ///
    /// Presence is all that is checked: an empty customer name or an empty
    /// item list is accepted. The error names the first absent field.
    pub fn validate(&self) -> DomainResult<ValidOrder> {
        let customer_name = self
            .customer_name
            .clone()
            .ok_or_else(|| DomainError::missing("customer_name"))?;
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
            .map(|(idx, item)| OrderLine::from_item(idx, item.as_ref()))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(ValidOrder {
            customer_name,
            lines,
            total_price,
        })
    }
}

/// Validated order line: name, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u64,
    /// Unit price in smallest currency unit (e.g., cents).
    pub price: u64,
}

impl ValueObject for OrderLine {}

impl OrderLine {
    fn from_item(idx: usize, item: Option<&LineItem>) -> DomainResult<Self> {
        let item = item.ok_or_else(|| DomainError::missing(format!("items[{idx}]")))?;
        let field = |name: &str| DomainError::missing(format!("items[{idx}].{name}"));
        Ok(Self {
            name: item.name.clone().ok_or_else(|| field("name"))?,
            quantity: item.quantity.ok_or_else(|| field("quantity"))?,
            price: item.price.ok_or_else(|| field("price"))?,
        })
    }
}

/// An order whose required fields are all present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    customer_name: String,
    lines: Vec<OrderLine>,
    total_price: u64,
}

impl ValidOrder {
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// Sum of all line quantities, saturating at `u64::MAX`.
    pub fn total_quantity(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |acc: u64, l| acc.saturating_add(l.quantity))
    }

    /// Requested quantity per item name, summed across lines naming the same item.
    ///
    /// Names are compared exactly (case-sensitive). Saturates rather than
    /// overflowing so an absurd order is still reported as unfulfillable.
    pub fn demand(&self) -> BTreeMap<&str, u64> {
        let mut demand: BTreeMap<&str, u64> = BTreeMap::new();
        for line in &self.lines {
            let entry = demand.entry(line.name.as_str()).or_insert(0);
            *entry = entry.saturating_add(line.quantity);
        }
        demand
    }
}
