use cellar_fulfillment::{DeliveryOutcome, DeliveryStatus, NoopOrderLog, OrderProcessor};
use cellar_inventory::{Inventory, InventoryItem};
use cellar_sales::{LineItem, Order};
use proptest::prelude::*;
use serde_json::{Value, json};

fn process_json(order: Value, inventory: Value) -> DeliveryOutcome {
    let order: Order = serde_json::from_value(order).unwrap();
    let inventory: Inventory = serde_json::from_value(inventory).unwrap();
    OrderProcessor::with_log(NoopOrderLog).process(&order, &inventory)
}

fn shelf() -> Value {
    json!({
        "items": [
            {"name": "Vodka", "quantity": 5, "price": 10},
            {"name": "Gin", "quantity": 2, "price": 15},
        ],
        "total_price": 80,
    })
}

#[test]
fn vodka_order_is_fulfilled_and_inventory_reduced() {
    let order = json!({
        "customer_name": "Ada",
        "items": [{"name": "Vodka", "quantity": 2, "price": 10}],
        "total_price": 20,
    });
    let inventory = json!({
        "items": [{"name": "Vodka", "quantity": 5, "price": 10}],
        "total_price": 50,
    });

    let outcome = process_json(order.clone(), inventory);
    let rendered = serde_json::to_value(&outcome).unwrap();

    assert_eq!(
        rendered,
        json!({
            "order": order,
            "delivery_status": "fulfilled",
            "inventory": {
                "items": [{"name": "Vodka", "quantity": 3, "price": 10}],
                "total_price": 30,
            },
        })
    );
}

#[test]
fn each_missing_order_field_is_invalid() {
    let complete = json!({
        "customer_name": "Ada",
        "items": [{"name": "Gin", "quantity": 1, "price": 15}],
        "total_price": 15,
    });

    for field in ["customer_name", "items", "total_price"] {
        let mut order = complete.clone();
        order.as_object_mut().unwrap().remove(field);
        let outcome = process_json(order, shelf());
        assert_eq!(outcome.delivery_status, DeliveryStatus::Invalid, "{field}");
    }

    for field in ["name", "quantity", "price"] {
        let mut order = complete.clone();
        order["items"][0].as_object_mut().unwrap().remove(field);
        let outcome = process_json(order, shelf());
        assert_eq!(outcome.delivery_status, DeliveryStatus::Invalid, "{field}");
    }
}

#[test]
fn null_counts_as_missing() {
    let order = json!({
        "customer_name": null,
        "items": [{"name": "Gin", "quantity": 1, "price": 15}],
        "total_price": 15,
    });
    assert_eq!(
        process_json(order, shelf()).delivery_status,
        DeliveryStatus::Invalid
    );
}

#[test]
fn null_entries_are_invalid() {
    let order = json!({
        "customer_name": "Ada",
        "items": [null],
        "total_price": 0,
    });
    assert_eq!(
        process_json(order, shelf()).delivery_status,
        DeliveryStatus::Invalid
    );

    let order = json!({"customer_name": "Ada", "items": [], "total_price": 0});
    let inventory = json!({"items": [{"name": "Gin", "quantity": 1, "price": 15}, null], "total_price": 15});
    assert_eq!(
        process_json(order, inventory).delivery_status,
        DeliveryStatus::Invalid
    );
}

#[test]
fn repeated_inventory_names_fulfil_from_a_covering_entry() {
    let order = json!({
        "customer_name": "Ada",
        "items": [{"name": "Rum", "quantity": 3, "price": 12}],
        "total_price": 36,
    });
    let inventory = json!({
        "items": [
            {"name": "Rum", "quantity": 1, "price": 12},
            {"name": "Rum", "quantity": 9, "price": 12},
        ],
        "total_price": 120,
    });

    let outcome = process_json(order, inventory);
    assert_eq!(outcome.delivery_status, DeliveryStatus::Fulfilled);
    assert_eq!(
        serde_json::to_value(outcome.inventory.unwrap()).unwrap(),
        json!({
            "items": [
                {"name": "Rum", "quantity": 1, "price": 12},
                {"name": "Rum", "quantity": 6, "price": 12},
            ],
            "total_price": 84,
        })
    );
}

#[test]
fn each_missing_inventory_field_is_invalid() {
    let order = json!({
        "customer_name": "Ada",
        "items": [{"name": "Gin", "quantity": 1, "price": 15}],
        "total_price": 15,
    });

    for field in ["items", "total_price"] {
        let mut inventory = shelf();
        inventory.as_object_mut().unwrap().remove(field);
        let outcome = process_json(order.clone(), inventory);
        assert_eq!(outcome.delivery_status, DeliveryStatus::Invalid, "{field}");
    }

    for field in ["name", "quantity", "price"] {
        let mut inventory = shelf();
        inventory["items"][1].as_object_mut().unwrap().remove(field);
        let outcome = process_json(order.clone(), inventory);
        assert_eq!(outcome.delivery_status, DeliveryStatus::Invalid, "{field}");
    }
}

#[test]
fn shortages_are_unfulfilled() {
    let cases = [
        // unknown item
        json!({"customer_name": "Ada", "items": [{"name": "Rum", "quantity": 1, "price": 12}], "total_price": 12}),
        // more than stocked
        json!({"customer_name": "Ada", "items": [{"name": "Gin", "quantity": 3, "price": 15}], "total_price": 45}),
        // order total above inventory total
        json!({"customer_name": "Ada", "items": [{"name": "Gin", "quantity": 1, "price": 15}], "total_price": 81}),
        // names are case-sensitive
        json!({"customer_name": "Ada", "items": [{"name": "gin", "quantity": 1, "price": 15}], "total_price": 15}),
    ];

    for order in cases {
        let outcome = process_json(order.clone(), shelf());
        assert_eq!(outcome.delivery_status, DeliveryStatus::Unfulfilled, "{order}");
        assert!(outcome.inventory.is_none());
        assert_eq!(serde_json::to_value(&outcome.order).unwrap(), order);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: a fulfilled order removes exactly what it asked for, and no
    /// quantity or total ever goes negative.
    #[test]
    fn fulfilled_orders_conserve_stock(
        stocked in prop::collection::vec(0u64..50, 3),
        wanted in prop::collection::vec((0usize..3, 0u64..30), 0..6),
        inventory_total in 0u64..5_000,
        order_total in 0u64..5_000,
    ) {
        let names = ["Vodka", "Gin", "Rum"];
        let inventory = Inventory::new(
            names
                .iter()
                .zip(&stocked)
                .map(|(name, qty)| InventoryItem::new(*name, *qty, 10))
                .collect(),
            inventory_total,
        );
        let order = Order::new(
            "Ada",
            wanted
                .iter()
                .map(|(idx, qty)| LineItem::new(names[*idx], *qty, 10))
                .collect(),
            order_total,
        );

        let outcome = OrderProcessor::with_log(NoopOrderLog).process(&order, &inventory);

        let mut requested = [0u64; 3];
        for (idx, qty) in &wanted {
            requested[*idx] += qty;
        }
        let coverable = (0..3).all(|i| requested[i] <= stocked[i]) && order_total <= inventory_total;

        if coverable {
            prop_assert_eq!(outcome.delivery_status, DeliveryStatus::Fulfilled);
            let after = outcome.inventory.unwrap().validate().unwrap();
            for (i, name) in names.iter().enumerate() {
                prop_assert_eq!(after.available(name), Some(stocked[i] - requested[i]));
            }
            prop_assert_eq!(after.total_price(), inventory_total - order_total);
        } else {
            prop_assert_eq!(outcome.delivery_status, DeliveryStatus::Unfulfilled);
            prop_assert!(outcome.inventory.is_none());
        }
    }
}
