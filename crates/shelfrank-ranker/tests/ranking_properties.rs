//! Property tests over generated catalogs.

use proptest::{prelude::prop, prop_assert, prop_assert_eq, prop_compose, proptest};
use shelfrank_common::{FilterConfig, WeightsConfig};
use shelfrank_ranker::filter::apply_filters;
use shelfrank_ranker::normalise::min_max;
use shelfrank_ranker::schema::{canonicalize, RAW_COLUMNS};
use shelfrank_ranker::{score_and_rank, RawTable, RawValue};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone)]
struct Product {
    tier: &'static str,
    price: f64,
    cogs: f64,
    days: i64,
    stock: i64,
    views: i64,
    sold: i64,
}

prop_compose! {
    fn product()(
        tier in prop::sample::select(vec!["A", "B", "C", "D", "X"]),
        price in 0.0..200.0f64,
        cogs in 0.0..150.0f64,
        days in 0..180i64,
        stock in 0..300i64,
        views in 0..10_000i64,
        sold in 0..500i64,
    ) -> Product {
        Product { tier, price, cogs, days, stock, views, sold }
    }
}

prop_compose! {
    fn filters()(
        min_stock in prop::option::of(0..150i64),
        max_days in prop::option::of(0..180i64),
    ) -> FilterConfig {
        FilterConfig { min_stock, max_inventory_days: max_days }
    }
}

fn table(products: &[Product]) -> RawTable {
    let mut table = RawTable::new(RAW_COLUMNS.iter().map(|c| c.source));
    for (i, p) in products.iter().enumerate() {
        table.push_row(vec![
            RawValue::from(format!("P{i}")),
            RawValue::from("Brand"),
            RawValue::from(p.tier),
            RawValue::from(p.price),
            RawValue::from(p.cogs),
            RawValue::from(p.days),
            RawValue::from(p.stock),
            RawValue::from(p.views),
            RawValue::from(p.sold),
        ]);
    }
    table
}

fn config(filters: FilterConfig) -> WeightsConfig {
    WeightsConfig {
        scoring_weights: BTreeMap::from([
            ("sales_velocity".to_string(), 0.3),
            ("profit_margin".to_string(), 0.3),
            ("engagement".to_string(), 0.2),
            ("brand_tier".to_string(), 0.2),
        ]),
        brand_tier_weights: HashMap::from([
            ("A".to_string(), 1.0),
            ("B".to_string(), 0.8),
            ("C".to_string(), 0.6),
            ("D".to_string(), 0.4),
        ]),
        filters,
        top_n_products: 10,
    }
}

proptest! {
    #[test]
    fn output_length_is_bounded_by_top_n_and_survivors(
        products in prop::collection::vec(product(), 0..40),
        filters in filters(),
        top_n in -5..60i64,
    ) {
        let table = table(&products);
        let (records, _) = canonicalize(&table);
        let survivors = apply_filters(records, &filters).len();

        let output = score_and_rank(&table, &config(filters), Some(top_n));
        let expected = if top_n < 0 { 0 } else { survivors.min(top_n as usize) };
        prop_assert_eq!(output.len(), expected);
    }

    #[test]
    fn ranks_are_dense_and_scores_non_increasing(
        products in prop::collection::vec(product(), 1..40),
        filters in filters(),
        top_n in 0..60i64,
    ) {
        let output = score_and_rank(&table(&products), &config(filters), Some(top_n));
        for (i, row) in output.rows.iter().enumerate() {
            prop_assert_eq!(row.rank as usize, i + 1);
        }
        for pair in output.rows.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        // Non-negative weights over [0, 1] features bound the score by the weight sum
        for row in &output.rows {
            prop_assert!(row.score >= 0.0 && row.score <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn filtering_keeps_an_ordered_unaltered_subset(
        products in prop::collection::vec(product(), 0..40),
        filters in filters(),
    ) {
        let (records, _) = canonicalize(&table(&products));
        let kept = apply_filters(records.clone(), &filters);

        let mut remaining = records.iter();
        for survivor in &kept {
            prop_assert!(remaining.any(|r| r == survivor), "survivor missing or out of order");
        }
    }

    #[test]
    fn uniform_feature_normalises_by_sign_of_shared_value(
        value in prop::sample::select(vec![0.0, 0.25, 3.0, -1.5, 1_000.0]),
        len in 1..20usize,
    ) {
        let normed = min_max(&vec![value; len]);
        let expected = if value != 0.0 { 1.0 } else { 0.0 };
        prop_assert!(normed.iter().all(|&n| n == expected));
    }
}
