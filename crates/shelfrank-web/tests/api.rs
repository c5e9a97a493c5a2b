//! Router-level tests driven through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use shelfrank_common::{FilterConfig, Settings, WeightsConfig};
use shelfrank_web::{router::build_router, state::AppState};
use std::collections::BTreeMap;
use std::path::Path;
use tower::ServiceExt;

const RAW: &str = "\
Product Name,Brand,Brand Tier,Price (USD),COGS (USD),Days of Inventory,Units in Stock,Views Last Month,Volume Sold Last Month
Snail Mucin Essence,COSRX,A,25,8,30,120,4000,300
Rice Toner,I'm From,B,22,9,45,60,1500,120
Centella Ampoule,Skin1004,C,18,6,,80,900,60
Dusty Cream,OldBrand,D,30,20,200,5,10,1
";

fn app(dir: &Path) -> Router {
    let mut settings = Settings::default();
    settings.data.dir = dir.to_path_buf();
    let weights = WeightsConfig {
        scoring_weights: BTreeMap::from([
            ("sales_velocity".to_string(), 0.5),
            ("engagement".to_string(), 0.5),
        ]),
        filters: FilterConfig { min_stock: Some(10), max_inventory_days: None },
        ..WeightsConfig::default()
    };
    build_router(AppState::new(settings, weights))
}

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(app(dir.path()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ranked_products_scores_raw_when_no_processed_file() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("raw/raw_products.csv"), RAW);

    let (status, body) = get(app(dir.path()), "/ranked-products?top_n=2").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Product Name"], "Snail Mucin Essence");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[1]["rank"], 2);
    assert_eq!(rows[0]["Price (USD)"], 25.0);
}

#[tokio::test]
async fn ranked_products_prefers_processed_file() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("raw/raw_products.csv"), RAW);
    write(
        &dir.path().join("processed/ranked_products.csv"),
        "Product Name,Brand,Price (USD),score\nPrecomputed,BrandX,9.5,0.9\nRunner Up,BrandY,7.0,0.4\nThird,BrandZ,5.0,0.1\n",
    );

    let (status, body) = get(app(dir.path()), "/ranked-products?top_n=2").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Product Name"], "Precomputed");
    assert_eq!(rows[1]["rank"], 2);
}

#[tokio::test]
async fn ranked_products_default_top_n_is_ten() {
    let dir = tempfile::tempdir().unwrap();
    let mut csv = String::from("Product Name,Brand,Price (USD),score,rank\n");
    for i in 0..15 {
        csv.push_str(&format!("P{i},Brand,10.0,{},{}\n", 1.0 - i as f64 / 20.0, i + 1));
    }
    write(&dir.path().join("processed/ranked_products.csv"), &csv);

    let (_, body) = get(app(dir.path()), "/ranked-products").await;
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn ranked_products_without_any_data_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(app(dir.path()), "/ranked-products").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn ranked_products_on_empty_raw_is_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("raw/raw_products.csv"), "Product Name,Brand\n");

    let (status, body) = get(app(dir.path()), "/ranked-products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn product_details_returns_raw_fields() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("raw/raw_products.csv"), RAW);

    let (status, body) = get(app(dir.path()), "/product-details/Centella%20Ampoule").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Brand"], "Skin1004");
    assert_eq!(body["Units in Stock"], 80);
    assert_eq!(body["Days of Inventory"], Value::Null);
}

#[tokio::test]
async fn product_details_not_found_cases() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _) = get(app(dir.path()), "/product-details/Rice%20Toner").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    write(&dir.path().join("raw/raw_products.csv"), RAW);
    let (status, body) = get(app(dir.path()), "/product-details/Nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Product 'Nonexistent' not found");
}
