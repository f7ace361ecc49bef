#![allow(dead_code)]

use std::{path::PathBuf, str::FromStr};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use tower::ServiceExt;

pub async fn setup_test_app(path: PathBuf) -> anyhow::Result<(Router, pantry_shared::State)> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    pantry::migrate::run_migrations(&pool).await?;

    let state = pantry_shared::State::single(pool);

    Ok((pantry::create_app(state.clone()), state))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))?,
        None => request.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = serde_json::from_slice(&bytes)?;

    Ok((status, json))
}

pub async fn create_recipe(app: &Router, name: &str, lines: &[&str]) -> anyhow::Result<String> {
    let items = lines
        .iter()
        .map(|line| format!("<li>{line}</li>"))
        .collect::<String>();
    let body = serde_json::json!({
        "name": name,
        "markup": format!("<h3>Ingredients</h3><ul>{items}</ul>"),
    });

    let (status, json) = send(app, Method::POST, "/recipes", Some(&body.to_string())).await?;
    assert_eq!(status, StatusCode::CREATED);

    Ok(json["id"].as_str().unwrap().to_owned())
}
