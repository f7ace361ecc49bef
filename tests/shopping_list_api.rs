use axum::http::{Method, StatusCode};
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

use helpers::send;

#[tokio::test]
async fn test_health_and_ready() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _) = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let (status, body) = send(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(&app, Method::GET, "/ready", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ready"}));

    Ok(())
}

#[tokio::test]
async fn test_shopping_list_flow() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, state) = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let bread = helpers::create_recipe(&app, "Bread", &["3 cups flour", "1 tsp salt"]).await?;
    let pancakes = helpers::create_recipe(&app, "Pancakes", &["1 cup flour", "2 eggs"]).await?;
    let cookies = helpers::create_recipe(&app, "Cookies", &["2 cups flour", "1 egg (beaten)"]).await?;

    let body = json!({
        "name": "week 42",
        "days": [
            {"day": "Monday", "recipe_id": bread},
            {"day": "Wednesday", "recipe_id": pancakes},
            {"day": "Friday", "recipe_id": cookies},
            {"day": "Sunday", "recipe_id": null},
        ],
    });
    let (status, json) = send(&app, Method::POST, "/meal-plans", Some(&body.to_string())).await?;
    assert_eq!(status, StatusCode::CREATED);
    let plan_id = json["id"].as_str().unwrap().to_owned();

    let uri = format!("/meal-plans/{plan_id}/shopping-list");
    let (status, list) = send(&app, Method::GET, &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["plan_id"], json!(plan_id));
    assert_eq!(list["text"], json!("Egg\nEggs\nFlour (in 3 recipes)\nSalt"));
    assert_eq!(
        list["items"][2],
        json!({"name": "Flour", "count": 3, "label": "Flour (in 3 recipes)"})
    );
    assert_eq!(
        list["by_recipe"][0],
        json!({"recipe_name": "Bread", "day": "Monday", "ingredients": ["3 cups flour", "1 tsp salt"]})
    );
    assert_eq!(list["by_recipe"].as_array().unwrap().len(), 3);

    let body = json!({"remove_ingredients": ["Flour", "Salt"]});
    let (status, json) = send(&app, Method::POST, &format!("{uri}/exclusions"), Some(&body.to_string())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"success": true}));

    let record = pantry_shopping::Query(state.read_db.clone())
        .find_record(&plan_id)
        .await?
        .unwrap();
    assert_eq!(record.ingredients, "Egg\nEggs\nFlour (in 3 recipes)\nSalt");

    let (_, list) = send(&app, Method::GET, &uri, None).await?;
    assert_eq!(list["text"], json!("Egg\nEggs"));
    assert_eq!(list["by_recipe"][0]["ingredients"], json!(["3 cups flour", "1 tsp salt"]));

    let (status, json) = send(&app, Method::POST, &format!("{uri}/exclusions/reset"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"success": true}));

    let (_, list) = send(&app, Method::GET, &uri, None).await?;
    assert_eq!(list["text"], json!("Egg\nEggs\nFlour (in 3 recipes)\nSalt"));

    Ok(())
}

#[tokio::test]
async fn test_exclusion_errors() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _) = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let body = json!({"name": "empty week", "days": []});
    let (_, json) = send(&app, Method::POST, "/meal-plans", Some(&body.to_string())).await?;
    let plan_id = json["id"].as_str().unwrap().to_owned();
    let uri = format!("/meal-plans/{plan_id}/shopping-list/exclusions");

    let (status, json) = send(&app, Method::POST, &uri, Some("{not json")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], json!(false));
    assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));

    let (status, json) = send(&app, Method::POST, &uri, Some(r#"{"remove":["Salt"]}"#)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], json!(false));

    let (status, json) = send(
        &app,
        Method::POST,
        "/meal-plans/missing/shopping-list/exclusions",
        Some(r#"{"remove_ingredients":["Salt"]}"#),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"success": false, "error": "meal plan missing not found"}));

    let (status, list) = send(&app, Method::GET, &format!("/meal-plans/{plan_id}/shopping-list"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["text"], json!(""));
    assert_eq!(list["items"], json!([]));

    Ok(())
}

#[tokio::test]
async fn test_meal_plan_errors_and_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _) = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let body = json!({"name": "week", "days": [{"day": "Monday", "recipe_id": "nope"}]});
    let (status, _) = send(&app, Method::POST, "/meal-plans", Some(&body.to_string())).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let body = json!({"name": "week", "days": [{"day": "Someday"}]});
    let (status, json) = send(&app, Method::POST, "/meal-plans", Some(&body.to_string())).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], json!(false));

    let (status, _) = send(&app, Method::POST, "/recipes", Some(r#"{"name":"  "}"#)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let soup = helpers::create_recipe(&app, "Soup", &["1 onion"]).await?;
    let body = json!({"name": "week", "days": [{"day": "Tuesday", "recipe_id": soup}]});
    let (_, json) = send(&app, Method::POST, "/meal-plans", Some(&body.to_string())).await?;
    let plan_id = json["id"].as_str().unwrap().to_owned();

    let (status, json) = send(&app, Method::DELETE, &format!("/meal-plans/{plan_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"success": true}));

    let (status, _) = send(&app, Method::GET, &format!("/meal-plans/{plan_id}/shopping-list"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/meal-plans/{plan_id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_recipe_index_search_update_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _) = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let (status, json) = send(&app, Method::GET, "/recipes", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let soup = helpers::create_recipe(&app, "Tomato Soup", &["4 tomatoes"]).await?;
    let pie = helpers::create_recipe(&app, "Apple Pie", &["3 apples", "2 cups flour"]).await?;

    let (_, json) = send(&app, Method::GET, "/recipes", None).await?;
    assert_eq!(
        json,
        json!([{"id": pie, "name": "Apple Pie"}, {"id": soup, "name": "Tomato Soup"}])
    );

    let (status, json) = send(&app, Method::GET, "/recipes?q=soup", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([{"id": soup, "name": "Tomato Soup"}]));

    let (status, json) = send(&app, Method::GET, &format!("/recipes/{pie}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], json!("Apple Pie"));
    assert!(json["markup"].as_str().unwrap().contains("<li>3 apples</li>"));

    let body = json!({"name": "Pear Pie", "markup": "<ul><li>3 pears</li></ul>"});
    let (status, json) = send(&app, Method::PUT, &format!("/recipes/{pie}"), Some(&body.to_string())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"success": true}));

    let (_, json) = send(&app, Method::GET, &format!("/recipes/{pie}"), None).await?;
    assert_eq!(json, json!({"id": pie, "name": "Pear Pie", "markup": "<ul><li>3 pears</li></ul>"}));

    let (status, _) = send(&app, Method::PUT, &format!("/recipes/{pie}"), Some(r#"{"name":""}"#)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = send(&app, Method::DELETE, &format!("/recipes/{soup}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"success": true}));

    let (status, json) = send(&app, Method::GET, &format!("/recipes/{soup}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"success": false, "error": format!("recipe {soup} not found")}));

    let (status, _) = send(&app, Method::DELETE, &format!("/recipes/{soup}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let body = json!({"name": "Pizza"});
    let (status, _) = send(&app, Method::PUT, "/recipes/missing", Some(&body.to_string())).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_meal_plan_index_and_detail() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _) = helpers::setup_test_app(dir.child("db.sqlite3")).await?;

    let (status, json) = send(&app, Method::GET, "/meal-plans", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let bread = helpers::create_recipe(&app, "Bread", &["3 cups flour"]).await?;
    let pancakes = helpers::create_recipe(&app, "Pancakes", &["1 cup flour", "2 eggs"]).await?;

    let body = json!({"name": "first week", "days": [{"day": "Monday", "recipe_id": bread}]});
    let (_, json) = send(&app, Method::POST, "/meal-plans", Some(&body.to_string())).await?;
    let first = json["id"].as_str().unwrap().to_owned();

    let body = json!({
        "name": "second week",
        "days": [
            {"day": "Tuesday", "recipe_id": pancakes},
            {"day": "Saturday", "recipe_id": bread},
        ],
    });
    let (_, json) = send(&app, Method::POST, "/meal-plans", Some(&body.to_string())).await?;
    let second = json["id"].as_str().unwrap().to_owned();

    let (_, json) = send(&app, Method::GET, "/meal-plans", None).await?;
    let plans = json.as_array().unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["id"], json!(second));
    assert_eq!(plans[0]["name"], json!("second week"));
    assert_eq!(plans[1]["id"], json!(first));
    assert!(plans[1]["created_at"].as_i64().is_some());

    let (status, plan) = send(&app, Method::GET, &format!("/meal-plans/{second}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["name"], json!("second week"));
    assert_eq!(plan["days"].as_array().unwrap().len(), 7);
    assert_eq!(plan["days"][0], json!({"day": "Monday", "position": 0, "recipe": null}));
    assert_eq!(
        plan["days"][1],
        json!({"day": "Tuesday", "position": 1, "recipe": {"id": pancakes, "name": "Pancakes"}})
    );
    assert_eq!(plan["days"][5]["recipe"]["name"], json!("Bread"));

    let (status, _) = send(&app, Method::DELETE, &format!("/recipes/{bread}"), None).await?;
    assert_eq!(status, StatusCode::OK);

    let (_, plan) = send(&app, Method::GET, &format!("/meal-plans/{second}"), None).await?;
    assert_eq!(plan["days"][5]["recipe"], json!(null));

    let (_, list) = send(&app, Method::GET, &format!("/meal-plans/{second}/shopping-list"), None).await?;
    assert_eq!(list["text"], json!("Eggs\nFlour"));

    let (status, json) = send(&app, Method::GET, "/meal-plans/missing", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"success": false, "error": "meal plan missing not found"}));

    Ok(())
}
