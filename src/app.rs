use std::net::SocketAddr;
use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use crate::state::AppState;
use crate::{auth, eatings, foods, recipes, users, weight};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(weight::router())
        .merge(recipes::router())
        .merge(foods::router())
        .merge(eatings::router())
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}


/// Scenarios against a real database. Run with a reachable `DATABASE_URL`:
/// `cargo test -- --ignored`.
#[cfg(test)]
mod db_tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::PgPool;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct Api {
        app: Router,
    }

    impl Api {
        fn new(pool: PgPool) -> Self {
            let state = AppState::from_parts(pool, Arc::new(AppState::test_config()));
            Self {
                app: build_app(state),
            }
        }

        async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
            let builder = Request::builder().method(method).uri(uri);
            let req = match body {
                Some(b) => builder
                    .header("content-type", "application/json")
                    .body(Body::from(b.to_string())),
                None => builder.body(Body::empty()),
            }
            .unwrap();
            let res = self.app.clone().oneshot(req).await.unwrap();
            let status = res.status();
            let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
                .await
                .unwrap();
            (
                status,
                serde_json::from_slice(&bytes).unwrap_or(Value::Null),
            )
        }

        async fn register(&self, login: &str, height: f64) -> i64 {
            let (status, body) = self
                .call(
                    Method::POST,
                    "/register",
                    Some(json!({
                        "name": "Ivan", "surname": "Ivanov", "height": height, "weight": 90.0,
                        "gender": true, "birthday": "1990-04-12", "password": "s3cret", "login": login
                    })),
                )
                .await;
            assert_eq!(status, StatusCode::OK, "{body}");
            body["user_id"].as_i64().unwrap()
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn check_login_flips_after_registration(pool: PgPool) {
        let api = Api::new(pool);
        let (_, before) = api.call(Method::GET, "/check-login/ivan", None).await;
        assert_eq!(before["available"], true);

        api.register("ivan", 180.0).await;

        let (_, after) = api.call(Method::GET, "/check-login/ivan", None).await;
        assert_eq!(after["available"], false);

        let (status, body) = api
            .call(
                Method::POST,
                "/register",
                Some(json!({
                    "name": "X", "surname": "Y", "height": 1.0, "weight": 1.0, "gender": true,
                    "birthday": "2000-01-01", "password": "p", "login": "ivan"
                })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Login already exists");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn login_and_password_checks(pool: PgPool) {
        let api = Api::new(pool);
        let id = api.register("petr", 175.0).await;

        let (status, body) = api
            .call(Method::POST, "/login", Some(json!({"login": "petr", "password": "s3cret"})))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);
        assert_eq!(body["birthday"], "1990-04-12");
        assert_eq!(body["message"], "Login successful");

        let (status, body) = api
            .call(Method::POST, "/login", Some(json!({"login": "petr", "password": "nope"})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Invalid login or password");

        let (_, body) = api
            .call(
                Method::POST,
                "/users/verify-password",
                Some(json!({"user_id": id, "password": "s3cret"})),
            )
            .await;
        assert_eq!(body["is_valid"], true);

        let (status, body) = api
            .call(
                Method::POST,
                "/users/verify-password",
                Some(json!({"user_id": 999_999, "password": "s3cret"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_valid"], false);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn partial_update_ignores_weight_and_keeps_other_fields(pool: PgPool) {
        let api = Api::new(pool);
        let id = api.register("olga", 165.0).await;

        let (status, body) = api
            .call(Method::PUT, &format!("/users/{id}"), Some(json!({"weight": 70})))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["login"], "olga");
        assert_eq!(body["height"], 165.0);
        assert_eq!(body["birthday"], "1990-04-12");

        let (_, user) = api.call(Method::GET, &format!("/users/{id}"), None).await;
        assert_eq!(user["weight"], 90.0);

        let (_, body) = api
            .call(Method::PUT, &format!("/users/{id}"), Some(json!({"surname": "Smirnova"})))
            .await;
        assert_eq!(body["surname"], "Smirnova");
        assert_eq!(body["name"], "Ivan");

        let (status, _) = api
            .call(Method::PUT, "/users/999999", Some(json!({"name": "ghost"})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn weight_records_store_bmi_and_sync_current_weight(pool: PgPool) {
        let api = Api::new(pool);
        let id = api.register("sergey", 180.0).await;

        let (status, rec) = api
            .call(
                Method::POST,
                &format!("/users/{id}/weight-records"),
                Some(json!({"date": "2024-02-01", "weight": 81.0, "notes": "morning"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert!((rec["bmi"].as_f64().unwrap() - 25.0).abs() < 1e-9);
        assert_eq!(rec["notes"], "morning");

        api.call(
            Method::POST,
            &format!("/users/{id}/weight-history"),
            Some(json!({"date": "2024-03-01", "weight": 79.0})),
        )
        .await;

        let (_, user) = api.call(Method::GET, &format!("/users/{id}"), None).await;
        assert_eq!(user["weight"], 79.0);

        let (_, limited) = api
            .call(Method::GET, &format!("/users/{id}/weight-records?limit=1"), None)
            .await;
        assert_eq!(limited.as_array().unwrap().len(), 1);
        assert_eq!(limited[0]["date"], "2024-03-01");

        let (_, all) = api
            .call(Method::GET, &format!("/users/{id}/weight-history"), None)
            .await;
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (status, _) = api
            .call(Method::GET, "/users/999999/weight-records", None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let rec_id = rec["id"].as_i64().unwrap();
        let (status, _) = api
            .call(Method::DELETE, &format!("/weight-records/{rec_id}"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = api
            .call(Method::DELETE, &format!("/weight-records/{rec_id}"), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Record not found");
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn eating_records_scale_macros_and_handle_water(pool: PgPool) {
        let api = Api::new(pool.clone());
        let user = api.register("masha", 160.0).await;

        let (_, apple) = api
            .call(
                Method::POST,
                "/food-items",
                Some(json!({
                    "nameFood": "Яблоко", "callories": 52, "proteins": 0.3,
                    "fats": 0.2, "carbohydrates": 14
                })),
            )
            .await;
        let apple_id = apple["id"].as_i64().unwrap();

        let (status, dup) = api
            .call(
                Method::POST,
                "/food-items",
                Some(json!({
                    "nameFood": "Яблоко", "callories": 1, "proteins": 1,
                    "fats": 1, "carbohydrates": 1
                })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(dup["detail"], "Продукт с таким названием уже существует");

        let (_, found) = api
            .call(Method::GET, "/food-items/search?query=%D0%B1%D0%BB%D0%BE%D0%BA", None)
            .await;
        assert_eq!(found.as_array().unwrap().len(), 1);

        let (status, eaten) = api
            .call(
                Method::POST,
                "/eating-records",
                Some(json!({
                    "user_id": user, "food_id": apple_id, "date": "2024-01-05 08:30",
                    "meal_type": "breakfast", "quantity": 150
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(eaten["callories"], 78.0);
        assert_eq!(eaten["carbohydrates"], 21.0);
        assert_eq!(eaten["date"], "2024-01-05 08:30:00");
        assert_eq!(eaten["food_name"], "Яблоко");

        // A real food row with id 0 must not be looked up for water.
        sqlx::query(
            "INSERT INTO food (id, name_food, callories, squirrels, fats, carbohydrates) \
             VALUES (0, 'Not water', 500, 50, 50, 50)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let (_, water) = api
            .call(
                Method::POST,
                "/eating-records",
                Some(json!({
                    "user_id": user, "food_id": 0, "date": "2024-01-05",
                    "meal_type": "water", "quantity": 250
                })),
            )
            .await;
        assert_eq!(water["food_name"], "Вода");
        assert_eq!(water["callories"], 0.0);
        assert_eq!(water["proteins"], 0.0);
        assert_eq!(water["fats"], 0.0);
        assert_eq!(water["carbohydrates"], 0.0);

        let (status, _) = api
            .call(
                Method::POST,
                "/eating-records",
                Some(json!({
                    "user_id": user, "food_id": 424242, "date": "2024-01-05",
                    "meal_type": "lunch", "quantity": 1
                })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        api.call(
            Method::POST,
            "/eating-records",
            Some(json!({
                "user_id": user, "food_id": apple_id, "date": "2024-01-06 00:00:00",
                "meal_type": "breakfast", "quantity": 100
            })),
        )
        .await;

        let (_, day) = api
            .call(Method::GET, &format!("/users/{user}/eating-records?date=2024-01-05"), None)
            .await;
        let day = day.as_array().unwrap();
        assert_eq!(day.len(), 2);
        assert!(day.iter().any(|e| e["food_name"] == "Вода"));
        assert!(day.iter().any(|e| e["squirrels"].as_f64().is_some()));

        let eaten_id = eaten["id"].as_i64().unwrap();
        let (status, _) = api
            .call(Method::DELETE, &format!("/eating-records/{eaten_id}"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn recipes_are_listed_newest_first(pool: PgPool) {
        let api = Api::new(pool.clone());
        let user = api.register("chef", 170.0).await;

        let (status, created) = api
            .call(
                Method::POST,
                &format!("/users/{user}/recipes"),
                Some(json!({"name": "Old", "components": "a", "steps": "b"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let old_id = created["id"].as_i64().unwrap();
        sqlx::query("UPDATE reciep SET date_create = DATE '2020-01-01' WHERE id = $1")
            .bind(old_id as i32)
            .execute(&pool)
            .await
            .unwrap();

        api.call(
            Method::POST,
            &format!("/users/{user}/recipes"),
            Some(json!({"name": "New", "callories": 200, "components": "c", "steps": "d"})),
        )
        .await;

        let (_, mine) = api.call(Method::GET, &format!("/users/{user}/recipes"), None).await;
        assert_eq!(mine[0]["name"], "New");
        assert_eq!(mine[1]["name"], "Old");
        assert_eq!(mine[1]["squirrels"], 0.0);

        let (_, all) = api.call(Method::GET, "/recipes", None).await;
        assert_eq!(all[0]["name"], "New");

        let (status, _) = api
            .call(
                Method::PUT,
                &format!("/recipes/{old_id}"),
                Some(json!({
                    "name": "Renamed", "callories": 1, "components": "x", "steps": "y",
                    "squirrels": 2, "fats": 3, "carbohydrates": 4
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = api.call(Method::DELETE, "/recipes/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Рецепт не найден");

        let (status, _) = api
            .call(
                Method::POST,
                "/users/999999/recipes",
                Some(json!({"name": "n", "components": "c", "steps": "s"})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn deleting_a_user_cascades_only_weight_history(pool: PgPool) {
        let api = Api::new(pool.clone());
        let user = api.register("gone", 180.0).await;

        api.call(
            Method::POST,
            &format!("/users/{user}/weight-records"),
            Some(json!({"date": "2024-02-01", "weight": 80.0})),
        )
        .await;
        api.call(
            Method::POST,
            &format!("/users/{user}/recipes"),
            Some(json!({"name": "r", "components": "c", "steps": "s"})),
        )
        .await;
        api.call(
            Method::POST,
            "/eating-records",
            Some(json!({
                "user_id": user, "food_id": 0, "date": "2024-02-01",
                "meal_type": "water", "quantity": 200
            })),
        )
        .await;

        let (status, _) = api.call(Method::DELETE, &format!("/users/{user}"), None).await;
        assert_eq!(status, StatusCode::OK);

        let count = |table: &'static str| {
            let pool = pool.clone();
            async move {
                sqlx::query_scalar::<_, i64>(&format!(
                    "SELECT COUNT(*) FROM {table} WHERE user_id = $1"
                ))
                .bind(user as i32)
                .fetch_one(&pool)
                .await
                .unwrap()
            }
        };
        assert_eq!(count("user_weight_history").await, 0);
        assert_eq!(count("reciep").await, 1);
        assert_eq!(count("eating").await, 1);

        let (status, _) = api.call(Method::GET, &format!("/users/{user}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
