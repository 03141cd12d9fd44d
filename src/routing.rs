//! Application router configuration.

use axum::{Router, routing::get};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    user::{
        create_user_endpoint, delete_user_endpoint, edit_user_endpoint, get_user_endpoint,
        list_users_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::USERS,
            get(list_users_endpoint).post(create_user_endpoint),
        )
        .route(
            endpoints::USER,
            get(get_user_endpoint)
                .put(edit_user_endpoint)
                .delete(delete_user_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{AppState, ErrorMessage, User, UserId, UserStore, user::ticking_clock};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new(UserStore::with_clock(ticking_clock));

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn must_create_user(server: &TestServer, name: &str, email: &str) -> User {
        let response = server
            .post("/users")
            .json(&json!({"name": name, "email": email}))
            .await;

        response.assert_status(StatusCode::CREATED);

        response.json::<User>()
    }

    #[tokio::test]
    async fn list_users_starts_empty() {
        let server = get_test_server();

        let response = server.get("/users").await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn create_user_returns_created_with_location() {
        let server = get_test_server();

        let response = server
            .post("/users")
            .json(&json!({
                "name": "John Doe",
                "email": "john@example.com",
                "phoneNumber": "555-1234"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        response.assert_header("location", "/users/1");

        let user = response.json::<User>();
        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.phone_number(), Some("555-1234"));
    }

    #[tokio::test]
    async fn created_user_json_has_expected_shape() {
        let server = get_test_server();
        must_create_user(&server, "John Doe", "john@example.com").await;

        let body = server.get("/users/1").await.json::<serde_json::Value>();

        assert_eq!(body["id"], json!(1));
        assert_eq!(body["name"], json!("John Doe"));
        assert_eq!(body["email"], json!("john@example.com"));
        assert_eq!(body["phoneNumber"], json!(null));
        assert!(body["createdAt"].is_string());
        assert_eq!(body["createdAt"], body["updatedAt"]);
    }

    #[tokio::test]
    async fn create_user_without_email_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post("/users")
            .json(&json!({"name": "John Doe"}))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&ErrorMessage {
            message: "Name and Email are required".to_owned(),
        });
    }

    #[tokio::test]
    async fn create_user_with_malformed_json_is_bad_request() {
        let server = get_test_server();

        let response = server
            .post("/users")
            .json(&json!({"name": 42, "email": "john@example.com"}))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn get_user_with_non_integer_id_is_bad_request() {
        let server = get_test_server();

        server.get("/users/abc").await.assert_status_bad_request();
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let server = get_test_server();

        let response = server.get("/users/999").await;

        response.assert_status_not_found();
        response.assert_json(&ErrorMessage {
            message: "User with ID 999 not found".to_owned(),
        });
    }

    #[tokio::test]
    async fn update_user_keeps_absent_fields() {
        let server = get_test_server();
        let user = must_create_user(&server, "John Doe", "john@example.com").await;

        let response = server
            .put("/users/1")
            .json(&json!({"name": "", "phoneNumber": "555-1234"}))
            .await;

        response.assert_status_ok();
        let updated = response.json::<User>();
        assert_eq!(updated.name(), user.name());
        assert_eq!(updated.email(), user.email());
        assert_eq!(updated.phone_number(), Some("555-1234"));
        assert!(updated.updated_at() > user.updated_at());
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let server = get_test_server();

        server
            .put("/users/999")
            .json(&json!({"name": "Jane Doe"}))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_missing_user_is_not_found() {
        let server = get_test_server();

        server.delete("/users/999").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/accounts").await;

        response.assert_status_not_found();
        assert!(!response.json::<ErrorMessage>().message.is_empty());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let server = get_test_server();
        let first = must_create_user(&server, "John Doe", "john@example.com").await;

        server
            .delete(&format!("/users/{}", first.id()))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let second = must_create_user(&server, "John Doe", "john@example.com").await;
        assert_eq!(second.id(), UserId::new(2));
        server.get("/users").await.assert_json(&json!([second]));
    }

    #[tokio::test]
    async fn john_and_jane_scenario() {
        let server = get_test_server();

        let john = must_create_user(&server, "John Doe", "john@example.com").await;
        assert_eq!(john.id(), UserId::new(1));

        server
            .post("/users")
            .json(&json!({"name": "Jane Doe", "email": "john@example.com"}))
            .await
            .assert_status_bad_request();

        server
            .put("/users/1")
            .json(&json!({"email": "jane@example.com"}))
            .await
            .assert_status_ok();

        server
            .delete("/users/1")
            .await
            .assert_status(StatusCode::NO_CONTENT);

        server.get("/users/1").await.assert_status_not_found();
    }
}
