//! End-to-end API tests against a real database
//!
//! Drive the full intake flow over HTTP: login for a bearer token,
//! submit claims, look them up. Needs a running Docker daemon:
//!
//! ```bash
//! cargo test -p interface_api -- --ignored
//! ```

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use interface_api::auth::hash_password;
use interface_api::config::ApiConfig;
use interface_api::create_router;
use test_utils::database::{
    get_shared_test_database, link_plan_benefit, seed_activated_user, seed_benefit, seed_member,
    seed_plan, seed_procedure, TestDatabase,
};

const JWT_SECRET: &str = "flow-test-secret";
const PASSWORD: &str = "correct horse battery staple";

fn flow_server(db: &TestDatabase) -> TestServer {
    let config = ApiConfig {
        jwt_secret: JWT_SECRET.to_string(),
        ..ApiConfig::default()
    };
    TestServer::new(create_router(db.pool().clone(), config)).expect("test server")
}

/// Seeds an activated account and logs in over the API, returning the
/// bearer token
async fn login(server: &TestServer, db: &TestDatabase, email: &str) -> String {
    let hash = hash_password(PASSWORD).unwrap();
    seed_activated_user(db.pool(), email, &hash).await.unwrap();

    let response = server
        .post("/auth/login")
        .json(&json!({ "email": email, "password": PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    body["token"].as_str().expect("token").to_string()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_submit_and_look_up_a_claim() {
    let db = get_shared_test_database().await;
    let server = flow_server(&db);
    let token = login(&server, &db, "flow-submit@example.com").await;

    let plan_id = seed_plan(db.pool(), "Flow Plan").await.unwrap();
    let benefit_id = seed_benefit(db.pool(), "Flow Dental", None).await.unwrap();
    link_plan_benefit(db.pool(), plan_id, benefit_id, Some(1000.into()), false)
        .await
        .unwrap();
    let member_id = seed_member(db.pool(), plan_id, "MBR-FLOW-1", true)
        .await
        .unwrap();
    seed_procedure(db.pool(), benefit_id, "PROC-FLOW-CLEAN", 500.into())
        .await
        .unwrap();

    let response = server
        .post("/claims")
        .authorization_bearer(&token)
        .json(&json!({
            "member_id": member_id,
            "claim_amount": 800,
            "procedure_code": "PROC-FLOW-CLEAN"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "APPROVED");
    assert_eq!(body["fraud_flag"], false);
    let claim_id = body["claim_id"].as_str().expect("claim id");

    let response = server
        .get(&format!("/claims/{claim_id}"))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["id"], claim_id);
    assert_eq!(body["status"], "APPROVED");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_claim_for_inactive_member_is_404_over_http() {
    let db = get_shared_test_database().await;
    let server = flow_server(&db);
    let token = login(&server, &db, "flow-inactive@example.com").await;

    let plan_id = seed_plan(db.pool(), "Flow Dormant Plan").await.unwrap();
    let benefit_id = seed_benefit(db.pool(), "Flow Optical", None).await.unwrap();
    link_plan_benefit(db.pool(), plan_id, benefit_id, Some(1000.into()), false)
        .await
        .unwrap();
    let member_id = seed_member(db.pool(), plan_id, "MBR-FLOW-2", false)
        .await
        .unwrap();
    seed_procedure(db.pool(), benefit_id, "PROC-FLOW-EXAM", 500.into())
        .await
        .unwrap();

    let response = server
        .post("/claims")
        .authorization_bearer(&token)
        .json(&json!({
            "member_id": member_id,
            "claim_amount": 300,
            "procedure_code": "PROC-FLOW-EXAM"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_lookup_of_unissued_claim_is_404_over_http() {
    let db = get_shared_test_database().await;
    let server = flow_server(&db);
    let token = login(&server, &db, "flow-lookup@example.com").await;

    let response = server
        .get(&format!("/claims/{}", Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_registration_creates_a_deactivated_account() {
    let db = get_shared_test_database().await;
    let server = flow_server(&db);

    let response = server
        .post("/auth/register")
        .json(&json!({
            "name": "Wanjiru Kamau",
            "email": "flow-register@example.com",
            "phone_number": "0712 345 678",
            "password": PASSWORD
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["activated"], false);
    assert_eq!(body["phone_number"], "+254712345678");

    // Deactivated accounts cannot log in until provisioning flips them.
    let response = server
        .post("/auth/login")
        .json(&json!({
            "email": "flow-register@example.com",
            "password": PASSWORD
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}
