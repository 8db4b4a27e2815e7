//! Integration tests for the ticket surfaces
//!
//! The full application is mounted over in-memory repositories and
//! driven through HTTP with tokens for seeded accounts, covering the
//! reporter, agent and admin surfaces and the scope boundaries
//! between them.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::json;
use uuid::Uuid;

use qd_api::app::{create_app, AppState};
use qd_core::domain::entities::user::{Role, User};
use qd_core::repositories::{MockTicketRepository, MockUserRepository};
use qd_core::services::auth::{AuthService, AuthServiceConfig};
use qd_core::services::session::{SessionService, SessionServiceConfig};
use qd_core::services::tickets::TicketService;
use qd_core::services::users::UserService;

type TestState = web::Data<AppState<MockUserRepository, MockTicketRepository>>;

fn user(email: &str, name: &str, role: Role) -> User {
    User::with_role(
        email.to_string(),
        name.to_string(),
        "$2b$04$hash".to_string(),
        role,
    )
}

async fn test_state(users: Vec<User>) -> TestState {
    let user_repository = Arc::new(MockUserRepository::with_users(users).await);
    let ticket_repository = Arc::new(MockTicketRepository::new());

    let session_service = Arc::new(SessionService::new(SessionServiceConfig::new(
        "ticket-route-test-secret",
    )));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        session_service.clone(),
        AuthServiceConfig::default(),
    ));
    let user_service = Arc::new(UserService::new(user_repository.clone()));
    let ticket_service = Arc::new(TicketService::new(ticket_repository, user_repository));

    web::Data::new(AppState {
        auth_service,
        user_service,
        ticket_service,
        session_service,
    })
}

fn token_for(state: &TestState, user_id: Uuid) -> String {
    state.session_service.issue_session(user_id).unwrap()
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Request body for filing a ticket in these tests
fn ticket_payload(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Steps to reproduce included",
        "priority": "MEDIUM"
    })
}

/// Pulls the ticket id out of a create response body
fn ticket_id_of(body: &serde_json::Value) -> Uuid {
    body["data"]["ticket"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("created ticket should carry an id")
}

#[actix_web::test]
async fn test_create_and_list_own_tickets() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let alice_id = alice.id;
    let state = test_state(vec![alice]).await;
    let token = token_for(&state, alice_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Printer on fire",
            "description": "Smoke is coming out of the tray",
            "priority": "HIGH"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["ticket"]["status"], json!("OPEN"));
    assert_eq!(body["data"]["ticket"]["priority"], json!("HIGH"));
    assert_eq!(body["data"]["created_by"]["name"], json!("Alice"));
    assert_eq!(body["data"]["assigned_to"], json!(null));

    let req = test::TestRequest::get()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let tickets = body["data"].as_array().expect("list should be an array");
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0]["ticket"]["title"], json!("Printer on fire"));
}

#[actix_web::test]
async fn test_ticket_hidden_from_other_reporters() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let bob = user("bob@example.com", "Bob", Role::User);
    let (alice_id, bob_id) = (alice.id, bob.id);
    let state = test_state(vec![alice, bob]).await;
    let alice_token = token_for(&state, alice_id);
    let bob_token = token_for(&state, bob_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&alice_token))
        .set_json(ticket_payload("Alice's ticket"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let ticket_id = ticket_id_of(&body);

    // Bob gets the same 404 an unknown id would produce
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/tickets/{}", ticket_id))
        .insert_header(bearer(&bob_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Alice still sees it
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/tickets/{}", ticket_id))
        .insert_header(bearer(&alice_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_comment_thread_flow() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let alice_id = alice.id;
    let state = test_state(vec![alice]).await;
    let token = token_for(&state, alice_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&token))
        .set_json(ticket_payload("Cannot log in"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let ticket_id = ticket_id_of(&body);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/tickets/{}/comments", ticket_id))
        .insert_header(bearer(&token))
        .set_json(json!({ "content": "It started after the update" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/tickets/{}/comments", ticket_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let comments = body["data"].as_array().expect("comments should be an array");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], json!("It started after the update"));
    assert_eq!(comments[0]["author"]["name"], json!("Alice"));

    // The detail view carries the same thread
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/tickets/{}", ticket_id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["comments"].as_array().map(|c| c.len()), Some(1));
}

#[actix_web::test]
async fn test_assignment_drives_the_agent_queue() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let smith = user("smith@example.com", "Smith", Role::Agent);
    let root = user("root@example.com", "Root", Role::Admin);
    let (alice_id, smith_id, root_id) = (alice.id, smith.id, root.id);
    let state = test_state(vec![alice, smith, root]).await;
    let alice_token = token_for(&state, alice_id);
    let smith_token = token_for(&state, smith_id);
    let root_token = token_for(&state, root_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&alice_token))
        .set_json(ticket_payload("VPN drops hourly"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let first = ticket_id_of(&body);

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&alice_token))
        .set_json(ticket_payload("Email bounces"))
        .to_request();
    test::call_service(&app, req).await;

    // Before assignment the agent queue is empty
    let req = test::TestRequest::get()
        .uri("/api/v1/agent/tickets")
        .insert_header(bearer(&smith_token))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().map(|t| t.len()), Some(0));

    // Admin assigns the first ticket to Smith
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/admin/tickets/{}/assign", first))
        .insert_header(bearer(&root_token))
        .set_json(json!({ "agent_id": smith_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["ticket"]["status"], json!("IN_PROGRESS"));
    assert_eq!(body["data"]["assigned_to"]["name"], json!("Smith"));

    // Now the queue holds exactly the assigned ticket
    let req = test::TestRequest::get()
        .uri("/api/v1/agent/tickets")
        .insert_header(bearer(&smith_token))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let queue = body["data"].as_array().expect("queue should be an array");
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["ticket"]["title"], json!("VPN drops hourly"));

    // The agent resolves it
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/agent/tickets/{}/status", first))
        .insert_header(bearer(&smith_token))
        .set_json(json!({ "status": "RESOLVED" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["ticket"]["status"], json!("RESOLVED"));
}

#[actix_web::test]
async fn test_agent_cannot_touch_unassigned_tickets() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let smith = user("smith@example.com", "Smith", Role::Agent);
    let (alice_id, smith_id) = (alice.id, smith.id);
    let state = test_state(vec![alice, smith]).await;
    let alice_token = token_for(&state, alice_id);
    let smith_token = token_for(&state, smith_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&alice_token))
        .set_json(ticket_payload("Unassigned ticket"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let ticket_id = ticket_id_of(&body);

    // Detail, status and comments all answer 404 for a ticket that is
    // not in the agent's queue
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/agent/tickets/{}", ticket_id))
        .insert_header(bearer(&smith_token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/agent/tickets/{}/status", ticket_id))
        .insert_header(bearer(&smith_token))
        .set_json(json!({ "status": "CLOSED" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/agent/tickets/{}/comments", ticket_id))
        .insert_header(bearer(&smith_token))
        .set_json(json!({ "content": "Not my queue" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_assignment_requires_an_existing_agent() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let root = user("root@example.com", "Root", Role::Admin);
    let (alice_id, root_id) = (alice.id, root.id);
    let state = test_state(vec![alice, root]).await;
    let alice_token = token_for(&state, alice_id);
    let root_token = token_for(&state, root_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&alice_token))
        .set_json(ticket_payload("Assign me"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let ticket_id = ticket_id_of(&body);

    // A reporter is not an assignable agent
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/admin/tickets/{}/assign", ticket_id))
        .insert_header(bearer(&root_token))
        .set_json(json!({ "agent_id": alice_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));

    // Neither is an id with no account behind it
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/admin/tickets/{}/assign", ticket_id))
        .insert_header(bearer(&root_token))
        .set_json(json!({ "agent_id": Uuid::new_v4() }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn test_clearing_assignment_reopens_ticket() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let smith = user("smith@example.com", "Smith", Role::Agent);
    let root = user("root@example.com", "Root", Role::Admin);
    let (alice_id, smith_id, root_id) = (alice.id, smith.id, root.id);
    let state = test_state(vec![alice, smith, root]).await;
    let alice_token = token_for(&state, alice_id);
    let root_token = token_for(&state, root_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&alice_token))
        .set_json(ticket_payload("Bounce me around"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let ticket_id = ticket_id_of(&body);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/admin/tickets/{}/assign", ticket_id))
        .insert_header(bearer(&root_token))
        .set_json(json!({ "agent_id": smith_id }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/admin/tickets/{}/assign", ticket_id))
        .insert_header(bearer(&root_token))
        .set_json(json!({ "agent_id": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["ticket"]["status"], json!("OPEN"));
    assert_eq!(body["data"]["assigned_to"], json!(null));
}

#[actix_web::test]
async fn test_admin_manages_users_and_roles() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let smith = user("smith@example.com", "Smith", Role::Agent);
    let root = user("root@example.com", "Root", Role::Admin);
    let (alice_id, root_id) = (alice.id, root.id);
    let state = test_state(vec![alice, smith, root]).await;
    let alice_token = token_for(&state, alice_id);
    let root_token = token_for(&state, root_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/admin/users")
        .insert_header(bearer(&root_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().map(|u| u.len()), Some(3));

    let req = test::TestRequest::get()
        .uri("/api/v1/admin/agents")
        .insert_header(bearer(&root_token))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let agents = body["data"].as_array().expect("agents should be an array");
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0]["name"], json!("Smith"));

    // Promote Alice to agent
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/admin/users/{}/role", alice_id))
        .insert_header(bearer(&root_token))
        .set_json(json!({ "role": "AGENT" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["role"], json!("AGENT"));

    // Her existing session now opens the agent surface
    let req = test::TestRequest::get()
        .uri("/api/v1/agent/tickets")
        .insert_header(bearer(&alice_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_stats_reflect_queue_and_system_views() {
    let alice = user("alice@example.com", "Alice", Role::User);
    let root = user("root@example.com", "Root", Role::Admin);
    let (alice_id, root_id) = (alice.id, root.id);
    let state = test_state(vec![alice, root]).await;
    let alice_token = token_for(&state, alice_id);
    let root_token = token_for(&state, root_id);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&alice_token))
        .set_json(ticket_payload("First"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/tickets")
        .insert_header(bearer(&alice_token))
        .set_json(ticket_payload("Second"))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let second = ticket_id_of(&body);

    // Admin closes one ticket
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/admin/tickets/{}", second))
        .insert_header(bearer(&root_token))
        .set_json(json!({ "status": "CLOSED" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    // Reporter dashboard counts the reporter's queue
    let req = test::TestRequest::get()
        .uri("/api/v1/tickets/stats")
        .insert_header(bearer(&alice_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], json!(2));
    assert_eq!(body["data"]["open"], json!(1));
    assert_eq!(body["data"]["recent"].as_array().map(|r| r.len()), Some(2));

    // Admin dashboard counts the whole system including closed
    let req = test::TestRequest::get()
        .uri("/api/v1/admin/stats")
        .insert_header(bearer(&root_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total"], json!(2));
    assert_eq!(body["data"]["closed"], json!(1));
    assert_eq!(body["data"]["urgent"], json!(0));
}
