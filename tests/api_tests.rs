use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use production_scheduling::api::create_app;
use production_scheduling::config::environment::EnvironmentConfig;
use production_scheduling::state::AppState;
use production_scheduling::store::ProductionStore;

// Función helper para crear la app de test con los datos sembrados
fn create_test_app() -> TestServer {
    let state = AppState::new(ProductionStore::seeded(), EnvironmentConfig::default());
    TestServer::new(create_app(state)).expect("test server")
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["service"], "production-scheduling");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_reference_data() {
    let app = create_test_app();

    let departments: serde_json::Value = app.get("/api/departments").await.json();
    assert_eq!(departments.as_array().unwrap().len(), 3);
    assert_eq!(departments[0]["name"], "Machining Shop");

    let sections: serde_json::Value = app.get("/api/sections").await.json();
    assert_eq!(sections.as_array().unwrap().len(), 5);
    assert_eq!(sections[0]["departmentId"], 1);

    let users: serde_json::Value = app.get("/api/users").await.json();
    assert_eq!(users.as_array().unwrap().len(), 4);
    assert_eq!(users[3]["role"], "administrator");
}

#[tokio::test]
async fn test_create_operation_assigns_id_and_timestamps() {
    let app = create_test_app();

    let response = app
        .post("/api/operations")
        .json(&json!({
            "departmentId": 1,
            "sectionId": 2,
            "operationType": "Milling",
            "operationNumber": "FRZ-310",
            "technology": "Contour milling",
            "defaultDurationMin": 75,
            "colorHex": "#34D399"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: serde_json::Value = response.json();
    assert_eq!(created["id"], 6);
    assert_eq!(created["operationNumber"], "FRZ-310");
    assert!(created["createdAt"].is_string());

    let operations: serde_json::Value = app.get("/api/operations").await.json();
    assert_eq!(operations.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_create_operation_rejects_invalid_input() {
    let app = create_test_app();

    // Duración no positiva
    let response = app
        .post("/api/operations")
        .json(&json!({
            "departmentId": 1,
            "sectionId": 1,
            "operationType": "Turning",
            "operationNumber": "TOK-900",
            "technology": "Surface machining",
            "defaultDurationMin": 0,
            "colorHex": "#93C5FD"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Color fuera de formato #RRGGBB
    let response = app
        .post("/api/operations")
        .json(&json!({
            "departmentId": 1,
            "sectionId": 1,
            "operationType": "Turning",
            "operationNumber": "TOK-900",
            "technology": "Surface machining",
            "defaultDurationMin": 60,
            "colorHex": "blue"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_route_card_assigns_step_ids_and_never_starts_scheduled() {
    let app = create_test_app();

    let response = app
        .post("/api/route-cards")
        .json(&json!({
            "orderNumber": "ORD-1003",
            "routeCardNumber": "RC-5003",
            "responsibleEngineer": 1,
            "status": "draft",
            // El flag del request se ignora: las tarjetas nunca nacen planificadas
            "scheduled": true,
            "steps": [
                {
                    "departmentId": 1,
                    "sectionId": 1,
                    "operationType": "Turning",
                    "operationNumber": "TOK-101",
                    "technology": "Surface machining",
                    "requiredDurationMin": 90
                },
                {
                    "departmentId": 2,
                    "sectionId": 3,
                    "operationType": "Assembly",
                    "operationNumber": "SB-310",
                    "technology": "Complex assembly",
                    "requiredDurationMin": 180
                }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let card: serde_json::Value = response.json();
    assert_eq!(card["id"], 3);
    assert_eq!(card["status"], "draft");
    assert_eq!(card["scheduled"], false);

    let steps = card["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    for step in steps {
        assert_eq!(step["routeCardId"], card["id"]);
    }
}

#[tokio::test]
async fn test_create_route_card_rejects_empty_steps() {
    let app = create_test_app();

    let response = app
        .post("/api/route-cards")
        .json(&json!({
            "orderNumber": "ORD-1004",
            "routeCardNumber": "RC-5004",
            "responsibleEngineer": 1,
            "steps": []
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_route_card_status() {
    let app = create_test_app();

    let response = app
        .patch("/api/route-cards/2")
        .json(&json!({ "status": "approved" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let card: serde_json::Value = response.json();
    assert_eq!(card["status"], "approved");
    // Sin flag explícito, scheduled se conserva
    assert_eq!(card["scheduled"], false);

    let response = app
        .patch("/api/route-cards/2")
        .json(&json!({ "status": "draft", "scheduled": true }))
        .await;
    let card: serde_json::Value = response.json();
    assert_eq!(card["status"], "draft");
    assert_eq!(card["scheduled"], true);
}

#[tokio::test]
async fn test_update_route_card_status_unknown_id_is_not_found() {
    let app = create_test_app();

    let response = app
        .patch("/api/route-cards/999")
        .json(&json!({ "status": "approved" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");

    // Ninguna tarjeta existente cambió
    let cards: serde_json::Value = app.get("/api/route-cards").await.json();
    assert_eq!(cards[1]["status"], "draft");
}

#[tokio::test]
async fn test_plan_route_card_replaces_schedule_and_approves() {
    let app = create_test_app();

    // La tarjeta 2 está en borrador con los pasos 4, 5 y 6
    let response = app
        .post("/api/schedule")
        .json(&json!({
            "id": 2,
            "items": [
                {
                    "stepId": 4,
                    "sectionId": 1,
                    "startDateTime": "2026-03-11T08:00:00Z",
                    "endDateTime": "2026-03-11T09:00:00Z"
                },
                {
                    "stepId": 5,
                    "sectionId": 4,
                    "startDateTime": "2026-03-11T09:00:00Z",
                    "endDateTime": "2026-03-11T11:30:00Z"
                }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    let cards: serde_json::Value = app.get("/api/route-cards").await.json();
    assert_eq!(cards[1]["status"], "approved");
    assert_eq!(cards[1]["scheduled"], true);

    // Replanificar con un único item disjunto reemplaza el plan entero
    let response = app
        .post("/api/schedule")
        .json(&json!({
            "id": 2,
            "items": [
                {
                    "stepId": 6,
                    "sectionId": 5,
                    "startDateTime": "2026-03-12T08:00:00Z",
                    "endDateTime": "2026-03-12T11:30:00Z"
                }
            ]
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let schedule: serde_json::Value = app.get("/api/schedule").await.json();
    let card_two_items: Vec<_> = schedule
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["routeCardId"] == 2)
        .collect();
    assert_eq!(card_two_items.len(), 1);
    assert_eq!(card_two_items[0]["routeCardStepId"], 6);
}

#[tokio::test]
async fn test_plan_route_card_unknown_id_is_not_found() {
    let app = create_test_app();

    let response = app
        .post("/api/schedule")
        .json(&json!({ "id": 999, "items": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_plan_route_card_rejects_inverted_interval() {
    let app = create_test_app();

    let response = app
        .post("/api/schedule")
        .json(&json!({
            "id": 2,
            "items": [
                {
                    "stepId": 4,
                    "sectionId": 1,
                    "startDateTime": "2026-03-11T10:00:00Z",
                    "endDateTime": "2026-03-11T08:00:00Z"
                }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");

    // Nada se aplicó: la tarjeta 2 sigue en borrador y sin items propios
    let cards: serde_json::Value = app.get("/api/route-cards").await.json();
    assert_eq!(cards[1]["status"], "draft");
    let schedule: serde_json::Value = app.get("/api/schedule").await.json();
    assert!(schedule
        .as_array()
        .unwrap()
        .iter()
        .all(|item| item["routeCardId"] != 2));
}

#[tokio::test]
async fn test_schedule_filter_by_section() {
    let app = create_test_app();

    let schedule: serde_json::Value = app.get("/api/schedule").await.json();
    assert_eq!(schedule.as_array().unwrap().len(), 3);

    let filtered: serde_json::Value = app
        .get("/api/schedule")
        .add_query_param("sectionId", "1")
        .await
        .json();
    assert_eq!(filtered.as_array().unwrap().len(), 1);
    assert_eq!(filtered[0]["sectionId"], 1);
}

#[tokio::test]
async fn test_analytics_summary() {
    let app = create_test_app();

    let response = app.get("/api/route-cards/analytics").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let summary: serde_json::Value = response.json();
    assert_eq!(summary["totalCards"], 2);
    assert_eq!(summary["draftCards"], 1);
    assert_eq!(summary["approvedCards"], 1);
    assert_eq!(summary["scheduledCards"], 1);
    // (90 + 120 + 180 + 150 + 200) / 5 = 148
    assert_eq!(summary["averageDuration"], 148);

    // Plan sembrado: 2h en sección 1, 3h en sección 2, 4h en sección 3
    let loads = summary["sectionsLoad"].as_array().unwrap();
    assert_eq!(loads.len(), 5);
    assert_eq!(loads[0]["loadPercent"], 25);
    assert_eq!(loads[1]["loadPercent"], 38);
    assert_eq!(loads[2]["loadPercent"], 50);
    assert_eq!(loads[3]["loadPercent"], 0);
    assert_eq!(loads[4]["loadPercent"], 0);
}
