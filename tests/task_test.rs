mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use time::Duration;

use common::{Factory, TestApp, TODAY};

fn day(offset: i64) -> String {
    (TODAY + Duration::days(offset)).to_string()
}

fn task_body(title: &str, due_date: &str) -> Value {
    json!({
        "title": title,
        "project_id": 1,
        "due_date": due_date
    })
}

#[tokio::test]
async fn test_create_task_with_defaults() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/task")
        .json(&task_body("Write release notes", &day(3)))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "message": "Task created successfully" }));

    let body: Value = app.server.get("/task/1").await.json();
    assert_eq!(body["title"], "Write release notes");
    assert_eq!(body["status"], "To Do");
    assert_eq!(body["priority"], "Medium");
    assert_eq!(body["project_id"], 1);
    assert_eq!(body["due_date"], day(3));
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn test_empty_optional_strings_fall_back_to_defaults() {
    let app = TestApp::new().await;
    let blank = json!({
        "title": "t",
        "description": "",
        "status": "",
        "priority": "",
        "project_id": 1,
        "due_date": day(0)
    });

    app.server
        .post("/task")
        .json(&blank)
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = app.server.get("/task/1").await.json();
    assert_eq!(body["status"], "To Do");
    assert_eq!(body["priority"], "Medium");
    assert!(body["description"].is_null());

    app.server
        .put("/task/1")
        .json(&json!({
            "title": "t2",
            "description": "now described",
            "status": "Done",
            "priority": "High",
            "project_id": 1,
            "due_date": day(0)
        }))
        .await
        .assert_status_ok();
    app.server
        .put("/task/1")
        .json(&blank)
        .await
        .assert_status_ok();

    let body: Value = app.server.get("/task/1").await.json();
    assert_eq!(body["title"], "t");
    assert_eq!(body["status"], "To Do");
    assert_eq!(body["priority"], "Medium");
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn test_create_task_accepts_client_timestamps() {
    let app = TestApp::new().await;

    for due_date in [
        format!("{}T10:00Z", day(1)),
        format!("{}T10:00:00.000", day(1)),
        format!("{}T10:00:00.000Z", day(1)),
    ] {
        app.server
            .post("/task")
            .json(&task_body("Stamped", &due_date))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let body: Value = app.server.get("/task").await.json();
    let tasks = body.as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    assert!(tasks.iter().all(|t| t["due_date"] == day(1)));
}

#[tokio::test]
async fn test_create_task_due_today_succeeds_yesterday_fails() {
    let app = TestApp::new().await;

    app.server
        .post("/task")
        .json(&task_body("Today", &day(0)))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app
        .server
        .post("/task")
        .json(&task_body("Yesterday", &day(-1)))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Due date cannot be in the past" }));
}

#[tokio::test]
async fn test_create_task_validation_messages() {
    let app = TestApp::new().await;
    let future = day(10);

    let cases = [
        (json!({ "title": " ", "project_id": 1, "due_date": future }), "Task title is required"),
        (json!({ "project_id": 1, "due_date": future }), "Task title is required"),
        (json!({ "title": "ok", "due_date": future }), "Project ID is required"),
        (
            json!({ "title": "t".repeat(256), "project_id": 1, "due_date": future }),
            "Title must be 255 characters or less",
        ),
        (
            json!({
                "title": "ok",
                "description": "d".repeat(1001),
                "project_id": 1,
                "due_date": future
            }),
            "Description must be 1000 characters or less",
        ),
        (json!({ "title": "ok", "project_id": 1 }), "Valid due date is required"),
        (
            json!({ "title": "ok", "project_id": 1, "due_date": "not a date" }),
            "Valid due date is required",
        ),
    ];

    for (body, message) in cases {
        let response = app.server.post("/task").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": message }));
    }

    let all: Value = app.server.get("/task").await.json();
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_task_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get("/task/77").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "message": "Task not found" }));
}

#[tokio::test]
async fn test_list_tasks_filters() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let project = factory.create_project("Filters").await;

    factory.create_task(project.id, "Done", "High", &day(1)).await;
    factory.create_task(project.id, "Done", "Low", &day(1)).await;
    factory.create_task(project.id, "To Do", "High", &day(2)).await;

    let all: Value = app.server.get("/task").await.json();
    assert_eq!(all.as_array().unwrap().len(), 3);

    let response = app
        .server
        .get("/task")
        .add_query_param("status", "Done")
        .add_query_param("priority", "High")
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let tasks = body.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["status"], "Done");
    assert_eq!(tasks[0]["priority"], "High");

    let by_date: Value = app
        .server
        .get("/task")
        .add_query_param("dueDate", format!("{}T17:30:00Z", day(2)))
        .await
        .json();
    assert_eq!(by_date.as_array().unwrap().len(), 1);
    assert_eq!(by_date[0]["status"], "To Do");
}

#[tokio::test]
async fn test_list_tasks_rejects_bad_due_date_filter() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/task")
        .add_query_param("dueDate", "next week")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_tasks_by_project() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let first = factory.create_project("First").await;
    let second = factory.create_project("Second").await;

    factory.create_task(first.id, "To Do", "High", &day(1)).await;
    factory.create_task(first.id, "Done", "Low", &day(1)).await;
    factory.create_task(second.id, "To Do", "Low", &day(1)).await;

    let body: Value = app
        .server
        .get("/task/by-project/filter")
        .add_query_param("projectId", first.id)
        .await
        .json();
    let tasks = body.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t["project_id"] == first.id));

    let empty = app
        .server
        .get("/task/by-project/filter")
        .add_query_param("projectId", 999)
        .await;
    empty.assert_status_ok();
    empty.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_tasks_by_project_requires_id() {
    let app = TestApp::new().await;

    let response = app.server.get("/task/by-project/filter").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Project ID is required" }));
}

#[tokio::test]
async fn test_list_tasks_by_project_rejects_empty_and_non_integer_id() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    factory.create_task(1, "To Do", "Low", &day(1)).await;

    for raw in ["", "abc", "1.5"] {
        let response = app
            .server
            .get("/task/by-project/filter")
            .add_query_param("projectId", raw)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "message": "Project ID is required" }));
    }
}

#[tokio::test]
async fn test_update_task_round_trip() {
    let app = TestApp::new().await;
    let body = json!({
        "title": "Review",
        "description": "Read the draft",
        "status": "In Progress",
        "priority": "High",
        "project_id": 4,
        "due_date": day(5)
    });

    app.server
        .post("/task")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);
    let before: Value = app.server.get("/task/1").await.json();

    let response = app.server.put("/task/1").json(&body).await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Task updated successfully" }));

    let after: Value = app.server.get("/task/1").await.json();
    assert_eq!(before, after);
    assert_eq!(after["description"], "Read the draft");
    assert_eq!(after["project_id"], 4);
}

#[tokio::test]
async fn test_update_task_resets_omitted_fields_to_defaults() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let task = factory.create_task(1, "Done", "High", &day(1)).await;

    app.server
        .put(&format!("/task/{}", task.id))
        .json(&task_body("Reopened", &day(1)))
        .await
        .assert_status_ok();

    let body: Value = app.server.get(&format!("/task/{}", task.id)).await.json();
    assert_eq!(body["title"], "Reopened");
    assert_eq!(body["status"], "To Do");
    assert_eq!(body["priority"], "Medium");
}

#[tokio::test]
async fn test_update_task_allows_past_due_date() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let task = factory.create_task(1, "To Do", "Low", &day(1)).await;

    app.server
        .put(&format!("/task/{}", task.id))
        .json(&task_body("Backdated", &day(-30)))
        .await
        .assert_status_ok();

    let body: Value = app.server.get(&format!("/task/{}", task.id)).await.json();
    assert_eq!(body["due_date"], day(-30));
}

#[tokio::test]
async fn test_update_task_validation() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let task = factory.create_task(1, "To Do", "Low", &day(1)).await;
    let path = format!("/task/{}", task.id);

    let response = app.server.put(&path).json(&task_body("", &day(1))).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "message": "Task title is required and must be <= 255 characters"
    }));

    let response = app.server.put(&path).json(&task_body("ok", "31/12/2026")).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "message": "Valid due date is required" }));
}

#[tokio::test]
async fn test_update_and_delete_missing_task() {
    let app = TestApp::new().await;

    let response = app
        .server
        .put("/task/55")
        .json(&task_body("Ghost", &day(1)))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "message": "Task not found" }));

    let response = app.server.delete("/task/55").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "message": "Task not found" }));
}

#[tokio::test]
async fn test_delete_task() {
    let app = TestApp::new().await;
    let factory = Factory::new(&app.state);
    let task = factory.create_task(1, "To Do", "Low", &day(1)).await;

    let response = app.server.delete(&format!("/task/{}", task.id)).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Task deleted successfully" }));
    app.server
        .get(&format!("/task/{}", task.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_returns_generic_500() {
    let app = TestApp::new().await;
    app.store.set_unavailable(true).await;

    let response = app
        .server
        .post("/task")
        .json(&task_body("Valid", &day(1)))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error creating task" }));

    let response = app.server.get("/task").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "Error fetching tasks" }));

    // validation still runs first
    let response = app.server.post("/task").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
