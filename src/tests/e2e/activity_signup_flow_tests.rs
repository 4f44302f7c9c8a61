use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use tower::ServiceExt;

use crate::modules::activities::core::seed::seed_activities;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;

#[fixture]
fn app() -> Router {
    let config = AppConfig::default();
    router(AppState::seeded(&config), &config)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn spots_left(app: &Router, activity: &str) -> i64 {
    let (_, activities) = send(app, "GET", "/activities").await;
    let details = &activities[activity];
    details["max_participants"].as_i64().unwrap()
        - details["participants"].as_array().unwrap().len() as i64
}

#[rstest]
#[tokio::test]
async fn lists_every_seeded_activity(app: Router) {
    let (status, activities) = send(&app, "GET", "/activities").await;

    assert_eq!(status, StatusCode::OK);
    for (name, _) in seed_activities() {
        assert!(activities.get(&name).is_some(), "missing {name}");
    }
}

#[rstest]
#[tokio::test]
async fn signs_up_once_and_rejects_the_duplicate(app: Router) {
    let uri = "/activities/Chess%20Club/signup?email=testuser@example.com";

    let (status, _) = send(&app, "POST", uri).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Student already signed up for this activity");

    let (_, activities) = send(&app, "GET", "/activities").await;
    let matching = activities["Chess Club"]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| *p == "testuser@example.com")
        .count();
    assert_eq!(matching, 1);
}

#[rstest]
#[tokio::test]
async fn unregisters_once_and_reports_the_second_attempt_as_not_found(app: Router) {
    let uri = "/activities/Programming%20Class/participants?email=sophia@mergington.edu";

    let (status, _) = send(&app, "DELETE", uri).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "DELETE", uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn availability_follows_signup_and_unregister(app: Router) {
    let before = spots_left(&app, "Math Olympiad").await;

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Math%20Olympiad/signup?email=availability_test@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(spots_left(&app, "Math Olympiad").await, before - 1);

    let (status, _) = send(
        &app,
        "DELETE",
        "/activities/Math%20Olympiad/participants?email=availability_test@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(spots_left(&app, "Math Olympiad").await, before);
}

#[rstest]
#[tokio::test]
async fn rejects_signups_to_a_full_activity_when_capacity_is_enforced() {
    let config = AppConfig {
        enforce_capacity: true,
        ..AppConfig::default()
    };
    let app = router(AppState::seeded(&config), &config);

    // Math Olympiad seeds 2 of 10 spots.
    for i in 0..8 {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Math%20Olympiad/signup?email=student{i}@mergington.edu"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(spots_left(&app, "Math Olympiad").await, 0);

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Math%20Olympiad/signup?email=latecomer@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is full");
}

#[rstest]
#[tokio::test]
async fn overfills_a_full_activity_when_capacity_is_not_enforced(app: Router) {
    for i in 0..9 {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Math%20Olympiad/signup?email=student{i}@mergington.edu"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, activities) = send(&app, "GET", "/activities").await;
    assert_eq!(
        activities["Math Olympiad"]["participants"]
            .as_array()
            .unwrap()
            .len(),
        11
    );
    assert_eq!(spots_left(&app, "Math Olympiad").await, -1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn serves_many_concurrent_signups_and_unregisters_without_errors(app: Router) {
    let before = spots_left(&app, "Basketball Team").await;

    let signups: Vec<_> = (0..100)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    "POST",
                    &format!("/activities/Basketball%20Team/signup?email=player{i}@mergington.edu"),
                )
                .await
                .0
            })
        })
        .collect();
    for task in signups {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }
    assert_eq!(spots_left(&app, "Basketball Team").await, before - 100);

    let unregisters: Vec<_> = (0..100)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    "DELETE",
                    &format!(
                        "/activities/Basketball%20Team/participants?email=player{i}@mergington.edu"
                    ),
                )
                .await
                .0
            })
        })
        .collect();
    for task in unregisters {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }
    assert_eq!(spots_left(&app, "Basketball Team").await, before);
}
