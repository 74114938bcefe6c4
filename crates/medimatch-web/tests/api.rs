//! End-to-end API tests against the built router.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use medimatch_dataset::DatasetIndex;
use medimatch_engine::{EngineOptions, Predictor};
use medimatch_web::router::build_router;
use medimatch_web::state::AppState;

fn test_router() -> axum::Router {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Disease,Symptom_1,Symptom_2,Symptom_3,Precaution_1,Medicine_x,Dosage_x,Medicine_y,Dosage_y,Severity_Score,Workout,Alternative_Therapies,Description"
    )
    .unwrap();
    writeln!(
        file,
        "Fungal infection,itching,skin_rash,nodal_skin_eruptions,keep dry,Clotrimazole,Twice daily,Clotrimazole syrup,Once daily,3,light walking,Tea tree oil,Fungal skin infection"
    )
    .unwrap();
    writeln!(
        file,
        "Pneumonia,cough,high_fever,chest_pain,seek care,Azithromycin,500mg daily,Amoxicillin syrup,By weight,8,rest,Steam therapy,Lung infection"
    )
    .unwrap();
    file.flush().unwrap();

    let index = Arc::new(DatasetIndex::load(file.path()).unwrap());
    build_router(AppState::new(Predictor::new(index, EngineOptions::default())))
}

fn degraded_router() -> axum::Router {
    build_router(AppState::new(Predictor::degraded(EngineOptions::default())))
}

async fn post_predict(router: axum::Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn predict_success_envelope() {
    let (status, body) = post_predict(
        test_router(),
        serde_json::json!({
            "symptoms": "itching, skin_rash",
            "profile": { "age": 30, "allergies": "", "medical_conditions": "" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["disease"], "Fungal infection");
    assert_eq!(body["data"]["probability"], 100.0);
    assert_eq!(body["data"]["medicine"], "Clotrimazole");
    assert_eq!(body["data"]["medical_history_match"], false);
}

#[tokio::test]
async fn unknown_symptoms_answer_info_not_error() {
    let (status, body) = post_predict(
        test_router(),
        serde_json::json!({
            "symptoms": "xyz_unknown_symptom",
            "profile": { "age": 30 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "info");
    assert_eq!(
        body["message"],
        "No strong matches found. Try more specific symptoms."
    );
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn blank_symptoms_answer_invalid_input_message() {
    let (status, body) = post_predict(
        test_router(),
        serde_json::json!({
            "symptoms": "  ,  ",
            "profile": { "age": 30 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "info");
    assert_eq!(body["message"], "Please enter at least one valid symptom");
}

#[tokio::test]
async fn allergy_conflict_substitutes_through_the_api() {
    let (status, body) = post_predict(
        test_router(),
        serde_json::json!({
            "symptoms": "cough, high_fever",
            "profile": { "age": 30, "allergies": "azithromycin", "medical_conditions": "" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["medicine"], "Consult doctor (allergy risk)");
    assert_eq!(body["data"]["dosage"], "Consult doctor");
    let recs = body["data"]["recommendations"].as_array().unwrap();
    assert!(recs[0].as_str().unwrap().starts_with("Allergy warning"));
}

#[tokio::test]
async fn child_profile_gets_child_tier() {
    let (_, body) = post_predict(
        test_router(),
        serde_json::json!({
            "symptoms": "cough, high_fever, chest_pain",
            "profile": { "age": 10 }
        }),
    )
    .await;

    assert_eq!(body["data"]["medicine"], "Amoxicillin syrup");
    assert_eq!(body["data"]["dosage"], "By weight");
}

#[tokio::test]
async fn degraded_service_answers_initializing_message() {
    let (status, body) = post_predict(
        degraded_router(),
        serde_json::json!({
            "symptoms": "itching",
            "profile": { "age": 30 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "info");
    assert_eq!(body["message"], "System is initializing. Please try again shortly.");
}

#[tokio::test]
async fn health_reports_readiness() {
    let response = test_router()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["dataset_loaded"], true);
    assert_eq!(body["records"], 2);

    let response = degraded_router()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["dataset_loaded"], false);
}

#[tokio::test]
async fn dataset_stats_reports_index_shape() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/dataset/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["records"], 2);
    assert_eq!(body["symptom_vocabulary"], 6);
}
