use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CheckOpenAnswerRequestDto, GenerateQuestionsRequestDto},
};

#[post("/api/generate_questions")]
async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequestDto>,
) -> Result<HttpResponse, AppError> {
    let dto = request.into_inner();
    dto.validate()?;

    let result = state
        .question_service
        .generate_questions(&dto.into())
        .await;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/api/check_open_answer")]
async fn check_open_answer(
    state: web::Data<AppState>,
    request: web::Json<CheckOpenAnswerRequestDto>,
) -> Result<HttpResponse, AppError> {
    let dto = request.into_inner();
    dto.validate()?;

    let score = state
        .scoring_service
        .check_open_answer(&dto.text, &dto.question, &dto.answer)
        .await;
    Ok(HttpResponse::Ok().json(score))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
