use super::require_non_empty;
use crate::error::AppResult;
use crate::storage::SharedStorage;
use actix_web::{delete, get, post, web, HttpResponse};
use qa_types::CreateAnswerRequest;
use tracing::info;

#[post("/answers/{question_id}")]
pub async fn create_answer(
    question_id: web::Path<i64>,
    storage: web::Data<SharedStorage>,
    request: web::Json<CreateAnswerRequest>,
) -> AppResult<HttpResponse> {
    let question_id = question_id.into_inner();
    let request = request.into_inner();
    require_non_empty("text", &request.text)?;
    require_non_empty("user_id", &request.user_id)?;

    let answer = storage
        .create_answer(question_id, &request.text, &request.user_id)
        .await?;
    info!(
        question_id,
        answer_id = answer.id,
        user_id = %answer.user_id,
        "Created answer"
    );

    Ok(HttpResponse::Created().json(answer))
}

#[get("/answers/{answer_id}")]
pub async fn get_answer(
    answer_id: web::Path<i64>,
    storage: web::Data<SharedStorage>,
) -> AppResult<HttpResponse> {
    let id = answer_id.into_inner();

    let answer = storage.get_answer(id).await?;
    info!(answer_id = id, "Retrieved answer");

    Ok(HttpResponse::Ok().json(answer))
}

#[delete("/answers/{answer_id}")]
pub async fn delete_answer(
    answer_id: web::Path<i64>,
    storage: web::Data<SharedStorage>,
) -> AppResult<HttpResponse> {
    let id = answer_id.into_inner();

    storage.delete_answer(id).await?;
    info!(answer_id = id, "Deleted answer");

    Ok(HttpResponse::NoContent().finish())
}
