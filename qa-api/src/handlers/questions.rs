use super::require_non_empty;
use crate::error::AppResult;
use crate::storage::SharedStorage;
use actix_web::{delete, get, post, web, HttpResponse};
use qa_types::CreateQuestionRequest;
use tracing::info;

#[post("/questions")]
pub async fn create_question(
    storage: web::Data<SharedStorage>,
    request: web::Json<CreateQuestionRequest>,
) -> AppResult<HttpResponse> {
    let request = request.into_inner();
    require_non_empty("text", &request.text)?;

    let question = storage.create_question(&request.text).await?;
    info!(question_id = question.id, "Created question");

    Ok(HttpResponse::Created().json(question))
}

#[get("/questions")]
pub async fn list_questions(storage: web::Data<SharedStorage>) -> AppResult<HttpResponse> {
    let questions = storage.list_questions().await?;
    info!(question_count = questions.len(), "Listed questions");

    Ok(HttpResponse::Ok().json(questions))
}

#[get("/questions/{question_id}")]
pub async fn get_question(
    question_id: web::Path<i64>,
    storage: web::Data<SharedStorage>,
) -> AppResult<HttpResponse> {
    let id = question_id.into_inner();

    let question = storage.get_question_with_answers(id).await?;
    info!(
        question_id = id,
        answer_count = question.answers.len(),
        "Retrieved question"
    );

    Ok(HttpResponse::Ok().json(question))
}

#[delete("/questions/{question_id}")]
pub async fn delete_question(
    question_id: web::Path<i64>,
    storage: web::Data<SharedStorage>,
) -> AppResult<HttpResponse> {
    let id = question_id.into_inner();

    storage.delete_question(id).await?;
    info!(question_id = id, "Deleted question and its answers");

    Ok(HttpResponse::NoContent().finish())
}
