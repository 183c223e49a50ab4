//! Route table shared by the server binary and the integration tests.

use crate::error::AppError;
use crate::handlers::{answers, health, questions};
use actix_cors::Cors;
use actix_web::{http::header, web};

/// Registers every endpoint. Question and answer routes are mounted under
/// `path_prefix` (empty for the root); health probes always live at the root.
pub fn configure_routes(cfg: &mut web::ServiceConfig, path_prefix: &str) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health::health_check)
        .service(health::version_info)
        .service(
            web::scope(path_prefix)
                .service(questions::create_question)
                .service(questions::list_questions)
                .service(questions::get_question)
                .service(questions::delete_question)
                .service(answers::create_answer)
                .service(answers::get_answer)
                .service(answers::delete_answer),
        );
}

/// Malformed or incomplete JSON bodies are reported as 422 with a `detail`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
