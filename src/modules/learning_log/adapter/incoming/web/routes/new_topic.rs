use actix_web::{get, post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::learning_log::application::forms::{FormWithErrors, TopicForm};
use crate::shared::api::{ApiResponse, RedirectBody};
use crate::AppState;

use super::submission::{redirect, submission_failure, FormCodes};

const TOPIC_FORM_CODES: FormCodes = FormCodes {
    duplicate: "DUPLICATE_TOPIC",
    not_found: "TOPIC_NOT_FOUND",
    not_found_message: "Topic not found",
};

#[utoipa::path(
    get,
    path = "/new_topic",
    tag = "learning_log",
    responses(
        (status = 200, description = "Blank topic form", body = inline(SuccessResponse<FormWithErrors<TopicForm>>)),
        (status = 303, description = "Not logged in, redirected to the login page", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/new_topic")]
pub async fn new_topic_form_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.learning_log.new_topic_form())
}

#[utoipa::path(
    post,
    path = "/new_topic",
    tag = "learning_log",
    request_body = TopicForm,
    responses(
        (status = 303, description = "Topic saved, continue at /topics", body = inline(SuccessResponse<RedirectBody>)),
        (status = 409, description = "Slug already used by one of the caller's topics; form returned with a notice", body = ErrorResponse),
        (status = 422, description = "Invalid fields; form returned with field errors", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/new_topic")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    form: web::Json<TopicForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .learning_log
        .create_topic(user.user_id, form.into_inner())
        .await
    {
        Ok(target) => redirect(target),
        Err(e) => submission_failure(e, &TOPIC_FORM_CODES),
    }
}
