use actix_web::{get, post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::learning_log::application::forms::EntryForm;
use crate::shared::api::{ApiResponse, RedirectBody};
use crate::AppState;

use super::submission::{access_failure, redirect, submission_failure, FormCodes};
use super::views::EntryFormView;

const NEW_ENTRY_CODES: FormCodes = FormCodes {
    duplicate: "DUPLICATE_ENTRY",
    not_found: "TOPIC_NOT_FOUND",
    not_found_message: "Topic not found",
};

#[utoipa::path(
    get,
    path = "/new_entry/{topic_slug}",
    tag = "learning_log",
    params(("topic_slug" = String, Path, description = "Slug of the topic to add to")),
    responses(
        (status = 200, description = "Blank entry form for the topic", body = inline(SuccessResponse<EntryFormView>)),
        (status = 303, description = "Not logged in, redirected to the login page", body = ErrorResponse),
        (status = 404, description = "No such topic among the caller's topics", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/new_entry/{topic_slug}")]
pub async fn new_entry_form_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_slug = path.into_inner();

    match data
        .learning_log
        .new_entry_form(user.user_id, &topic_slug)
        .await
    {
        Ok(page) => ApiResponse::success(EntryFormView::from(page)),
        Err(e) => access_failure(e, NEW_ENTRY_CODES.not_found, NEW_ENTRY_CODES.not_found_message),
    }
}

#[utoipa::path(
    post,
    path = "/new_entry/{topic_slug}",
    tag = "learning_log",
    params(("topic_slug" = String, Path, description = "Slug of the topic to add to")),
    request_body = EntryForm,
    responses(
        (status = 303, description = "Entry saved, continue at the topic page", body = inline(SuccessResponse<RedirectBody>)),
        (status = 404, description = "No such topic among the caller's topics", body = ErrorResponse),
        (status = 409, description = "Slug already used in this topic; form returned with a notice", body = ErrorResponse),
        (status = 422, description = "Invalid fields; form returned with field errors", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/new_entry/{topic_slug}")]
pub async fn create_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    form: web::Json<EntryForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let topic_slug = path.into_inner();

    match data
        .learning_log
        .create_entry(user.user_id, &topic_slug, form.into_inner())
        .await
    {
        Ok(target) => redirect(target),
        Err(e) => submission_failure(e.map_invalid(EntryFormView::from), &NEW_ENTRY_CODES),
    }
}
