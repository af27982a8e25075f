use actix_web::{get, post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::learning_log::application::forms::EntryForm;
use crate::shared::api::{ApiResponse, RedirectBody};
use crate::AppState;

use super::submission::{access_failure, redirect, submission_failure, FormCodes};
use super::views::EntryFormView;

const EDIT_ENTRY_CODES: FormCodes = FormCodes {
    duplicate: "DUPLICATE_ENTRY",
    not_found: "ENTRY_NOT_FOUND",
    not_found_message: "Entry not found",
};

#[utoipa::path(
    get,
    path = "/edit_entry/{topic_slug}/{entry_slug}",
    tag = "learning_log",
    params(
        ("topic_slug" = String, Path, description = "Slug of the parent topic"),
        ("entry_slug" = String, Path, description = "Slug of the entry within that topic")
    ),
    responses(
        (status = 200, description = "Entry form filled with the stored values", body = inline(SuccessResponse<EntryFormView>)),
        (status = 303, description = "Not logged in, redirected to the login page", body = ErrorResponse),
        (status = 404, description = "No such entry among the caller's topics", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/edit_entry/{topic_slug}/{entry_slug}")]
pub async fn edit_entry_form_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (topic_slug, entry_slug) = path.into_inner();

    match data
        .learning_log
        .edit_entry_form(user.user_id, &topic_slug, &entry_slug)
        .await
    {
        Ok(page) => ApiResponse::success(EntryFormView::from(page)),
        Err(e) => access_failure(
            e,
            EDIT_ENTRY_CODES.not_found,
            EDIT_ENTRY_CODES.not_found_message,
        ),
    }
}

#[utoipa::path(
    post,
    path = "/edit_entry/{topic_slug}/{entry_slug}",
    tag = "learning_log",
    params(
        ("topic_slug" = String, Path, description = "Slug of the parent topic"),
        ("entry_slug" = String, Path, description = "Slug of the entry within that topic")
    ),
    request_body = EntryForm,
    responses(
        (status = 303, description = "Entry updated, continue at the topic page", body = inline(SuccessResponse<RedirectBody>)),
        (status = 404, description = "No such entry among the caller's topics", body = ErrorResponse),
        (status = 409, description = "New slug already used in this topic; form returned with a notice", body = ErrorResponse),
        (status = 422, description = "Invalid fields; form returned with field errors", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[post("/edit_entry/{topic_slug}/{entry_slug}")]
pub async fn edit_entry_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    form: web::Json<EntryForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (topic_slug, entry_slug) = path.into_inner();

    match data
        .learning_log
        .edit_entry(user.user_id, &topic_slug, &entry_slug, form.into_inner())
        .await
    {
        Ok(target) => redirect(target),
        Err(e) => submission_failure(e.map_invalid(EntryFormView::from), &EDIT_ENTRY_CODES),
    }
}
