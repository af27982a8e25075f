use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::submission::access_failure;
use super::views::TopicDetailView;

#[utoipa::path(
    get,
    path = "/topics/{slug}",
    tag = "learning_log",
    params(("slug" = String, Path, description = "Topic slug")),
    responses(
        (status = 200, description = "Topic with its entries, newest entry first", body = inline(SuccessResponse<TopicDetailView>)),
        (status = 303, description = "Not logged in, redirected to the login page", body = ErrorResponse),
        (status = 404, description = "No such topic among the caller's topics", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/topics/{slug}")]
pub async fn get_topic_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.learning_log.get_topic_detail(user.user_id, &slug).await {
        Ok(detail) => ApiResponse::success(TopicDetailView::from(detail)),
        Err(e) => access_failure(e, "TOPIC_NOT_FOUND", "Topic not found"),
    }
}
