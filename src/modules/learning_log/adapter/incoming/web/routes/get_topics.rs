use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::views::TopicListView;

#[utoipa::path(
    get,
    path = "/topics",
    tag = "learning_log",
    responses(
        (status = 200, description = "Topics of the caller, oldest first", body = inline(SuccessResponse<TopicListView>)),
        (status = 303, description = "Not logged in, redirected to the login page", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    security(("BearerAuth" = []))
)]
#[get("/topics")]
pub async fn get_topics_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.learning_log.list_topics(user.user_id).await {
        Ok(topics) => ApiResponse::success(TopicListView::from(topics)),
        Err(e) => {
            error!("Failed to list topics for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
