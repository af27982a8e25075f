use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteLink {
    #[schema(example = "topics")]
    pub name: &'static str,
    #[schema(example = "/topics")]
    pub path: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IndexView {
    #[schema(example = "Learning Log")]
    pub name: &'static str,
    pub description: &'static str,
    pub routes: Vec<RouteLink>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "learning_log",
    responses(
        (status = 200, description = "Application home", body = inline(SuccessResponse<IndexView>))
    )
)]
#[get("/")]
pub async fn index_handler() -> impl Responder {
    ApiResponse::success(IndexView {
        name: "Learning Log",
        description: "Keep a journal of the topics you are learning about.",
        routes: vec![
            RouteLink {
                name: "topics",
                path: "/topics",
            },
            RouteLink {
                name: "topic",
                path: "/topics/{slug}",
            },
            RouteLink {
                name: "new_topic",
                path: "/new_topic",
            },
            RouteLink {
                name: "new_entry",
                path: "/new_entry/{topic_slug}",
            },
            RouteLink {
                name: "edit_entry",
                path: "/edit_entry/{topic_slug}/{entry_slug}",
            },
        ],
    })
}
