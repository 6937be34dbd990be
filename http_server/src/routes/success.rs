use crate::views::html;
use crate::views::summary::summary_page;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use travel_info::submission::RESULTS_PATH;
use travel_info::summary::edit_path;
use travel_info::TravelSummary;

#[tracing::instrument(skip(req), level = "info")]
async fn success(req: HttpRequest) -> HttpResponse {
    let raw_query = req.query_string();
    let summary = TravelSummary::decode(raw_query);
    html(StatusCode::OK, summary_page(&summary, &edit_path(raw_query)))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(RESULTS_PATH).route(web::get().to(success)));
}
