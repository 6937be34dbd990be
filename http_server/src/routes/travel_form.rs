use crate::app_container::Application;
use crate::errors::ApiError;
use crate::routes::see_other;
use crate::views::form::travel_form_page;
use crate::views::gate::{access_restricted_page, loading_page};
use crate::views::html;
use access_gate::AccessDecision;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use travel_info::query_string::QueryParams;
use travel_info::submission::results_path;
use travel_info::{FieldUpdate, FormStateStore};

/// Page for callers the gate does not let through, if any.
fn gate_page(app: &Application, decision: &AccessDecision) -> Option<HttpResponse> {
    match decision {
        AccessDecision::Loading => Some(html(StatusCode::OK, loading_page())),
        AccessDecision::Denied(reason) => Some(html(
            StatusCode::OK,
            access_restricted_page(&app.gate.denial_messages(*reason)),
        )),
        AccessDecision::Allowed { .. } => None,
    }
}

#[tracing::instrument(skip(app, req), level = "info")]
async fn travel_form(app: web::Data<Application>, req: HttpRequest) -> HttpResponse {
    let (_, decision) = app.access(&req);
    if let Some(page) = gate_page(&app, &decision) {
        return page;
    }

    let mut store = FormStateStore::new();
    store.hydrate_from(req.query_string());
    html(
        StatusCode::OK,
        travel_form_page(store.current(), &app.arrival_window, &[]),
    )
}

#[tracing::instrument(err, skip(app, req, body), level = "info")]
async fn submit(
    body: web::Bytes,
    app: web::Data<Application>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let (_, decision) = app.access(&req);
    if !matches!(decision, AccessDecision::Allowed { .. }) {
        return Ok(see_other("/"));
    }

    let params = QueryParams::parse_strict(&String::from_utf8_lossy(&body))?;
    let store: FormStateStore = params
        .pairs()
        .filter_map(|(name, value)| FieldUpdate::from_form_pair(name, value))
        .collect();
    let info = store.into_inner();

    match info.validate(&app.arrival_window) {
        Ok(()) => {
            tracing::info!(
                destination = %info.destination,
                arrival_date = %info.arrival_date,
                "Travel details submitted"
            );
            Ok(see_other(&results_path(&info)))
        }
        Err(problems) => {
            tracing::info!(problems = problems.len(), "Rejected incomplete submission");
            Ok(html(
                StatusCode::UNPROCESSABLE_ENTITY,
                travel_form_page(&info, &app.arrival_window, &problems),
            ))
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(travel_form)))
        .service(web::resource("/submit").route(web::post().to(submit)));
}
