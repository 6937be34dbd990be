use crate::app_container::Application;
use crate::authentication::SESSION_COOKIE;
use crate::routes::see_other;
use access_gate::SignOutOutcome;
use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use travel_info::summary::FORM_PATH;
use url::Url;

/// Path and query of the page the sign-out button was pressed on.
fn return_path(req: &HttpRequest) -> String {
    req.headers()
        .get(header::REFERER)
        .and_then(|referer| referer.to_str().ok())
        .and_then(|referer| Url::parse(referer).ok())
        .map(|referer| match referer.query() {
            Some(query) => format!("{}?{query}", referer.path()),
            None => referer.path().to_owned(),
        })
        .unwrap_or_else(|| FORM_PATH.to_owned())
}

#[tracing::instrument(skip(app, req), level = "info")]
async fn sign_out(app: web::Data<Application>, req: HttpRequest) -> HttpResponse {
    let (state, decision) = app.access(&req);
    if !decision.can_sign_out() {
        return see_other(&return_path(&req));
    }

    match app.sign_out.sign_out(&state).await {
        SignOutOutcome::NavigateTo(path) => {
            let mut removal = Cookie::build(SESSION_COOKIE, "").path("/").finish();
            removal.make_removal();
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, path))
                .cookie(removal)
                .finish()
        }
        SignOutOutcome::StayOnPage => see_other(&return_path(&req)),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/sign-out").route(web::post().to(sign_out)));
}
