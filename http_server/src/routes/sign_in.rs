use crate::app_container::Application;
use crate::routes::see_other;
use crate::views::gate::loading_page;
use crate::views::html;
use crate::views::sign_in::sign_in_page;
use access_gate::sign_out::SIGN_IN_PATH;
use access_gate::AuthState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use travel_info::summary::FORM_PATH;
use url::Url;

/// Hosted sign-in link that sends the caller back to the form afterwards.
fn hosted_sign_in(app: &Application, req: &HttpRequest) -> Url {
    let connection = req.connection_info();
    let return_to = format!("{}://{}{FORM_PATH}", connection.scheme(), connection.host());
    let mut url = app.sign_in_url.clone();
    url.query_pairs_mut().append_pair("redirect_url", &return_to);
    url
}

#[tracing::instrument(skip(app, req), level = "info")]
async fn sign_in(app: web::Data<Application>, req: HttpRequest) -> HttpResponse {
    match app.sessions.auth_state(&req) {
        AuthState::Loading => html(StatusCode::OK, loading_page()),
        AuthState::SignedIn { .. } => see_other(FORM_PATH),
        AuthState::SignedOut => html(
            StatusCode::OK,
            sign_in_page(&hosted_sign_in(&app, &req), &app.gate.institution().name),
        ),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(SIGN_IN_PATH).route(web::get().to(sign_in)));
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{application, signed_in};
    use access_gate::AuthState;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_signed_out_callers_get_the_hosted_sign_in_link() {
        let app = test::init_service(
            App::new()
                .app_data(application(AuthState::SignedOut, true))
                .configure(crate::routes::config),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/sign-in")
            .insert_header((header::HOST, "bearforce.example.com"))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("Use your Brown University email address"));
        assert!(body.contains(
            "https://accounts.example.com/sign-in?redirect_url=http%3A%2F%2Fbearforce.example.com%2F"
        ));
    }

    #[actix_web::test]
    async fn test_signed_in_callers_go_to_the_form() {
        let app = test::init_service(
            App::new()
                .app_data(application(signed_in("x@gmail.com"), true))
                .configure(crate::routes::config),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/sign-in").to_request()).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }
}
