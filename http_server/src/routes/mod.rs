mod sign_in;
mod sign_out;
mod success;
mod travel_form;

use actix_web::http::header;
use actix_web::{web, HttpResponse};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(travel_form::init_routes)
        .configure(success::init_routes)
        .configure(sign_in::init_routes)
        .configure(sign_out::init_routes);
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
