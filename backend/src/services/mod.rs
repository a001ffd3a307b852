pub mod accounts;
pub mod directory;
pub mod profile;
pub mod quiz;

use actix_web::http::header;
use actix_web::HttpResponse;

/// 303 redirect used after successful form posts.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
