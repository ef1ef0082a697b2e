//! Unauthenticated static pages.
//!
//! These routes render fixed markup with no data dependency; the hotel's
//! public-facing content is served as-is.

use axum::response::Html;

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../pages/index.html"))
}

/// Photo gallery
pub async fn gallery() -> Html<&'static str> {
    Html(include_str!("../pages/gallery.html"))
}

/// About-us page
pub async fn about_us() -> Html<&'static str> {
    Html(include_str!("../pages/about_us.html"))
}

/// Password-reset placeholder page
pub async fn forgot_password() -> Html<&'static str> {
    Html(include_str!("../pages/forgot_password.html"))
}

/// Booking entry page
pub async fn book_now() -> Html<&'static str> {
    Html(include_str!("../pages/book_now.html"))
}

/// Room catalog page
pub async fn rooms() -> Html<&'static str> {
    Html(include_str!("../pages/rooms.html"))
}

/// Staff page for adding a room unit
pub async fn add_room() -> Html<&'static str> {
    Html(include_str!("../pages/add_room.html"))
}

/// Staff page for creating a room type
pub async fn make_room() -> Html<&'static str> {
    Html(include_str!("../pages/make_room.html"))
}
