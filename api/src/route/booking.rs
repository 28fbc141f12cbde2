use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::booking::{create_booking, show_booking_count, show_booking_list};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let bookings_routers = Router::new()
        .route("/", get(show_booking_list).post(create_booking))
        .route("/count", get(show_booking_count));

    Router::new().nest("/bookings", bookings_routers)
}
