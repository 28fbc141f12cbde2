use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::item::{register_event, register_service, show_event_list, show_service_list};

pub fn build_item_routers() -> Router<AppRegistry> {
    let events_routers = Router::new().route("/", get(show_event_list).post(register_event));
    let services_routers =
        Router::new().route("/", get(show_service_list).post(register_service));

    Router::new()
        .nest("/events", events_routers)
        .nest("/services", services_routers)
}
