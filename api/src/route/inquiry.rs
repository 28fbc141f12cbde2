use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::inquiry::submit_inquiry;

pub fn build_inquiry_routers() -> Router<AppRegistry> {
    Router::new().route("/inquiries", post(submit_inquiry))
}
