use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::logout;

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new().route("/auth/logout", post(logout))
}
