use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::institution::{
    register_institution, show_institution_detail_list, show_institution_list,
};

pub fn build_institution_routers() -> Router<AppRegistry> {
    let institutions_routers = Router::new()
        .route("/", get(show_institution_list).post(register_institution))
        .route("/detail", get(show_institution_detail_list));

    Router::new().nest("/institutions", institutions_routers)
}
