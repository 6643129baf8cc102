//! Roster list handlers.
//!
//! All three routes share the pagination middleware; handlers only read
//! the resolved window from the request extensions.

use axum::{
    extract::{Extension, State},
    middleware,
    response::Json,
    routing::get,
    Router,
};

use crate::api::middleware::pagination_middleware;
use crate::api::AppState;
use crate::domain::{BandWithMusicians, InstrumentWithMusicians, MusicianWithBand};
use crate::errors::AppResult;
use crate::types::{Pagination, PaginationQuery};

/// Create roster list routes
pub fn roster_routes() -> Router<AppState> {
    Router::new()
        .route("/musicians", get(list_musicians))
        .route("/bands", get(list_bands))
        .route("/instruments", get(list_instruments))
        .route_layer(middleware::from_fn(pagination_middleware))
}

/// List musicians with their band
#[utoipa::path(
    get,
    path = "/musicians",
    tag = "Roster",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Musicians ordered by last name, then first name", body = Vec<MusicianWithBand>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_musicians(
    State(state): State<AppState>,
    Extension(pagination): Extension<Pagination>,
) -> AppResult<Json<Vec<MusicianWithBand>>> {
    let musicians = state.roster.list_musicians(pagination).await?;
    Ok(Json(musicians))
}

/// List bands with their members
#[utoipa::path(
    get,
    path = "/bands",
    tag = "Roster",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Bands ordered by name; members ordered by last name", body = Vec<BandWithMusicians>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_bands(
    State(state): State<AppState>,
    Extension(pagination): Extension<Pagination>,
) -> AppResult<Json<Vec<BandWithMusicians>>> {
    let bands = state.roster.list_bands(pagination).await?;
    Ok(Json(bands))
}

/// List instruments with the musicians who play them
#[utoipa::path(
    get,
    path = "/instruments",
    tag = "Roster",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Instruments ordered by type; players ordered by band name, then last name", body = Vec<InstrumentWithMusicians>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_instruments(
    State(state): State<AppState>,
    Extension(pagination): Extension<Pagination>,
) -> AppResult<Json<Vec<InstrumentWithMusicians>>> {
    let instruments = state.roster.list_instruments(pagination).await?;
    Ok(Json(instruments))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::domain::MusicianSummary;
    use crate::errors::AppError;
    use crate::infra::MockRosterRepository;

    fn app(mock: MockRosterRepository) -> Router {
        roster_routes().with_state(AppState::new(Arc::new(mock)))
    }

    async fn send_get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn musicians_receive_resolved_window() {
        let mut mock = MockRosterRepository::new();
        mock.expect_list_musicians()
            .withf(|p| *p == Pagination { offset: 20, limit: Some(10) })
            .times(1)
            .returning(|_| Ok(vec![]));

        let (status, body) = send_get(app(mock), "/musicians?page=3&size=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn bands_default_window_when_params_missing() {
        let mut mock = MockRosterRepository::new();
        mock.expect_list_bands()
            .withf(|p| *p == Pagination { offset: 0, limit: Some(5) })
            .times(1)
            .returning(|_| {
                Ok(vec![BandWithMusicians {
                    id: 1,
                    name: "The Falling Box".to_string(),
                    musicians: vec![MusicianSummary {
                        id: 1,
                        first_name: "Adam".to_string(),
                        last_name: "Appleby".to_string(),
                    }],
                }])
            });

        let (status, body) = send_get(app(mock), "/bands").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["Musicians"][0]["lastName"], "Appleby");
    }

    #[tokio::test]
    async fn instruments_page_zero_is_unbounded() {
        let mut mock = MockRosterRepository::new();
        mock.expect_list_instruments()
            .withf(|p| p.is_unbounded() && p.offset == 0)
            .times(1)
            .returning(|_| Ok(vec![]));

        let (status, _) = send_get(app(mock), "/instruments?page=0&size=3").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn storage_failure_is_a_server_error() {
        let mut mock = MockRosterRepository::new();
        mock.expect_list_musicians()
            .returning(|_| Err(AppError::from(sea_orm::DbErr::Custom("gone".into()))));

        let (status, body) = send_get(app(mock), "/musicians").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    }
}
