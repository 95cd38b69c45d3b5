//! HTTP server for fontdex - the reading room of the archive (made by FontLab https://www.fontlab.com/)
//!
//! This module opens the cache to anyone who asks politely over HTTP.
//! Nothing here parses fonts; visitors only ever see what the last sync
//! pass wrote down, so answers come back as fast as LMDB can read them.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task;

use fontdex_core::cache::{Cache, CacheCounts};
use fontdex_core::model::{Font, MetadataRecord};
use fontdex_core::source::MetadataSource;

/// Shared handle the handlers read from.
#[derive(Clone)]
pub struct AppState {
    cache: Arc<Cache>,
}

/// Which fonts a `/fonts` visitor wants to see.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FontsQuery {
    /// Case-insensitive substring of the family name
    pub family: Option<String>,
}

/// The face a `/metadata` visitor is asking about.
#[derive(Clone, Debug, Deserialize)]
pub struct MetadataQuery {
    /// File path exactly as the sync pass recorded it
    pub path: String,
    /// Face index inside a collection
    #[serde(default)]
    pub index: u32,
}

/// The whole list, plus how many rows each table holds.
#[derive(Debug, Serialize, Deserialize)]
pub struct FontsResponse {
    pub fonts: Vec<Font>,
    pub counts: CacheCounts,
}

/// Opens the doors of the reading room and keeps them open.
pub async fn serve(bind: &str, cache: Arc<Cache>) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("binding HTTP server to {bind}"))?;
    log::info!("serving cache on http://{bind}");

    axum::serve(listener, router(cache))
        .await
        .context("serving HTTP")?;
    Ok(())
}

/// Routes: `/health`, `/fonts` and `/metadata?path=&index=`.
pub fn router(cache: Arc<Cache>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/fonts", get(fonts_handler))
        .route("/metadata", get(metadata_handler))
        .with_state(AppState { cache })
}

async fn fonts_handler(
    State(state): State<AppState>,
    Query(query): Query<FontsQuery>,
) -> Result<Json<FontsResponse>, (StatusCode, String)> {
    let needle = query.family.map(|family| family.to_lowercase());

    // LMDB read transactions stay on the thread that opened them
    let response = task::spawn_blocking(move || {
        let reader = state.cache.reader()?;
        let fonts = reader
            .list_fonts()?
            .into_iter()
            .filter(|font| match &needle {
                Some(needle) => font.family.to_lowercase().contains(needle),
                None => true,
            })
            .collect();
        let counts = reader.counts()?;
        Ok::<_, fontdex_core::error::StoreError>(FontsResponse { fonts, counts })
    })
    .await
    .map_err(to_internal)?
    .map_err(to_internal)?;

    Ok(Json(response))
}

async fn metadata_handler(
    State(state): State<AppState>,
    Query(query): Query<MetadataQuery>,
) -> Result<Json<MetadataRecord>, (StatusCode, String)> {
    if query.path.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "path must not be empty".to_string()));
    }

    let MetadataQuery { path, index } = query;
    let lookup_path = path.clone();
    let record = task::spawn_blocking(move || state.cache.record(&lookup_path, index))
        .await
        .map_err(to_internal)?
        .map_err(to_internal)?;

    match record {
        Some(record) => Ok(Json(record)),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("no cached record for face {index} of {path}"),
        )),
    }
}

fn to_internal(err: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use fontdex_core::model::{Metadata, OrthographyResult, Panose};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn sample_record(filepath: &str) -> MetadataRecord {
        MetadataRecord {
            metadata: Metadata {
                filepath: filepath.into(),
                findex: 0,
                family: "Sample Sans".into(),
                style: "Regular".into(),
                owner: true,
                psname: Some("SampleSans-Regular".into()),
                filetype: "TrueType".into(),
                n_glyphs: 96,
                copyright: None,
                version: "1.000".into(),
                description: None,
                license_data: None,
                license_url: None,
                vendor: "Unknown Vendor".into(),
                designer: None,
                designer_url: None,
                license_type: "Unknown License".into(),
                fs_type: 0,
                filesize: "24.0 kB".into(),
                checksum: "00112233445566778899aabbccddeeff".into(),
            },
            panose: Some(Panose {
                filepath: filepath.into(),
                findex: 0,
                values: [2, 11, 5, 3, 2, 2, 4, 2, 2, 4],
            }),
            orthography: OrthographyResult::default(),
        }
    }

    fn sample_font(filepath: &str, family: &str) -> Font {
        Font {
            filepath: filepath.into(),
            findex: 0,
            family: family.into(),
            style: "Regular".into(),
            spacing: 0,
            slant: 0,
            weight: 80,
            width: 100,
            description: format!("{family} Regular"),
        }
    }

    fn seeded_cache(dir: &std::path::Path) -> Arc<Cache> {
        let cache = Cache::open(dir).expect("open cache");
        let mut writer = cache.writer().expect("writer");
        writer
            .insert_font(&sample_font("/fonts/SampleSans.ttf", "Sample Sans"))
            .expect("font");
        writer
            .insert_font(&sample_font("/fonts/Other.ttf", "Other Serif"))
            .expect("font");
        writer
            .insert_record(&sample_record("/fonts/SampleSans.ttf"))
            .expect("record");
        writer.commit().expect("commit");
        Arc::new(cache)
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(seeded_cache(dir.path()));
        let request = Request::get("/health").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"ok");
    }

    #[tokio::test]
    async fn fonts_endpoint_lists_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let cache = seeded_cache(dir.path());

        let response = router(Arc::clone(&cache))
            .oneshot(Request::get("/fonts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let parsed: FontsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(parsed.fonts.len(), 2);
        assert_eq!(parsed.counts.metadata, 1);

        let response = router(cache)
            .oneshot(
                Request::get("/fonts?family=serif")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let parsed: FontsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(parsed.fonts.len(), 1);
        assert_eq!(parsed.fonts[0].family, "Other Serif");
    }

    #[tokio::test]
    async fn metadata_endpoint_returns_cached_record() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(seeded_cache(dir.path()));
        let request = Request::get("/metadata?path=/fonts/SampleSans.ttf&index=0")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let parsed: MetadataRecord = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(parsed, sample_record("/fonts/SampleSans.ttf"));
    }

    #[tokio::test]
    async fn metadata_endpoint_reports_unknown_faces() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(seeded_cache(dir.path()));
        let request = Request::get("/metadata?path=/fonts/Other.ttf&index=3")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let text = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(text.contains("no cached record"), "body: {text}");
    }

    #[tokio::test]
    async fn metadata_endpoint_requires_path() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(seeded_cache(dir.path()));
        let request = Request::get("/metadata").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
