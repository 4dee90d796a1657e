//! HTTP 前端路由
//!
//! `GET /<path>` 以取值模式解析 `<path>`。解析是阻塞的文件读取，
//! 每个请求放到 `spawn_blocking` 中执行，节点不跨请求共享。

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use procfs::{ProcError, ProcFs};

/// 构建路由
pub fn router(fs: Arc<ProcFs>) -> Router {
    Router::new()
        .route("/", get(query_root))
        .route("/*path", get(query))
        .with_state(fs)
}

async fn query_root(State(fs): State<Arc<ProcFs>>) -> Response {
    respond(fs, String::new()).await
}

async fn query(State(fs): State<Arc<ProcFs>>, Path(path): Path<String>) -> Response {
    respond(fs, path).await
}

async fn respond(fs: Arc<ProcFs>, path: String) -> Response {
    log::debug!("GET /{}", path);

    let request = path.clone();
    let result = tokio::task::spawn_blocking(move || {
        procfs::lookup(&fs, &request).map(|value| value.to_json())
    })
    .await;

    match result {
        Ok(Ok(json)) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Ok(Err(ProcError::PathNotFound(_))) => (
            StatusCode::NOT_FOUND,
            format!("path {} does not exist", path),
        )
            .into_response(),
        Ok(Err(e)) => {
            log::warn!("failed to resolve {}: {}", path, e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{}: {}", path, e)).into_response()
        }
        Err(e) => {
            log::error!("resolver task for {} failed: {}", path, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}: resolver task failed", path),
            )
                .into_response()
        }
    }
}
