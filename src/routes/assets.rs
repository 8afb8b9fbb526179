use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

/// Stylesheet and placeholder images, compiled into the binary.
#[derive(Embed)]
#[folder = "assets/"]
struct StaticAssets;

pub async fn serve(Path(path): Path<String>) -> Response {
    let Some(file) = StaticAssets::get(&path) else {
        tracing::debug!("Asset not found: {}", path);
        return StatusCode::NOT_FOUND.into_response();
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
        ],
        file.data.to_vec(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_placeholder_avatar_as_svg() {
        let response = serve(Path("img/avatar-placeholder.svg".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
    }

    #[tokio::test]
    async fn unknown_asset_is_404() {
        let response = serve(Path("img/nope.png".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
