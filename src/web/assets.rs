use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::web::error::AppError;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

pub async fn static_asset_handler(Path(path): Path<String>) -> Response {
    match Assets::get(&path) {
        Some(file) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], file.data).into_response()
        }
        None => AppError::NotFound(format!("Asset {path} not found")).into_response(),
    }
}
