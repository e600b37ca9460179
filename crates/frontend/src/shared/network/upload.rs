use super::endpoints::api;
use super::error::ApiError;
use super::manager::{with_auth, NetworkManager};
use contracts::shared::envelope::extract_media_url;
use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

fn js_err(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

/// Upload an image as multipart form data and return its media URL
pub async fn upload_image(file: &File) -> Result<String, ApiError> {
    let form = FormData::new().map_err(js_err)?;
    form.append_with_blob("media_key", file).map_err(js_err)?;
    form.append_with_str("media_type", "IMAGE").map_err(js_err)?;
    form.append_with_str("content_type", &file.type_())
        .map_err(js_err)?;

    let url = NetworkManager::new(api::MEDIA_UPLOAD).url(None);
    log::debug!("upload {} ({} bytes)", file.name(), file.size());

    let response = with_auth(Request::post(&url)).body(form)?.send().await?;
    let status = response.status();
    let body = response.json::<Value>().await.ok();
    if !response.ok() {
        return Err(ApiError::from_response(status, body.as_ref()));
    }
    body.as_ref()
        .and_then(extract_media_url)
        .ok_or_else(|| ApiError::Decode("media_url missing".to_string()))
}
