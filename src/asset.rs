use globe_core::texture::TextureImage;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Fetch raw bytes from a URL relative to the page.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("GET {} failed with status {}", url, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub async fn load_world_map(url: &str, max_dimension: u32) -> anyhow::Result<TextureImage> {
    let bytes = fetch_bytes(url).await?;
    log::info!("[texture] fetched {} ({} bytes)", url, bytes.len());
    Ok(TextureImage::decode(&bytes, max_dimension)?)
}
