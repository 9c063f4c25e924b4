use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("surface `{0}` not found")]
    SurfaceNotFound(String),
    #[error("renderer failed to initialize: {0}")]
    RendererInit(String),
    #[error("invalid viewer config: {0}")]
    Config(#[from] serde_json::Error),
}

impl ViewerError {
    /// Wrap an exception thrown by the renderer's JS constructor.
    pub fn from_js(err: JsValue) -> Self {
        let msg = err
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{err:?}"));
        Self::RendererInit(msg)
    }
}
