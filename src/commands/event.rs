//! Backend Event Listeners

use wasm_bindgen::prelude::*;
use crate::models::ScreenView;
use super::js_error;

/// Emitted by the backend when a scan changes the screen
const NAVIGATION_EVENT: &str = "navigation-changed";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Call `on_view` with every `ScreenView` the backend pushes.
/// The listener stays registered for the life of the page.
pub async fn listen_navigation<F>(on_view: F) -> Result<(), String>
where
    F: Fn(ScreenView) + 'static,
{
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let payload = js_sys::Reflect::get(&event, &JsValue::from_str("payload")).unwrap_or(JsValue::NULL);
        match serde_wasm_bindgen::from_value::<ScreenView>(payload) {
            Ok(view) => on_view(view),
            Err(e) => log::error!("[EVENT] Bad {} payload: {}", NAVIGATION_EVENT, e),
        }
    });

    listen(NAVIGATION_EVENT, &handler).await.map_err(js_error)?;
    handler.forget();
    Ok(())
}
