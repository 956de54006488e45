use js_sys::{Promise, Reflect};
use storefront_core::LocationError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError};

/// Ask the browser for the device position, as `(latitude, longitude)`.
///
/// Wraps the callback-style `getCurrentPosition` in a promise so callers can
/// simply `.await` it from `spawn_local`.
#[allow(clippy::future_not_send)]
pub async fn current_position() -> Result<(f64, f64), LocationError> {
    let window = web_sys::window().ok_or(LocationError::Unsupported)?;
    let navigator = window.navigator();

    let supported = Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
    if !supported {
        return Err(LocationError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| LocationError::Unsupported)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: Position =
                value.dyn_into().map_err(|_| LocationError::Unknown)?;
            let coords = position.coords();
            Ok((coords.latitude(), coords.longitude()))
        }
        Err(err) => {
            let error = err
                .dyn_into::<PositionError>()
                .map_or(LocationError::Unknown, |e| LocationError::from_code(e.code()));
            web_sys::console::warn_1(&format!("Geolocation failed: {error:?}").into());
            Err(error)
        }
    }
}
