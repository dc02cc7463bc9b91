//! WebAssembly bindings.

use wasm_bindgen::prelude::*;

use crate::evaluation::ScoringConfig;
use crate::request::{schedule_with_config, ScheduleRequest};

/// Plans a request object `{orders, vehicles}` and returns the response
/// object. Rejections are thrown as JS `Error`s.
#[wasm_bindgen]
pub fn schedule(request: JsValue) -> Result<JsValue, JsValue> {
    schedule_with_weights(request, JsValue::UNDEFINED)
}

/// Same as [`schedule`], with optional scoring weights
/// (missing fields take their defaults).
#[wasm_bindgen(js_name = scheduleWithWeights)]
pub fn schedule_with_weights(request: JsValue, weights: JsValue) -> Result<JsValue, JsValue> {
    let request: ScheduleRequest = serde_wasm_bindgen::from_value(request).map_err(to_js_error)?;
    let config: ScoringConfig = if weights.is_undefined() || weights.is_null() {
        ScoringConfig::default()
    } else {
        serde_wasm_bindgen::from_value(weights).map_err(to_js_error)?
    };
    let response = schedule_with_config(&request, &config).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&response).map_err(to_js_error)
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&format!("Bad request: {e}")).into()
}
