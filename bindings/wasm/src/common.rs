use wasm_bindgen::JsValue;
use wyoming_rule::{ApportionError, Divisor};

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Convert a JS number from the divisor input into a validated divisor.
/// Fractional, non-finite, and non-positive values are rejected.
pub(crate) fn divisor_from_js(value: f64) -> Result<Divisor, ApportionError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return Err(ApportionError::InvalidDivisor(value.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64))
    }
    Divisor::new(value as i64)
}
