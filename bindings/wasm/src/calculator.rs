use wasm_bindgen::{JsValue, prelude::wasm_bindgen};
use wyoming_rule::{
    io::json, reference_regions, render_comparison, Apportionment, Divisor, Params, RegionSet,
    Summary,
};

use crate::common::*;

/// Region data plus the current divisor; every divisor change replaces the result wholesale.
#[derive(Debug, Clone)]
pub(crate) struct Calculator {
    regions: RegionSet,
    params: Params,
    result: Apportionment,
}

impl Calculator {
    pub(crate) fn new(regions: RegionSet, params: Params, divisor: Divisor) -> Self {
        let result = Apportionment::with_divisor(regions.regions(), divisor, &params);
        Self { regions, params, result }
    }

    /// Calculator over a JSON region list, starting at the default divisor.
    pub(crate) fn from_regions_json(json: &str) -> Result<Self, String> {
        let regions = json::read_regions_json_str(json).map_err(|e| format!("{e:#}"))?;
        let params = Params::default();
        let divisor = Divisor::try_from(params.default_divisor).map_err(|e| e.to_string())?;
        Ok(Self::new(regions, params, divisor))
    }

    pub(crate) fn set_divisor(&mut self, divisor: Divisor) {
        if divisor != self.result.divisor() {
            self.result = Apportionment::with_divisor(self.regions.regions(), divisor, &self.params);
        }
    }

    #[inline] pub(crate) fn result(&self) -> &Apportionment { &self.result }

    pub(crate) fn summary(&self) -> Result<Summary, wyoming_rule::ApportionError> {
        Summary::compute(self.result.divisor(), &self.params)
    }
}

#[wasm_bindgen]
pub struct WasmCalculator {
    inner: Calculator,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Calculator over the built-in 2020 census data, starting at Wyoming's population.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmCalculator, JsValue> {
        let params = Params::default();
        let divisor = Divisor::try_from(params.default_divisor).map_err(js_err)?;
        Ok(WasmCalculator { inner: Calculator::new(reference_regions(), params, divisor) })
    }

    /// Calculator over a JSON array of `{ name, population, current_seats, lean? }` objects.
    pub fn from_regions_json(json: &str) -> Result<WasmCalculator, JsValue> {
        Ok(WasmCalculator { inner: Calculator::from_regions_json(json).map_err(js_err)? })
    }

    pub fn divisor(&self) -> f64 {
        self.inner.result().divisor().get() as f64
    }

    /// Replace the divisor (e.g. from the population slider). Invalid values leave the previous divisor in place.
    pub fn set_divisor(&mut self, value: f64) -> Result<(), JsValue> {
        let divisor = divisor_from_js(value).map_err(js_err)?;
        self.inner.set_divisor(divisor);
        Ok(())
    }

    /// Per-region rows in display order.
    pub fn rows(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.result().sorted_by_change()).map_err(|e| e.into())
    }

    pub fn totals(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.result().totals()).map_err(|e| e.into())
    }

    /// Overview cards: current House, rule House, and the difference.
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        let summary = self.inner.summary().map_err(js_err)?;
        serde_wasm_bindgen::to_value(&summary).map_err(|e| e.into())
    }

    /// Plain-text comparison table, all rows.
    pub fn table(&self) -> String {
        render_comparison(self.inner.result(), None)
    }
}
