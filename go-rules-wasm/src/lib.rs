use go_rules::{BoardConfig, Engine, GoError, Stone, Turn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// JSON answer to `place` and `apply`: `{ ok, captured }` or `{ ok: false, error }`.
#[derive(Serialize)]
struct PlaceResult {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    captured: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

impl PlaceResult {
    fn failed(code: &'static str) -> Self {
        PlaceResult {
            ok: false,
            captured: None,
            error: Some(code),
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"ok":false}"#.to_string())
    }
}

impl From<Result<u32, GoError>> for PlaceResult {
    fn from(result: Result<u32, GoError>) -> Self {
        match result {
            Ok(captured) => PlaceResult {
                ok: true,
                captured: Some(captured),
                error: None,
            },
            Err(e) => PlaceResult::failed(error_code(&e)),
        }
    }
}

fn error_code(e: &GoError) -> &'static str {
    match e {
        GoError::Illegal(reason) => reason.code(),
        GoError::InvalidColor(_) => "invalid_color",
        GoError::InvalidSize(_) => "invalid_size",
        GoError::Config(_) => "config",
    }
}

fn to_js(e: GoError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmBoard {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmBoard {
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Result<WasmBoard, JsValue> {
        Engine::new(size)
            .map(|inner| Self { inner })
            .map_err(to_js)
    }

    /// Build from a JSON `BoardConfig`, e.g. `{"size":13}`.
    pub fn from_config(json: &str) -> Result<WasmBoard, JsValue> {
        let config = BoardConfig::from_json(json).map_err(to_js)?;
        Engine::from_config(&config)
            .map(|inner| Self { inner })
            .map_err(to_js)
    }

    // -- Game actions (delegate to Engine) --

    pub fn place(&mut self, x: i32, y: i32, color: i8) -> String {
        PlaceResult::from(self.inner.place(x, y, color)).to_json()
    }

    /// Apply a JSON turn, e.g. `{"kind":"play","stone":1,"x":3,"y":3}` or
    /// `{"kind":"pass","stone":-1}`. Answers like `place`.
    pub fn apply(&mut self, turn_json: &str) -> String {
        let result = match serde_json::from_str::<Turn>(turn_json) {
            Ok(turn) => PlaceResult::from(self.inner.apply(&turn)),
            Err(_) => PlaceResult::failed("malformed_turn"),
        };
        result.to_json()
    }

    pub fn is_legal(&self, x: i32, y: i32, color: i8) -> bool {
        Stone::try_from(color).is_ok_and(|stone| self.inner.probe(x, y, stone).legal)
    }

    /// Verdict JSON without applying the move.
    pub fn probe(&self, x: i32, y: i32, color: i8) -> String {
        let stone = match Stone::try_from(color) {
            Ok(stone) => stone,
            Err(e) => return format!(r#"{{"error":"{}"}}"#, error_code(&e)),
        };
        serde_json::to_string(&self.inner.probe(x, y, stone))
            .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }

    pub fn pass(&mut self, color: i8) -> bool {
        match Stone::try_from(color) {
            Ok(stone) => {
                self.inner.pass(stone);
                true
            }
            Err(_) => false,
        }
    }

    // -- Read-only views (WASM-friendly types) --

    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.board())
    }

    /// Per-point territory markers: 1 Black, -1 White, 0 neutral, 2 stone.
    pub fn territory(&self) -> js_sys::Int8Array {
        let map: Vec<i8> = self.inner.territory().into_iter().map(|t| t.to_int()).collect();
        js_sys::Int8Array::from(map.as_slice())
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.inner.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Returns JSON score object:
    /// {"black":{"territory":n,"stones":n},"white":{...},"komi":6.5,"result":"W+3.5"}
    pub fn score_json(&self) -> String {
        let score = self.inner.score();
        let mut value = serde_json::to_value(score).unwrap_or_default();
        if let Some(obj) = value.as_object_mut() {
            obj.insert("result".to_string(), score.result().into());
        }
        value.to_string()
    }

    pub fn captures_black(&self) -> u32 {
        self.inner.captures().of(Stone::Black)
    }

    pub fn captures_white(&self) -> u32 {
        self.inner.captures().of(Stone::White)
    }

    pub fn has_ko(&self) -> bool {
        self.inner.ko().is_some()
    }

    pub fn ko_x(&self) -> i8 {
        match self.inner.ko() {
            Some(ko) => ko.pos.0 as i8,
            None => -1,
        }
    }

    pub fn ko_y(&self) -> i8 {
        match self.inner.ko() {
            Some(ko) => ko.pos.1 as i8,
            None => -1,
        }
    }
}
