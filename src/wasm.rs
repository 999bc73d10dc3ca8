use crate::gameplay::GameState;
use crate::gameplay::Uniform;
use crate::session::Command;
use crate::session::Reply;
use crate::session::Session;
use crate::session::Settings;
use wasm_bindgen::prelude::*;

// The page owns the timing: it calls `play`, runs its reveal, then `settle`.

#[wasm_bindgen]
pub struct WasmGame(Session<Uniform>);

// Initialize function
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Self::seeded(seed as u32)
    }

    #[wasm_bindgen]
    pub fn seeded(seed: u32) -> Self {
        Self(Session::new(Uniform::seeded(seed as u64), Settings::instant()))
    }

    /// Handle a key or word ("r", "paper", "escape", ...).
    /// Returns the resolved round as JSON, or `null` for a reset.
    #[wasm_bindgen]
    pub fn play(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let command = Command::try_from(key).map_err(|e| JsValue::from_str(&e.to_string()))?;
        match self
            .0
            .handle(command)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
        {
            Reply::Played(round) => serde_json::to_string(&round)
                .map(|json| JsValue::from_str(&json))
                .map_err(|e| JsValue::from_str(&e.to_string())),
            Reply::Reset | Reply::Quit => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen]
    pub fn settle(&mut self) {
        self.0.settle();
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        let _ = self.0.handle(Command::Reset);
    }

    #[wasm_bindgen]
    pub fn busy(&self) -> bool {
        self.0.state().busy
    }

    #[wasm_bindgen]
    pub fn player_score(&self) -> u32 {
        self.0.state().player_score
    }

    #[wasm_bindgen]
    pub fn opponent_score(&self) -> u32 {
        self.0.state().opponent_score
    }

    #[wasm_bindgen]
    pub fn round_number(&self) -> u32 {
        self.0.state().round_number
    }

    /// current [`GameState`] as JSON
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string::<GameState>(self.0.state())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn play_settle_reset() {
        let mut game = WasmGame::seeded(1);
        assert!(game.play("r").is_ok());
        assert!(game.busy());
        assert!(game.play("p").is_err());
        game.settle();
        assert_eq!(game.round_number(), 2);
        game.reset();
        assert_eq!(game.round_number(), 1);
        assert!(!game.busy());
    }

    #[wasm_bindgen_test]
    fn unknown_key_is_error() {
        let mut game = WasmGame::seeded(1);
        assert!(game.play("x").is_err());
        assert_eq!(game.round_number(), 1);
    }
}
