use core::time::Duration;

use parcheesi::{GameState, PawnId, Phase, Session, SessionOptions, Trigger};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    session: Session,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(SessionOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.session = Session::new(SessionOptions::default(), seed as u64);
    }

    pub fn join(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.join(name).map_err(js_err)
    }

    pub fn roll(&mut self) -> Result<(), JsValue> {
        self.session.roll().map_err(js_err)
    }

    pub fn click_pawn(&mut self, pawn_id: &str) -> Result<(), JsValue> {
        let id = pawn_id.parse::<PawnId>().map_err(js_err)?;
        self.session.click_pawn(id).map_err(js_err)
    }

    pub fn select_pawn(&mut self, pawn_id: Option<String>) -> Result<(), JsValue> {
        let id = pawn_id
            .map(|raw| raw.parse::<PawnId>())
            .transpose()
            .map_err(js_err)?;
        self.session.select_pawn(id);
        Ok(())
    }

    pub fn skip(&mut self) -> Result<(), JsValue> {
        self.session.skip().map_err(js_err)
    }

    /// Advances the session clock; the page calls this from its animation
    /// frame loop. Returns the names of the triggers that ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> Vec<String> {
        self.session
            .advance(Duration::from_millis(u64::from(elapsed_ms)))
            .into_iter()
            .map(|trigger| trigger_to_str(trigger).to_string())
            .collect()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.session.state();
        let snapshot = Snapshot {
            phase: phase_to_str(state.phase()),
            joined: self.session.is_joined(),
            has_valid_moves: state.has_valid_moves(),
            movable_pawns: state
                .movable_pawns()
                .into_iter()
                .map(|id| id.to_string())
                .collect(),
            next_deadline_ms: self
                .session
                .next_deadline()
                .map(|due| due.as_millis() as f64),
            state,
        };
        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    phase: &'static str,
    joined: bool,
    has_valid_moves: bool,
    movable_pawns: Vec<String>,
    next_deadline_ms: Option<f64>,
    state: &'a GameState,
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitingRoll => "AwaitingRoll",
        Phase::AwaitingMove => "AwaitingMove",
        Phase::Finished(_) => "Finished",
    }
}

fn trigger_to_str(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::CpuTurn => "CpuTurn",
        Trigger::AutoSkip => "AutoSkip",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
