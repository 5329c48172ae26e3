//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu for WebGPU API, a DOM overlay for text
//! and Web Audio for sound. The game itself lives in `game_core`.
//!
//! Note: the Canvas surface target is only available when compiling for wasm32,
//! so the browser-facing modules are gated on it.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod camera;
mod error;
mod input;
mod mesh;
mod renderer;
mod scene;
mod settings;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod clock;
#[cfg(target_arch = "wasm32")]
mod hud;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Set up the game on `canvas` and start the frame loop
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_client(canvas: web_sys::HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let client = app::Client::new(canvas).await?;
        app::run(client)?;
        Ok(JsValue::UNDEFINED)
    })
}
