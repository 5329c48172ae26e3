//! Browser main loop: keyboard in, one simulation update and one draw per frame

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{
    draw, play_events, Anchor, FrameTimer, Game, GameState, Graphics, SilentAudio, WHITE,
};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, UrlSearchParams, Window};

use crate::audio::WebAudio;
use crate::clock::PerformanceClock;
use crate::error::ClientError;
use crate::hud::Hud;
use crate::input::{captures, KeyAction, KeyboardState};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::settings::{config_from_query, BEST_OF_PARAM};

const FPS_TEXT_SIZE: f32 = 16.0;

pub struct Client {
    game: Game,
    renderer: Renderer,
    hud: Hud,
    audio: Option<WebAudio>,
    keyboard: KeyboardState,
    clock: PerformanceClock,
    timer: FrameTimer,
    scene: Scene,
    show_fps: bool,
    running: bool,
}

impl Client {
    pub async fn new(canvas: HtmlCanvasElement) -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let document = window
            .document()
            .ok_or_else(|| ClientError::Dom("no document".into()))?;

        let config = config_from_query(best_of_param(&window).as_deref());
        let game = Game::new(config, random_seed());

        canvas.set_width(game.map.width as u32);
        canvas.set_height(game.map.height as u32);

        let hud = Hud::new(document, &canvas)?;
        let renderer = Renderer::new(canvas, game.map.size()).await?;

        let audio = match WebAudio::new() {
            Ok(audio) => Some(audio),
            Err(err) => {
                log::warn!("{}; continuing without sound", err);
                None
            }
        };

        log::info!("Pong ready: best of {}", game.match_length().best_of());

        Ok(Self {
            game,
            renderer,
            hud,
            audio,
            keyboard: KeyboardState::new(),
            clock: PerformanceClock::new()?,
            timer: FrameTimer::new(),
            scene: Scene::new(),
            show_fps: false,
            running: true,
        })
    }

    fn on_key_down(&mut self, event: &KeyboardEvent) {
        let key = event.key();
        if captures(&key) {
            event.prevent_default();
        }
        if let Some(audio) = &self.audio {
            audio.resume();
        }

        let game_over = self.game.state() == GameState::GameOver;
        match self.keyboard.key_down(&key, event.repeat(), game_over) {
            KeyAction::ToggleFps => self.show_fps = !self.show_fps,
            KeyAction::Quit => {
                log::info!("Escape pressed, stopping");
                self.running = false;
            }
            KeyAction::None => {}
        }
    }

    fn on_key_up(&mut self, event: &KeyboardEvent) {
        self.keyboard.key_up(&event.key());
    }

    /// Key-ups are not delivered while the window is unfocused
    fn on_blur(&mut self) {
        self.keyboard.release_all();
    }

    /// One animation frame
    fn frame(&mut self) -> Result<(), ClientError> {
        let dt = self.timer.tick(&self.clock);
        let input = self.keyboard.snapshot();
        self.game.update(&input, dt);

        match self.audio.as_mut() {
            Some(audio) => play_events(&self.game.events, audio),
            None => play_events(&self.game.events, &mut SilentAudio),
        }

        self.scene.clear();
        draw(&self.game, &mut self.scene);
        if self.show_fps {
            self.scene.text(
                &format!("FPS: {:.0}", self.timer.fps()),
                Vec2::new(self.game.map.width - 90.0, self.game.map.height - 30.0),
                FPS_TEXT_SIZE,
                WHITE,
                Anchor::TopLeft,
            );
        }

        self.renderer.draw(&self.scene)?;
        self.hud.update(self.scene.texts())
    }

    fn stop(&mut self) {
        self.keyboard.release_all();
        self.hud.clear();
    }
}

/// Hook up input and start the `requestAnimationFrame` loop
pub fn run(client: Client) -> Result<(), ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let client = Rc::new(RefCell::new(client));

    {
        let client = client.clone();
        let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            client.borrow_mut().on_key_down(&event);
        });
        window
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())
            .map_err(ClientError::dom)?;
        on_key_down.forget();
    }
    {
        let client = client.clone();
        let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            client.borrow_mut().on_key_up(&event);
        });
        window
            .add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())
            .map_err(ClientError::dom)?;
        on_key_up.forget();
    }
    {
        let client = client.clone();
        let on_blur = Closure::<dyn FnMut()>::new(move || {
            client.borrow_mut().on_blur();
        });
        window
            .add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())
            .map_err(ClientError::dom)?;
        on_blur.forget();
    }

    // The closure re-schedules itself each frame until the run flag clears
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = tick.clone();
    let loop_window = window.clone();

    *first.borrow_mut() = Some(Closure::new(move || {
        let mut state = client.borrow_mut();
        if !state.running {
            state.stop();
            drop(state);
            let _ = tick.borrow_mut().take();
            return;
        }
        if let Err(err) = state.frame() {
            log::error!("Frame failed: {}", err);
        }
        drop(state);

        if let Some(callback) = tick.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, callback) {
                log::error!("{}", err);
            }
        }
    }));

    let scheduled = first.borrow();
    match scheduled.as_ref() {
        Some(callback) => request_animation_frame(&window, callback).map(|_| ()),
        None => Ok(()),
    }
}

fn request_animation_frame(
    window: &Window,
    callback: &Closure<dyn FnMut()>,
) -> Result<i32, ClientError> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(ClientError::dom)
}

fn best_of_param(window: &Window) -> Option<String> {
    let search = window.location().search().ok()?;
    UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(BEST_OF_PARAM)
}

fn random_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(err) => {
            log::warn!("No entropy source ({}), using a fixed seed", err);
            12345
        }
    }
}
