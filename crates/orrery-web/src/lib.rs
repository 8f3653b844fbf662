pub mod runner;

pub use runner::{Controls, FrameRunner};

use std::cell::RefCell;

use orrery_engine::SceneAssembler;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<FrameRunner>> = RefCell::new(None);
}

/// Run `f` against the runner, or return `R::default()` if `scene_init`
/// has not succeeded yet.
fn with_runner<R: Default>(f: impl FnOnce(&mut FrameRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("scene not initialized; call scene_init() first");
            R::default()
        }
    })
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[wasm_bindgen]
pub fn scene_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let assembler = match SceneAssembler::solar_system() {
        Ok(assembler) => assembler,
        Err(err) => {
            log::error!("orrery: failed to load catalog: {}", err);
            return;
        }
    };
    let runner = FrameRunner::new(assembler, random_seed());

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("orrery: initialized");
}

/// Build the frame for the current controls.
#[wasm_bindgen]
pub fn scene_tick() {
    with_runner(|r| {
        if let Err(err) = r.tick() {
            log::error!("orrery: frame failed: {}", err);
        }
    });
}

// ---- Controls ----

/// Returns the clamped, snapped time actually applied.
#[wasm_bindgen]
pub fn scene_set_time(years: f64) -> f64 {
    with_runner(|r| r.set_time(years))
}

#[wasm_bindgen]
pub fn scene_set_show_orbits(show: bool) {
    with_runner(|r| r.set_show_orbits(show));
}

#[wasm_bindgen]
pub fn scene_set_show_asteroids(show: bool) {
    with_runner(|r| r.set_show_asteroids(show));
}

/// Returns false if no body has that name.
#[wasm_bindgen]
pub fn scene_select_body(name: &str) -> bool {
    with_runner(|r| match r.select_body(name) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("orrery: {}", err);
            false
        }
    })
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    RUNNER.with(|cell| match cell.borrow().as_ref() {
        Some(r) => r.buffer_ptr(),
        None => std::ptr::null(),
    })
}

#[wasm_bindgen]
pub fn get_frame_float_count() -> u32 {
    with_runner(|r| r.buffer_len())
}

#[wasm_bindgen]
pub fn get_primitive_count() -> u32 {
    with_runner(|r| r.primitive_count())
}

#[wasm_bindgen]
pub fn get_vertex_count() -> u32 {
    with_runner(|r| r.vertex_count())
}

#[wasm_bindgen]
pub fn get_time() -> f64 {
    with_runner(|r| r.time())
}

/// Last frame as JSON, or an empty string before the first tick.
#[wasm_bindgen]
pub fn get_frame_json() -> String {
    with_runner(|r| match r.frame_json() {
        Ok(json) => json.unwrap_or_default(),
        Err(err) => {
            log::error!("orrery: {}", err);
            String::new()
        }
    })
}

#[wasm_bindgen]
pub fn get_inspector_text() -> String {
    with_runner(|r| match r.inspector_text() {
        Ok(text) => text,
        Err(err) => {
            log::error!("orrery: {}", err);
            String::new()
        }
    })
}

/// Body names in catalog order, for the inspector's select box.
#[wasm_bindgen]
pub fn get_body_names() -> js_sys::Array {
    with_runner(|r| r.body_names())
        .into_iter()
        .map(|name| JsValue::from_str(&name))
        .collect()
}
