#![cfg(target_arch = "wasm32")]
use fireworks_core::{NullSurface, Simulation, SimulationConfig, Surface, ToneProfile};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod audio;
mod constants;
mod dom;
mod frame;
mod render;

thread_local! {
    // Built by the start hook; the exported triggers reach the show through it
    static SHOW: RefCell<Option<Rc<RefCell<frame::FrameContext>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fireworks-web starting");

    match init() {
        Ok(ctx) => SHOW.with(|show| *show.borrow_mut() = Some(ctx)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

fn init() -> anyhow::Result<Rc<RefCell<frame::FrameContext>>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, constants::CANVAS_ID)?;

    // Backing store follows the viewport; the simulation reads the size every frame
    dom::wire_canvas_resize(&canvas);

    let surface: Box<dyn Surface> = match render::CanvasSurface::new(canvas) {
        Ok(s) => Box::new(s),
        Err(e) => {
            log::warn!("canvas unavailable, running without drawing: {:?}", e);
            Box::new(NullSurface::tracking(dom::viewport_size))
        }
    };
    let simulation = Simulation::new(SimulationConfig::default(), surface.size(), rand::random())?;
    let cue = audio::WebAudioCue::new(ToneProfile::default());

    Ok(Rc::new(RefCell::new(frame::FrameContext::new(
        simulation, surface, cue,
    ))))
}

fn with_show<T>(f: impl FnOnce(&Rc<RefCell<frame::FrameContext>>) -> T) -> Option<T> {
    SHOW.with(|show| show.borrow().as_ref().map(f))
}

/// Begin the show. Call from a user gesture so audio may start; calls after
/// the first are ignored.
#[wasm_bindgen(js_name = start)]
pub fn start_show() {
    let started = with_show(|ctx| {
        let mut c = ctx.borrow_mut();
        c.cue.unlock();
        c.simulation.start()
    });
    match started {
        Some(true) => {
            with_show(|ctx| frame::start_loop(ctx.clone()));
        }
        Some(false) => log::warn!("[start] show already running; ignoring"),
        None => log::error!("[start] show not initialized"),
    }
}

/// Launch `count` fireworks right away (default 5). Returns how many were
/// launched, 0 if the show failed to initialize.
#[wasm_bindgen(js_name = launchBurst)]
pub fn launch_burst(count: Option<u32>) -> u32 {
    with_show(|ctx| {
        let mut c = ctx.borrow_mut();
        match count {
            Some(n) => c.simulation.launch_burst(n as usize),
            None => c.simulation.celebrate(),
        }
    })
    .unwrap_or(0) as u32
}

/// Launch one firework toward canvas point (`x`, `y`). Returns `false` if the
/// show failed to initialize.
#[wasm_bindgen(js_name = launchToward)]
pub fn launch_toward(x: f64, y: f64) -> bool {
    with_show(|ctx| {
        ctx.borrow_mut()
            .simulation
            .launch_toward(glam::DVec2::new(x, y))
    })
    .is_some()
}
