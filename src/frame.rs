use crate::audio::WebAudioCue;
use crate::constants::STATS_LOG_INTERVAL_SEC;
use fireworks_core::{Simulation, Surface, TickReport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame touches. Lives behind `Rc<RefCell<_>>` so
/// both the RAF callback and the exported triggers can reach it on the single
/// JS thread; a frame always finishes before the next one is requested.
pub struct FrameContext {
    pub simulation: Simulation,
    pub surface: Box<dyn Surface>,
    pub cue: WebAudioCue,

    pub stats_since: Instant,
    pub stats_frames: u32,
    pub stats_bursts: usize,
}

impl FrameContext {
    pub fn new(simulation: Simulation, surface: Box<dyn Surface>, cue: WebAudioCue) -> Self {
        Self {
            simulation,
            surface,
            cue,
            stats_since: Instant::now(),
            stats_frames: 0,
            stats_bursts: 0,
        }
    }

    pub fn frame(&mut self) {
        let report = self
            .simulation
            .tick(self.surface.as_mut(), &mut self.cue);
        self.record_stats(report);
    }

    fn record_stats(&mut self, report: TickReport) {
        self.stats_frames += 1;
        self.stats_bursts += report.bursts;
        let elapsed = self.stats_since.elapsed().as_secs_f32();
        if elapsed < STATS_LOG_INTERVAL_SEC {
            return;
        }
        log::info!(
            "[frame] fps={:.1} projectiles={} particles={} bursts={}",
            self.stats_frames as f32 / elapsed,
            self.simulation.projectiles().len(),
            self.simulation.particles().len(),
            self.stats_bursts
        );
        self.stats_since = Instant::now();
        self.stats_frames = 0;
        self.stats_bursts = 0;
    }
}

/// Drive `frame()` from `requestAnimationFrame`, forever. The next frame is
/// requested only after the current one has run.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        log::error!("[frame] no window; animation stopped");
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        if let Err(e) = w.request_animation_frame(callback) {
            log::error!("[frame] requestAnimationFrame error: {:?}", e);
        }
    }
}
