/// How long success notices stay on screen.
pub const NOTICE_DISMISS_MS: u32 = 3_000;

/// Runs `callback` once after `millis`. Host builds have no event loop timer,
/// so the callback never fires there and notices stay until replaced.
#[cfg(target_arch = "wasm32")]
pub fn run_after(millis: u32, callback: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, callback).forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn run_after(_millis: u32, _callback: impl FnOnce() + 'static) {}
