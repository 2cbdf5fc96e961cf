//! Cancellable `requestAnimationFrame` loop.
//!
//! The callback reschedules itself every frame until its [`CancelToken`] is
//! cancelled. On the first frame after cancellation it drops its own
//! closure and stops, so nothing is left registered with the browser.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Shared stop flag. Cheap to clone and `Send + Sync`, so it can be moved
/// into `on_cleanup`.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle to a running loop.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    token: CancelToken,
}

impl FrameLoop {
    /// Run `tick` once per animation frame until `token` is cancelled.
    pub fn start(token: CancelToken, mut tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let holder: FrameCallback = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let token_for_cb = token.clone();

        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if token_for_cb.is_cancelled() {
                holder_for_cb.borrow_mut().take();
                return;
            }
            tick();
            let scheduled = match (web_sys::window(), holder_for_cb.borrow().as_ref()) {
                (Some(window), Some(cb)) => window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .is_ok(),
                _ => false,
            };
            if !scheduled {
                tracing::warn!("animation frame request failed, stopping loop");
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);

        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        *holder.borrow_mut() = Some(cb);

        Ok(Self { token })
    }

    /// False once the token has been cancelled.
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}
