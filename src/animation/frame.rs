//! Animation-frame plumbing shared by every time-driven effect.
//!
//! `next_frame` turns `requestAnimationFrame` into an awaitable so animation
//! loops can be written as plain `async` code instead of self-rescheduling
//! closures. `AnimationToken` is the ownership story for those loops: each
//! call to [`AnimationToken::begin`] supersedes earlier guards, and a loop
//! checks its guard at the top of every frame before touching shared output,
//! so two overlapping invocations never fight over the same scroll offset or
//! text node.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Promise;

/// Resolves on the next animation frame with the frame timestamp in ms.
pub async fn next_frame() -> f64 {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .expect("no window")
            .request_animation_frame(&resolve)
            .expect("requestAnimationFrame unavailable");
    });
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|timestamp| timestamp.as_f64())
        .unwrap_or(0.0)
}

/// Generation counter shared by all animations targeting one output.
#[derive(Clone, Default)]
pub struct AnimationToken {
    generation: Rc<Cell<u64>>,
}

impl AnimationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new animation generation, invalidating every earlier guard.
    pub fn begin(&self) -> AnimationGuard {
        let id = self.generation.get() + 1;
        self.generation.set(id);
        AnimationGuard {
            generation: Rc::clone(&self.generation),
            id,
        }
    }

    /// Invalidates all outstanding guards without starting a new animation.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

/// Held by one in-flight animation loop; stale once superseded.
pub struct AnimationGuard {
    generation: Rc<Cell<u64>>,
    id: u64,
}

impl AnimationGuard {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_guard_is_current() {
        let token = AnimationToken::new();
        let guard = token.begin();
        assert!(guard.is_current());
    }

    #[test]
    fn new_generation_supersedes_old_guard() {
        let token = AnimationToken::new();
        let first = token.begin();
        let second = token.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn cancel_invalidates_without_new_guard() {
        let token = AnimationToken::new();
        let guard = token.begin();
        token.cancel();
        assert!(!guard.is_current());
    }

    #[test]
    fn clones_share_one_generation() {
        let token = AnimationToken::new();
        let guard = token.begin();
        token.clone().begin();
        assert!(!guard.is_current());
    }
}
