//! Typewriter Reveal
//!
//! Character-by-character reveal of the AI summary text.
//!
//! - `TypewriterRevealer`: the pure state machine (buffer, cursor, running flag)
//! - `Typewriter`: drives one revealer from exactly one cancellable timer
//! - `IntervalScheduler`: browser timer backed by `gloo-timers`

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Default tick cadence in milliseconds
pub const DEFAULT_INTERVAL_MS: u32 = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypewriterRevealer {
    full_text: String,
    chars: Vec<char>,
    revealed: String,
    cursor: usize,
    running: bool,
}

impl TypewriterRevealer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// Characters revealed so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        !self.chars.is_empty() && self.cursor == self.chars.len()
    }

    /// Begin revealing `text` from an empty buffer, discarding any previous reveal.
    /// Returns whether ticking should begin (false for empty text).
    pub fn start(&mut self, text: &str) -> bool {
        self.reset();
        if text.is_empty() {
            return false;
        }
        self.full_text = text.to_string();
        self.chars = text.chars().collect();
        self.revealed.reserve(text.len());
        self.running = true;
        true
    }

    /// Reveal one more character. Returns whether more ticks are needed.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if let Some(&ch) = self.chars.get(self.cursor) {
            self.revealed.push(ch);
            self.cursor += 1;
        }
        if self.cursor >= self.chars.len() {
            self.running = false;
        }
        self.running
    }

    /// Halt without clearing what is already shown
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.full_text.clear();
        self.chars.clear();
        self.revealed.clear();
        self.cursor = 0;
        self.running = false;
    }
}

/// Repeating callback; returning `Break` ends the schedule.
pub type TickFn = Box<dyn FnMut() -> ControlFlow<()>>;

/// Source of repeating timers. Dropping the returned handle cancels the timer.
pub trait TickScheduler {
    type Handle;

    fn every(&self, interval_ms: u32, tick: TickFn) -> Self::Handle;
}

/// Owns a revealer and at most one outstanding timer handle.
pub struct Typewriter<S: TickScheduler> {
    state: Rc<RefCell<TypewriterRevealer>>,
    scheduler: S,
    interval_ms: u32,
    handle: Option<S::Handle>,
    on_frame: Rc<dyn Fn(&TypewriterRevealer)>,
}

impl<S: TickScheduler> Typewriter<S> {
    /// `on_frame` sees the revealer after every change (start, tick, stop, reset).
    pub fn new(scheduler: S, interval_ms: u32, on_frame: impl Fn(&TypewriterRevealer) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(TypewriterRevealer::new())),
            scheduler,
            interval_ms: interval_ms.max(1),
            handle: None,
            on_frame: Rc::new(on_frame),
        }
    }

    pub fn start(&mut self, text: &str) {
        // The old timer must be gone before the buffer is reused
        self.cancel();
        let running = self.state.borrow_mut().start(text);
        self.emit();
        if !running {
            return;
        }

        let state = Rc::clone(&self.state);
        let on_frame = Rc::clone(&self.on_frame);
        let tick = move || {
            let more = state.borrow_mut().tick();
            on_frame(&state.borrow());
            if more {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        };
        self.handle = Some(self.scheduler.every(self.interval_ms, Box::new(tick)));
    }

    pub fn stop(&mut self) {
        self.cancel();
        self.state.borrow_mut().stop();
        self.emit();
    }

    pub fn reset(&mut self) {
        self.cancel();
        self.state.borrow_mut().reset();
        self.emit();
    }

    pub fn snapshot(&self) -> TypewriterRevealer {
        self.state.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    fn cancel(&mut self) {
        self.handle = None;
    }

    fn emit(&self) {
        (self.on_frame)(&self.state.borrow());
    }
}

/// Browser scheduler over `setInterval`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

/// Clears the interval when dropped.
pub struct IntervalHandle(Rc<RefCell<Option<Interval>>>);

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.0.borrow_mut().take();
    }
}

impl TickScheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn every(&self, interval_ms: u32, mut tick: TickFn) -> IntervalHandle {
        let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let weak = Rc::downgrade(&slot);
        let interval = Interval::new(interval_ms, move || {
            if tick().is_break() {
                if let Some(slot) = weak.upgrade() {
                    slot.borrow_mut().take();
                }
            }
        });
        *slot.borrow_mut() = Some(interval);
        IntervalHandle(slot)
    }
}
