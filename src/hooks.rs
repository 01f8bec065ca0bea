//! Browser subscriptions wrapped as hooks. Each one owns its listener,
//! timer, observer or frame handle and releases it when the component
//! unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ResizeObserver};
use yew::prelude::*;

use crate::cta::clock::{AutoConvergence, ConvergenceRun};

fn passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    }
}

fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn current_inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn current_inner_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Vertical scroll offset of the page, read from a passive listener.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(current_scroll_y);
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    EventListener::new_with_options(&window, "scroll", passive(), move |_| {
                        scroll_y.set(current_scroll_y());
                    })
                });
                if listener.is_none() {
                    log::warn!("No window, scroll position will not update");
                }
                move || drop(listener)
            },
            (),
        );
    }
    *scroll_y
}

/// Viewport size as `(width, height)`, refreshed on resize.
#[hook]
pub fn use_viewport() -> (f64, f64) {
    let size = use_state_eq(|| (current_inner_width(), current_inner_height()));
    {
        let size = size.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    EventListener::new_with_options(&window, "resize", passive(), move |_| {
                        size.set((current_inner_width(), current_inner_height()));
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }
    *size
}

/// Rendered width of the element behind `node`, kept current by a
/// `ResizeObserver`. Re-measuring an unchanged element does not re-render.
/// Readings taken after the element left the document are ignored so the
/// last real width survives re-parenting.
#[hook]
pub fn use_element_width(node: NodeRef) -> f64 {
    let width = use_state_eq(|| 0.0_f64);
    {
        let width = width.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer: Option<(ResizeObserver, Closure<dyn FnMut()>)> = None;

                if let Some(element) = node.cast::<HtmlElement>() {
                    let measure = {
                        let element = element.clone();
                        move || {
                            if element.is_connected() {
                                width.set(element.offset_width() as f64);
                            }
                        }
                    };
                    measure();

                    let callback = Closure::wrap(Box::new(measure) as Box<dyn FnMut()>);
                    match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
                        Ok(resize_observer) => {
                            resize_observer.observe(&element);
                            observer = Some((resize_observer, callback));
                        }
                        Err(e) => {
                            log::warn!("ResizeObserver unavailable: {:?}", e);
                        }
                    }
                }

                move || {
                    if let Some((resize_observer, _callback)) = observer {
                        resize_observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *width
}

/// `false` until `delay_ms` after mount, then `true` for good.
#[hook]
pub fn use_delayed_flag(delay_ms: u32) -> bool {
    let flag = use_state_eq(|| false);
    {
        let flag = flag.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let timeout = Timeout::new(*delay_ms, move || flag.set(true));
                move || drop(timeout)
            },
            delay_ms,
        );
    }
    *flag
}

struct FrameLoop {
    run: ConvergenceRun,
    frame: Option<AnimationFrame>,
    progress: UseStateHandle<f64>,
}

fn schedule_frame(state: Rc<RefCell<FrameLoop>>) {
    let next = state.clone();
    let handle = request_animation_frame(move |timestamp| {
        let more = {
            let mut frame_loop = next.borrow_mut();
            frame_loop.frame = None;
            let (progress, more) = frame_loop.run.step(timestamp);
            frame_loop.progress.set(progress);
            more
        };
        if more {
            schedule_frame(next);
        } else {
            log::debug!("auto convergence finished");
        }
    });
    state.borrow_mut().frame = Some(handle);
}

/// Auto-convergence progress in `[0, 1]`. Once `active` turns true it waits
/// out the clock's start delay, then drives the ramp with animation frames
/// and stops requesting frames when it reaches 1. A clock swapped in
/// mid-ramp picks up from the current progress.
#[hook]
pub fn use_auto_convergence(active: bool, clock: AutoConvergence) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(active, clock)| {
                let mut pending = None;
                let from = *progress;
                if *active && !AutoConvergence::is_complete(from) {
                    let run = ConvergenceRun::resume(*clock, from);
                    let delay_ms = if run.is_resumed() {
                        0
                    } else {
                        clock.start_delay_ms.max(0.0) as u32
                    };
                    let state = Rc::new(RefCell::new(FrameLoop {
                        run,
                        frame: None,
                        progress,
                    }));
                    let start = {
                        let state = state.clone();
                        Timeout::new(delay_ms, move || schedule_frame(state))
                    };
                    pending = Some((start, state));
                }
                move || {
                    if let Some((start, state)) = pending {
                        drop(start);
                        // Dropping the pending frame cancels it and breaks the Rc cycle.
                        state.borrow_mut().frame.take();
                    }
                }
            },
            (active, clock),
        );
    }
    *progress
}

/// Scrolls the window back to the top once, on mount.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
