use crate::domain::chart::ValueAnimation;
use crate::domain::market_data::CoinId;
use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Drives displayed-price transitions through requestAnimationFrame.
///
/// Starting an animation for a coin that is already animating bumps
/// that coin's generation; the superseded frame chain notices on its
/// next tick and stops without applying anything further (last writer
/// wins on the displayed value).
pub struct PriceAnimator {
    generations: Rc<RefCell<HashMap<CoinId, u64>>>,
    next_generation: Cell<u64>,
}

impl Default for PriceAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceAnimator {
    pub fn new() -> Self {
        Self { generations: Rc::new(RefCell::new(HashMap::new())), next_generation: Cell::new(0) }
    }

    pub fn animate<F>(&self, id: CoinId, animation: ValueAnimation, apply: F)
    where
        F: Fn(f64) + 'static,
    {
        let generation = self.next_generation.get() + 1;
        self.next_generation.set(generation);
        self.generations.borrow_mut().insert(id.clone(), generation);

        schedule_frame(AnimationTask {
            id,
            generation,
            animation,
            apply: Box::new(apply),
            generations: Rc::clone(&self.generations),
            start_ts: None,
        });
    }
}

struct AnimationTask {
    id: CoinId,
    generation: u64,
    animation: ValueAnimation,
    apply: Box<dyn Fn(f64)>,
    generations: Rc<RefCell<HashMap<CoinId, u64>>>,
    start_ts: Option<f64>,
}

fn schedule_frame(task: AnimationTask) {
    // The frame handle cancels on drop, so it has to stay alive until
    // the callback fires; the slot is tied into the callback itself.
    let slot: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
    let slot_in_callback = Rc::clone(&slot);
    let frame = request_animation_frame(move |timestamp| {
        let _fired = slot_in_callback.borrow_mut().take();
        step(task, timestamp);
    });
    *slot.borrow_mut() = Some(frame);
}

fn step(mut task: AnimationTask, timestamp: f64) {
    let current = task.generations.borrow().get(&task.id).copied();
    if current != Some(task.generation) {
        // superseded by a newer animation for the same coin
        return;
    }

    let start = *task.start_ts.get_or_insert(timestamp);
    let elapsed = timestamp - start;
    (task.apply)(task.animation.value_at(elapsed));

    if !task.animation.is_complete(elapsed) {
        schedule_frame(task);
    }
}
