//! # Runtime
//!
//! Owns the current `App` and applies actions one at a time:
//!
//! ```text
//! dispatch(action)
//!   → update()            (follow Dispatch redirects)
//!   → commit state
//!   → reconcile subscriptions against the KeyboardBus
//!   → return effects for the caller to run
//! ```
//!
//! The runtime never performs I/O itself. Fetch effects go back to the
//! caller, whose runners later feed completion actions into `dispatch`.

use log::{debug, warn};

use crate::core::action::{self, Action, Effect, Next};
use crate::core::state::App;
use crate::core::subscription::{
    self, Change, Key, KeyboardBus, ListenerHandle, Subscription,
};
use crate::core::vdom::Node;
use crate::core::view;

/// Redirect chains longer than this are dropped.
pub const MAX_REDIRECTS: usize = 8;

struct Active {
    subscription: Subscription,
    handle: ListenerHandle,
}

pub struct Runtime {
    state: App,
    active: Vec<Option<Active>>,
    keyboard: KeyboardBus,
}

impl Runtime {
    /// Fresh runtime plus the effects `init` schedules.
    pub fn init(base_url: &str) -> (Self, Vec<Effect>) {
        let (state, effect) = action::init(base_url);
        let mut runtime = Self {
            state,
            active: Vec::new(),
            keyboard: KeyboardBus::new(),
        };
        runtime.sync_subscriptions();
        (runtime, vec![effect])
    }

    pub fn state(&self) -> &App {
        &self.state
    }

    pub fn view(&self) -> Node {
        view::people_view(&self.state)
    }

    /// Currently live subscriptions, slot by slot.
    pub fn active_subscriptions(&self) -> Vec<Option<Subscription>> {
        self.active
            .iter()
            .map(|slot| slot.as_ref().map(|a| a.subscription.clone()))
            .collect()
    }

    pub fn listener_count(&self) -> usize {
        self.keyboard.len()
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let mut next = action::update(&self.state, action);
        let mut hops = 0;
        let effects = loop {
            match next {
                Next::State(state) => {
                    self.state = state;
                    break Vec::new();
                }
                Next::Effect(state, effect) => {
                    self.state = state;
                    break vec![effect];
                }
                Next::Dispatch(redirect) => {
                    hops += 1;
                    if hops > MAX_REDIRECTS {
                        warn!("Dropping {:?}: more than {} redirects", redirect, MAX_REDIRECTS);
                        return Vec::new();
                    }
                    next = action::update(&self.state, redirect);
                }
            }
        };
        self.sync_subscriptions();
        effects
    }

    /// Feed a key-down through the live listeners.
    pub fn key_down(&mut self, key: Key) -> Vec<Effect> {
        let actions = self.keyboard.press(key);
        if actions.is_empty() {
            debug!("No listener for {}", key);
        }
        actions
            .into_iter()
            .flat_map(|action| self.dispatch(action))
            .collect()
    }

    fn sync_subscriptions(&mut self) {
        let wanted = subscription::subscriptions(&self.state);
        let current = self.active_subscriptions();
        if self.active.len() < wanted.len() {
            self.active.resize_with(wanted.len(), || None);
        }

        for change in subscription::reconcile(&current, &wanted) {
            match change {
                Change::Stop(slot) => {
                    if let Some(active) = self.active[slot].take() {
                        self.keyboard.remove(active.handle);
                    }
                }
                Change::Start(slot, sub) => {
                    let handle = match &sub {
                        Subscription::KeyDown(k) => self.keyboard.listen(k.key, k.action.clone()),
                    };
                    self.active[slot] = Some(Active {
                        subscription: sub,
                        handle,
                    });
                }
            }
        }
        self.active.truncate(wanted.len());
    }
}
