//! Session view gate.
//!
//! Decides what a protected view may render for a given session snapshot
//! and fires the redirect when the session turns out to be (or becomes)
//! unauthenticated. The decision is a pure function of the snapshot;
//! the redirect is a separate effect that runs once per entry into
//! [`GateState::Unauthenticated`].

use crate::display::DisplayModel;
use crate::provider::{Router, SessionProvider, Subscription};
use crate::session::{AuthStatus, SessionSnapshot};
use std::cell::RefCell;
use std::rc::Rc;

/// Where unauthenticated visitors are sent
pub const PUBLIC_ROOT: &str = "/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GateState {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated,
}

impl GateState {
    /// Authenticated without user data is treated as still loading.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        match snapshot.status {
            AuthStatus::Loading => GateState::Loading,
            AuthStatus::Unauthenticated => GateState::Unauthenticated,
            AuthStatus::Authenticated if snapshot.user().is_some() => GateState::Authenticated,
            AuthStatus::Authenticated => GateState::Loading,
        }
    }
}

/// What the protected view should put on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderDecision {
    #[default]
    Nothing,
    Dashboard(DisplayModel),
}

impl RenderDecision {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderDecision::Nothing)
    }

    pub fn display_model(&self) -> Option<&DisplayModel> {
        match self {
            RenderDecision::Dashboard(model) => Some(model),
            RenderDecision::Nothing => None,
        }
    }
}

/// Pure render decision for a snapshot.
pub fn decide(snapshot: &SessionSnapshot) -> RenderDecision {
    match snapshot.user() {
        Some(user) => RenderDecision::Dashboard(DisplayModel::from_user(user)),
        None => RenderDecision::Nothing,
    }
}

/// Side effect requested by the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEffect {
    ReplaceNavigation(String),
}

impl GateEffect {
    pub fn apply<R: Router + ?Sized>(&self, router: &R) {
        match self {
            GateEffect::ReplaceNavigation(path) => {
                log::debug!("session gate: replacing navigation with {}", path);
                router.replace_navigation(path);
            }
        }
    }
}

/// The gate state machine.
#[derive(Debug, Clone)]
pub struct SessionGate {
    state: GateState,
    attached: bool,
    public_root: String,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self::with_public_root(PUBLIC_ROOT)
    }

    pub fn with_public_root(path: impl Into<String>) -> Self {
        Self {
            state: GateState::Loading,
            attached: true,
            public_root: path.into(),
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Stop reacting. A detached gate never requests an effect again.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Feed a snapshot into the machine.
    ///
    /// Returns the redirect on a transition into `Unauthenticated`, and
    /// `None` otherwise, including when the same state is delivered again.
    pub fn observe(&mut self, snapshot: &SessionSnapshot) -> Option<GateEffect> {
        if !self.attached {
            return None;
        }

        let next = GateState::from_snapshot(snapshot);
        let prev = std::mem::replace(&mut self.state, next);
        if prev == next {
            return None;
        }

        log::debug!("session gate: {:?} -> {:?}", prev, next);
        if snapshot.status == AuthStatus::Authenticated && next == GateState::Loading {
            log::warn!("session reported authenticated without user data, holding render");
        }

        match next {
            GateState::Unauthenticated => {
                Some(GateEffect::ReplaceNavigation(self.public_root.clone()))
            }
            GateState::Loading | GateState::Authenticated => None,
        }
    }

    /// Observe, run the resulting effect against `router`, and return the
    /// render decision for the snapshot.
    pub fn drive<R: Router + ?Sized>(
        &mut self,
        snapshot: &SessionSnapshot,
        router: &R,
    ) -> RenderDecision {
        if let Some(effect) = self.observe(snapshot) {
            effect.apply(router);
        }
        decide(snapshot)
    }
}

struct GateCell {
    gate: SessionGate,
    decision: RenderDecision,
}

/// A gate bound to a provider for the lifetime of a mounted view.
///
/// Mounting drives the gate with the provider's current snapshot and then
/// with every later notification. Unmounting (or dropping) detaches the
/// gate and releases the subscription.
pub struct MountedGate {
    cell: Rc<RefCell<GateCell>>,
    subscription: Option<Subscription>,
}

impl MountedGate {
    pub fn mount<P, R>(provider: &P, router: R) -> Self
    where
        P: SessionProvider + ?Sized,
        R: Router + 'static,
    {
        Self::mount_with(provider, router, SessionGate::new(), |_| {})
    }

    /// Mount with a preconfigured gate and a callback that runs whenever
    /// the render decision changes.
    pub fn mount_with<P, R, F>(provider: &P, router: R, gate: SessionGate, on_decision: F) -> Self
    where
        P: SessionProvider + ?Sized,
        R: Router + 'static,
        F: Fn(&RenderDecision) + 'static,
    {
        let cell = Rc::new(RefCell::new(GateCell {
            gate,
            decision: RenderDecision::Nothing,
        }));
        let router = Rc::new(router);
        let on_decision: Rc<dyn Fn(&RenderDecision)> = Rc::new(on_decision);

        deliver(&cell, &provider.current(), &*router, on_decision.as_ref());

        let subscription = {
            let cell = cell.clone();
            provider.subscribe(Box::new(move |snapshot: &SessionSnapshot| {
                deliver(&cell, snapshot, &*router, on_decision.as_ref());
            }))
        };

        Self {
            cell,
            subscription: Some(subscription),
        }
    }

    pub fn decision(&self) -> RenderDecision {
        self.cell.borrow().decision.clone()
    }

    pub fn state(&self) -> GateState {
        self.cell.borrow().gate.state()
    }

    pub fn unmount(&mut self) {
        self.cell.borrow_mut().gate.detach();
        self.subscription.take();
    }
}

impl Drop for MountedGate {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn deliver<R: Router + ?Sized>(
    cell: &RefCell<GateCell>,
    snapshot: &SessionSnapshot,
    router: &R,
    on_decision: &dyn Fn(&RenderDecision),
) {
    let (effect, changed) = {
        let mut inner = cell.borrow_mut();
        if !inner.gate.is_attached() {
            return;
        }
        let effect = inner.gate.observe(snapshot);
        let decision = decide(snapshot);
        let changed = inner.decision != decision;
        inner.decision = decision;
        (effect, changed.then(|| inner.decision.clone()))
    };

    // Cell released first: the router or the callback may cause another
    // delivery synchronously.
    if let Some(decision) = changed {
        on_decision(&decision);
    }
    if let Some(effect) = effect {
        effect.apply(router);
    }
}
