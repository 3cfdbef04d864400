//! Hook that gates a protected page on the session.

use super::use_session_context;
use crate::navigation::NavigatorRouter;
use shared::{MountedGate, RenderDecision, SessionGate};
use yew::prelude::*;
use yew_router::prelude::*;

/// Hook binding a [`MountedGate`] to the session store and the router.
///
/// Returns what the page may render. While the session is loading, or
/// reported authenticated without user data, that is
/// [`RenderDecision::Nothing`]. When the session is (or becomes)
/// unauthenticated the gate replaces the current route with the public
/// root, once per transition.
///
/// The gate is mounted in an effect, so a component that unmounts before
/// its first effect never redirects. Unmounting releases the subscription.
///
/// # Example
/// ```ignore
/// match use_session_gate() {
///     RenderDecision::Nothing => html! {},
///     RenderDecision::Dashboard(model) => html! { <DashboardCard {model} /> },
/// }
/// ```
#[hook]
pub fn use_session_gate() -> RenderDecision {
    let context = use_session_context();
    let navigator = use_navigator();
    let decision = use_state_eq(RenderDecision::default);

    {
        let decision = decision.clone();
        use_effect_with((context, navigator), move |(context, navigator)| {
            let gate = SessionGate::with_public_root(context.config.public_root.clone());
            let router = NavigatorRouter::new(navigator.clone());

            let mounted = {
                let decision = decision.clone();
                MountedGate::mount_with(&context.store, router, gate, move |next| {
                    decision.set(next.clone());
                })
            };
            // A fresh gate starts from Nothing and only reports changes
            decision.set(mounted.decision());

            move || drop(mounted)
        });
    }

    (*decision).clone()
}
