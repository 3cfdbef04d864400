//! Hook for observing the session held by `SessionRoot`.

use crate::components::SessionContext;
use shared::{SessionProvider, SessionSnapshot};
use yew::prelude::*;

/// The session context installed by `SessionRoot`.
///
/// Panics if called outside of it.
#[hook]
pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>()
        .expect("`SessionContext` not found, is the page inside SessionRoot?")
}

/// Hook for the current session snapshot.
///
/// Re-renders the calling component whenever the store publishes a
/// different snapshot. The subscription is released on unmount.
///
/// # Example
/// ```ignore
/// let session = use_session();
/// if session.status == AuthStatus::Authenticated {
///     // Offer a link to the dashboard
/// }
/// ```
#[hook]
pub fn use_session() -> SessionSnapshot {
    let context = use_session_context();
    let snapshot = use_state_eq(|| context.store.current());

    {
        let snapshot = snapshot.clone();
        use_effect_with(context.store, move |store| {
            // Catch up on anything published between render and effect
            snapshot.set(store.current());
            let subscription = store.subscribe(Box::new(move |next: &SessionSnapshot| {
                snapshot.set(next.clone());
            }));
            move || drop(subscription)
        });
    }

    (*snapshot).clone()
}
