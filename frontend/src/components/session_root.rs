//! Session provider for the app.
//!
//! Owns the [`SessionStore`] every gated page observes, and keeps it in
//! sync with the auth backend: one fetch on mount, then on an interval and
//! whenever the window regains focus.

use crate::utils;
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use gloo_net::http::Request;
use shared::{
    parse_session_response, ApiError, Sequencer, SessionConfig, SessionSnapshot, SessionStore,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Context handed to descendants of [`SessionRoot`]
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub store: SessionStore,
    pub config: Rc<SessionConfig>,
}

#[derive(Properties, PartialEq)]
pub struct SessionRootProps {
    #[prop_or_default]
    pub config: SessionConfig,
    #[prop_or_default]
    pub children: Children,
}

async fn fetch_session(endpoint: &str) -> Result<SessionSnapshot, ApiError> {
    let response = Request::get(endpoint)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    parse_session_response(status, &body)
}

#[function_component(SessionRoot)]
pub fn session_root(props: &SessionRootProps) -> Html {
    let store = use_memo((), |_| SessionStore::new());
    let sequencer = use_memo((), |_| Sequencer::new());
    let config = use_memo(props.config.clone(), |config| config.clone());

    // Fetch the session; responses older than one already applied are dropped
    let refetch = {
        let store = (*store).clone();
        let sequencer = sequencer.clone();
        let endpoint = config.session_endpoint.clone();

        Callback::from(move |_: ()| {
            let store = store.clone();
            let sequencer = sequencer.clone();
            let endpoint = utils::api_url(&endpoint);
            let ticket = sequencer.issue();

            spawn_local(async move {
                match fetch_session(&endpoint).await {
                    Ok(snapshot) => {
                        let status = snapshot.status;
                        if sequencer.accept(ticket) {
                            if store.set(snapshot) {
                                log::debug!("Session status: {}", status);
                            }
                        } else {
                            log::debug!("Dropping stale session response");
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to fetch session: {}", e);
                    }
                }
            });
        })
    };

    // Initial fetch
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    // Background polling
    {
        let refetch = refetch.clone();
        use_effect_with(config.clone(), move |config| {
            let interval = config.polling_enabled().then(|| {
                Interval::new(config.refetch_interval_ms, move || {
                    refetch.emit(());
                })
            });
            move || drop(interval)
        });
    }

    // Refetch when the tab comes back into focus
    {
        let refetch = refetch.clone();
        use_effect_with(config.refetch_on_window_focus, move |enabled| {
            let listener = (*enabled).then(|| {
                let window = gloo::utils::window();
                EventListener::new(&window, "focus", move |_| {
                    refetch.emit(());
                })
            });
            move || drop(listener)
        });
    }

    let context = SessionContext {
        store: (*store).clone(),
        config: config.clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<SessionContext>>
    }
}
