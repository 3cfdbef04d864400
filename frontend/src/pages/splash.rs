use crate::hooks::use_session;
use crate::{utils, Route, VERSION};
use shared::AuthStatus;
use yew::prelude::*;
use yew_router::prelude::*;

/// Sign-in endpoint of the auth backend
const SIGN_IN_PATH: &str = "/api/auth/signin";

#[function_component(SplashPage)]
pub fn splash_page() -> Html {
    let session = use_session();

    let handle_login = Callback::from(|_| {
        log::info!("Redirecting to sign-in...");
        let window = web_sys::window().expect("no global `window` exists");
        let location = window.location();
        let _ = location.set_href(&utils::api_url(SIGN_IN_PATH));
    });

    html! {
        <div class="splash-container">
            <div class="splash-content">
                <div class="splash-header">
                    <h1>{ "Welcome" }</h1>
                    <p class="tagline">{ "Sign in to see your dashboard" }</p>
                </div>

                {
                    match session.status {
                        AuthStatus::Authenticated => html! {
                            <Link<Route> to={Route::Dashboard} classes="login-button">
                                { "Continue to dashboard" }
                            </Link<Route>>
                        },
                        AuthStatus::Loading | AuthStatus::Unauthenticated => html! {
                            <button class="login-button" onclick={handle_login}>
                                { "Sign in" }
                            </button>
                        },
                    }
                }

                <div class="splash-footer">
                    <span class="version">{ format!("v{}", VERSION) }</span>
                </div>
            </div>
        </div>
    }
}
