mod components;
mod hooks;
mod navigation;
mod pages;
pub mod utils;

use components::SessionRoot;
use pages::{dashboard::DashboardPage, splash::SplashPage};
use yew::prelude::*;
use yew_router::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SplashPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionRoot>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionRoot>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
