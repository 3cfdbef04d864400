use crate::hooks::use_session_gate;
use shared::{DisplayModel, RenderDecision};
use yew::prelude::*;

/// Protected landing page after sign-in.
///
/// Renders nothing until the session gate has a user to show.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    match use_session_gate() {
        RenderDecision::Nothing => html! {},
        RenderDecision::Dashboard(model) => html! { <WelcomeCard {model} /> },
    }
}

#[derive(Properties, PartialEq, Clone)]
struct WelcomeCardProps {
    model: DisplayModel,
}

#[function_component(WelcomeCard)]
fn welcome_card(props: &WelcomeCardProps) -> Html {
    let model = &props.model;

    html! {
        <div class="welcome-container">
            <h1 class="welcome-title">{ "Welcome to Dashboard" }</h1>

            <div class="user-card">
                <h2 class="login-status">{ "✅ Login Successful" }</h2>

                if let Some(avatar_url) = &model.avatar_url {
                    <img class="user-avatar" src={avatar_url.clone()} alt="Profile" />
                }

                <div class="user-details">
                    <p>
                        { "Welcome, " }
                        <strong>{ &model.greeting_name }</strong>
                    </p>
                    <p>
                        <strong>{ &model.contact_email }</strong>
                    </p>
                    <p>
                        { "Occupation: " }
                        <strong>{ &model.occupation }</strong>
                    </p>
                </div>
            </div>
        </div>
    }
}
