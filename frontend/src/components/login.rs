use shared::routes::Route;
use shared::User;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::session;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_navigate: Callback<Route>,
}

/// Employee login: stores the session user and moves on to the bills
/// list. There is no credential check against the backend.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            session::save_user(&User::employee((*email).clone()));
            on_navigate.emit(Route::Bills);
        })
    };

    html! {
        <div class="login-page">
            <h1>{"Billed"}</h1>
            <form class="form-employee" data-testid="form-employee" onsubmit={on_submit}>
                <h2>{"Employé"}</h2>
                <div class="form-group">
                    <label for="employee-email">{"Votre email"}</label>
                    <input
                        type="email"
                        id="employee-email"
                        data-testid="employee-email-input"
                        required={true}
                        value={(*email).clone()}
                        onchange={on_email_change}
                    />
                </div>
                <div class="form-group">
                    <label for="employee-password">{"Votre mot de passe"}</label>
                    <input
                        type="password"
                        id="employee-password"
                        data-testid="employee-password-input"
                        required={true}
                    />
                </div>
                <button type="submit" class="btn btn-primary" data-testid="employee-login-button">
                    {"Se connecter"}
                </button>
            </form>
        </div>
    }
}
