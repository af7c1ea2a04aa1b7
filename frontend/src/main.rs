use shared::routes::Route;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::bills::BillsPage;
use components::login::LoginPage;
use components::new_bill::NewBillPage;
use services::api::ApiClient;

/// Root component: owns the current route and hands every page the same
/// navigation callback, so no view touches a global location.
#[function_component(App)]
fn app() -> Html {
    let route = use_state(|| {
        if services::session::current_user().is_some() {
            Route::Bills
        } else {
            Route::Login
        }
    });
    let api_client = use_state(ApiClient::new);

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            route.set(target);
        })
    };

    html! {
        <main class="app">
            {match *route {
                Route::Login => html! {
                    <LoginPage on_navigate={on_navigate.clone()} />
                },
                Route::Bills => html! {
                    <BillsPage
                        api_client={(*api_client).clone()}
                        on_navigate={on_navigate.clone()}
                    />
                },
                Route::NewBill => html! {
                    <NewBillPage
                        api_client={(*api_client).clone()}
                        on_navigate={on_navigate.clone()}
                    />
                },
            }}
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
