use shared::routes::Route;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::bills_table::BillsTable;
use super::receipt_modal::ReceiptModal;
use crate::hooks::use_bills::use_bills;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct BillsPageProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Route>,
}

/// The bills list page: fetches on mount, renders the table or the error
/// text, and owns the receipt preview modal.
#[function_component(BillsPage)]
pub fn bills_page(props: &BillsPageProps) -> Html {
    let bills = use_bills(&props.api_client);
    let preview_url = use_state(|| None::<String>);

    // Initial fetch; navigating back to this page re-fetches
    use_effect_with((), {
        let refresh = bills.refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let on_new_bill = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(Route::NewBill);
        })
    };

    let on_preview = {
        let preview_url = preview_url.clone();
        Callback::from(move |url: String| {
            preview_url.set(Some(url));
        })
    };

    let on_close_preview = {
        let preview_url = preview_url.clone();
        Callback::from(move |_| {
            preview_url.set(None);
        })
    };

    html! {
        <div class="content">
            <div class="content-header">
                <div class="content-title" data-testid="content-title">
                    {"Mes notes de frais"}
                </div>
                <button
                    type="button"
                    class="btn btn-primary"
                    data-testid="btn-new-bill"
                    onclick={on_new_bill}
                >
                    {"Nouvelle note de frais"}
                </button>
            </div>

            {if let Some(error) = bills.state.error.as_ref() {
                html! {
                    <div class="error-message" data-testid="error-message">
                        {error}
                    </div>
                }
            } else if bills.state.loading {
                html! { <div class="loading">{"Chargement..."}</div> }
            } else {
                html! {
                    <BillsTable
                        bills={bills.state.bills.clone()}
                        on_preview={on_preview}
                    />
                }
            }}

            <ReceiptModal
                file_url={(*preview_url).clone()}
                on_close={on_close_preview}
            />
        </div>
    }
}
