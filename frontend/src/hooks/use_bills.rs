use shared::bills::load_bills;
use shared::FormattedBill;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct BillsState {
    pub bills: Vec<FormattedBill>,
    pub loading: bool,
    /// Display text of a failed fetch ("Erreur 404", "Erreur 500", ...);
    /// rendered in place of the table.
    pub error: Option<String>,
}

pub struct UseBillsResult {
    pub state: BillsState,
    pub refresh: Callback<()>,
}

/// Bills list state: every refresh re-fetches and re-formats, nothing is
/// cached between calls.
#[hook]
pub fn use_bills(api_client: &ApiClient) -> UseBillsResult {
    let bills = use_state(Vec::<FormattedBill>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let refresh = {
        let api_client = api_client.clone();
        let bills = bills.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let bills = bills.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match load_bills(&api_client).await {
                    Ok(data) => {
                        bills.set(data);
                        error.set(None);
                    }
                    Err(e) => {
                        Logger::error_with_component("BillsPage", &e.to_string());
                        error.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    let state = BillsState {
        bills: (*bills).clone(),
        loading: *loading,
        error: (*error).clone(),
    };

    UseBillsResult { state, refresh }
}
