use shared::new_bill::NewBillForm;
use shared::routes::Route;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session;

#[derive(Clone)]
pub struct UseNewBillActions {
    pub on_expense_type_change: Callback<Event>,
    pub on_name_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_vat_change: Callback<Event>,
    pub on_pct_change: Callback<Event>,
    pub on_commentary_change: Callback<Event>,
    pub on_file_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

pub struct UseNewBillResult {
    pub form: NewBillForm,
    pub submitting: bool,
    pub actions: UseNewBillActions,
}

fn input_value(e: &Event) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// Form state and handlers for the new-bill page.
///
/// Every handler takes the current form as its callback dependency, so the
/// callbacks are rebuilt whenever a field changes and never act on a stale
/// snapshot.
///
/// The submit action never touches the store while the receipt error is
/// active; on success it navigates back to the bills list, on rejection it
/// logs and leaves the user on the page.
#[hook]
pub fn use_new_bill(api_client: &ApiClient, on_navigate: Callback<Route>) -> UseNewBillResult {
    let form = use_state(NewBillForm::default);
    let submitting = use_state(|| false);

    let on_name_change = {
        let form = form.clone();
        use_callback((*form).clone(), move |e: Event, current| {
            let mut updated = current.clone();
            updated.name = input_value(&e);
            form.set(updated);
        })
    };

    let on_amount_change = {
        let form = form.clone();
        use_callback((*form).clone(), move |e: Event, current| {
            let mut updated = current.clone();
            updated.amount = input_value(&e);
            form.set(updated);
        })
    };

    let on_date_change = {
        let form = form.clone();
        use_callback((*form).clone(), move |e: Event, current| {
            let mut updated = current.clone();
            updated.date = input_value(&e);
            form.set(updated);
        })
    };

    let on_vat_change = {
        let form = form.clone();
        use_callback((*form).clone(), move |e: Event, current| {
            let mut updated = current.clone();
            updated.vat = input_value(&e);
            form.set(updated);
        })
    };

    let on_pct_change = {
        let form = form.clone();
        use_callback((*form).clone(), move |e: Event, current| {
            let mut updated = current.clone();
            updated.pct = input_value(&e);
            form.set(updated);
        })
    };

    let on_expense_type_change = {
        let form = form.clone();
        use_callback((*form).clone(), move |e: Event, current| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = current.clone();
            updated.expense_type = select.value();
            form.set(updated);
        })
    };

    let on_commentary_change = {
        let form = form.clone();
        use_callback((*form).clone(), move |e: Event, current| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut updated = current.clone();
            updated.commentary = area.value();
            form.set(updated);
        })
    };

    let on_file_change = {
        let form = form.clone();
        use_callback((*form).clone(), move |e: Event, current| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file_name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name())
                .unwrap_or_else(|| input.value());
            let mut updated = current.clone();
            updated.set_receipt(&file_name);
            form.set(updated);
        })
    };

    let on_submit = {
        let api_client = api_client.clone();
        let submitting = submitting.clone();
        let on_navigate = on_navigate.clone();

        use_callback((*form).clone(), move |_, current: &NewBillForm| {
            let api_client = api_client.clone();
            let current = current.clone();
            let submitting = submitting.clone();
            let on_navigate = on_navigate.clone();

            spawn_local(async move {
                if !current.can_submit() {
                    Logger::warn_with_component(
                        "NewBill",
                        "soumission bloquée: justificatif manquant ou invalide",
                    );
                    return;
                }

                submitting.set(true);
                let email = session::current_user()
                    .map(|user| user.email)
                    .unwrap_or_default();

                match current.submit(&api_client, &email).await {
                    Ok(bill) => {
                        Logger::info_with_component("NewBill", &format!("note {} envoyée", bill.id));
                        on_navigate.emit(Route::Bills);
                    }
                    Err(e) => {
                        Logger::error_with_component("NewBill", &e.to_string());
                    }
                }
                submitting.set(false);
            });
        })
    };

    let actions = UseNewBillActions {
        on_expense_type_change,
        on_name_change,
        on_amount_change,
        on_date_change,
        on_vat_change,
        on_pct_change,
        on_commentary_change,
        on_file_change,
        on_submit,
    };

    UseNewBillResult {
        form: (*form).clone(),
        submitting: *submitting,
        actions,
    }
}
