use shared::routes::Route;
use yew::prelude::*;

use crate::hooks::use_new_bill::use_new_bill;
use crate::services::api::ApiClient;

const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

#[derive(Properties, PartialEq)]
pub struct NewBillPageProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Route>,
}

/// The new-bill form page. The receipt error indicator blocks submission
/// until an image file is selected.
#[function_component(NewBillPage)]
pub fn new_bill_page(props: &NewBillPageProps) -> Html {
    let new_bill = use_new_bill(&props.api_client, props.on_navigate.clone());
    let form = &new_bill.form;
    let actions = &new_bill.actions;

    let error_class = if form.receipt_error { "error visible" } else { "error" };

    html! {
        <div class="content">
            <div class="content-header">
                <div class="content-title" data-testid="content-title">
                    {"Envoyer une note de frais"}
                </div>
            </div>

            <form
                class="form-new-bill"
                data-testid="form-new-bill"
                onsubmit={
                    let on_submit = actions.on_submit.clone();
                    Callback::from(move |e: SubmitEvent| {
                        e.prevent_default();
                        on_submit.emit(());
                    })
                }
            >
                <div class="form-group">
                    <label for="expense-type">{"Type de dépense"}</label>
                    <select
                        id="expense-type"
                        data-testid="expense-type"
                        onchange={actions.on_expense_type_change.clone()}
                    >
                        {for EXPENSE_TYPES.iter().map(|expense_type| {
                            html! {
                                <option
                                    value={*expense_type}
                                    selected={form.expense_type == *expense_type}
                                >
                                    {expense_type}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="expense-name">{"Nom de la dépense"}</label>
                    <input
                        type="text"
                        id="expense-name"
                        data-testid="expense-name"
                        placeholder="Vol Paris Londres"
                        value={form.name.clone()}
                        onchange={actions.on_name_change.clone()}
                        disabled={new_bill.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="datepicker">{"Date"}</label>
                    <input
                        type="date"
                        id="datepicker"
                        data-testid="datepicker"
                        value={form.date.clone()}
                        onchange={actions.on_date_change.clone()}
                        disabled={new_bill.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Montant TTC"}</label>
                    <input
                        type="number"
                        id="amount"
                        data-testid="amount"
                        placeholder="348"
                        value={form.amount.clone()}
                        onchange={actions.on_amount_change.clone()}
                        disabled={new_bill.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="vat">{"TVA"}</label>
                    <input
                        type="number"
                        id="vat"
                        data-testid="vat"
                        placeholder="70"
                        value={form.vat.clone()}
                        onchange={actions.on_vat_change.clone()}
                        disabled={new_bill.submitting}
                    />
                    <input
                        type="number"
                        id="pct"
                        data-testid="pct"
                        placeholder="20"
                        value={form.pct.clone()}
                        onchange={actions.on_pct_change.clone()}
                        disabled={new_bill.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="commentary">{"Commentaire"}</label>
                    <textarea
                        id="commentary"
                        data-testid="commentary"
                        value={form.commentary.clone()}
                        onchange={actions.on_commentary_change.clone()}
                        disabled={new_bill.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="file">{"Justificatif"}</label>
                    <input
                        required={true}
                        type="file"
                        id="file"
                        data-testid="file"
                        onchange={actions.on_file_change.clone()}
                        disabled={new_bill.submitting}
                    />
                    <span class={error_class} data-testid="ErrorMsg">
                        {"Format de justificatif incorrect : jpg, jpeg ou png attendu"}
                    </span>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    id="btn-send-bill"
                    disabled={new_bill.submitting}
                >
                    {if new_bill.submitting { "Envoi..." } else { "Envoyer" }}
                </button>
            </form>
        </div>
    }
}
