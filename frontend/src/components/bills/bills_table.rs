use shared::FormattedBill;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BillsTableProps {
    pub bills: Vec<FormattedBill>,
    /// Emits the receipt URL of the clicked eye icon
    pub on_preview: Callback<String>,
}

#[function_component(BillsTable)]
pub fn bills_table(props: &BillsTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="bills-table" id="bills-table">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        <th>{"Nom"}</th>
                        <th>{"Date"}</th>
                        <th>{"Montant"}</th>
                        <th>{"Statut"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody data-testid="tbody">
                    {for props.bills.iter().map(|bill| {
                        let on_preview = {
                            let on_preview = props.on_preview.clone();
                            let file_url = bill.file_url.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_preview.emit(file_url.clone());
                            })
                        };

                        html! {
                            <tr>
                                <td>{&bill.expense_type}</td>
                                <td>{&bill.name}</td>
                                <td class="date">{&bill.formatted_date}</td>
                                <td class="amount">{format!("{} €", bill.amount)}</td>
                                <td class="status">{&bill.formatted_status}</td>
                                <td class="actions">
                                    <div
                                        class="icon-eye"
                                        data-testid="icon-eye"
                                        data-bill-url={bill.file_url.clone()}
                                        onclick={on_preview}
                                    >
                                        <i class="fa fa-eye"></i>
                                    </div>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
