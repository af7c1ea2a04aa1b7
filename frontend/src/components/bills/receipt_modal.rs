use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReceiptModalProps {
    /// URL of the receipt to preview; the modal is hidden while `None`
    pub file_url: Option<String>,
    pub on_close: Callback<()>,
}

/// Receipt preview modal, fed the image URL carried by the clicked eye
/// icon.
#[function_component(ReceiptModal)]
pub fn receipt_modal(props: &ReceiptModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let Some(file_url) = props.file_url.clone() else {
        return html! {};
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal show" data-testid="modale" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3>{"Justificatif"}</h3>
                    <button type="button" class="modal-close" onclick={on_close_click}>
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    <img src={file_url} alt="Justificatif" />
                </div>
            </div>
        </div>
    }
}
