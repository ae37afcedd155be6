use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    /// Headline, usually the server's confirmation message.
    pub title: AttrValue,
    /// Body copy under the headline.
    pub body: AttrValue,
    /// Label of the acknowledge button.
    pub confirm_label: AttrValue,
    /// Fired when the user acknowledges the modal.
    pub on_confirm: Callback<()>,
}

/// Success modal shared by signup and the verification resend flow.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let onclick = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_event: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box">
                <h3 class="text-lg font-bold flex items-center gap-2">
                    <Icon icon_id={IconId::HeroiconsSolidCheckCircle} class="w-6 h-6 text-success" />
                    { props.title.clone() }
                </h3>
                <p class="py-4">{ props.body.clone() }</p>
                <div class="modal-action">
                    <button class="btn btn-neutral" {onclick}>{ props.confirm_label.clone() }</button>
                </div>
            </div>
        </div>
    }
}
