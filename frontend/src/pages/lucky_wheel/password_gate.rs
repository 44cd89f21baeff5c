use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PasswordGateProps {
    pub value: String,
    pub oninput: Callback<String>,
    pub onconfirm: Callback<()>,
}

#[function_component(PasswordGate)]
pub fn password_gate(props: &PasswordGateProps) -> Html {
    let oninput = props.oninput.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });
    let onclick = props.onconfirm.reform(|_: MouseEvent| ());

    html! {
        <div class={styles::MODAL_OVERLAY}>
            <div class={styles::MODAL_CARD}>
                <div class="mb-2 text-[44px]">{"🎁"}</div>
                <h2 class={styles::MODAL_TITLE}>{"Entry Pass"}</h2>
                <p class={styles::MODAL_SUBTITLE}>{"Enter your invitation code to open the draw"}</p>
                <input
                    type="text"
                    value={props.value.clone()}
                    {oninput}
                    class={styles::INPUT}
                    placeholder="Invitation code"
                />
                <button {onclick} class={styles::BUTTON_GRADIENT}>{"Enter"}</button>
            </div>
        </div>
    }
}
