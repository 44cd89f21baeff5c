pub mod browser;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::pages::lucky_wheel::LuckyWheelPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::BG_GLOW}></div>
            <LuckyWheelPage />
        </div>
    }
}
