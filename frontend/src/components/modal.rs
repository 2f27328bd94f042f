use log::info;
use web_sys::{KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// "Open your account" dialog with its dimming overlay.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let ModalProps { open, on_close } = props;

    {
        let open = *open;
        let on_close = on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && open {
                info!("Closing modal on Escape");
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let on_close = on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Account form submitted");
            on_close.emit(());
        })
    };

    let hidden = (!*open).then(|| "hidden");

    html! {
        <>
            <style>{MODAL_CSS}</style>
            <div class={classes!("modal", hidden)}>
                <button class="btn--close-modal" onclick={close.clone()}>{"×"}</button>
                <h2 class="modal__header">
                    {"Open your bank account "}<br/>
                    {"in just "}<span class="highlight">{"5 minutes"}</span>
                </h2>
                <form class="modal__form" onsubmit={onsubmit}>
                    <label>{"First Name"}</label>
                    <input type="text" name="first_name" />
                    <label>{"Last Name"}</label>
                    <input type="text" name="last_name" />
                    <label>{"Email Address"}</label>
                    <input type="email" name="email" />
                    <button class="btn" type="submit">{"Next step →"}</button>
                </form>
            </div>
            <div class={classes!("overlay", hidden)} onclick={close}></div>
        </>
    }
}

const MODAL_CSS: &str = r#"
    .modal {
        position: fixed;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        max-width: 60rem;
        background-color: #f3f3f3;
        padding: 5rem 6rem;
        box-shadow: 0 4rem 6rem rgba(0, 0, 0, 0.3);
        z-index: 1000;
        transition: all 0.5s;
    }
    .overlay {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background-color: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(4px);
        z-index: 100;
        transition: all 0.5s;
    }
    .modal__header {
        font-size: 3.25rem;
        margin-bottom: 4.5rem;
        line-height: 1.5;
    }
    .modal__form {
        margin: 0 3rem;
        display: grid;
        grid-template-columns: 1fr 2fr;
        align-items: center;
        gap: 2.5rem;
    }
    .modal__form button {
        grid-column: 1 / span 2;
        justify-self: center;
        margin-top: 1rem;
    }
    .btn--close-modal {
        font-family: inherit;
        color: inherit;
        position: absolute;
        top: 0.5rem;
        right: 2rem;
        font-size: 4rem;
        cursor: pointer;
        border: none;
        background: none;
    }
    .hidden {
        visibility: hidden;
        opacity: 0;
    }
"#;
