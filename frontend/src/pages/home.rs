use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{
    footer::Footer,
    lazy_image::LazyImage,
    modal::Modal,
    nav::Nav,
    reveal::RevealSection,
    scroll_top::ScrollToTop,
    slider::Slider,
    tabs::Operations,
};
use crate::config::PageConfig;
use crate::scroll::scroll_to_section;

#[function_component]
pub fn Home() -> Html {
    let config = use_memo(|_| PageConfig::load(), ());
    let header_ref = use_node_ref();
    let footer_ref = use_node_ref();
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Opening modal");
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let learn_more = Callback::from(|_: MouseEvent| scroll_to_section("section--1"));

    html! {
        <div class="landing-page">
            <header class="header" ref={header_ref.clone()}>
                <Nav
                    links={config.nav.clone()}
                    header={header_ref.clone()}
                    on_open_modal={open_modal.clone()}
                />
                <div class="header__title">
                    <h1>{&config.title}</h1>
                    <h4>{"A simpler banking experience for a simpler life."}</h4>
                    <button class="btn--text btn--scroll-to" onclick={learn_more}>
                        {"Learn more ↓"}
                    </button>
                </div>
            </header>

            <RevealSection id="section--1">
                <div class="section__title">
                    <h2 class="section__description">{"Features"}</h2>
                    <h3 class="section__header">
                        {"Everything you need in a modern bank and more."}
                    </h3>
                </div>
                <div class="features">
                    {
                        config.features.iter().map(|feature| html! {
                            <div class="features__feature">
                                <LazyImage
                                    src={feature.image.clone()}
                                    placeholder={feature.placeholder.clone()}
                                    alt={feature.alt.clone()}
                                    class={classes!("features__img")}
                                />
                                <h5 class="features__header">{&feature.title}</h5>
                                <p>{&feature.text}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </RevealSection>

            <RevealSection id="section--2">
                <div class="section__title">
                    <h2 class="section__description">{"Operations"}</h2>
                    <h3 class="section__header">
                        {"Everything as simple as possible, but no simpler."}
                    </h3>
                </div>
                <Operations tabs={config.tabs.clone()} />
            </RevealSection>

            <RevealSection id="section--3">
                <div class="section__title section__title--testimonials">
                    <h2 class="section__description">{"Not sure yet?"}</h2>
                    <h3 class="section__header">
                        {"Millions of Bankists are already making their lives simpler."}
                    </h3>
                </div>
                <Slider slides={config.testimonials.clone()} />
            </RevealSection>

            <RevealSection id="section--sign-up" class={classes!("section--sign-up")}>
                <div class="section__title">
                    <h3 class="section__header">
                        {"The best day to join Bankist was one year ago. The second best is today!"}
                    </h3>
                </div>
                <button class="btn btn--show-modal" onclick={open_modal}>
                    {"Open your free account today!"}
                </button>
            </RevealSection>

            <Footer node_ref={footer_ref.clone()} />
            <ScrollToTop target={footer_ref} />
            <Modal open={*modal_open} on_close={close_modal} />
            <style>{PAGE_CSS}</style>
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .header {
        padding: 0 3rem;
        height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .header__title {
        flex: 1;
        max-width: 115rem;
        display: grid;
        align-content: center;
        justify-content: center;
    }
    .section {
        padding: 15rem 3rem;
        border-top: 1px solid #ddd;
        transition: transform 1s, opacity 1s;
    }
    .section--hidden {
        opacity: 0;
        transform: translateY(8rem);
    }
    .section__title {
        max-width: 80rem;
        margin: 0 auto 8rem auto;
    }
    .section__description {
        font-size: 1.8rem;
        font-weight: 600;
        text-transform: uppercase;
        color: #5ec576;
        margin-bottom: 1rem;
    }
    .section__header {
        font-size: 4rem;
        line-height: 1.3;
        font-weight: 500;
    }
    .features {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        margin: 0 12rem;
    }
    .features__img {
        width: 100%;
    }
    .lazy-img {
        filter: blur(20px);
    }
    .section--sign-up {
        background-color: #37383d;
        border-top: none;
        text-align: center;
    }
    .section--sign-up .section__header {
        color: #fff;
    }
    .footer {
        padding: 10rem 3rem;
        background-color: #37383d;
    }
    .footer__nav {
        list-style: none;
        display: flex;
        justify-content: center;
        margin-bottom: 5rem;
    }
    .footer__item {
        margin-right: 4rem;
    }
    .footer__link {
        font-size: 1.6rem;
        color: #eee;
        text-decoration: none;
    }
    .footer__logo {
        height: 5rem;
        display: block;
        margin: 0 auto 5rem auto;
    }
    .footer__copyright {
        font-size: 1.4rem;
        color: #aaa;
        text-align: center;
    }
"#;
