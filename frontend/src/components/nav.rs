use log::debug;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::{self, NavLink, NAV_FADE_OPACITY};
use crate::observer::{inset_margin, use_intersection, ObserverOptions};
use crate::scroll::{follow, resolve_nav_target};

/// Something in the nav bar that fades while a link is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeItem {
    Logo,
    Link(usize),
}

/// Opacity of `item` while the link at `hovered` (if any) is under the pointer.
///
/// The hovered link itself stays fully opaque, its siblings and the logo drop
/// to `faded`.
pub fn fade_opacity(hovered: Option<usize>, item: FadeItem, faded: f64) -> f64 {
    match (hovered, item) {
        (None, _) => 1.0,
        (Some(link), FadeItem::Link(index)) if link == index => 1.0,
        (Some(_), _) => faded,
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: Vec<NavLink>,
    /// Header the nav sticks to once it scrolls out of view.
    pub header: NodeRef,
    pub on_open_modal: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { links, header, on_open_modal } = props;
    let nav_ref = use_node_ref();
    let nav_height = use_state(|| 0.0_f64);
    let is_sticky = use_state(|| false);
    let hovered = use_state(|| None::<usize>);

    {
        let nav_ref = nav_ref.clone();
        let nav_height = nav_height.clone();
        use_effect_with_deps(move |_| {
            if let Some(nav) = nav_ref.cast::<Element>() {
                let height = nav.get_bounding_client_rect().height();
                debug!("Nav height {}px", height);
                nav_height.set(height);
            }
            || ()
        }, ());
    }

    {
        let is_sticky = is_sticky.clone();
        use_intersection(
            header.clone(),
            ObserverOptions::new(0.0).root_margin(inset_margin(*nav_height)),
            Callback::from(move |header_visible: bool| {
                debug!("Header visible: {}", header_visible);
                is_sticky.set(!header_visible);
            }),
        );
    }

    let clear_hover = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let opacity = |item: FadeItem| format!("opacity: {}", fade_opacity(*hovered, item, NAV_FADE_OPACITY));

    html! {
        <nav class={classes!("nav", (*is_sticky).then(|| "sticky"))} ref={nav_ref}>
            <img src="/assets/logo.png" alt="Bankist logo" class="nav__logo" style={opacity(FadeItem::Logo)} />
            <ul class="nav__links">
                {
                    links.iter().enumerate().map(|(index, link)| {
                        let target = resolve_nav_target(&link.href);
                        let opens_modal = link.opens_modal;
                        let onclick = {
                            let on_open_modal = on_open_modal.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                if opens_modal {
                                    on_open_modal.emit(e);
                                } else {
                                    follow(&target, config::get_app_url());
                                }
                            })
                        };
                        let onmouseover = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        html! {
                            <li class="nav__item">
                                <a
                                    class={classes!("nav__link", opens_modal.then(|| classes!("nav__link--btn", "btn--show-modal")))}
                                    href={link.href.clone()}
                                    style={opacity(FadeItem::Link(index))}
                                    onclick={onclick}
                                    onmouseover={onmouseover}
                                    onmouseout={clear_hover.clone()}
                                >
                                    {&link.label}
                                </a>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
            <style>{NAV_CSS}</style>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .nav {
        display: flex;
        justify-content: space-between;
        align-items: center;
        height: 9rem;
        width: 100%;
        padding: 0 6rem;
        z-index: 100;
    }
    .nav.sticky {
        position: fixed;
        background-color: rgba(255, 255, 255, 0.95);
    }
    .nav__logo {
        height: 4.5rem;
        transition: all 0.3s;
    }
    .nav__links {
        display: flex;
        align-items: center;
        list-style: none;
    }
    .nav__item {
        margin-left: 4rem;
    }
    .nav__link:link,
    .nav__link:visited {
        font-size: 1.7rem;
        font-weight: 400;
        color: inherit;
        text-decoration: none;
        display: block;
        transition: all 0.3s;
    }
    .nav__link--btn:link,
    .nav__link--btn:visited {
        padding: 0.8rem 2.5rem;
        border-radius: 3rem;
        background-color: #5ec576;
        color: #222;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fades_without_hover() {
        assert_eq!(fade_opacity(None, FadeItem::Logo, 0.5), 1.0);
        assert_eq!(fade_opacity(None, FadeItem::Link(2), 0.5), 1.0);
    }

    #[test]
    fn hovered_link_stays_opaque() {
        assert_eq!(fade_opacity(Some(1), FadeItem::Link(1), 0.5), 1.0);
    }

    #[test]
    fn siblings_and_logo_fade() {
        assert_eq!(fade_opacity(Some(1), FadeItem::Link(0), 0.5), 0.5);
        assert_eq!(fade_opacity(Some(1), FadeItem::Link(3), 0.5), 0.5);
        assert_eq!(fade_opacity(Some(1), FadeItem::Logo, NAV_FADE_OPACITY), NAV_FADE_OPACITY);
    }
}
