use chrono::{Datelike, Local};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Lets the page watch when the footer comes into view.
    #[prop_or_default]
    pub node_ref: NodeRef,
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} Bankist. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer" ref={props.node_ref.clone()}>
            <ul class="footer__nav">
                <li class="footer__item"><a class="footer__link" href="#">{"About"}</a></li>
                <li class="footer__item"><a class="footer__link" href="#">{"Pricing"}</a></li>
                <li class="footer__item"><a class="footer__link" href="#">{"Terms of Use"}</a></li>
                <li class="footer__item"><a class="footer__link" href="#">{"Privacy Policy"}</a></li>
                <li class="footer__item"><a class="footer__link" href="#">{"Careers"}</a></li>
                <li class="footer__item"><a class="footer__link" href="#">{"Blog"}</a></li>
                <li class="footer__item"><a class="footer__link" href="#">{"Contact Us"}</a></li>
            </ul>
            <img src="/assets/icon.png" alt="Logo" class="footer__logo" />
            <p class="footer__copyright">{copyright_line(year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_mentions_year() {
        assert_eq!(copyright_line(2026), "© 2026 Bankist. All rights reserved.");
    }
}
