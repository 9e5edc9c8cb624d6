use chrono::Datelike;
use yew::prelude::*;

use crate::components::decor::Dot;

pub fn copyright_line(year: i32) -> String {
    format!("© {} SmartFlow. Tous droits réservés.", year)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <span>{copyright_line(year)}</span>
                <span class="footer-tagline">
                    {"Design épuré"}<Dot />{"Violet moderne"}<Dot />{"Focalisé métier"}
                </span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright_line(2026), "© 2026 SmartFlow. Tous droits réservés.");
    }
}
