use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{Document, HtmlFormElement};
use wasm_bindgen::JsCast;

use crate::components::contact::FORM_FIELDS;
use crate::controller::{NavLink, ABOUT, CONTACT, HOME, METHOD, OFFER};

pub const EXPECTED_SECTION_IDS: &[&str] = &[HOME, ABOUT, OFFER, METHOD, CONTACT];

/// What the structure checks need to know about the rendered page.
pub trait PageProbe {
    fn has_element(&self, id: &str) -> bool;
    fn nav_button_count(&self) -> usize;
    fn has_contact_form(&self) -> bool;
    fn has_form_field(&self, name: &str) -> bool;
}

impl PageProbe for Document {
    fn has_element(&self, id: &str) -> bool {
        self.get_element_by_id(id).is_some()
    }

    fn nav_button_count(&self) -> usize {
        self.query_selector_all("header nav button")
            .map(|nodes| nodes.length() as usize)
            .unwrap_or(0)
    }

    fn has_contact_form(&self) -> bool {
        contact_form(self).is_some()
    }

    fn has_form_field(&self, name: &str) -> bool {
        contact_form(self)
            .and_then(|form| form.query_selector(&format!("[name=\"{}\"]", name)).ok().flatten())
            .is_some()
    }
}

fn contact_form(document: &Document) -> Option<HtmlFormElement> {
    document
        .query_selector("#contact form")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
}

/// Returns one message per failed structure check.
pub fn run_checks<P: PageProbe>(links: &[NavLink], probe: &P) -> Vec<String> {
    let mut failures = Vec::new();

    for id in EXPECTED_SECTION_IDS {
        if !links.iter().any(|link| link.id == *id) {
            failures.push(format!("nav link for #{} missing", id));
        }
        if !probe.has_element(id) {
            failures.push(format!("#{} missing", id));
        }
    }

    let buttons = probe.nav_button_count();
    if buttons != EXPECTED_SECTION_IDS.len() {
        failures.push(format!(
            "expected {} nav buttons, found {}",
            EXPECTED_SECTION_IDS.len(),
            buttons
        ));
    }

    if probe.has_contact_form() {
        for name in FORM_FIELDS {
            if !probe.has_form_field(name) {
                failures.push(format!("form field \"{}\" missing", name));
            }
        }
    } else {
        failures.push("contact form missing".to_string());
    }

    failures
}

/// Runs the structure checks once the current render has been flushed.
/// Failures are logged, never raised.
pub fn schedule(links: &'static [NavLink]) {
    Timeout::new(0, move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let failures = run_checks(links, &document);
        if failures.is_empty() {
            gloo_console::log!("[SmartFlow] smoke tests passed ✔");
        } else {
            for failure in failures {
                warn!("[SmartFlow] smoke tests warning: {}", failure);
            }
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::NAV_LINKS;

    struct FakeProbe {
        ids: Vec<&'static str>,
        buttons: usize,
        form_fields: Option<Vec<&'static str>>,
    }

    impl FakeProbe {
        fn complete() -> Self {
            Self {
                ids: EXPECTED_SECTION_IDS.to_vec(),
                buttons: 5,
                form_fields: Some(FORM_FIELDS.to_vec()),
            }
        }
    }

    impl PageProbe for FakeProbe {
        fn has_element(&self, id: &str) -> bool {
            self.ids.iter().any(|known| *known == id)
        }

        fn nav_button_count(&self) -> usize {
            self.buttons
        }

        fn has_contact_form(&self) -> bool {
            self.form_fields.is_some()
        }

        fn has_form_field(&self, name: &str) -> bool {
            self.form_fields
                .as_ref()
                .map(|fields| fields.iter().any(|f| *f == name))
                .unwrap_or(false)
        }
    }

    #[test]
    fn expected_ids_follow_navigation_order() {
        let nav_ids: Vec<_> = NAV_LINKS.iter().map(|link| link.id).collect();
        assert_eq!(EXPECTED_SECTION_IDS, nav_ids.as_slice());
    }

    #[test]
    fn complete_page_passes() {
        assert!(run_checks(NAV_LINKS, &FakeProbe::complete()).is_empty());
    }

    #[test]
    fn reports_missing_section_and_button_count() {
        let mut probe = FakeProbe::complete();
        probe.ids.retain(|id| *id != "contact");
        probe.buttons = 4;
        let failures = run_checks(NAV_LINKS, &probe);
        assert_eq!(
            failures,
            vec!["#contact missing".to_string(), "expected 5 nav buttons, found 4".to_string()]
        );
    }

    #[test]
    fn reports_missing_form_and_fields() {
        let mut probe = FakeProbe::complete();
        probe.form_fields = Some(vec!["name", "email"]);
        let failures = run_checks(NAV_LINKS, &probe);
        assert_eq!(failures.len(), 2);
        assert!(failures[0].contains("subject"));

        probe.form_fields = None;
        assert_eq!(run_checks(NAV_LINKS, &probe), vec!["contact form missing".to_string()]);
    }

    #[test]
    fn reports_links_without_expected_ids() {
        let links = &NAV_LINKS[..4];
        let failures = run_checks(links, &FakeProbe::complete());
        assert_eq!(failures, vec!["nav link for #contact missing".to_string()]);
    }
}
