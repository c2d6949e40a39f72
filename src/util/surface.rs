//! Document-backed theme surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paints a [`Theme`] onto the live page: the `data-theme` attribute and
//! `dark-mode` class on `<html>`, CSS custom properties on the root scope,
//! `<meta name="theme-color">`, and the dark-mode inline fixups.
//!
//! Each element a fixup touches records the properties it owns in a
//! `data-theme-fixup` attribute, so reverting removes exactly those and never
//! an inline style the page author wrote.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::state::theme::{Fixup, Theme, ThemeSurface};

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Attribute listing the inline properties a fixup set on an element.
pub const FIXUP_ATTR: &str = "data-theme-fixup";
/// Root class that turns CSS transitions on after the first paint.
pub const TRANSITIONS_CLASS: &str = "theme-transitions";
#[cfg(feature = "csr")]
const DARK_CLASS: &str = "dark-mode";

/// Whether `property` is listed in a fixup ownership attribute value.
pub fn is_owned(list: &str, property: &str) -> bool {
    list.split_whitespace().any(|p| p == property)
}

/// Ownership list with `property` added (no duplicates).
pub fn with_owned(list: &str, property: &str) -> String {
    if is_owned(list, property) {
        return list.trim().to_owned();
    }
    list.split_whitespace()
        .chain(std::iter::once(property))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ownership list with `property` removed.
pub fn without_owned(list: &str, property: &str) -> String {
    list.split_whitespace()
        .filter(|p| *p != property)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ownership list to record after setting `property` on an element whose
/// current inline value is `inline` and ownership list is `owned`. `None`
/// means the value was written by the page author and must be left alone.
pub fn apply_ownership(owned: &str, inline: &str, property: &str) -> Option<String> {
    if !inline.is_empty() && !is_owned(owned, property) {
        return None;
    }
    Some(with_owned(owned, property))
}

/// What reverting a fixup does to one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Revert {
    /// The inline value is not ours.
    Keep,
    /// Remove the inline value and store `remaining` as the new ownership
    /// list, dropping the attribute when it is `None`.
    Remove { remaining: Option<String> },
}

/// Decide how to revert `property` given the element's ownership list.
pub fn revert_ownership(owned: Option<&str>, property: &str) -> Revert {
    match owned {
        Some(list) if is_owned(list, property) => {
            let rest = without_owned(list, property);
            Revert::Remove {
                remaining: (!rest.is_empty()).then_some(rest),
            }
        }
        _ => Revert::Keep,
    }
}

/// Theme surface over `document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

#[cfg(feature = "csr")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "csr")]
fn root() -> Option<web_sys::HtmlElement> {
    document()?.document_element()?.dyn_into::<web_sys::HtmlElement>().ok()
}

/// Every element matching `selector`.
#[cfg(feature = "csr")]
fn matching(selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

#[cfg(feature = "csr")]
fn chrome_meta(doc: &web_sys::Document) -> Option<web_sys::Element> {
    if let Ok(Some(meta)) = doc.query_selector("meta[name=\"theme-color\"]") {
        return Some(meta);
    }
    let meta = doc.create_element("meta").ok()?;
    let _ = meta.set_attribute("name", "theme-color");
    let _ = doc.head()?.append_child(&meta);
    Some(meta)
}

impl ThemeSurface for DocumentSurface {
    fn set_marker(&mut self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            let Some(el) = root() else {
                return;
            };
            let _ = el.set_attribute("data-theme", theme.as_str());
            let class_list = el.class_list();
            if theme.is_dark() {
                let _ = class_list.add_1(DARK_CLASS);
            } else {
                let _ = class_list.remove_1(DARK_CLASS);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }

    fn set_token(&mut self, name: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = root() {
                let _ = el.style().set_property(name, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, value);
        }
    }

    fn set_chrome_color(&mut self, color: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(meta) = document().as_ref().and_then(chrome_meta) {
                let _ = meta.set_attribute("content", color);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = color;
        }
    }

    fn apply_fixup(&mut self, fixup: &Fixup) {
        #[cfg(feature = "csr")]
        {
            for el in matching(fixup.target.selector()) {
                let owned = el.get_attribute(FIXUP_ATTR).unwrap_or_default();
                let style = el.style();
                let inline = style.get_property_value(fixup.property).unwrap_or_default();
                let Some(owned) = apply_ownership(&owned, &inline, fixup.property) else {
                    continue;
                };
                let _ = style.set_property(fixup.property, fixup.value);
                let _ = el.set_attribute(FIXUP_ATTR, &owned);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = fixup;
        }
    }

    fn revert_fixup(&mut self, fixup: &Fixup) {
        #[cfg(feature = "csr")]
        {
            for el in matching(fixup.target.selector()) {
                let owned = el.get_attribute(FIXUP_ATTR);
                let Revert::Remove { remaining } = revert_ownership(owned.as_deref(), fixup.property) else {
                    continue;
                };
                let _ = el.style().remove_property(fixup.property);
                match remaining {
                    Some(rest) => {
                        let _ = el.set_attribute(FIXUP_ATTR, &rest);
                    }
                    None => {
                        let _ = el.remove_attribute(FIXUP_ATTR);
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = fixup;
        }
    }

    fn set_transitions(&mut self, enabled: bool) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = root() {
                let _ = el.class_list().toggle_with_force(TRANSITIONS_CLASS, enabled);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = enabled;
        }
    }
}
