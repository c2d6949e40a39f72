//! The theme toggle checkbox as a [`ToggleControl`].

use crate::state::theme::ToggleControl;

#[cfg(feature = "csr")]
use crate::state::theme::TOGGLE_CONTROL_ID;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// `<input type="checkbox" id="theme-toggle">` found in the page.
#[derive(Clone, Debug)]
pub struct CheckboxToggle {
    #[cfg(feature = "csr")]
    input: web_sys::HtmlInputElement,
}

impl CheckboxToggle {
    /// Look the control up by id. `None` when the page has no toggle.
    pub fn find() -> Option<Self> {
        #[cfg(feature = "csr")]
        {
            let input = web_sys::window()?
                .document()?
                .get_element_by_id(TOGGLE_CONTROL_ID)?
                .dyn_into::<web_sys::HtmlInputElement>()
                .ok()?;
            Some(Self { input })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

impl ToggleControl for CheckboxToggle {
    fn set_checked(&mut self, checked: bool) {
        #[cfg(feature = "csr")]
        {
            self.input.set_checked(checked);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = checked;
        }
    }
}
