use chatmd::ClipboardError;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Clipboard;

/// Writes text to the system clipboard.
///
/// `navigator.clipboard` is undefined outside secure contexts; that is
/// reported as [`ClipboardError::Unavailable`] instead of a thrown exception.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = available(window.navigator().clipboard())?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(describe(&err)))
}

fn available(clipboard: Clipboard) -> Result<Clipboard, ClipboardError> {
    if clipboard.is_undefined() || clipboard.is_null() {
        Err(ClipboardError::Unavailable)
    } else {
        Ok(clipboard)
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_clipboard_is_unavailable() {
        let missing: Clipboard = JsValue::UNDEFINED.unchecked_into();
        assert_eq!(available(missing).err(), Some(ClipboardError::Unavailable));

        let missing: Clipboard = JsValue::NULL.unchecked_into();
        assert_eq!(available(missing).err(), Some(ClipboardError::Unavailable));
    }

    #[wasm_bindgen_test]
    fn test_describe_prefers_string_errors() {
        assert_eq!(describe(&JsValue::from_str("NotAllowedError")), "NotAllowedError");
    }
}
