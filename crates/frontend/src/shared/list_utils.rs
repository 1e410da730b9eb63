/// List helpers shared by the pages.
use std::cmp::Ordering;
use wasm_bindgen::JsValue;

/// Sort entries in place by a Thai display name using the browser's
/// locale-aware collation (`Intl.Collator` with the `th` locale). Byte-order
/// comparison misplaces Thai vowels, so the browser collator is the source
/// of truth here.
pub fn sort_by_thai_name<T>(items: &mut [T], name: impl Fn(&T) -> String) {
    let collator = js_sys::Intl::Collator::new(
        &js_sys::Array::of1(&JsValue::from_str("th")),
        &js_sys::Object::new(),
    );
    let compare = collator.compare();

    items.sort_by(|a, b| {
        let result = compare
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(&name(a)),
                &JsValue::from_str(&name(b)),
            )
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);

        if result < 0.0 {
            Ordering::Less
        } else if result > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}
