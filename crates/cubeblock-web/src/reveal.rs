use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Whether an intersection report shows enough of the element to reveal it.
#[inline]
pub fn should_reveal(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    // browsers report ratios with rounding right at the threshold
    intersecting && ratio + 1e-3 >= threshold
}

/// Add `class` to every element matching `selector` the first time
/// `threshold` of it scrolls into view, then stop watching it.
///
/// Returns how many elements are being watched.
pub fn observe_reveals(
    document: &web::Document,
    selector: &str,
    threshold: f64,
    class: &'static str,
) -> anyhow::Result<u32> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if !should_reveal(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                continue;
            }
            let target = entry.target();
            let _ = target.class_list().add_1(class);
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| anyhow::anyhow!("IntersectionObserver unavailable: {:?}", e))?;
    callback.forget();

    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?;
    let mut watched = 0;
    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            observer.observe(&el);
            watched += 1;
        }
    }
    Ok(watched)
}
