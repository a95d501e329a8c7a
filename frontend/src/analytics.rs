//! Fire-and-forget delivery of named events to whatever trackers the page
//! template injected globally (GTM dataLayer, gtag, Facebook pixel). A
//! missing or broken tracker is skipped silently; game state never waits on
//! any of this.

use js_sys::{Array, Function, Object, Reflect};
use shared::analytics::TrackedEvent;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

pub fn track(event: &TrackedEvent) {
    let Some(window) = web_sys::window() else { return };
    let name = event.name();
    let params = params_object(event);

    push_data_layer(&window, name, &params);
    if let Some(gtag) = global_function(&window, "gtag") {
        let _ = gtag.call3(&JsValue::NULL, &"event".into(), &name.into(), &params);
    }
    if let Some(fbq) = global_function(&window, "fbq") {
        let _ = fbq.call3(&JsValue::NULL, &"trackCustom".into(), &name.into(), &params);
    }

    // Standard pixel conversion events ride along with their custom events.
    match event {
        TrackedEvent::JackpotReached { .. } => {
            pixel_track(&window, "Lead", &[("content_name", JsValue::from_str("Jackpot Win"))]);
        }
        TrackedEvent::CtaClicked => {
            pixel_track(
                &window,
                "InitiateCheckout",
                &[
                    ("content_name", JsValue::from_str("VIP Bonus")),
                    ("value", JsValue::from_f64(500.0)),
                    ("currency", JsValue::from_str("USD")),
                ],
            );
        }
        _ => {}
    }

    log::info!("analytics: {} {:?}", name, event.params());
}

fn params_object(event: &TrackedEvent) -> Object {
    let params = Object::new();
    for (key, value) in event.params() {
        let _ = Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(&value));
    }
    params
}

fn global_function(window: &Window, name: &str) -> Option<Function> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn push_data_layer(window: &Window, name: &str, params: &Object) {
    let Ok(value) = Reflect::get(window, &JsValue::from_str("dataLayer")) else { return };
    let Ok(layer) = value.dyn_into::<Array>() else { return };
    let entry = Object::new();
    let _ = Reflect::set(&entry, &JsValue::from_str("event"), &JsValue::from_str(name));
    let _ = Object::assign(&entry, params);
    layer.push(&entry);
}

fn pixel_track(window: &Window, event_name: &str, fields: &[(&str, JsValue)]) {
    let Some(fbq) = global_function(window, "fbq") else { return };
    let payload = Object::new();
    for (key, value) in fields {
        let _ = Reflect::set(&payload, &JsValue::from_str(key), value);
    }
    let _ = fbq.call3(&JsValue::NULL, &"track".into(), &event_name.into(), &payload);
}
