//! Test suite for WASM bindings
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use sign_web::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const FRAME_MS: f64 = 33.0;

/// Open right hand, every finger straight up, index and pinky 0.12 apart
fn open_palm_flat() -> Vec<f32> {
    let mut hand: Vec<[f32; 3]> = vec![
        [0.5, 0.8, 0.0],   // wrist
        [0.44, 0.76, 0.0], // thumb
        [0.40, 0.72, 0.0],
        [0.38, 0.69, 0.0],
        [0.36, 0.66, 0.0],
    ];
    for x in [0.44, 0.48, 0.52, 0.56] {
        hand.push([x, 0.6, 0.0]);
        hand.push([x, 0.62, 0.0]);
        hand.push([x, 0.64, 0.0]);
        hand.push([x, 0.5, 0.0]);
    }
    hand.into_iter().flatten().collect()
}

fn recorder() -> (Rc<RefCell<Vec<String>>>, Closure<dyn FnMut(String)>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let closure = Closure::wrap(Box::new(move |label: String| {
        sink.borrow_mut().push(label);
    }) as Box<dyn FnMut(String)>);
    (seen, closure)
}

#[wasm_bindgen_test]
fn test_version() {
    assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen_test]
fn test_supported_labels() {
    let labels = supported_labels();
    assert_eq!(labels.len(), 15);
    assert_eq!(labels[0].as_string().as_deref(), Some("HELLO"));
}

#[wasm_bindgen_test]
fn test_default_config() {
    let recognizer = SignRecognizer::new(JsValue::UNDEFINED).unwrap();
    let config: RecognizerConfig =
        serde_wasm_bindgen::from_value(recognizer.get_config().unwrap()).unwrap();
    assert_eq!(config, RecognizerConfig::default());
}

#[wasm_bindgen_test]
fn test_partial_config_override() {
    let overrides = js_sys::Object::new();
    js_sys::Reflect::set(&overrides, &"cooldownMs".into(), &JsValue::from_f64(500.0)).unwrap();

    let recognizer = SignRecognizer::new(overrides.into()).unwrap();
    let config: RecognizerConfig =
        serde_wasm_bindgen::from_value(recognizer.get_config().unwrap()).unwrap();
    assert_eq!(config.cooldown_ms, 500.0);
    assert_eq!(config.buffer_size, 12);
}

#[wasm_bindgen_test]
fn test_invalid_config_rejected() {
    let overrides = js_sys::Object::new();
    js_sys::Reflect::set(&overrides, &"stableThreshold".into(), &JsValue::from_f64(40.0)).unwrap();
    assert!(SignRecognizer::new(overrides.into()).is_err());
}

#[wasm_bindgen_test]
fn test_hello_reaches_callback_once() {
    let mut recognizer = SignRecognizer::new(JsValue::NULL).unwrap();
    let (seen, closure) = recorder();
    recognizer.set_on_recognized(closure.as_ref().unchecked_ref::<js_sys::Function>().clone());

    let flat = open_palm_flat();
    let mut returned = Vec::new();
    for i in 0..12 {
        if let Some(label) = recognizer.push_frame(&flat, 1, Some(i as f64 * FRAME_MS)) {
            returned.push(label);
        }
    }

    assert_eq!(returned, vec!["HELLO".to_string()]);
    assert_eq!(*seen.borrow(), vec!["HELLO".to_string()]);
    assert_eq!(recognizer.last_label().as_deref(), Some("HELLO"));
    assert!(recognizer.is_cooling_down());
}

#[wasm_bindgen_test]
fn test_no_hand_clears_buffer() {
    let mut recognizer = SignRecognizer::new(JsValue::NULL).unwrap();
    let flat = open_palm_flat();
    for i in 0..5 {
        recognizer.push_frame(&flat, 1, Some(i as f64 * FRAME_MS));
    }
    assert_eq!(recognizer.buffered_frames(), 5);

    recognizer.push_no_hand(Some(200.0));
    assert_eq!(recognizer.buffered_frames(), 0);
}

#[wasm_bindgen_test]
fn test_truncated_frame_counts_as_no_hand() {
    let mut recognizer = SignRecognizer::new(JsValue::NULL).unwrap();
    let flat = open_palm_flat();
    recognizer.push_frame(&flat, 1, Some(0.0));
    assert_eq!(recognizer.push_frame(&flat[..30], 1, Some(FRAME_MS)), None);
    assert_eq!(recognizer.buffered_frames(), 0);
}

#[wasm_bindgen_test]
fn test_expire_cooldown() {
    let mut recognizer = SignRecognizer::new(JsValue::NULL).unwrap();
    let flat = open_palm_flat();
    for i in 0..7 {
        recognizer.push_frame(&flat, 1, Some(i as f64 * FRAME_MS));
    }
    assert!(recognizer.is_cooling_down());
    recognizer.expire_cooldown();
    assert!(!recognizer.is_cooling_down());
}

#[wasm_bindgen_test]
fn test_close_ignores_frames() {
    let mut recognizer = SignRecognizer::new(JsValue::NULL).unwrap();
    recognizer.close();

    let flat = open_palm_flat();
    for i in 0..20 {
        assert_eq!(recognizer.push_frame(&flat, 1, Some(i as f64 * FRAME_MS)), None);
    }
    assert_eq!(recognizer.last_label(), None);
}

#[wasm_bindgen_test]
fn test_reset_forgets_last_label() {
    let mut recognizer = SignRecognizer::new(JsValue::NULL).unwrap();
    let flat = open_palm_flat();
    for i in 0..7 {
        recognizer.push_frame(&flat, 1, Some(i as f64 * FRAME_MS));
    }
    recognizer.reset();
    assert_eq!(recognizer.last_label(), None);
    assert!(!recognizer.is_cooling_down());
}

#[wasm_bindgen_test]
fn test_non_finite_timestamp_uses_page_clock() {
    let mut recognizer = SignRecognizer::new(JsValue::NULL).unwrap();
    let flat = open_palm_flat();
    for _ in 0..7 {
        recognizer.push_frame(&flat, 1, Some(f64::NAN));
    }
    assert_eq!(recognizer.last_label().as_deref(), Some("HELLO"));

    // Armed at the real clock, so the cooldown is still running
    recognizer.push_no_hand(Some(f64::INFINITY));
    assert!(recognizer.is_cooling_down());
}
