//! Browser tests for context creation and the host exports.
//!
//! Run with `wasm-pack test --headless --chrome crates/glbridge-engine`.
#![cfg(target_arch = "wasm32")]

use glbridge_engine::BridgeError;
use glbridge_engine::device::{ContextInit, create_webgl2_context};
use glbridge_engine::host::HostBridge;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

const VS: &str = "#version 300 es
in vec2 a_position;
void main() { gl_Position = vec4(a_position, 0.0, 1.0); }
";

const FS: &str = "#version 300 es
precision mediump float;
uniform Globals { vec4 tint; };
out vec4 color;
void main() { color = tint; }
";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Appends a canvas laid out at 123x45 CSS pixels.
fn mount_canvas(id: &str) -> HtmlCanvasElement {
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_id(id);
    canvas
        .set_attribute("style", "display: block; width: 123px; height: 45px")
        .unwrap();
    document().body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn expect_context_error(init: &ContextInit) -> String {
    match create_webgl2_context(init) {
        Err(BridgeError::Context(msg)) => msg,
        Err(other) => panic!("expected a context error, got {other}"),
        Ok(_) => panic!("context creation unexpectedly succeeded"),
    }
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_context_error() {
    let msg = expect_context_error(&ContextInit::default().with_canvas_id("no-such-canvas"));
    assert!(msg.contains("no-such-canvas"), "{msg}");
}

#[wasm_bindgen_test]
fn non_canvas_element_is_a_context_error() {
    let div = document().create_element("div").unwrap();
    div.set_id("plain-div");
    document().body().unwrap().append_child(&div).unwrap();

    let msg = expect_context_error(&ContextInit::default().with_canvas_id("plain-div"));
    assert!(msg.contains("not a canvas"), "{msg}");
}

#[wasm_bindgen_test]
fn context_is_created_on_mounted_canvas() {
    mount_canvas("context-canvas");
    assert!(create_webgl2_context(&ContextInit::default().with_canvas_id("context-canvas")).is_ok());
}

#[wasm_bindgen_test]
fn unknown_uniform_block_reports_invalid_index() {
    mount_canvas("ubo-canvas");
    let mut bridge = HostBridge::init_context("ubo-canvas").unwrap();
    let program = bridge.create_program(VS, FS).unwrap();

    assert_eq!(bridge.get_uniform_block_index(program, "Missing").unwrap(), 0xFFFF_FFFF);

    let index = bridge.get_uniform_block_index(program, "Globals").unwrap();
    assert_ne!(index, 0xFFFF_FFFF);
    bridge.uniform_block_binding(program, index, 0).unwrap();
}

#[wasm_bindgen_test]
fn stale_program_id_is_rejected() {
    mount_canvas("stale-canvas");
    let mut bridge = HostBridge::init_context("stale-canvas").unwrap();
    let program = bridge.create_program(VS, FS).unwrap();

    assert!(bridge.delete_program(program));
    assert!(bridge.get_uniform_block_index(program, "Globals").is_err());
    assert!(bridge.get_uniform_block_index(program + 1, "Globals").is_err());
}

#[wasm_bindgen_test]
fn resize_is_applied_once() {
    mount_canvas("resize-canvas");
    let mut bridge = HostBridge::init_context("resize-canvas").unwrap();

    assert!(bridge.handle_resize());
    assert!(!bridge.handle_resize());

    let ratio = web_sys::window().unwrap().device_pixel_ratio();
    assert_eq!(bridge.backing_width(), (123.0 * ratio) as u32);
    assert_eq!(bridge.backing_height(), (45.0 * ratio) as u32);
}

#[wasm_bindgen_test]
fn buffer_range_binds_uploaded_uniform_buffer() {
    mount_canvas("range-canvas");
    let mut bridge = HostBridge::init_context("range-canvas").unwrap();
    let buffer = bridge.create_buffer().unwrap();
    bridge.uniform_buffer_data(buffer, &[0u8; 16]).unwrap();

    const UNIFORM_BUFFER: u32 = 0x8A11;
    bridge.bind_buffer_range(UNIFORM_BUFFER, 0, buffer, 0, 16).unwrap();
    assert!(bridge.bind_buffer_range(UNIFORM_BUFFER, 0, buffer, 0, 0).is_err());
    assert!(bridge.bind_buffer_range(0x8892, 0, buffer, 0, 16).is_err());
}
