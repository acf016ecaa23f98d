//! GLSL ES 3.00 sources for the demo triangle.

/// Passes the 2D position straight through to clip space.
pub(crate) const VERTEX: &str = r#"#version 300 es
precision mediump float;

in vec4 a_position;

void main() {
    gl_Position = a_position;
}
"#;

/// Constant magenta-ish fill.
pub(crate) const FRAGMENT: &str = r#"#version 300 es
precision mediump float;

out vec4 outColor;

void main() {
    outColor = vec4(1.0, 0.0, 0.5, 1.0);
}
"#;

/// Name of the position attribute in [`VERTEX`].
pub(crate) const POSITION_ATTRIBUTE: &str = "a_position";
