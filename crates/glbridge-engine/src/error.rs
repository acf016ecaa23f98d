use std::fmt;

use crate::gl::ShaderKind;

/// Step of program construction that failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    /// A single shader object failed to compile.
    Compile(ShaderKind),
    /// The program failed to link.
    Link,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Compile(kind) => write!(f, "{kind} compile"),
            ShaderStage::Link => f.write_str("link"),
        }
    }
}

/// Compile or link failure, carrying the driver's info log.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("shader {stage} failed: {log}")]
pub struct ShaderError {
    pub stage: ShaderStage,
    pub log: String,
}

impl ShaderError {
    pub(crate) fn new(stage: ShaderStage, log: Option<String>) -> Self {
        let log = log
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| "no info log".to_string());
        Self { stage, log }
    }
}

/// Errors raised by the bridge layer.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The handle was never issued, or its object has been removed.
    #[error("stale or unknown {kind} handle {host_id}")]
    StaleHandle { kind: &'static str, host_id: u64 },

    #[error("uniform block index {index} out of range ({active} active blocks)")]
    UniformBlockOutOfRange { index: u32, active: u32 },

    #[error("invalid buffer range: offset {offset}, size {size}")]
    InvalidRange { offset: i32, size: i32 },

    #[error("unsupported indexed buffer target {0:#x}")]
    UnsupportedTarget(u32),

    /// The GL implementation returned no object (typically a lost context).
    #[error("failed to create {0}")]
    ObjectCreation(&'static str),

    #[error("context initialization failed: {0}")]
    Context(String),

    #[error(transparent)]
    Shader(#[from] ShaderError),
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;

#[cfg(target_arch = "wasm32")]
impl From<BridgeError> for wasm_bindgen::JsValue {
    fn from(err: BridgeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_error_names_stage() {
        let err = ShaderError::new(ShaderStage::Compile(ShaderKind::Fragment), Some("0:3: oops".into()));
        assert_eq!(err.to_string(), "shader fragment compile failed: 0:3: oops");
    }

    #[test]
    fn empty_info_log_is_replaced() {
        let err = ShaderError::new(ShaderStage::Link, Some("  ".into()));
        assert_eq!(err.log, "no info log");
    }

    #[test]
    fn shader_error_converts_into_bridge_error() {
        let err: BridgeError = ShaderError::new(ShaderStage::Link, None).into();
        assert!(matches!(err, BridgeError::Shader(ShaderError { stage: ShaderStage::Link, .. })));
    }
}
