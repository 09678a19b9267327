use keeb_kernel::{KernelError, KernelSolidHandle};

/// Non-fatal notes from a generation run.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
}

/// Result of a part generation: the solid in the kernel plus diagnostics.
/// The handle is runtime-only; it belongs to the kernel session that
/// produced it.
#[derive(Debug, Clone)]
pub struct PartOutput {
    pub handle: KernelSolidHandle,
    pub diagnostics: Diagnostics,
}

/// Errors from the part generators. Parameter validation fails before any
/// kernel call; kernel failures propagate unchanged — generation is
/// deterministic, so a retry with the same parameters cannot succeed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenError {
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}
