/*!
 * Resource Guard Library
 * Policy-driven RAII resource guards and debug-build tracing
 */

pub mod guard;
pub mod trace;

// Re-exports
pub use guard::{
    DestroyPolicy, Guard, GuardDrop, GuardError, GuardMetadata, GuardResult, ResourceGuard,
};
pub use trace::Tracer;
