/*!
 * RAII Resource Guards
 *
 * Generic, policy-driven guards with automatic cleanup.
 *
 * ## Design Principles
 *
 * 1. **Single Ownership**: exactly one guard owns a live handle
 * 2. **At-Most-Once Cleanup**: destroy runs once, at end of lifetime
 * 3. **Move-Only**: duplication is a compile error, transfer is a swap
 * 4. **Infallible**: construction and transfer never fail
 *
 * ## Example
 *
 * ```rust
 * use resguard::{DestroyPolicy, ResourceGuard};
 *
 * struct FdPolicy;
 *
 * impl DestroyPolicy for FdPolicy {
 *     type Handle = i32;
 *
 *     fn destroy(_fd: i32) {
 *         // close(fd), absorbing any failure
 *     }
 *
 *     fn resource_type() -> &'static str {
 *         "fd"
 *     }
 * }
 *
 * let guard = ResourceGuard::<FdPolicy>::new(3);
 * assert_eq!(*guard, 3);
 * // Destroyed automatically when `guard` goes out of scope
 * ```
 */

mod resource;
mod traits;

pub use resource::ResourceGuard;
pub use traits::{DestroyPolicy, Guard, GuardDrop};

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors that can occur during guard operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum GuardError {
    #[error("Resource already released")]
    AlreadyReleased,
}

/// Guard metadata for logging and diagnostics
#[derive(Debug, Clone)]
pub struct GuardMetadata {
    pub resource_type: &'static str,
    pub creation_time: std::time::Instant,
}

impl GuardMetadata {
    #[inline]
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            creation_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}
