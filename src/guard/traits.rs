/*!
 * Guard Traits
 *
 * Core abstractions for policy-driven resource guards
 */

use super::{GuardMetadata, GuardResult};

/// Cleanup policy for one kind of resource
///
/// A policy names the raw handle type and supplies the destroy operation.
/// [`ResourceGuard`](super::ResourceGuard) is parameterized over a policy,
/// so a single generic guard covers every "dumb" handle without a bespoke
/// wrapper type per resource.
///
/// # Contract
///
/// `destroy` must be safe to call with any handle value the owning guard
/// may hold. It must not panic: if the underlying cleanup can fail, the
/// policy has to absorb the failure (e.g. log it), because the guard offers
/// no channel to propagate it.
///
/// # Example
///
/// ```rust
/// use resguard::DestroyPolicy;
///
/// struct ShmPolicy;
///
/// impl DestroyPolicy for ShmPolicy {
///     type Handle = u64;
///
///     fn destroy(segment_id: u64) {
///         log::debug!("detaching shm segment {}", segment_id);
///     }
///
///     fn resource_type() -> &'static str {
///         "shm"
///     }
/// }
/// ```
pub trait DestroyPolicy {
    /// Raw handle type stored by the guard
    ///
    /// The `Default` value is the empty-guard placeholder. It is never
    /// passed to `destroy` unless a caller explicitly binds it.
    type Handle: Default;

    /// Destroy the resource behind `handle`
    ///
    /// # Panics
    ///
    /// Must NOT panic. Absorb failures inside the policy.
    fn destroy(handle: Self::Handle);

    /// Resource type name for logging/debugging
    fn resource_type() -> &'static str {
        "resource"
    }
}

/// Core guard trait
///
/// Implemented by anything that owns a resource with scoped cleanup:
/// - Resource type identification
/// - Metadata access
/// - Manual release ahead of scope exit
pub trait Guard {
    /// Resource type name for logging/debugging
    fn resource_type(&self) -> &'static str;

    /// Get guard metadata
    fn metadata(&self) -> &GuardMetadata;

    /// Check if the guard still owns a live handle
    fn is_active(&self) -> bool;

    /// Destroy the resource now instead of at scope exit
    ///
    /// Returns `Err` if the guard is empty or already released
    fn release(&mut self) -> GuardResult<()>;
}

/// Guards that run cleanup from `Drop`
///
/// Separates the drop logic from the `Drop` impl for better testability
pub trait GuardDrop: Guard {
    /// Perform cleanup on drop
    ///
    /// # Panics
    ///
    /// Should NOT panic. Log errors instead.
    fn on_drop(&mut self);
}
