/*!
 * Policy-Driven Resource Guard
 *
 * Single-slot RAII wrapper with move-only ownership transfer
 */

use super::traits::{DestroyPolicy, Guard, GuardDrop};
use super::{GuardError, GuardMetadata, GuardResult};
use std::mem;
use std::ops::Deref;

/// Scope-bound owner of a single resource handle
///
/// Holds zero or one handle together with a validity flag and invokes
/// [`DestroyPolicy::destroy`] on the handle exactly once, when the guard is
/// dropped, if and only if the guard still owns it.
///
/// Guards are move-only. There is no `Clone` impl: duplicating a guard
/// would mean two owners for one live handle, so duplication is rejected at
/// compile time rather than at runtime. Ownership travels through a native
/// move, or through [`take`](Self::take)/[`swap`](Self::swap) when the
/// source has to stay around as a (now empty) value.
///
/// A guard dereferences to its handle, so it can be handed to APIs that
/// expect the raw handle type without releasing ownership.
///
/// # Thread Safety
///
/// A guard is `Send`/`Sync` exactly when its handle is. Transfer and drop
/// are not synchronized; a guard instance must not be mutated from two
/// threads at once.
///
/// # Example
///
/// ```rust
/// use resguard::{DestroyPolicy, ResourceGuard};
///
/// struct TokenPolicy;
///
/// impl DestroyPolicy for TokenPolicy {
///     type Handle = u32;
///
///     fn destroy(_token: u32) {}
/// }
///
/// let first = ResourceGuard::<TokenPolicy>::new(7);
/// let second = first; // ownership moves; `first` is statically dead
/// assert_eq!(*second, 7);
/// ```
pub struct ResourceGuard<P: DestroyPolicy> {
    handle: P::Handle,
    active: bool,
    metadata: GuardMetadata,
}

impl<P: DestroyPolicy> ResourceGuard<P> {
    /// Create a guard that owns nothing
    ///
    /// Dropping an empty guard never calls the policy.
    #[inline]
    pub fn empty() -> Self {
        Self {
            handle: P::Handle::default(),
            active: false,
            metadata: GuardMetadata::new(P::resource_type()),
        }
    }

    /// Create a guard that adopts `handle`
    ///
    /// The handle is stored as-is. The guard knows nothing about resource
    /// semantics, so the caller is responsible for handing it a handle that
    /// actually needs cleanup via [`DestroyPolicy::destroy`].
    #[inline]
    pub fn new(handle: P::Handle) -> Self {
        Self {
            handle,
            active: true,
            metadata: GuardMetadata::new(P::resource_type()),
        }
    }

    /// Borrow the stored handle
    #[inline]
    pub fn handle(&self) -> &P::Handle {
        &self.handle
    }

    /// Copy the stored handle out
    ///
    /// Read-only projection: ownership and validity are unaffected.
    #[inline]
    pub fn get(&self) -> P::Handle
    where
        P::Handle: Copy,
    {
        self.handle
    }

    /// Exchange state with another guard
    ///
    /// Transfer in both directions reduces to this exchange: the handle,
    /// the validity flag, and the metadata swap together.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.handle, &mut other.handle);
        mem::swap(&mut self.active, &mut other.active);
        mem::swap(&mut self.metadata, &mut other.metadata);
    }

    /// Transfer ownership out, leaving this guard empty
    ///
    /// The source stays a legal value: dropping it, or taking from it
    /// again, has no effect. Only the returned guard owns the handle.
    #[inline]
    pub fn take(&mut self) -> Self {
        let mut taken = Self::empty();
        taken.swap(self);
        taken
    }

    /// Relinquish the handle without destroying it
    ///
    /// The caller assumes responsibility for cleanup.
    pub fn into_handle(mut self) -> P::Handle {
        self.active = false;
        mem::take(&mut self.handle)
    }
}

impl<P: DestroyPolicy> Default for ResourceGuard<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: DestroyPolicy> Deref for ResourceGuard<P> {
    type Target = P::Handle;

    #[inline]
    fn deref(&self) -> &P::Handle {
        &self.handle
    }
}

impl<P: DestroyPolicy> Guard for ResourceGuard<P> {
    fn resource_type(&self) -> &'static str {
        P::resource_type()
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn release(&mut self) -> GuardResult<()> {
        if !self.active {
            return Err(GuardError::AlreadyReleased);
        }

        self.active = false;
        P::destroy(mem::take(&mut self.handle));

        log::trace!(
            "{} guard released after {}us",
            P::resource_type(),
            self.metadata.lifetime_micros()
        );
        Ok(())
    }
}

impl<P: DestroyPolicy> GuardDrop for ResourceGuard<P> {
    fn on_drop(&mut self) {
        if self.active {
            // release's only error path is the inactive state, checked here
            let _ = self.release();
        }
    }
}

impl<P: DestroyPolicy> Drop for ResourceGuard<P> {
    fn drop(&mut self) {
        self.on_drop();
    }
}
