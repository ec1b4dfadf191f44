//! Opaque handles for module-owned objects crossing the ABI boundary.
//!
//! The host only ever sees a `*mut c_void`; the module recovers the typed
//! object from it on every native callback. There is no tagging or
//! versioning on the pointer; correctness rests entirely on the one-call
//! discipline of the entry handshake.

use std::ffi::c_void;

use tracing::trace;

/// A stable identity for a module-owned object, exposed to the host as an
/// untyped pointer.
///
/// Wrapping moves the object to its final heap location, so the address
/// stays valid for as long as the handle is alive. Exactly one object backs
/// each handle; repeated [`unwrap_raw`](OpaqueHandle::unwrap_raw) calls on
/// the same pointer yield that same object, never a copy.
///
/// The wrapped object is never freed: handles back process-lifetime
/// singletons, and the host is told to treat them as valid until exit.
pub struct OpaqueHandle<T> {
    raw: *mut T,
}

impl<T> OpaqueHandle<T> {
    /// Move `value` to a stable heap allocation and hand back its handle.
    pub fn wrap(value: T) -> Self {
        let raw = Box::into_raw(Box::new(value));
        trace!(ptr = ?raw, type_name = %std::any::type_name::<T>(), "wrapped opaque handle");
        Self { raw }
    }

    /// The untyped pointer written into the entry descriptor.
    pub fn as_opaque(&self) -> *mut c_void {
        self.raw.cast()
    }

    /// The typed pointer, for module-internal bookkeeping.
    pub fn as_raw(&self) -> *mut T {
        self.raw
    }

    /// Recover the typed object behind an opaque pointer.
    ///
    /// # Safety
    ///
    /// `opaque` must have been produced by [`OpaqueHandle::<T>::wrap`] and
    /// the object must still be alive. The caller must not hold another
    /// live reference to the same object; the boundary contract serializes
    /// all host callbacks, which is what makes the exclusive reborrow sound.
    pub unsafe fn unwrap_raw<'a>(opaque: *mut c_void) -> &'a mut T {
        &mut *opaque.cast()
    }
}
