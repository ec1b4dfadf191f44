//! The C-ABI contract shared by the host engine and the loadable runtime
//! module.
//!
//! Both sides of the boundary compile against this crate, so the structs in
//! [`ffi`] are the single source of truth for the load-time handshake: the
//! host populates the IN fields of [`ffi::EntryDescriptor`], calls the
//! module's exported entry symbol, and reads the OUT fields back. After that
//! one crossing, every native call on either side goes through the function
//! pointers exchanged here.
//!
//! Nothing in this crate performs a native call itself; it only fixes
//! layout, calling convention, and the [`handle::OpaqueHandle`] discipline
//! for objects that cross the boundary as untyped pointers.

pub mod ffi;
pub mod handle;

pub use ffi::EntryDescriptor;
pub use handle::OpaqueHandle;
