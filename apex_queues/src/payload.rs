//! Bounded message snapshots.
//!
//! A [`Payload`] wraps one immutable value of a plain message type and pins
//! its byte size to a compile-time capacity. Payloads live on the stack or
//! inline in queue slots, copy by value, and share no state between copies.
//! The capacity bound is checked at monomorphization time: a message type
//! larger than its declared capacity fails to compile.

use core::mem::{MaybeUninit, size_of};
use core::ops::Deref;

use thiserror::Error;

/// Marker for types that can move through queues as raw bytes.
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` with explicit padding fields so that
/// every byte of a value is initialized, and every bit pattern of the
/// right size must be a valid value (store enum discriminants as raw
/// integers, never as Rust enums).
pub unsafe trait Plain: Copy + Send + 'static {}

macro_rules! plain_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: primitive scalars have no padding and accept any
            // bit pattern.
            unsafe impl Plain for $ty {}
        )*
    };
}

plain_primitive!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// An error from encoding or decoding a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The byte slice does not match the message size.
    #[error("encoded length {got} does not match message size {expected}")]
    Length {
        /// Expected encoded length in bytes.
        expected: usize,
        /// Length of the provided slice.
        got: usize,
    },
}

/// One immutable snapshot of a message value, bounded to `CAP` bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payload<T: Plain, const CAP: usize> {
    value: T,
}

impl<T: Plain, const CAP: usize> Payload<T, CAP> {
    /// Compile-time proof that `T` fits the declared capacity.
    const FITS: () = assert!(
        size_of::<T>() <= CAP,
        "message type exceeds declared payload capacity"
    );

    /// Wrap a message value. Rejected at compile time if `T` exceeds `CAP`.
    #[inline]
    pub fn new(value: T) -> Self {
        let () = Self::FITS;
        Self { value }
    }

    /// The wrapped value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap into the message value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Declared capacity in bytes.
    #[inline]
    pub const fn capacity() -> usize {
        CAP
    }

    /// Encoded length in bytes (always `<= capacity()`).
    #[inline]
    pub const fn encoded_len() -> usize {
        size_of::<T>()
    }

    /// Encode the snapshot into a bounded byte buffer.
    pub fn encode(&self) -> heapless::Vec<u8, CAP> {
        let () = Self::FITS;
        // SAFETY: `T: Plain` guarantees a fully initialized byte image.
        let bytes =
            unsafe { core::slice::from_raw_parts(&self.value as *const T as *const u8, size_of::<T>()) };
        let mut buf = heapless::Vec::new();
        buf.extend_from_slice(bytes).expect("capacity bound checked at compile time");
        buf
    }

    /// Decode a snapshot from bytes previously produced by [`encode`](Self::encode).
    pub fn decode(bytes: &[u8]) -> Result<Self, PayloadError> {
        let () = Self::FITS;
        if bytes.len() != size_of::<T>() {
            return Err(PayloadError::Length {
                expected: size_of::<T>(),
                got: bytes.len(),
            });
        }

        let mut value = MaybeUninit::<T>::uninit();
        // SAFETY: length checked above; `T: Plain` accepts any bit pattern.
        unsafe {
            core::ptr::copy_nonoverlapping(bytes.as_ptr(), value.as_mut_ptr() as *mut u8, size_of::<T>());
            Ok(Self {
                value: value.assume_init(),
            })
        }
    }
}

impl<T: Plain, const CAP: usize> Deref for Payload<T, CAP> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Plain, const CAP: usize> From<T> for Payload<T, CAP> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
