//! Canonical byte encoding for filter elements
//!
//! Every value handed to a filter is hashed through exactly one byte
//! encoding. Strings hash as their UTF-8 bytes, integers as fixed width
//! little-endian bytes, so the same element maps to the same bits in every
//! process on every platform.

use crate::{Result, SieveError};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A value with a stable byte representation
pub trait Element {
    /// Encode the value into the bytes fed to the hash rounds
    fn encode(&self) -> Result<Cow<'_, [u8]>>;
}

impl<T: Element + ?Sized> Element for &T {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        (**self).encode()
    }
}

impl Element for str {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl Element for String {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl Element for [u8] {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl Element for Vec<u8> {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<const N: usize> Element for [u8; N] {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl Element for char {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        let mut buf = [0u8; 4];
        Ok(Cow::Owned(self.encode_utf8(&mut buf).as_bytes().to_vec()))
    }
}

impl Element for bool {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Owned(vec![u8::from(*self)]))
    }
}

macro_rules! impl_element_for_int {
    ($($ty:ty),*) => {
        $(
            impl Element for $ty {
                fn encode(&self) -> Result<Cow<'_, [u8]>> {
                    Ok(Cow::Owned(self.to_le_bytes().to_vec()))
                }
            }
        )*
    };
}

impl_element_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

// usize/isize are widened so 32 and 64 bit targets agree.
impl Element for usize {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Owned((*self as u64).to_le_bytes().to_vec()))
    }
}

impl Element for isize {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Owned((*self as i64).to_le_bytes().to_vec()))
    }
}

impl Element for OsStr {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        self.to_str()
            .map(|s| Cow::Borrowed(s.as_bytes()))
            .ok_or_else(|| {
                SieveError::InvalidInput(format!("{:?} is not valid UTF-8", self))
            })
    }
}

impl Element for OsString {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        self.as_os_str().encode()
    }
}

impl Element for Path {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        self.as_os_str().encode()
    }
}

impl Element for PathBuf {
    fn encode(&self) -> Result<Cow<'_, [u8]>> {
        self.as_os_str().encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_encodings_agree() {
        let owned = String::from("hello");
        assert_eq!(owned.encode().unwrap(), "hello".encode().unwrap());
        assert_eq!(b"hello".encode().unwrap(), "hello".encode().unwrap());
        assert_eq!(owned.as_bytes().to_vec().encode().unwrap().as_ref(), b"hello");
    }

    #[test]
    fn test_integer_encoding_is_little_endian() {
        assert_eq!(0x0102u16.encode().unwrap().as_ref(), &[0x02, 0x01]);
        assert_eq!((-1i32).encode().unwrap().as_ref(), &[0xff; 4]);
        assert_eq!(7usize.encode().unwrap(), 7u64.encode().unwrap());
    }

    #[test]
    fn test_char_and_bool() {
        assert_eq!('é'.encode().unwrap().as_ref(), "é".as_bytes());
        assert_eq!(true.encode().unwrap().as_ref(), &[1]);
        assert_eq!(false.encode().unwrap().as_ref(), &[0]);
    }

    #[test]
    fn test_utf8_path() {
        let path = Path::new("/var/data/segment-1");
        assert_eq!(path.encode().unwrap().as_ref(), b"/var/data/segment-1");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_invalid_input() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(&[0x66, 0x6f, 0x80, 0x6f]);
        let err = raw.encode().unwrap_err();
        assert!(matches!(err, SieveError::InvalidInput(_)));
        assert!(Path::new(raw).encode().is_err());
    }
}
