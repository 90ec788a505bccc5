use exifsplice_common::exif::Tag;

use crate::error::Result;
use crate::{Type, Value};

/// A single tag record of an IFD
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub tag: Tag,
    pub value: Value,
}

impl Entry {
    pub fn new(tag: impl Into<Tag>, value: Value) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }

    /// ASCII entry, the NULL terminator is appended and part of the count
    ///
    /// ```
    /// # use exifsplice_exif::Entry;
    /// # use exifsplice_common::exif::Tag;
    /// let make = Entry::ascii(Tag::MAKE, "Test");
    /// assert_eq!(make.count().unwrap(), 5);
    /// ```
    pub fn ascii(tag: impl Into<Tag>, s: &str) -> Self {
        let mut data = s.as_bytes().to_vec();
        data.push(0);
        Self::new(tag, Value::Ascii(data))
    }

    pub fn short(tag: impl Into<Tag>, value: u16) -> Self {
        Self::new(tag, Value::Short(vec![value]))
    }

    pub fn long(tag: impl Into<Tag>, value: u32) -> Self {
        Self::new(tag, Value::Long(vec![value]))
    }

    pub fn rational(tag: impl Into<Tag>, numerator: u32, denominator: u32) -> Self {
        Self::new(tag, Value::Rational(vec![(numerator, denominator)]))
    }

    pub fn data_type(&self) -> Type {
        self.value.data_type()
    }

    pub fn count(&self) -> Result<u32> {
        self.value.count()
    }

    /// Whether the value is stored in the directory record itself
    pub fn is_inline(&self) -> Result<bool> {
        Ok(self.value.data_len()? <= 4)
    }
}
