mod compose;

use std::collections::BTreeMap;

use exifsplice_common::exif::Tag;

use crate::error::{Error, Result};
use crate::Entry;

/// Image file directory
///
/// Entries are keyed by their tag and always iterated in ascending tag order,
/// which is the order required for the encoded directory.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ifd {
    entries: BTreeMap<Tag, Entry>,
    /// Position of the IFD relative to the TIFF header
    pub offset: u32,
    /// Position of the IFD chained after this one or 0
    pub next_ifd_pointer: u32,
}

impl Ifd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry for a tag that does not exist yet
    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        if self.entries.contains_key(&entry.tag) {
            return Err(Error::DuplicateTag(entry.tag));
        }

        self.entries.insert(entry.tag, entry);
        Ok(())
    }

    /// Adds or overwrites an entry, returning the previous one
    pub fn replace(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.tag, entry)
    }

    pub fn remove(&mut self, tag: impl Into<Tag>) -> Option<Entry> {
        self.entries.remove(&tag.into())
    }

    pub fn get(&self, tag: impl Into<Tag>) -> Option<&Entry> {
        self.entries.get(&tag.into())
    }

    pub fn contains(&self, tag: impl Into<Tag>) -> bool {
        self.entries.contains_key(&tag.into())
    }

    /// Entries in ascending tag order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Entry> for Ifd {
    /// Later entries replace earlier ones with the same tag
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut ifd = Self::new();
        for entry in iter {
            ifd.replace(entry);
        }
        ifd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_tags() {
        let mut ifd = Ifd::new();
        ifd.insert(Entry::ascii(Tag::MAKE, "A")).unwrap();
        assert_eq!(
            ifd.insert(Entry::ascii(Tag::MAKE, "B")),
            Err(Error::DuplicateTag(Tag::MAKE))
        );

        let old = ifd.replace(Entry::ascii(Tag::MAKE, "B")).unwrap();
        assert_eq!(old.value.as_string().unwrap(), "A");
        assert_eq!(ifd.len(), 1);
    }

    #[test]
    fn sorted_iteration() {
        let ifd: Ifd = [
            Entry::short(Tag::ORIENTATION, 1),
            Entry::ascii(Tag::MAKE, "Make"),
            Entry::long(Tag::EXIF_IFD_POINTER, 0),
        ]
        .into_iter()
        .collect();

        let tags = ifd.entries().map(|x| x.tag).collect::<Vec<_>>();
        assert_eq!(tags, [Tag::MAKE, Tag::ORIENTATION, Tag::EXIF_IFD_POINTER]);
    }
}
