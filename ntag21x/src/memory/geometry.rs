// ntag21x/src/memory/geometry.rs

use std::ops::RangeInclusive;

use crate::constants::{MAX_USER_MEMORY_END, USER_MEMORY_START};
use crate::types::TagType;
use crate::{Error, Result};

/// User memory bounds of a tag (inclusive) and the configuration pages
/// that follow them.
///
/// Layout after the user area: one dynamic lock page, then cfg0 (mirror
/// and AUTH0), cfg1 (access), pwd and pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagGeometry {
    user_memory_start: u8,
    user_memory_end: u8,
}

impl TagGeometry {
    pub const NTAG213: Self = Self {
        user_memory_start: USER_MEMORY_START,
        user_memory_end: 39,
    };
    pub const NTAG215: Self = Self {
        user_memory_start: USER_MEMORY_START,
        user_memory_end: 129,
    };
    pub const NTAG216: Self = Self {
        user_memory_start: USER_MEMORY_START,
        user_memory_end: 225,
    };

    /// Build a custom geometry. The derived configuration pages must stay
    /// addressable with a single byte.
    pub fn new(user_memory_start: u8, user_memory_end: u8) -> Result<Self> {
        if user_memory_start > user_memory_end || user_memory_end > MAX_USER_MEMORY_END {
            return Err(Error::InvalidPageRange {
                start: user_memory_start,
                end: user_memory_end,
            });
        }
        Ok(Self {
            user_memory_start,
            user_memory_end,
        })
    }

    pub fn user_memory_start(&self) -> u8 {
        self.user_memory_start
    }

    pub fn user_memory_end(&self) -> u8 {
        self.user_memory_end
    }

    pub fn user_memory_page_range(&self) -> RangeInclusive<u8> {
        self.user_memory_start..=self.user_memory_end
    }

    pub fn user_page_count(&self) -> usize {
        (self.user_memory_end - self.user_memory_start) as usize + 1
    }

    pub fn user_memory_len(&self) -> usize {
        self.user_page_count() * crate::constants::PAGE_SIZE
    }

    pub fn cfg0(&self) -> u8 {
        self.user_memory_end + 2
    }

    pub fn cfg1(&self) -> u8 {
        self.cfg0() + 1
    }

    pub fn pwd(&self) -> u8 {
        self.cfg1() + 1
    }

    pub fn pack(&self) -> u8 {
        self.pwd() + 1
    }

    pub fn contains_user_page(&self, page: u8) -> bool {
        self.user_memory_page_range().contains(&page)
    }
}

/// Resolve the geometry for a capability-container size byte.
pub fn geometry_for(capability: u8) -> Result<TagGeometry> {
    TagType::from_capability(capability)
        .map(|t| t.geometry())
        .ok_or(Error::UnknownTagType { capability })
}
