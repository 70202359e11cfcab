// ntag21x/src/memory/pages.rs

use crate::constants::PAGE_SIZE;
use crate::memory::TagGeometry;
use crate::types::PageData;
use crate::{Error, Result};

/// Number of pages needed to hold `byte_len` bytes.
pub fn page_count(byte_len: usize) -> usize {
    byte_len.div_ceil(PAGE_SIZE)
}

/// Check that `byte_len` bytes fit the user memory of `geometry` and return
/// the number of pages they occupy.
pub fn ensure_capacity(byte_len: usize, geometry: &TagGeometry) -> Result<usize> {
    let required_pages = page_count(byte_len);
    let available_pages = geometry.user_page_count();
    if required_pages > available_pages {
        return Err(Error::CapacityExceeded {
            required_pages,
            available_pages,
        });
    }
    Ok(required_pages)
}

/// Split `data` into pages, zero padding the last one.
pub fn chunk_pages(data: &[u8]) -> impl Iterator<Item = PageData> + '_ {
    data.chunks(PAGE_SIZE).map(|chunk| {
        let mut page = [0u8; PAGE_SIZE];
        page[..chunk.len()].copy_from_slice(chunk);
        PageData::from_bytes(page)
    })
}
