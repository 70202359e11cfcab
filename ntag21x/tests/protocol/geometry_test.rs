use ntag21x::memory::{TagGeometry, ensure_capacity, geometry_for, page_count};
use ntag21x::types::TagType;
use ntag21x::Error;

#[test]
fn capability_bytes_map_to_geometry() {
    for (cap, start, end, pages) in [(0x12, 4, 39, 36), (0x3E, 4, 129, 126), (0x6D, 4, 225, 222)] {
        let g = geometry_for(cap).unwrap();
        assert_eq!(g.user_memory_page_range(), start..=end);
        assert_eq!(g.user_page_count(), pages);
        assert_eq!(TagType::from_capability(cap).unwrap().geometry(), g);
    }
}

#[test]
fn every_other_capability_is_unknown() {
    for cap in (0..=u8::MAX).filter(|c| ![0x12, 0x3E, 0x6D].contains(c)) {
        match geometry_for(cap) {
            Err(Error::UnknownTagType { capability }) => assert_eq!(capability, cap),
            other => panic!("{:#04x}: unexpected {:?}", cap, other),
        }
    }
}

#[test]
fn config_pages_follow_user_memory() {
    let g = TagGeometry::NTAG216;
    assert_eq!((g.cfg0(), g.cfg1(), g.pwd(), g.pack()), (227, 228, 229, 230));
    assert_eq!(TagType::Ntag216.total_pages(), 231);
}

#[test]
fn capacity_edges() {
    let g = TagGeometry::NTAG213;
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(5), 2);
    assert_eq!(ensure_capacity(144, &g).unwrap(), 36);
    assert!(matches!(
        ensure_capacity(145, &g),
        Err(Error::CapacityExceeded {
            required_pages: 37,
            available_pages: 36,
        })
    ));
}
