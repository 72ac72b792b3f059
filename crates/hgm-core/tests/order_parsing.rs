use hgm_core::{MotifError, MotifOrder, RngHandle};
use rand::RngCore;

#[test]
fn accepts_three_and_four() {
    assert_eq!(MotifOrder::try_from(3).unwrap(), MotifOrder::Three);
    assert_eq!(MotifOrder::try_from(4).unwrap(), MotifOrder::Four);
    assert_eq!(MotifOrder::Four.size(), 4);
    assert_eq!(MotifOrder::Three.to_string(), "3");
}

#[test]
fn rejects_other_orders() {
    for k in [0usize, 1, 2, 5, 17] {
        let err = MotifOrder::try_from(k).unwrap_err();
        assert!(matches!(&err, MotifError::InvalidArgument(info) if info.code == "invalid-order"));
    }
}

#[test]
fn order_serializes_as_plain_integer() {
    let json = serde_json::to_string(&MotifOrder::Four).unwrap();
    assert_eq!(json, "4");
    let parsed: MotifOrder = serde_json::from_str("3").unwrap();
    assert_eq!(parsed, MotifOrder::Three);
    assert!(serde_json::from_str::<MotifOrder>("6").is_err());
}

#[test]
fn substreams_are_deterministic_and_distinct() {
    let root = RngHandle::from_seed(2024);
    let mut a = root.substream(1);
    let mut b = root.substream(1);
    let mut c = root.substream(2);
    let first = a.next_u64();
    assert_eq!(first, b.next_u64());
    assert_ne!(first, c.next_u64());
    assert_eq!(root.seed(), 2024);
}
