use super::*;

#[test]
fn map_range_hits_endpoints() {
    assert_eq!(map_range(2.0, 2.0, 80.0, 10.0, 360.0), 10.0);
    assert_eq!(map_range(80.0, 2.0, 80.0, 10.0, 360.0), 360.0);
    assert!((map_range(41.0, 2.0, 80.0, 10.0, 360.0) - 185.0).abs() < 1e-9);
}

#[test]
fn clip_bounds_both_sides() {
    assert_eq!(clip(1, 2, 80), 2);
    assert_eq!(clip(81, 2, 80), 80);
    assert_eq!(clip(40, 2, 80), 40);
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 200), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u16(50, 128), 25);
}
