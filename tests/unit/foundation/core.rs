use super::*;

#[test]
fn since_saturates_on_backwards_clock() {
    let start = TimestampMs(1_000);
    assert_eq!(TimestampMs(1_250).since(start), 250);
    assert_eq!(TimestampMs(900).since(start), 0);
}

#[test]
fn shifted_saturates() {
    assert_eq!(TimestampMs(10).shifted(5), TimestampMs(15));
    assert_eq!(TimestampMs(u64::MAX - 1).shifted(5), TimestampMs(u64::MAX));
}

#[test]
fn frame_delay_targets_sixty_hz() {
    assert_eq!(FRAME_DELAY_MS, 16);
}
