/// Compute download progress as a whole percentage, rounded down.
///
/// Returns `None` when the total is unknown (zero). Overshooting counters
/// report 100.
#[must_use]
pub fn progress_percent(downloaded: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let percent = (u128::from(downloaded) * 100 / u128::from(total)).min(100);
    Some(percent as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculates_progress_percent() {
        assert_eq!(progress_percent(0, 10), Some(0));
        assert_eq!(progress_percent(5, 10), Some(50));
        assert_eq!(progress_percent(10, 10), Some(100));
        assert_eq!(progress_percent(512_000, 2_048_000), Some(25));
    }

    #[test]
    fn rounds_down() {
        assert_eq!(progress_percent(1, 3), Some(33));
        assert_eq!(progress_percent(2, 3), Some(66));
        assert_eq!(progress_percent(999, 1_000), Some(99));
    }

    #[test]
    fn unknown_total_has_no_percent() {
        assert_eq!(progress_percent(0, 0), None);
        assert_eq!(progress_percent(42, 0), None);
    }

    #[test]
    fn large_counters_do_not_overflow() {
        assert_eq!(progress_percent(u64::MAX / 2, u64::MAX), Some(49));
        assert_eq!(progress_percent(u64::MAX, u64::MAX), Some(100));
        assert_eq!(progress_percent(20, 10), Some(100));
    }

    #[test]
    fn percent_stays_in_range() {
        for total in [1_u64, 7, 100, 4_096, 1_000_003] {
            for done in [0, 1, total / 3, total / 2, total - 1, total] {
                let percent = progress_percent(done, total).unwrap();
                assert!(percent <= 100);
                assert_eq!(u128::from(percent), u128::from(done) * 100 / u128::from(total));
            }
        }
    }
}
