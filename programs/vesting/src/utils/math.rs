//! Linear cliff vesting math. Pure functions; callers supply `now`.
//! - Nothing vests before start or while elapsed time is inside the cliff.
//! - `vesting_seconds` is measured from start, so a cliff at least as long
//!   as the full span collapses to a cliff-only schedule.
//! - The linear region uses floor division; the result never exceeds the
//!   allocation, under-allocating by at most `vesting_seconds - 1` base units.

use crate::error::VestingError;

/// Amount of `total_amount` vested as of `now_ts`.
///
/// The fully-vested check runs before the linear region, so
/// `vesting_seconds == 0` never divides and vests in full at start.
pub fn vested_amount(
    total_amount: u64,
    start_ts: i64,
    cliff_seconds: u64,
    vesting_seconds: u64,
    now_ts: i64,
) -> Result<u64, VestingError> {
    if start_ts < 0 || now_ts < 0 {
        return Err(VestingError::InvalidTimestamp);
    }
    if now_ts < start_ts {
        return Ok(0);
    }
    let elapsed = (now_ts - start_ts) as u64;
    if elapsed < cliff_seconds {
        return Ok(0);
    }
    if elapsed >= vesting_seconds {
        return Ok(total_amount);
    }
    let vested = (total_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(vesting_seconds as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

/// Vested-but-unclaimed remainder.
pub fn claimable_amount(vested: u64, claimed: u64) -> Result<u64, VestingError> {
    vested.checked_sub(claimed).ok_or(VestingError::MathOverflow)
}

/// True once `now_ts` is at or past the vesting end boundary (inclusive).
/// Returns false before start.
pub fn vesting_ended(
    start_ts: i64,
    vesting_seconds: u64,
    now_ts: i64,
) -> Result<bool, VestingError> {
    if start_ts < 0 || now_ts < 0 {
        return Err(VestingError::InvalidTimestamp);
    }
    if now_ts < start_ts {
        return Ok(false);
    }
    Ok((now_ts - start_ts) as u64 >= vesting_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: u64 = 10_000;

    fn vested(now: i64) -> u64 {
        vested_amount(TOTAL, 0, 60, 300, now).unwrap()
    }

    #[test]
    fn nothing_before_start() {
        assert_eq!(vested_amount(TOTAL, 100, 0, 300, 50).unwrap(), 0);
        assert_eq!(vested_amount(TOTAL, 100, 0, 300, 99).unwrap(), 0);
    }

    #[test]
    fn nothing_inside_cliff() {
        assert_eq!(vested(30), 0);
        assert_eq!(vested(59), 0);
    }

    #[test]
    fn cliff_boundary_inclusive() {
        // elapsed == cliff lands in the linear region.
        assert_eq!(vested(60), 2_000);
    }

    #[test]
    fn linear_region_floors() {
        assert_eq!(vested(150), 5_000);
        // floor(10000 * 299 / 300) = 9966
        assert_eq!(vested(299), 9_966);
        assert_eq!(vested_amount(10, 0, 0, 3, 1).unwrap(), 3);
        assert_eq!(vested_amount(10, 0, 0, 3, 2).unwrap(), 6);
    }

    #[test]
    fn fully_vested_at_and_past_end() {
        assert_eq!(vested(300), TOTAL);
        assert_eq!(vested(1_000), TOTAL);
    }

    #[test]
    fn zero_span_vests_at_start() {
        assert_eq!(vested_amount(5_000, 100, 0, 0, 100).unwrap(), 5_000);
    }

    #[test]
    fn cliff_only_schedule_jumps_at_cliff() {
        // Cliff longer than the linear span: zero until the cliff, then all.
        assert_eq!(vested_amount(TOTAL, 0, 100, 50, 60).unwrap(), 0);
        assert_eq!(vested_amount(TOTAL, 0, 100, 50, 99).unwrap(), 0);
        assert_eq!(vested_amount(TOTAL, 0, 100, 50, 100).unwrap(), TOTAL);
    }

    #[test]
    fn monotonic_and_bounded() {
        let mut prev = 0u64;
        for now in 0..400 {
            let v = vested(now);
            assert!(v >= prev);
            assert!(v <= TOTAL);
            prev = v;
        }
    }

    #[test]
    fn negative_timestamps_rejected() {
        assert!(matches!(
            vested_amount(TOTAL, -1, 60, 300, 10),
            Err(VestingError::InvalidTimestamp)
        ));
        assert!(matches!(
            vested_amount(TOTAL, 0, 60, 300, -10),
            Err(VestingError::InvalidTimestamp)
        ));
    }

    #[test]
    fn huge_allocation_does_not_overflow() {
        let v = vested_amount(u64::MAX, 0, 0, 1_000_000, 999_999).unwrap();
        assert!(v < u64::MAX);
        assert_eq!(vested_amount(u64::MAX, 0, 0, 1_000_000, 1_000_000).unwrap(), u64::MAX);
    }

    #[test]
    fn claimable_subtracts_claimed() {
        assert_eq!(claimable_amount(5_000, 2_000).unwrap(), 3_000);
        assert_eq!(claimable_amount(5_000, 5_000).unwrap(), 0);
        assert!(matches!(
            claimable_amount(1, 2),
            Err(VestingError::MathOverflow)
        ));
    }

    #[test]
    fn end_boundary_inclusive() {
        assert!(!vesting_ended(100, 300, 50).unwrap());
        assert!(!vesting_ended(100, 300, 399).unwrap());
        assert!(vesting_ended(100, 300, 400).unwrap());
        assert!(vesting_ended(100, 300, 9_999).unwrap());
    }
}
