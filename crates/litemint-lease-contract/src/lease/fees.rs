/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use super::config::LATE_FEE_RATE_PERCENT;

/// Late fee owed for a payment `days_late` days past its due date.
///
/// The daily fee is floored before being multiplied by the number of days,
/// so a payment below 20 units never accrues a fee.
pub fn late_fee(payment_amount: u128, days_late: u64) -> u128 {
    (payment_amount.saturating_mul(LATE_FEE_RATE_PERCENT) / 100)
        .saturating_mul(u128::from(days_late))
}
