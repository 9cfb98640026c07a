/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use super::config::{MAX_DURATION_DAYS, MIN_DURATION_DAYS};

pub fn validate(duration: u64, monthly_payment: u128, security_deposit: u128) -> bool {
    (MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&duration)
        && monthly_payment > 0
        && security_deposit >= monthly_payment
}
