/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use soroban_sdk::Env;

use super::config::ledger_times::LEDGERS_PER_DAY;

pub fn now(env: &Env) -> u64 {
    u64::from(env.ledger().sequence())
}

pub fn height_to_days(height: u64) -> u64 {
    height / LEDGERS_PER_DAY
}

pub fn days_to_height(days: u64) -> u64 {
    days.saturating_mul(LEDGERS_PER_DAY)
}
