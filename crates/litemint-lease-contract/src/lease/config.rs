/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

pub mod ledger_times {
    // Assuming 10 minutes average time per ledger.
    pub const LEDGERS_PER_DAY: u64 = 144;
    pub const PAYMENT_PERIOD_DAYS: u64 = 30;
    pub const GRACE_PERIOD_DAYS: u64 = 7;
}

// Lease terms.
pub const MIN_DURATION_DAYS: u64 = 30;
pub const MAX_DURATION_DAYS: u64 = 36500;
pub const LATE_FEE_RATE_PERCENT: u128 = 5;

// Bounded text.
pub const MAX_DESCRIPTION_LEN: u32 = 256;
pub const MAX_NAME_LEN: u32 = 64;

// Bulk reads.
pub const MAX_BULK_LEASES: u32 = 10;

// Placeholder until reputation tracking lands.
pub const DEFAULT_REPUTATION: u32 = 50;

// Storage entry lifetimes, in ledgers. Extended on every write.
pub mod ttl {
    pub const THRESHOLD: u32 = 100_000;
    pub const EXTEND_TO: u32 = 500_000;
}
