/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::Env;

use super::config::ttl;
use crate::types::{DataKey, PaymentRecord};

// Payment history is append-only, keyed by (lease id, payment number).
pub fn append(env: &Env, lease_id: u64, payment_number: u32, record: &PaymentRecord) {
    let key = DataKey::Payment(lease_id, payment_number);
    if storage::has::<DataKey, PaymentRecord>(env, &key) {
        panic!("Payment already recorded.");
    }
    storage::set::<DataKey, PaymentRecord>(env, &key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, ttl::THRESHOLD, ttl::EXTEND_TO);
}

pub fn get(env: &Env, lease_id: u64, payment_number: u32) -> Option<PaymentRecord> {
    storage::get::<DataKey, PaymentRecord>(env, &DataKey::Payment(lease_id, payment_number))
}
