/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

// Event topics.
const LEASE: Symbol = symbol_short!("LEASE");
const LESSOR: Symbol = symbol_short!("LESSOR");
const ADMIN: Symbol = symbol_short!("ADMIN");

pub fn lease_created(env: &Env, lease_id: u64, owner: &Address, renter: &Address) {
    env.events().publish(
        (LEASE, symbol_short!("created")),
        (lease_id, owner.clone(), renter.clone()),
    );
}

pub fn payment_made(env: &Env, lease_id: u64, payment_number: u32, amount: u128, late_fee: u128) {
    env.events().publish(
        (LEASE, symbol_short!("paid")),
        (lease_id, payment_number, amount, late_fee),
    );
}

pub fn partial_payment(env: &Env, lease_id: u64, amount: u128) {
    env.events()
        .publish((LEASE, symbol_short!("partial")), (lease_id, amount));
}

pub fn lease_completed(env: &Env, lease_id: u64) {
    env.events()
        .publish((LEASE, symbol_short!("completed")), lease_id);
}

pub fn lease_terminated(env: &Env, lease_id: u64, caller: &Address, reason: &String) {
    env.events().publish(
        (LEASE, symbol_short!("ended")),
        (lease_id, caller.clone(), reason.clone()),
    );
}

pub fn profile_updated(env: &Env, owner: &Address) {
    env.events()
        .publish((LESSOR, symbol_short!("updated")), owner.clone());
}

pub fn paused(env: &Env, admin: &Address, paused: bool) {
    let action = if paused {
        symbol_short!("paused")
    } else {
        symbol_short!("resumed")
    };
    env.events().publish((ADMIN, action), admin.clone());
}
