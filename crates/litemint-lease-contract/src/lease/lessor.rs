/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::{Address, Env, String};

use super::config::{ttl, MAX_NAME_LEN};
use crate::types::{DataKey, Error, LessorProfile};

pub fn get(env: &Env, owner: &Address) -> Option<LessorProfile> {
    storage::get::<DataKey, LessorProfile>(env, &DataKey::Lessor(owner.clone()))
}

/// Stored profile for `owner`, or a fresh default one if none exists yet.
pub fn get_or_default(env: &Env, owner: &Address) -> LessorProfile {
    storage::get_or_else::<DataKey, LessorProfile, _, _>(
        env,
        &DataKey::Lessor(owner.clone()),
        |opt| opt.unwrap_or_else(|| LessorProfile::new(env)),
    )
}

fn put(env: &Env, owner: &Address, profile: &LessorProfile) {
    let key = DataKey::Lessor(owner.clone());
    storage::set::<DataKey, LessorProfile>(env, &key, profile);
    env.storage()
        .persistent()
        .extend_ttl(&key, ttl::THRESHOLD, ttl::EXTEND_TO);
}

// Active leases are counted here on creation only; closing a lease
// adjusts the contract-wide counter.
pub fn record_new_lease(env: &Env, owner: &Address) {
    let mut profile = get_or_default(env, owner);
    profile.active_leases += 1;
    profile.total_leases += 1;
    put(env, owner, &profile);
}

pub fn update_name(env: &Env, owner: &Address, name: String) -> Result<(), Error> {
    if name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidTerms);
    }
    let mut profile = get_or_default(env, owner);
    profile.name = name;
    put(env, owner, &profile);
    Ok(())
}
