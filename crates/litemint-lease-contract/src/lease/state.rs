/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::{Address, Env};

use super::config::ttl;
use crate::types::{AdminDataKey, ContractState, ContractStats, Error};

pub fn is_initialized(env: &Env) -> bool {
    storage::has::<AdminDataKey, ContractState>(env, &AdminDataKey::Root)
}

pub fn initialize(env: &Env, admin: Address) {
    if is_initialized(env) {
        panic!("Already initialized.");
    }
    storage::set::<AdminDataKey, ContractState>(
        env,
        &AdminDataKey::Root,
        &ContractState {
            admin,
            next_lease_id: 1,
            total_active_leases: 0,
            paused: false,
        },
    );
    env.storage().instance().extend_ttl(ttl::THRESHOLD, ttl::EXTEND_TO);
}

pub fn load(env: &Env) -> ContractState {
    storage::get_or_else::<AdminDataKey, ContractState, _, _>(env, &AdminDataKey::Root, |opt| {
        opt.unwrap_or_else(|| panic!("Contract not initialized."))
    })
}

pub fn save(env: &Env, state: &ContractState) {
    storage::set::<AdminDataKey, ContractState>(env, &AdminDataKey::Root, state);
    env.storage().instance().extend_ttl(ttl::THRESHOLD, ttl::EXTEND_TO);
}

/// Load the contract state after checking `caller` is the administrator.
pub fn require_admin(env: &Env, caller: &Address) -> Result<ContractState, Error> {
    let state = load(env);
    if state.admin != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(state)
}

pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
    let mut state = require_admin(env, caller)?;
    state.paused = paused;
    save(env, &state);
    Ok(())
}

pub fn stats(env: &Env) -> ContractStats {
    let state = load(env);
    ContractStats {
        total_leases_created: state.next_lease_id - 1,
        total_active_leases: state.total_active_leases,
        paused: state.paused,
        admin: state.admin,
    }
}
