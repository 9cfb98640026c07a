/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

//! Lease agreements between an asset owner (lessor) and a renter, with
//! scheduled monthly payments, late fee accrual and early termination.
//! The contract only records amounts, settlement happens off-contract.

#![no_std]

mod lease; // Lease lifecycle and bookkeeping.
mod types; // Contract types.

use soroban_sdk::{contract, contractimpl, contractmeta, vec, Address, Env, String, Vec};

use crate::lease::{config::MAX_BULK_LEASES, events, ledger, lessor, registry, state};
pub use crate::types::{
    ContractStats, Error, Lease, LeaseStatus, LessorProfile, PaymentReceipt, PaymentRecord,
    Termination,
};

contractmeta!(
    key = "desc",
    val = "Lease smart contract for the Litemint marketplace"
);

pub trait LeaseInterface {
    // Create a new lease for `renter`. Returns the new lease id.
    // Owner authorization required.
    fn create_lease(
        env: Env,
        owner: Address,
        renter: Address,
        description: String,
        monthly_payment: u128,
        duration: u64,
        security_deposit: u128,
    ) -> Result<u64, Error>;

    // Record the next scheduled payment, charging a late fee when past due.
    // Renter authorization required.
    fn make_payment(env: Env, renter: Address, lease_id: u64) -> Result<PaymentReceipt, Error>;

    // Acknowledge a partial payment. The lease is left untouched.
    // Renter authorization required.
    fn make_partial_payment(
        env: Env,
        renter: Address,
        lease_id: u64,
        amount: u128,
    ) -> Result<u128, Error>;

    // End a lease early.
    // Owner, renter or admin authorization required.
    fn terminate_lease(
        env: Env,
        caller: Address,
        lease_id: u64,
        reason: String,
    ) -> Result<Termination, Error>;

    // No authorization required.
    fn get_lease_details(env: Env, lease_id: u64) -> Option<Lease>;

    // No authorization required.
    fn get_payment_details(env: Env, lease_id: u64, payment_number: u32) -> Option<PaymentRecord>;

    // True when an active lease is past its due date plus the grace period.
    // No authorization required.
    fn is_lease_overdue(env: Env, lease_id: u64) -> bool;

    // Remaining scheduled payments plus accrued and current late fees.
    // No authorization required.
    fn calculate_total_owed(env: Env, lease_id: u64) -> Option<u128>;

    // Look up at most 10 leases, preserving the order of `lease_ids`.
    // No authorization required.
    fn get_multiple_leases(env: Env, lease_ids: Vec<u64>) -> Vec<Option<Lease>>;

    // Not indexed, always empty.
    // No authorization required.
    fn get_leases_by_renter(env: Env, renter: Address) -> Vec<u64>;
}

pub trait LessorInterface {
    // Set the display name of the caller's lessor profile.
    // Owner authorization required.
    fn update_lessor_profile(env: Env, owner: Address, name: String) -> Result<(), Error>;

    // No authorization required.
    fn get_lessor_profile(env: Env, owner: Address) -> Option<LessorProfile>;
}

pub trait AdminInterface {
    // Contract administration.
    // Must be called once after deployment.
    fn initialize(env: Env, admin: Address);

    // Block new lease creation.
    // Admin authorization required.
    fn pause_contract(env: Env, admin: Address) -> Result<(), Error>;

    // Allow new lease creation again.
    // Admin authorization required.
    fn resume_contract(env: Env, admin: Address) -> Result<(), Error>;

    // No authorization required.
    fn get_contract_stats(env: Env) -> ContractStats;

    // Retrieve the contract version.
    fn version(env: Env) -> Vec<u32>;
}

#[contract]
pub struct LeaseContract;

#[contractimpl]
impl LeaseInterface for LeaseContract {
    fn create_lease(
        env: Env,
        owner: Address,
        renter: Address,
        description: String,
        monthly_payment: u128,
        duration: u64,
        security_deposit: u128,
    ) -> Result<u64, Error> {
        owner.require_auth();
        registry::create(
            &env,
            &owner,
            &renter,
            description,
            monthly_payment,
            duration,
            security_deposit,
        )
    }

    fn make_payment(env: Env, renter: Address, lease_id: u64) -> Result<PaymentReceipt, Error> {
        renter.require_auth();
        registry::make_payment(&env, &renter, lease_id)
    }

    fn make_partial_payment(
        env: Env,
        renter: Address,
        lease_id: u64,
        amount: u128,
    ) -> Result<u128, Error> {
        renter.require_auth();
        registry::make_partial_payment(&env, &renter, lease_id, amount)
    }

    fn terminate_lease(
        env: Env,
        caller: Address,
        lease_id: u64,
        reason: String,
    ) -> Result<Termination, Error> {
        caller.require_auth();
        registry::terminate(&env, &caller, lease_id, reason)
    }

    fn get_lease_details(env: Env, lease_id: u64) -> Option<Lease> {
        registry::get(&env, lease_id)
    }

    fn get_payment_details(env: Env, lease_id: u64, payment_number: u32) -> Option<PaymentRecord> {
        ledger::get(&env, lease_id, payment_number)
    }

    fn is_lease_overdue(env: Env, lease_id: u64) -> bool {
        registry::is_overdue(&env, lease_id)
    }

    fn calculate_total_owed(env: Env, lease_id: u64) -> Option<u128> {
        registry::total_owed(&env, lease_id)
    }

    fn get_multiple_leases(env: Env, lease_ids: Vec<u64>) -> Vec<Option<Lease>> {
        let mut leases = vec![&env];
        for lease_id in lease_ids.iter().take(MAX_BULK_LEASES as usize) {
            leases.push_back(registry::get(&env, lease_id));
        }
        leases
    }

    fn get_leases_by_renter(env: Env, _renter: Address) -> Vec<u64> {
        vec![&env]
    }
}

#[contractimpl]
impl LessorInterface for LeaseContract {
    fn update_lessor_profile(env: Env, owner: Address, name: String) -> Result<(), Error> {
        owner.require_auth();
        lessor::update_name(&env, &owner, name)?;
        events::profile_updated(&env, &owner);
        Ok(())
    }

    fn get_lessor_profile(env: Env, owner: Address) -> Option<LessorProfile> {
        lessor::get(&env, &owner)
    }
}

#[contractimpl]
impl AdminInterface for LeaseContract {
    fn initialize(env: Env, admin: Address) {
        state::initialize(&env, admin);
    }

    fn pause_contract(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        state::set_paused(&env, &admin, true)?;
        events::paused(&env, &admin, true);
        Ok(())
    }

    fn resume_contract(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        state::set_paused(&env, &admin, false)?;
        events::paused(&env, &admin, false);
        Ok(())
    }

    fn get_contract_stats(env: Env) -> ContractStats {
        state::stats(&env)
    }

    fn version(env: Env) -> Vec<u32> {
        vec![&env, 0, 1, 0] // "0.1.0"
    }
}
