/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use soroban_kit::storage;
use soroban_sdk::{log, Address, Env, String};

use super::{
    clock::{self, days_to_height, height_to_days},
    config::{ledger_times, ttl, MAX_DESCRIPTION_LEN},
    events, fees, ledger, lessor, state, terms,
};
use crate::types::{
    DataKey, Error, Lease, LeaseStatus, PaymentReceipt, PaymentRecord, Termination,
};

/// Parties allowed to act on a lease.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Owner,
    Renter,
    Administrator,
}

impl Role {
    pub fn of(caller: &Address, lease: &Lease, admin: &Address) -> Option<Role> {
        if *caller == lease.owner {
            Some(Role::Owner)
        } else if *caller == lease.renter {
            Some(Role::Renter)
        } else if caller == admin {
            Some(Role::Administrator)
        } else {
            None
        }
    }

    pub fn may_terminate(&self) -> bool {
        matches!(self, Role::Owner | Role::Renter | Role::Administrator)
    }

    pub fn may_pay(&self) -> bool {
        matches!(self, Role::Renter)
    }
}

pub fn get(env: &Env, lease_id: u64) -> Option<Lease> {
    storage::get::<DataKey, Lease>(env, &DataKey::Lease(lease_id))
}

fn load(env: &Env, lease_id: u64) -> Result<Lease, Error> {
    get(env, lease_id).ok_or(Error::LeaseNotFound)
}

fn put(env: &Env, lease: &Lease) {
    let key = DataKey::Lease(lease.id);
    storage::set::<DataKey, Lease>(env, &key, lease);
    env.storage()
        .persistent()
        .extend_ttl(&key, ttl::THRESHOLD, ttl::EXTEND_TO);
}

pub fn create(
    env: &Env,
    owner: &Address,
    renter: &Address,
    description: String,
    monthly_payment: u128,
    duration: u64,
    security_deposit: u128,
) -> Result<u64, Error> {
    let mut contract = state::load(env);
    if contract.paused {
        log!(env, "Lease creation rejected, contract paused");
        return Err(Error::Unauthorized);
    }

    if !terms::validate(duration, monthly_payment, security_deposit)
        || renter == owner
        || description.len() > MAX_DESCRIPTION_LEN
    {
        log!(env, "Invalid lease terms", duration, monthly_payment, security_deposit);
        return Err(Error::InvalidTerms);
    }

    let now = clock::now(env);
    let lease_id = contract.next_lease_id;
    let lease = Lease {
        id: lease_id,
        owner: owner.clone(),
        renter: renter.clone(),
        description,
        monthly_payment,
        start_height: now,
        duration,
        total_payments: (duration / ledger_times::PAYMENT_PERIOD_DAYS) as u32,
        payments_made: 0,
        status: LeaseStatus::Active,
        security_deposit,
        late_fees: 0,
        next_payment_due: now + days_to_height(ledger_times::PAYMENT_PERIOD_DAYS),
    };
    put(env, &lease);

    contract.next_lease_id += 1;
    contract.total_active_leases += 1;
    state::save(env, &contract);
    lessor::record_new_lease(env, owner);

    events::lease_created(env, lease_id, owner, renter);
    Ok(lease_id)
}

pub fn make_payment(env: &Env, caller: &Address, lease_id: u64) -> Result<PaymentReceipt, Error> {
    let mut lease = load(env, lease_id)?;
    require_payer(env, caller, &lease)?;
    if lease.payments_made >= lease.total_payments {
        return Err(Error::LeaseExpired);
    }

    let now = clock::now(env);
    let is_late = now > lease.next_payment_due;
    let late_fee = if is_late {
        let days_late = height_to_days(now - lease.next_payment_due);
        log!(env, "Late payment", lease_id, days_late);
        fees::late_fee(lease.monthly_payment, days_late)
    } else {
        0
    };

    let payment_number = lease.payments_made + 1;
    ledger::append(
        env,
        lease_id,
        payment_number,
        &PaymentRecord {
            amount: lease.monthly_payment,
            paid_at: now,
            late_fee,
            is_late,
        },
    );

    lease.payments_made = payment_number;
    lease.late_fees += late_fee;
    lease.next_payment_due += days_to_height(ledger_times::PAYMENT_PERIOD_DAYS);
    if lease.payments_made >= lease.total_payments {
        lease.status = LeaseStatus::Completed;
    }
    put(env, &lease);

    events::payment_made(env, lease_id, payment_number, lease.monthly_payment, late_fee);
    if lease.status == LeaseStatus::Completed {
        release_active(env);
        events::lease_completed(env, lease_id);
    }

    Ok(PaymentReceipt {
        amount: lease.monthly_payment,
        late_fee,
    })
}

// Validates a partial payment without applying it to the lease.
// TODO: accumulate partial amounts toward the next full payment once the
// outstanding balance accounting is defined.
pub fn make_partial_payment(
    env: &Env,
    caller: &Address,
    lease_id: u64,
    amount: u128,
) -> Result<u128, Error> {
    let lease = load(env, lease_id)?;
    require_payer(env, caller, &lease)?;
    if amount == 0 {
        return Err(Error::InsufficientPayment);
    }
    events::partial_payment(env, lease_id, amount);
    Ok(amount)
}

pub fn terminate(
    env: &Env,
    caller: &Address,
    lease_id: u64,
    reason: String,
) -> Result<Termination, Error> {
    let mut lease = load(env, lease_id)?;
    let admin = state::load(env).admin;
    if !Role::of(caller, &lease, &admin).is_some_and(|role| role.may_terminate()) {
        return Err(Error::Unauthorized);
    }
    // Completed leases are already released from the active count.
    if lease.status.is_closed() {
        return Err(Error::LeaseTerminated);
    }

    lease.status = LeaseStatus::Terminated;
    put(env, &lease);
    release_active(env);

    events::lease_terminated(env, lease_id, caller, &reason);
    Ok(Termination {
        terminated_by: caller.clone(),
        reason,
    })
}

pub fn is_overdue(env: &Env, lease_id: u64) -> bool {
    get(env, lease_id).is_some_and(|lease| is_lease_overdue(env, &lease))
}

fn is_lease_overdue(env: &Env, lease: &Lease) -> bool {
    lease.status == LeaseStatus::Active
        && clock::now(env)
            > lease.next_payment_due + days_to_height(ledger_times::GRACE_PERIOD_DAYS)
}

pub fn total_owed(env: &Env, lease_id: u64) -> Option<u128> {
    let lease = get(env, lease_id)?;
    let base = u128::from(lease.remaining_payments()).saturating_mul(lease.monthly_payment);
    let current_fee = if is_lease_overdue(env, &lease) {
        let days_late = height_to_days(clock::now(env) - lease.next_payment_due);
        fees::late_fee(lease.monthly_payment, days_late)
    } else {
        0
    };
    Some(base.saturating_add(lease.late_fees).saturating_add(current_fee))
}

fn require_payer(env: &Env, caller: &Address, lease: &Lease) -> Result<(), Error> {
    let admin = state::load(env).admin;
    if !Role::of(caller, lease, &admin).is_some_and(|role| role.may_pay()) {
        log!(env, "Payment rejected, caller is not the renter", lease.id);
        return Err(Error::Unauthorized);
    }
    if lease.status != LeaseStatus::Active {
        return Err(Error::LeaseTerminated);
    }
    Ok(())
}

fn release_active(env: &Env) {
    let mut contract = state::load(env);
    contract.total_active_leases = contract.total_active_leases.saturating_sub(1);
    state::save(env, &contract);
}
