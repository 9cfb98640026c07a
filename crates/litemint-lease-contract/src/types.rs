/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

use soroban_kit::{key_constraint, soroban_tools, storage};
use soroban_sdk::{contracterror, contracttype, Address, Env, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 100,
    LeaseNotFound = 101,
    LeaseAlreadyExists = 102,
    PaymentLate = 103,
    InsufficientPayment = 104,
    LeaseExpired = 105,
    InvalidTerms = 106,
    LeaseTerminated = 107,
}

#[derive(Clone)]
#[contracttype]
#[key_constraint(DataKeyConstraint)]
pub(crate) enum DataKey {
    Lease(u64),
    Payment(u64, u32),
    Lessor(Address),
}

#[derive(Clone)]
#[contracttype]
#[key_constraint(AdminDataKeyConstraint)]
pub(crate) enum AdminDataKey {
    Root,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LeaseStatus {
    Active,
    // Reserved, no transition currently leads here.
    Late,
    Terminated,
    Completed,
}

impl LeaseStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, LeaseStatus::Terminated | LeaseStatus::Completed)
    }
}

#[contracttype]
#[storage(Persistent, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lease {
    pub id: u64,
    pub owner: Address,
    pub renter: Address,
    pub description: String,
    pub monthly_payment: u128,
    pub start_height: u64,
    pub duration: u64,
    pub total_payments: u32,
    pub payments_made: u32,
    pub status: LeaseStatus,
    pub security_deposit: u128,
    pub late_fees: u128,
    pub next_payment_due: u64,
}

impl Lease {
    pub fn remaining_payments(&self) -> u32 {
        self.total_payments.saturating_sub(self.payments_made)
    }
}

#[contracttype]
#[storage(Persistent, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRecord {
    pub amount: u128,
    pub paid_at: u64,
    pub late_fee: u128,
    pub is_late: bool,
}

#[contracttype]
#[storage(Persistent, DataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LessorProfile {
    pub name: String,
    pub active_leases: u32,
    pub total_leases: u32,
    pub reputation: u32,
}

impl LessorProfile {
    pub fn new(env: &Env) -> Self {
        LessorProfile {
            name: String::from_str(env, ""),
            active_leases: 0,
            total_leases: 0,
            reputation: crate::lease::config::DEFAULT_REPUTATION,
        }
    }
}

#[contracttype]
#[storage(Instance, AdminDataKeyConstraint)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractState {
    pub admin: Address,
    pub next_lease_id: u64,
    pub total_active_leases: u64,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractStats {
    pub total_leases_created: u64,
    pub total_active_leases: u64,
    pub paused: bool,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentReceipt {
    pub amount: u128,
    pub late_fee: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Termination {
    pub terminated_by: Address,
    pub reason: String,
}
