/*
    Date: 2024
    Author: Fred Kyung-jin Rezeau <fred@litemint.com>
    Copyright (c) 2024 Litemint LLC

    MIT License
*/

//! The `lease` module implements the lease lifecycle: creation with term
//! validation, recurring payments with late fee accrual, early termination
//! and the aggregate bookkeeping that follows each transition.
//!
//! Implemented features:
//!
//! - Sequential lease identifiers allocated from the contract state.
//! - Fixed 30-day payment periods measured in ledgers (see: clock.rs).
//! - Percentage-based daily late fees (see: fees.rs).
//! - Append-only payment history per lease (see: ledger.rs).
//! - Lessor profiles with lease statistics (see: lessor.rs).
//! - Role-based authorization for owner, renter and administrator (see: registry.rs).

pub mod clock;
pub mod config;
pub mod events;
pub mod fees;
pub mod ledger;
pub mod lessor;
pub mod registry;
pub mod state;
pub mod terms;
