//! Scripted mocks for the chain collaborator ports.
//!
//! Each mock pops pre-loaded results from a queue (defaulting to success
//! when exhausted), counts its calls, and records the arguments it was
//! invoked with, so tests can assert both ordering and payloads of the
//! order flow without a network.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{OrderRequest, TxOutcome};
use crate::error::Result;
use crate::port::{AccountProvider, MarketplaceOrders, TransferApproval};

/// A call log that can be shared across mocks to assert cross-port
/// ordering (e.g. that the approval grant lands before the order call).
pub type CallJournal = Arc<Mutex<Vec<&'static str>>>;

// ---------------------------------------------------------------------------
// StaticAccount
// ---------------------------------------------------------------------------

/// An account provider that always resolves to a fixed address.
#[derive(Clone)]
pub struct StaticAccount {
    address: Address,
}

impl StaticAccount {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

#[async_trait]
impl AccountProvider for StaticAccount {
    async fn user_account(&self) -> Result<Address> {
        Ok(self.address)
    }
}

// ---------------------------------------------------------------------------
// ScriptedApproval
// ---------------------------------------------------------------------------

/// A mock approval registry with scripted check/set results.
///
/// Each call pops the next result from the corresponding queue; an
/// exhausted check queue yields `Ok(true)` and an exhausted set queue
/// yields a placeholder outcome.
#[derive(Clone)]
pub struct ScriptedApproval {
    check_results: Arc<Mutex<VecDeque<Result<bool>>>>,
    set_results: Arc<Mutex<VecDeque<Result<TxOutcome>>>>,
    check_count: Arc<AtomicU32>,
    set_count: Arc<AtomicU32>,
    set_calls: Arc<Mutex<Vec<(Address, Address, bool)>>>,
    journal: CallJournal,
}

impl ScriptedApproval {
    pub fn new() -> Self {
        Self {
            check_results: Arc::new(Mutex::new(VecDeque::new())),
            set_results: Arc::new(Mutex::new(VecDeque::new())),
            check_count: Arc::new(AtomicU32::new(0)),
            set_count: Arc::new(AtomicU32::new(0)),
            set_calls: Arc::new(Mutex::new(Vec::new())),
            journal: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replace the call journal with a shared one.
    ///
    /// Useful when several mocks should record into a single sequence so
    /// a test can assert the relative order of their calls.
    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = journal;
        self
    }

    pub fn with_check_results(self, results: Vec<Result<bool>>) -> Self {
        *self.check_results.lock() = results.into();
        self
    }

    pub fn with_set_results(self, results: Vec<Result<TxOutcome>>) -> Self {
        *self.set_results.lock() = results.into();
        self
    }

    pub fn check_count(&self) -> u32 {
        self.check_count.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> u32 {
        self.set_count.load(Ordering::SeqCst)
    }

    /// Arguments of every `set_approval_for_all` call, in order.
    pub fn set_calls(&self) -> Vec<(Address, Address, bool)> {
        self.set_calls.lock().clone()
    }
}

impl Default for ScriptedApproval {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransferApproval for ScriptedApproval {
    async fn is_approved_for_all(
        &self,
        _nft_address: Address,
        _owner: Address,
        _operator: Address,
    ) -> Result<bool> {
        self.check_count.fetch_add(1, Ordering::SeqCst);
        self.journal.lock().push("is_approved_for_all");
        self.check_results.lock().pop_front().unwrap_or(Ok(true))
    }

    async fn set_approval_for_all(
        &self,
        nft_address: Address,
        operator: Address,
        approved: bool,
    ) -> Result<TxOutcome> {
        self.set_count.fetch_add(1, Ordering::SeqCst);
        self.set_calls.lock().push((nft_address, operator, approved));
        self.journal.lock().push("set_approval_for_all");
        self.set_results.lock().pop_front().unwrap_or_else(|| {
            Ok(TxOutcome {
                tx_hash: "0xmock-approval".into(),
            })
        })
    }
}

// ---------------------------------------------------------------------------
// ScriptedMarketplace
// ---------------------------------------------------------------------------

/// A mock marketplace with a fixed operator address and scripted
/// order-creation results.
///
/// Records every submitted [`OrderRequest`] so tests can assert the exact
/// payload. An exhausted result queue yields a placeholder outcome.
#[derive(Clone)]
pub struct ScriptedMarketplace {
    address: Address,
    create_results: Arc<Mutex<VecDeque<Result<TxOutcome>>>>,
    create_count: Arc<AtomicU32>,
    requests: Arc<Mutex<Vec<OrderRequest>>>,
    journal: CallJournal,
}

impl ScriptedMarketplace {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            create_results: Arc::new(Mutex::new(VecDeque::new())),
            create_count: Arc::new(AtomicU32::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            journal: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Replace the call journal with a shared one.
    pub fn with_journal(mut self, journal: CallJournal) -> Self {
        self.journal = journal;
        self
    }

    pub fn with_create_results(self, results: Vec<Result<TxOutcome>>) -> Self {
        *self.create_results.lock() = results.into();
        self
    }

    pub fn create_count(&self) -> u32 {
        self.create_count.load(Ordering::SeqCst)
    }

    /// Every submitted order request, in order.
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl MarketplaceOrders for ScriptedMarketplace {
    fn address(&self) -> Address {
        self.address
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<TxOutcome> {
        self.create_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request.clone());
        self.journal.lock().push("create_order");
        self.create_results.lock().pop_front().unwrap_or_else(|| {
            Ok(TxOutcome {
                tx_hash: "0xmock-order".into(),
            })
        })
    }
}
