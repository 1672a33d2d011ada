//! HTTP test harness
//!
//! Wires the real router to services backed by in-memory repositories.

use std::sync::Arc;

use axum_test::TestServer;

use super::mocks::{InMemoryDirectUserRepository, InMemoryTransactionRepository};
use crate::app::{DirectUserService, TransactionService};
use crate::AppState;

/// Build application state over the given repositories
pub fn state_with(
    users: InMemoryDirectUserRepository,
    transactions: InMemoryTransactionRepository,
) -> AppState {
    AppState {
        direct_user_service: Arc::new(DirectUserService::new(Arc::new(users))),
        transaction_service: Arc::new(TransactionService::new(Arc::new(transactions))),
    }
}

/// Start a test server. The returned repositories share storage with the server.
pub fn test_server() -> (
    TestServer,
    InMemoryDirectUserRepository,
    InMemoryTransactionRepository,
) {
    let users = InMemoryDirectUserRepository::new();
    let transactions = InMemoryTransactionRepository::new();
    let server = test_server_with(users.clone(), transactions.clone());
    (server, users, transactions)
}

pub fn test_server_with(
    users: InMemoryDirectUserRepository,
    transactions: InMemoryTransactionRepository,
) -> TestServer {
    TestServer::new(crate::router(state_with(users, transactions)))
        .expect("Failed to start test server")
}
