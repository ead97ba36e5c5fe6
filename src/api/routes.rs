//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{balance, Customer, Operation};
use crate::error::AppResult;
use crate::store::AccountStore;

use super::extract::VerifiedCustomer;

// =========================================================================
// Request/Response types
// =========================================================================

/// Request body for account creation
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

/// Request body for renaming an account
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

/// Request body for a deposit
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
}

/// Request body for a withdrawal
#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: f64,
}

/// Query string for the dated statement view
#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: NaiveDate,
}

/// Response body for the balance query
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub balance: f64,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<AccountStore> {
    Router::new()
        .route(
            "/account",
            post(create_account)
                .get(get_account)
                .put(update_account)
                .delete(delete_account),
        )
        .route("/statement/", get(get_statement))
        .route("/statement/date", get(get_statement_by_date))
        .route("/deposit/", post(deposit))
        .route("/withdraw/", post(withdraw))
        .route("/balance", get(get_balance))
}

// =========================================================================
// POST /account - Create account
// =========================================================================

/// Register a new customer. The only endpoint that does not take the guard.
async fn create_account(
    State(store): State<AccountStore>,
    Json(request): Json<CreateAccountRequest>,
) -> AppResult<StatusCode> {
    store.create(request.cpf, request.name).await?;
    Ok(StatusCode::CREATED)
}

// =========================================================================
// GET /account - Read account
// =========================================================================

/// Return the caller's full record, statement included.
async fn get_account(VerifiedCustomer { customer }: VerifiedCustomer) -> Json<Customer> {
    Json(customer)
}

// =========================================================================
// PUT /account - Rename account
// =========================================================================

/// Replace the caller's display name.
async fn update_account(
    State(store): State<AccountStore>,
    VerifiedCustomer { customer }: VerifiedCustomer,
    Json(request): Json<UpdateAccountRequest>,
) -> AppResult<StatusCode> {
    store.rename(&customer.cpf, request.name).await?;
    Ok(StatusCode::CREATED)
}

// =========================================================================
// DELETE /account - Remove account
// =========================================================================

/// Remove the caller and return a snapshot of the customers left.
async fn delete_account(
    State(store): State<AccountStore>,
    VerifiedCustomer { customer }: VerifiedCustomer,
) -> AppResult<Json<Vec<Customer>>> {
    let remaining = store.remove(&customer.cpf).await?;
    Ok(Json(remaining))
}

// =========================================================================
// GET /statement/ - Full statement
// =========================================================================

/// Return every operation in append order.
async fn get_statement(VerifiedCustomer { customer }: VerifiedCustomer) -> Json<Vec<Operation>> {
    Json(customer.statement)
}

// =========================================================================
// GET /statement/date - Statement for one day
// =========================================================================

/// Return the operations recorded on one calendar date (UTC).
async fn get_statement_by_date(
    VerifiedCustomer { customer }: VerifiedCustomer,
    Query(query): Query<StatementDateQuery>,
) -> Json<Vec<Operation>> {
    let operations = customer
        .statement
        .into_iter()
        .filter(|operation| operation.created_at.date_naive() == query.date)
        .collect();

    Json(operations)
}

// =========================================================================
// POST /deposit/ - Deposit
// =========================================================================

/// Record a credit and echo the stored operation back.
async fn deposit(
    State(store): State<AccountStore>,
    VerifiedCustomer { customer }: VerifiedCustomer,
    Json(request): Json<DepositRequest>,
) -> AppResult<(StatusCode, Json<Operation>)> {
    let operation = store
        .deposit(&customer.cpf, request.description, request.amount)
        .await?;

    Ok((StatusCode::CREATED, Json(operation)))
}

// =========================================================================
// POST /withdraw/ - Withdraw
// =========================================================================

/// Record a debit if the balance covers it; echo the stored operation back.
async fn withdraw(
    State(store): State<AccountStore>,
    VerifiedCustomer { customer }: VerifiedCustomer,
    Json(request): Json<WithdrawRequest>,
) -> AppResult<(StatusCode, Json<Operation>)> {
    let operation = store.withdraw(&customer.cpf, request.amount).await?;
    Ok((StatusCode::CREATED, Json(operation)))
}

// =========================================================================
// GET /balance - Balance
// =========================================================================

/// Return the net balance of the caller's statement.
async fn get_balance(VerifiedCustomer { customer }: VerifiedCustomer) -> Json<BalanceResponse> {
    Json(BalanceResponse {
        balance: balance(&customer.statement),
    })
}
