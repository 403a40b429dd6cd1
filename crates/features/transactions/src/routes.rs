use crate::models::{CreateTransaction, Transaction};
use crate::Transactions;
use agk_domain::constants::TRANSACTIONS_TAG;
use agk_kernel::server::ApiState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_transactions, create_transaction))
        .routes(routes!(get_transaction))
}

fn slice_unavailable(err: &agk_kernel::server::ApiStateError) -> axum::response::Response {
    tracing::error!("Transactions slice unavailable: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, "transactions feature unavailable").into_response()
}

#[utoipa::path(
    get,
    path = "/transactions",
    responses((status = OK, description = "All tracked transactions", body = [Transaction])),
    tag = TRANSACTIONS_TAG,
)]
async fn list_transactions(State(state): State<ApiState>) -> impl IntoResponse {
    match state.try_get_slice::<Transactions>() {
        Ok(transactions) => (StatusCode::OK, Json(transactions.ledger.list())).into_response(),
        Err(err) => slice_unavailable(&err),
    }
}

#[utoipa::path(
    get,
    path = "/transactions/{id}",
    params(("id" = String, Path, description = "Transaction identifier")),
    responses(
        (status = OK, description = "Transaction found", body = Transaction),
        (status = NOT_FOUND, description = "Unknown transaction identifier"),
    ),
    tag = TRANSACTIONS_TAG,
)]
async fn get_transaction(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let transactions = match state.try_get_slice::<Transactions>() {
        Ok(transactions) => transactions,
        Err(err) => return slice_unavailable(&err),
    };

    match transactions.ledger.get(&id) {
        Some(transaction) => (StatusCode::OK, Json(transaction)).into_response(),
        None => (StatusCode::NOT_FOUND, "transaction not found").into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/transactions",
    request_body = CreateTransaction,
    responses((status = CREATED, description = "Transaction recorded", body = Transaction)),
    tag = TRANSACTIONS_TAG,
)]
async fn create_transaction(
    State(state): State<ApiState>,
    Json(request): Json<CreateTransaction>,
) -> impl IntoResponse {
    match state.try_get_slice::<Transactions>() {
        Ok(transactions) => {
            let transaction = transactions.ledger.record(request);
            tracing::debug!(id = %transaction.id, "Transaction recorded");
            (StatusCode::CREATED, Json(transaction)).into_response()
        }
        Err(err) => slice_unavailable(&err),
    }
}
