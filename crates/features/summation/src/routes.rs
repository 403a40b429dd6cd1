use crate::report::SummationReport;
use agk_domain::constants::SUMMATION_TAG;
use agk_kernel::server::ApiState;
use agk_transactions::Transactions;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(summation_report))
}

#[utoipa::path(
    get,
    path = "/summation",
    responses((status = OK, description = "Aggregate report over all tracked transactions", body = SummationReport)),
    tag = SUMMATION_TAG,
)]
async fn summation_report(State(state): State<ApiState>) -> impl IntoResponse {
    match state.try_get_slice::<Transactions>() {
        Ok(transactions) => {
            let report = SummationReport::from_amounts(&transactions.ledger.amounts());
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => {
            tracing::error!("Transactions slice unavailable: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "summation feature unavailable").into_response()
        }
    }
}
