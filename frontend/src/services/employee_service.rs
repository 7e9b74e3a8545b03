//! Client for the `/api/employees` endpoints.
//!
//! Each call issues exactly one request and resolves to a typed result;
//! callers decide whether a failure blocks the page or shows a toast.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use common::model::employee::{Employee, EmployeePayload};
use common::model::statistics::StatisticsSummary;
use common::requests::SearchParams;

use super::error::{ServiceError, ServiceResult};
use crate::config::API_BASE;

fn employee_url(id: i64) -> String {
    format!("{API_BASE}/{id}")
}

/// Passes successful responses through and turns the rest into errors.
async fn check(response: Response) -> ServiceResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::from_status(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|err| ServiceError::Decode(err.to_string()))
}

/// `GET /`: the whole roster.
pub async fn list_employees() -> ServiceResult<Vec<Employee>> {
    let response = Request::get(API_BASE).send().await?;
    decode(response).await
}

/// `GET /{id}`
pub async fn get_employee(id: i64) -> ServiceResult<Employee> {
    let response = Request::get(&employee_url(id)).send().await?;
    decode(response).await
}

/// `POST /` returns the stored employee with its new id.
pub async fn create_employee(payload: &EmployeePayload) -> ServiceResult<Employee> {
    let response = Request::post(API_BASE).json(payload)?.send().await?;
    decode(response).await
}

/// `PUT /{id}`
pub async fn update_employee(id: i64, payload: &EmployeePayload) -> ServiceResult<Employee> {
    let response = Request::put(&employee_url(id)).json(payload)?.send().await?;
    decode(response).await
}

/// `DELETE /{id}`. The confirmation body is ignored.
pub async fn delete_employee(id: i64) -> ServiceResult<()> {
    let response = Request::delete(&employee_url(id)).send().await?;
    check(response).await.map(|_| ())
}

/// `GET /search` with whichever parameters are set.
#[allow(dead_code)]
pub async fn search_employees(params: &SearchParams) -> ServiceResult<Vec<Employee>> {
    let response = Request::get(&format!("{API_BASE}/search"))
        .query(params.to_query_pairs())
        .send()
        .await?;
    decode(response).await
}

/// `GET /statistics`
pub async fn get_statistics() -> ServiceResult<StatisticsSummary> {
    let response = Request::get(&format!("{API_BASE}/statistics"))
        .send()
        .await?;
    decode(response).await
}
