//! JSON handlers for products.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use stockroom_app::ports::ProductRepository;
use stockroom_domain::id::ProductId;
use stockroom_domain::product::{NewProduct, Product};

use crate::error::ApiError;
use crate::json::PrettyJson;
use crate::state::AppState;

/// Request body for creating or updating a product.
///
/// Missing fields default to their zero value. An `id` in the body is
/// ignored: the store assigns it on create and the path supplies it on update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<ProductPayload> for NewProduct {
    fn from(payload: ProductPayload) -> Self {
        NewProduct::new(payload.name, payload.quantity, payload.price)
    }
}

/// Body returned after a successful delete.
#[derive(Serialize)]
pub struct DeleteResult {
    pub result: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(PrettyJson<Vec<Product>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(PrettyJson<Product>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(PrettyJson<Product>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => PrettyJson(DeleteResult {
                result: "successfully deleted item",
            })
            .into_response(),
        }
    }
}

/// Undecodable segments (e.g. invalid UTF-8) count as a bad id too.
fn parse_id(segment: Result<Path<String>, PathRejection>) -> Result<ProductId, ApiError> {
    let Path(raw) = segment.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "rejected product id");
        ApiError::InvalidId
    })?;
    ProductId::from_str(&raw).map_err(|_| ApiError::InvalidId)
}

fn decode(
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<ProductPayload, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "rejected product payload");
        ApiError::InvalidPayload
    })
}

/// `GET /products`
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<ListResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let products = state.product_service.list_products().await?;
    Ok(ListResponse::Ok(PrettyJson(products)))
}

/// `GET /product/{id}`
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(id)?;
    let product = state.product_service.get_product(product_id).await?;
    Ok(GetResponse::Ok(PrettyJson(product)))
}

/// `POST /product`
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let payload = decode(payload)?;
    let created = state.product_service.create_product(payload.into()).await?;
    Ok(CreateResponse::Created(PrettyJson(created)))
}

/// `PUT /product/{id}`
pub async fn update<PR>(
    State(state): State<AppState<PR>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(id)?;
    let product = NewProduct::from(decode(payload)?).with_id(product_id);
    let updated = state.product_service.update_product(product).await?;
    Ok(GetResponse::Ok(PrettyJson(updated)))
}

/// `DELETE /product/{id}`
pub async fn delete<PR>(
    State(state): State<AppState<PR>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    PR: ProductRepository + Send + Sync + 'static,
{
    let product_id = parse_id(id)?;
    state.product_service.delete_product(product_id).await?;
    Ok(DeleteResponse::Deleted)
}
