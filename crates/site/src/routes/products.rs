//! Product catalog route handlers.

use axum::{Json, extract::Path};

use crate::catalog::{self, ProductDetail, ProductSummary};
use crate::error::{AppError, Result};

/// List the product catalog.
///
/// GET /api/products
pub async fn index() -> Json<Vec<ProductSummary>> {
    Json(catalog::summaries())
}

/// Show one product's detail view.
///
/// GET /api/products/:id
pub async fn show(Path(id): Path<String>) -> Result<Json<ProductDetail>> {
    catalog::find(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))
}
