//! Storage port — repository trait for product persistence.

use std::future::Future;

use stockroom_domain::error::StockroomError;
use stockroom_domain::id::ProductId;
use stockroom_domain::product::{NewProduct, Product};

/// Repository for persisting and querying [`Product`]s.
///
/// Every method maps onto a single statement against the store.
pub trait ProductRepository {
    /// Insert a product and return it with the store-assigned id.
    fn create(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<Product, StockroomError>> + Send;

    /// Get a product by its identifier.
    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, StockroomError>> + Send;

    /// Get every product.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, StockroomError>> + Send;

    /// Overwrite all fields of an existing product.
    ///
    /// Returns [`StockroomError::NotFound`] when no row has `product.id`.
    fn update(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, StockroomError>> + Send;

    /// Delete a product by its identifier.
    ///
    /// Returns [`StockroomError::NotFound`] when no row has `id`.
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<(), StockroomError>> + Send;
}
