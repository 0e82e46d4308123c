//! Product service — use-cases for managing the product catalogue.

use stockroom_domain::error::{NotFoundError, StockroomError};
use stockroom_domain::id::ProductId;
use stockroom_domain::product::{NewProduct, Product};

use crate::ports::ProductRepository;

/// Application service for product CRUD operations.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_products(&self) -> Result<Vec<Product>, StockroomError> {
        self.repo.get_all().await
    }

    /// Look up a product by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::NotFound`] when no product with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, StockroomError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "product",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Insert a new product; the store assigns its id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_product(&self, product: NewProduct) -> Result<Product, StockroomError> {
        let created = self.repo.create(product).await?;
        tracing::debug!(id = %created.id, "product created");
        Ok(created)
    }

    /// Replace every field of the product stored under `product.id`.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::NotFound`] when the row does not exist, or a
    /// storage error from the repository.
    pub async fn update_product(&self, product: Product) -> Result<Product, StockroomError> {
        self.repo.update(product).await
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::NotFound`] when the row does not exist, or a
    /// storage error from the repository.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), StockroomError> {
        self.repo.delete(id).await?;
        tracing::debug!(%id, "product deleted");
        Ok(())
    }
}
