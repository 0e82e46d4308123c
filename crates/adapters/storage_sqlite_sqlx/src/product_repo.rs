//! `SQLite` implementation of [`ProductRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stockroom_app::ports::ProductRepository;
use stockroom_domain::error::{NotFoundError, StockroomError};
use stockroom_domain::id::ProductId;
use stockroom_domain::product::{NewProduct, Product};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Product`].
struct Wrapper(Product);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Product> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Product {
            id: ProductId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get("price")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO products (name, quantity, price) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT id, name, quantity, price FROM products WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, quantity, price FROM products ORDER BY id";
const UPDATE: &str = "UPDATE products SET name = ?, quantity = ?, price = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM products WHERE id = ?";

fn no_such_row(id: ProductId) -> StockroomError {
    NotFoundError {
        entity: "product",
        id: id.to_string(),
    }
    .into()
}

/// `SQLite`-backed product repository.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn create(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<Product, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&product.name)
                .bind(product.quantity)
                .bind(product.price)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(product.with_id(ProductId::new(result.last_insert_rowid())))
        }
    }

    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&product.name)
                .bind(product.quantity)
                .bind(product.price)
                .bind(product.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(no_such_row(product.id));
            }
            Ok(product)
        }
    }

    fn delete(&self, id: ProductId) -> impl Future<Output = Result<(), StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(no_such_row(id));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Database;

    async fn setup() -> SqliteProductRepository {
        let db = Database::in_memory().await.unwrap();
        SqliteProductRepository::new(db.pool().clone())
    }

    fn pen() -> NewProduct {
        NewProduct::new("Pen", 5, 900.0)
    }

    #[tokio::test]
    async fn should_create_and_retrieve_product() {
        let repo = setup().await;

        let created = repo.create(pen()).await.unwrap();
        assert_eq!(created.id, ProductId::new(1));

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_assign_increasing_ids() {
        let repo = setup().await;
        let first = repo.create(pen()).await.unwrap();
        let second = repo.create(NewProduct::new("chair", 3, 390.0)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_return_none_when_product_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(ProductId::new(42)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_products_in_id_order() {
        let repo = setup().await;
        repo.create(pen()).await.unwrap();
        repo.create(NewProduct::new("chair", 3, 390.0)).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pen", "chair"]);
    }

    #[tokio::test]
    async fn should_overwrite_fields_when_updating() {
        let repo = setup().await;
        let mut product = repo.create(pen()).await.unwrap();

        product.name = "Fountain Pen".to_string();
        product.quantity = 7;
        product.price = 390.0;
        repo.update(product.clone()).await.unwrap();

        let fetched = repo.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(fetched, product);
    }

    #[tokio::test]
    async fn should_count_unchanged_row_as_updated() {
        let repo = setup().await;
        let product = repo.create(pen()).await.unwrap();

        let result = repo.update(product.clone()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_row() {
        let repo = setup().await;
        let ghost = pen().with_id(ProductId::new(9));

        let result = repo.update(ghost).await;
        assert!(matches!(result, Err(StockroomError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let repo = setup().await;
        let created = repo.create(pen()).await.unwrap();

        repo.delete(created.id).await.unwrap();

        let result = repo.get_by_id(created.id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_row() {
        let repo = setup().await;
        let result = repo.delete(ProductId::new(3)).await;
        assert!(matches!(result, Err(StockroomError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_surface_storage_error_when_table_is_missing() {
        let repo = setup().await;
        sqlx::query("DROP TABLE products")
            .execute(&repo.pool)
            .await
            .unwrap();

        let result = repo.get_all().await;
        assert!(matches!(result, Err(StockroomError::Storage(_))));
    }
}
