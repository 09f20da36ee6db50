use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::models::*;

/// Serves customers from the JSON export file. The file is re-read on every
/// call so a refreshed export is picked up without a restart.
#[derive(Clone)]
pub struct CustomerFileService {
    path: PathBuf,
}

impl CustomerFileService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Every customer in the export, in file order.
    pub async fn load_all(&self) -> AppResult<Vec<Customer>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            log::error!("Failed to read customer export {}: {e}", self.path.display());
            e
        })?;
        let records: Vec<CustomerRecord> = serde_json::from_str(&raw)?;
        Ok(records.into_iter().map(Customer::from).collect())
    }

    pub async fn list_customers(
        &self,
        page: i64,
        limit: i64,
        base_url: &str,
    ) -> AppResult<Paginated<Customer>> {
        let customers = self.load_all().await?;
        log::debug!(
            "Paginating {} customers from export (page={page}, limit={limit})",
            customers.len()
        );
        Ok(Paginated::paginate(customers, page, limit, base_url)?)
    }

    pub async fn get_customer(&self, customer_id: i64) -> AppResult<Customer> {
        self.load_all()
            .await?
            .into_iter()
            .find(|c| c.customer_id == customer_id)
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080/api/v1/customers";

    fn fixture_service() -> CustomerFileService {
        CustomerFileService::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/customers.json"
        ))
    }

    #[tokio::test]
    async fn test_load_all_keeps_file_order() {
        let customers = fixture_service().load_all().await.unwrap();
        let ids: Vec<i64> = customers.iter().map(|c| c.customer_id).collect();
        assert_eq!(ids, vec![100001, 100002, 100003, 100004, 100005]);
        assert_eq!(customers[2].transaction_label, TransactionLabel::Unlabeled);
    }

    #[tokio::test]
    async fn test_list_customers_last_partial_page() {
        let page = fixture_service().list_customers(3, 2, BASE).await.unwrap();
        assert_eq!(page.meta().current_page, 3);
        assert_eq!(page.meta().total_pages, 3);
        assert_eq!(page.meta().items_count, 1);
        assert_eq!(page.data()[0].customer_id, 100005);
        assert_eq!(page.links().next, None);
    }

    #[tokio::test]
    async fn test_list_customers_rejects_bad_limit() {
        let err = fixture_service().list_customers(1, 0, BASE).await.unwrap_err();
        assert!(matches!(err, AppError::Pagination(_)));
    }

    #[tokio::test]
    async fn test_get_customer() {
        let service = fixture_service();
        let customer = service.get_customer(100004).await.unwrap();
        assert_eq!(customer.customer_name, "Dewi Lestari");

        let missing = service.get_customer(42).await.unwrap_err();
        assert!(matches!(missing, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_export_is_an_io_error() {
        let service = CustomerFileService::new("does/not/exist.json");
        assert!(matches!(
            service.load_all().await.unwrap_err(),
            AppError::IoError(_)
        ));
    }
}
