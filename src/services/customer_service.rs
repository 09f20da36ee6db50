use crate::entities::customer_entity as customers;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::pagination::{PageWindow, checked_limit, parse_base_url};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

/// Customer queries against the `customers` table.
pub struct CustomerService {
    pool: DatabaseConnection,
}

impl CustomerService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    fn filtered(filter: &CustomerFilter) -> Select<customers::Entity> {
        let mut query = customers::Entity::find();
        if let Some(rm_number) = &filter.rm_number {
            query = query.filter(customers::Column::AssignedRm.eq(rm_number.clone()));
        }
        if let Some(aum) = filter.aum {
            query = query.filter(customers::Column::AumLabel.eq(aum));
        }
        if let Some(risk_profile) = filter.risk_profile {
            query = query.filter(customers::Column::RiskProfile.eq(risk_profile));
        }
        if let Some(customer_type) = filter.customer_type {
            query = query.filter(customers::Column::CustomerType.eq(customer_type));
        }
        query
    }

    /// One page of customers matching `filter`.
    ///
    /// Only the rows of the clamped page are fetched; the count query decides
    /// which page that is.
    pub async fn list_customers(
        &self,
        filter: &CustomerFilter,
        page: i64,
        limit: i64,
        base_url: &str,
    ) -> AppResult<Paginated<Customer>> {
        // reject bad input before touching the database
        checked_limit(limit)?;
        parse_base_url(base_url)?;

        #[derive(Debug, sea_orm::FromQueryResult)]
        struct CountRow {
            count: i64,
        }
        let total = Self::filtered(filter)
            .select_only()
            .column_as(Expr::val(1).count(), "count")
            .into_model::<CountRow>()
            .one(&self.pool)
            .await?
            .map(|r| r.count)
            .unwrap_or(0);

        let window = PageWindow::new(total.max(0) as u64, page, limit)?;
        let models = Self::filtered(filter)
            .order_by_asc(customers::Column::CustomerId)
            .limit(window.limit)
            .offset(window.offset())
            .all(&self.pool)
            .await?;
        let data: Vec<Customer> = models.into_iter().map(Customer::from).collect();

        log::debug!(
            "Fetched {} of {total} customers (page {} of {})",
            data.len(),
            window.current_page,
            window.total_pages
        );

        Ok(Paginated::paginate_by_total_records(
            data, total, page, limit, base_url,
        )?)
    }

    pub async fn get_customer(&self, customer_id: i64) -> AppResult<Customer> {
        customers::Entity::find_by_id(customer_id)
            .one(&self.pool)
            .await?
            .map(Customer::from)
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }
}
