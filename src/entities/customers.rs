use crate::models::{AumLabel, CustomerType, Propensity, RiskProfile, TransactionLabel};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: i64,
    pub customer_name: String,
    pub assigned_rm: String,
    pub customer_type: CustomerType,
    pub priority_private: String,
    pub transaction_label: Option<TransactionLabel>,
    pub aum_label: AumLabel,
    pub propensity_bac: Propensity,
    pub propensity_sb: Propensity,
    pub propensity_rd: Propensity,
    pub score_overall: f64,
    pub score_bac: f64,
    pub score_sb: f64,
    pub score_rd: f64,
    pub risk_profile: RiskProfile,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
