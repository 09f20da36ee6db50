use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::de::{Deserializer, IntoDeserializer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::customer_entity;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum AumLabel {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "High")]
    High,
    #[sea_orm(string_value = "Zero")]
    Zero,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TransactionLabel {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "High")]
    High,
    #[default]
    #[serde(rename = "None")]
    #[sea_orm(string_value = "None")]
    Unlabeled,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Propensity {
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "High")]
    High,
    #[sea_orm(string_value = "Qualified")]
    Qualified,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RiskProfile {
    #[sea_orm(string_value = "Aggressive")]
    Aggressive,
    #[sea_orm(string_value = "Conservative")]
    Conservative,
    #[sea_orm(string_value = "Moderate")]
    Moderate,
    #[sea_orm(string_value = "Balanced")]
    Balanced,
    #[sea_orm(string_value = "Growth")]
    Growth,
}

/// Net-worth tier of a customer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CustomerType {
    #[serde(rename = "High Net Worth")]
    #[sea_orm(string_value = "High Net Worth")]
    High,
    #[serde(rename = "Very High Net Worth")]
    #[sea_orm(string_value = "Very High Net Worth")]
    VeryHigh,
    #[serde(rename = "Ultra High Net Worth")]
    #[sea_orm(string_value = "Ultra High Net Worth")]
    Ultra,
    #[serde(rename = "Low Net Worth")]
    #[sea_orm(string_value = "Low Net Worth")]
    Low,
    #[serde(rename = "Medium Net Worth")]
    #[sea_orm(string_value = "Medium Net Worth")]
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[schema(example = 100231)]
    pub customer_id: i64,
    #[schema(example = "RM001")]
    pub assigned_rm: String,
    pub customer_type: CustomerType,
    #[schema(example = "Priority")]
    pub priority_private: String,
    pub transaction_label: TransactionLabel,
    pub aum_label: AumLabel,
    #[serde(rename = "propensityBAC")]
    pub propensity_bac: Propensity,
    #[serde(rename = "propensitySB")]
    pub propensity_sb: Propensity,
    #[serde(rename = "propensityRD")]
    pub propensity_rd: Propensity,
    pub score_overall: f64,
    #[serde(rename = "scoreBAC")]
    pub score_bac: f64,
    #[serde(rename = "scoreSB")]
    pub score_sb: f64,
    #[serde(rename = "scoreRD")]
    pub score_rd: f64,
    pub risk_profile: RiskProfile,
    #[schema(example = "Budi Santoso")]
    pub customer_name: String,
}

/// One row of the customer export file, keyed by spreadsheet column titles.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "Customer ID")]
    pub customer_id: i64,
    #[serde(rename = "Assigned RM")]
    pub assigned_rm: String,
    #[serde(rename = "Customer Type")]
    pub customer_type: CustomerType,
    #[serde(rename = "Priority/Private")]
    pub priority_private: String,
    #[serde(
        rename = "Transaction Label",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub transaction_label: Option<TransactionLabel>,
    #[serde(rename = "AUM Label")]
    pub aum_label: AumLabel,
    #[serde(rename = "Propensity BAC")]
    pub propensity_bac: Propensity,
    #[serde(rename = "Propensity SB")]
    pub propensity_sb: Propensity,
    #[serde(rename = "Propensity RD")]
    pub propensity_rd: Propensity,
    #[serde(rename = "Score Overall")]
    pub score_overall: f64,
    #[serde(rename = "Score BAC")]
    pub score_bac: f64,
    #[serde(rename = "Score SB")]
    pub score_sb: f64,
    #[serde(rename = "Score RD")]
    pub score_rd: f64,
    #[serde(rename = "Risk Profile")]
    pub risk_profile: RiskProfile,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<TransactionLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => TransactionLabel::deserialize(label.into_deserializer()).map(Some),
    }
}

impl From<CustomerRecord> for Customer {
    fn from(r: CustomerRecord) -> Self {
        Self {
            customer_id: r.customer_id,
            assigned_rm: r.assigned_rm,
            customer_type: r.customer_type,
            priority_private: r.priority_private,
            transaction_label: r.transaction_label.unwrap_or_default(),
            aum_label: r.aum_label,
            propensity_bac: r.propensity_bac,
            propensity_sb: r.propensity_sb,
            propensity_rd: r.propensity_rd,
            score_overall: r.score_overall,
            score_bac: r.score_bac,
            score_sb: r.score_sb,
            score_rd: r.score_rd,
            risk_profile: r.risk_profile,
            customer_name: r.customer_name,
        }
    }
}

impl From<customer_entity::Model> for Customer {
    fn from(m: customer_entity::Model) -> Self {
        Self {
            customer_id: m.customer_id,
            assigned_rm: m.assigned_rm,
            customer_type: m.customer_type,
            priority_private: m.priority_private,
            transaction_label: m.transaction_label.unwrap_or_default(),
            aum_label: m.aum_label,
            propensity_bac: m.propensity_bac,
            propensity_sb: m.propensity_sb,
            propensity_rd: m.propensity_rd,
            score_overall: m.score_overall,
            score_bac: m.score_bac,
            score_sb: m.score_sb,
            score_rd: m.score_rd,
            risk_profile: m.risk_profile,
            customer_name: m.customer_name,
        }
    }
}

/// Optional filters of the database-backed customer listing. All given
/// filters must match.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CustomerFilter {
    #[schema(example = "RM001")]
    pub rm_number: Option<String>,
    pub aum: Option<AumLabel>,
    pub risk_profile: Option<RiskProfile>,
    pub customer_type: Option<CustomerType>,
}

/// Body of the single-customer lookup on the file-backed api.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDetailResponse {
    pub data: Customer,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json(transaction_label: serde_json::Value) -> serde_json::Value {
        json!({
            "Customer ID": 100231,
            "Assigned RM": "RM001",
            "Customer Type": "Very High Net Worth",
            "Priority/Private": "Priority",
            "Transaction Label": transaction_label,
            "AUM Label": "High",
            "Propensity BAC": "Qualified",
            "Propensity SB": "Low",
            "Propensity RD": "Medium",
            "Score Overall": 0.82,
            "Score BAC": 0.91,
            "Score SB": 0.12,
            "Score RD": 0.47,
            "Risk Profile": "Balanced",
            "Customer Name": "Budi Santoso"
        })
    }

    #[test]
    fn test_record_maps_to_customer() {
        let record: CustomerRecord = serde_json::from_value(record_json(json!("High"))).unwrap();
        let customer = Customer::from(record);
        assert_eq!(customer.customer_id, 100231);
        assert_eq!(customer.customer_type, CustomerType::VeryHigh);
        assert_eq!(customer.transaction_label, TransactionLabel::High);
        assert_eq!(customer.propensity_bac, Propensity::Qualified);
        assert_eq!(customer.risk_profile, RiskProfile::Balanced);
    }

    #[test]
    fn test_blank_transaction_label_defaults_to_none() {
        for label in [json!(""), json!(null)] {
            let record: CustomerRecord = serde_json::from_value(record_json(label)).unwrap();
            assert_eq!(
                Customer::from(record).transaction_label,
                TransactionLabel::Unlabeled
            );
        }

        let mut without = record_json(json!("Low"));
        without.as_object_mut().unwrap().remove("Transaction Label");
        let record: CustomerRecord = serde_json::from_value(without).unwrap();
        assert_eq!(
            Customer::from(record).transaction_label,
            TransactionLabel::Unlabeled
        );
    }

    #[test]
    fn test_unknown_transaction_label_is_rejected() {
        let parsed = serde_json::from_value::<CustomerRecord>(record_json(json!("Huge")));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_customer_serializes_with_dashboard_keys() {
        let record: CustomerRecord = serde_json::from_value(record_json(json!(""))).unwrap();
        let value = serde_json::to_value(Customer::from(record)).unwrap();
        assert_eq!(value["customerId"], 100231);
        assert_eq!(value["assignedRm"], "RM001");
        assert_eq!(value["customerType"], "Very High Net Worth");
        assert_eq!(value["transactionLabel"], "None");
        assert_eq!(value["propensityBAC"], "Qualified");
        assert_eq!(value["scoreRD"], 0.47);
        assert_eq!(value["customerName"], "Budi Santoso");
    }
}
