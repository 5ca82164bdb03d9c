use serde::{Deserialize, Serialize};

/// Pension fund administrator. Charges `commission_percentage` on the
/// remunerations it manages.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Afp {
    pub id: i64,
    pub name: Option<String>,
    pub commission_percentage: Option<f64>,
}
