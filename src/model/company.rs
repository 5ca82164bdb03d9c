use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "rut": "76.123.456-7",
        "name": "Servicios Andinos SpA",
        "address": "Av. Providencia 1234, Santiago",
        "phone": "+56223456789",
        "industry": "Consulting"
    })
)]
pub struct Company {
    pub id: i64,
    /// National tax id.
    pub rut: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
}
