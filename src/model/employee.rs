use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "rut": "12.345.678-9",
        "first_name": "Camila",
        "last_name": "Rojas",
        "birth_date": "1990-04-12",
        "start_date": "2021-03-01",
        "phone": "+56912345678",
        "salary": 1250000.0,
        "nationality": "Chilean"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    /// National id.
    #[schema(example = "12.345.678-9", nullable = true)]
    pub rut: Option<String>,

    #[schema(example = "Camila", nullable = true)]
    pub first_name: Option<String>,

    #[schema(example = "Rojas", nullable = true)]
    pub last_name: Option<String>,

    #[schema(value_type = Option<String>, format = "date")]
    pub birth_date: Option<NaiveDate>,

    #[schema(value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,

    #[schema(example = "+56912345678", nullable = true)]
    pub phone: Option<String>,

    #[schema(example = 1250000.0, nullable = true)]
    pub salary: Option<f64>,

    #[schema(example = "Chilean", nullable = true)]
    pub nationality: Option<String>,
}

impl Employee {
    /// "first last", skipping whichever half is missing.
    pub fn full_name(&self) -> String {
        full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
