use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HealthPlan {
    pub id: i64,
    pub name: Option<String>,
    /// Selects which detail table applies: "fonasa"/"public" or "isapre"/"private".
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub plan_type: Option<String>,
}

/// Public health detail row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Fonasa {
    pub id: i64,
    pub health_plan_id: Option<i64>,
    pub discount: Option<f64>,
}

/// Private health detail row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Isapre {
    pub id: i64,
    pub health_plan_id: Option<i64>,
    pub discount: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum PlanKind {
    #[strum(serialize = "fonasa", serialize = "public")]
    Public,
    #[strum(serialize = "isapre", serialize = "private")]
    Private,
}

/// Specialization of a health plan, keyed by its `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HealthCoverage {
    Public { discount: f64 },
    Private { discount: f64 },
}

impl HealthCoverage {
    /// Picks the detail row matching the plan type. Returns `None` when the
    /// type is unknown or the matching detail row is missing.
    pub fn resolve(
        plan_type: Option<&str>,
        fonasa: Option<&Fonasa>,
        isapre: Option<&Isapre>,
    ) -> Option<Self> {
        let kind = PlanKind::from_str(plan_type?.trim()).ok()?;
        match kind {
            PlanKind::Public => fonasa
                .and_then(|f| f.discount)
                .map(|discount| HealthCoverage::Public { discount }),
            PlanKind::Private => isapre
                .and_then(|i| i.discount)
                .map(|discount| HealthCoverage::Private { discount }),
        }
    }

    pub fn discount(&self) -> f64 {
        match *self {
            HealthCoverage::Public { discount } | HealthCoverage::Private { discount } => discount,
        }
    }
}

impl fmt::Display for HealthCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthCoverage::Public { discount } => write!(f, "Fonasa, discount {:.2}", discount),
            HealthCoverage::Private { discount } => write!(f, "Isapre, discount {:.2}", discount),
        }
    }
}

/// A health plan together with its resolved specialization.
#[derive(Debug, Clone, Serialize)]
pub struct HealthPlanSummary {
    pub plan: HealthPlan,
    pub coverage: Option<HealthCoverage>,
}

impl HealthPlanSummary {
    pub fn new(plan: HealthPlan, fonasa: Option<&Fonasa>, isapre: Option<&Isapre>) -> Self {
        let coverage = HealthCoverage::resolve(plan.plan_type.as_deref(), fonasa, isapre);
        Self { plan, coverage }
    }

    pub fn label(&self) -> String {
        let name = self.plan.name.as_deref().unwrap_or("Unnamed plan");
        match &self.coverage {
            Some(coverage) => format!("{} ({})", name, coverage),
            None => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonasa(discount: f64) -> Fonasa {
        Fonasa { id: 1, health_plan_id: Some(1), discount: Some(discount) }
    }

    fn isapre(discount: f64) -> Isapre {
        Isapre { id: 1, health_plan_id: Some(1), discount: Some(discount) }
    }

    #[test]
    fn public_types_pick_the_fonasa_row() {
        for ty in ["fonasa", "Fonasa", " PUBLIC "] {
            let coverage = HealthCoverage::resolve(Some(ty), Some(&fonasa(7.0)), Some(&isapre(9.5)));
            assert_eq!(coverage, Some(HealthCoverage::Public { discount: 7.0 }), "type {ty:?}");
        }
    }

    #[test]
    fn private_types_pick_the_isapre_row() {
        let coverage = HealthCoverage::resolve(Some("isapre"), Some(&fonasa(7.0)), Some(&isapre(9.5)));
        assert_eq!(coverage, Some(HealthCoverage::Private { discount: 9.5 }));
        assert_eq!(coverage.map(|c| c.discount()), Some(9.5));
    }

    #[test]
    fn unknown_type_or_missing_detail_has_no_coverage() {
        assert_eq!(HealthCoverage::resolve(Some("dental"), Some(&fonasa(7.0)), None), None);
        assert_eq!(HealthCoverage::resolve(None, Some(&fonasa(7.0)), None), None);
        assert_eq!(HealthCoverage::resolve(Some("isapre"), Some(&fonasa(7.0)), None), None);
    }

    #[test]
    fn label_includes_coverage_when_resolved() {
        let plan = HealthPlan { id: 1, name: Some("Banmedica".into()), plan_type: Some("isapre".into()) };
        let summary = HealthPlanSummary::new(plan, None, Some(&isapre(9.5)));
        assert_eq!(summary.label(), "Banmedica (Isapre, discount 9.50)");

        let plan = HealthPlan { id: 2, name: Some("Tramo B".into()), plan_type: Some("fonasa".into()) };
        let summary = HealthPlanSummary::new(plan, None, None);
        assert_eq!(summary.label(), "Tramo B");
    }
}
