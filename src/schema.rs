use sqlx::MySqlPool;
use tracing::{debug, info};

/// Table definitions in dependency order: every table appears after the
/// tables its foreign keys point at.
pub const TABLES: &[(&str, &str)] = &[
    (
        "Company",
        r#"
        CREATE TABLE IF NOT EXISTS `Company` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            rut VARCHAR(20),
            name VARCHAR(100),
            address VARCHAR(255),
            phone VARCHAR(20),
            industry VARCHAR(100)
        )
        "#,
    ),
    (
        "Employee",
        r#"
        CREATE TABLE IF NOT EXISTS `Employee` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            rut VARCHAR(20),
            first_name VARCHAR(50),
            last_name VARCHAR(50),
            birth_date DATE,
            start_date DATE,
            phone VARCHAR(20),
            salary DECIMAL(10, 2),
            nationality VARCHAR(50)
        )
        "#,
    ),
    (
        "Department",
        r#"
        CREATE TABLE IF NOT EXISTS `Department` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100)
        )
        "#,
    ),
    (
        "JobPosition",
        r#"
        CREATE TABLE IF NOT EXISTS `JobPosition` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100),
            description TEXT,
            department_id BIGINT,
            FOREIGN KEY (department_id) REFERENCES `Department` (id)
        )
        "#,
    ),
    (
        "EmployeePosition",
        r#"
        CREATE TABLE IF NOT EXISTS `EmployeePosition` (
            employee_id BIGINT NOT NULL,
            position_id BIGINT NOT NULL,
            PRIMARY KEY (employee_id, position_id),
            FOREIGN KEY (employee_id) REFERENCES `Employee` (id),
            FOREIGN KEY (position_id) REFERENCES `JobPosition` (id)
        )
        "#,
    ),
    (
        "AFP",
        r#"
        CREATE TABLE IF NOT EXISTS `AFP` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100),
            commission_percentage DECIMAL(5, 2)
        )
        "#,
    ),
    (
        "HealthPlan",
        r#"
        CREATE TABLE IF NOT EXISTS `HealthPlan` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100),
            `type` VARCHAR(50)
        )
        "#,
    ),
    (
        "Fonasa",
        r#"
        CREATE TABLE IF NOT EXISTS `Fonasa` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            health_plan_id BIGINT,
            discount DECIMAL(10, 2),
            FOREIGN KEY (health_plan_id) REFERENCES `HealthPlan` (id)
        )
        "#,
    ),
    (
        "Isapre",
        r#"
        CREATE TABLE IF NOT EXISTS `Isapre` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            health_plan_id BIGINT,
            discount DECIMAL(10, 2),
            FOREIGN KEY (health_plan_id) REFERENCES `HealthPlan` (id)
        )
        "#,
    ),
    (
        "Remuneration",
        r#"
        CREATE TABLE IF NOT EXISTS `Remuneration` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            employee_id BIGINT,
            afp_id BIGINT,
            health_plan_id BIGINT,
            gross_amount DECIMAL(10, 2),
            tax DECIMAL(5, 2),
            deductions DECIMAL(10, 2),
            bonus DECIMAL(10, 2),
            welfare_contribution DECIMAL(10, 2),
            net_amount DECIMAL(10, 2),
            FOREIGN KEY (employee_id) REFERENCES `Employee` (id),
            FOREIGN KEY (afp_id) REFERENCES `AFP` (id),
            FOREIGN KEY (health_plan_id) REFERENCES `HealthPlan` (id)
        )
        "#,
    ),
    (
        "Bonus",
        r#"
        CREATE TABLE IF NOT EXISTS `Bonus` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            remuneration_id BIGINT,
            benefit DECIMAL(10, 2),
            FOREIGN KEY (remuneration_id) REFERENCES `Remuneration` (id)
        )
        "#,
    ),
    (
        "Contract",
        r#"
        CREATE TABLE IF NOT EXISTS `Contract` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            employee_id BIGINT,
            contract_type VARCHAR(50),
            start_date DATE,
            end_date DATE,
            classification VARCHAR(50),
            department_id BIGINT,
            registration_date DATE,
            FOREIGN KEY (employee_id) REFERENCES `Employee` (id),
            FOREIGN KEY (department_id) REFERENCES `Department` (id)
        )
        "#,
    ),
    (
        "Vacation",
        r#"
        CREATE TABLE IF NOT EXISTS `Vacation` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            employee_id BIGINT,
            start_date DATE,
            end_date DATE,
            days_taken INT,
            accumulated_days INT,
            long_service_employee BOOLEAN,
            FOREIGN KEY (employee_id) REFERENCES `Employee` (id)
        )
        "#,
    ),
    (
        "Evaluation",
        r#"
        CREATE TABLE IF NOT EXISTS `Evaluation` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            employee_id BIGINT,
            evaluation_date DATE,
            evaluator VARCHAR(100),
            evaluation_factor DECIMAL(5, 2),
            rating VARCHAR(50),
            comments TEXT,
            FOREIGN KEY (employee_id) REFERENCES `Employee` (id)
        )
        "#,
    ),
    (
        "Training",
        r#"
        CREATE TABLE IF NOT EXISTS `Training` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            employee_id BIGINT,
            training_date DATE,
            course VARCHAR(100),
            score DECIMAL(5, 2),
            institution VARCHAR(100),
            comments TEXT,
            FOREIGN KEY (employee_id) REFERENCES `Employee` (id)
        )
        "#,
    ),
    (
        "User",
        r#"
        CREATE TABLE IF NOT EXISTS `User` (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            username VARCHAR(100) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL
        )
        "#,
    ),
];

/// Creates any missing table. Existing tables are left untouched.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    for (table, ddl) in TABLES {
        debug!(table, "Ensuring table exists");
        sqlx::query(ddl).execute(pool).await?;
    }
    info!(tables = TABLES.len(), "Schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_statement_is_idempotent() {
        for (table, ddl) in TABLES {
            assert!(
                ddl.contains(&format!("CREATE TABLE IF NOT EXISTS `{table}`")),
                "{table} must use CREATE TABLE IF NOT EXISTS"
            );
            assert!(!ddl.to_uppercase().contains("DROP"), "{table} must not drop anything");
        }
    }

    #[test]
    fn foreign_keys_point_at_earlier_tables() {
        for (i, (table, ddl)) in TABLES.iter().enumerate() {
            for target in ddl.split("REFERENCES `").skip(1) {
                let target = target.split('`').next().unwrap();
                let pos = TABLES.iter().position(|(name, _)| *name == target);
                assert!(
                    matches!(pos, Some(p) if p < i),
                    "{table} references {target} before it is created"
                );
            }
        }
    }

    #[test]
    fn join_table_is_keyed_by_the_pair() {
        let (_, ddl) = TABLES.iter().find(|(name, _)| *name == "EmployeePosition").unwrap();
        assert!(ddl.contains("PRIMARY KEY (employee_id, position_id)"));
    }
}
