use super::{escape, money, opt};
use crate::model::company::Company;
use crate::model::contract::Contract;
use crate::model::employee::Employee;
use crate::model::evaluation::Evaluation;
use crate::model::training::Training;
use crate::model::vacation::Vacation;
use crate::store::{AdditionalInfo, GeneralInfo};

pub const NO_NET_AMOUNT: &str = "No net amount registered";
pub const NO_HEALTH_PLAN: &str = "No health plan registered";

fn table(headers: &[&str], rows: Vec<Vec<String>>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("<p>{}</p>", escape(empty));
    }
    let mut html = String::from("<table>\n<tr>");
    for header in headers {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr>\n");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>");
    html
}

pub fn employees(employees: &[Employee], username: &str) -> String {
    let rows = employees
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                format!(
                    "<a href=\"/employee?employee_id={}\">{}</a>",
                    e.id,
                    escape(&e.full_name())
                ),
                opt(&e.rut),
                opt(&e.phone),
                opt(&e.nationality),
            ]
        })
        .collect();

    format!(
        "<p>Signed in as {}</p>\n{}",
        escape(username),
        table(
            &["ID", "Name", "RUT", "Phone", "Nationality"],
            rows,
            "No employees registered."
        )
    )
}

/// Detail page body when the employee could not be shown.
pub fn employee_error(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", escape(message))
}

pub fn employee_detail(
    info: &GeneralInfo,
    extra: &AdditionalInfo,
    contracts: &[Contract],
    vacations: &[Vacation],
    missing_info: &[&str],
) -> String {
    let e = &info.employee;
    let position = match (info.position_name(), info.department.as_ref().and_then(|d| d.name.as_deref())) {
        (Some(position), Some(department)) => format!("{} ({})", escape(position), escape(department)),
        (Some(position), None) => escape(position),
        (None, _) => "Not assigned".to_string(),
    };
    let net_amount = extra
        .net_amount()
        .map(money)
        .unwrap_or_else(|| "Not registered".to_string());
    let health_plan = extra
        .health_plan
        .as_ref()
        .map(|plan| escape(&plan.label()))
        .unwrap_or_else(|| NO_HEALTH_PLAN.to_string());
    let pension_fund = extra
        .pension_fund
        .as_ref()
        .and_then(|afp| afp.name.as_deref())
        .map(escape)
        .unwrap_or_else(|| "Not registered".to_string());

    let mut html = String::from("<dl>\n");
    for (label, value) in [
        ("First name", opt(&e.first_name)),
        ("Last name", opt(&e.last_name)),
        ("Phone", opt(&e.phone)),
        ("RUT", opt(&e.rut)),
        ("Position", position),
        ("Net amount", net_amount),
        ("Health plan", health_plan),
        ("Pension fund", pension_fund),
    ] {
        html.push_str(&format!("<dt>{label}</dt><dd>{value}</dd>\n"));
    }
    html.push_str("</dl>\n");

    if !missing_info.is_empty() {
        html.push_str("<ul class=\"missing-info\">\n");
        for item in missing_info {
            html.push_str(&format!("<li>{}</li>\n", escape(item)));
        }
        html.push_str("</ul>\n");
    }

    if !extra.bonuses.is_empty() {
        let bonuses: Vec<String> = extra
            .bonuses
            .iter()
            .filter_map(|b| b.benefit)
            .map(money)
            .collect();
        html.push_str(&format!("<p>Bonuses: {}</p>\n", bonuses.join(", ")));
    }

    html.push_str("<h2>Contracts</h2>\n");
    let rows = contracts
        .iter()
        .map(|c| {
            vec![
                opt(&c.contract_type),
                opt(&c.classification),
                opt(&c.start_date),
                opt(&c.end_date),
                opt(&c.registration_date),
            ]
        })
        .collect();
    html.push_str(&table(
        &["Type", "Classification", "Start", "End", "Registered"],
        rows,
        "No contracts registered.",
    ));

    html.push_str("\n<h2>Vacations</h2>\n");
    let rows = vacations
        .iter()
        .map(|v| {
            vec![
                opt(&v.start_date),
                opt(&v.end_date),
                opt(&v.days_taken),
                opt(&v.accumulated_days),
                match v.long_service_employee {
                    Some(true) => "yes".to_string(),
                    Some(false) => "no".to_string(),
                    None => String::new(),
                },
            ]
        })
        .collect();
    html.push_str(&table(
        &["Start", "End", "Days taken", "Accumulated", "Long service"],
        rows,
        "No vacations registered.",
    ));
    html
}

pub fn companies(companies: &[Company]) -> String {
    let rows = companies
        .iter()
        .map(|c| {
            vec![
                opt(&c.rut),
                opt(&c.name),
                opt(&c.address),
                opt(&c.phone),
                opt(&c.industry),
            ]
        })
        .collect();
    table(
        &["RUT", "Name", "Address", "Phone", "Industry"],
        rows,
        "No companies registered.",
    )
}

pub fn train_eval(evaluations: &[Evaluation], trainings: &[Training]) -> String {
    let mut html = String::from(
        "<p><a href=\"/add-evaluation\">Add evaluation</a> <a href=\"/add-training\">Add training</a></p>\n<h2>Evaluations</h2>\n",
    );
    let rows = evaluations
        .iter()
        .map(|e| {
            vec![
                opt(&e.employee_id),
                opt(&e.evaluation_date),
                opt(&e.evaluator),
                e.evaluation_factor.map(money).unwrap_or_default(),
                opt(&e.rating),
                opt(&e.comments),
            ]
        })
        .collect();
    html.push_str(&table(
        &["Employee", "Date", "Evaluator", "Factor", "Rating", "Comments"],
        rows,
        "No evaluations registered.",
    ));

    html.push_str("\n<h2>Trainings</h2>\n");
    let rows = trainings
        .iter()
        .map(|t| {
            vec![
                opt(&t.employee_id),
                opt(&t.training_date),
                opt(&t.course),
                t.score.map(money).unwrap_or_default(),
                opt(&t.institution),
                opt(&t.comments),
            ]
        })
        .collect();
    html.push_str(&table(
        &["Employee", "Date", "Course", "Score", "Institution", "Comments"],
        rows,
        "No trainings registered.",
    ));
    html
}
