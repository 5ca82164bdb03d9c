use strum::IntoEnumIterator;

use super::escape;
use crate::model::contract::{Classification, ContractType};
use crate::model::evaluation::Rating;

fn select<T: AsRef<str>>(name: &str, options: impl Iterator<Item = T>) -> String {
    let mut html = format!("<select id=\"{name}\" name=\"{name}\" required>");
    for option in options {
        let value = option.as_ref();
        html.push_str(&format!("<option value=\"{value}\">{value}</option>"));
    }
    html.push_str("</select>");
    html
}

fn field(label: &str, input: String) -> String {
    format!("<p><label>{label}<br>{input}</label></p>\n")
}

fn input(name: &str, kind: &str) -> String {
    format!("<input type=\"{kind}\" id=\"{name}\" name=\"{name}\" required>")
}

fn form(action: &str, fields: &[String], submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n{}<button type=\"submit\">{submit}</button>\n</form>",
        fields.concat()
    )
}

pub fn login(error: Option<&str>) -> String {
    let mut html = String::new();
    if let Some(error) = error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape(error)));
    }
    html.push_str(&form(
        "/",
        &[
            field("Username", input("username", "text")),
            field("Password", input("password", "password")),
        ],
        "Log in",
    ));
    html
}

pub fn add_contract() -> String {
    form(
        "/add-contract",
        &[
            field("Employee ID", input("employee_id", "number")),
            field("Contract type", select("contract_type", ContractType::iter())),
            field("Start date", input("start_date", "date")),
            field("End date", input("end_date", "date")),
            field("Classification", select("classification", Classification::iter())),
        ],
        "Add contract",
    )
}

pub fn add_evaluation() -> String {
    form(
        "/add-evaluation",
        &[
            field("Employee ID", input("employee_id", "number")),
            field("Date", input("evaluation_date", "date")),
            field("Evaluator", input("evaluator", "text")),
            field(
                "Weighting factor",
                "<input type=\"number\" step=\"0.01\" id=\"evaluation_factor\" name=\"evaluation_factor\" required>".to_string(),
            ),
            field("Rating", select("rating", Rating::iter())),
            field(
                "Comments",
                "<textarea id=\"comments\" name=\"comments\"></textarea>".to_string(),
            ),
        ],
        "Add evaluation",
    )
}

pub fn add_training() -> String {
    form(
        "/add-training",
        &[
            field("Employee ID", input("employee_id", "number")),
            field("Date", input("training_date", "date")),
            field("Course", input("course", "text")),
            field(
                "Score",
                "<input type=\"number\" step=\"0.01\" id=\"score\" name=\"score\" required>".to_string(),
            ),
            field("Institution", input("institution", "text")),
            field(
                "Comments",
                "<textarea id=\"comments\" name=\"comments\"></textarea>".to_string(),
            ),
        ],
        "Add training",
    )
}

/// Static vacation form. The name lookup fills `#employee_name` as the id is
/// typed.
pub fn register_vacation() -> String {
    let mut html = form(
        "/add_vacation",
        &[
            field("Employee ID", input("employee_id", "number")),
            "<p id=\"employee_name\"></p>\n".to_string(),
            field("Start date", input("start_date", "date")),
            field("End date", input("end_date", "date")),
        ],
        "Register vacation",
    );
    html.push_str(
        r#"
<script>
document.getElementById("employee_id").addEventListener("change", async (e) => {
  const target = document.getElementById("employee_name");
  const resp = await fetch("/get_employee_name/" + encodeURIComponent(e.target.value));
  target.textContent = resp.ok ? await resp.text() : "Employee not found";
});
</script>"#,
    );
    html
}
