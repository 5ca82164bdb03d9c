//! HTML rendering. Views take plain data and return markup; they never touch
//! the store.

use std::fmt::Display;

use actix_web::{HttpRequest, HttpResponse};

use crate::config::Config;
use crate::utils::flash::{self, Flash};

pub mod forms;
pub mod listings;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text of an optional column, empty when NULL.
pub fn opt<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| escape(&v.to_string()))
        .unwrap_or_default()
}

pub fn money(value: f64) -> String {
    format!("{:.2}", value)
}

pub struct Page {
    title: String,
    body: String,
    nav: bool,
}

impl Page {
    pub fn new(title: impl Into<String>, body: String) -> Self {
        Self {
            title: title.into(),
            body,
            nav: true,
        }
    }

    /// Pages shown before login carry no navigation bar.
    pub fn without_nav(mut self) -> Self {
        self.nav = false;
        self
    }

    /// Wraps the body in the layout, consuming any pending flash message.
    pub fn render(self, req: &HttpRequest, config: &Config) -> HttpResponse {
        let flash = flash::peek(req, &config.session_secret);
        let html = layout(&self.title, self.nav, flash.as_ref(), &self.body);

        let mut resp = HttpResponse::Ok();
        resp.content_type("text/html; charset=utf-8");
        if flash::has_cookie(req) {
            resp.cookie(flash::removal_cookie());
        }
        resp.body(html)
    }
}

const NAV: &[(&str, &str)] = &[
    ("/menu", "Employees"),
    ("/companies", "Companies"),
    ("/add-contract", "Add contract"),
    ("/train-eval", "Trainings & evaluations"),
    ("/register_vacation", "Vacations"),
    ("/logout", "Log out"),
];

fn layout(title: &str, nav: bool, flash: Option<&Flash>, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{} | HR Records</title>\n", escape(title)));
    html.push_str("</head>\n<body>\n");

    if nav {
        html.push_str("<nav>");
        for (href, label) in NAV {
            html.push_str(&format!("<a href=\"{href}\">{label}</a> "));
        }
        html.push_str("</nav>\n");
    }

    if let Some(flash) = flash {
        html.push_str(&format!(
            "<div class=\"flash flash-{}\">{}</div>\n",
            flash.level.as_ref(),
            escape(&flash.message)
        ));
    }

    html.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}
