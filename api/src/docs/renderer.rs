//! Docs page renderer
//!
//! Renders the route table to a standalone HTML reference page.

use super::{API_DESCRIPTION, API_TITLE};
use crate::routes::{ResponseKind, RouteDoc, OPENAPI_PATH};

/// Fields of a car record as (name, type, note)
const CAR_FIELDS: &[(&str, &str, &str)] = &[
    ("id", "number | string", "unique within its collection"),
    ("make", "string", ""),
    ("model", "string", ""),
    ("year", "integer", ""),
    ("price", "number", ""),
    ("type", "string", "SUV, Sedan, Sports, Truck or Electric"),
    ("color", "string", ""),
    ("mileage", "integer", ""),
    ("description", "string", ""),
    ("features", "string[]", ""),
    ("imageUrl", "string", ""),
];

/// Render the docs page for `routes`
pub fn render_docs_page(routes: &[RouteDoc]) -> String {
    let mut buf = String::new();

    buf.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    buf.push_str("<meta charset=\"utf-8\">\n");
    buf.push_str(&format!(
        "<title>{} - Docs</title>\n",
        escape_html(API_TITLE)
    ));
    buf.push_str(STYLE);
    buf.push_str("</head>\n<body>\n");

    // Header
    buf.push_str(&format!(
        "<h1>{} <small>v{}</small></h1>\n",
        escape_html(API_TITLE),
        env!("CARGO_PKG_VERSION")
    ));
    buf.push_str(&format!("<p>{}</p>\n", escape_html(API_DESCRIPTION)));
    buf.push_str(&format!(
        "<p>OpenAPI document: <a href=\"{0}\">{0}</a></p>\n",
        OPENAPI_PATH
    ));

    // Endpoints
    buf.push_str("<h2>Endpoints</h2>\n");
    for route in routes {
        buf.push_str(&render_route(route));
    }

    // Car schema
    buf.push_str("<h2 id=\"car\">Car</h2>\n");
    buf.push_str(&render_car_fields());

    buf.push_str("</body>\n</html>\n");
    buf
}

fn render_route(route: &RouteDoc) -> String {
    let returns = match route.response {
        ResponseKind::Welcome => "JSON object with the welcome message and endpoint paths",
        ResponseKind::CarList => "JSON array of <a href=\"#car\">Car</a>",
        ResponseKind::Health => "JSON object with status, version and record counts",
        ResponseKind::DocsPage => "HTML",
        ResponseKind::OpenApi => "OpenAPI 3.0 JSON document",
    };

    format!(
        "<section class=\"route\">\n\
         <h3><span class=\"method\">GET</span> <a href=\"{path}\"><code>{path}</code></a></h3>\n\
         <p><strong>{summary}</strong>: {description}</p>\n\
         <p>Returns: {returns}</p>\n\
         </section>\n",
        path = escape_html(route.path),
        summary = escape_html(route.summary),
        description = escape_html(route.description),
        returns = returns,
    )
}

fn render_car_fields() -> String {
    let mut buf = String::from("<table>\n<tr><th>Field</th><th>Type</th><th>Notes</th></tr>\n");
    for (name, ty, note) in CAR_FIELDS {
        buf.push_str(&format!(
            "<tr><td><code>{}</code></td><td>{}</td><td>{}</td></tr>\n",
            name,
            escape_html(ty),
            escape_html(note)
        ));
    }
    buf.push_str("</table>\n");
    buf.push_str(
        "<p>Only <code>id</code>, <code>make</code>, <code>model</code>, <code>year</code> \
         and <code>price</code> are required. The rest are present on every record or on none.</p>\n",
    );
    buf
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "<style>\n\
body { font-family: system-ui, sans-serif; max-width: 860px; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }\n\
h1 small { font-size: 0.5em; color: #7b8794; }\n\
.route { border: 1px solid #e4e7eb; border-radius: 8px; padding: 0.5rem 1rem; margin-bottom: 1rem; }\n\
.method { background: #2f80ed; color: #fff; border-radius: 4px; padding: 0.1rem 0.5rem; font-size: 0.8em; }\n\
table { border-collapse: collapse; width: 100%; }\n\
th, td { border-bottom: 1px solid #e4e7eb; padding: 0.4rem; text-align: left; }\n\
</style>\n";
