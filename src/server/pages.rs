//! Server-rendered HTML pages.

use crate::models::{ClockRecord, Employee};
use crate::utils::html::escape_html;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Home</a> | <a href="/employees">Employees</a> | <a href="/records">Records</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#
    )
}

pub fn index() -> String {
    layout(
        "Time Clock",
        r#"<ul>
<li><a href="/employees">Manage employees and clock in/out</a></li>
<li><a href="/records">View clock records</a></li>
<li><a href="/export">Download spreadsheet</a></li>
</ul>"#,
    )
}

pub fn employees(list: &[Employee]) -> String {
    let mut body = String::from(
        r#"<form method="post" action="/employees">
<input name="name" placeholder="Name" required>
<input name="badge_number" placeholder="Badge number" required>
<input name="role" placeholder="Role" required>
<button type="submit">Add employee</button>
</form>
<table>
<tr><th>ID</th><th>Name</th><th>Badge</th><th>Role</th><th></th></tr>
"#,
    );

    for e in list {
        body.push_str(&format!(
            r#"<tr><td>{id}</td><td>{name}</td><td>{badge}</td><td>{role}</td><td>
<form method="post" action="/clock/{id}/entrance"><button>Entrance</button></form>
<form method="post" action="/clock/{id}/exit"><button>Exit</button></form>
<form method="post" action="/employees/{id}/remove"><button>Remove</button></form>
</td></tr>
"#,
            id = e.id,
            name = escape_html(&e.name),
            badge = escape_html(&e.badge_number),
            role = escape_html(&e.role),
        ));
    }
    body.push_str("</table>");

    layout("Employees", &body)
}

pub fn records(list: &[ClockRecord]) -> String {
    let mut body = String::from(
        r#"<p><a href="/export">Export to spreadsheet</a></p>
<form method="post" action="/records/clear"><button>Clear all records</button></form>
<table>
<tr><th>Employee</th><th>Type</th><th>Time</th></tr>
"#,
    );

    for r in list {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&r.employee_name),
            r.kind,
            escape_html(&r.timestamp),
        ));
    }
    body.push_str("</table>");

    layout("Clock Records", &body)
}
