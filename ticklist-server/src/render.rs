//! HTML rendering for the to-do pages
//!
//! Plain string building, no template engine. Every user-supplied title goes
//! through [`escape`] before it is interpolated.

use std::fmt::Write;

use axum::http::StatusCode;

use crate::models::Todo;

const STYLE: &str = "\
    body { font-family: system-ui, sans-serif; max-width: 36rem; margin: 2rem auto; padding: 0 1rem; color: #222; }\n\
    form { display: flex; gap: .5rem; margin-bottom: 1.5rem; }\n\
    input[name=title] { flex: 1; padding: .4rem .6rem; }\n\
    ul.todos { list-style: none; padding: 0; }\n\
    li.todo { display: flex; gap: .75rem; padding: .4rem 0; border-bottom: 1px solid #eee; }\n\
    li.todo .title { flex: 1; }\n\
    li.todo.done .title { text-decoration: line-through; color: #888; }\n\
    p.empty { color: #888; }\n";

/// Render the home page: add form plus one row per record.
pub fn home_page(todos: &[Todo]) -> String {
    let mut html = String::with_capacity(1024 + todos.len() * 160);
    page_open(&mut html, "ticklist");

    html.push_str("  <h1>ticklist</h1>\n");
    html.push_str(concat!(
        "  <form action=\"/add\" method=\"post\">\n",
        "    <input type=\"text\" name=\"title\" placeholder=\"What needs doing?\" autofocus>\n",
        "    <button type=\"submit\">Add</button>\n",
        "  </form>\n",
    ));

    if todos.is_empty() {
        html.push_str("  <p class=\"empty\">Nothing to do yet. Add the first item above.</p>\n");
    } else {
        html.push_str("  <ul class=\"todos\">\n");
        for todo in todos {
            let (class, action) = if todo.complete {
                ("todo done", "Undo")
            } else {
                ("todo", "Done")
            };
            let _ = writeln!(
                html,
                "    <li class=\"{class}\"><span class=\"title\">{title}</span> \
                 <a href=\"/update/{id}\">{action}</a> <a href=\"/delete/{id}\">Delete</a></li>",
                title = escape(&todo.title),
                id = todo.id,
            );
        }
        html.push_str("  </ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Render the generic error page every failed request degrades to.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let mut html = String::with_capacity(512);
    page_open(&mut html, &format!("{} {reason}", status.as_u16()));

    let _ = write!(
        html,
        concat!(
            "  <h1>{code} {reason}</h1>\n",
            "  <p>{message}</p>\n",
            "  <p><a href=\"/\">Back to the list</a></p>\n",
        ),
        code = status.as_u16(),
        reason = reason,
        message = escape(message),
    );

    html.push_str("</body>\n</html>\n");
    html
}

/// Escape the five HTML-significant characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn page_open(html: &mut String, title: &str) {
    let _ = write!(
        html,
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "  <title>{title}</title>\n",
            "  <style>\n{style}  </style>\n",
            "</head>\n",
            "<body>\n",
        ),
        title = escape(title),
        style = STYLE,
    );
}
