//! Minimal HTML rendering. Pages are small enough that `format!` templates
//! with escaping beat a template engine dependency.

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - Gamebox</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ text-align: left; padding: 0.4rem 0.8rem; border-bottom: 1px solid #ddd; }}
label {{ display: block; margin-top: 0.8rem; }}
input {{ padding: 0.3rem; width: 100%; max-width: 24rem; }}
button {{ margin-top: 1rem; padding: 0.4rem 1rem; }}
nav a {{ margin-right: 1rem; }}
</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/games">Games</a><a href="/games/new">Add game</a></nav>
{body}
</body>
</html>"#,
        title = html_escape(title),
        body = body,
    )
}

pub fn date_cell(date: Option<time::Date>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
