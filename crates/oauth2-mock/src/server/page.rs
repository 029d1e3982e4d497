//! HTML page for the authorize endpoint.

/// Render the authorization page.
///
/// Shows a table echoing every received parameter, plus a form posting to
/// `/submit` pre-filled with `redirect_uri`, `state`, and an editable
/// textarea of claim lines. All reflected values are HTML-escaped to
/// prevent XSS.
pub fn render_authorize_page(params: &[(String, String)], claim_lines: &[&str]) -> String {
    let param_rows: String = params
        .iter()
        .map(|(key, value)| {
            format!("<tr><td>{}<td>{}\n", html_escape(key), html_escape(value))
        })
        .collect();

    let claims: String =
        claim_lines.iter().map(|line| format!("{}\n", html_escape(line))).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>OAuth2 authorization endpoint</title>
</head>
<body>
<h1>OAuth2 authorization endpoint</h1>
<table>
<tr><th>key<th>value
{param_rows}</table>
<form method="post" action="/submit">
<table>
<tr><th>redirect_uri<td><input type="text" size="100" name="redirect_uri" value="{redirect_uri}">
<tr><th>state<td><input type="text" size="100" name="state" value="{state}">
<tr><th>claims<td><textarea name="claims" rows="20" cols="80">{claims}</textarea>
<tr><td><input type="submit">
</table>
</form>
</body>
</html>"#,
        param_rows = param_rows,
        redirect_uri = html_escape(first_value(params, "redirect_uri")),
        state = html_escape(first_value(params, "state")),
        claims = claims,
    )
}

/// First value for `key` among the received parameters, or empty.
fn first_value<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params.iter().find(|(k, _)| k == key).map_or("", |(_, v)| v.as_str())
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>alert("xss")</script>"#),
            "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_echoes_all_params() {
        let params = pairs(&[("redirect_uri", "https://example.com/cb"), ("state", "abc")]);
        let html = render_authorize_page(&params, &["user_id=fake_user"]);

        assert!(html.contains("https://example.com/cb"));
        assert!(html.contains("<td>abc"));
        assert!(html.contains("user_id=fake_user"));
    }

    #[test]
    fn test_prefills_submit_form() {
        let params = pairs(&[("redirect_uri", "https://example.com/cb"), ("state", "xyz")]);
        let html = render_authorize_page(&params, &[]);

        assert!(html.contains(r#"name="redirect_uri" value="https://example.com/cb""#));
        assert!(html.contains(r#"name="state" value="xyz""#));
    }

    #[test]
    fn test_missing_params_render_empty() {
        let html = render_authorize_page(&[], &[]);
        assert!(html.contains(r#"name="redirect_uri" value="""#));
        assert!(html.contains(r#"name="state" value="""#));
    }

    #[test]
    fn test_reflected_values_are_escaped() {
        let params = pairs(&[("state", r#""><script>alert(1)</script>"#)]);
        let html = render_authorize_page(&params, &[]);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
