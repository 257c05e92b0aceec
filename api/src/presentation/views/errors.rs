pub fn not_found() -> String {
    r#"<div class="row justify-content-center">
<h1>404: Page Not Found</h1>
<p>We couldn't find what you were looking for.</p>
<p><a href="/">Back to the homepage</a></p>
</div>"#
        .to_string()
}

pub fn forbidden() -> String {
    r#"<div class="row justify-content-center">
<h1>403: Forbidden</h1>
<p>You can't do that.</p>
</div>"#
        .to_string()
}

/// Standalone document, rendered without session state.
pub fn internal_error_document() -> String {
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>Server Error</title>\n</head>\n<body>\n<h1>500: Something went wrong</h1>\n<p><a href=\"/\">Back to the homepage</a></p>\n</body>\n</html>\n".to_string()
}
