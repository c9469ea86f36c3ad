use actix_web::{get, HttpResponse, Responder};

// Minimal static pages: the middleware needs a redirect target and the
// dashboard shell is rendered client-side.

const LOGIN_PAGE_HTML: &str = r#"<!doctype html>
<html>
  <head><title>Admin sign-in</title></head>
  <body>
    <h1>Admin sign-in</h1>
    <a href="/api/auth/login">Sign in with GitHub</a>
  </body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!doctype html>
<html>
  <head><title>Admin</title></head>
  <body>
    <h1>Admin dashboard</h1>
  </body>
</html>
"#;

#[get("/admin/login")]
pub async fn login_page_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LOGIN_PAGE_HTML)
}

#[get("/admin")]
pub async fn dashboard_page_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DASHBOARD_HTML)
}
