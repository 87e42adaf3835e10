//! Embedded static files: the trunk bundle under `dist/` plus a placeholder
//! `index.html` used until the frontend has been built.
//!
//! Lookup order for a request path: `dist/<path>`, `<path>`, then the
//! single-page fallback `dist/index.html` / `index.html`.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::info;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

const INDEX_CANDIDATES: [&str; 2] = ["dist/index.html", "index.html"];

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    resolve(&STATIC_DIR, req.path())
}

fn resolve(dir: &'static Dir<'static>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    let dist_path = format!("dist/{}", file_path);
    if let Some(file) = dir.get_file(&dist_path).or_else(|| dir.get_file(file_path)) {
        return file_response(file_path, file);
    }

    info!("No embedded asset for {}, serving index", request_path);
    match INDEX_CANDIDATES.iter().find_map(|index| dir.get_file(index)) {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

fn file_response(file_path: &str, file: &File) -> HttpResponse {
    let mime = from_path(file_path).first_or_octet_stream();
    HttpResponse::Ok()
        .content_type(mime.as_ref())
        .body(file.contents().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test::{call_service, init_service, read_body, TestRequest};
    use actix_web::{web, App};

    static EMPTY_DIR: Dir = Dir::new("", &[]);

    fn content_type(resp: &HttpResponse) -> String {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn root_serves_index_html() {
        let resp = resolve(&STATIC_DIR, "/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
    }

    #[test]
    fn unknown_path_falls_back_to_index() {
        let resp = resolve(&STATIC_DIR, "/players/7");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
    }

    #[test]
    fn missing_index_is_not_found() {
        let resp = resolve(&EMPTY_DIR, "/anything");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn default_service_serves_embedded_files() {
        let app =
            init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let req = TestRequest::get().uri("/index.html").to_request();
        let resp = call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("<html"));
    }
}
