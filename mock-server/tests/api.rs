use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Link};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn delete(uri: &str) -> Request<String> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn call<S>(app: &mut S, request: Request<String>) -> axum::response::Response
where
    S: Service<Request<String>, Response = axum::response::Response, Error = std::convert::Infallible>,
{
    ServiceExt::<Request<String>>::ready(app)
        .await
        .unwrap()
        .call(request)
        .await
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_links_empty() {
    let resp = app().oneshot(get("/api/links")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let links: Vec<Link> = body_json(resp).await;
    assert!(links.is_empty());
}

#[tokio::test]
async fn list_types_empty() {
    let resp = app().oneshot(get("/api/types")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let types: Vec<String> = body_json(resp).await;
    assert!(types.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_link_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/links",
            r#"{"title":"Rust Book","overview":"Intro","url":"https://doc.rust-lang.org/book/","types":["book"]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let link: Link = body_json(resp).await;
    assert_eq!(link.id, 1);
    assert_eq!(link.title, "Rust Book");
    assert_eq!(link.types, vec!["book"]);
    assert!(link.created_at.ends_with('Z'));
}

#[tokio::test]
async fn create_link_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/links", r#"{"title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- delete ---

#[tokio::test]
async fn delete_link_not_found() {
    let resp = app().oneshot(delete("/api/links/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_link_bad_id_returns_400() {
    let resp = app().oneshot(delete("/api/links/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- filtering ---

#[tokio::test]
async fn list_links_filters_by_type_and_search() {
    let mut app = app().into_service();

    for body in [
        r#"{"title":"Ownership explained","overview":"Borrowing","url":"https://a.dev","types":["video"]}"#,
        r#"{"title":"Async Book","overview":"Futures","url":"https://b.dev","types":["book","async"]}"#,
        r#"{"title":"Tokio talk","overview":"Runtime internals","url":"https://c.dev","types":["video","async"]}"#,
    ] {
        let resp = call(&mut app, json_request("POST", "/api/links", body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = call(&mut app, get("/api/links?type=video")).await;
    let links: Vec<Link> = body_json(resp).await;
    assert_eq!(links.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 3]);

    let resp = call(&mut app, get("/api/links?search=book")).await;
    let links: Vec<Link> = body_json(resp).await;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].title, "Async Book");

    let resp = call(&mut app, get("/api/links?type=async&search=runtime")).await;
    let links: Vec<Link> = body_json(resp).await;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, 3);

    let resp = call(&mut app, get("/api/types")).await;
    let types: Vec<String> = body_json(resp).await;
    assert_eq!(types, vec!["video", "book", "async"]);
}

// --- full lifecycle ---

#[tokio::test]
async fn create_list_delete_lifecycle() {
    let mut app = app().into_service();

    let resp = call(
        &mut app,
        json_request(
            "POST",
            "/api/links",
            r#"{"title":"Nomicon","overview":"Unsafe","url":"https://doc.rust-lang.org/nomicon/","types":["book"]}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Link = body_json(resp).await;
    let id = created.id;

    let resp = call(&mut app, get("/api/links")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let links: Vec<Link> = body_json(resp).await;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].id, id);

    let resp = call(&mut app, delete(&format!("/api/links/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = call(&mut app, delete(&format!("/api/links/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = call(&mut app, get("/api/links")).await;
    let links: Vec<Link> = body_json(resp).await;
    assert!(links.is_empty());

    // the catalog is derived from the remaining links
    let resp = call(&mut app, get("/api/types")).await;
    let types: Vec<String> = body_json(resp).await;
    assert!(types.is_empty());
}
