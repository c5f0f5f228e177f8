//! In-memory stand-in for the linkshelf backend.
//!
//! Serves `/api/links` and `/api/types` with the same shapes the real
//! backend uses. Ids are sequential from 1 and nothing survives a restart.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub url: String,
    pub types: Vec<String>,
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct CreateLink {
    pub title: String,
    pub overview: String,
    pub url: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    pub search: Option<String>,
}

impl ListQuery {
    fn matches(&self, link: &Link) -> bool {
        if let Some(tag) = self.link_type.as_deref().filter(|t| !t.is_empty()) {
            if !link.types.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(needle) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            return [&link.title, &link.overview, &link.url]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        }
        true
    }
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    links: BTreeMap<i64, Link>,
}

impl Store {
    fn insert(&mut self, input: CreateLink) -> Link {
        self.next_id += 1;
        let link = Link {
            id: self.next_id,
            title: input.title,
            overview: input.overview,
            url: input.url,
            types: input.types,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        self.links.insert(link.id, link.clone());
        link
    }

    /// Distinct tags in first-appearance order.
    fn types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for tag in self.links.values().flat_map(|l| l.types.iter()) {
            if !types.contains(tag) {
                types.push(tag.clone());
            }
        }
        types
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/links", get(list_links).post(create_link))
        .route("/api/links/{id}", delete(delete_link))
        .route("/api/types", get(list_types))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_links(State(db): State<Db>, Query(query): Query<ListQuery>) -> Json<Vec<Link>> {
    let store = db.read().await;
    Json(store.links.values().filter(|l| query.matches(l)).cloned().collect())
}

async fn list_types(State(db): State<Db>) -> Json<Vec<String>> {
    Json(db.read().await.types())
}

async fn create_link(
    State(db): State<Db>,
    Json(input): Json<CreateLink>,
) -> (StatusCode, Json<Link>) {
    let link = db.write().await.insert(input);
    tracing::info!(id = link.id, title = %link.title, "link created");
    (StatusCode::CREATED, Json(link))
}

async fn delete_link(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut store = db.write().await;
    match store.links.remove(&id) {
        Some(_) => {
            tracing::info!(id, "link deleted");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(title: &str, types: &[&str]) -> CreateLink {
        CreateLink {
            title: title.to_string(),
            overview: format!("{title} overview"),
            url: format!("https://example.com/{}", title.to_lowercase()),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn ids_are_sequential() {
        let mut store = Store::default();
        assert_eq!(store.insert(create("One", &["a"])).id, 1);
        assert_eq!(store.insert(create("Two", &["a"])).id, 2);
    }

    #[test]
    fn types_are_distinct_in_first_appearance_order() {
        let mut store = Store::default();
        store.insert(create("One", &["video", "rust"]));
        store.insert(create("Two", &["book", "rust"]));
        assert_eq!(store.types(), vec!["video", "rust", "book"]);
    }

    #[test]
    fn query_filters_by_tag_and_search() {
        let mut store = Store::default();
        let link = store.insert(create("Ownership", &["video"]));

        let by_type = ListQuery {
            link_type: Some("video".to_string()),
            search: None,
        };
        assert!(by_type.matches(&link));

        let other_type = ListQuery {
            link_type: Some("book".to_string()),
            search: None,
        };
        assert!(!other_type.matches(&link));

        let by_search = ListQuery {
            link_type: None,
            search: Some("OWNER".to_string()),
        };
        assert!(by_search.matches(&link));

        let empty = ListQuery {
            link_type: Some(String::new()),
            search: Some(String::new()),
        };
        assert!(empty.matches(&link));
    }

    #[test]
    fn create_link_defaults_types_to_empty() {
        let input: CreateLink =
            serde_json::from_str(r#"{"title":"t","overview":"o","url":"https://u.dev"}"#).unwrap();
        assert!(input.types.is_empty());
    }

    #[test]
    fn create_link_rejects_missing_url() {
        let result: Result<CreateLink, _> =
            serde_json::from_str(r#"{"title":"t","overview":"o","types":["a"]}"#);
        assert!(result.is_err());
    }
}
