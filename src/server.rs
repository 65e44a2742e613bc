use std::io;
use std::sync::Arc;

use ntex::web;
use ntex::web::HttpRequest;
use spdlog::{debug, info};

use crate::config::Config;
use crate::query_string::QueryString;
use crate::search_index::SearchIndex;
use crate::store_file::to_script;
use crate::view::search_page::{Facets, SearchPage};

/// Read only for the whole life of the server, so no lock around it.
pub struct AppState {
    pub index: SearchIndex,
    pub page_size: u32,
}

fn json_response(body: serde_json::Result<String>) -> web::HttpResponse {
    match body {
        Ok(body) => web::HttpResponse::Ok()
            .content_type("application/json; charset=utf-8")
            .body(body),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error writing response: {}", e)),
    }
}

pub fn render_search(state: &AppState, query_str: &str) -> serde_json::Result<String> {
    let qs = QueryString::from(query_str);
    let query = qs.to_search_query();
    let results = state.index.search(&query);
    debug!("Search {:?} matched {} posts", query, results.len());

    let page = SearchPage::new(&results, qs.get_page(), state.page_size);
    serde_json::to_string(&page)
}

pub fn render_facets(state: &AppState) -> serde_json::Result<String> {
    let counts = Facets {
        tags: state.index.tag_counts(),
        categories: state.index.category_counts(),
    };
    serde_json::to_string(&counts)
}

pub fn render_store(state: &AppState) -> serde_json::Result<String> {
    Ok(to_script(&state.index.to_json()?))
}

#[web::get("/search")]
async fn search(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let query_str = req.uri().query().unwrap_or("");
    json_response(render_search(&state, query_str))
}

#[web::get("/facets")]
async fn facets(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    json_response(render_facets(&state))
}

#[web::get("/store.js")]
async fn store(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match render_store(&state) {
        Ok(body) => web::HttpResponse::Ok()
            .content_type("application/javascript; charset=utf-8")
            .body(body),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error writing store: {}", e)),
    }
}

pub async fn server_run(config: &Config, index: SearchIndex) -> io::Result<()> {
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    info!("Serving {} posts on {}:{}", index.len(), bind_addr, bind_port);

    let app_state = Arc::new(AppState {
        index,
        page_size: config.search.page_size,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(search)
            .service(facets)
            .service(store)
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::test_data::STORE_DATA;

    use super::*;

    fn sample_state() -> AppState {
        AppState {
            index: SearchIndex::load(STORE_DATA).unwrap(),
            page_size: 2,
        }
    }

    #[test]
    fn test_render_search() {
        let state = sample_state();
        let body = render_search(&state, "q=maths&category=math&page=2").unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["total"], 5);
        assert_eq!(value["page"], 2);
        assert_eq!(value["page_count"], 3);
        assert_eq!(value["results"][0]["title"], "Rectangle areas!");
        assert_eq!(value["results"][1]["title"], "Polygon vertices");
    }

    #[test]
    fn test_render_search_without_query() {
        let state = sample_state();
        let body = render_search(&state, "").unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["total"], 14);
        assert_eq!(value["results"][0]["title"], "Archive");
        assert_eq!(value["results"][0]["date"], "");
    }

    #[test]
    fn test_render_facets() {
        let state = sample_state();
        let value: Value = serde_json::from_str(&render_facets(&state).unwrap()).unwrap();
        assert_eq!(value["tags"][0], serde_json::json!(["python", 8]));
        assert_eq!(value["categories"][0], serde_json::json!(["blog", 13]));
        assert_eq!(value["tags"].as_array().unwrap().len(), state.index.tag_counts().len());
    }

    #[test]
    fn test_render_store() {
        let state = sample_state();
        let body = render_store(&state).unwrap();
        assert!(body.starts_with("var store = ["));
        let reloaded = SearchIndex::load(&body).unwrap();
        assert_eq!(reloaded.len(), 14);
        assert_eq!(reloaded.records().collect::<Vec<_>>(), state.index.records().collect::<Vec<_>>());
    }
}
