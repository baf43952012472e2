//! Google Books API client wrapper

use std::future::Future;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::{log_api_request, log_api_result};
use super::error::CatalogError;
use super::item::CatalogItem;
use super::types::QueryFilters;

/// One page of results as returned by the catalog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub total_items: Option<u32>,
}

/// Anything that can serve a page of catalog results.
///
/// `term` is already trimmed and non-empty; implementations keep no state between calls.
pub trait CatalogSource: Clone + Send + Sync + 'static {
    fn fetch_page(
        &self,
        term: &str,
        filters: &QueryFilters,
        offset: usize,
    ) -> impl Future<Output = Result<CatalogPage, CatalogError>> + Send;
}

/// HTTP client for the `volumes` search endpoint
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    volumes_url: Url,
}

impl CatalogClient {
    pub fn new(config: &ClientConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        let volumes_url = volumes_url(&config.base_url)?;
        tracing::debug!(url = %volumes_url, "Catalog client initialized");
        Ok(Self { http, volumes_url })
    }

    /// Full request URL for one page; the term is form-encoded into `q`.
    pub fn page_url(&self, term: &str, filters: &QueryFilters, offset: usize) -> Url {
        let mut url = self.volumes_url.clone();
        url.query_pairs_mut()
            .append_pair("q", term)
            .append_pair("maxResults", &filters.page_size.get().to_string())
            .append_pair("startIndex", &offset.to_string())
            .append_pair("orderBy", filters.sort_order.as_query_value());
        url
    }

    async fn fetch(
        &self,
        term: &str,
        filters: &QueryFilters,
        offset: usize,
    ) -> Result<CatalogPage, CatalogError> {
        let url = self.page_url(term, filters, offset);
        log_api_request!("volumes", term, offset, page_size = filters.page_size.get());

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status: status.as_u16() });
        }

        let body: VolumesResponse = response.json().await?;
        let page = body.into_page(offset);
        tracing::debug!(
            term,
            offset,
            returned = page.items.len(),
            total = ?page.total_items,
            "Catalog page received"
        );
        Ok(page)
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_page(
        &self,
        term: &str,
        filters: &QueryFilters,
        offset: usize,
    ) -> Result<CatalogPage, CatalogError> {
        let result = self.fetch(term, filters, offset).await;
        log_api_result!("volumes", result, term, offset);
        result
    }
}

fn volumes_url(base_url: &str) -> Result<Url, CatalogError> {
    let base = base_url.trim().trim_end_matches('/');
    Url::parse(&format!("{}/volumes", base))
        .map_err(|e| CatalogError::InvalidEndpoint(format!("{}: {}", base_url, e)))
}

// Wire format of the volumes endpoint. Every field is optional in practice.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumesResponse {
    total_items: Option<u32>,
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    id: Option<String>,
    #[serde(default)]
    volume_info: VolumeInfo,
    sale_info: Option<SaleInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    subtitle: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    publisher: Option<String>,
    published_date: Option<String>,
    description: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    page_count: Option<i64>,
    average_rating: Option<f32>,
    ratings_count: Option<i64>,
    language: Option<String>,
    image_links: Option<ImageLinks>,
    preview_link: Option<String>,
    info_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    thumbnail: Option<String>,
    small_thumbnail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaleInfo {
    buy_link: Option<String>,
}

impl VolumesResponse {
    fn into_page(self, offset: usize) -> CatalogPage {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, volume)| volume.into_item(offset + index))
            .collect();

        CatalogPage {
            items,
            total_items: self.total_items,
        }
    }
}

impl Volume {
    fn into_item(self, position: usize) -> CatalogItem {
        let info = self.volume_info;
        let thumbnail_url = info
            .image_links
            .and_then(|links| links.thumbnail.or(links.small_thumbnail));

        CatalogItem {
            // Positional fallback keeps ids unique within a result set
            id: self
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| format!("result-{}", position)),
            title: info.title.unwrap_or_default(),
            subtitle: info.subtitle,
            authors: info.authors,
            publisher: info.publisher,
            published_date: info.published_date,
            description: info.description,
            categories: info.categories,
            page_count: info.page_count.and_then(|n| u32::try_from(n).ok()),
            average_rating: info.average_rating.map(|r| r.clamp(0.0, 5.0)),
            ratings_count: info.ratings_count.and_then(|n| u32::try_from(n).ok()),
            language: info.language,
            thumbnail_url,
            preview_url: info.preview_link,
            info_url: info.info_link,
            buy_url: self.sale_info.and_then(|sale| sale.buy_link),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{PageSize, SortOrder};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const SAMPLE: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 812,
        "items": [
            {
                "id": "B1hSG45JCX4C",
                "volumeInfo": {
                    "title": "Dune",
                    "authors": ["Frank Herbert"],
                    "publisher": "Penguin",
                    "publishedDate": "2003-08-26",
                    "description": "<p>Set on the desert planet Arrakis</p>",
                    "categories": ["Fiction"],
                    "pageCount": 896,
                    "averageRating": 4.5,
                    "ratingsCount": 120,
                    "language": "en",
                    "imageLinks": {
                        "smallThumbnail": "http://books.google.com/small",
                        "thumbnail": "http://books.google.com/thumb"
                    },
                    "previewLink": "http://books.google.com/preview",
                    "infoLink": "http://books.google.com/info"
                },
                "saleInfo": { "buyLink": "https://play.google.com/buy" }
            },
            {
                "volumeInfo": { "title": "Dune Messiah", "pageCount": -1 }
            }
        ]
    }"#;

    fn client_for(base_url: &str) -> CatalogClient {
        // Loopback test servers must not be routed through an environment proxy
        CatalogClient {
            http: Client::builder().no_proxy().build().unwrap(),
            volumes_url: volumes_url(base_url).unwrap(),
        }
    }

    /// Serve one canned HTTP response and report the request line it received
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        (format!("http://{}", addr), rx)
    }

    #[test]
    fn page_url_carries_all_query_parameters() {
        let client = client_for("https://www.googleapis.com/books/v1/");
        let filters = QueryFilters {
            page_size: PageSize::Thirty,
            sort_order: SortOrder::Newest,
        };
        let url = client.page_url("C++ & Rust", &filters, 60);

        assert_eq!(url.path(), "/books/v1/volumes");
        assert_eq!(
            url.query(),
            Some("q=C%2B%2B+%26+Rust&maxResults=30&startIndex=60&orderBy=newest")
        );
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = CatalogClient::new(&ClientConfig::default()).unwrap();
        assert_eq!(
            client.volumes_url.as_str(),
            "https://www.googleapis.com/books/v1/volumes"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = CatalogClient::new(&ClientConfig::with_base_url("not a url"));
        assert!(matches!(result, Err(CatalogError::InvalidEndpoint(_))));
    }

    #[test]
    fn volumes_are_normalized() {
        let response: VolumesResponse = serde_json::from_str(SAMPLE).unwrap();
        let page = response.into_page(40);

        assert_eq!(page.total_items, Some(812));
        assert_eq!(page.items.len(), 2);

        let dune = &page.items[0];
        assert_eq!(dune.id, "B1hSG45JCX4C");
        assert_eq!(dune.title, "Dune");
        assert_eq!(dune.authors, vec!["Frank Herbert"]);
        assert_eq!(dune.page_count, Some(896));
        assert_eq!(dune.average_rating, Some(4.5));
        assert_eq!(dune.ratings_count, Some(120));
        assert_eq!(dune.thumbnail_url.as_deref(), Some("http://books.google.com/thumb"));
        assert_eq!(dune.buy_url.as_deref(), Some("https://play.google.com/buy"));

        let messiah = &page.items[1];
        assert_eq!(messiah.id, "result-41");
        assert_eq!(messiah.page_count, None);
        assert!(messiah.authors.is_empty());
        assert_eq!(messiah.author_line(), "Unknown Author");
    }

    #[test]
    fn missing_items_is_an_empty_page() {
        let response: VolumesResponse =
            serde_json::from_str(r#"{"kind": "books#volumes", "totalItems": 0}"#).unwrap();
        let page = response.into_page(0);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, Some(0));
    }

    #[test]
    fn rating_is_clamped_into_range() {
        let response: VolumesResponse =
            serde_json::from_str(r#"{"items": [{"id": "x", "volumeInfo": {"averageRating": 7.0}}]}"#)
                .unwrap();
        assert_eq!(response.into_page(0).items[0].average_rating, Some(5.0));
    }

    #[tokio::test]
    async fn fetch_page_sends_request_and_parses_body() {
        let (base_url, request_line) = serve_once("200 OK", SAMPLE).await;
        let client = client_for(&base_url);

        let page = client
            .fetch_page("dune", &QueryFilters::default(), 0)
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        let request_line = request_line.await.unwrap();
        assert!(request_line.starts_with("GET /volumes?q=dune&maxResults=20&startIndex=0&orderBy=relevance"));
    }

    #[tokio::test]
    async fn empty_result_is_success_not_failure() {
        let (base_url, _) = serve_once("200 OK", r#"{"kind": "books#volumes", "totalItems": 0}"#).await;
        let client = client_for(&base_url);

        let page = client
            .fetch_page("zzzzznoresults", &QueryFilters::default(), 0)
            .await
            .unwrap();
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_failure() {
        let (base_url, _) = serve_once("503 Service Unavailable", "{}").await;
        let client = client_for(&base_url);

        let result = client.fetch_page("dune", &QueryFilters::default(), 0).await;
        assert!(matches!(result, Err(CatalogError::Status { status: 503 })));
    }

    #[tokio::test]
    async fn malformed_body_is_a_failure() {
        let (base_url, _) = serve_once("200 OK", "<html>oops</html>").await;
        let client = client_for(&base_url);

        let result = client.fetch_page("dune", &QueryFilters::default(), 0).await;
        assert!(matches!(result, Err(CatalogError::Transport(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let result = client.fetch_page("dune", &QueryFilters::default(), 0).await;
        assert!(matches!(result, Err(CatalogError::Transport(_))));
    }
}
