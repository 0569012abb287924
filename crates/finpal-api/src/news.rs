//! Financial news feed
//!
//! Pulls business headlines from NewsAPI when a key is configured and falls
//! back to a built-in article set when the key is missing or the upstream
//! call fails. Responses are cached in-process so a busy dashboard does not
//! hammer the upstream API.

use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const NEWSAPI_TOP_HEADLINES: &str = "https://newsapi.org/v2/top-headlines";

/// A single news article as served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub source: String,
    pub published_at: String,
    pub url: String,
    pub category: String,
}

/// News feed response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFeed {
    pub success: bool,
    pub articles: Vec<NewsArticle>,
    pub total_results: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    total_results: usize,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiArticle {
    title: String,
    description: Option<String>,
    url: String,
    published_at: String,
    source: NewsApiSource,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: String,
}

struct CachedFeed {
    fetched_at: Instant,
    feed: NewsFeed,
}

/// TTL cache in front of the news upstream
pub struct NewsCache {
    client: reqwest::Client,
    api_key: Option<String>,
    ttl: Duration,
    cached: RwLock<Option<CachedFeed>>,
}

impl NewsCache {
    pub fn new(api_key: Option<String>, ttl_secs: u64) -> Self {
        // Placeholder keys from unedited env files count as absent
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && k != "your_news_api_key_here_optional");
        Self {
            client: reqwest::Client::new(),
            api_key,
            ttl: Duration::from_secs(ttl_secs),
            cached: RwLock::new(None),
        }
    }

    /// The current feed, from cache, upstream, or the static fallback.
    /// Never fails; upstream trouble degrades to the fallback articles.
    pub async fn fetch(&self) -> NewsFeed {
        if let Some(cached) = self.cached.read().await.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                debug!("serving news feed from cache");
                return cached.feed.clone();
            }
        }

        let feed = match &self.api_key {
            Some(key) => match self.fetch_upstream(key).await {
                Ok(feed) => {
                    info!(articles = feed.articles.len(), "fetched news from NewsAPI");
                    feed
                }
                Err(e) => {
                    warn!(error = %e, "NewsAPI request failed, serving fallback articles");
                    fallback_feed()
                }
            },
            None => {
                debug!("no news API key configured, serving fallback articles");
                fallback_feed()
            }
        };

        *self.cached.write().await = Some(CachedFeed {
            fetched_at: Instant::now(),
            feed: feed.clone(),
        });

        feed
    }

    async fn fetch_upstream(&self, api_key: &str) -> Result<NewsFeed, reqwest::Error> {
        let response: NewsApiResponse = self
            .client
            .get(NEWSAPI_TOP_HEADLINES)
            .query(&[
                ("category", "business"),
                ("country", "us"),
                ("apiKey", api_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.status != "ok" {
            warn!(status = %response.status, "NewsAPI returned non-ok status");
            return Ok(fallback_feed());
        }

        let articles: Vec<NewsArticle> = response
            .articles
            .into_iter()
            .enumerate()
            .map(|(id, a)| NewsArticle {
                id,
                title: a.title,
                description: a
                    .description
                    .unwrap_or_else(|| "No description available".to_string()),
                source: a.source.name,
                published_at: a.published_at,
                url: a.url,
                category: "Business".to_string(),
            })
            .collect();

        Ok(NewsFeed {
            success: true,
            total_results: response.total_results.max(articles.len()),
            articles,
        })
    }
}

/// Built-in articles served when the upstream is unavailable
pub fn fallback_feed() -> NewsFeed {
    let hours_ago = |h: i64| (Utc::now() - chrono::Duration::hours(h)).to_rfc3339();

    let articles = vec![
        NewsArticle {
            id: 1,
            title: "Stock Market Reaches New Heights Amid Economic Recovery".to_string(),
            description: "Major indices show strong performance as investors remain optimistic about economic growth prospects.".to_string(),
            source: "Financial Times".to_string(),
            published_at: hours_ago(2),
            url: "https://example.com/news/1".to_string(),
            category: "Markets".to_string(),
        },
        NewsArticle {
            id: 2,
            title: "Central Bank Maintains Interest Rates".to_string(),
            description: "The central bank decided to keep interest rates unchanged, citing stable inflation and economic conditions.".to_string(),
            source: "Economic Daily".to_string(),
            published_at: hours_ago(5),
            url: "https://example.com/news/2".to_string(),
            category: "Economy".to_string(),
        },
        NewsArticle {
            id: 3,
            title: "Tech Stocks Lead Market Rally".to_string(),
            description: "Technology sector shows robust growth with major companies reporting strong quarterly earnings.".to_string(),
            source: "Tech Finance".to_string(),
            published_at: hours_ago(8),
            url: "https://example.com/news/3".to_string(),
            category: "Technology".to_string(),
        },
        NewsArticle {
            id: 4,
            title: "Gold Prices Stabilize After Recent Volatility".to_string(),
            description: "Precious metals market shows signs of stabilization as investors reassess their portfolios.".to_string(),
            source: "Commodity News".to_string(),
            published_at: hours_ago(12),
            url: "https://example.com/news/4".to_string(),
            category: "Commodities".to_string(),
        },
        NewsArticle {
            id: 5,
            title: "Personal Finance Tips for the New Year".to_string(),
            description: "Financial experts share strategies for better money management and achieving savings goals.".to_string(),
            source: "Money Matters".to_string(),
            published_at: hours_ago(24),
            url: "https://example.com/news/5".to_string(),
            category: "Personal Finance".to_string(),
        },
    ];

    NewsFeed {
        success: true,
        total_results: articles.len(),
        articles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_five_articles() {
        let feed = fallback_feed();
        assert!(feed.success);
        assert_eq!(feed.articles.len(), 5);
        assert_eq!(feed.total_results, 5);
        assert_eq!(feed.articles[0].source, "Financial Times");
    }

    #[tokio::test]
    async fn missing_key_serves_fallback() {
        let cache = NewsCache::new(None, 300);
        let feed = cache.fetch().await;
        assert_eq!(feed.articles.len(), 5);
    }

    #[tokio::test]
    async fn placeholder_key_counts_as_missing() {
        let cache = NewsCache::new(Some("your_news_api_key_here_optional".to_string()), 300);
        assert!(cache.api_key.is_none());
        let feed = cache.fetch().await;
        assert_eq!(feed.articles.len(), 5);
    }

    #[tokio::test]
    async fn second_fetch_hits_the_cache() {
        let cache = NewsCache::new(None, 300);
        let first = cache.fetch().await;
        let second = cache.fetch().await;
        // Fallback timestamps are generated per build; a cache hit returns
        // the identical feed.
        assert_eq!(first.articles[0].published_at, second.articles[0].published_at);
    }
}
