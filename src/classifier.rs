use crate::types::Article;
use std::collections::HashMap;
use tracing::{debug, info};

/// Articles partitioned by source site.
///
/// The site list records keys in first-appearance order of the feed, which is
/// the order the rotation walks sites in. Buckets are rebuilt wholesale on
/// every successful fetch; there is no merging across fetches.
#[derive(Debug, Clone, Default)]
pub struct SiteBuckets {
    order: Vec<String>,
    map: HashMap<String, Vec<Article>>,
}

impl SiteBuckets {
    /// Group a fetched article list by source, preserving arrival order
    /// within each bucket.
    pub fn classify(articles: Vec<Article>) -> Self {
        let mut buckets = Self::default();

        for article in articles {
            if !buckets.map.contains_key(&article.source) {
                buckets.order.push(article.source.clone());
            }
            buckets
                .map
                .entry(article.source.clone())
                .or_default()
                .push(article);
        }

        info!(
            "Classified feed into {} sites ({} articles)",
            buckets.order.len(),
            buckets.total_articles()
        );
        buckets
    }

    /// Drop a source bucket by key; no-op when absent.
    pub fn exclude_source(&mut self, key: &str) {
        if self.map.remove(key).is_some() {
            self.order.retain(|s| s != key);
            debug!("Excluded source '{}' from rotation", key);
        }
    }

    /// Source keys in first-insertion order. Drives the outer rotation loop.
    pub fn site_list(&self) -> &[String] {
        &self.order
    }

    pub fn articles(&self, source: &str) -> Option<&[Article]> {
        self.map.get(source).map(Vec::as_slice)
    }

    /// Articles of the site at the given rotation index.
    pub fn site_articles(&self, site_idx: usize) -> Option<&[Article]> {
        self.order.get(site_idx).and_then(|s| self.articles(s))
    }

    /// Bucket sizes in site-list order, the shape the rotation cursor runs on.
    pub fn site_sizes(&self) -> Vec<usize> {
        self.order
            .iter()
            .map(|s| self.map.get(s).map_or(0, Vec::len))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total_articles(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}
