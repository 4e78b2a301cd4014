use newswall::{Article, SiteBuckets};

fn article(title: &str, source: &str) -> Article {
    Article {
        title: title.to_string(),
        content: "正文".to_string(),
        source: source.to_string(),
        ctime: 1_700_000_000,
        url: format!("http://example.com/{}", title),
        short_url: None,
    }
}

#[test]
fn test_groups_by_source_preserving_arrival_order() {
    let buckets = SiteBuckets::classify(vec![
        article("a0", "jw"),
        article("a1", "dm"),
        article("a2", "jw"),
    ]);

    assert_eq!(buckets.site_list(), ["jw", "dm"]);

    let jw: Vec<_> = buckets.articles("jw").unwrap().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(jw, ["a0", "a2"]);

    let dm: Vec<_> = buckets.articles("dm").unwrap().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(dm, ["a1"]);
}

#[test]
fn test_classification_is_idempotent() {
    let articles = vec![
        article("a0", "gs"),
        article("a1", "jw"),
        article("a2", "gs"),
        article("a3", "hq"),
    ];

    let first = SiteBuckets::classify(articles.clone());
    let second = SiteBuckets::classify(articles);

    assert_eq!(first.site_list(), second.site_list());
    for key in first.site_list() {
        assert_eq!(first.articles(key), second.articles(key));
    }
}

#[test]
fn test_exclude_source_removes_bucket_and_order_entry() {
    let mut buckets = SiteBuckets::classify(vec![
        article("a0", "jw"),
        article("a1", "xinwen"),
        article("a2", "dm"),
    ]);

    buckets.exclude_source("xinwen");

    assert_eq!(buckets.site_list(), ["jw", "dm"]);
    assert!(buckets.articles("xinwen").is_none());
    assert_eq!(buckets.total_articles(), 2);
}

#[test]
fn test_exclude_absent_source_is_noop() {
    let mut buckets = SiteBuckets::classify(vec![article("a0", "jw")]);
    buckets.exclude_source("xinwen");
    assert_eq!(buckets.site_list(), ["jw"]);
    assert_eq!(buckets.total_articles(), 1);
}

#[test]
fn test_exclusion_can_empty_the_site_list() {
    let mut buckets = SiteBuckets::classify(vec![
        article("a0", "xinwen"),
        article("a1", "xinwen"),
    ]);
    buckets.exclude_source("xinwen");
    assert!(buckets.is_empty());
    assert!(buckets.site_list().is_empty());
}

#[test]
fn test_site_sizes_follow_site_list_order() {
    let buckets = SiteBuckets::classify(vec![
        article("a0", "jw"),
        article("a1", "dm"),
        article("a2", "jw"),
        article("a3", "jw"),
    ]);
    assert_eq!(buckets.site_sizes(), [3, 1]);
    assert_eq!(buckets.site_articles(0).unwrap().len(), 3);
    assert_eq!(buckets.site_articles(1).unwrap().len(), 1);
    assert!(buckets.site_articles(2).is_none());
}
