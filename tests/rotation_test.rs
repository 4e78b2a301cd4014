use newswall::{RotationCursor, RotationPolicy, Step};

fn display(step: Step) -> (usize, usize, bool, bool) {
    match step {
        Step::Display {
            site,
            article,
            site_changed,
            scrolled,
        } => (site, article, site_changed, scrolled),
        Step::Refresh => panic!("expected Display, got Refresh"),
    }
}

#[test]
fn test_idle_cursor_requests_refresh() {
    let mut cursor = RotationCursor::new();
    assert_eq!(cursor.advance(RotationPolicy::RefetchOnWrap), Step::Refresh);
}

#[test]
fn test_first_advance_lands_on_first_article_without_scroll() {
    let mut cursor = RotationCursor::new();
    cursor.start(vec![2, 1]);

    let (site, article, site_changed, scrolled) =
        display(cursor.advance(RotationPolicy::RefetchOnWrap));
    assert_eq!((site, article), (0, 0));
    assert!(!site_changed);
    assert!(!scrolled);
}

#[test]
fn test_in_site_advance_scrolls() {
    let mut cursor = RotationCursor::new();
    cursor.start(vec![3]);
    cursor.advance(RotationPolicy::RefetchOnWrap);

    let (site, article, site_changed, scrolled) =
        display(cursor.advance(RotationPolicy::RefetchOnWrap));
    assert_eq!((site, article), (0, 1));
    assert!(!site_changed);
    assert!(scrolled);
}

#[test]
fn test_site_change_resets_article_index() {
    let mut cursor = RotationCursor::new();
    cursor.start(vec![1, 2]);
    cursor.advance(RotationPolicy::RefetchOnWrap);

    let (site, article, site_changed, scrolled) =
        display(cursor.advance(RotationPolicy::RefetchOnWrap));
    assert_eq!((site, article), (1, 0));
    assert!(site_changed);
    assert!(!scrolled);
}

#[test]
fn test_full_cycle_visits_every_article_once() {
    let sizes = vec![2, 1, 3];
    let total: usize = sizes.iter().sum();

    let mut cursor = RotationCursor::new();
    cursor.start(sizes);

    let mut visited = Vec::new();
    for _ in 0..total {
        let (site, article, _, _) = display(cursor.advance(RotationPolicy::RefetchOnWrap));
        visited.push((site, article));
    }

    assert_eq!(
        visited,
        [(0, 0), (0, 1), (1, 0), (2, 0), (2, 1), (2, 2)]
    );
}

#[test]
fn test_wrap_around_policy_returns_to_origin() {
    let mut cursor = RotationCursor::new();
    cursor.start(vec![2, 1]);
    for _ in 0..3 {
        cursor.advance(RotationPolicy::WrapAround);
    }

    // One step past the full cycle closes the loop back to (0, 0).
    let (site, article, site_changed, _) = display(cursor.advance(RotationPolicy::WrapAround));
    assert_eq!((site, article), (0, 0));
    assert!(site_changed);
    assert_eq!(cursor.position(), Some((0, 0)));
}

#[test]
fn test_refetch_policy_requests_exactly_one_refresh_per_cycle() {
    let mut cursor = RotationCursor::new();
    cursor.start(vec![2, 1]);

    let mut refreshes = 0;
    for _ in 0..4 {
        if cursor.advance(RotationPolicy::RefetchOnWrap) == Step::Refresh {
            refreshes += 1;
        }
    }
    assert_eq!(refreshes, 1);

    // After the refresh request the cursor stays idle until restarted.
    assert_eq!(cursor.advance(RotationPolicy::RefetchOnWrap), Step::Refresh);

    cursor.start(vec![2, 1]);
    let (site, article, _, _) = display(cursor.advance(RotationPolicy::RefetchOnWrap));
    assert_eq!((site, article), (0, 0));
}

#[test]
fn test_empty_shape_fails_soft() {
    let mut cursor = RotationCursor::new();
    cursor.start(Vec::new());
    assert_eq!(cursor.advance(RotationPolicy::WrapAround), Step::Refresh);

    cursor.start(vec![0, 0]);
    assert_eq!(cursor.advance(RotationPolicy::WrapAround), Step::Refresh);
}

#[test]
fn test_zero_size_sites_are_skipped() {
    let mut cursor = RotationCursor::new();
    cursor.start(vec![0, 2, 0, 1]);

    let mut visited = Vec::new();
    for _ in 0..3 {
        let (site, article, _, _) = display(cursor.advance(RotationPolicy::WrapAround));
        visited.push((site, article));
    }
    assert_eq!(visited, [(1, 0), (1, 1), (3, 0)]);

    // Wrapping skips the empty leading site too.
    let (site, article, _, _) = display(cursor.advance(RotationPolicy::WrapAround));
    assert_eq!((site, article), (1, 0));
}
