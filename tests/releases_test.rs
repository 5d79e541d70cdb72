mod common;

use common::{API_URL, FakePages, album, chained_pages};
use discofetch::{
    Error,
    spotify::releases::{
        artist_albums_url, collect_albums, collect_albums_with, dedupe_by_name,
    },
    types::{Credential, Page},
};

fn first_url() -> String {
    artist_albums_url(API_URL, "abc")
}

#[test]
fn test_artist_albums_url() {
    assert_eq!(
        artist_albums_url("https://api.spotify.com/v1", "4LLpKhyESsyAXpc4laK94U"),
        "https://api.spotify.com/v1/artists/4LLpKhyESsyAXpc4laK94U/albums?include_groups=album,single&limit=50"
    );
}

#[tokio::test]
async fn test_collect_albums_follows_next_in_order() {
    let pages = chained_pages(
        &first_url(),
        vec![
            vec![album("1", "Blue Slide Park"), album("2", "Watching Movies")],
            vec![album("3", "GO:OD AM")],
            vec![album("4", "Swimming"), album("5", "Circles")],
        ],
    );
    let source = FakePages::new(pages);

    let albums = collect_albums(&source, "abc", &Credential::new("tok"), 1000)
        .await
        .unwrap();

    assert_eq!(
        source.requested(),
        vec![
            first_url(),
            format!("{}/pages/1", API_URL),
            format!("{}/pages/2", API_URL),
        ]
    );
    let ids: Vec<&str> = albums.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn test_collect_albums_sends_credential_on_every_page() {
    let pages = chained_pages(
        &first_url(),
        vec![vec![album("1", "A")], vec![album("2", "B")]],
    );
    let source = FakePages::new(pages);

    collect_albums(&source, "abc", &Credential::new("tok123"), 1000)
        .await
        .unwrap();

    assert_eq!(*source.tokens.lock().unwrap(), vec!["tok123", "tok123"]);
}

#[tokio::test]
async fn test_collect_albums_dedupes_across_pages() {
    let pages = chained_pages(
        &first_url(),
        vec![
            vec![album("1", "A"), album("2", "B")],
            vec![album("3", "A")],
        ],
    );
    let source = FakePages::new(pages);

    let albums = collect_albums(&source, "abc", &Credential::new("tok"), 1000)
        .await
        .unwrap();

    assert_eq!(albums.len(), 2);
    let a = albums.iter().find(|a| a.name == "A").unwrap();
    assert_eq!(a.id, "3");
}

#[tokio::test]
async fn test_collect_albums_empty_discography() {
    let pages = chained_pages(&first_url(), vec![Vec::new()]);
    let source = FakePages::new(pages);

    let albums = collect_albums(&source, "abc", &Credential::new("tok"), 1000)
        .await
        .unwrap();

    assert!(albums.is_empty());
    assert_eq!(source.requested().len(), 1);
}

#[tokio::test]
async fn test_collect_albums_is_idempotent() {
    let data = vec![
        vec![album("1", "A"), album("2", "B")],
        vec![album("3", "A"), album("4", "C")],
    ];

    let first = FakePages::new(chained_pages(&first_url(), data.clone()));
    let second = FakePages::new(chained_pages(&first_url(), data));
    let cred = Credential::new("tok");

    let a = collect_albums(&first, "abc", &cred, 1000).await.unwrap();
    let b = collect_albums(&second, "abc", &cred, 1000).await.unwrap();

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[tokio::test]
async fn test_collect_albums_stops_at_page_cap() {
    // every page points back at the first one
    let mut pages = std::collections::HashMap::new();
    pages.insert(
        first_url(),
        Page {
            items: vec![album("1", "A")],
            next: Some(first_url()),
            total: None,
        },
    );
    let source = FakePages::new(pages);

    let result = collect_albums(&source, "abc", &Credential::new("tok"), 3).await;

    assert!(matches!(result, Err(Error::PaginationOverrun { limit: 3 })));
    assert_eq!(source.requested().len(), 3);
}

#[tokio::test]
async fn test_collect_albums_finishes_on_exactly_cap_pages() {
    let pages = chained_pages(
        &first_url(),
        vec![vec![album("1", "A")], vec![album("2", "B")]],
    );
    let source = FakePages::new(pages);

    let albums = collect_albums(&source, "abc", &Credential::new("tok"), 2)
        .await
        .unwrap();

    assert_eq!(albums.len(), 2);
}

#[tokio::test]
async fn test_collect_albums_page_failure_aborts() {
    let mut pages = chained_pages(
        &first_url(),
        vec![
            vec![album("1", "A")],
            vec![album("2", "B")],
            vec![album("3", "C")],
        ],
    );
    pages.remove(&format!("{}/pages/1", API_URL));
    let source = FakePages::new(pages);

    let result = collect_albums(&source, "abc", &Credential::new("tok"), 1000).await;

    assert!(matches!(result, Err(Error::Fetch(_))));
    assert_eq!(source.requested().len(), 2);
}

#[tokio::test]
async fn test_collect_albums_reports_progress() {
    let pages = chained_pages(
        &first_url(),
        vec![
            vec![album("1", "A"), album("2", "B")],
            vec![album("3", "C")],
        ],
    );
    let source = FakePages::new(pages);
    let mut progress = Vec::new();

    collect_albums_with(&source, "abc", &Credential::new("tok"), 1000, |p, i| {
        progress.push((p, i))
    })
    .await
    .unwrap();

    assert_eq!(progress, vec![(1, 2), (2, 3)]);
}

#[test]
fn test_dedupe_last_write_wins() {
    let albums = vec![album("1", "A"), album("2", "B"), album("3", "A")];

    let unique = dedupe_by_name(albums);

    assert_eq!(unique.len(), 2);
    let a = unique.iter().find(|a| a.name == "A").unwrap();
    assert_eq!(a.id, "3");
    let b = unique.iter().find(|a| a.name == "B").unwrap();
    assert_eq!(b.id, "2");
}

#[test]
fn test_dedupe_keeps_first_position() {
    let albums = vec![
        album("1", "A"),
        album("2", "B"),
        album("3", "A"),
        album("4", "C"),
        album("5", "B"),
    ];

    let unique = dedupe_by_name(albums);

    let ids: Vec<&str> = unique.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "5", "4"]);
}

#[test]
fn test_dedupe_is_case_sensitive() {
    let unique = dedupe_by_name(vec![album("1", "Circles"), album("2", "circles")]);
    assert_eq!(unique.len(), 2);
}

#[test]
fn test_dedupe_empty() {
    assert!(dedupe_by_name(Vec::new()).is_empty());
}
