//! Unit tests for navigation link generation.

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::{LinkKind, LinkLabels, LinkOptions, MockPageUrl, PageLink, build_links, url_page};
use crate::pagination::{PaginationInput, PaginationState};

fn state(total_items: i64, items_per_page: i64, requested_page: i64) -> PaginationState {
    PaginationState::compute(PaginationInput::new(
        total_items,
        items_per_page,
        requested_page,
    ))
}

fn query_url(page: Option<u64>) -> String {
    page.map_or_else(|| "/items".to_owned(), |n| format!("/items?page={n}"))
}

#[fixture]
fn options() -> LinkOptions {
    LinkOptions::default()
}

fn urls(links: &[PageLink]) -> Vec<Option<&str>> {
    links.iter().map(|link| link.url.as_deref()).collect()
}

#[rstest]
fn middle_page_links_every_neighbour(options: LinkOptions) {
    let links = build_links(&state(30, 10, 2), &query_url, &options);

    let kinds: Vec<LinkKind> = links.iter().map(|link| link.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LinkKind::First,
            LinkKind::Previous,
            LinkKind::Page(1),
            LinkKind::Page(2),
            LinkKind::Page(3),
            LinkKind::Next,
            LinkKind::Last,
        ]
    );
    assert_eq!(
        urls(&links),
        vec![
            Some("/items"),
            Some("/items"),
            Some("/items"),
            None,
            Some("/items?page=3"),
            Some("/items?page=3"),
            Some("/items?page=3"),
        ]
    );
}

#[rstest]
fn first_page_has_inactive_back_links(options: LinkOptions) {
    let links = build_links(&state(30, 10, 1), &query_url, &options);

    let first = links.first().expect("first link present");
    let previous = links.get(1).expect("previous link present");
    assert_eq!(first.url, None);
    assert_eq!(previous.url, None);
    assert_eq!(first.label, "First");
    assert_eq!(first.rel, Some("first"));
}

#[rstest]
fn last_page_has_inactive_forward_links(options: LinkOptions) {
    let links = build_links(&state(30, 10, 3), &query_url, &options);

    let next = links.get(links.len() - 2).expect("next link present");
    let last = links.last().expect("last link present");
    assert_eq!(next.url, None);
    assert_eq!(last.url, None);
    assert_eq!(next.rel, Some("next"));
    assert_eq!(last.rel, Some("last"));
}

#[rstest]
fn current_page_is_marked_and_unlinked(options: LinkOptions) {
    let links = build_links(&state(50, 10, 4), &query_url, &options);

    let current: Vec<&PageLink> = links.iter().filter(|link| link.current).collect();
    assert_eq!(current.len(), 1);
    let only = current.first().expect("one current link");
    assert_eq!(only.kind, LinkKind::Page(4));
    assert_eq!(only.label, "4");
    assert_eq!(only.url, None);
    assert_eq!(only.rel, None);
}

#[rstest]
fn empty_state_renders_only_inactive_navigation(options: LinkOptions) {
    let links = build_links(&state(0, 10, 1), &query_url, &options);

    assert_eq!(links.len(), 4);
    assert!(links.iter().all(|link| link.url.is_none()));
}

#[rstest]
fn first_page_in_url_keeps_page_number() {
    let options = LinkOptions {
        first_page_in_url: true,
        ..LinkOptions::default()
    };

    let links = build_links(&state(30, 10, 2), &query_url, &options);

    let first = links.first().expect("first link present");
    assert_eq!(first.url.as_deref(), Some("/items?page=1"));
}

#[rstest]
fn custom_labels_are_used() {
    let options = LinkOptions {
        labels: LinkLabels {
            first: "«".to_owned(),
            previous: "‹".to_owned(),
            next: "›".to_owned(),
            last: "»".to_owned(),
        },
        first_page_in_url: false,
    };

    let links = build_links(&state(30, 10, 2), &query_url, &options);

    let labels: Vec<&str> = links.iter().map(|link| link.label.as_str()).collect();
    assert_eq!(labels, vec!["«", "‹", "1", "2", "3", "›", "»"]);
}

#[rstest]
fn asks_url_builder_only_for_linked_pages(options: LinkOptions) {
    let mut builder = MockPageUrl::new();
    // First, previous, and page 1 all target the un-numbered first page.
    builder
        .expect_page_url()
        .with(eq(None))
        .times(3)
        .returning(|_| "/".to_owned());
    // Page 3, next, and last all target page 3.
    builder
        .expect_page_url()
        .with(eq(Some(3)))
        .times(3)
        .returning(|_| "/?page=3".to_owned());
    builder.expect_page_url().with(eq(Some(2))).never();

    let links = build_links(&state(30, 10, 2), &builder, &options);

    assert_eq!(links.len(), 7);
}

#[rstest]
#[case::zero_without_flag(0, false, None)]
#[case::one_without_flag(1, false, None)]
#[case::zero_with_flag(0, true, Some(1))]
#[case::one_with_flag(1, true, Some(1))]
#[case::later_page(4, false, Some(4))]
fn url_page_cleans_page_numbers(
    #[case] page: u64,
    #[case] first_page_in_url: bool,
    #[case] expected: Option<u64>,
) {
    assert_eq!(url_page(page, first_page_in_url), expected);
}
