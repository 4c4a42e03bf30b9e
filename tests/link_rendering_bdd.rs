//! Behavioural tests for pagination link rendering.

use folio::{PageSource, Paginator, PaginatorSettings, RequestParams};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// State shared across steps in a link rendering scenario.
#[derive(ScenarioState, Default)]
struct RenderWorld {
    settings: Slot<PaginatorSettings>,
    output: Slot<String>,
}

impl RenderWorld {
    fn update_settings(&self, change: impl FnOnce(&mut PaginatorSettings)) {
        let mut settings = self
            .settings
            .take()
            .unwrap_or_else(|| panic!("paginator settings not set"));
        change(&mut settings);
        self.settings.set(settings);
    }

    fn output(&self) -> String {
        self.output
            .get()
            .unwrap_or_else(|| panic!("links not rendered"))
    }
}

fn query_url(page: Option<u64>) -> String {
    page.map_or_else(|| "?".to_owned(), |n| format!("?page={n}"))
}

#[fixture]
fn render_world() -> RenderWorld {
    RenderWorld::default()
}

// --- Given steps ---

#[given("{total:i64} items shown {per_page:i64} per page on page {page:i64}")]
fn paginated_collection(render_world: &RenderWorld, total: i64, per_page: i64, page: i64) {
    render_world.settings.set(PaginatorSettings {
        total_items: total,
        items_per_page: per_page,
        source: PageSource::Fixed(page),
        ..PaginatorSettings::default()
    });
}

#[given("auto-hide is disabled")]
fn auto_hide_disabled(render_world: &RenderWorld) {
    render_world.update_settings(|settings| settings.auto_hide = false);
}

#[given("the first page number is kept in URLs")]
fn first_page_in_url(render_world: &RenderWorld) {
    render_world.update_settings(|settings| settings.first_page_in_url = true);
}

// --- When steps ---

#[when("the links are rendered as HTML")]
fn render_links(render_world: &RenderWorld) {
    let settings = render_world
        .settings
        .get()
        .unwrap_or_else(|| panic!("paginator settings not set"));
    let paginator = Paginator::new(settings, &RequestParams::new());

    let html = paginator
        .render(&query_url)
        .unwrap_or_else(|error| panic!("rendering failed: {error}"));
    render_world.output.set(html);
}

// --- Then steps ---

#[then("the {rel} link points to {target}")]
fn assert_link_target(render_world: &RenderWorld, rel: String, target: String) {
    let expected = format!(r#"<a href="{target}" rel="{rel}">"#);
    let output = render_world.output();

    assert!(output.contains(&expected), "expected {expected} in:\n{output}");
}

#[then("page {page:u64} is marked as current")]
fn assert_current_page(render_world: &RenderWorld, page: u64) {
    let expected = format!("<strong>{page}</strong>");
    let output = render_world.output();

    assert!(output.contains(&expected), "expected {expected} in:\n{output}");
}

#[then("the output is empty")]
fn assert_empty_output(render_world: &RenderWorld) {
    assert_eq!(render_world.output(), "");
}

// Scenario bindings

#[scenario(path = "tests/features/link_rendering.feature", index = 0)]
fn links_around_middle_page(render_world: RenderWorld) {
    let _ = render_world;
}

#[scenario(path = "tests/features/link_rendering.feature", index = 1)]
fn single_page_output_hidden(render_world: RenderWorld) {
    let _ = render_world;
}

#[scenario(path = "tests/features/link_rendering.feature", index = 2)]
fn single_page_output_shown_without_auto_hide(render_world: RenderWorld) {
    let _ = render_world;
}

#[scenario(path = "tests/features/link_rendering.feature", index = 3)]
fn first_page_number_kept_in_urls(render_world: RenderWorld) {
    let _ = render_world;
}
