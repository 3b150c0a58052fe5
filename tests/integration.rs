//! Integration tests for tailframe.
//!
//! These tests exercise the public API from outside the crate: components are
//! rendered through a full pass and checked via DOM queries and markup.

use pretty_assertions::assert_eq;
use tailframe::components::footer::{BETA_ID, COPYRIGHT_ID};
use tailframe::prelude::*;
use tailframe::style::{Breakpoint, ColumnSpec};
use tailframe::testing::{context_at_year, render_to_html, render_to_pretty_html};

fn cards(n: usize) -> Children {
    (0..n)
        .map(|i| Box::new(Text::plain(format!("card {i}"))) as Node)
        .collect()
}

fn grid_classes(grid: &Grid) -> String {
    let dom = render(grid, &context_at_year(2025));
    dom.get(dom.root().unwrap()).unwrap().class_string()
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

#[test]
fn test_grid_small_counts_get_that_many_columns() {
    for (n, expected) in [(0, 1), (1, 1), (2, 2)] {
        let grid = Grid::new().with_children(cards(n));
        let table = grid.column_spec().columns().unwrap();
        assert_eq!(table.entries(), &[(Breakpoint::Base, expected)], "n = {n}");
        assert!(grid_classes(&grid).contains(&format!("grid-cols-{expected}")));
    }
}

// Characterization test: records the fallback as it renders today, including
// the dip to one column at `sm`.
#[test]
fn test_grid_fallback_is_two_one_two_three() {
    for n in [3, 4, 10, 50] {
        let grid = Grid::new().with_children(cards(n));
        let table = grid.column_spec().columns().unwrap();
        assert_eq!(table.counts(), vec![2, 1, 2, 3], "n = {n}");
        assert_eq!(
            Breakpoint::ALL.map(|bp| table.at(bp)),
            [Some(2), Some(1), Some(2), Some(3), Some(3), Some(3)]
        );
    }
}

#[test]
fn test_grid_explicit_spec_is_verbatim() {
    for n in [0, 1, 2, 3, 8] {
        let grid = Grid::new()
            .with_columns("grid-cols-3 md:grid-cols-6")
            .with_children(cards(n));
        assert_eq!(grid.column_spec(), ColumnSpec::custom("grid-cols-3 md:grid-cols-6"));
        assert_eq!(grid_classes(&grid), "grid grid-cols-3 md:grid-cols-6 gap-4 mt-4 mb-4");
    }
}

#[test]
fn test_grid_markup() {
    let grid = Grid::new()
        .with_child(Text::plain("a"))
        .with_child(Text::plain("b"))
        .with_child(Text::plain("c"));
    let html = render_to_html(&grid, &context_at_year(2025));
    insta::assert_snapshot!(html, @r#"<div class="grid grid-cols-2 sm:grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 mt-4 mb-4">abc</div>"#);
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

#[test]
fn test_page_header_disabled_never_renders_header() {
    let page = Page::new().with_header(Header::new().with_title("Ignored"));
    let dom = render(&page, &context_at_year(2025));
    assert!(dom.query_by_component("Header").is_empty());
    assert!(dom.query_by_tag("header").is_empty());
}

#[test]
fn test_page_header_enabled_uses_supplied_title() {
    let page = Page::new()
        .enable_header(true)
        .with_header(Header::new().with_title("Site"));
    let dom = render(&page, &context_at_year(2025));
    let header = dom.first_by_component("Header").unwrap();
    assert_eq!(dom.text_content(header), "Site");
}

#[test]
fn test_page_header_enabled_default_title_is_empty() {
    let dom = render(&Page::new().enable_header(true), &context_at_year(2025));
    let header = dom.first_by_component("Header").unwrap();
    assert_eq!(dom.text_content(header), "");
    assert_eq!(dom.query_by_tag("h2").len(), 1);
}

#[test]
fn test_page_footer_disabled_never_renders_footer() {
    let dom = render(&Page::new().disable_footer(true), &context_at_year(2025));
    assert!(dom.query_by_component("Footer").is_empty());
    assert!(dom.query_by_tag("footer").is_empty());
}

#[test]
fn test_page_order_header_content_footer() {
    let page = Page::new()
        .enable_header(true)
        .with_child(Element::new().with_title("Body"));
    let dom = render(&page, &context_at_year(2025));
    let root = dom.root().unwrap();
    let tags: Vec<&str> = dom
        .children(root)
        .iter()
        .map(|&id| dom.get(id).unwrap().tag().unwrap())
        .collect();
    assert_eq!(tags, vec!["header", "div", "footer"]);
    assert!(dom.get(root).unwrap().has_class("min-h-screen"));
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[test]
fn test_footer_button_disabled() {
    let dom = render(&Footer::new().disable_button(true), &context_at_year(2025));
    assert!(dom.query_by_component("Button").is_empty());
}

#[test]
fn test_footer_button_default_and_supplied() {
    let dom = render(&Footer::new(), &context_at_year(2025));
    let button = dom.first_by_component("Button").unwrap();
    assert_eq!(dom.get(button).unwrap().attr("href"), Some("/"));
    assert_eq!(dom.text_content(button), "Go back Home");

    let footer = Footer::new().with_button(FooterButton::new("/shop", "Shop"));
    let dom = render(&footer, &context_at_year(2025));
    let button = dom.first_by_component("Button").unwrap();
    assert_eq!(dom.get(button).unwrap().attr("href"), Some("/shop"));
    assert_eq!(dom.text_content(button), "Shop");
}

#[test]
fn test_footer_copyright_year_rollover() {
    let footer = Footer::new().with_author(Author::new("Grace"));
    let copyright = |year| {
        let dom = render(&footer, &context_at_year(year));
        dom.text_content(dom.query_by_id(COPYRIGHT_ID).unwrap())
    };
    let old = copyright(2025);
    let new = copyright(2026);
    assert!(old.contains("Grace") && old.contains("2025"));
    assert_eq!(old.replace("2025", "2026"), new);
}

#[test]
fn test_footer_system_clock_year() {
    let year = SystemClock.current_year();
    let dom = render(&Footer::new(), &RenderContext::new());
    let copyright = dom.text_content(dom.query_by_id(COPYRIGHT_ID).unwrap());
    assert!(copyright.contains(&year.to_string()));
}

#[test]
fn test_footer_markup_without_button_or_beta() {
    let footer = Footer::new().disable_button(true).beta(false);
    let html = render_to_html(&footer, &context_at_year(2025));
    assert_eq!(
        html,
        concat!(
            "<footer class=\"flex flex-col items-center w-auto bg-gray-900 text-white\">",
            "<div class=\"flex flex-col md:flex-row justify-center items-center h-auto md:h-16 p-4 md:p-2 pb-16 md:pb-2\">",
            "<p class=\"mb-2 md:mb-0\">Made with \u{2764}\u{fe0f} by ",
            "<a class=\"text-blue-500 hover:underline\" href=\"\">Author</a></p>",
            "<p class=\"hidden md:block mx-2\">|</p>",
            "<p>\u{a9} Author 2025. All rights reserved.</p>",
            "</div></footer>",
        )
    );
}

#[test]
fn test_footer_beta_banner_default_on() {
    let dom = render(&Footer::new(), &context_at_year(2025));
    let beta = dom.query_by_id(BETA_ID).unwrap();
    assert_eq!(dom.text_content(beta), "This website is in beta.");
}

// ---------------------------------------------------------------------------
// Element and Header
// ---------------------------------------------------------------------------

#[test]
fn test_element_defaults_and_overrides() {
    let dom = render(&Element::new(), &context_at_year(2025));
    let root = dom.get(dom.root().unwrap()).unwrap();
    assert!(root.has_class("bg-gray-800"));
    assert!(root.has_class("max-w-screen-md"));
    let title = dom.query_by_tag("h1")[0];
    assert_eq!(dom.text_content(title), "");
    assert!(dom.get(title).unwrap().has_class("text-white"));

    let card = Element::new()
        .with_title("Stats")
        .with_background("bg-emerald-900")
        .with_text_colour("text-emerald-100")
        .with_width("max-w-4xl");
    let dom = render(&card, &context_at_year(2025));
    let root = dom.get(dom.root().unwrap()).unwrap();
    assert!(root.has_class("bg-emerald-900"));
    assert!(root.has_class("max-w-4xl"));
    let title = dom.query_by_tag("h1")[0];
    assert_eq!(dom.text_content(title), "Stats");
    assert!(dom.get(title).unwrap().has_class("text-emerald-100"));
}

#[test]
fn test_element_pretty_markup() {
    let card = Element::new()
        .with_title("Welcome")
        .with_child(Text::plain("Hi"));
    let html = render_to_pretty_html(&card, &context_at_year(2025));
    insta::assert_snapshot!(html, @r#"
<div class="px-8 py-8 mx-auto my-auto bg-gray-800 rounded-2xl w-full max-w-screen-md">
  <div class="flex flex-col items-center px-4 py-4 sm:px-8">
    <h1 class="text-3xl font-bold text-white">
      Welcome
    </h1>
    <br>
    Hi
    <br>
  </div>
</div>
"#);
}

#[test]
fn test_header_pretty_markup() {
    let html = render_to_pretty_html(&Header::new().with_title("Docs"), &context_at_year(2025));
    insta::assert_snapshot!(html, @r#"
<header class="flex flex-col items-center w-auto bg-gray-900 text-white">
  <h2 class="text-2xl font-semibold py-4">
    Docs
  </h2>
</header>
"#);
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[test]
fn test_theme_from_toml_applies_to_page_and_element() {
    let theme = Theme::from_toml_str(
        "page_background = \"bg-stone-950\"\nelement_width = \"max-w-2xl\"\n",
    )
    .unwrap();
    let cx = RenderContext::new().with_theme(theme).with_clock(FixedClock(2025));
    let page = Page::new()
        .disable_footer(true)
        .with_child(Element::new());
    let dom = render(&page, &cx);
    let root = dom.get(dom.root().unwrap()).unwrap();
    assert!(root.has_class("bg-stone-950"));
    let card = dom.first_by_component("Element").unwrap();
    let card = dom.get(card).unwrap();
    assert!(card.has_class("max-w-2xl"));
    assert!(card.has_class("bg-gray-800"));
}

#[test]
fn test_unvalidated_tokens_flow_through() {
    let page = Page::new()
        .with_background("definitely-not-a-class")
        .disable_footer(true);
    let html = render_to_html(&page, &context_at_year(2025));
    assert!(html.starts_with("<div class=\"flex flex-col min-h-screen definitely-not-a-class\">"));
}
