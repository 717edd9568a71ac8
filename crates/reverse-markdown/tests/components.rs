//! End-to-end conversions of small HTML documents.

#![cfg(feature = "html")]

use pretty_assertions::assert_eq;
use reverse_markdown::{parse_string, Mapper, MapperOptions, ReverseMarkdownError, TagBoundary};

const ANCHORS: &str = r##"
<p>
  Some text with a link to <a href="http://foobar.com">Foobar</a> in it.
  A <a href="http://strong.foobar.com"><strong>Strong foobar</strong></a> link.
  An <a href="#anchor">internal anchor</a> and an empty <a href="http://empty.com"> </a>.
</p>
<p>
  <img src="http://foobar.com/logo.png">
  <img src="http://foobar.com/foobar.png" alt="foobar image">
</p>
"##;

const BASIC: &str = "<h1>h1</h1><h2>h2</h2><h3>h3</h3><h4>h4</h4>\
<p><em>em</em> <strong>strong</strong> <code>code</code></p><hr>";

const LISTS: &str = "<ul><li>unordered list entry</li></ul>\
<ol><li>ordered list entry</li><li>second ordered entry</li></ol>\
<ol><li>list entry 1st hierarchy<ul><li>nested unsorted list entry\
<ol><li>deep nested list entry</li></ol></li></ul></li></ol>";

#[test]
fn anchors() {
    let output = parse_string(ANCHORS).unwrap();
    assert!(output.contains(" [Foobar](http://foobar.com) "));
    assert!(output.contains(" [**Strong foobar**](http://strong.foobar.com) "));
    assert!(output.contains(" internal anchor "));
    assert!(!output.contains("](#anchor)"));
    assert!(!output.contains("http://empty.com"));
    assert!(output.contains(" ![](http://foobar.com/logo.png) "));
    assert!(output.contains(" ![foobar image](http://foobar.com/foobar.png) "));
}

#[test]
fn basic() {
    let output = parse_string(BASIC).unwrap();
    assert!(output.contains("# h1\n"));
    assert!(output.contains("## h2\n"));
    assert!(output.contains("### h3\n"));
    assert!(output.contains("#### h4\n"));
    assert!(output.contains("*em*"));
    assert!(output.contains("**strong**"));
    assert!(output.contains(" `code` "));
    assert!(output.contains("----------\n\n"));
}

#[test]
fn lists() {
    let output = parse_string(LISTS).unwrap();
    assert!(output.contains("- unordered list entry\n"));
    assert!(output.contains("1. ordered list entry\n"));
    assert!(output.contains("2. second ordered entry\n"));
    assert!(output.contains("1. list entry 1st hierarchy\n"));
    assert!(output.contains("\n - nested unsorted list entry\n"));
    assert!(output.contains(" 1. deep nested list entry\n"));
}

#[test]
fn whole_document() {
    let output = parse_string("<h1>Title</h1><p>First <em>line</em></p><ul><li>item</li></ul>")
        .unwrap();
    assert_eq!(output, "\n# Title\n\n\nFirst *line*\n- item\n\n\n");
}

#[test]
fn fenced_code() {
    let mapper = Mapper::with_options(MapperOptions::github_style());
    let output = mapper
        .convert_html("<pre><code>let x = 1;</code></pre>")
        .unwrap();
    assert_eq!(output, "\n\n\n```\nlet x = 1;\n```\n");
}

#[test]
fn unknown_tags() {
    let html = "<div>text</div>";
    assert_eq!(parse_string(html).unwrap(), "\ntext\n");

    let strict = Mapper::with_options(MapperOptions {
        raise_on_error: true,
        ..Default::default()
    });
    match strict.convert_html(html) {
        Err(ReverseMarkdownError::UnknownTag { tag, boundary }) => {
            assert_eq!(tag, "div");
            assert_eq!(boundary, TagBoundary::Start);
        }
        other => panic!("expected unknown tag error, got {other:?}"),
    }
}

#[test]
fn deterministic() {
    let first = parse_string(LISTS).unwrap();
    let second = parse_string(LISTS).unwrap();
    assert_eq!(first, second);
}
