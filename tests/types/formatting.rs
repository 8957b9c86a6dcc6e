use crate::common::{wrap, FooBar, Level, SpecialTag};
use error_tags::{with_tag, with_tags, TaggedError};

#[test]
fn tags_render_most_recent_first() {
    let err = with_tags(FooBar, ["buzz tag", "another tag"]);
    assert_eq!(err.to_string(), "[another tag | buzz tag] @ foobar error");
}

#[test]
fn string_enum_tags_render_as_text() {
    let err = with_tags(FooBar, [Level::Tag1, Level::Tag2]);
    assert_eq!(err.to_string(), "[tag2 | tag1] @ foobar error");
}

#[test]
fn custom_tag_renders_through_display() {
    let err = with_tags(FooBar, ["tag1", "tag2"]);
    let err = with_tag(err, SpecialTag { a: 1, b: 2 });

    assert_eq!(err.to_string(), "[special-tag(a=1, b=2) | tag2 | tag1] @ foobar error");
}

#[test]
fn nested_layers_render_recursively() {
    let err = with_tags(FooBar, ["tag1", "tag2"]);
    let err = with_tags(wrap(err), ["foo", "bar"]);

    assert_eq!(err.to_string(), "[bar | foo] @ wrapping error: [tag2 | tag1] @ foobar error");
}

#[test]
fn empty_tag_set_renders_as_cause() {
    let err = TaggedError::new(FooBar);
    assert_eq!(err.to_string(), "foobar error");
    assert_eq!(format!("{err:#}"), "Error: foobar error");
}

#[test]
fn alternate_format_lists_tags() {
    let err = TaggedError::new(FooBar).with_tag("first").with_tag(2_u8);

    assert_eq!(format!("{err:#}"), "Error: foobar error\nTags:\n  - 2\n  - first");
}

#[test]
fn colliding_renderings_both_appear() {
    let err = with_tags(FooBar, [Level::Tag1]);
    let err = with_tags(err, ["tag1"]);

    assert_eq!(err.to_string(), "[tag1 | tag1] @ foobar error");
}

#[test]
fn many_repeats_keep_first_order() {
    let names: Vec<String> = (1..=100).map(|i| format!("tag{i}")).collect();

    let mut err = with_tags(FooBar, [names[0].clone()]);
    for name in &names[1..] {
        err = with_tags(err, [name.clone()]);
    }
    for i in 0..100_000_usize {
        let j = (i * 7919) % names.len();
        err = with_tags(err, [names[j].clone()]);
    }

    let expected: Vec<&str> = names.iter().rev().map(String::as_str).collect();
    assert_eq!(err.to_string(), format!("[{}] @ foobar error", expected.join(" | ")));
}
