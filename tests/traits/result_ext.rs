use crate::common::{wrap, FooBar, SpecialTag};
use error_tags::traits::TagResultExt;
use error_tags::{deep_has_tag, has_tag, BoxResult, TaggedError};

fn failing() -> Result<u32, FooBar> {
    Err(FooBar)
}

fn succeeding() -> Result<u32, FooBar> {
    Ok(7)
}

#[test]
fn tag_on_err_wraps_the_error() {
    let err = failing().tag("io").unwrap_err();

    assert!(has_tag(&*err, &"io"));
    assert_eq!(err.to_string(), "[io] @ foobar error");
}

#[test]
fn ok_passes_through_every_method() {
    assert_eq!(succeeding().tag("x").unwrap(), 7);
    assert_eq!(succeeding().tag2("x", 1_u8).unwrap(), 7);
    assert_eq!(succeeding().tag3("x", 1_u8, 'c').unwrap(), 7);
    assert_eq!(succeeding().tags(["x", "y"]).unwrap(), 7);
    assert_eq!(succeeding().tag_with(|| -> &'static str { panic!("evaluated on Ok") }).unwrap(), 7);
}

#[test]
fn chained_calls_grow_one_layer() {
    let err = failing()
        .tag("a")
        .tag2("b", SpecialTag { a: 1, b: 2 })
        .tag3("c", "a", 3_i64)
        .unwrap_err();

    let tagged = err.downcast_ref::<TaggedError>().unwrap();
    assert_eq!(tagged.tags().len(), 5);
    assert_eq!(err.to_string(), "[3 | c | special-tag(a=1, b=2) | b | a] @ foobar error");
}

#[test]
fn tags_with_empty_iterator_only_boxes() {
    let err = failing().tags(Vec::<String>::new()).unwrap_err();

    assert!(err.is::<FooBar>());
    assert_eq!(err.to_string(), "foobar error");
}

#[test]
fn tag_with_is_lazy_and_applied_on_err() {
    let mut calls = 0;
    let err = failing()
        .tag_with(|| {
            calls += 1;
            SpecialTag { a: 9, b: 9 }
        })
        .unwrap_err();

    assert_eq!(calls, 1);
    assert!(has_tag(&*err, &SpecialTag { a: 9, b: 9 }));
}

#[test]
fn tagging_through_layers_of_results() {
    fn inner() -> BoxResult<()> {
        Err::<(), _>(FooBar).tag("inner")
    }

    fn outer() -> BoxResult<()> {
        inner().map_err(wrap).tag("outer")
    }

    let err = outer().unwrap_err();
    assert!(has_tag(&*err, &"outer"));
    assert!(!has_tag(&*err, &"inner"));
    assert!(deep_has_tag(&*err, &"inner"));
    assert_eq!(err.to_string(), "[outer] @ wrapping error: [inner] @ foobar error");
}
