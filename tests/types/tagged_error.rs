use crate::common::{FooBar, SpecialTag};
use error_tags::{has_tag, TaggedError};
use std::error::Error;

#[test]
fn builder_accumulates_tags() {
    let err = TaggedError::new(FooBar).with_tag("tag1").with_tag(SpecialTag { a: 1, b: 2 });

    assert_eq!(err.tags().len(), 2);
    assert!(err.has_tag(&"tag1"));
    assert!(err.has_tag(&SpecialTag { a: 1, b: 2 }));
    assert!(!err.has_tag(&SpecialTag { a: 2, b: 1 }));
}

#[test]
fn source_is_the_cause() {
    let err = TaggedError::new(FooBar).with_tag("t");

    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "foobar error");
    assert!(source.is::<FooBar>());
    assert!(err.cause().is::<FooBar>());
}

#[test]
fn into_cause_returns_the_original() {
    let err = TaggedError::new(FooBar).with_tags(["a", "b"]);

    let cause = err.into_cause();
    assert!(cause.downcast_ref::<FooBar>().is_some());
    assert_eq!(cause.to_string(), "foobar error");
}

#[test]
fn new_always_starts_a_layer() {
    let inner = TaggedError::new(FooBar).with_tag("inner");
    let outer = TaggedError::new(inner).with_tag("outer");

    assert!(outer.has_tag(&"outer"));
    assert!(!outer.has_tag(&"inner"));
    assert!(outer.cause().downcast_ref::<TaggedError>().unwrap().has_tag(&"inner"));
}

#[test]
fn tagged_error_is_an_error_value() {
    let err = TaggedError::new("boom").with_tag("x");
    let dyn_err: &(dyn Error + 'static) = &err;

    assert!(has_tag(dyn_err, &"x"));
    assert!(dyn_err.downcast_ref::<TaggedError>().is_some());
}

#[test]
fn tagged_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<TaggedError>();
}
