use std::collections::HashMap;

use httpheaders::http::{Headers, add, del, get, names, set, table, values};

type Map = HashMap<String, Vec<String>>;

#[test]
fn set_add_del_scenario() {
    let mut c = Map::new();

    set(&mut c, "Foo", "bar");
    assert_eq!(get(&c, "Foo"), "bar");

    add(&mut c, "Foo", "baz");
    assert_eq!(values(&c, "Foo"), ["bar", "baz"]);

    del(&mut c, "Foo");
    assert_eq!(get(&c, "Foo"), "");
    assert!(values(&c, "Foo").is_empty());
}

#[test]
fn absent_keys_read_empty() {
    let c = Map::new();
    for key in ["Foo", names::Host, ""] {
        assert_eq!(get(&c, key), "");
        assert!(values(&c, key).is_empty());
    }
}

#[test]
fn set_does_not_accumulate() {
    let mut c = Map::new();
    set(&mut c, names::ContentType, "text/plain");
    set(&mut c, names::ContentType, "application/json");
    assert_eq!(values(&c, names::ContentType), ["application/json"]);
}

#[test]
fn add_then_del_is_empty() {
    let mut c = Headers::new();
    c.add(names::SetCookie, "a=1");
    c.add(names::SetCookie, "b=2");
    assert_eq!(c.values(names::SetCookie), ["a=1", "b=2"]);

    c.del(names::SetCookie);
    assert_eq!(c.get(names::SetCookie), "");
    assert!(c.is_empty());
}

#[test]
fn constants_are_canonical_names() {
    assert_eq!(names::UserAgent, "User-Agent");
    assert_eq!(names::WwwAuthenticate, "Www-Authenticate");
    assert_eq!(names::Dnt, "Dnt");
    assert_eq!(names::ExpectCt, "Expect-Ct");
    assert_eq!(names::XForwardedFor, "X-Forwarded-For");
    assert_eq!(names::ALL.len(), 58);
    assert_eq!(table::lookup("Etag"), Some(names::Etag));
}
