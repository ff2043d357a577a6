//! Tests for config trees.

use super::*;
use serde_json::json;

fn graphics_tree() -> ConfigTree {
    let mut tree = ConfigTree::new();
    tree.add_node("graphics.resolution").unwrap();
    tree.add_node("graphics.fullscreen").unwrap();
    tree.add_node("audio.volume").unwrap();
    tree
}

// ============================================================================
// Path navigation
// ============================================================================

#[test]
fn test_added_paths_resolve() {
    let mut tree = ConfigTree::new();
    for path in ["a", "a.b", "x.y.z", "graphics.resolution"] {
        let id = tree.add_node(path).unwrap();
        let resolved = tree.resolve(path).unwrap();
        assert_eq!(resolved.id(), id);
        assert_eq!(resolved.full_path(), path);
    }
}

#[test]
fn test_add_node_keeps_existing_nodes() {
    let mut tree = ConfigTree::new();
    let first = tree.add_node("a.b").unwrap();
    tree.resolve_mut("a.b").unwrap().set_value(3);
    let second = tree.add_node("a.b").unwrap();

    assert_eq!(first, second);
    assert_eq!(tree.resolve("a.b").unwrap().get_int(), Some(3));
}

#[test]
fn test_empty_path_selects_self_on_resolve() {
    let tree = graphics_tree();
    let graphics = tree.resolve("graphics").unwrap();
    assert_eq!(graphics.resolve("").unwrap().id(), graphics.id());
    assert_eq!(tree.resolve("").unwrap().id(), tree.root_id());
}

#[test]
fn test_empty_path_rejected_by_mutations() {
    let mut tree = graphics_tree();
    assert!(matches!(tree.add_node(""), Err(ConfigError::InvalidPath(_))));
    assert!(matches!(tree.del_node(""), Err(ConfigError::InvalidPath(_))));
    assert!(matches!(
        tree.ensure_path("", false),
        Err(ConfigError::InvalidPath(_))
    ));
}

#[test]
fn test_resolve_missing_segment() {
    let tree = graphics_tree();
    assert!(tree.resolve("graphics.missing").is_none());
    assert!(tree.resolve("missing.resolution").is_none());
    assert!(tree.resolve("graphics.resolution.deeper").is_none());
}

#[test]
fn test_resolve_relative_to_subtree() {
    let tree = graphics_tree();
    let graphics = tree.resolve("graphics").unwrap();
    let resolution = graphics.resolve("resolution").unwrap();
    assert_eq!(resolution.full_path(), "graphics.resolution");
    assert!(graphics.resolve("audio").is_none());
}

#[test]
fn test_delete_then_resolve_is_missing() {
    let mut tree = graphics_tree();
    tree.del_node("graphics.resolution").unwrap();

    assert!(tree.resolve("graphics.resolution").is_none());
    assert!(tree.resolve("graphics.fullscreen").is_some());
}

#[test]
fn test_delete_releases_subtree() {
    let mut tree = graphics_tree();
    let before = tree.node_count();
    let resolution = tree.resolve("graphics.resolution").unwrap().id();

    tree.del_node("graphics").unwrap();

    assert_eq!(tree.node_count(), before - 3);
    assert!(tree.node(resolution).is_none());
    assert!(!tree.contains(resolution));
}

#[test]
fn test_delete_under_missing_parent_is_noop() {
    let mut tree = graphics_tree();
    let before = tree.to_json();

    tree.del_node("a.b.c").unwrap();
    tree.del_node("graphics.nothing").unwrap();

    assert_eq!(tree.to_json(), before);
}

#[test]
fn test_stale_handle_does_not_alias_reused_slot() {
    let mut tree = ConfigTree::new();
    let old = tree.add_node("old").unwrap();
    tree.del_node("old").unwrap();
    let new = tree.add_node("new").unwrap();

    assert_ne!(old, new);
    assert!(tree.node(old).is_none());
    assert!(tree.node_mut(old).is_none());
    assert_eq!(tree.node(new).unwrap().name(), "new");
}

#[test]
fn test_full_path_and_root() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("a.b.c").unwrap();
    let node = tree.node(id).unwrap();

    assert_eq!(node.full_path(), "a.b.c");
    assert_eq!(node.name(), "c");
    assert_eq!(node.parent().unwrap().full_path(), "a.b");
    assert_eq!(node.root().id(), tree.root_id());
    assert!(node.root().is_root());
    assert_eq!(tree.root().full_path(), "");
    assert_eq!(tree.root().name(), "");
}

#[test]
fn test_ensure_path_without_overwrite_is_idempotent() {
    let mut tree = ConfigTree::new();
    let id = tree.ensure_path("ui.theme", false).unwrap();
    tree.node_mut(id).unwrap().set_value("dark");

    let again = tree.ensure_path("ui.theme", false).unwrap();

    assert_eq!(again, id);
    assert_eq!(tree.resolve("ui.theme").unwrap().get_string().as_deref(), Some("dark"));
}

#[test]
fn test_ensure_path_with_overwrite_keeps_existing_subtree() {
    let mut tree = ConfigTree::new();
    tree.add_node("graphics.resolution").unwrap();
    tree.resolve_mut("graphics.resolution").unwrap().set_value(1080);
    let graphics = tree.resolve("graphics").unwrap().id();

    let id = tree.ensure_path("graphics", true).unwrap();

    assert_eq!(id, graphics);
    assert_eq!(tree.resolve("graphics.resolution").unwrap().get_int(), Some(1080));
    assert_eq!(
        tree.to_json(),
        json!({"graphics": {"resolution": {"0": 1080}}})
    );
}

#[test]
fn test_ensure_path_with_overwrite_keeps_existing_leaf() {
    let mut tree = ConfigTree::new();
    tree.add_node("ui.theme").unwrap();
    tree.resolve_mut("ui.theme").unwrap().set_value("dark");

    tree.ensure_path("ui.theme", true).unwrap();
    tree.ensure_path("ui.font", true).unwrap();

    let ui = tree.resolve("ui").unwrap();
    assert_eq!(ui.child("theme").unwrap().get_string().as_deref(), Some("dark"));
    assert!(!ui.child("font").unwrap().has_value());
}

#[test]
fn test_ensure_path_creates_missing_with_overwrite() {
    let mut tree = ConfigTree::new();
    let id = tree.ensure_path("a.b", true).unwrap();
    assert_eq!(tree.resolve("a.b").unwrap().id(), id);
}

#[test]
fn test_children_keep_insertion_order() {
    let mut tree = ConfigTree::new();
    for key in ["zeta", "alpha", "mid"] {
        tree.add_node(key).unwrap();
    }
    let names: Vec<&str> = tree.root().children().map(|c| c.name()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_keys_with_dots_are_unaddressable() {
    // Known limitation: path syntax has no escaping.
    let tree = ConfigTree::from_json(&json!({"a.b": {"0": 1}})).unwrap();
    assert!(tree.resolve("a.b").is_none());
    assert_eq!(tree.root().child("a.b").unwrap().get_int(), Some(1));
}

// ============================================================================
// Values and lists
// ============================================================================

#[test]
fn test_set_value_clears_children() {
    let mut tree = graphics_tree();
    let mut graphics = tree.resolve_mut("graphics").unwrap();
    graphics.set_value(true);

    let graphics = tree.resolve("graphics").unwrap();
    assert!(graphics.has_value());
    assert_eq!(graphics.children().count(), 0);
    assert!(tree.resolve("graphics.resolution").is_none());
}

#[test]
fn test_set_value_on_leaf_replaces_value() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("n").unwrap();
    let mut node = tree.node_mut(id).unwrap();
    node.set_value(1);
    node.set_value("two");

    assert_eq!(node.view().get_string().as_deref(), Some("two"));
    assert!(node.view().has_value());
}

#[test]
fn test_null_is_a_value() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("n").unwrap();
    tree.node_mut(id).unwrap().set_value(Value::Null);

    let node = tree.node(id).unwrap();
    assert!(node.has_value());
    assert_eq!(node.length(), 1);
    assert_eq!(node.get_int(), None);
    assert_eq!(tree.to_json(), json!({"n": {"0": null}}));
}

#[test]
fn test_adding_child_to_leaf_makes_container() {
    let mut tree = ConfigTree::new();
    tree.add_node("a").unwrap();
    tree.resolve_mut("a").unwrap().set_value(5);

    tree.add_node("a.b").unwrap();

    let a = tree.resolve("a").unwrap();
    assert!(!a.has_value());
    assert!(a.value().is_none());
    assert_eq!(a.length(), 1);
    assert_eq!(tree.to_json(), json!({"a": {"b": {}}}));
}

#[test]
fn test_get_type_mismatch_is_absent() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("count").unwrap();
    tree.node_mut(id).unwrap().set_value("five");

    let node = tree.node(id).unwrap();
    assert_eq!(node.get::<i32>(), None);
    assert_eq!(node.get::<String>().as_deref(), Some("five"));
}

#[test]
fn test_get_on_missing_value_is_absent() {
    let tree = graphics_tree();
    assert_eq!(tree.resolve("graphics").unwrap().get::<String>(), None);
}

#[test]
fn test_get_reads_first_list_element() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("names").unwrap();
    tree.node_mut(id).unwrap().set_value(vec!["first", "second"]);

    let node = tree.node(id).unwrap();
    assert_eq!(node.get_string().as_deref(), Some("first"));
    assert_eq!(node.get_int(), None);
}

#[test]
fn test_get_on_empty_list_is_absent() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("empty").unwrap();
    tree.node_mut(id).unwrap().set_value(Value::List(Vec::new()));

    let node = tree.node(id).unwrap();
    assert!(node.has_value());
    assert_eq!(node.get::<Value>(), None);
    assert_eq!(node.length(), 0);
}

#[test]
fn test_get_as_deserializes_opaque_json() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Window {
        width: u32,
        height: u32,
    }

    let tree =
        ConfigTree::from_json(&json!({"window": {"0": {"width": 800, "height": 600}}})).unwrap();
    let window = tree.resolve("window").unwrap();

    assert_eq!(
        window.get_as::<Window>(),
        Some(Window {
            width: 800,
            height: 600
        })
    );
    assert_eq!(window.get_as::<String>(), None);
}

#[test]
fn test_add_element_promotes_scalar_to_list() {
    // Intentional: a node starts as a scalar and becomes a list on the
    // second element.
    let mut tree = ConfigTree::new();
    let id = tree.add_node("servers").unwrap();
    let mut node = tree.node_mut(id).unwrap();

    node.add_element("alpha");
    assert_eq!(node.view().value(), Some(&Value::from("alpha")));
    assert_eq!(node.view().length(), 1);

    node.add_element("beta");
    assert_eq!(node.view().value(), Some(&Value::from(vec!["alpha", "beta"])));

    node.add_element("gamma");
    let view = node.view();
    assert_eq!(view.length(), 3);
    assert_eq!(view.get_element(0), Some(&Value::from("alpha")));
    assert_eq!(view.get_element(1), Some(&Value::from("beta")));
    assert_eq!(view.get_element(2), Some(&Value::from("gamma")));
}

#[test]
fn test_add_element_on_container_discards_children() {
    let mut tree = graphics_tree();
    tree.resolve_mut("graphics").unwrap().add_element(1);

    let graphics = tree.resolve("graphics").unwrap();
    assert!(graphics.has_value());
    assert_eq!(graphics.get_int(), Some(1));
    assert!(tree.resolve("graphics.resolution").is_none());
}

#[test]
fn test_length_rules() {
    let mut tree = graphics_tree();
    assert_eq!(tree.resolve("graphics").unwrap().length(), 2);
    assert_eq!(tree.root().length(), 2);
    assert_eq!(tree.resolve("graphics.resolution").unwrap().length(), 0);

    tree.resolve_mut("audio.volume").unwrap().set_value(0.5);
    assert_eq!(tree.resolve("audio.volume").unwrap().length(), 1);

    tree.resolve_mut("audio.volume").unwrap().set_value(vec![1, 2, 3]);
    assert_eq!(tree.resolve("audio.volume").unwrap().length(), 3);
}

#[test]
fn test_get_element_requires_list() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("n").unwrap();
    tree.node_mut(id).unwrap().set_value(7);

    let node = tree.node(id).unwrap();
    assert_eq!(node.get_element(0), None);
    assert_eq!(tree.root().get_element(0), None);
}

#[test]
fn test_get_element_out_of_range_is_absent() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("n").unwrap();
    tree.node_mut(id).unwrap().set_value(vec![1, 2]);
    assert_eq!(tree.node(id).unwrap().get_element(2), None);
}

#[test]
fn test_set_element() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("n").unwrap();
    let mut node = tree.node_mut(id).unwrap();
    node.set_value(vec![1, 2]);

    node.set_element(20, 1).unwrap();
    assert_eq!(node.view().get_element(1), Some(&Value::Int(20)));

    let err = node.set_element(30, 2).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::IndexOutOfRange { index: 2, len: 2 }
    ));
}

#[test]
fn test_set_element_on_scalar_is_noop() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("n").unwrap();
    let mut node = tree.node_mut(id).unwrap();
    node.set_value("keep");

    node.set_element("other", 0).unwrap();
    assert_eq!(node.view().get_string().as_deref(), Some("keep"));
}

#[test]
fn test_del_element() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("n").unwrap();
    let mut node = tree.node_mut(id).unwrap();
    node.set_value(vec!["a", "b", "c"]);

    assert_eq!(node.del_element(1).unwrap(), Some(Value::from("b")));
    assert_eq!(node.view().value(), Some(&Value::from(vec!["a", "c"])));
    assert!(matches!(
        node.del_element(5),
        Err(ConfigError::IndexOutOfRange { index: 5, len: 2 })
    ));

    node.del_element(0).unwrap();
    node.del_element(0).unwrap();
    assert!(node.view().has_value());
    assert_eq!(node.view().length(), 0);
}

#[test]
fn test_del_element_on_non_list_is_noop() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("n").unwrap();
    let mut node = tree.node_mut(id).unwrap();
    assert_eq!(node.del_element(0).unwrap(), None);

    node.set_value(true);
    assert_eq!(node.del_element(0).unwrap(), None);
    assert_eq!(node.view().get_bool(), Some(true));
}

// ============================================================================
// JSON encoding
// ============================================================================

#[test]
fn test_encode_scalar_leaf_scenario() {
    let mut tree = ConfigTree::new();
    tree.ensure_path("graphics.resolution", false).unwrap();
    tree.resolve_mut("graphics.resolution")
        .unwrap()
        .set_value(1080);

    assert_eq!(
        tree.to_json(),
        json!({"graphics": {"resolution": {"0": 1080}}})
    );
}

#[test]
fn test_encode_list_leaf_uses_index_keys() {
    let mut tree = ConfigTree::new();
    let id = tree.add_node("servers").unwrap();
    let mut node = tree.node_mut(id).unwrap();
    node.add_element("a");
    node.add_element(2);
    node.add_element(Value::Null);

    assert_eq!(
        tree.to_json(),
        json!({"servers": {"0": "a", "1": 2, "2": null}})
    );
}

#[test]
fn test_encode_empty_tree() {
    assert_eq!(ConfigTree::new().to_json(), json!({}));
    assert_eq!(ConfigTree::new().to_json_string().unwrap(), "{}");
}

#[test]
fn test_encode_preserves_child_order_in_text() {
    let mut tree = ConfigTree::new();
    tree.add_node("b").unwrap();
    tree.add_node("a").unwrap();
    let text = serde_json::to_string(&tree).unwrap();
    assert_eq!(text, r#"{"b":{},"a":{}}"#);
}

#[test]
fn test_encode_subtree() {
    let mut tree = graphics_tree();
    tree.resolve_mut("graphics.fullscreen")
        .unwrap()
        .set_value(false);
    let graphics = tree.resolve("graphics").unwrap();
    assert_eq!(
        graphics.to_json(),
        json!({"resolution": {}, "fullscreen": {"0": false}})
    );
}

// ============================================================================
// JSON decoding
// ============================================================================

#[test]
fn test_decode_list_scenario() {
    let tree = ConfigTree::from_json(&json!({"a": {"0": "x", "1": "y"}})).unwrap();
    let a = tree.resolve("a").unwrap();

    assert!(a.has_value());
    assert_eq!(a.length(), 2);
    assert_eq!(a.get_element(0), Some(&Value::from("x")));
    assert_eq!(a.get_element(1), Some(&Value::from("y")));
}

#[test]
fn test_decode_sorts_index_keys_numerically() {
    let tree = ConfigTree::from_json_str(
        r#"{"list": {"10": "k", "2": "c", "0": "a", "1": "b"}}"#,
    )
    .unwrap();
    let list = tree.resolve("list").unwrap();
    assert_eq!(
        list.value(),
        Some(&Value::from(vec!["a", "b", "c", "k"]))
    );
}

#[test]
fn test_decode_single_element_stays_list() {
    // Decoding never collapses to a bare scalar, unlike the first
    // add_element or set_value on a fresh node.
    let tree = ConfigTree::from_json(&json!({"n": {"0": 1080}})).unwrap();
    let n = tree.resolve("n").unwrap();

    assert_eq!(n.value(), Some(&Value::List(vec![Value::Int(1080)])));
    assert_eq!(n.get_int(), Some(1080));
    assert_eq!(n.length(), 1);
    assert_eq!(n.get_element(0), Some(&Value::Int(1080)));

    let mut fresh = ConfigTree::new();
    let id = fresh.add_node("n").unwrap();
    fresh.node_mut(id).unwrap().set_value(1080);
    assert_eq!(fresh.resolve("n").unwrap().value(), Some(&Value::Int(1080)));
    assert_eq!(fresh.to_json(), tree.to_json());
}

#[test]
fn test_decoded_single_element_grows_by_append() {
    let mut tree = ConfigTree::from_json(&json!({"n": {"0": "a"}})).unwrap();
    tree.resolve_mut("n").unwrap().add_element("b");
    assert_eq!(
        tree.resolve("n").unwrap().value(),
        Some(&Value::from(vec!["a", "b"]))
    );
}

#[test]
fn test_decode_number_variants() {
    let tree = ConfigTree::from_json_str(
        r#"{"v": {"0": 1, "1": 2.5, "2": 6000000000, "3": true, "4": null, "5": "s"}}"#,
    )
    .unwrap();
    let v = tree.resolve("v").unwrap();
    assert_eq!(
        v.value(),
        Some(&Value::List(vec![
            Value::Int(1),
            Value::Double(2.5),
            Value::Long(6_000_000_000),
            Value::Bool(true),
            Value::Null,
            Value::from("s"),
        ]))
    );
}

#[test]
fn test_decode_empty_objects_give_empty_nodes() {
    let tree = ConfigTree::from_json(&json!({"a": {}, "b": {"c": {}}})).unwrap();
    let a = tree.resolve("a").unwrap();
    assert!(!a.has_value());
    assert_eq!(a.length(), 0);
    assert!(tree.resolve("b.c").is_some());
}

#[test]
fn test_decode_null_document_is_empty_tree() {
    let tree = ConfigTree::from_json_str("null").unwrap();
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.to_json(), json!({}));
}

#[test]
fn test_decode_drops_non_object_siblings() {
    crate::logging::init_test();
    let tree =
        ConfigTree::from_json(&json!({"keep": {"0": 1}, "drop": 5, "also": [1, 2]})).unwrap();
    assert!(tree.resolve("keep").is_some());
    assert!(tree.resolve("drop").is_none());
    assert!(tree.resolve("also").is_none());
    assert_eq!(tree.to_json(), json!({"keep": {"0": 1}}));
}

#[test]
fn test_decode_rejects_non_object_document() {
    assert!(matches!(
        ConfigTree::from_json(&json!([1, 2])),
        Err(ConfigError::NotAnObject("an array"))
    ));
    assert!(matches!(
        ConfigTree::from_json_str("not json"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_decode_sets_parent_links() {
    let tree = ConfigTree::from_json(&json!({"a": {"b": {"c": {"0": 1}}}})).unwrap();
    let c = tree.resolve("a.b.c").unwrap();
    assert_eq!(c.full_path(), "a.b.c");
    assert_eq!(c.parent().unwrap().name(), "b");
    assert_eq!(c.root().id(), tree.root_id());
}

#[test]
fn test_decode_child_grafts_subtree() {
    let mut tree = graphics_tree();
    let object = json!({"left": {"0": 0.25}, "right": {"0": 0.75}});
    let serde_json::Value::Object(object) = object else {
        unreachable!()
    };

    let id = tree.resolve_mut("audio").unwrap().decode_child("balance", &object).unwrap();

    let balance = tree.node(id).unwrap();
    assert_eq!(balance.full_path(), "audio.balance");
    assert_eq!(tree.resolve("audio.balance.right").unwrap().get_double(), Some(0.75));
    assert!(tree.resolve("audio.volume").is_some());
}

#[test]
fn test_round_trip_of_built_tree() {
    let mut tree = ConfigTree::new();
    tree.add_node("graphics.resolution").unwrap();
    tree.resolve_mut("graphics.resolution").unwrap().set_value(1080);
    tree.add_node("graphics.scale").unwrap();
    tree.resolve_mut("graphics.scale").unwrap().set_value(1.5);
    tree.add_node("player.name").unwrap();
    tree.resolve_mut("player.name").unwrap().set_value("steve");
    let id = tree.add_node("player.friends").unwrap();
    let mut friends = tree.node_mut(id).unwrap();
    friends.add_element("alex");
    friends.add_element("sam");
    tree.add_node("empty.section").unwrap();
    tree.add_node("flags.debug").unwrap();
    tree.resolve_mut("flags.debug").unwrap().set_value(Value::Null);
    tree.add_node("limits.big").unwrap();
    tree.resolve_mut("limits.big").unwrap().set_value(i64::MAX);

    let encoded = tree.to_json();
    let decoded = ConfigTree::from_json(&encoded).unwrap();
    assert_eq!(decoded.to_json(), encoded);

    let text = tree.to_json_string().unwrap();
    let reparsed = ConfigTree::from_json_str(&text).unwrap();
    assert_eq!(reparsed.to_json_string().unwrap(), text);
}

#[test]
fn test_round_trip_of_whole_doubles() {
    let mut tree = ConfigTree::new();
    tree.add_node("scale").unwrap();
    tree.resolve_mut("scale").unwrap().set_value(2.0);

    let reparsed = ConfigTree::from_json_str(&tree.to_json_string().unwrap()).unwrap();
    assert_eq!(reparsed.resolve("scale").unwrap().get_double(), Some(2.0));
}

#[test]
fn test_mutable_view_navigation() {
    let mut tree = graphics_tree();
    let root = tree.root_mut();
    let mut resolution = root.into_resolved("graphics.resolution").unwrap();
    resolution.set_value(5_000_000_000i64);

    let view = resolution.into_ref();
    assert_eq!(view.get_long(), Some(5_000_000_000));
    assert_eq!(view.get_int(), None);
    assert!(!view.value().unwrap().is_list());
    assert_eq!(view.full_path(), "graphics.resolution");

    let mut root = tree.root_mut();
    let mut graphics = root.resolve_mut("graphics").unwrap();
    assert_eq!(graphics.view().length(), 2);
    assert!(graphics.resolve_mut("missing").is_none());
}

#[test]
fn test_slot_indices_stop_at_capacity() {
    assert_eq!(next_slot_index(0).unwrap(), 0);
    assert_eq!(next_slot_index(MAX_NODES - 1).unwrap(), u32::MAX - 1);
    assert!(matches!(
        next_slot_index(MAX_NODES),
        Err(ConfigError::TooManyNodes { limit }) if limit == MAX_NODES
    ));
}

#[test]
fn test_decode_numbers_by_literal() {
    let tree = ConfigTree::from_json_str(r#"{"a": {"0": 1e3, "1": 18446744073709551616}}"#).unwrap();
    let a = tree.resolve("a").unwrap();

    assert_eq!(a.get_int(), Some(1000));
    assert_eq!(a.get_element(0), Some(&Value::Int(1000)));
    assert_eq!(a.get_element(1).unwrap().type_name(), "json");
    assert_eq!(
        tree.to_json_string().unwrap().replace(char::is_whitespace, ""),
        r#"{"a":{"0":1000,"1":18446744073709551616}}"#
    );
}

#[test]
fn test_clear_value_empties_node() {
    let mut tree = graphics_tree();
    tree.resolve_mut("audio.volume").unwrap().set_value(7);

    tree.resolve_mut("audio.volume").unwrap().clear_value();
    tree.resolve_mut("graphics").unwrap().clear_value();

    assert!(!tree.resolve("audio.volume").unwrap().has_value());
    assert_eq!(tree.resolve("graphics").unwrap().length(), 0);
    assert_eq!(tree.to_json(), json!({"graphics": {}, "audio": {"volume": {}}}));
}
