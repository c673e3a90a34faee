// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `hotspot_tree` crate.
//!
//! These exercise the `Store` API with a focus on how sibling exclusivity,
//! default repair, and positional re-indexing interact with stable ids.

use hotspot_geometry::Rectangle;
use hotspot_tree::{
    AddActions, EditError, Exclusivity, Family, HOTSPOT_TITLE, Level, NodeKind,
    PRODUCT_PLACEHOLDER, Store, SubKind, SubNode,
};
use kurbo::Point;

fn rect() -> Rectangle {
    Rectangle::from_drag(Point::new(10.0, 20.0), Point::new(30.0, 50.0))
}

fn store_with(hotspots: usize) -> Store {
    let mut store = Store::new();
    for _ in 0..hotspots {
        store.append_hotspot(rect());
    }
    store
}

#[test]
fn product_blocks_children_until_removed() {
    let mut store = store_with(1);
    assert!(store.can_add_child([0]));
    assert!(store.can_add_product([0]));

    store.add_product([0]).unwrap();
    assert!(!store.can_add_child([0]));
    assert!(!store.can_add_heading([0]));
    assert!(store.can_add_product([0]));

    store.remove_node([0, 0]).unwrap();
    assert!(store.can_add_child([0]));
    assert!(store.can_add_product([0]));
}

#[test]
fn child_blocks_products() {
    let mut store = store_with(1);
    store.add_child([0]).unwrap();

    assert!(store.can_add_child([0]));
    assert!(!store.can_add_product([0]));
    assert_eq!(
        store.add_product([0]),
        Err(EditError::Exclusive {
            kind: SubKind::Product,
            existing: Family::Section,
        })
    );
    assert_eq!(store.get([0]).unwrap().subs().len(), 1);
}

#[test]
fn allow_policy_lets_families_mix() {
    let mut store = Store::with_exclusivity(Exclusivity::Allow);
    store.append_hotspot(rect());
    store.add_child([0]).unwrap();
    store.add_product([0]).unwrap();

    let kinds: Vec<Option<SubKind>> = store
        .get([0])
        .unwrap()
        .children()
        .map(|child| child.sub_kind())
        .collect();
    assert_eq!(kinds, [Some(SubKind::Child), Some(SubKind::Product)]);

    // The queries still report the conflict so a presentation can hide it.
    assert!(!store.can_add_child([0]));
    assert!(!store.can_add_product([0]));
}

#[test]
fn ensure_default_title_is_idempotent() {
    let mut store = store_with(1);

    assert_eq!(store.ensure_default_title([0]), Ok(false));
    assert_eq!(store.ensure_default_title([0]), Ok(false));
    assert_eq!(store.get([0]).unwrap().title(), HOTSPOT_TITLE);

    store.set_title([0], "").unwrap();
    assert_eq!(store.ensure_default_title([0]), Ok(true));
    assert_eq!(store.ensure_default_title([0]), Ok(false));
    assert_eq!(store.get([0]).unwrap().title(), HOTSPOT_TITLE);
}

#[test]
fn untitled_products_keep_empty_titles() {
    let mut store = store_with(1);
    store.add_product([0]).unwrap();

    assert_eq!(store.ensure_default_title([0, 0]), Ok(false));
    let product = store.get([0, 0]).unwrap();
    assert_eq!(product.title(), "");
    assert_eq!(product.display_title(), PRODUCT_PLACEHOLDER);
}

#[test]
fn removing_a_root_reindexes_later_hotspots() {
    let mut store = store_with(3);
    let first = store.hotspot_id(0).unwrap();
    let middle = store.hotspot_id(1).unwrap();
    let last = store.hotspot_id(2).unwrap();

    assert_eq!(store.remove_node([1]), Ok(1));

    assert_eq!(store.len(), 2);
    assert_eq!(store.resolve([0]), Some(first));
    assert_eq!(store.resolve([1]), Some(last));
    assert_eq!(store.resolve([2]), None);
    assert_eq!(store.index_of(last), Some(1));

    assert!(!store.is_alive(middle));
    assert_eq!(store.set_title(middle, "stale"), Err(EditError::UnknownNode));
    assert_eq!(store.set_title([2], "stale"), Err(EditError::UnknownNode));
    store.set_title(last, "kept").unwrap();
    assert_eq!(store.get([1]).unwrap().title(), "kept");
}

#[test]
fn removing_a_subtree_discards_every_descendant() {
    let mut store = store_with(1);
    let section = store.add_child([0]).unwrap();
    let sub = store.add_child(section).unwrap();
    let leaf = store.add_product(sub).unwrap();
    store.add_product(sub).unwrap();
    assert_eq!(store.node_count(), 5);

    assert_eq!(store.remove_node(section), Ok(4));
    assert_eq!(store.node_count(), 1);
    assert!(!store.is_alive(leaf));
    assert_eq!(store.remove_node(section), Err(EditError::UnknownNode));
}

#[test]
fn round_trip_through_every_level() {
    let mut store = store_with(1);
    let child = store.add_child([0]).unwrap();
    let heading = store.add_heading([0, 0]).unwrap();
    let product = store.add_product([0, 0, 0]).unwrap();

    assert_eq!(store.get([0]).unwrap().level(), Level::Hotspot);
    let read_child = store.get([0, 0]).unwrap();
    assert_eq!(read_child.id(), child);
    assert_eq!(read_child.kind(), NodeKind::Sub(SubKind::Child));
    let read_heading = store.get([0, 0, 0]).unwrap();
    assert_eq!(read_heading.id(), heading);
    assert_eq!(read_heading.sub_kind(), Some(SubKind::Heading));
    assert_eq!(read_heading.level(), Level::SubSection);
    let read_product = store.get([0, 0, 0, 0]).unwrap();
    assert_eq!(read_product.id(), product);
    assert_eq!(read_product.sub_kind(), Some(SubKind::Product));
    assert_eq!(read_product.level(), Level::Entry);
    assert_eq!(read_product.title(), "product");
}

#[test]
fn depth_limits_are_enforced() {
    let mut store = store_with(1);
    assert_eq!(
        store.add_heading([0]),
        Err(EditError::NotPermitted {
            kind: SubKind::Heading
        })
    );

    store.add_child([0]).unwrap();
    store.add_child([0, 0]).unwrap();
    assert_eq!(
        store.add_child([0, 0, 0]),
        Err(EditError::NotPermitted {
            kind: SubKind::Child
        })
    );

    let heading = store.add_heading([0, 0, 0]).unwrap();
    assert!(store.get(heading).unwrap().is_leaf());
    assert_eq!(
        store.add_product(heading),
        Err(EditError::NotPermitted {
            kind: SubKind::Product
        })
    );
    assert!(!store.can_add_product(heading));
}

#[test]
fn actions_follow_level_and_exclusivity() {
    let mut store = store_with(1);
    assert_eq!(
        store.actions([0]),
        AddActions {
            child: true,
            heading: false,
            product: true,
        }
    );

    store.add_child([0]).unwrap();
    store.add_child([0, 0]).unwrap();
    assert_eq!(
        store.actions([0]),
        AddActions {
            child: true,
            heading: false,
            product: false,
        }
    );
    assert_eq!(
        store.actions([0, 0, 0]),
        AddActions {
            child: false,
            heading: true,
            product: true,
        }
    );

    store.add_product([0, 0, 0]).unwrap();
    assert_eq!(
        store.actions([0, 0, 0]),
        AddActions {
            child: false,
            heading: false,
            product: true,
        }
    );
    assert!(store.actions([0, 0, 0, 0]).is_empty());
    assert!(store.actions([7]).is_empty());
}

#[test]
fn snapshots_mirror_the_tree() {
    let mut store = store_with(2);
    store.set_title([1], "Living room").unwrap();
    store.add_child([1]).unwrap();
    store.add_product([1, 0]).unwrap();
    store.set_title([1, 0, 0], "Lamp").unwrap();

    let snapshots = store.snapshots();
    assert_eq!(snapshots.len(), 2);
    assert!(snapshots[0].subs.is_empty());

    let room = &snapshots[1];
    assert_eq!(room.title, "Living room");
    assert_eq!(room.rectangle, rect());
    let [section] = room.subs.as_slice() else {
        panic!("expected one section, got {:?}", room.subs);
    };
    assert_eq!(section.kind(), SubKind::Child);
    assert_eq!(section.title(), "Section Title");
    let [lamp] = section.subs() else {
        panic!("expected one product, got {:?}", section.subs());
    };
    assert!(matches!(lamp, SubNode::Product { title, .. } if title == "Lamp"));
    assert!(lamp.subs().is_empty());
}

#[test]
fn revision_tracks_effective_edits() {
    let mut store = store_with(1);
    let before = store.revision();

    let _ = store.add_heading([0]);
    assert_eq!(store.revision(), before);

    store.add_child([0]).unwrap();
    assert_eq!(store.revision(), before + 1);
}
