//! Graph store integration tests over the mobile-phone feature model.

use std::rc::Rc;
use varia_core::Value;
use varia_tests::*;

mod lookups {
    use super::*;

    #[test]
    fn test_get_node_by_id() {
        // GIVEN the mobile-phone feature model
        let graph = mobile_phone_model();

        // WHEN a feature is looked up by id
        let node = graph.get_node(id(COLOR)).expect("feature indexed");

        // THEN the stored node carries its name
        assert_eq!(node.get("name"), Some(&Value::Str("Color".into())));
    }

    #[test]
    fn test_get_connection_by_id() {
        let graph = mobile_phone_model();

        let connection = graph
            .get_connection(id(BASIC_EXCLUDES_GPS))
            .expect("relationship indexed");

        assert_eq!(connection.get("type"), Some(&Value::Str("excludes".into())));
    }

    #[test]
    fn test_connections_from_source() {
        // GIVEN the root feature sourcing four relationships
        let graph = mobile_phone_model();

        let connections = graph
            .get_connections_from_source(id(MOBILE_PHONE))
            .expect("source bucket exists");

        assert_eq!(connections.len(), 4);
    }

    #[test]
    fn test_connections_from_destination() {
        // GIVEN GPS as destination of the optional and excludes
        // relationships
        let graph = mobile_phone_model();

        let connections = graph
            .get_connections_from_destination(id(GPS))
            .expect("destination bucket exists");

        assert_eq!(connections.len(), 2);
    }

    #[test]
    fn test_unindexed_ids_yield_no_bucket() {
        let graph = mobile_phone_model();

        // MP3 never sources a relationship; Mobile Phone is never a
        // destination.
        assert!(graph.get_connections_from_source(id(MP3)).is_none());
        assert!(graph
            .get_connections_from_destination(id(MOBILE_PHONE))
            .is_none());
    }
}

mod invariants {
    use super::*;

    #[test]
    fn test_lookup_returns_added_allocation() {
        // GIVEN a node and a connection added to the graph
        let graph = mobile_phone_model();
        let node = graph.get_node(id(SCREEN)).unwrap().clone();
        let connection = graph.get_connection(id(OPTIONAL_GPS)).unwrap().clone();

        // THEN lookups return the same allocations, not copies
        assert!(Rc::ptr_eq(graph.get_node(id(SCREEN)).unwrap(), &node));
        assert!(Rc::ptr_eq(
            graph.get_connection(id(OPTIONAL_GPS)).unwrap(),
            &connection
        ));
    }

    #[test]
    fn test_destination_equals_first_destination() {
        let graph = mobile_phone_model();

        for connection in graph.connections() {
            let derived = connection
                .get("destination")
                .and_then(Value::as_node)
                .expect("derived destination");
            assert!(Rc::ptr_eq(derived, &connection.destinations()[0]));
        }
    }

    #[test]
    fn test_connection_sits_in_every_expected_bucket() {
        // GIVEN the range relationship with three destinations
        let graph = mobile_phone_model();
        let range = graph
            .get_connections_from_source(id(SCREEN))
            .expect("source bucket")
            .first()
            .expect("range relationship")
            .clone();

        // THEN it appears in exactly one source bucket
        let sourced: usize = graph
            .nodes()
            .iter()
            .filter_map(|node| graph.get_connections_from_source(node.id()))
            .map(|bucket| bucket.iter().filter(|c| Rc::ptr_eq(c, &range)).count())
            .sum();
        assert_eq!(sourced, 1);

        // AND in the destination bucket of each of its destinations
        for destination in range.destinations() {
            let bucket = graph
                .get_connections_from_destination(destination.id())
                .expect("destination bucket");
            assert!(bucket.iter().any(|c| Rc::ptr_eq(c, &range)));
        }
    }
}

mod quirks {
    use super::*;
    use varia_core::{attrs, Node};

    // Known store quirks, pinned down as observed behavior rather than
    // invariants worth strengthening.

    #[test]
    fn test_quirk_duplicate_connection_id_overwrites_table_entry() {
        // The fixture reuses one id for the range and the or
        // relationships; the by-id table keeps the later one.
        let graph = mobile_phone_model();

        let stored = graph.get_connection(id(SCREEN_RANGE)).expect("indexed");
        assert_eq!(stored.get("type"), Some(&Value::Str("or".into())));
        assert_eq!(graph.connection_count(), 8);
    }

    #[test]
    fn test_quirk_duplicate_node_id_has_no_guard() {
        let mut graph = mobile_phone_model();
        let replacement = Rc::new(
            Node::new(attrs! { "id" => id(GPS), "name" => "Galileo" }).unwrap(),
        );

        graph.add_node(replacement.clone());

        assert_eq!(graph.node_count(), 11);
        assert!(Rc::ptr_eq(graph.get_node(id(GPS)).unwrap(), &replacement));
    }

    #[test]
    fn test_quirk_readding_a_connection_double_indexes_it() {
        let mut graph = mobile_phone_model();
        let connection = graph.get_connection(id(OPTIONAL_GPS)).unwrap().clone();
        let before = graph
            .get_connections_from_source(id(MOBILE_PHONE))
            .unwrap()
            .len();

        graph.add_connection(connection);

        // Sequence unchanged, every index re-appended.
        assert_eq!(graph.connection_count(), 8);
        assert_eq!(
            graph
                .get_connections_from_source(id(MOBILE_PHONE))
                .unwrap()
                .len(),
            before + 1
        );
    }
}
