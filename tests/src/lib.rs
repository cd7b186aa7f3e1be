//! Shared integration fixtures for the varia test suites.
//!
//! The canonical fixture is the mobile-phone feature model: ten named
//! features and eight relationships, including a range relationship with
//! three destinations and a pair of relationships sharing one id (a
//! store quirk the suites pin down deliberately).

use std::rc::Rc;
use varia_core::{attrs, Component, ComponentId, Connection, Node, Value};
use varia_graph::MGraph;

pub const MOBILE_PHONE: &str = "897411a9-f316-4f19-a321-10d111dcad58";
pub const CALLS: &str = "e256c537-888e-478f-81bc-920784e39c1f";
pub const GPS: &str = "cbb3cbb5-69bd-4077-b341-e8b02c67581e";
pub const SCREEN: &str = "336805d1-6015-4a93-a04a-f1a3dbf18388";
pub const BASIC: &str = "54d38b28-965a-4251-8711-ac8515303288";
pub const COLOR: &str = "04478096-bae7-4e7f-9c4f-7c08d7eb60af";
pub const HIGH_RESOLUTION: &str = "3ce3e99c-785b-407f-ba8b-a5204f92763b";
pub const MEDIA: &str = "be978953-28f5-4c57-bc46-ecbe156f5316";
pub const CAMERA: &str = "1f40d88b-96c3-46f8-9644-405f1c37a607";
pub const MP3: &str = "315c6e46-ec73-46f1-b5d7-bb8fa2f7dbbb";

pub const MANDATORY_CALLS: &str = "cc5ab3a1-ba2a-41ef-a2ac-d9d0df97f736";
pub const OPTIONAL_GPS: &str = "50f87a4f-2cfc-4c91-bc80-b0898e98df72";
pub const MANDATORY_SCREEN: &str = "4683d73d-619b-4f40-802a-6891b0873ad3";
pub const OPTIONAL_MEDIA: &str = "dc351128-6332-4d15-8386-181513b6dd25";
pub const SCREEN_RANGE: &str = "c68d3670-c761-4877-9b74-2c462dab1b2d";
pub const BASIC_EXCLUDES_GPS: &str = "6cfe4e49-4d5b-43be-b239-39335afbf725";
pub const OPTIONAL_MEDIA_AGAIN: &str = "86c92ef3-ab59-495d-97ca-befc30224e82";
// Shares SCREEN_RANGE's id on purpose.
pub const MEDIA_OR: &str = "c68d3670-c761-4877-9b74-2c462dab1b2d";

/// Parse one of the fixture id constants.
pub fn id(token: &str) -> ComponentId {
    ComponentId::parse(token).expect("fixture id token")
}

/// Build a standalone node with the given fixture id and name.
pub fn named_node(token: &str, name: &str) -> Rc<Node> {
    Rc::new(Node::new(attrs! { "id" => id(token), "name" => name }).expect("fixture node"))
}

/// Build a connection between nodes already present in `graph`.
pub fn connect(
    graph: &MGraph,
    connection_id: &str,
    kind: &str,
    source: &str,
    destinations: &[&str],
) -> Rc<Connection> {
    let source = graph.get_node(id(source)).expect("fixture source").clone();
    let destinations: Vec<Rc<Node>> = destinations
        .iter()
        .map(|token| graph.get_node(id(token)).expect("fixture destination").clone())
        .collect();

    Rc::new(
        Connection::new(attrs! {
            "id" => id(connection_id),
            "type" => kind,
            "source" => source,
            "destinations" => destinations,
        })
        .expect("fixture connection"),
    )
}

/// The mobile-phone feature model.
pub fn mobile_phone_model() -> MGraph {
    let mut graph = MGraph::new();

    for (token, name) in [
        (MOBILE_PHONE, "Mobile Phone"),
        (CALLS, "Calls"),
        (GPS, "GPS"),
        (SCREEN, "Screen"),
        (BASIC, "Basic"),
        (COLOR, "Color"),
        (HIGH_RESOLUTION, "High Resolution"),
        (MEDIA, "Media"),
        (CAMERA, "Camera"),
        (MP3, "MP3"),
    ] {
        graph.add_node(named_node(token, name));
    }

    let mandatory_calls = connect(&graph, MANDATORY_CALLS, "mandatory", CALLS, &[CALLS]);
    graph.add_connection(mandatory_calls);

    let optional_gps = connect(&graph, OPTIONAL_GPS, "optional", MOBILE_PHONE, &[GPS]);
    graph.add_connection(optional_gps);

    let mandatory_screen = connect(
        &graph,
        MANDATORY_SCREEN,
        "mandatory",
        MOBILE_PHONE,
        &[SCREEN],
    );
    graph.add_connection(mandatory_screen);

    let optional_media = connect(&graph, OPTIONAL_MEDIA, "optional", MOBILE_PHONE, &[MEDIA]);
    graph.add_connection(optional_media);

    let screen_range = {
        let source = graph.get_node(id(SCREEN)).expect("fixture source").clone();
        let destinations: Vec<Rc<Node>> = [SCREEN, BASIC, COLOR]
            .iter()
            .map(|token| graph.get_node(id(token)).expect("fixture destination").clone())
            .collect();
        Rc::new(
            Connection::new(attrs! {
                "id" => id(SCREEN_RANGE),
                "type" => "range",
                "minimum" => 1i64,
                "maximum" => 1i64,
                "source" => source,
                "destinations" => destinations,
            })
            .expect("fixture connection"),
        )
    };
    graph.add_connection(screen_range);

    let excludes = connect(&graph, BASIC_EXCLUDES_GPS, "excludes", BASIC, &[GPS]);
    graph.add_connection(excludes);

    let optional_media_again = connect(
        &graph,
        OPTIONAL_MEDIA_AGAIN,
        "optional",
        MOBILE_PHONE,
        &[MEDIA],
    );
    graph.add_connection(optional_media_again);

    let media_or = connect(&graph, MEDIA_OR, "or", MEDIA, &[CAMERA, MP3]);
    graph.add_connection(media_or);

    graph
}

/// A standalone connection context: a source node carrying `value`, five
/// anonymous destinations.
pub fn connection_context(value: Value) -> Component {
    let mut source_attrs = attrs! { "id" => ComponentId::random() };
    source_attrs.insert("value".to_string(), value);
    let source = Rc::new(Node::new(source_attrs).expect("fixture node"));

    let destinations: Vec<Rc<Node>> = (0..5)
        .map(|_| {
            Rc::new(Node::new(attrs! { "id" => ComponentId::random() }).expect("fixture node"))
        })
        .collect();

    Component::from(Rc::new(
        Connection::new(attrs! {
            "id" => ComponentId::random(),
            "source" => source,
            "destinations" => destinations,
        })
        .expect("fixture connection"),
    ))
}

/// A standalone node context with a random id.
pub fn node_context() -> Component {
    Component::from(Rc::new(
        Node::new(attrs! { "id" => ComponentId::random() }).expect("fixture node"),
    ))
}
