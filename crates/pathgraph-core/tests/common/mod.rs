//! Shared road-network fixture for integration tests.
//!
//! Junctions carry planar coordinates in km; roads are one-directional
//! segments whose length is at least the straight-line distance between
//! their junctions, so straight-line distance is an admissible heuristic.

#![allow(dead_code)]

use pathgraph_core::graph::{DirectedGraph, Edge, Vertex};
use std::sync::Arc;

#[derive(Debug)]
pub struct Junction {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Junction {
    pub fn new(name: &str, x: f64, y: f64) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            x,
            y,
        })
    }

    pub fn distance_to(&self, other: &Junction) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Vertex for Junction {
    fn id(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
pub struct Road {
    pub from: Arc<Junction>,
    pub to: Arc<Junction>,
    pub length: f64,
    pub max_speed: f64,
}

impl Road {
    /// Road along the straight line, stretched by `detour` (>= 1.0).
    pub fn new(from: &Arc<Junction>, to: &Arc<Junction>, detour: f64, max_speed: f64) -> Arc<Self> {
        Arc::new(Self {
            from: Arc::clone(from),
            to: Arc::clone(to),
            length: from.distance_to(to) * detour,
            max_speed,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Travel time in hours.
    pub fn travel_time(&self) -> f64 {
        self.length / self.max_speed
    }
}

impl Edge for Road {
    type Vertex = Junction;

    fn from(&self) -> &Arc<Junction> {
        &self.from
    }

    fn to(&self) -> &Arc<Junction> {
        &self.to
    }
}

pub type RoadMap = DirectedGraph<Junction, Road>;

/// Straight-line distance heuristic.
pub fn crow_flight(from: &Junction, to: &Junction) -> f64 {
    from.distance_to(to)
}

/// Adds roads in both directions between two junctions.
pub fn two_way(map: &mut RoadMap, from: &Arc<Junction>, to: &Arc<Junction>, detour: f64, max_speed: f64) {
    map.add_or_get_edge(Road::new(from, to, detour, max_speed))
        .expect("consistent junctions");
    map.add_or_get_edge(Road::new(to, from, detour, max_speed))
        .expect("consistent junctions");
}

/// A small grid-like region with a fast ring road and a slow direct route.
///
/// ```text
///  NW ---- N ---- NE
///  |       |       |
///  W ----- C ----- E
///  |       |       |
///  SW ---- S ---- SE          ISLAND (no roads)
/// ```
pub fn build_region() -> RoadMap {
    let mut map = RoadMap::new();
    let nw = map.add_or_get_vertex(Junction::new("NW", 0.0, 20.0));
    let n = map.add_or_get_vertex(Junction::new("N", 10.0, 20.0));
    let ne = map.add_or_get_vertex(Junction::new("NE", 20.0, 20.0));
    let w = map.add_or_get_vertex(Junction::new("W", 0.0, 10.0));
    let c = map.add_or_get_vertex(Junction::new("C", 10.0, 10.0));
    let e = map.add_or_get_vertex(Junction::new("E", 20.0, 10.0));
    let sw = map.add_or_get_vertex(Junction::new("SW", 0.0, 0.0));
    let s = map.add_or_get_vertex(Junction::new("S", 10.0, 0.0));
    let se = map.add_or_get_vertex(Junction::new("SE", 20.0, 0.0));
    map.add_or_get_vertex(Junction::new("ISLAND", 50.0, 50.0));

    // Ring road: fast.
    for (a, b) in [(&nw, &n), (&n, &ne), (&ne, &e), (&e, &se), (&se, &s), (&s, &sw), (&sw, &w), (&w, &nw)] {
        two_way(&mut map, a, b, 1.0, 100.0);
    }
    // Spokes into the centre: slow and winding.
    for spoke in [&n, &e, &s, &w] {
        two_way(&mut map, &c, spoke, 1.2, 30.0);
    }
    map
}
