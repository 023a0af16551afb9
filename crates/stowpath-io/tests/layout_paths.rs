//! Load a layout from disk and route across it.

use std::path::PathBuf;

use serde_json::json;
use stowpath_io::{JsonLayoutLoader, LayoutLoader, load_tasks};
use stowpath_paths::{
    Astar, ConnectivityGraph, Dijkstra, PathFinder, RandomConnectivity, TimeBasedCostCalculator,
};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("stowpath-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Two facing rack faces of 5 columns x 3 shelves.
fn layout_doc() -> serde_json::Value {
    let mut areas = Vec::new();
    for (face, y, front) in [("A01 1", 0.0, "POSITIVE_Y"), ("A01 2", 4.0, "NEGATIVE_Y")] {
        let mut locations = Vec::new();
        for column in 0..5 {
            for shelf in 0..3 {
                let x = column as f64 * 1.2;
                let z = shelf as f64 * 1.5;
                locations.push(json!({
                    "id": format!("{face}/{column}/{shelf}"),
                    "name": format!("{face}-{column:03}-{shelf}0"),
                    "type": "rack",
                    "column": column,
                    "shelf": shelf,
                    "bounds": {
                        "min": {"x": x, "y": y, "z": z},
                        "max": {"x": x + 1.2, "y": y + 1.0, "z": z + 1.2}
                    }
                }));
            }
        }
        areas.push(json!({"id": face, "name": face, "front": front, "locations": locations}));
    }
    json!({ "rack_face_areas": areas })
}

#[test]
fn load_build_and_route() {
    let path = temp_file("layout.json", &layout_doc().to_string());
    let layout = JsonLayoutLoader::new(&path).load().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(layout.len(), 30);
    assert_eq!(layout.rack_faces().count(), 2);
    assert_eq!(layout.keys_by_rack_face("A01 1").len(), 15);
    assert_eq!(layout.keys_by_column("A01 2", 4).len(), 3);

    let mut graph = ConnectivityGraph::build(&layout, &mut RandomConnectivity::seeded(11));
    graph.set_move_cost_calculator(TimeBasedCostCalculator::time_based());
    let (nodes, edges) = graph.compute_graph_size();
    assert_eq!(nodes, 30);
    assert!(edges >= 58);

    let names: Vec<&str> = layout.names().collect();
    let (from, to) = (names[0], names[names.len() - 1]);

    let d = Dijkstra::new().compute_optimal_path(&mut graph, from, to).unwrap();
    assert!(d.is_reachable());
    assert_eq!(d.path.first().map(String::as_str), Some(from));
    assert_eq!(d.path.last().map(String::as_str), Some(to));
    for hop in d.path.windows(2) {
        assert!(graph.get_neighbors(&hop[0]).contains(&hop[1]));
    }

    let cached = graph.move_cost_calculator().unwrap().cache_len();
    assert!(cached > 0);

    let a = Astar::new().compute_optimal_path(&mut graph, from, to).unwrap();
    assert!((a.cost - d.cost).abs() < 1e-9);
}

#[test]
fn tasks_file_round_trip() {
    let path = temp_file(
        "tasks.json",
        r#"[{"location": "A01-000-00", "candidates": "A01-004-20,A01-002-10"}]"#,
    );
    let tasks = load_tasks(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].candidates, ["A01-004-20", "A01-002-10"]);
}

#[test]
fn csv_tasks_file_by_extension() {
    let path = temp_file(
        "tasks.csv",
        "location,reserves\nA01-000-00,\"A01-004-20, A01-002-10\"\nA01-001-00,A01-003-00\n",
    );
    let tasks = load_tasks(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].location, "A01-000-00");
    assert_eq!(tasks[0].candidates, ["A01-004-20", "A01-002-10"]);
    assert_eq!(tasks[1].candidates, ["A01-003-00"]);
}
