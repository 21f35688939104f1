use strata::graphlib::{GraphError, LayoutGraph, LayoutVertex, VertexId};
use strata::{LayersError, LayoutVertexLayers, RelativeLocation};

fn vertex(g: &mut LayoutGraph, name: &str) -> VertexId {
    g.add_vertex(LayoutVertex::new(name)).unwrap()
}

fn loc(layer_index: usize, index_in_layer: usize) -> RelativeLocation {
    RelativeLocation::new(layer_index, index_in_layer)
}

fn layer_content(layers: &LayoutVertexLayers, index: usize) -> Vec<VertexId> {
    layers.layer(index).unwrap().iter().collect()
}

#[test]
fn add_vertex_places_vertex_and_clears_floating() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let mut layers = LayoutVertexLayers::new();

    layers.add_vertex(&mut g, a, loc(0, 0)).unwrap();

    assert_eq!(layers.location(a), Some(loc(0, 0)));
    assert_eq!(layers.layer_index(a), Some(0));
    assert!(!g.vertex(a).unwrap().is_floating());
}

#[test]
fn add_vertex_lazily_creates_layers_up_to_the_target() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let mut layers = LayoutVertexLayers::new();

    layers.add_vertex(&mut g, a, loc(2, 0)).unwrap();

    assert_eq!(layers.len(), 3);
    assert!(layers.layer(0).unwrap().is_empty());
    assert!(layers.layer(1).unwrap().is_empty());
    assert_eq!(layer_content(&layers, 2), vec![a]);
}

#[test]
fn add_vertex_shifts_later_entries() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let b = vertex(&mut g, "B");
    let c = vertex(&mut g, "C");
    let mut layers = LayoutVertexLayers::new();

    layers.add_vertex(&mut g, a, loc(0, 0)).unwrap();
    layers.add_vertex(&mut g, b, loc(0, 1)).unwrap();
    layers.add_vertex(&mut g, c, loc(0, 0)).unwrap();

    assert_eq!(layer_content(&layers, 0), vec![c, a, b]);
    assert_eq!(layers.index_in_layer(a).unwrap(), 1);
    assert_eq!(layers.location(b), Some(loc(0, 2)));
}

#[test]
fn add_vertex_rejects_non_contiguous_index() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let mut layers = LayoutVertexLayers::new();

    let err = layers.add_vertex(&mut g, a, loc(0, 1)).unwrap_err();

    assert_eq!(
        err,
        LayersError::InvalidLocation {
            location: loc(0, 1),
            layer_len: 0,
        }
    );
    assert_eq!(layers.location(a), None);
    assert!(g.vertex(a).unwrap().is_floating());
}

#[test]
fn add_vertex_twice_fails() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let mut layers = LayoutVertexLayers::new();
    layers.add_vertex(&mut g, a, loc(1, 0)).unwrap();

    let err = layers.add_vertex(&mut g, a, loc(0, 0)).unwrap_err();

    assert_eq!(
        err,
        LayersError::AlreadyPlaced {
            vertex: a,
            location: loc(1, 0),
        }
    );
    assert_eq!(layers.location(a), Some(loc(1, 0)));
}

#[test]
fn add_vertex_unknown_to_the_graph_fails() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    g.remove_vertex(a).unwrap();
    let mut layers = LayoutVertexLayers::new();

    let err = layers.add_vertex(&mut g, a, loc(0, 0)).unwrap_err();

    assert_eq!(err, LayersError::Graph(GraphError::MissingVertex(a)));
    assert_eq!(layers.location(a), None);
}

#[test]
fn add_then_remove_restores_prior_layer_content() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let b = vertex(&mut g, "B");
    let mut layers = LayoutVertexLayers::new();
    layers.add_vertex(&mut g, a, loc(0, 0)).unwrap();

    layers.add_vertex(&mut g, b, loc(0, 0)).unwrap();
    let vacated = layers.remove_vertex(b).unwrap();

    assert_eq!(vacated, loc(0, 0));
    assert_eq!(layer_content(&layers, 0), vec![a]);
    assert_eq!(layers.location(b), None);
    assert_eq!(layers.location(a), Some(loc(0, 0)));
}

#[test]
fn remove_vertex_without_location_fails() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let mut layers = LayoutVertexLayers::new();

    assert_eq!(layers.remove_vertex(a), Err(LayersError::NotPlaced(a)));
}

#[test]
fn require_location_fails_for_unplaced_vertex() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let layers = LayoutVertexLayers::new();

    assert_eq!(layers.location(a), None);
    assert_eq!(layers.layer_index(a), None);
    assert_eq!(layers.require_location(a), Err(LayersError::NotPlaced(a)));
    assert_eq!(
        layers.require_layer_index(a),
        Err(LayersError::NotPlaced(a))
    );
    assert_eq!(layers.index_in_layer(a), Err(LayersError::NotPlaced(a)));
}

#[test]
fn ensure_layer_materializes_intermediate_layers() {
    let mut layers = LayoutVertexLayers::new();

    let layer = layers.ensure_layer(3);

    assert_eq!(layer.layer_index(), 3);
    assert_eq!(layers.len(), 4);
    assert!(layers.iter().all(|l| l.is_empty()));
    // Existing layers are kept as-is on repeated calls.
    layers.ensure_layer(1);
    assert_eq!(layers.len(), 4);
}

#[test]
fn previous_and_next_in_layer_stop_at_the_boundary() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let b = vertex(&mut g, "B");
    let c = vertex(&mut g, "C");
    let mut layers = LayoutVertexLayers::new();
    layers.add_vertex(&mut g, a, loc(0, 0)).unwrap();
    layers.add_vertex(&mut g, b, loc(0, 1)).unwrap();
    layers.add_vertex(&mut g, c, loc(0, 2)).unwrap();

    assert_eq!(layers.previous_in_layer(a).unwrap(), None);
    assert_eq!(layers.next_in_layer(a).unwrap(), Some(b));
    assert_eq!(layers.previous_in_layer(c).unwrap(), Some(b));
    assert_eq!(layers.next_in_layer(c).unwrap(), None);
}

#[test]
fn other_placed_vertices_excludes_self_and_floating() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let b = vertex(&mut g, "B");
    let c = vertex(&mut g, "C");
    let mut layers = LayoutVertexLayers::new();
    layers.add_vertex(&mut g, a, loc(0, 0)).unwrap();
    layers.add_vertex(&mut g, b, loc(0, 1)).unwrap();
    layers.add_vertex(&mut g, c, loc(0, 2)).unwrap();

    // B is being re-placed: it floats again until the algorithm settles it.
    g.vertex_mut(b).unwrap().set_floating(true);

    assert_eq!(
        layers.other_placed_vertices_in_layer(&g, a).unwrap(),
        vec![c]
    );
    assert_eq!(
        layers.other_placed_vertices_in_layer(&g, c).unwrap(),
        vec![a]
    );
}

#[test]
fn update_layer_vertical_positions_sweeps_top_to_bottom() {
    let mut layers = LayoutVertexLayers::new();
    layers.ensure_layer(2);
    layers.ensure_layer(0).set_height(10.0);
    layers.ensure_layer(1).set_height(20.0);
    layers.ensure_layer(2).set_height(15.0);

    layers.update_layer_vertical_positions(5.0);

    let tops: Vec<f64> = layers.iter().map(|l| l.top()).collect();
    let bottoms: Vec<f64> = layers.iter().map(|l| l.bottom()).collect();
    assert_eq!(tops, vec![0.0, 15.0, 40.0]);
    assert_eq!(bottoms, vec![10.0, 35.0, 55.0]);
}

#[test]
fn update_layer_vertical_positions_on_empty_collection_is_a_no_op() {
    let mut layers = LayoutVertexLayers::new();
    layers.update_layer_vertical_positions(5.0);
    assert!(layers.is_empty());
}

#[test]
fn clear_resets_layers_and_locations() {
    let mut g = LayoutGraph::new();
    let a = vertex(&mut g, "A");
    let mut layers = LayoutVertexLayers::new();
    layers.add_vertex(&mut g, a, loc(0, 0)).unwrap();

    layers.clear();

    assert!(layers.is_empty());
    assert_eq!(layers.location(a), None);
}

#[test]
fn relative_location_orders_by_layer_then_index() {
    assert!(loc(0, 5) < loc(1, 0));
    assert!(loc(1, 0) < loc(1, 1));
    assert_eq!(loc(2, 3).to_string(), "(2, 3)");
}
