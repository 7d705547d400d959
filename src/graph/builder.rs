//! Graph construction from backend records
//!
//! Pure translation stage: every person becomes a node, every relationship
//! whose two endpoints exist becomes an edge plus a source-side adjacency
//! entry. No positioning happens here.

use tracing::debug;

use crate::backend::types::{PersonRecord, RelationshipRecord};
use crate::catalog::RelationshipCatalog;
use crate::graph::types::{AdjacencyEntry, FamilyGraph, GraphEdge, GraphNode};

/// Translate raw records into an unpositioned graph
pub fn build_nodes_and_edges(
    people: &[PersonRecord],
    relationships: &[RelationshipRecord],
    focal_id: &str,
) -> FamilyGraph {
    let mut graph = FamilyGraph::new(focal_id);

    for person in people {
        if graph.has_node(&person.id) {
            debug!(person_id = %person.id, "duplicate person record, keeping first");
            continue;
        }
        graph.add_node(GraphNode {
            id: person.id.clone(),
            display_name: person.display_name().to_string(),
            avatar: person.avatar.clone(),
            role: person.role.clone(),
            is_center: person.id == focal_id,
            ..Default::default()
        });
    }

    for rel in relationships {
        let source_idx = match graph.node_index(&rel.user.id) {
            Some(idx) => idx,
            None => {
                debug!(relationship_id = %rel.id, person_id = %rel.user.id, "edge endpoint missing, skipping");
                continue;
            }
        };
        if !graph.has_node(&rel.with_user) {
            debug!(relationship_id = %rel.id, person_id = %rel.with_user, "edge endpoint missing, skipping");
            continue;
        }

        let descriptor = RelationshipCatalog::resolve(&rel.relation);
        graph.add_edge(GraphEdge {
            id: rel.id.clone(),
            source: rel.user.id.clone(),
            target: rel.with_user.clone(),
            relation: rel.relation.clone(),
            descriptor: descriptor.clone(),
        });
        // Adjacency attaches to the source side only; the reverse person
        // does not get a mirror entry.
        graph.nodes[source_idx].adjacency.push(AdjacencyEntry {
            person_id: rel.with_user.clone(),
            relation: rel.relation.clone(),
            descriptor,
        });
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_person(id: &str) -> PersonRecord {
        PersonRecord {
            id: id.to_string(),
            name: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn make_relationship(id: &str, source: &str, target: &str, relation: &str) -> RelationshipRecord {
        RelationshipRecord {
            id: id.to_string(),
            user: crate::backend::types::RelationParty {
                id: source.to_string(),
            },
            with_user: target.to_string(),
            relation: relation.to_string(),
        }
    }

    #[test]
    fn test_builds_nodes_and_edges() {
        let people = vec![make_person("alice"), make_person("bob")];
        let rels = vec![make_relationship("r1", "alice", "bob", "parent")];
        let graph = build_nodes_and_edges(&people, &rels, "alice");

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source, "alice");
        assert_eq!(graph.edges[0].target, "bob");
        assert!(graph.node("alice").unwrap().is_center);
        assert!(!graph.node("bob").unwrap().is_center);
    }

    #[test]
    fn test_dangling_relationship_is_dropped() {
        let people = vec![make_person("alice")];
        let rels = vec![
            make_relationship("r1", "alice", "ghost", "parent"),
            make_relationship("r2", "ghost", "alice", "child"),
        ];
        let graph = build_nodes_and_edges(&people, &rels, "alice");

        assert_eq!(graph.edges.len(), 0);
        assert!(graph.node("alice").unwrap().adjacency.is_empty());
    }

    #[test]
    fn test_adjacency_is_source_side_only() {
        let people = vec![make_person("alice"), make_person("bob")];
        let rels = vec![make_relationship("r1", "alice", "bob", "sibling")];
        let graph = build_nodes_and_edges(&people, &rels, "alice");

        let alice = graph.node("alice").unwrap();
        assert_eq!(alice.adjacency.len(), 1);
        assert_eq!(alice.adjacency[0].person_id, "bob");
        assert!(graph.node("bob").unwrap().adjacency.is_empty());
    }

    #[test]
    fn test_unknown_relation_gets_generic_descriptor() {
        let people = vec![make_person("alice"), make_person("bob")];
        let rels = vec![make_relationship("r1", "alice", "bob", "step-llama")];
        let graph = build_nodes_and_edges(&people, &rels, "alice");

        assert!(graph.edges[0].descriptor.is_generic());
        assert_eq!(graph.edges[0].relation, "step-llama");
    }

    #[test]
    fn test_duplicate_person_keeps_first() {
        let mut second = make_person("alice");
        second.name = Some("Impostor".to_string());
        let people = vec![make_person("alice"), second];
        let graph = build_nodes_and_edges(&people, &[], "alice");

        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].display_name, "alice");
    }

    #[test]
    fn test_self_relationship_is_kept() {
        let people = vec![make_person("alice")];
        let rels = vec![make_relationship("r1", "alice", "alice", "friend")];
        let graph = build_nodes_and_edges(&people, &rels, "alice");

        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.node("alice").unwrap().adjacency.len(), 1);
    }
}
