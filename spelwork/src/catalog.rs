//! Domain, resource and flow records.
//!
//! Plain keyed stores with no scoring of their own; lattices reference what
//! they hold.

use chrono::Utc;
use std::collections::HashMap;
use tracing::debug;

use crate::types::{
    Domain, FlowEdge, FlowEdgeKind, FlowNode, FlowNodeKind, Position, Resource, ResourceKind,
};

fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Inputs for a new domain.
#[derive(Debug, Clone, Default)]
pub struct NewDomain {
    pub name: String,
    pub boundaries: Vec<String>,
    pub expertise: Vec<String>,
    pub controls: Vec<String>,
    pub context: HashMap<String, serde_json::Value>,
}

/// Store of expertise domains.
#[derive(Debug, Default)]
pub struct DomainManager {
    domains: HashMap<String, Domain>,
}

impl DomainManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a domain.
    pub fn create_domain(&mut self, params: NewDomain) -> Domain {
        let now = Utc::now();
        let domain = Domain {
            id: generate_id("domain"),
            name: params.name,
            boundaries: params.boundaries,
            expertise: params.expertise,
            controls: params.controls,
            context: params.context,
            created: now,
            updated: now,
        };

        debug!(domain_id = %domain.id, name = %domain.name, "Created domain");
        self.domains.insert(domain.id.clone(), domain.clone());
        domain
    }

    pub fn get_domain(&self, id: &str) -> Option<&Domain> {
        self.domains.get(id)
    }

    pub fn all_domains(&self) -> Vec<&Domain> {
        self.domains.values().collect()
    }
}

/// Inputs for a new resource.
#[derive(Debug, Clone)]
pub struct NewResource {
    pub name: String,
    pub kind: ResourceKind,
    pub availability: f32,
    pub capacity: f64,
    pub quality: f32,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Store of organizational resources.
#[derive(Debug, Default)]
pub struct ResourceManager {
    resources: HashMap<String, Resource>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resource.
    pub fn create_resource(&mut self, params: NewResource) -> Resource {
        let now = Utc::now();
        let resource = Resource {
            id: generate_id("resource"),
            name: params.name,
            kind: params.kind,
            availability: params.availability,
            capacity: params.capacity,
            quality: params.quality,
            metadata: params.metadata,
            created: now,
            updated: now,
        };

        debug!(resource_id = %resource.id, kind = ?resource.kind, "Created resource");
        self.resources.insert(resource.id.clone(), resource.clone());
        resource
    }

    pub fn get_resource(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn all_resources(&self) -> Vec<&Resource> {
        self.resources.values().collect()
    }

    /// Resources of one kind.
    pub fn resources_by_kind(&self, kind: ResourceKind) -> Vec<&Resource> {
        self.resources.values().filter(|r| r.kind == kind).collect()
    }
}

/// Store of flow nodes and edges.
#[derive(Debug, Default)]
pub struct FlowManager {
    nodes: HashMap<String, FlowNode>,
    edges: HashMap<String, FlowEdge>,
}

impl FlowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node.
    pub fn create_node(
        &mut self,
        kind: FlowNodeKind,
        name: impl Into<String>,
        position: Position,
        properties: HashMap<String, serde_json::Value>,
    ) -> FlowNode {
        let now = Utc::now();
        let node = FlowNode {
            id: generate_id("node"),
            kind,
            name: name.into(),
            position,
            properties,
            created: now,
            updated: now,
        };

        self.nodes.insert(node.id.clone(), node.clone());
        node
    }

    /// Create an edge. Endpoints are not checked against stored nodes.
    pub fn create_edge(
        &mut self,
        kind: FlowEdgeKind,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f32,
        properties: HashMap<String, serde_json::Value>,
    ) -> FlowEdge {
        let now = Utc::now();
        let edge = FlowEdge {
            id: generate_id("edge"),
            kind,
            source: source.into(),
            target: target.into(),
            weight,
            properties,
            created: now,
            updated: now,
        };

        self.edges.insert(edge.id.clone(), edge.clone());
        edge
    }

    pub fn get_node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    pub fn get_edge(&self, id: &str) -> Option<&FlowEdge> {
        self.edges.get(id)
    }

    pub fn all_nodes(&self) -> Vec<&FlowNode> {
        self.nodes.values().collect()
    }

    pub fn all_edges(&self) -> Vec<&FlowEdge> {
        self.edges.values().collect()
    }
}
