//! Regions: named containers of nodes and elements.

use nalgebra::Point3;

use crate::{Element, ElementId, ElementShape, Node, NodeId, RegionError, RegionResult};

/// A named container of nodes and elements.
///
/// Nodes keep their creation order, which is also the order coordinates are
/// read back in. Identifiers are allocated monotonically starting at 1 and are
/// never handed out twice, so stale identifiers held by collaborators can never
/// alias a newer node.
///
/// New geometry is only ever created through a [`ChangeScope`], so no reader
/// can observe an element whose nodes are still missing.
#[derive(Debug, Clone)]
pub struct Region {
    name: String,
    nodes: Vec<Node>,
    elements: Vec<Element>,
    next_node_id: u32,
    next_element_id: u32,
}

impl Region {
    /// Create an empty region.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            elements: Vec::new(),
            next_node_id: 1,
            next_element_id: 1,
        }
    }

    /// Region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Elements in creation order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the region holds neither nodes nor elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.elements.is_empty()
    }

    /// Look up a node by identifier.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up an element by identifier.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Coordinate field values of all nodes, in creation order.
    #[must_use]
    pub fn node_positions(&self) -> Vec<Point3<f64>> {
        self.nodes.iter().map(|n| n.position).collect()
    }

    /// Coordinates of an element's nodes in local node order.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownNode`] if the element references a node
    /// that no longer exists.
    pub fn element_positions(&self, element: &Element) -> RegionResult<Vec<Point3<f64>>> {
        element
            .nodes
            .iter()
            .map(|&id| {
                self.node(id)
                    .map(|n| n.position)
                    .ok_or(RegionError::UnknownNode(id))
            })
            .collect()
    }

    /// Reassign the coordinate field value of an existing node.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownNode`] if `id` is not in the region.
    pub fn assign_node(&mut self, id: NodeId, position: Point3<f64>) -> RegionResult<()> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(RegionError::UnknownNode(id))?;
        node.position = position;
        Ok(())
    }

    /// Destroy every element. Returns how many were destroyed.
    pub fn destroy_all_elements(&mut self) -> usize {
        let count = self.elements.len();
        self.elements.clear();
        count
    }

    /// Destroy every node. Returns how many were destroyed.
    ///
    /// Elements cannot outlive their nodes, so they are destroyed first.
    pub fn destroy_all_nodes(&mut self) -> usize {
        self.destroy_all_elements();
        let count = self.nodes.len();
        self.nodes.clear();
        count
    }

    /// Destroy all elements, then all nodes.
    pub fn clear(&mut self) {
        self.destroy_all_nodes();
    }

    /// Open a change scope for staged edits.
    ///
    /// Nothing staged in the scope is visible in the region until
    /// [`ChangeScope::commit`] is called. Dropping the scope discards the edits.
    pub fn change(&mut self) -> ChangeScope<'_> {
        let next_node_id = self.next_node_id;
        let next_element_id = self.next_element_id;
        ChangeScope {
            region: self,
            nodes: Vec::new(),
            elements: Vec::new(),
            next_node_id,
            next_element_id,
        }
    }

    fn has_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }
}

/// Staged edits to a [`Region`], applied together on commit.
///
/// # Example
///
/// ```
/// use autoseg_types::{Point3, Region};
///
/// let mut region = Region::new("output");
/// {
///     let mut scope = region.change();
///     scope.create_node(Point3::origin());
///     // dropped without commit: nothing happens
/// }
/// assert_eq!(region.node_count(), 0);
/// ```
#[derive(Debug)]
#[must_use = "staged edits are discarded unless committed"]
pub struct ChangeScope<'a> {
    region: &'a mut Region,
    nodes: Vec<Node>,
    elements: Vec<Element>,
    next_node_id: u32,
    next_element_id: u32,
}

impl ChangeScope<'_> {
    /// Stage a new node and return its identifier.
    pub fn create_node(&mut self, position: Point3<f64>) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node::new(id, position));
        id
    }

    /// Stage one node per position, returning identifiers in the same order.
    pub fn create_nodes(&mut self, positions: &[Point3<f64>]) -> Vec<NodeId> {
        positions.iter().map(|&p| self.create_node(p)).collect()
    }

    /// Stage a new element over existing or staged nodes.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::WrongNodeCount`] if `nodes` does not match the
    /// shape, or [`RegionError::UnknownNode`] if a node does not exist.
    pub fn create_element(
        &mut self,
        shape: ElementShape,
        nodes: &[NodeId],
    ) -> RegionResult<ElementId> {
        if nodes.len() != shape.node_count() {
            return Err(RegionError::wrong_node_count(shape, nodes.len()));
        }
        if let Some(&missing) = nodes
            .iter()
            .find(|&&id| !self.region.has_node(id) && !self.nodes.iter().any(|n| n.id == id))
        {
            return Err(RegionError::UnknownNode(missing));
        }

        let id = ElementId(self.next_element_id);
        self.next_element_id += 1;
        self.elements.push(Element {
            id,
            shape,
            nodes: nodes.to_vec(),
        });
        Ok(id)
    }

    /// Number of nodes staged so far.
    #[must_use]
    pub fn staged_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Apply all staged edits to the region.
    pub fn commit(self) {
        let ChangeScope {
            region,
            nodes,
            elements,
            next_node_id,
            next_element_id,
        } = self;
        region.nodes.extend(nodes);
        region.elements.extend(elements);
        region.next_node_id = next_node_id;
        region.next_element_id = next_element_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square_region() -> (Region, ElementId) {
        let mut region = Region::new("detection");
        let mut scope = region.change();
        let ids = scope.create_nodes(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ]);
        let element = scope.create_element(ElementShape::Square, &ids).unwrap();
        scope.commit();
        (region, element)
    }

    #[test]
    fn commit_applies_staged_edits() {
        let (region, element) = square_region();
        assert_eq!(region.node_count(), 4);
        assert_eq!(region.element_count(), 1);
        assert_eq!(region.element(element).map(|e| e.shape), Some(ElementShape::Square));
    }

    #[test]
    fn dropped_scope_is_discarded() {
        let mut region = Region::new("output");
        {
            let mut scope = region.change();
            scope.create_node(Point3::origin());
            assert_eq!(scope.staged_node_count(), 1);
        }
        assert!(region.is_empty());

        // Ids from the discarded scope were never committed, so they are reused.
        let mut scope = region.change();
        let id = scope.create_node(Point3::origin());
        scope.commit();
        assert_eq!(id, NodeId(1));
    }

    #[test]
    fn ids_are_never_reused_after_destroy() {
        let (mut region, _) = square_region();
        assert_eq!(region.destroy_all_nodes(), 4);
        assert!(region.is_empty());

        let mut scope = region.change();
        let id = scope.create_node(Point3::origin());
        scope.commit();
        assert_eq!(id, NodeId(5));
    }

    #[test]
    fn destroying_nodes_destroys_elements() {
        let (mut region, _) = square_region();
        region.destroy_all_nodes();
        assert_eq!(region.element_count(), 0);
    }

    #[test]
    fn wrong_node_count_rejected() {
        let mut region = Region::new("mesh");
        let mut scope = region.change();
        let a = scope.create_node(Point3::origin());
        let result = scope.create_element(ElementShape::Cube, &[a]);
        assert!(matches!(
            result,
            Err(RegionError::WrongNodeCount { expected: 8, actual: 1, .. })
        ));
    }

    #[test]
    fn unknown_node_rejected() {
        let mut region = Region::new("mesh");
        let mut scope = region.change();
        let ids = [NodeId(1), NodeId(2), NodeId(3), NodeId(4)];
        let result = scope.create_element(ElementShape::Square, &ids);
        assert!(matches!(result, Err(RegionError::UnknownNode(NodeId(1)))));
    }

    #[test]
    fn assign_node_in_place() {
        let (mut region, element) = square_region();
        region.assign_node(NodeId(2), Point3::new(5.0, 0.0, 0.0)).unwrap();

        let element = region.element(element).cloned().unwrap();
        let positions = region.element_positions(&element).unwrap();
        assert_relative_eq!(positions[1].x, 5.0);
        assert!(region.assign_node(NodeId(99), Point3::origin()).is_err());
    }

    #[test]
    fn positions_in_creation_order() {
        let (region, _) = square_region();
        let positions = region.node_positions();
        assert_relative_eq!(positions[0].x, 0.0);
        assert_relative_eq!(positions[3].y, 1.0);
        assert_eq!(region.name(), "detection");
    }
}
