use std::fmt::Write;

use super::Subgraph;

impl Subgraph {
    /// Returns Mermaid code of the subgraph
    ///
    /// Children are drawn below their parents (`graph BT`), every edge is
    /// labelled with its relation type. Node backgrounds and edge strokes
    /// use the colors of the [`Node`](super::Node)s and [`Edge`](super::Edge)s.
    ///
    /// Mermaid node ids are `n<index>`, the index of the node in
    /// [`Subgraph::nodes`]. The term id is part of the label.
    ///
    /// # Examples
    ///
    /// ```
    /// use godag::{Ontology, build_subgraph};
    ///
    /// let ontology = Ontology::from_obo("tests/mini_go.obo").unwrap();
    /// let graph = build_subgraph(["GO:0048285"], &ontology);
    ///
    /// // GO:0006996 GO:0008150 GO:0009987 GO:0016043 GO:0048285
    /// let code = graph.as_mermaid();
    /// assert!(code.starts_with("graph BT\n"));
    /// assert!(code.contains("n4[\"GO:0048285<br>organelle fission\"]\n"));
    /// assert!(code.contains("n4 -- is_a --> n0\n"));
    /// assert!(code.contains("style n4 fill:#FFFFFF\n"));
    /// ```
    pub fn as_mermaid(&self) -> String {
        let mut code = String::new();
        code.push_str("graph BT\n");
        for (idx, node) in self.nodes().iter().enumerate() {
            let mut text = escape(node.id().as_str());
            if !node.label().is_empty() {
                text.push_str("<br>");
                text.push_str(&escape(node.label()).replace('\n', "<br>"));
            }
            writeln!(code, "n{}[\"{}\"]", idx, text).ok();
        }
        let mut strokes = Vec::with_capacity(self.edges().len());
        for edge in self.edges() {
            // every edge connects two nodes
            let (Some(from), Some(to)) = (self.position(edge.from()), self.position(edge.to()))
            else {
                continue;
            };
            writeln!(code, "n{} -- {} --> n{}", from, edge.relation(), to).ok();
            strokes.push(edge.color());
        }
        for (idx, node) in self.nodes().iter().enumerate() {
            writeln!(code, "style n{} fill:{}", idx, node.color()).ok();
        }
        for (idx, color) in strokes.iter().enumerate() {
            writeln!(code, "linkStyle {} stroke:{}", idx, color).ok();
        }
        code
    }
}

/// Escapes characters that break Mermaid's HTML labels
fn escape(text: &str) -> String {
    text.replace('"', "#quot;")
        .replace('<', "#lt;")
        .replace('>', "#gt;")
}
