use super::*;

/// Renders a Graphviz `dot` digraph for `--digraph`, matching the reference
/// tool's `apply_digraph`/`print_digraph_node` styling conventions.
pub(crate) struct Digraph;

impl Digraph {
  pub(crate) fn render(nodes: &BTreeSet<String>, edges: &[(String, String)]) -> String {
    let mut output = String::new();
    output.push_str("digraph deptree {\n");
    output.push_str("\tnode [fontname=Sans fontsize=8];\n");

    for node in nodes {
      output.push_str(&format!("\t\"{node}\";\n"));
    }

    for (from, to) in edges {
      output.push_str(&format!("\t\"{from}\" -> \"{to}\" [color=blue];\n"));
    }

    output.push_str("}\n");
    output
  }
}
