// file: src/models/graph.rs
// description: per-sentence dependency graph with tree, CoNLL and triple views
// reference: CoNLL-X column layout (ID FORM LEMMA CPOSTAG POSTAG FEATS HEAD DEPREL)

use crate::error::{DepParseError, Result};
use crate::models::tree::{Tree, TreeChild};
use crate::models::triple::{DependencyTriple, TaggedWord};
use crate::utils::Validator;
use serde::Serialize;

pub const TOP_TAG: &str = "TOP";
pub const ROOT_RELATION: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub address: usize,
    pub word: String,
    pub lemma: String,
    pub ctag: String,
    pub tag: String,
    pub feats: String,
    pub head: usize,
    pub rel: String,
    #[serde(skip)]
    dependents: Vec<usize>,
}

impl Node {
    #[allow(clippy::too_many_arguments)]
    pub fn token(
        address: usize,
        word: impl Into<String>,
        lemma: impl Into<String>,
        ctag: impl Into<String>,
        tag: impl Into<String>,
        feats: impl Into<String>,
        head: usize,
        rel: impl Into<String>,
    ) -> Self {
        Self {
            address,
            word: word.into(),
            lemma: lemma.into(),
            ctag: ctag.into(),
            tag: tag.into(),
            feats: feats.into(),
            head,
            rel: rel.into(),
            dependents: Vec::new(),
        }
    }

    fn top() -> Self {
        Self::token(0, "", "", TOP_TAG, TOP_TAG, "", 0, "")
    }

    pub fn dependents(&self) -> &[usize] {
        &self.dependents
    }

    fn tagged(&self) -> TaggedWord {
        TaggedWord::new(self.word.clone(), self.ctag.clone())
    }
}

/// Parse of one sentence. Address 0 is the artificial top node; tokens
/// occupy addresses `1..=len()` in sentence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl DependencyGraph {
    /// Builds the graph from tokens listed in address order.
    pub fn from_tokens(tokens: Vec<Node>) -> Result<Self> {
        let len = tokens.len();
        let mut nodes = Vec::with_capacity(len + 1);
        nodes.push(Node::top());

        for (index, token) in tokens.into_iter().enumerate() {
            if token.address != index + 1 {
                return Err(DepParseError::Conll {
                    line: index + 1,
                    message: format!(
                        "expected token address {}, found {}",
                        index + 1,
                        token.address
                    ),
                });
            }
            if token.head > len {
                return Err(DepParseError::Conll {
                    line: index + 1,
                    message: format!("head {} is outside the sentence", token.head),
                });
            }
            nodes.push(token);
        }

        for address in 1..nodes.len() {
            let head = nodes[address].head;
            nodes[head].dependents.push(address);
        }

        let top_dependents = &nodes[0].dependents;
        let root = top_dependents
            .iter()
            .copied()
            .find(|&address| nodes[address].rel.eq_ignore_ascii_case(ROOT_RELATION))
            .or_else(|| top_dependents.first().copied());

        Ok(Self { nodes, root })
    }

    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.map(|address| &self.nodes[address])
    }

    pub fn get_by_address(&self, address: usize) -> Option<&Node> {
        self.nodes.get(address)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().skip(1)
    }

    pub fn words(&self) -> Vec<&str> {
        self.tokens().map(|node| node.word.as_str()).collect()
    }

    pub fn tree(&self) -> Option<Tree> {
        let root = self.root()?;
        Some(Tree::new(
            root.word.clone(),
            root.dependents.iter().map(|&dep| self.subtree(dep)).collect(),
        ))
    }

    fn subtree(&self, address: usize) -> TreeChild {
        let node = &self.nodes[address];
        if node.dependents.is_empty() {
            TreeChild::Leaf(node.word.clone())
        } else {
            TreeChild::Node(Tree::new(
                node.word.clone(),
                node.dependents.iter().map(|&dep| self.subtree(dep)).collect(),
            ))
        }
    }

    /// Tabular rendering; style 3 is word/tag/head, 4 adds the relation,
    /// 10 is the full CoNLL-X row.
    pub fn to_conll(&self, style: usize) -> Result<String> {
        Validator::validate_conll_style(style)?;

        let mut out = String::new();
        for node in self.tokens() {
            let line = match style {
                3 => format!("{}\t{}\t{}\n", node.word, node.tag, node.head),
                4 => format!("{}\t{}\t{}\t{}\n", node.word, node.tag, node.head, node.rel),
                _ => format!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t_\t_\n",
                    node.address,
                    node.word,
                    node.lemma,
                    node.ctag,
                    node.tag,
                    node.feats,
                    node.head,
                    node.rel
                ),
            };
            out.push_str(&line);
        }
        Ok(out)
    }

    /// Depth-first from the root: each dependent's triple comes before the
    /// triples of its own subtree, siblings in address order.
    pub fn triples(&self) -> Triples<'_> {
        Triples {
            graph: self,
            stack: self.root.map(|root| vec![(root, 0)]).unwrap_or_default(),
        }
    }
}

pub struct Triples<'a> {
    graph: &'a DependencyGraph,
    stack: Vec<(usize, usize)>,
}

impl Iterator for Triples<'_> {
    type Item = DependencyTriple;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (head, position) = self.stack.last_mut()?;
            let head_node = &self.graph.nodes[*head];
            match head_node.dependents.get(*position) {
                Some(&dep) => {
                    *position += 1;
                    let dep_node = &self.graph.nodes[dep];
                    self.stack.push((dep, 0));
                    return Some(DependencyTriple {
                        head: head_node.tagged(),
                        relation: dep_node.rel.clone(),
                        dependent: dep_node.tagged(),
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(address: usize, word: &str, tag: &str, head: usize, rel: &str) -> Node {
        Node::token(address, word, "_", tag, tag, "_", head, rel)
    }

    fn she_has_two_rooms() -> DependencyGraph {
        DependencyGraph::from_tokens(vec![
            token(1, "She", "PRP", 2, "nsubj"),
            token(2, "has", "VBZ", 0, "root"),
            token(3, "two", "CD", 4, "nummod"),
            token(4, "rooms", "NNS", 2, "dobj"),
        ])
        .unwrap()
    }

    #[test]
    fn test_root_and_dependents() {
        let graph = she_has_two_rooms();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.root().unwrap().word, "has");
        assert_eq!(graph.get_by_address(2).unwrap().dependents(), &[1, 4]);
        assert_eq!(graph.words(), vec!["She", "has", "two", "rooms"]);
    }

    #[test]
    fn test_tree() {
        let tree = she_has_two_rooms().tree().unwrap();
        assert_eq!(tree.to_string(), "(has She (rooms two))");
    }

    #[test]
    fn test_conll_styles() {
        let graph = she_has_two_rooms();
        assert_eq!(
            graph.to_conll(4).unwrap(),
            "She\tPRP\t2\tnsubj\nhas\tVBZ\t0\troot\ntwo\tCD\t4\tnummod\nrooms\tNNS\t2\tdobj\n"
        );
        assert_eq!(graph.to_conll(3).unwrap().lines().next(), Some("She\tPRP\t2"));
        assert_eq!(
            graph.to_conll(10).unwrap().lines().nth(1),
            Some("2\thas\t_\tVBZ\tVBZ\t_\t0\troot\t_\t_")
        );
        assert!(graph.to_conll(5).is_err());
    }

    #[test]
    fn test_triples_depth_first() {
        let rendered: Vec<String> = she_has_two_rooms()
            .triples()
            .map(|triple| triple.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                r#"(("has", "VBZ"), "nsubj", ("She", "PRP"))"#,
                r#"(("has", "VBZ"), "dobj", ("rooms", "NNS"))"#,
                r#"(("rooms", "NNS"), "nummod", ("two", "CD"))"#,
            ]
        );
    }

    #[test]
    fn test_single_word_has_no_triples() {
        let graph =
            DependencyGraph::from_tokens(vec![token(1, "Hello", "UH", 0, "root")]).unwrap();
        assert_eq!(graph.triples().count(), 0);
        assert_eq!(graph.tree().unwrap().to_string(), "(Hello )");
    }

    #[test]
    fn test_empty_graph() {
        let graph = DependencyGraph::from_tokens(vec![]).unwrap();
        assert!(graph.is_empty());
        assert!(graph.root().is_none());
        assert!(graph.tree().is_none());
        assert_eq!(graph.triples().count(), 0);
        assert_eq!(graph.to_conll(4).unwrap(), "");
    }

    #[test]
    fn test_rejects_out_of_range_head() {
        let result = DependencyGraph::from_tokens(vec![token(1, "Hi", "UH", 3, "dep")]);
        assert!(matches!(result, Err(DepParseError::Conll { line: 1, .. })));
    }

    #[test]
    fn test_rejects_address_gap() {
        let result = DependencyGraph::from_tokens(vec![
            token(1, "He", "PRP", 2, "nsubj"),
            token(3, "hit", "VBD", 0, "root"),
        ]);
        assert!(matches!(result, Err(DepParseError::Conll { line: 2, .. })));
    }
}
