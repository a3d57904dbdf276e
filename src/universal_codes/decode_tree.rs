//! Binary trie over a code table, so the decoder advances one edge per input bit instead of comparing the bits read
//! so far against every codeword of the table.
//!
//! Nodes live in a flat vec. The root is node 0, and since the root is never anyone's child, 0 doubles as "no edge".

use log::trace;

use super::code_table::CodeTable;

const NO_EDGE: u32 = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    next: [u32; 2],
    rank: Option<usize>,
}

/// Result of following one bit from a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Part way through a codeword; keep reading from this node.
    Inner(usize),
    /// A codeword is complete and carries this rank.
    Rank(usize),
    /// No codeword of the table starts with these bits.
    Dead,
}

#[derive(Debug, Clone)]
pub struct DecodeTree {
    nodes: Vec<Node>,
}

impl DecodeTree {
    pub const ROOT: usize = 0;

    /// Build the trie. Each leaf is labelled with the rank the method's own decoder reads
    /// from that codeword.
    pub fn new(table: &CodeTable) -> Self {
        let method = table.method();
        let mut nodes = vec![Node::default()];
        for (idx, code) in table.iter().enumerate() {
            let mut node = Self::ROOT;
            for bit in code.iter() {
                debug_assert!(nodes[node].rank.is_none(), "code table is not prefix-free");
                let edge = nodes[node].next[bit as usize];
                node = if edge == NO_EDGE {
                    nodes.push(Node::default());
                    let child = nodes.len() - 1;
                    nodes[node].next[bit as usize] = child as u32;
                    child
                } else {
                    edge as usize
                };
            }
            let rank = method.decode(code).unwrap_or_else(|| table.rank_of(idx));
            debug_assert_eq!(rank, table.rank_of(idx));
            nodes[node].rank = Some(rank);
        }
        trace!("Decode tree for {} codes has {} nodes.", table.len(), nodes.len());
        Self { nodes }
    }

    /// Follow `bit` from `node`.
    #[inline(always)]
    pub fn step(&self, node: usize, bit: bool) -> Step {
        let next = self.nodes[node].next[bit as usize];
        if next == NO_EDGE {
            return Step::Dead;
        }
        match self.nodes[next as usize].rank {
            Some(rank) => Step::Rank(rank),
            None => Step::Inner(next as usize),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
