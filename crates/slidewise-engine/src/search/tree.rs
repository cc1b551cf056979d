//! Fixed-depth game tree of alternating move-choice and chance layers.

use slidewise_core::{Board, Direction, SPAWN_TILE};

/// Which side acts at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The player picks a direction; valued by the best child.
    MoveChoice,
    /// A tile appears on an empty cell; valued by the mean of the children.
    Chance,
}

/// One simulated position. Each node owns its board copy and its children.
#[derive(Debug, Clone)]
pub struct Node {
    board: Board,
    score: u64,
    kind: NodeKind,
    direction: Option<Direction>,
    children: Vec<Node>,
}

impl Node {
    /// Create a childless node.
    pub fn new(board: Board, score: u64, kind: NodeKind) -> Node {
        Node {
            board,
            score,
            kind,
            direction: None,
            children: Vec::new(),
        }
    }

    /// Tag the node with the move that produced it.
    pub fn with_direction(mut self, direction: Direction) -> Node {
        self.direction = Some(direction);
        self
    }

    /// Append a child.
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The move that produced this node, `None` for spawn results and the root.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> u64 {
        1 + self.children.iter().map(Node::count).sum::<u64>()
    }

    /// Grow `remaining` more layers below this node.
    ///
    /// Move-choice nodes get one chance child per legal direction, in
    /// ordinal order; directions that leave the board unchanged are pruned.
    /// Chance nodes get one move-choice child per empty cell, holding a
    /// spawned tile, in row-major order.
    fn expand(&mut self, remaining: u8) {
        if remaining == 0 {
            return;
        }

        match self.kind {
            NodeKind::MoveChoice => {
                for dir in Direction::ALL {
                    let outcome = self.board.apply_move(self.score, dir);
                    if outcome.changed {
                        self.children.push(
                            Node::new(outcome.board, outcome.score, NodeKind::Chance)
                                .with_direction(dir),
                        );
                    }
                }
            }
            NodeKind::Chance => {
                for (row, col) in self.board.empty_cells() {
                    self.children.push(Node::new(
                        self.board.with_tile(row, col, SPAWN_TILE),
                        self.score,
                        NodeKind::MoveChoice,
                    ));
                }
            }
        }

        for child in &mut self.children {
            child.expand(remaining - 1);
        }
    }
}

/// A tree grown once per decision and discarded afterwards.
#[derive(Debug, Clone)]
pub struct SearchTree {
    root: Node,
    depth: u8,
}

impl SearchTree {
    /// Grow a tree of `depth` layers from the current position.
    pub fn grow(board: &Board, score: u64, depth: u8) -> SearchTree {
        let mut root = Node::new(*board, score, NodeKind::MoveChoice);
        root.expand(depth);
        SearchTree { root, depth }
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Score carried by the root position.
    #[inline]
    pub fn root_score(&self) -> u64 {
        self.root.score
    }

    /// Total nodes in the tree.
    pub fn node_count(&self) -> u64 {
        self.root.count()
    }
}
