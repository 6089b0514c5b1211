use super::{Capabilities, CheckersBoard, Color, Field, Move, MultiJump, Square};

/// Handle of a node inside a [`JumpTree`].
pub type JumpId = usize;

/// One capture step plus a handle to the step that led to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpNode {
    pub step: Move,
    pub parent: Option<JumpId>,
    pub depth: usize,
}

/// Arena holding every capture continuation found from one square.
///
/// Each node is the last step of a distinct chain; walking `parent` handles
/// back to a root gives the whole chain, so intermediate and maximal chains are
/// all represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpTree {
    nodes: Vec<JumpNode>,
}

impl JumpTree {
    fn push(&mut self, node: JumpNode) -> JumpId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn nodes(&self) -> &[JumpNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn chain(&self, id: JumpId) -> MultiJump {
        let mut steps = Vec::with_capacity(self.nodes[id].depth);
        let mut current = Some(id);
        while let Some(index) = current {
            steps.push(self.nodes[index].step.clone());
            current = self.nodes[index].parent;
        }
        steps.reverse();
        MultiJump::new(steps)
    }

    pub fn chains(&self) -> impl Iterator<Item = MultiJump> + '_ {
        (0..self.nodes.len()).map(|id| self.chain(id))
    }

    /// Number of steps in the longest chain, 0 when nothing can be captured.
    pub fn longest_chain(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Chains whose final step lands on `target`, nearest final departure square first.
    pub fn ending_at(&self, source: Field, target: Field) -> Vec<JumpId> {
        let mut ids: Vec<JumpId> = (0..self.nodes.len()).filter(|&id| self.nodes[id].step.to == target).collect();
        ids.sort_by_key(|&id| (self.nodes[id].step.from.index() as isize - source.index() as isize).abs());
        ids
    }

    /// The chain travelling exactly `path`, step by step.
    pub fn find_path(&self, path: &[Move]) -> Option<JumpId> {
        let last = path.last()?;
        (0..self.nodes.len()).find(|&id| {
            let node = &self.nodes[id];
            node.depth == path.len()
                && node.step.same_path(last)
                && self.chain(id).steps.iter().zip(path).all(|(found, wanted)| found.same_path(wanted))
        })
    }
}

impl CheckersBoard {
    /// All capture chains available to the piece on `origin`.
    pub fn jump_search(&self, origin: Field) -> JumpTree {
        match self.square(origin) {
            Square::Occupied(piece) => self.jump_search_with(origin, piece.color, piece.capabilities()),
            Square::Empty => JumpTree::default(),
        }
    }

    /// Searches as a piece of `mover` with the given directions standing on `origin`.
    ///
    /// The board is only read. `origin` counts as empty throughout, so a chain
    /// may come back through the square it started from.
    pub fn jump_search_with(&self, origin: Field, mover: Color, capabilities: Capabilities) -> JumpTree {
        let mut tree = JumpTree::default();
        let mut captured = Vec::new();
        self.collect_jumps(origin, origin, mover, &capabilities.directions(), &mut captured, None, &mut tree);
        tree
    }

    #[allow(clippy::too_many_arguments)]
    fn collect_jumps(
        &self,
        origin: Field,
        square: Field,
        mover: Color,
        directions: &[(i8, i8)],
        captured: &mut Vec<Field>,
        last: Option<JumpId>,
        tree: &mut JumpTree,
    ) {
        let came_from = last.map(|id| tree.nodes[id].step.from);
        let depth = last.map_or(1, |id| tree.nodes[id].depth + 1);

        for &(d_row, d_col) in directions {
            let Some(over) = square.offset(d_row, d_col) else {
                continue;
            };
            let Some(landing) = over.offset(d_row, d_col) else {
                continue;
            };

            if captured.contains(&over) {
                continue;
            }
            match self.square(over) {
                Square::Occupied(piece) if piece.color != mover => {}
                _ => continue,
            }
            if landing != origin && !self.is_empty(landing) {
                continue;
            }
            if Some(landing) == came_from {
                continue;
            }

            let id = tree.push(JumpNode {
                step: Move::capture(square, landing, over),
                parent: last,
                depth,
            });

            captured.push(over);
            self.collect_jumps(origin, landing, mover, directions, captured, Some(id), tree);
            captured.pop();
        }
    }

    /// True when any piece of `color` has a capture available.
    pub fn has_capture(&self, color: Color) -> bool {
        self.player_squares(color)
            .into_iter()
            .any(|field| !self.jump_search(field).is_empty())
    }
}
