//! Binary search tree mapping a [`ColorKey`] to the image it was read from.
//!
//! Nodes live in an arena and point at their children by position. The tree is
//! never rebalanced, so inserting keys in sorted order produces a right-leaning
//! chain and lookups degrade to a linear walk.
//!
//! Equal keys are routed to the right subtree on insert, while `find` stops at
//! the first node whose key is equal. With duplicates the shallowest matching
//! node wins, which for a plain run of duplicates is the one inserted first.

use log::{debug, info, warn};
use std::cmp::Ordering;

use crate::color_key::ColorKey;
use crate::error::{Error, Result};
use crate::image_loader::ImageHandle;

type NodeId = usize;

#[derive(Debug)]
struct Node {
    // Captured at insertion; later edits to the pixels do not move the node
    key: ColorKey,
    image: ImageHandle,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn leaf(key: ColorKey, image: ImageHandle) -> Self {
        Self {
            key,
            image,
            left: None,
            right: None,
        }
    }
}

/// What to do when an image in the build sequence cannot be loaded or keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidImagePolicy {
    /// Stop the build and return the error.
    #[default]
    Abort,
    /// Log the error and leave the image out.
    Skip,
}

#[derive(Debug, Default)]
pub struct OrderedImageIndex {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl OrderedImageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index by inserting every handle of `handles` in order.
    ///
    /// Fails with [`Error::EmptyIndex`] when nothing ends up indexed, since an
    /// empty index cannot answer queries.
    pub fn build<I>(handles: I, policy: InvalidImagePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = Result<ImageHandle>>,
    {
        let mut index = Self::new();
        let mut skipped = 0usize;

        for handle in handles {
            let outcome = handle.and_then(|handle| index.insert(handle));
            match (outcome, policy) {
                (Ok(()), _) => {}
                (Err(e), InvalidImagePolicy::Skip) => {
                    warn!("Skipping image: {}", e);
                    skipped += 1;
                }
                (Err(e), InvalidImagePolicy::Abort) => return Err(e),
            }
        }

        if index.is_empty() {
            return Err(Error::EmptyIndex);
        }

        info!(
            "Indexed {} images (skipped {}, height {})",
            index.len(),
            skipped,
            index.height()
        );
        Ok(index)
    }

    /// Insert `image` under the color of its key pixel.
    ///
    /// Keys strictly less than a node's key go left, everything else goes right.
    /// On error the index is left untouched.
    pub fn insert(&mut self, image: ImageHandle) -> Result<()> {
        let key = image.color_key()?;
        let id = self.nodes.len();

        let Some(mut current) = self.root else {
            self.nodes.push(Node::leaf(key, image));
            self.root = Some(id);
            debug!("{} becomes the root", key);
            return Ok(());
        };

        loop {
            let node = &mut self.nodes[current];
            let slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };

            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(id);
                    break;
                }
            }
        }

        self.nodes.push(Node::leaf(key, image));
        debug!("Inserted {} as node {}", key, id);
        Ok(())
    }

    /// Look up the image stored under `key`.
    ///
    /// Returns `Ok(None)` when no node matches and [`Error::EmptyIndex`] when
    /// nothing has been inserted.
    pub fn find(&self, key: ColorKey) -> Result<Option<&ImageHandle>> {
        Ok(self.locate(key)?.map(|(id, _)| &self.nodes[id].image))
    }

    /// Like [`find`](Self::find), with mutable access to the image.
    pub fn find_mut(&mut self, key: ColorKey) -> Result<Option<&mut ImageHandle>> {
        match self.locate(key)? {
            Some((id, _)) => Ok(Some(&mut self.nodes[id].image)),
            None => Ok(None),
        }
    }

    /// Depth of the node `find` would return, counting the root as 0.
    pub fn depth_of(&self, key: ColorKey) -> Result<Option<usize>> {
        Ok(self.locate(key)?.map(|(_, depth)| depth))
    }

    fn locate(&self, key: ColorKey) -> Result<Option<(NodeId, usize)>> {
        let mut current = self.root.ok_or(Error::EmptyIndex)?;
        let mut depth = 0;

        loop {
            let node = &self.nodes[current];
            let next = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Ok(Some((current, depth))),
            };

            match next {
                Some(child) => {
                    current = child;
                    depth += 1;
                }
                None => return Ok(None),
            }
        }
    }

    /// Key of the root node, if any.
    pub fn root_key(&self) -> Option<ColorKey> {
        self.root.map(|id| self.nodes[id].key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = self.root.map(|id| (id, 1)).into_iter().collect::<Vec<_>>();

        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|child| (child, level + 1)));
            stack.extend(node.right.map(|child| (child, level + 1)));
        }

        height
    }

    /// In-order traversal: handles sorted by key, equal keys in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            index: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }
}

pub struct Iter<'a> {
    index: &'a OrderedImageIndex,
    stack: Vec<NodeId>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.index.nodes[id].left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (ColorKey, &'a ImageHandle);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.index.nodes[id];
        self.push_left_spine(node.right);
        Some((node.key, &node.image))
    }
}

/// Build an index from `handles`, aborting on the first unusable image.
pub fn build_index<I>(handles: I) -> Result<OrderedImageIndex>
where
    I: IntoIterator<Item = Result<ImageHandle>>,
{
    OrderedImageIndex::build(handles, InvalidImagePolicy::Abort)
}

pub fn lookup(index: &OrderedImageIndex, key: ColorKey) -> Result<Option<&ImageHandle>> {
    index.find(key)
}
