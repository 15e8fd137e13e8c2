//! Depth-first tree traversal with enter/leave hooks.
//!
//! Two walkers are provided:
//!
//! - [`walk`] borrows the tree. Hooks receive an [`Entry`] with the node, its
//!   immediate parent and the full ancestor chain (root first).
//! - [`walk_mut`] borrows the tree mutably. Hooks receive an [`EntryMut`]
//!   carrying a read-only [`Ancestor`] chain (root first), and may
//!   [`detach`](EntryMut::detach) the node from its parent. The walker
//!   removes it after the node's `leave` hook and re-reads the same slot, so the
//!   sibling that shifted into place is visited next.
//!
//! In both walkers an `enter` hook returning [`Flow::Skip`] prevents descending
//! into the node's children; its `leave` hook still fires.

use super::node::{ItemNode, MenuNode, NodeKind, NodeRef, RootTree, SearchMetadata, TreeChild};

/// What the walker should do after an `enter` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Visit the node's children
    #[default]
    Descend,
    /// Skip the node's children (leave still fires)
    Skip,
}

/// Conversion of hook return values into a [`Flow`].
///
/// `()` descends, `false` skips, `true` descends.
pub trait IntoFlow {
    fn into_flow(self) -> Flow;
}

impl IntoFlow for Flow {
    fn into_flow(self) -> Flow {
        self
    }
}

impl IntoFlow for () {
    fn into_flow(self) -> Flow {
        Flow::Descend
    }
}

impl IntoFlow for bool {
    fn into_flow(self) -> Flow {
        if self {
            Flow::Descend
        } else {
            Flow::Skip
        }
    }
}

/// A node being visited by [`walk`].
#[derive(Debug)]
pub struct Entry<'p, 't, M, I, N> {
    /// The visited node
    pub node: &'t N,
    /// Immediate parent. The root is its own parent.
    pub parent: NodeRef<'t, M, I>,
    /// Ancestor chain from the root to the immediate parent
    pub parents: &'p [NodeRef<'t, M, I>],
}

pub type RootEntry<'p, 't, M, I> = Entry<'p, 't, M, I, RootTree<M, I>>;
pub type MenuEntry<'p, 't, M, I> = Entry<'p, 't, M, I, MenuNode<M, I>>;
pub type ItemEntry<'p, 't, M, I> = Entry<'p, 't, M, I, ItemNode<I>>;

/// Hooks for [`walk`]. Every method defaults to a no-op that descends.
pub trait Visitor<'t, M, I> {
    fn enter_root(&mut self, _entry: &RootEntry<'_, 't, M, I>) -> Flow {
        Flow::Descend
    }

    fn leave_root(&mut self, _entry: &RootEntry<'_, 't, M, I>) {}

    fn enter_menu(&mut self, _entry: &MenuEntry<'_, 't, M, I>) -> Flow {
        Flow::Descend
    }

    fn leave_menu(&mut self, _entry: &MenuEntry<'_, 't, M, I>) {}

    /// Items have no children, so the returned flow has no effect.
    fn enter_item(&mut self, _entry: &ItemEntry<'_, 't, M, I>) -> Flow {
        Flow::Descend
    }

    fn leave_item(&mut self, _entry: &ItemEntry<'_, 't, M, I>) {}
}

type EnterFn<'h, 't, M, I, N> = Box<dyn FnMut(&Entry<'_, 't, M, I, N>) -> Flow + 'h>;
type LeaveFn<'h, 't, M, I, N> = Box<dyn FnMut(&Entry<'_, 't, M, I, N>) + 'h>;

/// Enter/leave closures for one node kind.
pub struct Hooks<'h, 't, M, I, N> {
    enter: Option<EnterFn<'h, 't, M, I, N>>,
    leave: Option<LeaveFn<'h, 't, M, I, N>>,
}

impl<M, I, N> Default for Hooks<'_, '_, M, I, N> {
    fn default() -> Self {
        Self {
            enter: None,
            leave: None,
        }
    }
}

impl<'h, 't, M, I, N> Hooks<'h, 't, M, I, N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enter hook. It may return `()`, `bool` or [`Flow`].
    pub fn enter<F, R>(mut self, mut hook: F) -> Self
    where
        F: FnMut(&Entry<'_, 't, M, I, N>) -> R + 'h,
        R: IntoFlow,
    {
        self.enter = Some(Box::new(move |entry: &Entry<'_, 't, M, I, N>| {
            hook(entry).into_flow()
        }));
        self
    }

    /// Set the leave hook
    pub fn leave<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&Entry<'_, 't, M, I, N>) + 'h,
    {
        self.leave = Some(Box::new(hook));
        self
    }

    fn run_enter(&mut self, entry: &Entry<'_, 't, M, I, N>) -> Flow {
        match self.enter.as_mut() {
            Some(hook) => hook(entry),
            None => Flow::Descend,
        }
    }

    fn run_leave(&mut self, entry: &Entry<'_, 't, M, I, N>) {
        if let Some(hook) = self.leave.as_mut() {
            hook(entry);
        }
    }
}

/// A [`Visitor`] assembled from closures, one [`Hooks`] per node kind.
///
/// The `root`/`menu`/`item` methods take a bare closure used as the enter
/// hook; the `*_hooks` variants take both hooks.
///
/// ```
/// use menu_tree::tree::{walk, Walkers};
/// use menu_tree::RootTree;
///
/// let tree: RootTree<u32, u32> = RootTree::new();
/// let mut visited = 0;
/// let mut walkers = Walkers::new().item(|_| visited += 1);
/// walk(&mut walkers, &tree);
/// drop(walkers);
/// assert_eq!(visited, 0);
/// ```
pub struct Walkers<'h, 't, M, I> {
    root: Hooks<'h, 't, M, I, RootTree<M, I>>,
    menu: Hooks<'h, 't, M, I, MenuNode<M, I>>,
    item: Hooks<'h, 't, M, I, ItemNode<I>>,
}

impl<M, I> Default for Walkers<'_, '_, M, I> {
    fn default() -> Self {
        Self {
            root: Hooks::default(),
            menu: Hooks::default(),
            item: Hooks::default(),
        }
    }
}

impl<'h, 't, M, I> Walkers<'h, 't, M, I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root<F, R>(self, enter: F) -> Self
    where
        F: FnMut(&RootEntry<'_, 't, M, I>) -> R + 'h,
        R: IntoFlow,
    {
        self.root_hooks(Hooks::new().enter(enter))
    }

    pub fn root_hooks(mut self, hooks: Hooks<'h, 't, M, I, RootTree<M, I>>) -> Self {
        self.root = hooks;
        self
    }

    pub fn menu<F, R>(self, enter: F) -> Self
    where
        F: FnMut(&MenuEntry<'_, 't, M, I>) -> R + 'h,
        R: IntoFlow,
    {
        self.menu_hooks(Hooks::new().enter(enter))
    }

    pub fn menu_hooks(mut self, hooks: Hooks<'h, 't, M, I, MenuNode<M, I>>) -> Self {
        self.menu = hooks;
        self
    }

    pub fn item<F, R>(self, enter: F) -> Self
    where
        F: FnMut(&ItemEntry<'_, 't, M, I>) -> R + 'h,
        R: IntoFlow,
    {
        self.item_hooks(Hooks::new().enter(enter))
    }

    pub fn item_hooks(mut self, hooks: Hooks<'h, 't, M, I, ItemNode<I>>) -> Self {
        self.item = hooks;
        self
    }
}

impl<'t, M, I> Visitor<'t, M, I> for Walkers<'_, 't, M, I> {
    fn enter_root(&mut self, entry: &RootEntry<'_, 't, M, I>) -> Flow {
        self.root.run_enter(entry)
    }

    fn leave_root(&mut self, entry: &RootEntry<'_, 't, M, I>) {
        self.root.run_leave(entry)
    }

    fn enter_menu(&mut self, entry: &MenuEntry<'_, 't, M, I>) -> Flow {
        self.menu.run_enter(entry)
    }

    fn leave_menu(&mut self, entry: &MenuEntry<'_, 't, M, I>) {
        self.menu.run_leave(entry)
    }

    fn enter_item(&mut self, entry: &ItemEntry<'_, 't, M, I>) -> Flow {
        self.item.run_enter(entry)
    }

    fn leave_item(&mut self, entry: &ItemEntry<'_, 't, M, I>) {
        self.item.run_leave(entry)
    }
}

/// Walk the tree depth-first, calling the visitor's hooks on every node.
pub fn walk<'t, M, I, V>(visitor: &mut V, root: &'t RootTree<M, I>)
where
    V: Visitor<'t, M, I> + ?Sized,
{
    let root_ref = NodeRef::Root(root);
    let mut parents = vec![root_ref];

    let flow = visitor.enter_root(&Entry {
        node: root,
        parent: root_ref,
        parents: &parents,
    });

    if flow == Flow::Descend {
        walk_children(visitor, root_ref, &root.children, &mut parents);
    }

    visitor.leave_root(&Entry {
        node: root,
        parent: root_ref,
        parents: &parents,
    });
}

fn walk_children<'t, M, I, V>(
    visitor: &mut V,
    parent: NodeRef<'t, M, I>,
    children: &'t [TreeChild<M, I>],
    parents: &mut Vec<NodeRef<'t, M, I>>,
) where
    V: Visitor<'t, M, I> + ?Sized,
{
    for child in children {
        match child {
            TreeChild::Item(item) => {
                let entry = Entry {
                    node: item,
                    parent,
                    parents: parents.as_slice(),
                };
                visitor.enter_item(&entry);
                visitor.leave_item(&entry);
            }
            TreeChild::Menu(menu) => {
                let flow = visitor.enter_menu(&Entry {
                    node: menu,
                    parent,
                    parents: parents.as_slice(),
                });

                if flow == Flow::Descend {
                    let menu_ref = NodeRef::Menu(menu);
                    parents.push(menu_ref);
                    walk_children(visitor, menu_ref, &menu.children, parents);
                    parents.pop();
                }

                visitor.leave_menu(&Entry {
                    node: menu,
                    parent,
                    parents: parents.as_slice(),
                });
            }
        }
    }
}

/// Snapshot of an enclosing node during [`walk_mut`].
///
/// The walker holds the tree mutably, so ancestors are exposed by value
/// rather than as [`NodeRef`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub kind: NodeKind,
    /// `None` for the root
    pub search: Option<SearchMetadata>,
}

impl Ancestor {
    fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            search: None,
        }
    }

    fn menu<M, I>(menu: &MenuNode<M, I>) -> Self {
        Self {
            kind: NodeKind::Menu,
            search: Some(menu.search.clone()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.search.as_ref().map(|search| search.raw.as_str())
    }
}

/// A node being visited by [`walk_mut`].
#[derive(Debug)]
pub struct EntryMut<'a, N> {
    /// The visited node
    pub node: &'a mut N,
    parents: &'a [Ancestor],
    detached: &'a mut bool,
}

impl<N> EntryMut<'_, N> {
    /// Nesting depth: root children are at depth 1
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Enclosing nodes, root first, immediate parent last.
    pub fn parents(&self) -> &[Ancestor] {
        self.parents
    }

    pub fn parent(&self) -> &Ancestor {
        // The root is always present
        &self.parents[self.parents.len() - 1]
    }

    /// Remove this node from its parent once its `leave` hook has run.
    pub fn detach(&mut self) {
        *self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        *self.detached
    }
}

/// Hooks for [`walk_mut`]. Every method defaults to a no-op that descends.
///
/// The root is passed directly: it can be edited but never detached.
pub trait VisitorMut<M, I> {
    fn enter_root(&mut self, _root: &mut RootTree<M, I>) -> Flow {
        Flow::Descend
    }

    fn leave_root(&mut self, _root: &mut RootTree<M, I>) {}

    fn enter_menu(&mut self, _entry: &mut EntryMut<'_, MenuNode<M, I>>) -> Flow {
        Flow::Descend
    }

    fn leave_menu(&mut self, _entry: &mut EntryMut<'_, MenuNode<M, I>>) {}

    fn enter_item(&mut self, _entry: &mut EntryMut<'_, ItemNode<I>>) -> Flow {
        Flow::Descend
    }

    fn leave_item(&mut self, _entry: &mut EntryMut<'_, ItemNode<I>>) {}
}

/// Walk the tree depth-first with mutable access, applying detach requests.
pub fn walk_mut<M, I, V>(visitor: &mut V, root: &mut RootTree<M, I>)
where
    V: VisitorMut<M, I> + ?Sized,
{
    if visitor.enter_root(root) == Flow::Descend {
        let mut parents = vec![Ancestor::root()];
        walk_children_mut(visitor, &mut root.children, &mut parents);
    }
    visitor.leave_root(root);
}

fn walk_children_mut<M, I, V>(
    visitor: &mut V,
    children: &mut Vec<TreeChild<M, I>>,
    parents: &mut Vec<Ancestor>,
) where
    V: VisitorMut<M, I> + ?Sized,
{
    let mut index = 0;
    while index < children.len() {
        if visit_child_mut(visitor, &mut children[index], parents) {
            // The next sibling now sits at `index`; visit it without advancing
            children.remove(index);
        } else {
            index += 1;
        }
    }
}

/// Returns whether the child asked to be detached.
fn visit_child_mut<M, I, V>(
    visitor: &mut V,
    child: &mut TreeChild<M, I>,
    parents: &mut Vec<Ancestor>,
) -> bool
where
    V: VisitorMut<M, I> + ?Sized,
{
    let mut detached = false;

    match child {
        TreeChild::Item(item) => {
            let mut entry = EntryMut {
                node: item,
                parents: parents.as_slice(),
                detached: &mut detached,
            };
            visitor.enter_item(&mut entry);
            visitor.leave_item(&mut entry);
        }
        TreeChild::Menu(menu) => {
            let flow = visitor.enter_menu(&mut EntryMut {
                node: &mut *menu,
                parents: parents.as_slice(),
                detached: &mut detached,
            });

            if flow == Flow::Descend {
                // Snapshot after enter_menu so edits made there are visible
                parents.push(Ancestor::menu(menu));
                walk_children_mut(visitor, &mut menu.children, parents);
                parents.pop();
            }

            visitor.leave_menu(&mut EntryMut {
                node: menu,
                parents: parents.as_slice(),
                detached: &mut detached,
            });
        }
    }

    detached
}
