use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    fmt::Debug,
    mem,
};

#[derive(Clone)]
pub(crate) struct Node<K: Ord, V> {
    key: K,
    val: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
}

impl<K, V> Node<K, V>
where
    K: Ord,
{
    fn new(key: K, val: V) -> Self {
        Node {
            key,
            val,
            left: Tree::Empty,
            right: Tree::Empty,
        }
    }
}

// Each subtree is owned outright by its parent slot, and the root slot
// is no different, so restructuring is always "take the node out,
// rebuild, put the result back" on the slot at hand. There are no
// parent links to maintain.
#[derive(Clone)]
pub(crate) enum Tree<K: Ord, V> {
    Empty,
    Node(Box<Node<K, V>>),
}

pub struct Iter<'a, K, V>
where
    K: 'a + Ord,
    V: 'a,
{
    stack: Vec<(bool, &'a Node<K, V>)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: 'a + Ord,
    V: 'a,
{
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.stack.is_empty() {
                return None;
            }
            let top = self.stack.len() - 1;
            let (visited, current) = self.stack[top];
            if visited {
                self.stack.pop();
                match &current.right {
                    Tree::Empty => (),
                    Tree::Node(n) => self.stack.push((false, n)),
                }
                return Some((&current.key, &current.val));
            } else {
                self.stack[top].0 = true;
                match &current.left {
                    Tree::Empty => (),
                    Tree::Node(n) => self.stack.push((false, n)),
                }
            }
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V>
where
    K: 'a + Ord,
    V: 'a,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        // the stack must grow with the tree; this tree is not balanced,
        // so its height is only bounded by the number of elements
        let mut stack: Vec<(bool, &'a Node<K, V>)> = Vec::new();
        match self {
            Tree::Empty => (),
            Tree::Node(n) => stack.push((false, n)),
        }
        Iter { stack }
    }
}

impl<K, V> Tree<K, V>
where
    K: Ord,
{
    pub(crate) fn new() -> Self {
        Tree::Empty
    }

    pub(crate) fn insert(&mut self, key: K, val: V) -> Option<V> {
        let mut cur = self;
        loop {
            match cur {
                Tree::Empty => {
                    *cur = Tree::Node(Box::new(Node::new(key, val)));
                    break None;
                }
                Tree::Node(n) => match key.cmp(&n.key) {
                    Ordering::Less => cur = &mut n.left,
                    Ordering::Greater => cur = &mut n.right,
                    Ordering::Equal => break Some(mem::replace(&mut n.val, val)),
                },
            }
        }
    }

    // this is structured as a loop so that the optimizer can inline
    // the closure argument, which it won't do for a recursive function
    fn get_gen<'a, Q, F, R>(&'a self, k: &Q, f: F) -> Option<R>
    where
        Q: ?Sized + Ord,
        K: Borrow<Q>,
        F: FnOnce(&'a Node<K, V>) -> R,
        R: 'a,
    {
        let mut cur = self;
        loop {
            match cur {
                Tree::Empty => break None,
                Tree::Node(n) => match k.cmp(n.key.borrow()) {
                    Ordering::Less => cur = &n.left,
                    Ordering::Greater => cur = &n.right,
                    Ordering::Equal => break Some(f(n)),
                },
            }
        }
    }

    pub(crate) fn get<'a, Q>(&'a self, k: &Q) -> Option<&'a V>
    where
        Q: ?Sized + Ord,
        K: Borrow<Q>,
    {
        self.get_gen(k, |n| &n.val)
    }

    pub(crate) fn get_key<'a, Q>(&'a self, k: &Q) -> Option<&'a K>
    where
        Q: ?Sized + Ord,
        K: Borrow<Q>,
    {
        self.get_gen(k, |n| &n.key)
    }

    pub(crate) fn get_full<'a, Q>(&'a self, k: &Q) -> Option<(&'a K, &'a V)>
    where
        Q: ?Sized + Ord,
        K: Borrow<Q>,
    {
        self.get_gen(k, |n| (&n.key, &n.val))
    }

    pub(crate) fn get_mut<'a, Q>(&'a mut self, k: &Q) -> Option<&'a mut V>
    where
        Q: ?Sized + Ord,
        K: Borrow<Q>,
    {
        let mut cur = self;
        loop {
            match cur {
                Tree::Empty => return None,
                Tree::Node(n) => match k.cmp(n.key.borrow()) {
                    Ordering::Less => cur = &mut n.left,
                    Ordering::Greater => cur = &mut n.right,
                    Ordering::Equal => return Some(&mut n.val),
                },
            }
        }
    }

    /// detach the smallest binding of the subtree, reattaching that
    /// node's right child in its place
    fn take_min(&mut self) -> Option<(K, V)> {
        match self {
            Tree::Empty => None,
            Tree::Node(n) => {
                if let Some(kv) = n.left.take_min() {
                    return Some(kv);
                }
                match mem::replace(self, Tree::Empty) {
                    Tree::Node(n) => {
                        let n = *n;
                        *self = n.right;
                        Some((n.key, n.val))
                    }
                    Tree::Empty => unreachable!(),
                }
            }
        }
    }

    pub(crate) fn remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        Q: ?Sized + Ord,
        K: Borrow<Q>,
    {
        match self {
            Tree::Empty => None,
            Tree::Node(n) => match k.cmp(n.key.borrow()) {
                Ordering::Less => n.left.remove(k),
                Ordering::Greater => n.right.remove(k),
                // the node keeps its position, its binding is replaced
                // by the in order successor, and the successor's shell
                // is spliced out of the right subtree
                Ordering::Equal => match n.right.take_min() {
                    Some((key, val)) => {
                        n.key = key;
                        Some(mem::replace(&mut n.val, val))
                    }
                    // no right child, the left subtree moves up into
                    // this slot
                    None => match mem::replace(self, Tree::Empty) {
                        Tree::Node(n) => {
                            let n = *n;
                            *self = n.left;
                            Some(n.val)
                        }
                        Tree::Empty => unreachable!(),
                    },
                },
            },
        }
    }

    pub(crate) fn for_each<F>(&self, f: &mut F)
    where
        F: FnMut(&K, &V),
    {
        match self {
            Tree::Empty => (),
            Tree::Node(n) => {
                n.left.for_each(f);
                f(&n.key, &n.val);
                n.right.for_each(f);
            }
        }
    }
}

impl<K, V> Tree<K, V>
where
    K: Ord + Debug,
{
    #[allow(dead_code)]
    pub(crate) fn invariant(&self, len: usize) {
        fn check<K, V>(t: &Tree<K, V>, lower: Option<&K>, upper: Option<&K>) -> usize
        where
            K: Ord + Debug,
        {
            match t {
                Tree::Empty => 0,
                Tree::Node(n) => {
                    if let Some(lower) = lower {
                        if lower.cmp(&n.key) != Ordering::Less {
                            panic!(
                                "tree invariant violated, {:?} is not less than {:?}",
                                lower, n.key
                            )
                        }
                    }
                    if let Some(upper) = upper {
                        if upper.cmp(&n.key) != Ordering::Greater {
                            panic!(
                                "tree invariant violated, {:?} is not greater than {:?}",
                                upper, n.key
                            )
                        }
                    }
                    1 + check(&n.left, lower, Some(&n.key))
                        + check(&n.right, Some(&n.key), upper)
                }
            }
        }
        let tlen = check(self, None, None);
        if tlen != len {
            panic!("len is wrong {} vs {}", len, tlen)
        }
    }
}
