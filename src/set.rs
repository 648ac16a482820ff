use crate::map::{self, Map};
use std::{
    borrow::Borrow,
    cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd},
    default::Default,
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    iter::FromIterator,
};

/// An ordered set implemented as a plain binary search tree, mutated
/// in place. The same caveats as [`Map`](crate::map::Map) apply, the
/// set is a thin wrapper over a map with unit values.
///
/// # Examples
/// ```
/// use ordered_treemap::set::Set;
///
/// let mut s = Set::new();
/// s.insert(String::from("1"));
/// s.insert(String::from("2"));
/// s.insert(String::from("3"));
///
/// assert_eq!(s.contains("1"), true);
/// assert_eq!(s.contains("2"), true);
/// assert_eq!(s.contains("3"), true);
/// assert_eq!(s.contains("4"), false);
///
/// for k in &s { println!("{}", k) }
/// ```
#[derive(Clone)]
pub struct Set<K: Ord>(Map<K, ()>);

pub struct Iter<'a, K>
where
    K: 'a + Ord,
{
    inner: map::Iter<'a, K, ()>,
}

impl<'a, K> Iterator for Iter<'a, K>
where
    K: 'a + Ord,
{
    type Item = &'a K;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

impl<K> Hash for Set<K>
where
    K: Hash + Ord,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state)
        }
    }
}

impl<K> Default for Set<K>
where
    K: Ord,
{
    fn default() -> Set<K> {
        Set::new()
    }
}

impl<K> PartialEq for Set<K>
where
    K: Ord,
{
    fn eq(&self, other: &Set<K>) -> bool {
        self.0 == other.0
    }
}

impl<K> Eq for Set<K> where K: Eq + Ord {}

impl<K> PartialOrd for Set<K>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &Set<K>) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<K> Ord for Set<K>
where
    K: Ord,
{
    fn cmp(&self, other: &Set<K>) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<K> Debug for Set<K>
where
    K: Debug + Ord,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_set().entries(self.into_iter()).finish()
    }
}

impl<K> FromIterator<K> for Set<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut s = Set::new();
        s.extend(iter);
        s
    }
}

impl<K> Extend<K> for Set<K>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for k in iter {
            self.insert(k);
        }
    }
}

impl<'a, K> IntoIterator for &'a Set<K>
where
    K: 'a + Ord,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Set<K>
where
    K: Ord,
{
    /// Create a new empty set
    pub fn new() -> Self {
        Set(Map::new())
    }

    /// insert k into the set, returning true if it was not already
    /// present
    pub fn insert(&mut self, k: K) -> bool {
        self.0.insert(k, ()).is_none()
    }

    /// return true if k is in the set. Safe to call on an empty set.
    pub fn contains<Q: ?Sized + Ord>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.0.contains_key(k)
    }

    /// lookup k in the set and return the stored key
    pub fn get<'a, Q: ?Sized + Ord>(&'a self, k: &Q) -> Option<&'a K>
    where
        K: Borrow<Q>,
    {
        self.0.get_key(k)
    }

    /// remove k from the set, returning true if it was present
    pub fn remove<Q: ?Sized + Ord>(&mut self, k: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.0.remove(k).is_some()
    }

    /// remove all elements from the set
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// call f once for every element of the set, in ascending order
    pub fn for_each<F>(&self, f: &mut F)
    where
        F: FnMut(&K),
    {
        self.0.for_each(&mut |k, _| f(k))
    }

    /// return an iterator over the elements of the set, in ascending
    /// order
    pub fn iter<'a>(&'a self) -> Iter<'a, K> {
        Iter {
            inner: self.0.iter(),
        }
    }

    /// get the number of elements in the set O(1) time and space
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// return true if the set has no elements
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(feature = "serde")]
impl<K> serde::Serialize for Set<K>
where
    K: serde::Serialize + Ord,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.into_iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for Set<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::marker::PhantomData;
        struct SetVisitor<K: Ord>(PhantomData<Set<K>>);
        impl<'de, K> serde::de::Visitor<'de> for SetVisitor<K>
        where
            K: serde::Deserialize<'de> + Ord,
        {
            type Value = Set<K>;
            fn expecting(&self, f: &mut Formatter) -> fmt::Result {
                f.write_str("a sequence")
            }
            fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut set = Set::new();
                while let Some(k) = access.next_element()? {
                    set.insert(k);
                }
                Ok(set)
            }
        }
        deserializer.deserialize_seq(SetVisitor(PhantomData))
    }
}
