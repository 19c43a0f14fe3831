// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Mapping Introspection
//!
//! Key and value listings for any map whose shared reference iterates
//! `(&K, &V)` pairs, which covers `HashMap`, `BTreeMap`, and most
//! third-party maps. Both functions walk the map in its own iteration
//! order, so for an unmodified map `keys(m)[i]` belongs to `values(m)[i]`.

/// Returns references to the keys of `map`, in the map's iteration order.
///
/// # Examples
///
/// ```rust
/// # use kitbag::map::keys;
/// use std::collections::BTreeMap;
///
/// let m = BTreeMap::from([("b", 2), ("a", 1)]);
/// assert_eq!(keys(&m), vec![&"a", &"b"]);
/// ```
pub fn keys<'a, M, K, V>(map: &'a M) -> Vec<&'a K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    map.into_iter().map(|(k, _)| k).collect()
}

/// Returns references to the values of `map`, in the same order as [`keys`].
///
/// # Examples
///
/// ```rust
/// # use kitbag::map::values;
/// use std::collections::BTreeMap;
///
/// let m = BTreeMap::from([("b", 2), ("a", 1)]);
/// assert_eq!(values(&m), vec![&1, &2]);
/// ```
pub fn values<'a, M, K, V>(map: &'a M) -> Vec<&'a V>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    map.into_iter().map(|(_, v)| v).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_btree_map_is_sorted() {
        let m = BTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
        assert_eq!(keys(&m), vec![&1, &2, &3]);
        assert_eq!(values(&m), vec![&'a', &'b', &'c']);
    }

    #[test]
    fn test_hash_map_keys_and_values_line_up() {
        let m: HashMap<String, usize> = ["alpha", "be", "c"]
            .into_iter()
            .map(|s| (s.to_string(), s.len()))
            .collect();

        let ks = keys(&m);
        let vs = values(&m);
        assert_eq!(ks.len(), 3);
        for (k, v) in ks.iter().zip(vs.iter()) {
            assert_eq!(k.len(), **v);
        }
    }

    #[test]
    fn test_fx_hash_map() {
        let mut m = FxHashMap::default();
        m.insert("only", 42);
        assert_eq!(keys(&m), vec![&"only"]);
        assert_eq!(values(&m), vec![&42]);
    }

    #[test]
    fn test_empty_map() {
        let m: BTreeMap<u8, u8> = BTreeMap::new();
        assert!(keys(&m).is_empty());
        assert!(values(&m).is_empty());
    }
}
