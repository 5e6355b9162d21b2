//! Default-lookup helper.

use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Returns the value bound to `key` in `mapping`, or `default` when the key
/// is absent.
///
/// The default is returned exactly as given. A missing key is the common
/// case and is never reported as an error.
///
/// ```
/// use std::collections::BTreeMap;
/// use entity_decl::lookup;
///
/// let mut m = BTreeMap::new();
/// m.insert("label", vec!["Drumhead"]);
/// let none: Vec<&str> = Vec::new();
/// assert_eq!(lookup(&m, "label", &none), &vec!["Drumhead"]);
/// assert!(lookup(&m, "comments", &none).is_empty());
/// ```
#[must_use]
pub fn lookup<'a, K, Q, V>(mapping: &'a BTreeMap<K, V>, key: &Q, default: &'a V) -> &'a V
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    mapping.get(key).unwrap_or(default)
}
