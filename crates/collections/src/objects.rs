//! Merging mappings in place

use underbar_core::Mapping;

/// Copy every entry of each source into `target` and hand `target` back.
///
/// Later sources overwrite earlier ones, and any source overwrites what
/// `target` already held.
pub fn extend<'t, 's, M, S, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    S: Mapping<Key = M::Key, Value = M::Value> + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        for (key, value) in source.pairs() {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Fill in keys missing from `target` and hand `target` back.
///
/// A key counts as present whatever its value is, so an explicit `false`,
/// `0` or `Null` is kept. When several sources provide a missing key, the
/// first one wins.
pub fn defaults<'t, 's, M, S, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    S: Mapping<Key = M::Key, Value = M::Value> + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        for (key, value) in source.pairs() {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}
