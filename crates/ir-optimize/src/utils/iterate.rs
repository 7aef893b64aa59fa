/// Calls `f` on every item in order and splices whatever it returns
/// immediately before that item. The vector is rebuilt at most once.
///
/// On error nothing is spliced, but items already visited keep whatever `f`
/// did to them. Callers that mutate must roll back themselves.
pub fn iterate_prefixing<T, E>(
    items: &mut Vec<T>,
    mut f: impl FnMut(&mut T) -> Result<Vec<T>, E>,
) -> Result<(), E> {
    let mut insertions = Vec::new();
    for (index, item) in items.iter_mut().enumerate() {
        let prefix = f(item)?;
        if !prefix.is_empty() {
            insertions.push((index, prefix));
        }
    }
    if insertions.is_empty() {
        return Ok(());
    }

    let extra: usize = insertions.iter().map(|(_, prefix)| prefix.len()).sum();
    let mut rewritten = Vec::with_capacity(items.len() + extra);
    let mut pending = insertions.into_iter().peekable();
    for (index, item) in std::mem::take(items).into_iter().enumerate() {
        if let Some((_, prefix)) = pending.next_if(|(at, _)| *at == index) {
            rewritten.extend(prefix);
        }
        rewritten.push(item);
    }
    *items = rewritten;
    Ok(())
}
