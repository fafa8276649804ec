use crate::nesting::Nested;

/// Flatten by manual recursion
///
/// Returns a list of every element in depth-first, left-to-right order. A
/// single element is returned unchanged.
pub fn flatten_recursive<T>(nested: Nested<T>) -> Nested<T> {
    match nested {
        Nested::Item(item) => Nested::Item(item),
        Nested::List(items) => {
            let mut out = Vec::new();
            collect(items, &mut out);
            Nested::list_of(out)
        }
    }
}

fn collect<T>(items: Vec<Nested<T>>, out: &mut Vec<T>) {
    for item in items {
        match item {
            Nested::Item(item) => out.push(item),
            Nested::List(inner) => collect(inner, out),
        }
    }
}

/// Flatten by folding each entry into an accumulator
///
/// Same output contract as [`flatten_recursive`].
pub fn flatten_fold<T>(nested: Nested<T>) -> Nested<T> {
    match nested {
        Nested::Item(item) => Nested::Item(item),
        Nested::List(items) => Nested::List(items.into_iter().fold(Vec::new(), |mut acc, entry| {
            match entry {
                Nested::Item(item) => acc.push(Nested::Item(item)),
                list => {
                    if let Nested::List(flat) = flatten_fold(list) {
                        acc.extend(flat);
                    }
                }
            }
            acc
        })),
    }
}

/// Flatten at most `depth` levels of nesting
///
/// Lists nested deeper than `depth` are kept as lists; a depth of 0 returns
/// the input as is. A single element is returned unchanged.
pub fn flatten_depth<T>(nested: Nested<T>, depth: usize) -> Nested<T> {
    match nested {
        Nested::Item(item) => Nested::Item(item),
        Nested::List(items) => {
            let mut out = Vec::new();
            flatten_into(items, depth, &mut out);
            Nested::List(out)
        }
    }
}

fn flatten_into<T>(items: Vec<Nested<T>>, depth: usize, out: &mut Vec<Nested<T>>) {
    for item in items {
        match item {
            Nested::List(inner) if depth > 0 => flatten_into(inner, depth - 1, out),
            other => out.push(other),
        }
    }
}

/// [`flatten_depth`] without a depth limit
pub fn flatten_all<T>(nested: Nested<T>) -> Nested<T> {
    flatten_depth(nested, usize::MAX)
}
