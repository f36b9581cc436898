// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets generation.
//!
//! Both generators emit subsets in the same order: the subsets that start with
//! the first item, then those that start with the second item and so on, with
//! the items of each subset in input order.

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // nck(n, k) = nck(n, n - k)
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Returns all the k-element subsets of `items`.
///
/// Returns no subsets if k is 0 or greater than the number of items.
///
/// ```
/// # use kicker_cards::combinations::combinations;
/// let subsets = combinations(&[1, 2, 3], 2);
/// assert_eq!(subsets, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    match k {
        0 => Vec::new(),
        1 => items.iter().map(|item| vec![item.clone()]).collect(),
        _ => items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| {
                combinations(&items[i + 1..], k - 1)
                    .into_iter()
                    .map(move |rest| {
                        std::iter::once(item.clone())
                            .chain(rest)
                            .collect::<Vec<_>>()
                    })
            })
            .collect(),
    }
}

/// Calls the `f` closure for each k-element subset of `items`.
///
/// Same subsets and order as [combinations] without allocating a vector per
/// subset.
pub fn for_each_combination<T, F>(items: &[T], k: usize, mut f: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    if k == 0 || k > items.len() {
        return;
    }

    let mut subset = Vec::with_capacity(k);
    visit(items, k, &mut subset, &mut f);
}

fn visit<T, F>(items: &[T], k: usize, subset: &mut Vec<T>, f: &mut F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let needed = k - subset.len();
    if needed == 0 {
        f(subset);
        return;
    }

    if items.len() < needed {
        return;
    }

    for i in 0..=(items.len() - needed) {
        subset.push(items[i].clone());
        visit(&items[i + 1..], k, subset, f);
        subset.pop();
    }
}
