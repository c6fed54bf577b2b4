//! Binomial coefficients and the combinatorial number system.
//!
//! An ascending K-subset `c_0 < c_1 < ... < c_{K-1}` of `0..n` is ranked as
//! `sum choose(c_i, i + 1)`, which is a bijection onto `0..choose(n, K)`.

/// Largest `n` the lookup table covers.
pub const TABLE_N: usize = 32;
/// Largest `k` the lookup table covers.
pub const TABLE_K: usize = 4;

/// Binomial coefficient `n choose k`.
///
/// Evaluated as the falling product `n * (n-1) * ... * (n-k+1)` followed by
/// division by `2, 3, ..., k`, so every intermediate fits in 32 bits for the
/// sizes used here. Returns 0 when `n < k`.
pub const fn choose(n: u32, k: u32) -> u32 {
    if n < k {
        return 0;
    }
    if n == k || k == 0 {
        return 1;
    }
    let mut result = n;
    let mut x = n - 1;
    while x > n - k {
        result *= x;
        x -= 1;
    }
    let mut d = 2;
    while d <= k {
        result /= d;
        d += 1;
    }
    result
}

const fn build_table() -> [[u32; TABLE_K + 1]; TABLE_N + 1] {
    let mut table = [[0u32; TABLE_K + 1]; TABLE_N + 1];
    let mut n = 0;
    while n <= TABLE_N {
        let mut k = 0;
        while k <= TABLE_K {
            table[n][k] = choose(n as u32, k as u32);
            k += 1;
        }
        n += 1;
    }
    table
}

static CHOOSE: [[u32; TABLE_K + 1]; TABLE_N + 1] = build_table();

#[inline]
fn choose_fast(n: u32, k: usize) -> u32 {
    match CHOOSE.get(n as usize) {
        Some(row) => row[k],
        None => choose(n, k as u32),
    }
}

/// Rank an ascending K-subset.
pub fn rank<const K: usize>(subset: &[u8; K]) -> u32 {
    debug_assert!(subset.windows(2).all(|w| w[0] < w[1]), "subset must be ascending: {subset:?}");
    subset
        .iter()
        .enumerate()
        .map(|(i, &c)| choose_fast(c as u32, i + 1))
        .sum()
}

/// Inverse of [`rank`]: the ascending K-subset with the given rank.
///
/// Peels off the largest element first: for `k = K..1`, the element is the
/// largest `n` with `choose(n, k) <= rank`.
pub fn unrank<const K: usize>(mut rank: u32) -> [u8; K] {
    let mut out = [0u8; K];
    for k in (1..=K).rev() {
        let mut n = k as u32 - 1;
        while choose_fast(n + 1, k) <= rank {
            n += 1;
        }
        rank -= choose_fast(n, k);
        out[k - 1] = n as u8;
    }
    out
}
