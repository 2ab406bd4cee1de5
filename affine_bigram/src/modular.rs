//! Modular arithmetic over Z/M
//!
//! Values are carried as `i64` so that differences of ring elements can be
//! formed before reduction.

/// Extended Euclidean algorithm
///
/// Returns `(g, x, y)` with `a·x + b·y = g = gcd(a, b)`.
///
/// # Algorithm
/// ```text
/// x0, x1, y0, y1 = 1, 0, 0, 1
/// while b != 0:
///     q = a / b
///     a, b = b, a mod b
///     x0, x1 = x1, x0 - q·x1
///     y0, y1 = y1, y0 - q·y1
/// return a, x0, y0
/// ```
pub fn extended_gcd(mut a: i64, mut b: i64) -> (i64, i64, i64) {
    let (mut x0, mut x1, mut y0, mut y1) = (1i64, 0i64, 0i64, 1i64);

    while b != 0 {
        let q = a / b;
        (a, b) = (b, a % b);
        (x0, x1) = (x1, x0 - q * x1);
        (y0, y1) = (y1, y0 - q * y1);
    }

    (a, x0, y0)
}

pub fn gcd(a: i64, b: i64) -> i64 {
    extended_gcd(a, b).0.abs()
}

/// Multiplicative inverse of `a` modulo `modulus`, if `gcd(a, modulus) = 1`
pub fn modular_inverse(a: i64, modulus: i64) -> Option<i64> {
    let (g, x, _) = extended_gcd(a.rem_euclid(modulus), modulus);
    if g != 1 {
        return None;
    }
    Some(x.rem_euclid(modulus))
}

/// All `x` in `[0, modulus)` with `coeff·x ≡ constant (mod modulus)`
///
/// With `g = gcd(coeff, modulus)` there is one solution when `g = 1`, none
/// when `g ∤ constant`, and otherwise exactly `g` solutions spaced
/// `modulus / g` apart.
pub fn solve_linear_congruence(coeff: i64, constant: i64, modulus: i64) -> Vec<i64> {
    let coeff = coeff.rem_euclid(modulus);
    let constant = constant.rem_euclid(modulus);
    let (g, x, _) = extended_gcd(coeff, modulus);

    if g == 1 {
        return vec![(x * constant).rem_euclid(modulus)];
    }
    // coeff = 0 gives g = modulus; only constant = 0 is solvable then
    if constant % g != 0 {
        return Vec::new();
    }

    let reduced_modulus = modulus / g;
    let (_, x, _) = extended_gcd(coeff / g, reduced_modulus);
    let base = (x * (constant / g)).rem_euclid(reduced_modulus);

    (0..g).map(|i| base + i * reduced_modulus).collect()
}
