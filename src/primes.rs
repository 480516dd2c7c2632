//! Prime numbers in the range of `u32`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::defs::Error;

/// Primality test: tells if the argument is a (provable) prime or not.
/// All numbers below 2 are not prime.
///
/// After ruling out multiples of 2 and 3, candidate divisors follow the
/// 6k±1 wheel up to the square root of `n`.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5u32;
    let mut dx = 2u32;
    while u64::from(i) * u64::from(i) <= u64::from(n) {
        if n % i == 0 {
            return false;
        }
        i += dx;
        dx = 6 - dx;
    }

    true
}

/// Returns the smallest prime greater than or equal to `n`.
///
/// ## Errors
///
///  - Exhausted: no prime at or above `n` is representable in `u32`.
pub fn next_prime(n: u32) -> Result<u32, Error> {
    if n <= 2 {
        return Ok(2);
    }

    let mut n = n | 1;
    if is_prime(n) {
        return Ok(n);
    }

    // move onto the 6k-1 spoke of the wheel
    match n % 3 {
        0 => n = n.checked_add(2).ok_or(Error::Exhausted)?,
        1 => n = n.checked_add(4).ok_or(Error::Exhausted)?,
        _ => {}
    }

    loop {
        if is_prime(n) {
            return Ok(n);
        }
        n = n.checked_add(2).ok_or(Error::Exhausted)?;
        if is_prime(n) {
            return Ok(n);
        }
        n = n.checked_add(4).ok_or(Error::Exhausted)?;
    }
}

/// Returns all primes from 0 to `limit` using the sieve of Atkin,
/// approximately `O(N / log(log N))`.
pub fn sieve_primes(limit: u32) -> Vec<u32> {
    let lim = limit as u64;
    let mut sieve = Vec::new();
    sieve.resize(limit as usize + 1, false);

    // sieve[n] flips for each solution of the Atkin quadratics:
    // n = 4x^2 + y^2 with n % 12 in {1, 5},
    // n = 3x^2 + y^2 with n % 12 = 7,
    // n = 3x^2 - y^2 with x > y and n % 12 = 11
    let mut x = 1u64;
    while x * x <= lim {
        let mut y = 1u64;
        while y * y <= lim {
            let n = 4 * x * x + y * y;
            if n <= lim && (n % 12 == 1 || n % 12 == 5) {
                sieve[n as usize] ^= true;
            }

            let n = 3 * x * x + y * y;
            if n <= lim && n % 12 == 7 {
                sieve[n as usize] ^= true;
            }

            if x > y {
                let n = 3 * x * x - y * y;
                if n <= lim && n % 12 == 11 {
                    sieve[n as usize] ^= true;
                }
            }

            y += 1;
        }
        x += 1;
    }

    // squares of sieved numbers and their multiples are composite
    let mut r = 5u64;
    while r * r <= lim {
        if sieve[r as usize] {
            let mut i = r * r;
            while i <= lim {
                sieve[i as usize] = false;
                i += r * r;
            }
        }
        r += 1;
    }

    let mut primes = Vec::new();
    if limit > 2 {
        primes.push(2);
    }
    if limit > 3 {
        primes.push(3);
    }
    for a in 5..=limit as usize {
        if sieve[a] {
            primes.push(a as u32);
        }
    }

    primes
}

/// Finds the first `n` prime numbers.
pub fn find_primes(n: usize) -> Vec<u32> {
    let mut primes = Vec::with_capacity(n);
    let mut number = 2u32;
    while primes.len() < n {
        if is_prime(number) {
            primes.push(number);
        }
        number += 1;
    }
    primes
}
