//! Palindrome checks over sequences.
//!
//! All checks compare elements exactly: strings are compared `char` by `char`
//! with no case folding and no whitespace or punctuation removal, so
//! `"Racecar"` and `"taco cat"` are **not** palindromes. Normalise the input
//! first if looser matching is wanted.

/// Index pair `(left, right)` of the first mismatch found scanning inward
/// from both ends, or `None` if the sequence is a palindrome.
pub fn first_mismatch<T: PartialEq>(seq: &[T]) -> Option<(usize, usize)> {
    if seq.len() < 2 {
        return None;
    }

    let mut left = 0;
    let mut right = seq.len() - 1;
    while left < right {
        if seq[left] != seq[right] {
            return Some((left, right));
        }
        left += 1;
        right -= 1;
    }
    None
}

/// Whether `seq` reads the same forwards and backwards.
///
/// Empty and single-element sequences are palindromes. Comparison is exact
/// element equality.
#[inline]
pub fn is_palindrome<T: PartialEq>(seq: &[T]) -> bool {
    first_mismatch(seq).is_none()
}

/// Whether `s` reads the same forwards and backwards, compared by `char`.
///
/// Case-sensitive; whitespace is significant. Does not allocate.
pub fn is_palindrome_str(s: &str) -> bool {
    let mut chars = s.chars();
    loop {
        match (chars.next(), chars.next_back()) {
            (Some(front), Some(back)) if front != back => return false,
            (Some(_), Some(_)) => continue,
            // Pointers met on the middle char, or crossed.
            _ => return true,
        }
    }
}
