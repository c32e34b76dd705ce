//! rudiments Examples
//!
//! This example walks through each utility:
//! - Matrix reductions and the summary report
//! - Binary and other-radix conversion
//! - Factorials and binomial coefficients, including overflow
//! - Palindrome checks

use rudiments::prelude::*;

fn main() -> Result<(), RudimentsError> {
    println!("{}", "=".repeat(60));
    println!("rudiments Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_matrix()?;
    example_2_base_conversion()?;
    example_3_combinatorics()?;
    example_4_palindromes();

    Ok(())
}

/// Example 1: Matrix Reductions
fn example_1_matrix() -> Result<(), RudimentsError> {
    println!("Example 1: Matrix Reductions");
    println!("{}", "-".repeat(60));

    let m = SquareMatrix::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]])?;
    println!("Matrix:\n{}", m);
    println!("{}", summarize(&m)?);

    let toolkit = Rudiments::new().max_dimension(16).build()?;
    let big = toolkit.identity::<i64>(16)?;
    println!("Trace of the 16x16 identity: {}", toolkit.diagonal_sum(&big)?);
    println!();
    Ok(())
}

/// Example 2: Base Conversion
fn example_2_base_conversion() -> Result<(), RudimentsError> {
    println!("Example 2: Base Conversion");
    println!("{}", "-".repeat(60));

    for n in [0u32, 11, 1024, 48879] {
        println!(
            "{:>6} -> binary {:>16}  hex {:>5}",
            n,
            to_binary_digits(n)?.to_string(),
            to_radix_digits(n, 16)?.to_string()
        );
    }

    match to_binary_digits(-5) {
        Ok(d) => println!("-5 -> {}", d),
        Err(e) => println!("-5 -> {}", e),
    }
    println!();
    Ok(())
}

/// Example 3: Combinatorics
fn example_3_combinatorics() -> Result<(), RudimentsError> {
    println!("Example 3: Combinatorics");
    println!("{}", "-".repeat(60));

    println!("5! = {}", factorial(5)?);
    println!("C(5, 2) = {}", binomial_coefficient(5, 2)?);
    println!("C(66, 33) as u64 = {}", binomial_coefficient(66u64, 33)?);
    println!("Row 6 of Pascal's triangle: {:?}", pascal_row::<u32>(6)?);

    for n in [12i32, 13] {
        match factorial(n) {
            Ok(v) => println!("{}! as i32 = {}", n, v),
            Err(e) => println!("{}! as i32 -> {}", n, e),
        }
    }
    println!();
    Ok(())
}

/// Example 4: Palindromes
fn example_4_palindromes() {
    println!("Example 4: Palindromes");
    println!("{}", "-".repeat(60));

    for s in ["", "a", "racecar", "Racecar", "hello"] {
        println!("{:?} palindrome: {}", s, is_palindrome_str(s));
    }
    println!("first mismatch in \"hello\": {:?}", first_mismatch(b"hello"));
}
