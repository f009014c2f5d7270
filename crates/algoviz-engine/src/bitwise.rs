//! Bit manipulation: XOR swap and set-bit counting.

use algoviz_core::action::bin8;
use algoviz_core::{BitwiseAction, Trace};

/// Largest operand [`bitwise_swap`] renders; binary strings are eight digits.
pub const MAX_SWAP_OPERAND: i64 = 255;

/// Swaps `a` and `b` with three XORs, showing every intermediate value in
/// binary. Operands must lie in `0..=255`.
pub fn bitwise_swap(a: i64, b: i64) -> Trace {
    let in_range = |v: i64| (0..=MAX_SWAP_OPERAND).contains(&v);
    if !in_range(a) || !in_range(b) {
        return Trace::error(format!(
            "Values must be between 0 and {MAX_SWAP_OPERAND} to fit in 8 bits."
        ));
    }
    let (mut a, mut b) = (a as u64, b as u64);

    let mut trace = Trace::new();
    trace.emit(
        BitwiseAction::SwapInitial {
            a,
            b,
            bin_a: bin8(a),
            bin_b: bin8(b),
        },
        "Initial values.",
    );

    // a ^= b; b ^= a; a ^= b
    for (round, result_var) in [(1, "a"), (2, "b"), (3, "a")] {
        let result = a ^ b;
        trace.emit(
            BitwiseAction::XorOperation {
                var1: "a",
                val1: a,
                bin1: bin8(a),
                var2: "b",
                val2: b,
                bin2: bin8(b),
                result_var,
                result_val: result,
                result_bin: bin8(result),
            },
            format!("Step {round}: {result_var} = a XOR b ({a} ^ {b}) = {result}"),
        );
        if result_var == "a" {
            a = result;
        } else {
            b = result;
        }
    }

    trace.emit(
        BitwiseAction::FinalState {
            a,
            b,
            bin_a: bin8(a),
            bin_b: bin8(b),
        },
        "Swap complete. Final values.",
    );
    trace
}

/// Counts one bits by testing the lowest bit and shifting right until the
/// value reaches zero.
pub fn count_set_bits(n: u64) -> Trace {
    let mut trace = Trace::new();
    let mut count = 0u32;
    let mut current = n;

    trace.emit(
        BitwiseAction::CountInitial {
            n,
            bin_n: bin8(n),
            count,
        },
        format!("Counting set bits for {n}."),
    );

    while current > 0 {
        let last_bit = current & 1;
        trace.emit(
            BitwiseAction::CheckLastBit {
                n: current,
                bin_n: bin8(current),
                last_bit,
            },
            format!("Checking the last bit of {current}. It is {last_bit}."),
        );
        if last_bit == 1 {
            count += 1;
            trace.emit(
                BitwiseAction::IncrementCount { count },
                "Bit is 1. Incrementing count.",
            );
        }

        let shifted = current >> 1;
        trace.emit(
            BitwiseAction::RightShift {
                n_before: current,
                bin_before: bin8(current),
                n_after: shifted,
                bin_after: bin8(shifted),
            },
            format!("Right-shifting {current} to get {shifted}."),
        );
        current = shifted;
    }

    trace.emit(
        BitwiseAction::CountComplete { result: count, n },
        format!("Finished. The number of set bits in {n} is {count}."),
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::Action;

    #[test]
    fn swap_exchanges_values() {
        let trace = bitwise_swap(5, 9);
        assert_eq!(
            trace.action_names(),
            vec![
                "initial_state",
                "xor_operation",
                "xor_operation",
                "xor_operation",
                "final_state",
            ]
        );
        let final_state = trace.last().unwrap();
        assert_eq!(
            final_state.action,
            Action::from(BitwiseAction::FinalState {
                a: 9,
                b: 5,
                bin_a: "00001001".into(),
                bin_b: "00000101".into(),
            })
        );
    }

    #[test]
    fn swap_intermediate_values() {
        let trace = bitwise_swap(5, 9);
        let results: Vec<(&str, u64)> = trace
            .with_name("xor_operation")
            .filter_map(|s| match &s.action {
                Action::Bitwise(BitwiseAction::XorOperation {
                    result_var,
                    result_val,
                    ..
                }) => Some((*result_var, *result_val)),
                _ => None,
            })
            .collect();
        assert_eq!(results, vec![("a", 12), ("b", 5), ("a", 9)]);
    }

    #[test]
    fn swap_rejects_values_outside_a_byte() {
        assert!(bitwise_swap(256, 1).is_error());
        assert!(bitwise_swap(1, -1).is_error());
        assert!(!bitwise_swap(0, 255).is_error());
    }

    #[test]
    fn counts_bits_of_thirteen() {
        let trace = count_set_bits(13);
        assert_eq!(trace.count("check_last_bit"), 4);
        assert_eq!(trace.count("right_shift"), 4);
        assert_eq!(trace.count("increment_count"), 3);
        assert_eq!(
            trace.last().unwrap().action,
            Action::from(BitwiseAction::CountComplete { result: 3, n: 13 })
        );
    }

    #[test]
    fn zero_has_no_bits() {
        let trace = count_set_bits(0);
        assert_eq!(trace.action_names(), vec!["initial_state", "complete"]);
        assert!(trace.last().unwrap().is_complete());
    }
}
