#![no_main]

use arbitrary::Arbitrary;
use fastscan::{ReadErrorPolicy, Scanner, ScannerOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Token,
    I32,
    I64,
    F64,
    Line,
    HasNext,
    HasNextLine,
    Close,
}

#[derive(Arbitrary, Debug)]
struct Plan {
    capacity: u8,
    propagate: bool,
    ops: Vec<Op>,
    input: Vec<u8>,
}

fn drive(plan: Plan) {
    let mut scanner = Scanner::with_options(
        plan.input.as_slice(),
        ScannerOptions {
            buffer_capacity: usize::from(plan.capacity) % 256 + 1,
            read_error_policy: if plan.propagate {
                ReadErrorPolicy::Propagate
            } else {
                ReadErrorPolicy::DegradeToEof
            },
        },
    );

    for op in plan.ops {
        match op {
            Op::Token => {
                let _ = scanner.next_token();
            }
            Op::I32 => {
                let _ = scanner.next_i32();
            }
            Op::I64 => {
                let _ = scanner.next_i64();
            }
            Op::F64 => {
                let _ = scanner.next_f64();
            }
            Op::Line => {
                let _ = scanner.next_line();
            }
            Op::HasNext => {
                // Lookahead must be idempotent, including across refills.
                let first = scanner.has_next();
                let second = scanner.has_next();
                if let (Ok(a), Ok(b)) = (first, second) {
                    assert_eq!(a, b, "has_next is not idempotent");
                }
            }
            Op::HasNextLine => {
                let first = scanner.has_next_line();
                let second = scanner.has_next_line();
                if let (Ok(a), Ok(b)) = (first, second) {
                    assert_eq!(a, b, "has_next_line is not idempotent");
                }
            }
            Op::Close => {
                scanner.close();
            }
        }
    }
}

fuzz_target!(|plan: Plan| drive(plan));
