use std::env;
use std::process::ExitCode;

use numsort::{parse_int_lossy, render};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        let program = args.first().map_or("numsort", String::as_str);
        println!("Usage: {program} <num1> <num2> ... <numN>");
        return ExitCode::from(1);
    }

    let tokens = &args[1..];
    let mut numbers: Vec<i32> = Vec::new();
    if numbers.try_reserve_exact(tokens.len()).is_err() {
        println!("Memory allocation failed");
        return ExitCode::from(1);
    }
    numbers.extend(tokens.iter().map(|token| parse_int_lossy(token)));

    quicksort::sort(&mut numbers);

    print!("{}", render(&numbers));

    ExitCode::SUCCESS
}
