/// quick start - minimal example to get started
use mortgage_rs::{Money, Mortgage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a $682,912.43 mortgage at the 1-year fixed rate, paid monthly over 30 years
    let mut mortgage = Mortgage::new("682912.43".parse::<Money>()?, "FIXED_1", "MONTHLY", 30)?;

    println!("{}", mortgage);
    println!("{}", mortgage.to_debug_string());

    // amounts held in cents convert through from_minor
    mortgage.set_loan_amount(Money::from_minor(45_000_000, 2)?)?;
    println!("\n{}", mortgage);

    Ok(())
}
