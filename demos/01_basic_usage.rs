/// basic usage - change terms and watch the payment move
use mortgage_rs::{Money, Mortgage, MortgageRate, PaymentFrequency};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=mortgage_rs=trace shows validation and payment details
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut mortgage = Mortgage::new(Money::from_major(500_000), "VARIABLE_5", "BI_WEEKLY", 20)?;
    println!("{}\n", mortgage);

    // compare every rate at the current frequency and term
    for rate in MortgageRate::ALL {
        mortgage.set_rate(rate.name())?;
        println!("{:<10} {:>6} -> {}", rate, rate.value(), mortgage.calculate_payment().to_currency_string());
    }
    println!();

    // compare payment frequencies
    for frequency in PaymentFrequency::ALL {
        mortgage.set_frequency(frequency.name())?;
        println!(
            "{:<9} ({} payments) -> {}",
            frequency.display_name(),
            mortgage.total_payments(),
            mortgage.calculate_payment().to_currency_string()
        );
    }
    println!();

    // rejected changes leave the record untouched
    if let Err(e) = mortgage.set_amortization(35) {
        println!("rejected: {}", e);
    }
    if let Err(e) = mortgage.set_loan_amount(Money::ZERO) {
        println!("rejected: {}", e);
    }
    println!("\n{}", mortgage.to_debug_string());

    Ok(())
}
