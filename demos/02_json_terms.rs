/// json terms - build a mortgage from configuration and print its state
use mortgage_rs::{Mortgage, MortgageTerms};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let terms = MortgageTerms::from_json(
        r#"{
            "loan_amount": "300000",
            "rate": "VARIABLE_1",
            "frequency": "WEEKLY",
            "amortization": 15
        }"#,
    )?;

    let mortgage = Mortgage::try_from(terms)?;
    println!("{}", mortgage.json());

    // same validation as the constructor
    let bad = MortgageTerms::from_json(
        r#"{"loan_amount": "300000", "rate": "FIXED_2", "frequency": "WEEKLY", "amortization": 15}"#,
    )?;
    match bad.build() {
        Ok(_) => println!("unexpectedly valid"),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
