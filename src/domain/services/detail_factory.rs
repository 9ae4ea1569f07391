use crate::domain::models::user::{Employment, Guarantor, Socials, UserDetails};
use crate::domain::services::seed::{pick, SeededRng};

const MARITAL_STATUSES: [&str; 3] = ["Single", "Married", "Divorced"];
const CHILDREN: [&str; 4] = ["None", "1", "2", "3+"];
const RESIDENCE_TYPES: [&str; 3] = [
    "Parent’s Apartment",
    "Rented Apartment",
    "Owned Apartment",
];
const SECTORS: [&str; 5] = ["FinTech", "Logistics", "Healthcare", "Education", "Retail"];
const EDUCATION_LEVELS: [&str; 4] = ["B.Sc", "HND", "M.Sc", "SSCE"];
const EMPLOYMENT_STATUSES: [&str; 3] = ["Employed", "Unemployed", "Self-employed"];
const DURATIONS: [&str; 5] = ["6 months", "1 year", "2 years", "3 years", "5 years"];
const INCOME_BRACKETS: [&str; 3] = [
    "₦100,000.00 - ₦200,000.00",
    "₦200,000.00 - ₦400,000.00",
    "₦400,000.00 - ₦800,000.00",
];
const GUARANTOR_NAMES: [&str; 4] = ["Debby Ogana", "Chris Ade", "Ifeoma N.", "Seyi A."];
const GUARANTOR_PHONES: [&str; 3] = ["0706780922", "08023456789", "08160000000"];
const GUARANTOR_EMAILS: [&str; 3] = ["debby@gmail.com", "guarantor@mail.com", "support@mail.com"];
const RELATIONSHIPS: [&str; 4] = ["Sister", "Brother", "Friend", "Colleague"];

// The pools above are fixed and non-empty, so pick cannot fail on them.
fn draw<'a>(rng: &mut SeededRng, pool: &'a [&'a str]) -> &'a str {
    pick(rng, pool).map(|v| *v).unwrap_or("")
}

fn guarantor(rng: &mut SeededRng) -> Guarantor {
    Guarantor {
        full_name: draw(rng, &GUARANTOR_NAMES).to_string(),
        phone: draw(rng, &GUARANTOR_PHONES).to_string(),
        email: draw(rng, &GUARANTOR_EMAILS).to_string(),
        relationship: draw(rng, &RELATIONSHIPS).to_string(),
    }
}

fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Builds the synthetic enrichment block for one user. Deterministic in the
/// seed: the list screen and the detail screen must reconstruct the exact same
/// values without re-fetching, so every field is drawn from one seeded
/// sequence in a fixed order.
pub fn create_user_details(seed: &str, full_name: &str) -> UserDetails {
    let mut rng = SeededRng::new(seed);
    let handle = full_name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    let marital_status = draw(&mut rng, &MARITAL_STATUSES).to_string();
    let children = draw(&mut rng, &CHILDREN).to_string();
    let residence_type = draw(&mut rng, &RESIDENCE_TYPES).to_string();
    let sector = draw(&mut rng, &SECTORS).to_string();

    let bvn = ((10_000_000_000f64 + rng.next_f64() * 90_000_000_000f64) as u64).to_string();

    let employment = Employment {
        level_of_education: draw(&mut rng, &EDUCATION_LEVELS).to_string(),
        employment_status: draw(&mut rng, &EMPLOYMENT_STATUSES).to_string(),
        sector,
        duration: draw(&mut rng, &DURATIONS).to_string(),
        office_email: format!("{}@lendsqr.com", handle),
        monthly_income: draw(&mut rng, &INCOME_BRACKETS).to_string(),
        loan_repayment: format!(
            "₦{}",
            thousands((20_000f64 + rng.next_f64() * 100_000f64) as u64)
        ),
    };

    let socials = Socials {
        twitter: format!("@{}", handle),
        facebook: full_name.to_string(),
        instagram: format!("@{}", handle),
    };

    UserDetails {
        bvn,
        marital_status,
        children,
        residence_type,
        employment,
        socials,
        guarantors: vec![guarantor(&mut rng), guarantor(&mut rng)],
    }
}
